use crate::prelude::*;

/// Whether binding `x` to `term` would be trivial, acceptable, or cyclic,
/// chasing existing bindings. `Ok(true)` means `term` chases to `x` itself,
/// a benign cycle that needs no new binding. A proper occurrence of `x`
/// inside the chase is an occurs-check violation.
fn classify(bindings: &Bindings, x: Variable, term: &Term) -> Fallible<bool> {
    match term {
        Term::Var(y) if *y == x => Ok(true),
        Term::Var(y) => match bindings.lookup(*y) {
            Some(binding) => classify(bindings, x, binding),
            None => Ok(false),
        },
        Term::Fun(_, args) => {
            for arg in args {
                if classify(bindings, x, arg)? {
                    return Err(Failure::CyclicUnification);
                }
            }
            Ok(false)
        }
    }
}

/// Most general simultaneous unifier of the given term pairs, as an extension
/// of `bindings`. The input environment is never modified; if no pair adds a
/// binding the result shares its head with the input (see `Bindings::same`).
pub fn unify(bindings: &Bindings, pairs: Vec<(Term, Term)>) -> Fallible<Bindings> {
    let mut env = bindings.clone();
    let mut worklist = pairs;
    while let Some((left, right)) = worklist.pop() {
        match (left, right) {
            (Term::Fun(f, fargs), Term::Fun(g, gargs)) => {
                if f != g {
                    return Err(Failure::ImpossibleUnification);
                }
                debug_assert_eq!(fargs.len(), gargs.len());
                worklist.extend(fargs.into_iter().zip(gargs));
            }
            (Term::Var(x), term) | (term, Term::Var(x)) => {
                if let Some(binding) = env.lookup(x) {
                    let binding = binding.clone();
                    worklist.push((binding, term));
                } else if !classify(&env, x, &term)? {
                    env = env.bind(x, term);
                }
            }
        }
    }
    Ok(env)
}

pub fn unify_atoms(bindings: &Bindings, left: &Atom, right: &Atom) -> Fallible<Bindings> {
    if left.symbol != right.symbol {
        return Err(Failure::ImpossibleUnification);
    }
    debug_assert_eq!(left.args.len(), right.args.len());
    let pairs = left
        .args
        .iter()
        .cloned()
        .zip(right.args.iter().cloned())
        .collect();
    unify(bindings, pairs)
}

/// Literals unify when their polarities agree and their atoms unify; falsum
/// only ever unifies with falsum.
pub fn unify_literals(bindings: &Bindings, left: &Literal, right: &Literal) -> Fallible<Bindings> {
    if left.polarity != right.polarity || left.atom.is_falsum() != right.atom.is_falsum() {
        return Err(Failure::LiteralShapeMismatch);
    }
    unify_atoms(bindings, &left.atom, &right.atom)
}
