use crate::prelude::*;

/// First-order formulas as handed to `meson`. Quantified variables are
/// assumed distinct from each other and from free variables.
#[derive(Clone, Debug)]
pub enum Formula {
    Atom(Atom),
    Not(Box<Formula>),
    And(Vec<Formula>),
    Or(Vec<Formula>),
    Imp(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
    Forall(Variable, Box<Formula>),
    Exists(Variable, Box<Formula>),
}

impl Formula {
    pub fn negated(self) -> Self {
        Self::Not(Box::new(self))
    }

    fn free_variables(&self, bound: &mut Vec<Variable>, free: &mut Vec<Variable>) {
        match self {
            Formula::Atom(atom) => {
                let mut vars = vec![];
                atom.vars(&mut vars);
                free.extend(vars.into_iter().filter(|x| !bound.contains(x)));
            }
            Formula::Not(f) => f.free_variables(bound, free),
            Formula::And(fs) | Formula::Or(fs) => {
                for f in fs {
                    f.free_variables(bound, free);
                }
            }
            Formula::Imp(p, q) | Formula::Iff(p, q) => {
                p.free_variables(bound, free);
                q.free_variables(bound, free);
            }
            Formula::Forall(x, f) | Formula::Exists(x, f) => {
                bound.push(*x);
                f.free_variables(bound, free);
                bound.pop();
            }
        }
    }
}

/// Negation normal form after Skolemization. Universal quantifiers survive
/// as barriers: the disjunct split never distributes through them, matching
/// the treatment of quantified subformulas as units.
#[derive(Clone, Debug)]
enum Nnf {
    Lit(Literal),
    And(Vec<Nnf>),
    Or(Vec<Nnf>),
    Forall(Variable, Box<Nnf>),
}

#[derive(Default)]
struct Skolemizer {
    universals: Vec<Variable>,
    skolems: Vec<(Variable, Term)>,
}

impl Skolemizer {
    /// Polarity-driven walk: `polarity` false means the subformula occurs
    /// negated. Implications and equivalences are lowered structurally;
    /// existential-strength variables become Skolem functions of the
    /// enclosing universals.
    fn formula(&mut self, symbols: &mut Symbols, mut polarity: bool, mut formula: Formula) -> Nnf {
        while let Formula::Not(negated) = formula {
            polarity = !polarity;
            formula = *negated;
        }

        match (polarity, formula) {
            (_, Formula::Atom(atom)) => {
                Nnf::Lit(Literal::new(polarity, self.substituted(atom)))
            }
            (true, Formula::And(fs)) | (false, Formula::Or(fs)) => {
                let fs = fs
                    .into_iter()
                    .map(|f| self.formula(symbols, polarity, f))
                    .collect();
                Nnf::And(fs)
            }
            (true, Formula::Or(fs)) | (false, Formula::And(fs)) => {
                let fs = fs
                    .into_iter()
                    .map(|f| self.formula(symbols, polarity, f))
                    .collect();
                Nnf::Or(fs)
            }
            (true, Formula::Imp(p, q)) => {
                let p = self.formula(symbols, false, *p);
                let q = self.formula(symbols, true, *q);
                Nnf::Or(vec![p, q])
            }
            (false, Formula::Imp(p, q)) => {
                let p = self.formula(symbols, true, *p);
                let q = self.formula(symbols, false, *q);
                Nnf::And(vec![p, q])
            }
            (_, Formula::Iff(p, q)) => {
                let both = Nnf::And(vec![
                    self.formula(symbols, true, (*p).clone()),
                    self.formula(symbols, polarity, (*q).clone()),
                ]);
                let neither = Nnf::And(vec![
                    self.formula(symbols, false, *p),
                    self.formula(symbols, !polarity, *q),
                ]);
                Nnf::Or(vec![both, neither])
            }
            (true, Formula::Forall(x, f)) | (false, Formula::Exists(x, f)) => {
                self.universals.push(x);
                let f = self.formula(symbols, polarity, *f);
                self.universals.pop();
                Nnf::Forall(x, Box::new(f))
            }
            (true, Formula::Exists(x, f)) | (false, Formula::Forall(x, f)) => {
                let arity = self.universals.len() as u32;
                let symbol = symbols.skolem(arity);
                let skolem =
                    Term::Fun(symbol, self.universals.iter().copied().map(Term::Var).collect());
                self.skolems.push((x, skolem));
                let f = self.formula(symbols, polarity, *f);
                self.skolems.pop();
                f
            }
            (_, Formula::Not(_)) => unreachable!(),
        }
    }

    fn substituted(&self, atom: Atom) -> Atom {
        let args = atom.args.into_iter().map(|arg| self.term(arg)).collect();
        Atom::new(atom.symbol, args)
    }

    fn term(&self, term: Term) -> Term {
        match term {
            Term::Var(x) => {
                if let Some((_, skolem)) = self.skolems.iter().find(|(y, _)| *y == x) {
                    skolem.clone()
                } else {
                    Term::Var(x)
                }
            }
            Term::Fun(f, args) => {
                Term::Fun(f, args.into_iter().map(|arg| self.term(arg)).collect())
            }
        }
    }
}

fn generalize(formula: Formula) -> Formula {
    let mut free = vec![];
    formula.free_variables(&mut vec![], &mut free);
    free.sort();
    free.dedup();
    free.into_iter()
        .rev()
        .fold(formula, |f, x| Formula::Forall(x, Box::new(f)))
}

/// Disjunctive split: distribute And over Or down to literal and
/// quantifier units. Each returned list is one disjunct, a conjunction of
/// units; the formula is unsatisfiable iff every disjunct is.
fn disjuncts(formula: Nnf) -> Vec<Vec<Nnf>> {
    match formula {
        Nnf::Or(fs) => fs.into_iter().flat_map(disjuncts).collect(),
        Nnf::And(fs) => fs.into_iter().fold(vec![vec![]], |split, f| {
            let options = disjuncts(f);
            split
                .iter()
                .flat_map(|conjunct| {
                    options.iter().map(move |option| {
                        let mut combined = conjunct.clone();
                        combined.extend(option.iter().cloned());
                        combined
                    })
                })
                .collect()
        }),
        unit => vec![vec![unit]],
    }
}

/// Clausal form of one conjunct: strip the universal quantifiers (clause
/// variables are implicitly universal) and distribute Or over And.
fn clauses(formula: Nnf) -> Vec<Vec<Literal>> {
    match formula {
        Nnf::Lit(literal) => vec![vec![literal]],
        Nnf::Forall(_, f) => clauses(*f),
        Nnf::And(fs) => fs.into_iter().flat_map(clauses).collect(),
        Nnf::Or(fs) => fs.into_iter().fold(vec![vec![]], |split, f| {
            let options = clauses(f);
            split
                .iter()
                .flat_map(|clause| {
                    options.iter().map(move |option| {
                        let mut combined = clause.clone();
                        combined.extend(option.iter().cloned());
                        combined
                    })
                })
                .collect()
        }),
    }
}

/// The refutation problems for a formula's validity: universally close it,
/// negate, Skolemize, split into disjuncts and convert each disjunct to a
/// clause set. Tautologous and duplicate clauses are dropped.
pub fn clausal_disjuncts(symbols: &mut Symbols, formula: Formula) -> Vec<Vec<Clause>> {
    let negated = generalize(formula).negated();
    let mut skolemizer = Skolemizer::default();
    let matrix = skolemizer.formula(symbols, true, negated);

    disjuncts(matrix)
        .into_iter()
        .map(|conjuncts| {
            let mut set: Vec<Clause> = vec![];
            for conjunct in conjuncts {
                for literals in clauses(conjunct) {
                    let clause = Clause::new(literals);
                    if !clause.is_tautology() && !set.contains(&clause) {
                        set.push(clause);
                    }
                }
            }
            set
        })
        .collect()
}
