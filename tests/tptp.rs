use meson::io::tptp;
use meson::symbol::Name;
use meson::{Atom, Literal, Term, Variable};
use std::fs;

const PROBLEM: &str = "
cnf(a1, axiom, p(X) | ~q(X, f(c))).
cnf(a2, axiom, $false | r).
cnf(a3, negated_conjecture, c != f(c)).
cnf(a4, axiom, g(Y) = c | ~p(Y)).
";

#[test]
fn loads_cnf_problems() {
    let path = std::env::temp_dir().join("meson_loads_cnf_problems.p");
    fs::write(&path, PROBLEM).unwrap();
    let mut problem = tptp::load(&path);
    fs::remove_file(&path).ok();

    let symbols = &mut problem.symbols;
    let p = symbols.intern("p", 1);
    let q = symbols.intern("q", 2);
    let f = symbols.intern("f", 1);
    let c = symbols.intern("c", 0);
    let r = symbols.intern("r", 0);
    let g = symbols.intern("g", 1);
    let equals = symbols.intern("=", 2);
    assert_eq!(*symbols.name(p), Name::Regular("p".to_string()));
    assert_eq!(symbols.arity(q), 2);

    let constant = Term::Fun(c, vec![]);
    let f_c = Term::Fun(f, vec![constant.clone()]);

    assert_eq!(problem.clauses.len(), 4);
    assert_eq!(
        problem.clauses[0].literals(),
        &[
            Literal::new(true, Atom::new(p, vec![Term::Var(Variable(0))])),
            Literal::new(
                false,
                Atom::new(q, vec![Term::Var(Variable(0)), f_c.clone()])
            ),
        ]
    );

    // the $false disjunct drops out
    assert_eq!(
        problem.clauses[1].literals(),
        &[Literal::new(true, Atom::new(r, vec![]))]
    );

    // infix inequality becomes a negative equality literal
    assert_eq!(
        problem.clauses[2].literals(),
        &[Literal::new(
            false,
            Atom::new(equals, vec![constant.clone(), f_c])
        )]
    );

    // variable numbering restarts names per clause but never reuses numbers
    assert_eq!(
        problem.clauses[3].literals(),
        &[
            Literal::new(
                true,
                Atom::new(
                    equals,
                    vec![
                        Term::Fun(g, vec![Term::Var(Variable(1))]),
                        constant
                    ]
                )
            ),
            Literal::new(false, Atom::new(p, vec![Term::Var(Variable(1))])),
        ]
    );
}

#[test]
fn loaded_problems_are_provable() {
    let path = std::env::temp_dir().join("meson_loaded_problems_are_provable.p");
    fs::write(
        &path,
        "cnf(a, axiom, p(X)).\ncnf(c, negated_conjecture, ~p(f(Y))).\n",
    )
    .unwrap();
    let problem = tptp::load(&path);
    fs::remove_file(&path).ok();

    let depth = meson::puremeson(&problem.clauses).unwrap();
    assert!(depth <= 1);
}
