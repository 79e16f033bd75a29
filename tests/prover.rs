use meson::clausify::{clausal_disjuncts, Formula};
use meson::{
    meson, puremeson, Atom, Clause, Failure, Literal, Search, Strategy, Symbols, Term, Variable,
};

fn var(n: u32) -> Term {
    Term::Var(Variable(n))
}

struct Fixture {
    symbols: Symbols,
}

impl Fixture {
    fn new() -> Self {
        Self {
            symbols: Symbols::default(),
        }
    }

    fn fun(&mut self, name: &str, args: Vec<Term>) -> Term {
        let symbol = self.symbols.intern(name, args.len() as u32);
        Term::Fun(symbol, args)
    }

    fn literal(&mut self, polarity: bool, name: &str, args: Vec<Term>) -> Literal {
        let symbol = self.symbols.intern(name, args.len() as u32);
        Literal::new(polarity, Atom::new(symbol, args))
    }

    fn atomic(&mut self, name: &str, args: Vec<Term>) -> Formula {
        let symbol = self.symbols.intern(name, args.len() as u32);
        Formula::Atom(Atom::new(symbol, args))
    }
}

#[test]
fn complementary_unit_clauses() {
    let mut fx = Fixture::new();
    let positive = Clause::new(vec![fx.literal(true, "p", vec![var(0)])]);
    let negative = Clause::new(vec![fx.literal(false, "p", vec![var(1)])]);
    let depth = puremeson(&[positive, negative]).unwrap();
    assert!(depth <= 1);
}

#[test]
fn empty_clause_refutes_immediately() {
    assert_eq!(puremeson(&[Clause::new(vec![])]), Ok(0));
}

#[test]
fn satisfiable_set_gives_up_at_the_limit() {
    let mut fx = Fixture::new();
    let positive = Clause::new(vec![fx.literal(true, "p", vec![var(0)])]);
    let search = Search::default().with_limit(Some(5));
    assert_eq!(search.refute(&[positive]), Err(Failure::SearchExhausted));
}

#[test]
fn modus_ponens_chain() {
    // p, p => q, q => r, ~r
    let mut fx = Fixture::new();
    let clauses = vec![
        Clause::new(vec![fx.literal(true, "p", vec![])]),
        Clause::new(vec![
            fx.literal(false, "p", vec![]),
            fx.literal(true, "q", vec![]),
        ]),
        Clause::new(vec![
            fx.literal(false, "q", vec![]),
            fx.literal(true, "r", vec![]),
        ]),
        Clause::new(vec![fx.literal(false, "r", vec![])]),
    ];
    assert!(puremeson(&clauses).is_ok());
}

#[test]
fn chained_extensions() {
    // ~p(x) | p(f(x)) together with p(a) and ~p(f(f(a)))
    let mut fx = Fixture::new();
    let a = fx.fun("a", vec![]);
    let fa = fx.fun("f", vec![a.clone()]);
    let ffa = fx.fun("f", vec![fa]);
    let fx0 = fx.fun("f", vec![var(0)]);
    let clauses = vec![
        Clause::new(vec![
            fx.literal(false, "p", vec![var(0)]),
            fx.literal(true, "p", vec![fx0]),
        ]),
        Clause::new(vec![fx.literal(true, "p", vec![a])]),
        Clause::new(vec![fx.literal(false, "p", vec![ffa])]),
    ];
    assert!(puremeson(&clauses).is_ok());
}

#[test]
fn propositional_unsatisfiable_square() {
    // all four polarity combinations over p, q
    let mut fx = Fixture::new();
    let p = fx.literal(true, "p", vec![]);
    let q = fx.literal(true, "q", vec![]);
    let clauses = vec![
        Clause::new(vec![p.clone(), q.clone()]),
        Clause::new(vec![p.clone(), q.negated()]),
        Clause::new(vec![p.negated(), q.clone()]),
        Clause::new(vec![p.negated(), q.negated()]),
    ];
    assert!(puremeson(&clauses).is_ok());
}

#[test]
fn strategies_agree_across_budgets() {
    let mut fx = Fixture::new();
    let p = fx.literal(true, "p", vec![]);
    let q = fx.literal(true, "q", vec![]);
    let r = fx.literal(true, "r", vec![]);
    let a = fx.fun("a", vec![]);
    let fa = fx.fun("f", vec![a.clone()]);
    let fx0 = fx.fun("f", vec![var(0)]);

    let sets: Vec<Vec<Clause>> = vec![
        // empty clause
        vec![Clause::new(vec![])],
        // complementary units
        vec![
            Clause::new(vec![fx.literal(true, "s", vec![var(0)])]),
            Clause::new(vec![fx.literal(false, "s", vec![var(1)])]),
        ],
        // multi-premise extension: ~p | ~q | r with p, q, ~r
        vec![
            Clause::new(vec![p.negated(), q.negated(), r.clone()]),
            Clause::new(vec![p.clone()]),
            Clause::new(vec![q.clone()]),
            Clause::new(vec![r.negated()]),
        ],
        // needs a step of chaining: s(a), ~s(x) | s(f(x)), ~s(f(a))
        vec![
            Clause::new(vec![fx.literal(true, "s", vec![a.clone()])]),
            Clause::new(vec![
                fx.literal(false, "s", vec![var(0)]),
                fx.literal(true, "s", vec![fx0]),
            ]),
            Clause::new(vec![fx.literal(false, "s", vec![fa])]),
        ],
        // satisfiable: no refutation at any budget
        vec![
            Clause::new(vec![p.clone(), q.clone()]),
            Clause::new(vec![p.negated(), q.clone()]),
        ],
    ];

    let sequential = Search::new(Strategy::Sequential);
    let balanced = Search::new(Strategy::Balanced);
    for clauses in &sets {
        for budget in 0..8 {
            assert_eq!(
                sequential.refute_within(clauses, budget).is_ok(),
                balanced.refute_within(clauses, budget).is_ok(),
                "strategies disagree at budget {}",
                budget
            );
        }
    }
}

#[test]
fn success_depths_match_between_strategies() {
    let mut fx = Fixture::new();
    let p = fx.literal(true, "p", vec![]);
    let q = fx.literal(true, "q", vec![]);
    let r = fx.literal(true, "r", vec![]);
    let clauses = vec![
        Clause::new(vec![p.negated(), q.negated(), r.clone()]),
        Clause::new(vec![p.clone()]),
        Clause::new(vec![q.clone()]),
        Clause::new(vec![r.negated()]),
    ];
    let sequential = Search::new(Strategy::Sequential).refute(&clauses).unwrap();
    let balanced = Search::new(Strategy::Balanced).refute(&clauses).unwrap();
    assert_eq!(sequential, balanced);
}

#[test]
fn excluded_middle_is_valid() {
    let mut fx = Fixture::new();
    let p = fx.atomic("p", vec![]);
    let formula = Formula::Or(vec![p.clone(), p.negated()]);
    assert!(meson(&mut fx.symbols, formula).is_ok());
}

#[test]
fn contradiction_is_invalid() {
    let mut fx = Fixture::new();
    let p = fx.atomic("p", vec![]);
    let formula = Formula::And(vec![p.clone(), p.negated()]);
    let search = Search::default().with_limit(Some(5));
    let result: Result<Vec<_>, _> = clausal_disjuncts(&mut fx.symbols, formula)
        .iter()
        .map(|clauses| search.refute(clauses))
        .collect();
    assert_eq!(result, Err(Failure::SearchExhausted));
}

#[test]
fn universal_implies_existential() {
    let mut fx = Fixture::new();
    let px = fx.atomic("p", vec![var(0)]);
    let py = fx.atomic("p", vec![var(1)]);
    let formula = Formula::Imp(
        Box::new(Formula::Forall(Variable(0), Box::new(px))),
        Box::new(Formula::Exists(Variable(1), Box::new(py))),
    );
    assert!(meson(&mut fx.symbols, formula).is_ok());
}

#[test]
fn no_formula_proves_both_ways() {
    let mut fx = Fixture::new();
    let p = fx.atomic("p", vec![]);
    let formula = Formula::Not(Box::new(Formula::And(vec![p.clone(), p.negated()])));
    assert!(meson(&mut fx.symbols, formula).is_ok());
}

#[test]
fn equivalence_is_reflexive() {
    let mut fx = Fixture::new();
    let p = fx.atomic("p", vec![]);
    let formula = Formula::Iff(Box::new(p.clone()), Box::new(p));
    assert!(meson(&mut fx.symbols, formula).is_ok());
}

#[test]
fn free_variables_are_universally_closed() {
    // p(x) => p(x) is valid once x is generalized
    let mut fx = Fixture::new();
    let px = fx.atomic("p", vec![var(0)]);
    let formula = Formula::Imp(Box::new(px.clone()), Box::new(px));
    assert!(meson(&mut fx.symbols, formula).is_ok());
}

#[test]
fn drinker_paradox() {
    // exists x. (p(x) => forall y. p(y))
    let mut fx = Fixture::new();
    let px = fx.atomic("p", vec![var(0)]);
    let py = fx.atomic("p", vec![var(1)]);
    let formula = Formula::Exists(
        Variable(0),
        Box::new(Formula::Imp(
            Box::new(px),
            Box::new(Formula::Forall(Variable(1), Box::new(py))),
        )),
    );
    assert!(meson(&mut fx.symbols, formula).is_ok());
}

#[test]
fn statistics_record_expansions() {
    let mut fx = Fixture::new();
    let positive = Clause::new(vec![fx.literal(true, "p", vec![])]);
    let negative = Clause::new(vec![fx.literal(false, "p", vec![])]);
    let search = Search::default();
    search.refute(&[positive, negative]).unwrap();
    assert!(search.statistics().expanded_goals() > 0);
}
