use crate::clausify;
use crate::clausify::Formula;
use crate::expand::{Cont, Expansion, State, Strategy};
use crate::prelude::*;
use crate::statistics::Statistics;
use crate::util::list::List;

/// Iterative deepening: try `attempt` with budgets 0, 1, 2, ... until one
/// succeeds, carrying nothing over between iterations. Unbounded unless a
/// limit is given, so satisfiable inputs never return without one.
pub fn deepen<T, F: FnMut(usize) -> Fallible<T>>(
    limit: Option<usize>,
    mut attempt: F,
) -> Fallible<(usize, T)> {
    let mut budget = 0;
    loop {
        if limit.map_or(false, |limit| budget > limit) {
            return Err(Failure::SearchExhausted);
        }
        if let Ok(found) = attempt(budget) {
            return Ok((budget, found));
        }
        budget += 1;
    }
}

pub struct Search {
    strategy: Strategy,
    limit: Option<usize>,
    statistics: Statistics,
}

impl Default for Search {
    fn default() -> Self {
        Self::new(Strategy::Balanced)
    }
}

impl Search {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            limit: None,
            statistics: Statistics::default(),
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Refute a clause set: compile every clause to its contrapositives and
    /// deepen over proving falsum from an empty path. Returns the first
    /// budget at which the refutation closes.
    pub fn refute(&self, clauses: &[Clause]) -> Fallible<usize> {
        let rules: Vec<Rule> = clauses.iter().flat_map(contrapositives).collect();
        let (depth, _) = deepen(self.limit, |budget| {
            self.statistics.increment_deepening_iterations();
            self.start(&rules, budget)
        })?;
        Ok(depth)
    }

    /// One search at a fixed budget, no deepening.
    pub fn refute_within(&self, clauses: &[Clause], budget: usize) -> Fallible<()> {
        let rules: Vec<Rule> = clauses.iter().flat_map(contrapositives).collect();
        self.start(&rules, budget).map(|_| ())
    }

    /// Decide validity of a closed formula: its negation is universally
    /// closed, Skolemized and split into clausal disjuncts, every one of
    /// which must be refuted. Returns one success depth per disjunct.
    pub fn prove(&self, symbols: &mut Symbols, formula: Formula) -> Fallible<Vec<usize>> {
        clausify::clausal_disjuncts(symbols, formula)
            .iter()
            .map(|clauses| self.refute(clauses))
            .collect()
    }

    fn start(&self, rules: &[Rule], budget: usize) -> Fallible<State> {
        let expansion = Expansion::new(rules, self.strategy, &self.statistics);
        let finish: &Cont = &|state: State| Ok(state);
        expansion.goal(
            &List::default(),
            &Literal::falsum(),
            finish,
            State::new(budget as i64),
        )
    }
}

/// Refute a clause set with the default search, reporting the success depth.
pub fn puremeson(clauses: &[Clause]) -> Fallible<usize> {
    Search::default().refute(clauses)
}

/// Prove a closed formula valid with the default search, reporting one
/// success depth per clausal disjunct of its negation.
pub fn meson(symbols: &mut Symbols, formula: Formula) -> Fallible<Vec<usize>> {
    Search::default().prove(symbols, formula)
}
