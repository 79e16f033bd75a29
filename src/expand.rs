use crate::prelude::*;
use crate::statistics::Statistics;
use crate::unify::unify_literals;
use crate::util::list::List;

/// How sibling subgoals of a rule application are scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Plain left-to-right continuation folding.
    Sequential,
    /// Divide-and-conquer budget splitting with repetition checking. Same
    /// success/failure set as `Sequential`, usually far fewer expansions.
    Balanced,
}

impl Strategy {
    pub fn new(tag: &str) -> Self {
        match tag {
            "sequential" => Self::Sequential,
            "balanced" => Self::Balanced,
            _ => unreachable!(),
        }
    }
}

/// The state threaded through the search: substitution environment, the
/// remaining subgoal budget and the rename counter. Cloning is cheap; a
/// fresh tuple is made per deepening iteration and dropped wholesale when
/// that iteration fails.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) bindings: Bindings,
    pub(crate) budget: i64,
    pub(crate) counter: u32,
}

impl State {
    pub(crate) fn new(budget: i64) -> Self {
        Self {
            bindings: Bindings::default(),
            budget,
            counter: 0,
        }
    }
}

/// Success continuation. A goal that closes hands the resulting state to its
/// continuation; an `Err` from the continuation re-enters the goal's
/// remaining alternatives, which is what makes backtracking across sibling
/// goals work without any undo machinery.
pub(crate) type Cont<'a> = dyn Fn(State) -> Fallible<State> + 'a;

type Ancestors = List<Literal>;

pub(crate) struct Expansion<'a> {
    rules: &'a [Rule],
    strategy: Strategy,
    statistics: &'a Statistics,
}

impl<'a> Expansion<'a> {
    pub(crate) fn new(
        rules: &'a [Rule],
        strategy: Strategy,
        statistics: &'a Statistics,
    ) -> Self {
        Self {
            rules,
            strategy,
            statistics,
        }
    }

    /// Model elimination of a single goal. Alternatives in order: ancestor
    /// resolution first (free of budget, and required for completeness, not
    /// merely preferred), then Prolog-style extension by each rule. The
    /// first alternative whose continuation succeeds wins.
    pub(crate) fn goal(
        &self,
        ancestors: &Ancestors,
        goal: &Literal,
        cont: &Cont,
        state: State,
    ) -> Fallible<State> {
        if state.budget < 0 {
            return Err(Failure::BudgetExceeded);
        }
        self.statistics.increment_expanded_goals();
        if self.strategy == Strategy::Balanced
            && ancestors
                .iter()
                .any(|ancestor| self.repeats(&state.bindings, goal, ancestor))
        {
            return Err(Failure::Repetition);
        }

        for ancestor in ancestors.iter() {
            if let Ok(bindings) = unify_literals(&state.bindings, goal, &ancestor.negated()) {
                self.statistics.increment_ancestor_resolutions();
                let resolved = State {
                    bindings,
                    budget: state.budget,
                    counter: state.counter,
                };
                if let Ok(found) = cont(resolved) {
                    return Ok(found);
                }
            }
        }

        let path = ancestors.push(goal.clone());
        for rule in self.rules {
            let (renamed, counter) = rule.rename(state.counter);
            self.statistics.increment_renamed_rules();
            if let Ok(bindings) = unify_literals(&state.bindings, goal, &renamed.conclusion) {
                let budget = state.budget - renamed.premises.len() as i64;
                let extended = State {
                    bindings,
                    budget,
                    counter,
                };
                let result = match self.strategy {
                    Strategy::Sequential => {
                        self.sequence(&path, &renamed.premises, cont, extended)
                    }
                    Strategy::Balanced => self.balance(&path, &renamed.premises, cont, extended),
                };
                if let Ok(found) = result {
                    return Ok(found);
                }
            }
        }
        Err(Failure::NoRuleApplies)
    }

    /// Left-to-right conjunction: goal i + 1 runs inside goal i's
    /// continuation, so its failure resumes goal i's alternatives before the
    /// list as a whole gives up.
    fn sequence(
        &self,
        ancestors: &Ancestors,
        goals: &[Literal],
        cont: &Cont,
        state: State,
    ) -> Fallible<State> {
        match goals.split_first() {
            None => cont(state),
            Some((goal, rest)) => {
                let remaining = |state: State| self.sequence(ancestors, rest, cont, state);
                self.goal(ancestors, goal, &remaining, state)
            }
        }
    }

    /// Divide-and-conquer conjunction: two or more siblings are split in
    /// half, the first half keeping `n/2` of the budget and the second half
    /// the rest plus whatever the first half left over. An unbalanced
    /// outcome (second half consuming no more than the threshold) fails the
    /// whole split; the swapped retry then covers it.
    fn balance(
        &self,
        ancestors: &Ancestors,
        goals: &[Literal],
        cont: &Cont,
        state: State,
    ) -> Fallible<State> {
        if state.budget < 0 {
            return Err(Failure::BudgetExceeded);
        }
        match goals.len() {
            0 => cont(state),
            1 => self.goal(ancestors, &goals[0], cont, state),
            len => {
                let (first, second) = goals.split_at(len / 2);
                let n1 = state.budget / 2;
                let n2 = state.budget - n1;
                match self.split(ancestors, first, second, (n1, n2, -1), cont, state.clone()) {
                    Ok(found) => Ok(found),
                    Err(_) => self.split(ancestors, second, first, (n1, n2, 0), cont, state),
                }
            }
        }
    }

    fn split(
        &self,
        ancestors: &Ancestors,
        first: &[Literal],
        second: &[Literal],
        (n1, n2, n3): (i64, i64, i64),
        cont: &Cont,
        state: State,
    ) -> Fallible<State> {
        let after_first = |done: State| {
            let leftover = done.budget;
            let after_second = |done: State| {
                // Leftover accounting: the second half consumed
                // (n2 + leftover) - done.budget, which must exceed n3.
                if n2 + leftover <= n3 + done.budget {
                    Err(Failure::BudgetExceeded)
                } else {
                    cont(done)
                }
            };
            let budget = n2 + leftover;
            self.balance(
                ancestors,
                second,
                &after_second,
                State { budget, ..done },
            )
        };
        self.balance(ancestors, first, &after_first, State { budget: n1, ..state })
    }

    /// Non-binding probe: the goal is literal-equal to the ancestor under
    /// the current environment iff they unify without extending it.
    fn repeats(&self, bindings: &Bindings, goal: &Literal, ancestor: &Literal) -> bool {
        match unify_literals(bindings, goal, ancestor) {
            Ok(extended) => extended.same(bindings),
            Err(_) => false,
        }
    }
}
