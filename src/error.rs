use thiserror::Error;

/// Why a search alternative did not work out.
///
/// Every variant except `SearchExhausted` is an ordinary backtracking signal,
/// consumed internally by the next alternative; only the top level ever
/// reports one to a caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("function symbols or arities differ")]
    ImpossibleUnification,
    #[error("occurs check failed")]
    CyclicUnification,
    #[error("literal shapes differ")]
    LiteralShapeMismatch,
    #[error("depth budget exceeded")]
    BudgetExceeded,
    #[error("goal repeats an ancestor")]
    Repetition,
    #[error("no rule applies to the goal")]
    NoRuleApplies,
    #[error("search exhausted without a refutation")]
    SearchExhausted,
}

pub type Fallible<T> = Result<T, Failure>;
