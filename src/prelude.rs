pub(crate) use crate::bindings::Bindings;
pub(crate) use crate::clause::Clause;
pub(crate) use crate::error::{Failure, Fallible};
pub(crate) use crate::literal::{Atom, Literal};
pub(crate) use crate::rule::{contrapositives, Rule};
pub(crate) use crate::symbol::{Symbol, Symbols};
pub(crate) use crate::term::{Term, Variable};
pub(crate) use crate::util::block::Block;
pub(crate) use crate::util::id::Id;
