pub mod bindings;
pub mod clause;
pub mod clausify;
pub mod error;
mod expand;
pub mod io;
pub mod literal;
pub mod options;
mod prelude;
pub mod rule;
pub mod search;
pub mod statistics;
pub mod symbol;
pub mod term;
pub mod unify;
pub mod util;

pub use crate::bindings::Bindings;
pub use crate::clause::Clause;
pub use crate::clausify::Formula;
pub use crate::error::{Failure, Fallible};
pub use crate::expand::Strategy;
pub use crate::literal::{Atom, Literal};
pub use crate::rule::{contrapositives, Rule};
pub use crate::search::{meson, puremeson, Search};
pub use crate::symbol::{Symbol, Symbols};
pub use crate::term::{Term, Variable};
