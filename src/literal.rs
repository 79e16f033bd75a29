use crate::prelude::*;

/// A predicate applied to arguments. Unification treats this as a compound
/// term keyed by the predicate symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Atom {
    pub symbol: Id<Symbol>,
    pub args: Vec<Term>,
}

impl Atom {
    pub fn new(symbol: Id<Symbol>, args: Vec<Term>) -> Self {
        Self { symbol, args }
    }

    pub fn falsum() -> Self {
        Self {
            symbol: Symbols::falsum(),
            args: vec![],
        }
    }

    pub fn is_falsum(&self) -> bool {
        self.symbol == Symbols::falsum()
    }

    pub fn vars(&self, vars: &mut Vec<Variable>) {
        for arg in &self.args {
            arg.vars(vars);
        }
    }
}

/// A signed atom. The contradiction goal is the positive literal over the
/// reserved falsum symbol; negation below a negation never survives clausal
/// form, so a polarity bit covers every literal shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    pub polarity: bool,
    pub atom: Atom,
}

impl Literal {
    pub fn new(polarity: bool, atom: Atom) -> Self {
        Self { polarity, atom }
    }

    pub fn falsum() -> Self {
        Self::new(true, Atom::falsum())
    }

    pub fn is_falsum(&self) -> bool {
        self.polarity && self.atom.is_falsum()
    }

    #[must_use]
    pub fn negated(&self) -> Self {
        Self::new(!self.polarity, self.atom.clone())
    }
}
