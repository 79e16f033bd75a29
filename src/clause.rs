use crate::prelude::*;

/// A disjunction of literals, deduplicated on construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Self {
        let mut deduplicated: Vec<Literal> = vec![];
        for literal in literals {
            if !deduplicated.contains(&literal) {
                deduplicated.push(literal);
            }
        }
        Self {
            literals: deduplicated,
        }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// A clause containing a literal and its own negation is always true and
    /// never contributes to a refutation.
    pub fn is_tautology(&self) -> bool {
        self.literals.iter().any(|literal| {
            self.literals
                .iter()
                .any(|other| other.polarity != literal.polarity && other.atom == literal.atom)
        })
    }
}
