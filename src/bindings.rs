use crate::prelude::*;
use crate::util::list::List;

/// Substitution environment: a persistent map from variables to terms.
///
/// `bind` returns an extended copy and never touches the receiver, so an
/// environment handed to a caller is immutable from its point of view -
/// failed search branches can never observe bindings made by a sibling.
/// Copies that extend nothing share their head pointer with the original,
/// which `same` exploits as an exact "no new bindings" probe.
#[derive(Clone, Default)]
pub struct Bindings {
    entries: List<(Variable, Term)>,
}

impl Bindings {
    pub fn lookup(&self, x: Variable) -> Option<&Term> {
        self.entries
            .iter()
            .find(|(y, _)| *y == x)
            .map(|(_, term)| term)
    }

    pub fn is_bound(&self, x: Variable) -> bool {
        self.lookup(x).is_some()
    }

    #[must_use]
    pub fn bind(&self, x: Variable, term: Term) -> Self {
        let entries = self.entries.push((x, term));
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest binding first.
    pub fn items(&self) -> impl Iterator<Item = (Variable, &Term)> + '_ {
        self.entries.iter().map(|(x, term)| (*x, term))
    }

    pub fn same(&self, other: &Self) -> bool {
        self.entries.ptr_eq(&other.entries)
    }
}
