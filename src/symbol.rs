use crate::prelude::*;
use fnv::FnvHashMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Name {
    Regular(String),
    Quoted(String),
    Skolem(usize),
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Name::Regular(word) => write!(f, "{}", word),
            Name::Quoted(quoted) => write!(f, "'{}'", quoted),
            Name::Skolem(skolem) => write!(f, "sK{}", skolem),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub name: Name,
    pub arity: u32,
}

/// Interned symbol table. The falsum symbol `$false`/0 is always present and
/// always has the first id, so falsum literals can be built without a table
/// in hand.
pub struct Symbols {
    entries: Block<Symbol>,
    interned: FnvHashMap<(String, u32), Id<Symbol>>,
    skolems: usize,
}

impl Default for Symbols {
    fn default() -> Self {
        let entries = Block::default();
        let interned = FnvHashMap::default();
        let mut symbols = Self {
            entries,
            interned,
            skolems: 0,
        };
        let falsum = symbols.intern("$false", 0);
        debug_assert_eq!(falsum, Id::default());
        symbols
    }
}

impl Symbols {
    pub fn falsum() -> Id<Symbol> {
        Id::default()
    }

    pub fn intern(&mut self, text: &str, arity: u32) -> Id<Symbol> {
        if let Some(id) = self.interned.get(&(text.to_string(), arity)) {
            return *id;
        }
        let name = if text.starts_with('\'') {
            Name::Quoted(text.trim_matches('\'').to_string())
        } else {
            Name::Regular(text.to_string())
        };
        let id = self.entries.push(Symbol { name, arity });
        self.interned.insert((text.to_string(), arity), id);
        id
    }

    /// A fresh Skolem function, never interned, never repeated.
    pub fn skolem(&mut self, arity: u32) -> Id<Symbol> {
        let name = Name::Skolem(self.skolems);
        self.skolems += 1;
        self.entries.push(Symbol { name, arity })
    }

    pub fn name(&self, id: Id<Symbol>) -> &Name {
        &self.entries[id].name
    }

    pub fn arity(&self, id: Id<Symbol>) -> u32 {
        self.entries[id].arity
    }

    pub fn len(&self) -> u32 {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
