use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(pub u32);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    Var(Variable),
    Fun(Id<Symbol>, Vec<Term>),
}

impl Term {
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::Fun(_, args) => args.iter().all(Term::is_ground),
        }
    }

    pub fn vars(&self, vars: &mut Vec<Variable>) {
        match self {
            Term::Var(x) => {
                vars.push(*x);
            }
            Term::Fun(_, args) => {
                for arg in args {
                    arg.vars(vars);
                }
            }
        }
    }
}
