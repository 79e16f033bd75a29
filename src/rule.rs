use crate::prelude::*;
use fnv::FnvHashMap;

/// One contrapositive of a clause: prove `conclusion` by proving every
/// premise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub premises: Vec<Literal>,
    pub conclusion: Literal,
}

impl Rule {
    /// A syntactically fresh instance: every distinct variable replaced, in
    /// first-seen order, by `Variable(counter)`, `Variable(counter + 1)`, ...
    /// Returns the renamed rule and the next unused counter, so live
    /// instances of the same rule never share a variable.
    pub fn rename(&self, counter: u32) -> (Rule, u32) {
        let mut renaming = Renaming::new(counter);
        let premises = self
            .premises
            .iter()
            .map(|premise| renaming.literal(premise))
            .collect();
        let conclusion = renaming.literal(&self.conclusion);
        let rule = Rule {
            premises,
            conclusion,
        };
        (rule, renaming.counter)
    }
}

/// All contrapositives of a clause: each literal in turn as the conclusion,
/// the negations of the others as premises. A clause with no positive
/// literal additionally yields a rule concluding falsum from the negations
/// of all its literals, which is what lets the refutation goal start.
pub fn contrapositives(clause: &Clause) -> Vec<Rule> {
    let literals = clause.literals();
    let mut rules: Vec<Rule> = literals
        .iter()
        .enumerate()
        .map(|(chosen, conclusion)| {
            let premises = literals
                .iter()
                .enumerate()
                .filter(|(index, _)| *index != chosen)
                .map(|(_, other)| other.negated())
                .collect();
            Rule {
                premises,
                conclusion: conclusion.clone(),
            }
        })
        .collect();

    if literals.iter().all(|literal| !literal.polarity) {
        let premises = literals.iter().map(Literal::negated).collect();
        rules.push(Rule {
            premises,
            conclusion: Literal::falsum(),
        });
    }
    rules
}

struct Renaming {
    map: FnvHashMap<Variable, Variable>,
    counter: u32,
}

impl Renaming {
    fn new(counter: u32) -> Self {
        let map = FnvHashMap::default();
        Self { map, counter }
    }

    fn variable(&mut self, x: Variable) -> Variable {
        if let Some(renamed) = self.map.get(&x) {
            return *renamed;
        }
        let fresh = Variable(self.counter);
        self.counter += 1;
        self.map.insert(x, fresh);
        fresh
    }

    fn term(&mut self, term: &Term) -> Term {
        match term {
            Term::Var(x) => Term::Var(self.variable(*x)),
            Term::Fun(f, args) => {
                Term::Fun(*f, args.iter().map(|arg| self.term(arg)).collect())
            }
        }
    }

    fn literal(&mut self, literal: &Literal) -> Literal {
        let args = literal
            .atom
            .args
            .iter()
            .map(|arg| self.term(arg))
            .collect();
        Literal::new(
            literal.polarity,
            Atom::new(literal.atom.symbol, args),
        )
    }
}
