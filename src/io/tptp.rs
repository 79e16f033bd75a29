use crate::io::{exit, szs};
use crate::prelude::*;
use fnv::FnvHashMap;
use memmap::Mmap;
use std::fmt;
use std::fs::File;
use std::path::Path;
use tptp::cnf;
use tptp::common;
use tptp::fof;
use tptp::top;
use tptp::visitor::Visitor;
use tptp::TPTPIterator;

pub struct Problem {
    pub symbols: Symbols,
    pub clauses: Vec<Clause>,
}

fn report_inappropriate<T: fmt::Display>(t: T) -> ! {
    println!("% unsupported input feature: {}", t);
    szs::inappropriate();
    exit::failure()
}

/// Builds clauses bottom-up from visitor callbacks: terms accumulate on a
/// stack, a predicate or equality callback turns the top of the stack into
/// a literal, a clause callback drains the literals.
#[derive(Default)]
struct ProblemBuilder {
    symbols: Symbols,
    clauses: Vec<Clause>,
    terms: Vec<Term>,
    literals: Vec<Literal>,
    variables: FnvHashMap<String, Variable>,
    fresh: u32,
}

impl ProblemBuilder {
    fn finish(self) -> Problem {
        Problem {
            symbols: self.symbols,
            clauses: self.clauses,
        }
    }

    fn variable(&mut self, name: String) {
        let fresh = &mut self.fresh;
        let variable = *self.variables.entry(name).or_insert_with(|| {
            let variable = Variable(*fresh);
            *fresh += 1;
            variable
        });
        self.terms.push(Term::Var(variable));
    }

    fn function(&mut self, name: String, arity: u32) {
        let symbol = self.symbols.intern(&name, arity);
        let args = self.terms.split_off(self.terms.len() - arity as usize);
        self.terms.push(Term::Fun(symbol, args));
    }

    fn predicate(&mut self, polarity: bool) {
        match self.terms.pop() {
            Some(Term::Fun(symbol, args)) => {
                self.literals
                    .push(Literal::new(polarity, Atom::new(symbol, args)));
            }
            _ => {
                println!("% variable in predicate position");
                szs::input_error();
                exit::failure()
            }
        }
    }

    fn equality(&mut self, polarity: bool) {
        let symbol = self.symbols.intern("=", 2);
        let args = self.terms.split_off(self.terms.len() - 2);
        self.literals
            .push(Literal::new(polarity, Atom::new(symbol, args)));
    }

    fn clause(&mut self) {
        let literals = std::mem::take(&mut self.literals);
        self.clauses.push(Clause::new(literals));
        self.variables.clear();
    }
}

impl<'v> Visitor<'v> for ProblemBuilder {
    fn visit_variable(&mut self, variable: &common::Variable<'v>) {
        self.variable(format!("{}", variable));
    }

    fn visit_fof_plain_term(&mut self, fof_plain_term: &fof::PlainTerm<'v>) {
        match fof_plain_term {
            fof::PlainTerm::Constant(c) => {
                self.function(format!("{}", c), 0);
            }
            fof::PlainTerm::Function(f, args) => {
                let arity = args.0.len() as u32;
                for arg in &args.0 {
                    self.visit_fof_term(arg);
                }
                self.function(format!("{}", f), arity);
            }
        }
    }

    fn visit_fof_defined_term(&mut self, fof_defined_term: &fof::DefinedTerm<'v>) {
        self.function(format!("{}", fof_defined_term), 0);
    }

    fn visit_literal(&mut self, literal: &cnf::Literal<'v>) {
        match literal {
            cnf::Literal::Atomic(fof::AtomicFormula::Plain(p)) => {
                self.visit_fof_plain_atomic_formula(p);
                self.predicate(true);
            }
            cnf::Literal::Atomic(fof::AtomicFormula::Defined(
                fof::DefinedAtomicFormula::Infix(infix),
            )) => {
                self.visit_fof_term(&infix.left);
                self.visit_fof_term(&infix.right);
                self.equality(true);
            }
            cnf::Literal::NegatedAtomic(fof::AtomicFormula::Plain(p)) => {
                self.visit_fof_plain_atomic_formula(p);
                self.predicate(false);
            }
            cnf::Literal::NegatedAtomic(fof::AtomicFormula::Defined(
                fof::DefinedAtomicFormula::Infix(infix),
            )) => {
                self.visit_fof_term(&infix.left);
                self.visit_fof_term(&infix.right);
                self.equality(false);
            }
            cnf::Literal::Infix(infix) => {
                self.visit_fof_term(&infix.left);
                self.visit_fof_term(&infix.right);
                self.equality(false);
            }
            cnf::Literal::Atomic(atomic) => {
                // a $false literal contributes nothing to its clause
                if format!("{}", atomic) != "$false" {
                    report_inappropriate(atomic)
                }
            }
            cnf::Literal::NegatedAtomic(negated) => report_inappropriate(negated),
        }
    }

    fn visit_cnf_annotated(&mut self, annotated: &top::CnfAnnotated<'v>) {
        self.visit_cnf_formula(&annotated.0.formula);
        self.clause();
    }

    fn visit_fof_annotated(&mut self, annotated: &top::FofAnnotated<'v>) {
        report_inappropriate(annotated)
    }
}

pub fn load(path: &Path) -> Problem {
    let file = File::open(path).unwrap_or_else(|e| {
        println!("% error opening {}: {}", path.display(), e);
        szs::os_error();
        exit::failure()
    });
    let bytes = unsafe { Mmap::map(&file) }.unwrap_or_else(|e| {
        println!("% error reading {}: {}", path.display(), e);
        szs::os_error();
        exit::failure()
    });

    let mut builder = ProblemBuilder::default();
    let mut parser = TPTPIterator::<()>::new(&bytes);
    for result in &mut parser {
        let input = result.unwrap_or_else(|_| {
            println!("% unsupported syntax");
            szs::input_error();
            exit::failure()
        });
        builder.visit_tptp_input(&input);
    }
    if !parser.remaining.is_empty() {
        println!("% unsupported syntax at end of input");
        szs::input_error();
        exit::failure()
    }
    builder.finish()
}
