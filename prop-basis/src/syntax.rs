/*! Defines an abstract syntax tree (AST) for propositional formulae. */

mod formula;
mod macros;
mod prop;
mod symbol;

pub use formula::{
    And, Connective, Formula, Iff, Implies, Nand, Nor, Not, Or, Xor, PRECEDENCE_AND,
    PRECEDENCE_ATOM, PRECEDENCE_IFF, PRECEDENCE_IMPLIES, PRECEDENCE_NOT, PRECEDENCE_OR,
};
pub(crate) use formula::FormulaEx;
pub use prop::Prop;
pub use symbol::Var;
