/*! Provides a set of tools for parsing propositional formulae and converting them to
equivalent formulae over minimal sets of connectives, such as `{¬, ∧}` or the Sheffer
stroke alone. */
#[macro_use]
extern crate lalrpop_util;

pub mod parser;
pub mod random;
pub mod semantics;
pub mod syntax;
#[cfg(test)]
pub mod test_macros;
#[cfg(test)]
pub mod test_prelude;
pub mod trace;
pub mod transform;
