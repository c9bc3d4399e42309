/*! Implements the conversion of propositional formulae to equivalent formulae over minimal
sets of connectives.

Each target basis has its own formula type whose variants admit exactly the connectives
of the basis:

| basis | formula type | conversion |
|---|---|---|
| `{¬, ∧, ∨}` | [`NotAndOr`] | [`ToNotAndOr`] |
| `{¬, ∧}` | [`NotAnd`] | [`ToNotAnd`] |
| `{↑}` | [`Sheffer`] | [`ToSheffer`] |
| `{→, ¬}` | [`ImpliesNot`] | [`ToImpliesNot`] |
| `{→, ⟘}` | [`ImpliesFalse`] | [`ToImpliesFalse`] |

[`Basis`] names the bases at runtime and converts back and forth through [`Prop`].

[`Prop`]: crate::syntax::Prop
*/
mod basis;
mod implies_false;
mod implies_not;
mod not_and;
mod not_and_or;
mod sheffer;

pub use basis::Basis;
pub use implies_false::{ImpliesFalse, ToImpliesFalse};
pub use implies_not::{ImpliesNot, ToImpliesNot};
pub use not_and::{NotAnd, ToNotAnd};
pub use not_and_or::{NotAndOr, ToNotAndOr};
pub use sheffer::{Sheffer, ToSheffer};

use crate::syntax::{Formula, Prop, Var};
use thiserror::Error;

/// Is the name of the variable that encodes the constants ⊤ and ⟘ in a basis without
/// constants when the converted formula has no variables.
pub const DEFAULT_VAR: &str = "p";

/// Is the type of errors arising from naming bases.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when a string does not name a [`Basis`].
    #[error("unknown basis `{name}`; expecting one of {}", Basis::names())]
    UnknownBasis { name: String },
}

// Returns the variable over which the constants of `formula` are encoded: the first
// variable of `formula` or `DEFAULT_VAR`. The result may not occur in `formula`.
fn witness(formula: &Prop) -> Var {
    formula
        .vars()
        .into_iter()
        .next()
        .cloned()
        .unwrap_or_else(|| Var::from(DEFAULT_VAR))
}
