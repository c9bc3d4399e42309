use super::{Error, ToImpliesFalse, ToImpliesNot, ToNotAnd, ToNotAndOr, ToSheffer};
use crate::{
    syntax::{Connective, Prop},
    trace::CONVERT,
};
use itertools::Itertools;
use std::{fmt, str::FromStr};
use tracing::info;

/// Names a minimal set of connectives to which every [`Prop`] can be converted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Basis {
    /// Is the basis `{¬, ∧, ∨}`.
    NotAndOr,

    /// Is the basis `{¬, ∧}`.
    NotAnd,

    /// Is the basis `{↑}` of the Sheffer stroke.
    Nand,

    /// Is the basis `{→, ¬}`.
    ImpliesNot,

    /// Is the basis `{→, ⟘}`.
    ImpliesFalse,
}

impl Basis {
    /// Returns every basis.
    pub fn all() -> &'static [Basis] {
        &[
            Self::NotAndOr,
            Self::NotAnd,
            Self::Nand,
            Self::ImpliesNot,
            Self::ImpliesFalse,
        ]
    }

    /// Returns the names of all bases, separated by commas.
    pub fn names() -> String {
        Self::all().iter().map(|b| format!("`{}`", b)).join(", ")
    }

    /// Returns the connectives admitted by the receiver.
    pub fn connectives(&self) -> &'static [Connective] {
        match self {
            Self::NotAndOr => &[Connective::Not, Connective::And, Connective::Or],
            Self::NotAnd => &[Connective::Not, Connective::And],
            Self::Nand => &[Connective::Nand],
            Self::ImpliesNot => &[Connective::Implies, Connective::Not],
            Self::ImpliesFalse => &[Connective::Implies, Connective::Bottom],
        }
    }

    /// Returns true if every connective of `formula` is admitted by the receiver.
    pub fn admits(&self, formula: &Prop) -> bool {
        let connectives = self.connectives();
        formula
            .connectives()
            .iter()
            .all(|c| connectives.contains(c))
    }

    /// Converts `formula` to an equivalent [`Prop`] over the receiver's connectives.
    ///
    /// **Example**:
    /// ```rust
    /// # use prop_basis::syntax::Prop;
    /// use prop_basis::transform::Basis;
    ///
    /// let formula: Prop = "~p".parse().unwrap();
    /// assert_eq!("p ↑ p", Basis::Nand.convert(&formula).to_string());
    /// ```
    pub fn convert(&self, formula: &Prop) -> Prop {
        let result: Prop = match self {
            Self::NotAndOr => formula.not_and_or().into(),
            Self::NotAnd => formula.not_and().into(),
            Self::Nand => formula.sheffer().into(),
            Self::ImpliesNot => formula.implies_not().into(),
            Self::ImpliesFalse => formula.implies_false().into(),
        };
        info!(
            event = CONVERT,
            basis = %self,
            input = ?formula,
            output = ?result
        );
        result
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::NotAndOr => "not-and-or",
            Self::NotAnd => "not-and",
            Self::Nand => "nand",
            Self::ImpliesNot => "implies-not",
            Self::ImpliesFalse => "implies-false",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Basis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|b| b.to_string() == s.trim().to_lowercase())
            .copied()
            .ok_or_else(|| Error::UnknownBasis { name: s.to_owned() })
    }
}
