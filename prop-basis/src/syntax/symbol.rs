/*! Defines the variable symbol [`Var`] for making propositional formulae.

[`Var`]: crate::syntax::Var
*/

use std::fmt;

/// Represents a propositional variable symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Var(pub String);

impl Var {
    /// Returns the name of the variable.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for Var {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}
