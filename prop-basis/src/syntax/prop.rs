/*! Defines the syntax of propositional formulae over the full set of connectives.*/
use super::{formula::*, Var};
use itertools::Itertools;
use std::fmt;

/// Is an abstract syntax tree (AST) for propositional formulae.
///
/// **Note**: every connective owns its operands exclusively; a node with a missing
/// operand cannot be constructed.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prop {
    /// Is logical top (⊤) or truth.
    Top,

    /// Is logical bottom (⟘) or falsehood.
    Bottom,

    /// Is a propositional variable, wrapping a [`Var`].
    Var(Var),

    /// Is the negation of a formula, wrapping a [`Not`].
    Not(Box<Not<Prop>>),

    /// Is a conjunction of two formulae, wrapping an [`And`].
    And(Box<And<Prop>>),

    /// Is a disjunction of two formulae, wrapping an [`Or`].
    Or(Box<Or<Prop>>),

    /// Is an implication between two formulae, wrapping an [`Implies`].
    Implies(Box<Implies<Prop>>),

    /// Is an exclusive disjunction of two formulae, wrapping a [`Xor`].
    Xor(Box<Xor<Prop>>),

    /// Is a bi-implication between two formulae, wrapping an [`Iff`].
    Iff(Box<Iff<Prop>>),

    /// Is the Sheffer stroke of two formulae, wrapping a [`Nand`].
    Nand(Box<Nand<Prop>>),

    /// Is the Peirce arrow of two formulae, wrapping a [`Nor`].
    Nor(Box<Nor<Prop>>),
}

impl From<Var> for Prop {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl From<Not<Prop>> for Prop {
    fn from(value: Not<Prop>) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<And<Prop>> for Prop {
    fn from(value: And<Prop>) -> Self {
        Self::And(Box::new(value))
    }
}

impl From<Or<Prop>> for Prop {
    fn from(value: Or<Prop>) -> Self {
        Self::Or(Box::new(value))
    }
}

impl From<Implies<Prop>> for Prop {
    fn from(value: Implies<Prop>) -> Self {
        Self::Implies(Box::new(value))
    }
}

impl From<Xor<Prop>> for Prop {
    fn from(value: Xor<Prop>) -> Self {
        Self::Xor(Box::new(value))
    }
}

impl From<Iff<Prop>> for Prop {
    fn from(value: Iff<Prop>) -> Self {
        Self::Iff(Box::new(value))
    }
}

impl From<Nand<Prop>> for Prop {
    fn from(value: Nand<Prop>) -> Self {
        Self::Nand(Box::new(value))
    }
}

impl From<Nor<Prop>> for Prop {
    fn from(value: Nor<Prop>) -> Self {
        Self::Nor(Box::new(value))
    }
}

impl Prop {
    /// Returns the negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    // Disallow `formula.not()` intentionally:
    #[inline(always)]
    pub fn not(formula: Self) -> Self {
        Not { formula }.into()
    }

    /// Returns a conjunction of `self` and `other`.
    #[inline(always)]
    pub fn and(self, other: Self) -> Self {
        And {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns a disjunction of `self` and `other`.
    #[inline(always)]
    pub fn or(self, other: Self) -> Self {
        Or {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns an implication between `self` and `other`.
    #[inline(always)]
    pub fn implies(self, other: Self) -> Self {
        Implies {
            premise: self,
            consequence: other,
        }
        .into()
    }

    /// Returns an exclusive disjunction of `self` and `other`.
    #[inline(always)]
    pub fn xor(self, other: Self) -> Self {
        Xor {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns a bi-implication between `self` and `other`.
    #[inline(always)]
    pub fn iff(self, other: Self) -> Self {
        Iff {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns the Sheffer stroke of `self` and `other`.
    #[inline(always)]
    pub fn nand(self, other: Self) -> Self {
        Nand {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns the Peirce arrow of `self` and `other`.
    #[inline(always)]
    pub fn nor(self, other: Self) -> Self {
        Nor {
            left: self,
            right: other,
        }
        .into()
    }

    /// Returns the connective at the root of the receiver or `None` if the receiver is
    /// a variable.
    pub fn connective(&self) -> Option<Connective> {
        match self {
            Self::Top => Some(Connective::Top),
            Self::Bottom => Some(Connective::Bottom),
            Self::Var(_) => None,
            Self::Not(_) => Some(Connective::Not),
            Self::And(_) => Some(Connective::And),
            Self::Or(_) => Some(Connective::Or),
            Self::Implies(_) => Some(Connective::Implies),
            Self::Xor(_) => Some(Connective::Xor),
            Self::Iff(_) => Some(Connective::Iff),
            Self::Nand(_) => Some(Connective::Nand),
            Self::Nor(_) => Some(Connective::Nor),
        }
    }

    /// Returns true if the receiver is a variable.
    #[inline(always)]
    pub fn is_var(&self) -> bool {
        matches!(self, Self::Var(_))
    }

    /// Returns true if the receiver is one of the constants ⊤ and ⟘.
    #[inline(always)]
    pub fn is_constant(&self) -> bool {
        self.connective().map_or(false, |c| c.arity() == 0)
    }

    /// Returns true if the root of the receiver is a unary connective.
    #[inline(always)]
    pub fn is_unary(&self) -> bool {
        self.connective().map_or(false, |c| c.arity() == 1)
    }

    /// Returns true if the root of the receiver is a binary connective.
    #[inline(always)]
    pub fn is_binary(&self) -> bool {
        self.connective().map_or(false, |c| c.arity() == 2)
    }

    /// Returns the constants and connectives that appear in the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// use prop_basis::syntax::{Connective, Prop};
    ///
    /// let formula: Prop = "~(p & q) | ~r".parse().unwrap();
    /// assert_eq!(
    ///     vec![Connective::Or, Connective::Not, Connective::And],
    ///     formula.connectives()
    /// );
    /// ```
    pub fn connectives(&self) -> Vec<Connective> {
        let mut result = Vec::new();
        self.collect_connectives(&mut result);
        result.into_iter().unique().collect()
    }

    fn collect_connectives(&self, result: &mut Vec<Connective>) {
        if let Some(connective) = self.connective() {
            result.push(connective);
        }
        match self {
            Self::Top | Self::Bottom | Self::Var(_) => {}
            Self::Not(this) => this.formula.collect_connectives(result),
            Self::And(this) => {
                this.left.collect_connectives(result);
                this.right.collect_connectives(result);
            }
            Self::Or(this) => {
                this.left.collect_connectives(result);
                this.right.collect_connectives(result);
            }
            Self::Implies(this) => {
                this.premise.collect_connectives(result);
                this.consequence.collect_connectives(result);
            }
            Self::Xor(this) => {
                this.left.collect_connectives(result);
                this.right.collect_connectives(result);
            }
            Self::Iff(this) => {
                this.left.collect_connectives(result);
                this.right.collect_connectives(result);
            }
            Self::Nand(this) => {
                this.left.collect_connectives(result);
                this.right.collect_connectives(result);
            }
            Self::Nor(this) => {
                this.left.collect_connectives(result);
                this.right.collect_connectives(result);
            }
        }
    }
}

impl Formula for Prop {
    fn vars(&self) -> Vec<&Var> {
        match self {
            Self::Top => Vec::new(),
            Self::Bottom => Vec::new(),
            Self::Var(this) => this.vars(),
            Self::Not(this) => this.vars(),
            Self::And(this) => this.vars(),
            Self::Or(this) => this.vars(),
            Self::Implies(this) => this.vars(),
            Self::Xor(this) => this.vars(),
            Self::Iff(this) => this.vars(),
            Self::Nand(this) => this.vars(),
            Self::Nor(this) => this.vars(),
        }
    }
}

impl FormulaEx for Prop {
    fn precedence(&self) -> u8 {
        match self {
            Self::Top => PRECEDENCE_ATOM,
            Self::Bottom => PRECEDENCE_ATOM,
            Self::Var(this) => this.precedence(),
            Self::Not(this) => this.precedence(),
            Self::And(this) => this.precedence(),
            Self::Or(this) => this.precedence(),
            Self::Implies(this) => this.precedence(),
            Self::Xor(this) => this.precedence(),
            Self::Iff(this) => this.precedence(),
            Self::Nand(this) => this.precedence(),
            Self::Nor(this) => this.precedence(),
        }
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Top => write!(f, "⊤"),
            Self::Bottom => write!(f, "⟘"),
            Self::Var(this) => fmt::Display::fmt(this, f),
            Self::Not(this) => fmt::Display::fmt(this, f),
            Self::And(this) => fmt::Display::fmt(this, f),
            Self::Or(this) => fmt::Display::fmt(this, f),
            Self::Implies(this) => fmt::Display::fmt(this, f),
            Self::Xor(this) => fmt::Display::fmt(this, f),
            Self::Iff(this) => fmt::Display::fmt(this, f),
            Self::Nand(this) => fmt::Display::fmt(this, f),
            Self::Nor(this) => fmt::Display::fmt(this, f),
        }
    }
}

impl fmt::Debug for Prop {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Top => write!(f, "true"),
            Self::Bottom => write!(f, "false"),
            Self::Var(this) => fmt::Debug::fmt(this, f),
            Self::Not(this) => fmt::Debug::fmt(this, f),
            Self::And(this) => fmt::Debug::fmt(this, f),
            Self::Or(this) => fmt::Debug::fmt(this, f),
            Self::Implies(this) => fmt::Debug::fmt(this, f),
            Self::Xor(this) => fmt::Debug::fmt(this, f),
            Self::Iff(this) => fmt::Debug::fmt(this, f),
            Self::Nand(this) => fmt::Debug::fmt(this, f),
            Self::Nor(this) => fmt::Debug::fmt(this, f),
        }
    }
}
