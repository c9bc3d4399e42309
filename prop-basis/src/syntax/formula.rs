/*! Introduces an abstraction for propositional formulae and the connectives from which
formulae are constructed.

The connective types ([`Not`], [`And`], [`Or`], ...) are generic over the type of their
operands, so that every formula type, including the restricted formula types of
[`transform`], is built from the same ingredients.

[`transform`]: crate::transform
*/
use super::Var;
use itertools::Itertools;
use std::fmt;

/// Is the precedence of atomic formulae, namely variables and constants.
pub const PRECEDENCE_ATOM: u8 = 10;

/// Is the precedence of negation.
pub const PRECEDENCE_NOT: u8 = 8;

/// Is the precedence of conjunction and NAND.
pub const PRECEDENCE_AND: u8 = 6;

/// Is the precedence of disjunction, exclusive disjunction and NOR.
pub const PRECEDENCE_OR: u8 = 5;

/// Is the precedence of implication.
pub const PRECEDENCE_IMPLIES: u8 = 4;

/// Is the precedence of bi-implication.
pub const PRECEDENCE_IFF: u8 = 3;

/// Is the trait of propositional formulae.
pub trait Formula {
    /// Returns the variable symbols of the receiver.
    ///
    /// **Note**: each variable symbol appears only once, in the order of its first
    /// occurrence from left to right, even if it is present at multiple positions
    /// of the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// use prop_basis::syntax::{Formula, Prop, Var};
    ///
    /// let formula: Prop = "(q & p) -> ~q".parse().unwrap();
    /// assert_eq!(vec![&Var::from("q"), &Var::from("p")], formula.vars());
    /// ```
    fn vars(&self) -> Vec<&Var>;
}

/// Extends [`Formula`] with the information needed for printing.
pub trait FormulaEx: Formula {
    /// Returns the binding strength of the top-most connective of the receiver.
    fn precedence(&self) -> u8;
}

/// Is the closed set of logical constants and connectives of the propositional grammar.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Connective {
    /// Is logical top (⊤) or truth.
    Top,

    /// Is logical bottom (⟘) or falsehood.
    Bottom,

    /// Is negation (¬).
    Not,

    /// Is conjunction (∧).
    And,

    /// Is disjunction (∨).
    Or,

    /// Is implication (→).
    Implies,

    /// Is exclusive disjunction (⊕).
    Xor,

    /// Is bi-implication (⇔).
    Iff,

    /// Is the Sheffer stroke (↑), the negation of conjunction.
    Nand,

    /// Is the Peirce arrow (↓), the negation of disjunction.
    Nor,
}

impl Connective {
    /// Returns the number of operands of the receiver.
    pub fn arity(&self) -> usize {
        match self {
            Self::Top | Self::Bottom => 0,
            Self::Not => 1,
            Self::And
            | Self::Or
            | Self::Implies
            | Self::Xor
            | Self::Iff
            | Self::Nand
            | Self::Nor => 2,
        }
    }

    /// Returns the symbol of the receiver in the ASCII syntax of the parser.
    pub fn ascii(&self) -> &'static str {
        match self {
            Self::Top => "true",
            Self::Bottom => "false",
            Self::Not => "~",
            Self::And => "&",
            Self::Or => "|",
            Self::Implies => "->",
            Self::Xor => "+",
            Self::Iff => "<=>",
            Self::Nand => "-&",
            Self::Nor => "-|",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Self::Top => "⊤",
            Self::Bottom => "⟘",
            Self::Not => "¬",
            Self::And => "∧",
            Self::Or => "∨",
            Self::Implies => "→",
            Self::Xor => "⊕",
            Self::Iff => "⇔",
            Self::Nand => "↑",
            Self::Nor => "↓",
        };
        write!(f, "{}", symbol)
    }
}

impl Formula for Var {
    fn vars(&self) -> Vec<&Var> {
        vec![self]
    }
}

impl FormulaEx for Var {
    fn precedence(&self) -> u8 {
        PRECEDENCE_ATOM
    }
}

/// Represents the negation of a formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Not<F: Formula> {
    pub(crate) formula: F,
}

impl<F: Formula> Not<F> {
    /// Wraps `formula` in a new instance of [`Not`].
    pub fn new(formula: F) -> Self {
        Self { formula }
    }

    /// Returns the formula wrapped in the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

impl<F: Formula> Formula for Not<F> {
    fn vars(&self) -> Vec<&Var> {
        self.formula.vars()
    }
}

impl<F: Formula> FormulaEx for Not<F> {
    fn precedence(&self) -> u8 {
        PRECEDENCE_NOT
    }
}

impl<F: FormulaEx + fmt::Display> fmt::Display for Not<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.formula.precedence() < PRECEDENCE_ATOM {
            write!(f, "¬({})", self.formula)
        } else {
            write!(f, "¬{}", self.formula)
        }
    }
}

impl<F: FormulaEx + fmt::Debug> fmt::Debug for Not<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.formula.precedence() < PRECEDENCE_ATOM {
            write!(f, "~({:?})", self.formula)
        } else {
            write!(f, "~{:?}", self.formula)
        }
    }
}

// Operands of binary connectives are wrapped in parentheses unless they bind at least
// as tightly as negation.
fn display_operand<F: FormulaEx + fmt::Display>(formula: &F) -> String {
    if formula.precedence() < PRECEDENCE_NOT {
        format!("({})", formula)
    } else {
        formula.to_string()
    }
}

fn debug_operand<F: FormulaEx + fmt::Debug>(formula: &F) -> String {
    if formula.precedence() < PRECEDENCE_NOT {
        format!("({:?})", formula)
    } else {
        format!("{:?}", formula)
    }
}

fn binary_vars<'a, F: Formula>(left: &'a F, right: &'a F) -> Vec<&'a Var> {
    let mut vs = left.vars();
    vs.extend(right.vars());
    vs.into_iter().unique().collect()
}

macro_rules! binary_connective {
    ($connective:ident, $left:ident, $right:ident, $precedence:expr, $symbol:literal, $ascii:literal) => {
        impl<F: Formula> Formula for $connective<F> {
            fn vars(&self) -> Vec<&Var> {
                binary_vars(&self.$left, &self.$right)
            }
        }

        impl<F: Formula> FormulaEx for $connective<F> {
            fn precedence(&self) -> u8 {
                $precedence
            }
        }

        impl<F: FormulaEx + fmt::Display> fmt::Display for $connective<F> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    f,
                    "{} {} {}",
                    display_operand(&self.$left),
                    $symbol,
                    display_operand(&self.$right)
                )
            }
        }

        impl<F: FormulaEx + fmt::Debug> fmt::Debug for $connective<F> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    f,
                    "{} {} {}",
                    debug_operand(&self.$left),
                    $ascii,
                    debug_operand(&self.$right)
                )
            }
        }
    };
}

/// Represents the conjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct And<F: Formula> {
    pub(crate) left: F,
    pub(crate) right: F,
}

impl<F: Formula> And<F> {
    /// Returns the conjunction of `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

binary_connective!(And, left, right, PRECEDENCE_AND, "∧", "&");

/// Represents the disjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Or<F: Formula> {
    pub(crate) left: F,
    pub(crate) right: F,
}

impl<F: Formula> Or<F> {
    /// Returns the disjunction of `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

binary_connective!(Or, left, right, PRECEDENCE_OR, "∨", "|");

/// Represents an implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implies<F: Formula> {
    pub(crate) premise: F,
    pub(crate) consequence: F,
}

impl<F: Formula> Implies<F> {
    /// Returns an implication with a `premise` and a `consequence`.
    pub fn new(premise: F, consequence: F) -> Self {
        Self {
            premise,
            consequence,
        }
    }

    /// Returns the premise of the receiver.
    #[inline(always)]
    pub fn premise(&self) -> &F {
        &self.premise
    }

    /// Returns the consequence of the receiver.
    #[inline(always)]
    pub fn consequence(&self) -> &F {
        &self.consequence
    }
}

binary_connective!(
    Implies,
    premise,
    consequence,
    PRECEDENCE_IMPLIES,
    "→",
    "->"
);

/// Represents the exclusive disjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Xor<F: Formula> {
    pub(crate) left: F,
    pub(crate) right: F,
}

impl<F: Formula> Xor<F> {
    /// Returns the exclusive disjunction of `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

binary_connective!(Xor, left, right, PRECEDENCE_OR, "⊕", "+");

/// Represents a bi-implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iff<F: Formula> {
    pub(crate) left: F,
    pub(crate) right: F,
}

impl<F: Formula> Iff<F> {
    /// Returns a bi-implication between `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

binary_connective!(Iff, left, right, PRECEDENCE_IFF, "⇔", "<=>");

/// Represents the Sheffer stroke (NAND) of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nand<F: Formula> {
    pub(crate) left: F,
    pub(crate) right: F,
}

impl<F: Formula> Nand<F> {
    /// Returns the Sheffer stroke of `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

binary_connective!(Nand, left, right, PRECEDENCE_AND, "↑", "-&");

/// Represents the Peirce arrow (NOR) of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nor<F: Formula> {
    pub(crate) left: F,
    pub(crate) right: F,
}

impl<F: Formula> Nor<F> {
    /// Returns the Peirce arrow of `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

binary_connective!(Nor, left, right, PRECEDENCE_OR, "↓", "-|");
