/*! Defines formulae over the basis `{→, ⟘}` and implements an algorithm for transforming
a [`Prop`] to an [`ImpliesFalse`].

[`Prop`]: crate::syntax::Prop
*/
use crate::syntax::{Formula, FormulaEx, Implies, Prop, Var, PRECEDENCE_ATOM};
use std::fmt;

/// Represents a formula whose only connectives are implication and falsehood.
///
/// **Note**: since `⟘` is in the basis, the conversion never introduces variables.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ImpliesFalse {
    /// Is the constant `⟘`.
    Bottom,

    /// Is a propositional variable, wrapping a [`Var`].
    Var(Var),

    /// Is an implication between two formulae, wrapping an [`Implies`].
    Implies(Box<Implies<ImpliesFalse>>),
}

impl From<Var> for ImpliesFalse {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl From<Implies<ImpliesFalse>> for ImpliesFalse {
    fn from(value: Implies<ImpliesFalse>) -> Self {
        Self::Implies(Box::new(value))
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`ImpliesFalse`].
pub trait ToImpliesFalse: Formula {
    /// Transforms `self` to an equivalent formula over `{→, ⟘}`.
    ///
    /// **Example**:
    /// ```rust
    /// # use prop_basis::syntax::Prop;
    /// use prop_basis::transform::ToImpliesFalse;
    ///
    /// let formula: Prop = "~p | q".parse().unwrap();
    /// let result = formula.implies_false();
    ///
    /// assert_eq!("((p → ⟘) → ⟘) → q", result.to_string());
    /// ```
    fn implies_false(&self) -> ImpliesFalse;
}

impl ToImpliesFalse for Prop {
    fn implies_false(&self) -> ImpliesFalse {
        implies_false(self)
    }
}

impl ImpliesFalse {
    #[inline(always)]
    fn implies(self, formula: Self) -> Self {
        Implies {
            premise: self,
            consequence: formula,
        }
        .into()
    }

    // a → ⟘
    fn not(self) -> Self {
        self.implies(Self::Bottom)
    }

    // (a → ⟘) → b
    fn or(self, formula: Self) -> Self {
        self.not().implies(formula)
    }

    // (a → (b → ⟘)) → ⟘
    fn and(self, formula: Self) -> Self {
        self.implies(formula.not()).not()
    }
}

impl Formula for ImpliesFalse {
    fn vars(&self) -> Vec<&Var> {
        match self {
            Self::Bottom => Vec::new(),
            Self::Var(this) => this.vars(),
            Self::Implies(this) => this.vars(),
        }
    }
}

impl FormulaEx for ImpliesFalse {
    fn precedence(&self) -> u8 {
        match self {
            Self::Bottom | Self::Var(_) => PRECEDENCE_ATOM,
            Self::Implies(this) => this.precedence(),
        }
    }
}

impl fmt::Display for ImpliesFalse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Prop::from(self), f)
    }
}

impl fmt::Debug for ImpliesFalse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Prop::from(self), f)
    }
}

impl From<ImpliesFalse> for Prop {
    fn from(value: ImpliesFalse) -> Self {
        match value {
            ImpliesFalse::Bottom => Self::Bottom,
            ImpliesFalse::Var(this) => this.into(),
            ImpliesFalse::Implies(this) => {
                Self::from(this.premise).implies(this.consequence.into())
            }
        }
    }
}

impl From<&ImpliesFalse> for Prop {
    fn from(value: &ImpliesFalse) -> Self {
        value.clone().into()
    }
}

fn implies_false(formula: &Prop) -> ImpliesFalse {
    match formula {
        Prop::Top => ImpliesFalse::Bottom.not(),
        Prop::Bottom => ImpliesFalse::Bottom,
        Prop::Var(this) => this.clone().into(),
        Prop::Not(this) => implies_false(&this.formula).not(),
        Prop::And(this) => implies_false(&this.left).and(implies_false(&this.right)),
        Prop::Or(this) => implies_false(&this.left).or(implies_false(&this.right)),
        Prop::Implies(this) => {
            implies_false(&this.premise).implies(implies_false(&this.consequence))
        }
        Prop::Xor(this) => {
            let left = implies_false(&this.left);
            let right = implies_false(&this.right);
            let left_or_right = left.clone().or(right.clone());
            left_or_right.and(left.and(right).not())
        }
        Prop::Iff(this) => {
            let left = implies_false(&this.left);
            let right = implies_false(&this.right);
            let left_implies_right = left.clone().implies(right.clone());
            left_implies_right.and(right.implies(left))
        }
        Prop::Nand(this) => implies_false(&this.left)
            .and(implies_false(&this.right))
            .not(),
        Prop::Nor(this) => implies_false(&this.left)
            .or(implies_false(&this.right))
            .not(),
    }
}
