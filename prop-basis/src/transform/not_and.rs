/*! Defines formulae over the basis `{¬, ∧}` and implements an algorithm for transforming
a [`Prop`] to a [`NotAnd`].

[`Prop`]: crate::syntax::Prop
*/
use super::witness;
use crate::syntax::{And, Formula, FormulaEx, Not, Prop, Var, PRECEDENCE_ATOM};
use std::fmt;

/// Represents a formula whose only connectives are negation and conjunction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum NotAnd {
    /// Is a propositional variable, wrapping a [`Var`].
    Var(Var),

    /// Is the negation of a formula, wrapping a [`Not`].
    Not(Box<Not<NotAnd>>),

    /// Is a conjunction of two formulae, wrapping an [`And`].
    And(Box<And<NotAnd>>),
}

impl From<Var> for NotAnd {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl From<Not<NotAnd>> for NotAnd {
    fn from(value: Not<NotAnd>) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<And<NotAnd>> for NotAnd {
    fn from(value: And<NotAnd>) -> Self {
        Self::And(Box::new(value))
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`NotAnd`].
pub trait ToNotAnd: Formula {
    /// Transforms `self` to an equivalent formula over `{¬, ∧}`.
    ///
    /// **Example**:
    /// ```rust
    /// # use prop_basis::syntax::Prop;
    /// use prop_basis::transform::ToNotAnd;
    ///
    /// let formula: Prop = "p | q".parse().unwrap();
    /// let result = formula.not_and();
    ///
    /// assert_eq!("¬(¬p ∧ ¬q)", result.to_string());
    /// ```
    fn not_and(&self) -> NotAnd;
}

impl ToNotAnd for Prop {
    fn not_and(&self) -> NotAnd {
        let witness = witness(self);
        not_and(self, &witness)
    }
}

impl NotAnd {
    #[inline(always)]
    fn not(formula: Self) -> Self {
        Not { formula }.into()
    }

    #[inline(always)]
    fn and(self, formula: Self) -> Self {
        And {
            left: self,
            right: formula,
        }
        .into()
    }

    // ¬(¬a ∧ ¬b)
    fn or(self, formula: Self) -> Self {
        Self::not(Self::not(self).and(Self::not(formula)))
    }
}

impl Formula for NotAnd {
    fn vars(&self) -> Vec<&Var> {
        match self {
            Self::Var(this) => this.vars(),
            Self::Not(this) => this.vars(),
            Self::And(this) => this.vars(),
        }
    }
}

impl FormulaEx for NotAnd {
    fn precedence(&self) -> u8 {
        match self {
            Self::Var(_) => PRECEDENCE_ATOM,
            Self::Not(this) => this.precedence(),
            Self::And(this) => this.precedence(),
        }
    }
}

impl fmt::Display for NotAnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Prop::from(self), f)
    }
}

impl fmt::Debug for NotAnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Prop::from(self), f)
    }
}

impl From<NotAnd> for Prop {
    fn from(value: NotAnd) -> Self {
        match value {
            NotAnd::Var(this) => this.into(),
            NotAnd::Not(this) => Self::not(this.formula.into()),
            NotAnd::And(this) => Self::from(this.left).and(this.right.into()),
        }
    }
}

impl From<&NotAnd> for Prop {
    fn from(value: &NotAnd) -> Self {
        value.clone().into()
    }
}

fn contradiction(witness: &Var) -> NotAnd {
    let p = NotAnd::from(witness.clone());
    p.clone().and(NotAnd::not(p))
}

fn not_and(formula: &Prop, witness: &Var) -> NotAnd {
    match formula {
        Prop::Top => NotAnd::not(contradiction(witness)),
        Prop::Bottom => contradiction(witness),
        Prop::Var(this) => this.clone().into(),
        Prop::Not(this) => NotAnd::not(not_and(&this.formula, witness)),
        Prop::And(this) => not_and(&this.left, witness).and(not_and(&this.right, witness)),
        Prop::Or(this) => not_and(&this.left, witness).or(not_and(&this.right, witness)),
        Prop::Implies(this) => {
            let premise = not_and(&this.premise, witness);
            let consequence = not_and(&this.consequence, witness);
            NotAnd::not(premise.and(NotAnd::not(consequence)))
        }
        Prop::Xor(this) => {
            let left = not_and(&this.left, witness);
            let right = not_and(&this.right, witness);
            let left_or_right = left.clone().or(right.clone());
            left_or_right.and(NotAnd::not(left.and(right)))
        }
        Prop::Iff(this) => {
            let left = not_and(&this.left, witness);
            let right = not_and(&this.right, witness);
            let left_and_right = left.clone().and(right.clone());
            let not_left_and_not_right = NotAnd::not(left).and(NotAnd::not(right));
            left_and_right.or(not_left_and_not_right)
        }
        Prop::Nand(this) => {
            let left = not_and(&this.left, witness);
            NotAnd::not(left.and(not_and(&this.right, witness)))
        }
        Prop::Nor(this) => {
            let left = not_and(&this.left, witness);
            NotAnd::not(left).and(NotAnd::not(not_and(&this.right, witness)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_debug_string, assert_equivalent, prop,
        syntax::Connective,
        test_prelude::{assert_connectives, random_samples, shallow_samples, SAMPLES},
        v,
    };

    fn not_and(formula: &Prop) -> Prop {
        formula.not_and().into()
    }

    const BASIS: &[Connective] = &[Connective::Not, Connective::And];

    #[test]
    fn test_not_and() {
        assert_debug_string!("p", not_and(&prop!("p")));
        assert_debug_string!("~p", not_and(&prop!("~p")));
        assert_debug_string!("p & q", not_and(&prop!("p & q")));
        assert_debug_string!("~(~p & ~q)", not_and(&prop!("p | q")));
        assert_debug_string!("~(p & ~q)", not_and(&prop!("p -> q")));
        assert_debug_string!("~(~p & ~q) & ~(p & q)", not_and(&prop!("p + q")));
        assert_debug_string!("~(~(p & q) & ~(~p & ~q))", not_and(&prop!("p <=> q")));
        assert_debug_string!("~(p & q)", not_and(&prop!("p -& q")));
        assert_debug_string!("~p & ~q", not_and(&prop!("p -| q")));
        assert_debug_string!("~(~(~p & ~q) & ~r)", not_and(&prop!("p | q -> r")));
        assert_debug_string!(
            "~(~(~(p & ~q)) & ~(~r & ~s))",
            not_and(&prop!("(p -> q) | (r -| s)"))
        );
    }

    #[test]
    fn not_and_constants() {
        assert_debug_string!("~(p & ~p)", not_and(&prop!("true")));
        assert_debug_string!("p & ~p", not_and(&prop!("false")));
        assert_debug_string!("~(~(q & ~q) & ~q)", not_and(&prop!("true -> q")));
        assert_debug_string!("~(~r & ~(r & ~r))", not_and(&prop!("r | false")));
    }

    #[test]
    fn not_and_scenarios() {
        {
            let result = not_and(&prop!("p | q"));
            assert_equivalent!(prop!("~(~p & ~q)"), result);
        }
        {
            let result = not_and(&prop!("true"));
            assert_eq!(vec![&v!(p)], result.vars());
            assert_eq!(Ok(true), result.is_tautology());
        }
    }

    #[test]
    fn not_and_preserves_semantics() {
        for formula in SAMPLES.iter().map(|s| prop!(s)) {
            let result = not_and(&formula);
            assert_connectives(BASIS, &result);
            assert_equivalent!(formula, result);
        }
        for formula in random_samples(100) {
            let result = not_and(&formula);
            assert_connectives(BASIS, &result);
            assert_equivalent!(formula, result);
        }
    }

    #[test]
    fn not_and_restricted_input() {
        for s in &["p", "~p & q", "~(~(p & q) & ~r)"] {
            let formula = prop!(s);
            assert_eq!(formula, not_and(&formula));
        }
    }

    #[test]
    fn not_and_composes() {
        use crate::transform::ToNotAndOr;

        for formula in shallow_samples() {
            let once = not_and(&formula);
            assert_eq!(once, not_and(&once));

            // through a larger basis first
            let through: Prop = formula.not_and_or().into();
            let result = not_and(&through);
            assert_connectives(BASIS, &result);
            assert_equivalent!(formula, result);
        }
    }

    #[test]
    fn not_and_to_string() {
        let result = prop!("p -| ~q").not_and();
        assert_eq!("¬p ∧ ¬(¬q)", result.to_string());
    }
}
