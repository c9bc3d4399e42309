/*! Defines formulae over the basis `{¬, ∧, ∨}` and implements an algorithm for transforming
a [`Prop`] to a [`NotAndOr`].

[`Prop`]: crate::syntax::Prop
*/
use super::witness;
use crate::syntax::{And, Formula, FormulaEx, Not, Or, Prop, Var, PRECEDENCE_ATOM};
use std::fmt;

/// Represents a formula whose only connectives are negation, conjunction and disjunction.
///
/// **Note**: the basis has no constants; ⊤ and ⟘ are encoded as `p ∨ ¬p` and `p ∧ ¬p` over
/// some variable `p`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum NotAndOr {
    /// Is a propositional variable, wrapping a [`Var`].
    Var(Var),

    /// Is the negation of a formula, wrapping a [`Not`].
    Not(Box<Not<NotAndOr>>),

    /// Is a conjunction of two formulae, wrapping an [`And`].
    And(Box<And<NotAndOr>>),

    /// Is a disjunction of two formulae, wrapping an [`Or`].
    Or(Box<Or<NotAndOr>>),
}

impl From<Var> for NotAndOr {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl From<Not<NotAndOr>> for NotAndOr {
    fn from(value: Not<NotAndOr>) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<And<NotAndOr>> for NotAndOr {
    fn from(value: And<NotAndOr>) -> Self {
        Self::And(Box::new(value))
    }
}

impl From<Or<NotAndOr>> for NotAndOr {
    fn from(value: Or<NotAndOr>) -> Self {
        Self::Or(Box::new(value))
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`NotAndOr`].
pub trait ToNotAndOr: Formula {
    /// Transforms `self` to an equivalent formula over `{¬, ∧, ∨}`.
    ///
    /// **Example**:
    /// ```rust
    /// # use prop_basis::syntax::Prop;
    /// use prop_basis::transform::ToNotAndOr;
    ///
    /// let formula: Prop = "p <=> q".parse().unwrap();
    /// let result = formula.not_and_or();
    ///
    /// assert_eq!("(p ∧ q) ∨ (¬p ∧ ¬q)", result.to_string());
    /// ```
    fn not_and_or(&self) -> NotAndOr;
}

impl ToNotAndOr for Prop {
    fn not_and_or(&self) -> NotAndOr {
        let witness = witness(self);
        not_and_or(self, &witness)
    }
}

impl NotAndOr {
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

    #[inline(always)]
    fn or(self, formula: Self) -> Self {
        Or {
            left: self,
            right: formula,
        }
        .into()
    }
}

impl Formula for NotAndOr {
    fn vars(&self) -> Vec<&Var> {
        match self {
            Self::Var(this) => this.vars(),
            Self::Not(this) => this.vars(),
            Self::And(this) => this.vars(),
            Self::Or(this) => this.vars(),
        }
    }
}

impl FormulaEx for NotAndOr {
    fn precedence(&self) -> u8 {
        match self {
            Self::Var(_) => PRECEDENCE_ATOM,
            Self::Not(this) => this.precedence(),
            Self::And(this) => this.precedence(),
            Self::Or(this) => this.precedence(),
        }
    }
}

impl fmt::Display for NotAndOr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Prop::from(self), f)
    }
}

impl fmt::Debug for NotAndOr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Prop::from(self), f)
    }
}

impl From<NotAndOr> for Prop {
    fn from(value: NotAndOr) -> Self {
        match value {
            NotAndOr::Var(this) => this.into(),
            NotAndOr::Not(this) => Self::not(this.formula.into()),
            NotAndOr::And(this) => Self::from(this.left).and(this.right.into()),
            NotAndOr::Or(this) => Self::from(this.left).or(this.right.into()),
        }
    }
}

impl From<&NotAndOr> for Prop {
    fn from(value: &NotAndOr) -> Self {
        value.clone().into()
    }
}

fn tautology(witness: &Var) -> NotAndOr {
    let p = NotAndOr::from(witness.clone());
    p.clone().or(NotAndOr::not(p))
}

fn contradiction(witness: &Var) -> NotAndOr {
    let p = NotAndOr::from(witness.clone());
    p.clone().and(NotAndOr::not(p))
}

fn not_and_or(formula: &Prop, witness: &Var) -> NotAndOr {
    match formula {
        Prop::Top => tautology(witness),
        Prop::Bottom => contradiction(witness),
        Prop::Var(this) => this.clone().into(),
        Prop::Not(this) => NotAndOr::not(not_and_or(&this.formula, witness)),
        Prop::And(this) => {
            not_and_or(&this.left, witness).and(not_and_or(&this.right, witness))
        }
        Prop::Or(this) => not_and_or(&this.left, witness).or(not_and_or(&this.right, witness)),
        Prop::Implies(this) => {
            let premise = not_and_or(&this.premise, witness);
            NotAndOr::not(premise).or(not_and_or(&this.consequence, witness))
        }
        Prop::Xor(this) => {
            let left = not_and_or(&this.left, witness);
            let right = not_and_or(&this.right, witness);
            let left_and_not_right = left.clone().and(NotAndOr::not(right.clone()));
            let not_left_and_right = NotAndOr::not(left).and(right);
            left_and_not_right.or(not_left_and_right)
        }
        Prop::Iff(this) => {
            let left = not_and_or(&this.left, witness);
            let right = not_and_or(&this.right, witness);
            let left_and_right = left.clone().and(right.clone());
            let not_left_and_not_right = NotAndOr::not(left).and(NotAndOr::not(right));
            left_and_right.or(not_left_and_not_right)
        }
        Prop::Nand(this) => {
            let left = not_and_or(&this.left, witness);
            NotAndOr::not(left.and(not_and_or(&this.right, witness)))
        }
        Prop::Nor(this) => {
            let left = not_and_or(&this.left, witness);
            NotAndOr::not(left.or(not_and_or(&this.right, witness)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_debug_string, assert_equivalent, prop,
        syntax::Connective,
        test_prelude::{assert_connectives, random_samples, SAMPLES},
        v,
    };

    fn not_and_or(formula: &Prop) -> Prop {
        formula.not_and_or().into()
    }

    const BASIS: &[Connective] = &[Connective::Not, Connective::And, Connective::Or];

    #[test]
    fn test_not_and_or() {
        assert_debug_string!("p", not_and_or(&prop!("p")));
        assert_debug_string!("~p", not_and_or(&prop!("~p")));
        assert_debug_string!("p & q", not_and_or(&prop!("p & q")));
        assert_debug_string!("p | q", not_and_or(&prop!("p | q")));
        assert_debug_string!("~p | q", not_and_or(&prop!("p -> q")));
        assert_debug_string!("(p & ~q) | (~p & q)", not_and_or(&prop!("p + q")));
        assert_debug_string!("(p & q) | (~p & ~q)", not_and_or(&prop!("p <=> q")));
        assert_debug_string!("~(p & q)", not_and_or(&prop!("p -& q")));
        assert_debug_string!("~(p | q)", not_and_or(&prop!("p -| q")));
        // recursive application
        assert_debug_string!("~(~(~p | q))", not_and_or(&prop!("~~(p -> q)")));
        assert_debug_string!(
            "(~(p & q) & ~r) | (~(~(p & q)) & r)",
            not_and_or(&prop!("(p -& q) + r"))
        );
        assert_debug_string!("~(~p | q) | ~(r | s)", not_and_or(&prop!("~(p -> q) | (r -| s)")));
    }

    #[test]
    fn not_and_or_constants() {
        assert_debug_string!("p | ~p", not_and_or(&prop!("true")));
        assert_debug_string!("p & ~p", not_and_or(&prop!("false")));
        assert_debug_string!("~(p & ~p)", not_and_or(&prop!("~false")));
        assert_debug_string!("q & (q | ~q)", not_and_or(&prop!("q & true")));
        assert_debug_string!("(r & ~r) | ~r", not_and_or(&prop!("false | ~r")));
        assert_debug_string!("~(p | ~p) | (p & ~p)", not_and_or(&prop!("true -> false")));
    }

    #[test]
    fn not_and_or_scenarios() {
        {
            let result = not_and_or(&prop!("p -> q"));
            assert_equivalent!(prop!("~p | q"), result);
        }
        {
            // no variables at all: the default variable encodes the constant
            let result = not_and_or(&prop!("false"));
            assert_eq!(vec![&v!(p)], result.vars());
            assert_eq!(Ok(true), result.is_contradiction());
            assert_equivalent!(Prop::Bottom, result);
        }
    }

    #[test]
    fn not_and_or_preserves_semantics() {
        for formula in SAMPLES.iter().map(|s| prop!(s)) {
            let result = not_and_or(&formula);
            assert_connectives(BASIS, &result);
            assert_equivalent!(formula, result);
        }
        for formula in random_samples(100) {
            let result = not_and_or(&formula);
            assert_connectives(BASIS, &result);
            assert_equivalent!(formula, result);
        }
    }

    #[test]
    fn not_and_or_restricted_input() {
        for s in &["p", "~p & (q | ~r)", "~(~(p | q) & r)"] {
            let formula = prop!(s);
            assert_eq!(formula, not_and_or(&formula));
        }
    }

    #[test]
    fn not_and_or_composes() {
        for formula in SAMPLES.iter().map(|s| prop!(s)) {
            let once = not_and_or(&formula);
            let twice = not_and_or(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn not_and_or_vars() {
        let result = prop!("(q -& true) <=> p").not_and_or();
        assert_eq!(vec![&v!(q), &v!(p)], result.vars());
    }

    #[test]
    fn not_and_or_to_string() {
        let result = prop!("p -| (q -> false)").not_and_or();
        assert_eq!("¬(p ∨ (¬q ∨ (p ∧ ¬p)))", result.to_string());
    }
}
