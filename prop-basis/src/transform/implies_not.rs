/*! Defines formulae over the basis `{→, ¬}` and implements an algorithm for transforming
a [`Prop`] to an [`ImpliesNot`].

[`Prop`]: crate::syntax::Prop
*/
use super::witness;
use crate::syntax::{Formula, FormulaEx, Implies, Not, Prop, Var, PRECEDENCE_ATOM};
use std::fmt;

/// Represents a formula whose only connectives are implication and negation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ImpliesNot {
    /// Is a propositional variable, wrapping a [`Var`].
    Var(Var),

    /// Is the negation of a formula, wrapping a [`Not`].
    Not(Box<Not<ImpliesNot>>),

    /// Is an implication between two formulae, wrapping an [`Implies`].
    Implies(Box<Implies<ImpliesNot>>),
}

impl From<Var> for ImpliesNot {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl From<Not<ImpliesNot>> for ImpliesNot {
    fn from(value: Not<ImpliesNot>) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<Implies<ImpliesNot>> for ImpliesNot {
    fn from(value: Implies<ImpliesNot>) -> Self {
        Self::Implies(Box::new(value))
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`ImpliesNot`].
pub trait ToImpliesNot: Formula {
    /// Transforms `self` to an equivalent formula over `{→, ¬}`.
    ///
    /// **Example**:
    /// ```rust
    /// # use prop_basis::syntax::Prop;
    /// use prop_basis::transform::ToImpliesNot;
    ///
    /// let formula: Prop = "p & q".parse().unwrap();
    /// let result = formula.implies_not();
    ///
    /// assert_eq!("¬(p → ¬q)", result.to_string());
    /// ```
    fn implies_not(&self) -> ImpliesNot;
}

impl ToImpliesNot for Prop {
    fn implies_not(&self) -> ImpliesNot {
        let witness = witness(self);
        implies_not(self, &witness)
    }
}

impl ImpliesNot {
    #[inline(always)]
    fn not(formula: Self) -> Self {
        Not { formula }.into()
    }

    #[inline(always)]
    fn implies(self, formula: Self) -> Self {
        Implies {
            premise: self,
            consequence: formula,
        }
        .into()
    }

    // ¬a → b
    fn or(self, formula: Self) -> Self {
        Self::not(self).implies(formula)
    }

    // ¬(a → ¬b)
    fn and(self, formula: Self) -> Self {
        Self::not(self.implies(Self::not(formula)))
    }
}

impl Formula for ImpliesNot {
    fn vars(&self) -> Vec<&Var> {
        match self {
            Self::Var(this) => this.vars(),
            Self::Not(this) => this.vars(),
            Self::Implies(this) => this.vars(),
        }
    }
}

impl FormulaEx for ImpliesNot {
    fn precedence(&self) -> u8 {
        match self {
            Self::Var(_) => PRECEDENCE_ATOM,
            Self::Not(this) => this.precedence(),
            Self::Implies(this) => this.precedence(),
        }
    }
}

impl fmt::Display for ImpliesNot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Prop::from(self), f)
    }
}

impl fmt::Debug for ImpliesNot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Prop::from(self), f)
    }
}

impl From<ImpliesNot> for Prop {
    fn from(value: ImpliesNot) -> Self {
        match value {
            ImpliesNot::Var(this) => this.into(),
            ImpliesNot::Not(this) => Self::not(this.formula.into()),
            ImpliesNot::Implies(this) => {
                Self::from(this.premise).implies(this.consequence.into())
            }
        }
    }
}

impl From<&ImpliesNot> for Prop {
    fn from(value: &ImpliesNot) -> Self {
        value.clone().into()
    }
}

// p → p
fn tautology(witness: &Var) -> ImpliesNot {
    let p = ImpliesNot::from(witness.clone());
    p.clone().implies(p)
}

fn implies_not(formula: &Prop, witness: &Var) -> ImpliesNot {
    match formula {
        Prop::Top => tautology(witness),
        Prop::Bottom => ImpliesNot::not(tautology(witness)),
        Prop::Var(this) => this.clone().into(),
        Prop::Not(this) => ImpliesNot::not(implies_not(&this.formula, witness)),
        Prop::And(this) => {
            implies_not(&this.left, witness).and(implies_not(&this.right, witness))
        }
        Prop::Or(this) => implies_not(&this.left, witness).or(implies_not(&this.right, witness)),
        Prop::Implies(this) => {
            let premise = implies_not(&this.premise, witness);
            premise.implies(implies_not(&this.consequence, witness))
        }
        Prop::Xor(this) => {
            let left = implies_not(&this.left, witness);
            let right = implies_not(&this.right, witness);
            let left_or_right = left.clone().or(right.clone());
            left_or_right.and(ImpliesNot::not(left.and(right)))
        }
        Prop::Iff(this) => {
            let left = implies_not(&this.left, witness);
            let right = implies_not(&this.right, witness);
            let left_implies_right = left.clone().implies(right.clone());
            left_implies_right.and(right.implies(left))
        }
        Prop::Nand(this) => {
            let left = implies_not(&this.left, witness);
            ImpliesNot::not(left.and(implies_not(&this.right, witness)))
        }
        Prop::Nor(this) => {
            let left = implies_not(&this.left, witness);
            ImpliesNot::not(left.or(implies_not(&this.right, witness)))
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

    fn implies_not(formula: &Prop) -> Prop {
        formula.implies_not().into()
    }

    const BASIS: &[Connective] = &[Connective::Implies, Connective::Not];

    #[test]
    fn test_implies_not() {
        assert_debug_string!("p", implies_not(&prop!("p")));
        assert_debug_string!("~p", implies_not(&prop!("~p")));
        assert_debug_string!("~(p -> ~q)", implies_not(&prop!("p & q")));
        assert_debug_string!("~p -> q", implies_not(&prop!("p | q")));
        assert_debug_string!("p -> q", implies_not(&prop!("p -> q")));
        assert_debug_string!("~(~(p -> ~q))", implies_not(&prop!("p -& q")));
        assert_debug_string!("~(~p -> q)", implies_not(&prop!("p -| q")));
        assert_debug_string!("~((p -> q) -> ~(q -> p))", implies_not(&prop!("p <=> q")));
        assert_debug_string!(
            "~((~p -> q) -> ~(~(~(p -> ~q))))",
            implies_not(&prop!("p + q"))
        );
        assert_debug_string!("(p -> q) -> (~q -> r)", implies_not(&prop!("(p -> q) -> q | r")));
    }

    #[test]
    fn implies_not_constants() {
        assert_debug_string!("p -> p", implies_not(&prop!("true")));
        assert_debug_string!("~(p -> p)", implies_not(&prop!("false")));
        assert_debug_string!("~(q -> q) -> q", implies_not(&prop!("false -> q")));
    }

    #[test]
    fn implies_not_scenarios() {
        {
            let result = implies_not(&prop!("p + q"));
            assert_equivalent!(prop!("(p | q) & ~(p & q)"), result);
        }
        {
            let result = implies_not(&prop!("~true"));
            assert_eq!(vec![&v!(p)], result.vars());
            assert_eq!(Ok(true), result.is_contradiction());
        }
    }

    #[test]
    fn implies_not_preserves_semantics() {
        for formula in SAMPLES.iter().map(|s| prop!(s)) {
            let result = implies_not(&formula);
            assert_connectives(BASIS, &result);
            assert_equivalent!(formula, result);
        }
        for formula in random_samples(100) {
            let result = implies_not(&formula);
            assert_connectives(BASIS, &result);
            assert_equivalent!(formula, result);
        }
    }

    #[test]
    fn implies_not_composes() {
        use crate::transform::ToSheffer;

        for formula in shallow_samples() {
            let once = implies_not(&formula);
            assert_eq!(once, implies_not(&once));

            let through: Prop = formula.sheffer().into();
            let result = implies_not(&through);
            assert_connectives(BASIS, &result);
            assert_equivalent!(formula, result);
        }
    }

    #[test]
    fn implies_not_to_string() {
        let result = prop!("p <=> q").implies_not();
        assert_eq!("¬((p → q) → ¬(q → p))", result.to_string());
    }
}
