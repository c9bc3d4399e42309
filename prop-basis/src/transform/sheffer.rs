/*! Defines formulae over the Sheffer stroke (`↑`) and implements an algorithm for
transforming a [`Prop`] to a [`Sheffer`].

[`Prop`]: crate::syntax::Prop
*/
use super::witness;
use crate::syntax::{Formula, FormulaEx, Nand, Prop, Var, PRECEDENCE_ATOM};
use std::fmt;

/// Represents a formula whose only connective is the Sheffer stroke, `p ↑ q ≡ ¬(p ∧ q)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Sheffer {
    /// Is a propositional variable, wrapping a [`Var`].
    Var(Var),

    /// Is the Sheffer stroke of two formulae, wrapping a [`Nand`].
    Nand(Box<Nand<Sheffer>>),
}

impl From<Var> for Sheffer {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl From<Nand<Sheffer>> for Sheffer {
    fn from(value: Nand<Sheffer>) -> Self {
        Self::Nand(Box::new(value))
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`Sheffer`].
pub trait ToSheffer: Formula {
    /// Transforms `self` to an equivalent formula whose only connective is `↑`.
    ///
    /// **Example**:
    /// ```rust
    /// # use prop_basis::syntax::Prop;
    /// use prop_basis::transform::ToSheffer;
    ///
    /// let formula: Prop = "p -> q".parse().unwrap();
    /// let result = formula.sheffer();
    ///
    /// assert_eq!("p ↑ (q ↑ q)", result.to_string());
    /// ```
    fn sheffer(&self) -> Sheffer;
}

impl ToSheffer for Prop {
    fn sheffer(&self) -> Sheffer {
        let witness = witness(self);
        sheffer(self, &witness)
    }
}

impl Sheffer {
    #[inline(always)]
    fn nand(self, formula: Self) -> Self {
        Nand {
            left: self,
            right: formula,
        }
        .into()
    }

    // x ↑ x
    fn not(self) -> Self {
        self.clone().nand(self)
    }

    // (a ↑ b) ↑ (a ↑ b)
    fn and(self, formula: Self) -> Self {
        self.nand(formula).not()
    }

    // (a ↑ a) ↑ (b ↑ b)
    fn or(self, formula: Self) -> Self {
        self.not().nand(formula.not())
    }
}

impl Formula for Sheffer {
    fn vars(&self) -> Vec<&Var> {
        match self {
            Self::Var(this) => this.vars(),
            Self::Nand(this) => this.vars(),
        }
    }
}

impl FormulaEx for Sheffer {
    fn precedence(&self) -> u8 {
        match self {
            Self::Var(_) => PRECEDENCE_ATOM,
            Self::Nand(this) => this.precedence(),
        }
    }
}

impl fmt::Display for Sheffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Prop::from(self), f)
    }
}

impl fmt::Debug for Sheffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Prop::from(self), f)
    }
}

impl From<Sheffer> for Prop {
    fn from(value: Sheffer) -> Self {
        match value {
            Sheffer::Var(this) => this.into(),
            Sheffer::Nand(this) => Self::from(this.left).nand(this.right.into()),
        }
    }
}

impl From<&Sheffer> for Prop {
    fn from(value: &Sheffer) -> Self {
        value.clone().into()
    }
}

// p ↑ (p ↑ p)
fn tautology(witness: &Var) -> Sheffer {
    let p = Sheffer::from(witness.clone());
    p.clone().nand(p.not())
}

fn sheffer(formula: &Prop, witness: &Var) -> Sheffer {
    match formula {
        Prop::Top => tautology(witness),
        Prop::Bottom => tautology(witness).not(),
        Prop::Var(this) => this.clone().into(),
        Prop::Not(this) => sheffer(&this.formula, witness).not(),
        Prop::And(this) => sheffer(&this.left, witness).and(sheffer(&this.right, witness)),
        Prop::Or(this) => sheffer(&this.left, witness).or(sheffer(&this.right, witness)),
        Prop::Implies(this) => {
            let consequence = sheffer(&this.consequence, witness);
            sheffer(&this.premise, witness).nand(consequence.not())
        }
        Prop::Xor(this) => iff(
            sheffer(&this.left, witness),
            sheffer(&this.right, witness),
        )
        .not(),
        Prop::Iff(this) => iff(
            sheffer(&this.left, witness),
            sheffer(&this.right, witness),
        ),
        Prop::Nand(this) => sheffer(&this.left, witness).nand(sheffer(&this.right, witness)),
        Prop::Nor(this) => {
            let left = sheffer(&this.left, witness);
            left.or(sheffer(&this.right, witness)).not()
        }
    }
}

// (a ∨ b) ↑ (a ↑ b), that is ¬((a ∨ b) ∧ ¬(a ∧ b))
fn iff(left: Sheffer, right: Sheffer) -> Sheffer {
    let left_or_right = left.clone().or(right.clone());
    left_or_right.nand(left.nand(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_debug_string, assert_equivalent, prop,
        syntax::Connective,
        test_prelude::{assert_connectives, random_samples, shallow_samples, SAMPLES},
    };

    fn sheffer(formula: &Prop) -> Prop {
        formula.sheffer().into()
    }

    const BASIS: &[Connective] = &[Connective::Nand];

    #[test]
    fn test_sheffer() {
        assert_debug_string!("p", sheffer(&prop!("p")));
        assert_debug_string!("p -& p", sheffer(&prop!("~p")));
        assert_debug_string!("(p -& q) -& (p -& q)", sheffer(&prop!("p & q")));
        assert_debug_string!("(p -& p) -& (q -& q)", sheffer(&prop!("p | q")));
        assert_debug_string!("p -& (q -& q)", sheffer(&prop!("p -> q")));
        assert_debug_string!("p -& q", sheffer(&prop!("p -& q")));
        assert_debug_string!(
            "((p -& p) -& (q -& q)) -& ((p -& p) -& (q -& q))",
            sheffer(&prop!("p -| q"))
        );
        assert_debug_string!(
            "((p -& p) -& (q -& q)) -& (p -& q)",
            sheffer(&prop!("p <=> q"))
        );
        assert_debug_string!(
            "(((p -& p) -& (q -& q)) -& (p -& q)) -& (((p -& p) -& (q -& q)) -& (p -& q))",
            sheffer(&prop!("p + q"))
        );
        assert_debug_string!("(p -& p) -& (p -& p)", sheffer(&prop!("~~p")));
    }

    #[test]
    fn sheffer_constants() {
        assert_debug_string!("p -& (p -& p)", sheffer(&prop!("true")));
        assert_debug_string!(
            "(p -& (p -& p)) -& (p -& (p -& p))",
            sheffer(&prop!("false"))
        );
        assert_debug_string!("q -& (q -& (q -& q))", sheffer(&prop!("q -& true")));
    }

    #[test]
    fn sheffer_scenarios() {
        {
            let result = sheffer(&prop!("~p"));
            assert_debug_string!("p -& p", result);
            assert_equivalent!(prop!("~p"), result);
        }
        {
            let result = sheffer(&prop!("false"));
            assert_eq!(Ok(true), result.is_contradiction());
        }
    }

    #[test]
    fn sheffer_preserves_semantics() {
        for formula in SAMPLES.iter().map(|s| prop!(s)) {
            let result = sheffer(&formula);
            assert_connectives(BASIS, &result);
            assert_equivalent!(formula, result);
        }
        for formula in random_samples(100) {
            let result = sheffer(&formula);
            assert_connectives(BASIS, &result);
            assert_equivalent!(formula, result);
        }
    }

    #[test]
    fn sheffer_composes() {
        use crate::transform::ToNotAnd;

        for formula in shallow_samples() {
            let once = sheffer(&formula);
            assert_eq!(once, sheffer(&once));

            let through: Prop = formula.not_and().into();
            let result = sheffer(&through);
            assert_connectives(BASIS, &result);
            assert_equivalent!(formula, result);
        }
    }

    #[test]
    fn sheffer_to_string() {
        let result = prop!("~(p -& q)").sheffer();
        assert_eq!("(p ↑ q) ↑ (p ↑ q)", result.to_string());
    }
}
