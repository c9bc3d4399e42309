use crate::{
    random::{RandomConfig, RandomProp},
    syntax::{Connective, Prop},
};

pub fn equal_sets<T: Eq>(first: &[T], second: &[T]) -> bool {
    first.iter().all(|e| second.contains(e)) && second.iter().all(|e| first.contains(e))
}

// Formulae covering every connective, alone and nested, with and without constants.
pub const SAMPLES: &[&str] = &[
    "p",
    "true",
    "false",
    "~p",
    "~true",
    "~~false",
    "p & q",
    "p | q",
    "p -> q",
    "p + q",
    "p <=> q",
    "p -& q",
    "p -| q",
    "p & p",
    "p -& p",
    "q -> true",
    "false + r",
    "true <=> false",
    "~(p -> q) | (r -| s)",
    "(p -& q) + r",
    "(p <=> q) -> ~(q + r)",
    "((p -> q) & (q -> r)) -> (p -> r)",
    "(p | ~p) <=> (q -| false)",
    "~(p & (q | (r -> (s <=> (p + (q -& (r -| s)))))))",
];

// Returns the samples that stay small across a chain of conversions.
pub fn shallow_samples() -> impl Iterator<Item = Prop> {
    SAMPLES
        .iter()
        .filter(|s| s.len() <= 24)
        .map(|s| s.parse().unwrap())
}

// Returns `count` random formulae over four variables, including constants.
pub fn random_samples(count: usize) -> Vec<Prop> {
    let config = RandomConfig {
        seed: 0x_5EED,
        depth: 4,
        vars: 4,
        constants: true,
    };
    RandomProp::new(config).take(count).collect()
}

// Asserts that every connective of `formula` belongs to `basis`.
pub fn assert_connectives(basis: &[Connective], formula: &Prop) {
    for connective in formula.connectives() {
        assert!(
            basis.contains(&connective),
            "unexpected connective `{}` in `{:?}`",
            connective,
            formula
        );
    }
}
