/*! Generates random formulae for property tests and benchmarks. */
use crate::syntax::{Prop, Var};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Configures the shape of the formulae generated by [`RandomProp`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RandomConfig {
    /// Is the seed of the generator; equal seeds produce equal sequences.
    pub seed: u64,

    /// Is the maximum depth of a generated formula.
    pub depth: usize,

    /// Is the number of distinct variables, named `p0`, `p1`, ...
    pub vars: usize,

    /// Allows `⊤` and `⟘` at the leaves.
    pub constants: bool,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            depth: 5,
            vars: 3,
            constants: true,
        }
    }
}

/// Is an endless iterator over random formulae that use every connective.
///
/// **Example**:
/// ```rust
/// use prop_basis::random::{RandomConfig, RandomProp};
///
/// let config = RandomConfig { seed: 7, ..RandomConfig::default() };
/// let first = RandomProp::new(config.clone()).take(10).collect::<Vec<_>>();
/// let second = RandomProp::new(config).take(10).collect::<Vec<_>>();
///
/// assert_eq!(first, second);
/// ```
pub struct RandomProp {
    rng: StdRng,
    depth: usize,
    vars: Vec<Var>,
    constants: bool,
}

impl RandomProp {
    pub fn new(config: RandomConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            depth: config.depth,
            vars: (0..config.vars.max(1))
                .map(|i| Var::from(format!("p{}", i)))
                .collect(),
            constants: config.constants,
        }
    }

    /// Returns a new random formula no deeper than the configured depth.
    pub fn generate(&mut self) -> Prop {
        self.formula(self.depth)
    }

    fn leaf(&mut self) -> Prop {
        if self.constants && self.rng.gen_bool(0.1) {
            if self.rng.gen_bool(0.5) {
                Prop::Top
            } else {
                Prop::Bottom
            }
        } else {
            let index = self.rng.gen_range(0, self.vars.len());
            self.vars[index].clone().into()
        }
    }

    fn formula(&mut self, depth: usize) -> Prop {
        if depth == 0 || self.rng.gen_bool(0.2) {
            return self.leaf();
        }

        match self.rng.gen_range(0, 8) {
            0 => Prop::not(self.formula(depth - 1)),
            choice => {
                let left = self.formula(depth - 1);
                let right = self.formula(depth - 1);
                match choice {
                    1 => left.and(right),
                    2 => left.or(right),
                    3 => left.implies(right),
                    4 => left.xor(right),
                    5 => left.iff(right),
                    6 => left.nand(right),
                    _ => left.nor(right),
                }
            }
        }
    }
}

impl Iterator for RandomProp {
    type Item = Prop;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}
