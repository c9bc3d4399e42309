/*! Implements the truth-functional semantics of propositional formulae.

An [`Assignment`] maps variables to truth values; a [`Prop`] is evaluated under an
assignment that covers its variables. Semantic notions such as tautology and
equivalence are decided by enumerating every assignment of the relevant variables.

[`Prop`]: crate::syntax::Prop
*/
use crate::syntax::{Formula, Prop, Var};
use itertools::Itertools;
use std::{collections::BTreeMap, fmt, iter::FromIterator};
use thiserror::Error;

/// Is the type of errors arising from evaluating formulae.
#[derive(Error, Clone, PartialEq, Debug)]
pub enum Error {
    /// Is returned when a formula mentions a variable with no truth value in the assignment.
    #[error("variable `{}` is not assigned a truth value", .variable.to_string())]
    UnassignedVariable { variable: Var },

    /// Is returned when a formula has more variables than assignments can be enumerated for.
    #[error(
        "cannot enumerate the assignments of {} variables; at most {} are supported",
        .count,
        MAX_VARS
    )]
    TooManyVariables { count: usize },
}

/// Is the largest number of variables whose assignments can be enumerated.
pub const MAX_VARS: usize = 127;

/// Is an assignment of truth values to variables.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    values: BTreeMap<Var, bool>,
}

impl Assignment {
    /// Returns an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `value` to `variable`, replacing any earlier value.
    pub fn insert(&mut self, variable: Var, value: bool) {
        self.values.insert(variable, value);
    }

    /// Returns the truth value of `variable` if it is assigned.
    pub fn get(&self, variable: &Var) -> Option<bool> {
        self.values.get(variable).copied()
    }

    /// Returns the variables of the receiver.
    pub fn vars(&self) -> impl Iterator<Item = &Var> {
        self.values.keys()
    }
}

impl FromIterator<(Var, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Var, bool)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let values = self
            .values
            .iter()
            .map(|(v, b)| format!("{} ↦ {}", v, b))
            .join(", ");
        write!(f, "{{{}}}", values)
    }
}

impl fmt::Debug for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Iterates over every assignment of truth values to a list of variables.
///
/// The first assignment maps every variable to `false`; the last variable of the list
/// changes fastest.
pub struct Assignments {
    vars: Vec<Var>,
    next: u128,
    end: u128,
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let current = self.next;
        self.next += 1;

        let size = self.vars.len();
        Some(
            self.vars
                .iter()
                .enumerate()
                .map(|(i, v)| (v.clone(), current >> (size - 1 - i) & 1 == 1))
                .collect(),
        )
    }
}

/// Returns an iterator over all `2^n` assignments to `vars`.
///
/// **Note**: a list with more than [`MAX_VARS`] variables is rejected with
/// [`Error::TooManyVariables`].
///
/// **Example**:
/// ```rust
/// use prop_basis::{semantics::assignments, v};
///
/// let p = v!(p);
/// let q = v!(q);
/// let all = assignments(&[&p, &q])
///     .unwrap()
///     .map(|a| a.to_string())
///     .collect::<Vec<_>>();
///
/// assert_eq!(
///     vec![
///         "{p ↦ false, q ↦ false}",
///         "{p ↦ false, q ↦ true}",
///         "{p ↦ true, q ↦ false}",
///         "{p ↦ true, q ↦ true}",
///     ],
///     all
/// );
/// ```
pub fn assignments(vars: &[&Var]) -> Result<Assignments, Error> {
    if vars.len() > MAX_VARS {
        return Err(Error::TooManyVariables { count: vars.len() });
    }
    Ok(Assignments {
        vars: vars.iter().map(|&v| v.clone()).collect(),
        next: 0,
        end: 1 << vars.len(),
    })
}

impl Prop {
    /// Evaluates the receiver under `assignment`.
    ///
    /// **Example**:
    /// ```rust
    /// use prop_basis::{semantics::Assignment, syntax::Prop, v};
    ///
    /// let formula: Prop = "p -& ~q".parse().unwrap();
    /// let assignment: Assignment = vec![(v!(p), true), (v!(q), false)].into_iter().collect();
    ///
    /// assert_eq!(Ok(false), formula.evaluate(&assignment));
    /// assert!(formula.evaluate(&Assignment::new()).is_err());
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, Error> {
        let value = match self {
            Self::Top => true,
            Self::Bottom => false,
            Self::Var(this) => {
                assignment
                    .get(this)
                    .ok_or_else(|| Error::UnassignedVariable {
                        variable: this.clone(),
                    })?
            }
            Self::Not(this) => !this.formula().evaluate(assignment)?,
            Self::And(this) => {
                this.left().evaluate(assignment)? && this.right().evaluate(assignment)?
            }
            Self::Or(this) => {
                this.left().evaluate(assignment)? || this.right().evaluate(assignment)?
            }
            Self::Implies(this) => {
                !this.premise().evaluate(assignment)? || this.consequence().evaluate(assignment)?
            }
            Self::Xor(this) => {
                this.left().evaluate(assignment)? != this.right().evaluate(assignment)?
            }
            Self::Iff(this) => {
                this.left().evaluate(assignment)? == this.right().evaluate(assignment)?
            }
            Self::Nand(this) => {
                !(this.left().evaluate(assignment)? && this.right().evaluate(assignment)?)
            }
            Self::Nor(this) => {
                !(this.left().evaluate(assignment)? || this.right().evaluate(assignment)?)
            }
        };
        Ok(value)
    }

    /// Returns the truth values of the receiver under every assignment to its variables,
    /// in the order of [`assignments`].
    pub fn truth_values(&self) -> Result<Vec<bool>, Error> {
        let vars = self.vars();
        assignments(&vars)?.map(|a| self.evaluate(&a)).collect()
    }

    /// Returns the truth table of the receiver.
    pub fn truth_table(&self) -> Result<TruthTable, Error> {
        let vars = self.vars();
        let rows = assignments(&vars)?
            .map(|a| {
                let value = self.evaluate(&a)?;
                let values = vars.iter().map(|v| a.get(v).unwrap_or(false)).collect();
                Ok((values, value))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(TruthTable {
            vars: vars.into_iter().cloned().collect(),
            formula: self.clone(),
            rows,
        })
    }

    /// Returns true if the receiver is true under every assignment.
    pub fn is_tautology(&self) -> Result<bool, Error> {
        Ok(self.truth_values()?.into_iter().all(|b| b))
    }

    /// Returns true if the receiver is false under every assignment.
    pub fn is_contradiction(&self) -> Result<bool, Error> {
        self.is_satisfiable().map(|b| !b)
    }

    /// Returns true if the receiver is true under some assignment.
    pub fn is_satisfiable(&self) -> Result<bool, Error> {
        Ok(self.truth_values()?.into_iter().any(|b| b))
    }

    /// Returns true if the receiver and `other` agree on every assignment to the
    /// variables of both.
    ///
    /// **Note**: a variable that appears in only one of the two formulae ranges over both
    /// truth values; the formulae are equivalent only if the truth value of that variable
    /// is irrelevant.
    ///
    /// **Example**:
    /// ```rust
    /// use prop_basis::syntax::Prop;
    ///
    /// let formula: Prop = "p -> q".parse().unwrap();
    /// assert_eq!(Ok(true), formula.is_equivalent(&"~p | q".parse().unwrap()));
    /// assert_eq!(Ok(true), formula.is_equivalent(&"(~p | q) & (r | ~r)".parse().unwrap()));
    /// assert_eq!(Ok(false), formula.is_equivalent(&"q -> p".parse().unwrap()));
    /// ```
    pub fn is_equivalent(&self, other: &Prop) -> Result<bool, Error> {
        let mut vars = self.vars();
        vars.extend(other.vars());
        let vars = vars.into_iter().unique().collect_vec();
        for a in assignments(&vars)? {
            if self.evaluate(&a)? != other.evaluate(&a)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

}

/// Is the truth table of a formula.
#[derive(Debug)]
pub struct TruthTable {
    vars: Vec<Var>,
    formula: Prop,
    rows: Vec<(Vec<bool>, bool)>,
}

impl TruthTable {
    /// Returns the variables of the table, in column order.
    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    /// Returns the rows of the table: the truth values of the variables, followed by the
    /// truth value of the formula.
    pub fn rows(&self) -> &[(Vec<bool>, bool)] {
        &self.rows
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut headers = self.vars.iter().map(|v| v.to_string()).collect_vec();
        headers.push(self.formula.to_string());
        let widths = headers.iter().map(|h| h.chars().count()).collect_vec();

        let cell = |s: &str, width: usize| format!(" {:<width$} ", s, width = width);
        let line = |cells: Vec<String>| format!("|{}|", cells.join("|"));

        writeln!(
            f,
            "{}",
            line(headers.iter().zip(&widths).map(|(h, &w)| cell(h.as_str(), w)).collect())
        )?;
        write!(
            f,
            "{}",
            line(widths.iter().map(|&w| "-".repeat(w + 2)).collect())
        )?;
        for (values, value) in &self.rows {
            let cells = values
                .iter()
                .chain(std::iter::once(value))
                .zip(&widths)
                .map(|(&b, &w)| cell(if b { "T" } else { "F" }, w))
                .collect();
            write!(f, "\n{}", line(cells))?;
        }
        Ok(())
    }
}
