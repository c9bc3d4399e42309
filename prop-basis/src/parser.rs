//! Implements a parser for propositional formulae.
//!
//! The module provides a parser for propositional formulae by implementing [`FromStr`] for
//! [`Prop`]. The parser is often used implicitly through [`parse`] method.
//!
//! **Example**:
//! The following example parses a string into a [`Prop`]:
//! ```rust
//! use prop_basis::syntax::Prop;
//!
//! // compact notation:
//! let formula: Prop = "p & ~q -> r -& s".parse().unwrap();
//! assert_eq!("(p ∧ ¬q) → (r ↑ s)", formula.to_string());
//!
//! // verbose notation:
//! let formula: Prop = "(p xor q) iff not (r nor false)".parse().unwrap();
//! assert_eq!("(p ⊕ q) ⇔ ¬(r ↓ ⟘)", formula.to_string());
//! ```
//!
//! [`Prop`]: crate::syntax::Prop
//! [`FromStr`]: std::str::FromStr
//! [`parse`]: ::std::str#parse
use super::syntax::Prop;
use lalrpop_util::ParseError;
use std::str::FromStr;
use thiserror::Error;

lalrpop_mod!(pub grammar); // synthesized by LALRPOP

#[derive(PartialEq, Debug)]
pub enum TokenType {
    LParen,
    RParen,
    True,
    False,
    Not,
    And,
    Nand,
    Or,
    Xor,
    Nor,
    Implies,
    Iff,
    Var,
    Unknown,
}

impl<S: AsRef<str>> From<S> for TokenType {
    fn from(s: S) -> Self {
        // expected terminals are reported in their quoted form
        match s.as_ref().trim_matches('"') {
            "(" => Self::LParen,
            ")" => Self::RParen,
            "true" | "⊤" => Self::True,
            "false" | "⟘" => Self::False,
            "~" | "¬" | "not" => Self::Not,
            "&" | "∧" | "and" => Self::And,
            "-&" | "↑" | "nand" => Self::Nand,
            "|" | "∨" | "or" => Self::Or,
            "+" | "⊕" | "xor" => Self::Xor,
            "-|" | "↓" | "nor" => Self::Nor,
            "->" | "→" | "implies" => Self::Implies,
            "<=>" | "<->" | "⇔" | "↔" | "iff" => Self::Iff,
            "_VAR_" => Self::Var,
            _ => Self::Unknown,
        }
    }
}

impl ToString for TokenType {
    fn to_string(&self) -> String {
        match self {
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::True => "`true`",
            Self::False => "`false`",
            Self::Not => "`not`",
            Self::And => "`and`",
            Self::Nand => "`nand`",
            Self::Or => "`or`",
            Self::Xor => "`xor`",
            Self::Nor => "`nor`",
            Self::Implies => "`implies`",
            Self::Iff => "`iff`",
            Self::Var => "`variable`",
            Self::Unknown => "`unknown token`",
        }
        .into()
    }
}

/// Is the type of errors returned by the parser.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    #[error("found `{found:?}` at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected),
    )]
    UnrecognizedToken {
        position: Position,
        expected: Vec<TokenType>,
        found: String,
    },
    #[error("invalid token at line {}, column {}", (*.position).line, (*.position).column)]
    InvalidToken { position: Position },
    #[error("unexpected end of input at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected)
    )]
    UnrecognizedEOF {
        position: Position,
        expected: Vec<TokenType>,
    },
    #[error("unexpected token `{found:?}` at line {}, column {}", (*.position).line, (*.position).column)]
    ExtraToken { position: Position, found: String },
}

impl Error {
    fn pretty_expected_tokens(items: &[TokenType]) -> String {
        // several spellings of the same connective collapse into one token type
        let mut strs: Vec<String> = Vec::new();
        for item in items {
            let s = item.to_string();
            if !strs.contains(&s) {
                strs.push(s);
            }
        }
        match strs.len() {
            0 => "".into(),
            1 => strs[0].to_string(),
            2 => format!("{} or {}", strs[0], strs[1]),
            n => format!("{}, or {}", strs[0..n - 1].join(", "), strs[n - 1]),
        }
    }
}

/// Is a 1-based line and column in the parsed source.
#[derive(PartialEq, Debug)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

// Stores source information to retrieve token positions in the source.
struct SourceInfo<'s> {
    lines: Vec<usize>,
    source: &'s str,
}

impl<'s> SourceInfo<'s> {
    fn new(source: &'s str) -> Self {
        let lines = source
            .bytes()
            .enumerate()
            .filter(|&(_, ch)| ch == b'\n')
            .map(|(i, _)| i + 1);
        Self {
            lines: std::iter::once(0).chain(lines).collect(),
            source,
        }
    }

    fn position(&self, location: usize) -> Position {
        let index = self
            .lines
            .iter()
            .enumerate()
            .find(|&(_, l)| location < *l)
            .map(|(i, _)| i);
        let line = index.unwrap_or_else(|| self.lines.len());
        let column = self.source[self.lines[line - 1]..location].chars().count() + 1;

        Position { line, column }
    }

    fn convert_error<T: ToString>(&self, error: ParseError<usize, T, Error>) -> Error {
        match error {
            ParseError::InvalidToken { location } => Error::InvalidToken {
                position: self.position(location),
            },
            ParseError::UnrecognizedEOF { location, expected } => Error::UnrecognizedEOF {
                position: self.position(location),
                expected: expected.into_iter().map(From::from).collect(),
            },
            ParseError::UnrecognizedToken { token, expected } => Error::UnrecognizedToken {
                position: self.position(token.0),
                expected: expected.into_iter().map(From::from).collect(),
                found: token.1.to_string(),
            },
            ParseError::ExtraToken { token } => Error::ExtraToken {
                position: self.position(token.0),
                found: token.1.to_string(),
            },
            ParseError::User { error } => error,
        }
    }
}

impl FromStr for Prop {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let info = SourceInfo::new(s);
        grammar::FormulaParser::new()
            .parse(s)
            .map_err(|e| info.convert_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, v};

    fn parse(s: &str) -> Prop {
        s.parse().unwrap()
    }

    #[test]
    fn parse_atomic() {
        assert_eq!(Prop::Top, parse("true"));
        assert_eq!(Prop::Top, parse("⊤"));
        assert_eq!(Prop::Bottom, parse("false"));
        assert_eq!(Prop::Bottom, parse("⟘"));
        assert_eq!(Prop::from(v!(p)), parse("p"));
        assert_eq!(Prop::from(v!(q12)), parse("q12"));
        assert_eq!(Prop::from(v!(x_Y)), parse("x_Y"));
        assert_eq!(Prop::from(v!(truth)), parse("truth"));
        assert_eq!(Prop::from(v!(p)), parse("((p))"));
    }

    #[test]
    fn parse_connectives() {
        let p = || Prop::from(v!(p));
        let q = || Prop::from(v!(q));
        assert_eq!(Prop::not(p()), parse("~p"));
        assert_eq!(Prop::not(p()), parse("¬p"));
        assert_eq!(Prop::not(p()), parse("not p"));
        assert_eq!(p().and(q()), parse("p & q"));
        assert_eq!(p().and(q()), parse("p ∧ q"));
        assert_eq!(p().and(q()), parse("p and q"));
        assert_eq!(p().nand(q()), parse("p -& q"));
        assert_eq!(p().nand(q()), parse("p ↑ q"));
        assert_eq!(p().nand(q()), parse("p nand q"));
        assert_eq!(p().or(q()), parse("p | q"));
        assert_eq!(p().or(q()), parse("p ∨ q"));
        assert_eq!(p().or(q()), parse("p or q"));
        assert_eq!(p().xor(q()), parse("p + q"));
        assert_eq!(p().xor(q()), parse("p ⊕ q"));
        assert_eq!(p().xor(q()), parse("p xor q"));
        assert_eq!(p().nor(q()), parse("p -| q"));
        assert_eq!(p().nor(q()), parse("p ↓ q"));
        assert_eq!(p().nor(q()), parse("p nor q"));
        assert_eq!(p().implies(q()), parse("p -> q"));
        assert_eq!(p().implies(q()), parse("p → q"));
        assert_eq!(p().implies(q()), parse("p implies q"));
        assert_eq!(p().iff(q()), parse("p <=> q"));
        assert_eq!(p().iff(q()), parse("p <-> q"));
        assert_eq!(p().iff(q()), parse("p ⇔ q"));
        assert_eq!(p().iff(q()), parse("p ↔ q"));
        assert_eq!(p().iff(q()), parse("p iff q"));
    }

    #[test]
    fn parse_precedence() {
        assert_debug_string!("(~p & q) | r", parse("~p & q | r"));
        assert_debug_string!("p | (q & r)", parse("p | q & r"));
        assert_debug_string!("(p -& q) + r", parse("p -& q + r"));
        assert_debug_string!("(p | q) -> r", parse("p | q -> r"));
        assert_debug_string!("p -> (q -> r)", parse("p -> q -> r"));
        assert_debug_string!("(p -> q) <=> r", parse("p -> q <=> r"));
        assert_debug_string!("p <=> (q <=> r)", parse("p <=> q <=> r"));
        assert_debug_string!("(p | q) -| r", parse("p | q -| r"));
        assert_debug_string!("(p & q) -& r", parse("p & q -& r"));
        assert_debug_string!("~(~p)", parse("~~p"));
        assert_debug_string!("~(p & q)", parse("~(p & q)"));
    }

    #[test]
    fn parse_whitespace() {
        assert_debug_string!("p & q", parse("  p\n&\tq  "));
        assert_debug_string!("p & q", parse("p&q"));
    }

    #[test]
    fn parse_failure() {
        assert!("".parse::<Prop>().is_err());
        assert!("p &".parse::<Prop>().is_err());
        assert!("(p | q".parse::<Prop>().is_err());
        assert!("p q".parse::<Prop>().is_err());
        assert!("P".parse::<Prop>().is_err());
        assert!("p & & q".parse::<Prop>().is_err());
        assert!("not".parse::<Prop>().is_err());
    }

    #[test]
    fn parse_failure_kinds() {
        match "p &".parse::<Prop>() {
            Err(Error::UnrecognizedEOF { position, expected }) => {
                assert_eq!(1, position.line);
                assert!(expected.contains(&TokenType::Var));
                assert!(expected.contains(&TokenType::Not));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        match "p\n& )".parse::<Prop>() {
            Err(Error::UnrecognizedToken {
                position, found, ..
            }) => {
                assert_eq!(Position { line: 2, column: 3 }, position);
                assert_eq!(")", found);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        match "p # q".parse::<Prop>() {
            Err(Error::InvalidToken { position }) => {
                assert_eq!(Position { line: 1, column: 3 }, position);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn token_type_from_expected() {
        assert_eq!(TokenType::And, TokenType::from("\"&\""));
        assert_eq!(TokenType::Iff, TokenType::from("\"⇔\""));
        assert_eq!(TokenType::Var, TokenType::from("\"_VAR_\""));
        assert_eq!(TokenType::Unknown, TokenType::from("\"#\""));
    }

    #[test]
    fn error_to_string() {
        let error = Error::UnrecognizedEOF {
            position: Position { line: 1, column: 4 },
            expected: vec![TokenType::Not, TokenType::Not, TokenType::Var],
        };
        assert_eq!(
            "unexpected end of input at line 1, column 4; expecting `not` or `variable`",
            error.to_string()
        );
        let error = Error::InvalidToken {
            position: Position { line: 2, column: 1 },
        };
        assert_eq!("invalid token at line 2, column 1", error.to_string());
    }
}
