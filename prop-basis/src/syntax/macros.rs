/// Creates a [`Var`] from an identifier.
///
/// **Example**:
/// ```rust
/// use prop_basis::{syntax::Var, v};
///
/// assert_eq!(Var::from("p"), v!(p));
/// ```
///
/// [`Var`]: crate::syntax::Var
#[macro_export]
macro_rules! v {
    ($v:ident) => {
        $crate::syntax::Var::from(stringify!($v))
    };
}

/// Creates a [`Prop`] from a string in the syntax of the parser, panicking if the string
/// is not a valid formula.
///
/// **Example**:
/// ```rust
/// use prop_basis::prop;
///
/// assert_eq!("p ∧ ¬q", prop!("p & ~q").to_string());
/// ```
///
/// [`Prop`]: crate::syntax::Prop
#[macro_export]
macro_rules! prop {
    ($s:expr) => {
        $s.parse::<$crate::syntax::Prop>().unwrap()
    };
}
