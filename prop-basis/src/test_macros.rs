#[macro_export]
macro_rules! assert_eq_sorted_vecs {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                let mut l = left_val.to_vec();
                let mut r = right_val.to_vec();
                l.sort();
                r.sort();
                assert_eq!(l, r)
            }
        }
    }};
    ($left:expr, $right:expr ,) => {
        $crate::assert_eq_sorted_vecs!($left, $right)
    };
}

#[macro_export]
macro_rules! assert_debug_string {
    ($expected:expr, $value:expr) => {{
        match (&$expected, &$value) {
            (expected_val, val) => assert_eq!(*expected_val, format!("{:?}", val)),
        }
    }};
    ($expected:expr, $value:expr ,) => {
        $crate::assert_debug_string!($expected, $value)
    };
}

// Asserts that two `Prop`s agree on every assignment to the union of their variables.
#[macro_export]
macro_rules! assert_equivalent {
    ($expected:expr, $value:expr) => {{
        match (&$expected, &$value) {
            (expected_val, val) => {
                let expected_prop: $crate::syntax::Prop = expected_val.clone().into();
                let prop: $crate::syntax::Prop = val.clone().into();
                assert!(
                    expected_prop.is_equivalent(&prop) == Ok(true),
                    "`{:?}` is not equivalent to `{:?}`",
                    expected_prop,
                    prop
                )
            }
        }
    }};
    ($expected:expr, $value:expr ,) => {
        $crate::assert_equivalent!($expected, $value)
    };
}
