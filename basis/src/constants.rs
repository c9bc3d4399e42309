use crate::terminal::StyleId;

pub(crate) const ASCII_ART: &str = r#"
     ┌───────────────────────────────┐
     │  ¬ ∧ ∨   ¬ ∧   ↑   → ¬   → ⟘  │
     │ ───────── b a s i s ───────── │
     └───────────────────────────────┘
"#;
pub(crate) const STYLE_LOGO: StyleId = 0;
pub(crate) const STYLE_INFO: StyleId = 1;
pub(crate) const STYLE_FORMULA: StyleId = 2;
pub(crate) const STYLE_BASIS: StyleId = 3;
pub(crate) const STYLE_RESULT: StyleId = 4;
pub(crate) const STYLE_FAIL: StyleId = 5;

// verification and truth tables enumerate every assignment; larger formulae are skipped.
pub(crate) const MAX_ENUMERATED_VARS: usize = 16;
