//! Canonical CSS keyword spellings.
//!
//! [§ 3.1 Pre-defined Keywords](https://www.w3.org/TR/css-values-4/#keywords)
//!
//! "Keywords and other pre-defined idents are ASCII case-insensitive" — values
//! store and serialize the canonical lowercase spelling listed here.

/// `none` — also the serialization of an unconstrained grid template.
pub const NONE: &str = "none";

/// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
pub const AUTO: &str = "auto";

/// [CSS Cascading § 7.3.1 initial](https://www.w3.org/TR/css-cascade-4/#initial)
pub const INITIAL: &str = "initial";

/// [CSS Cascading § 7.3.2 inherit](https://www.w3.org/TR/css-cascade-4/#inherit)
pub const INHERIT: &str = "inherit";

/// [CSS Cascading § 7.3.4 unset](https://www.w3.org/TR/css-cascade-4/#inherit-initial)
pub const UNSET: &str = "unset";
