//! Univariate polynomials, truncated Taylor series of elementary functions
//! and families of orthogonal polynomials.
pub mod series;
pub mod special;
pub mod univariate;

use smartstring::{LazyCompact, SmartString};

/// The name of the variable of a polynomial.
pub type Variable = SmartString<LazyCompact>;

/// The variable name used when none is given.
pub const DEFAULT_VARIABLE: &str = "x";
