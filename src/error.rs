//! Errors returned by the fallible constructors of this crate.
//!
//! Most algebraic operations cannot fail: they either are total or have
//! preconditions that are documented on the operation itself.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// A continued fraction was requested without any terms.
    #[error("a continued fraction needs at least one term")]
    EmptyContinuedFraction,
    /// A nonzero value was divided by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The name does not correspond to a known Taylor series.
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
}
