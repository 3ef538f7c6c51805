//! Build errors for enrollment policies.

use thiserror::Error;

/// Errors that can occur when building an enrollment policy.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("GPA bound {bound} is not a finite number")]
    NonFiniteBound { bound: f64 },

    #[error("More than one bracket uses the GPA bound {bound}")]
    DuplicateBound { bound: f64 },

    #[error("Bracket for GPA below {bound} allows {max_units} units, above the ceiling of {ceiling}")]
    BracketAboveCeiling {
        bound: f64,
        max_units: u32,
        ceiling: u32,
    },

    #[error("Maximum units must be greater than zero. Call .max_units(n) with n > 0")]
    ZeroCeiling,
}
