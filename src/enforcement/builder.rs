//! Builder API for configuring enrollment policies.

use crate::enforcement::error::BuildError;
use crate::enforcement::rules::{EnrollmentPolicy, UnitBracket, UnitLimits, DEFAULT_MAX_UNITS};

/// Builder for creating enrollment policies with custom unit limits.
///
/// A fresh builder has no GPA brackets and the default ceiling of
/// [`DEFAULT_MAX_UNITS`].
///
/// ```rust
/// use enrollment::enforcement::PolicyBuilder;
///
/// let policy = PolicyBuilder::new()
///     .bracket(16.0, 16)
///     .bracket(12.0, 14)
///     .max_units(20)
///     .build()
///     .unwrap();
///
/// assert_eq!(policy.limits().max_units_for(13.0), 16);
/// ```
pub struct PolicyBuilder {
    brackets: Vec<UnitBracket>,
    ceiling: u32,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self {
            brackets: Vec::new(),
            ceiling: DEFAULT_MAX_UNITS,
        }
    }

    /// Limit students with a GPA strictly below `gpa_below` to `max_units`
    pub fn bracket(mut self, gpa_below: f64, max_units: u32) -> Self {
        self.brackets.push(UnitBracket {
            gpa_below,
            max_units,
        });
        self
    }

    /// Set the absolute unit ceiling, applied regardless of GPA
    pub fn max_units(mut self, ceiling: u32) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Build the policy.
    /// Returns an error if the brackets are inconsistent.
    pub fn build(self) -> Result<EnrollmentPolicy, BuildError> {
        if self.ceiling == 0 {
            return Err(BuildError::ZeroCeiling);
        }

        let mut brackets = self.brackets;
        if let Some(bad) = brackets.iter().find(|b| !b.gpa_below.is_finite()) {
            return Err(BuildError::NonFiniteBound {
                bound: bad.gpa_below,
            });
        }
        if let Some(bad) = brackets.iter().find(|b| b.max_units > self.ceiling) {
            return Err(BuildError::BracketAboveCeiling {
                bound: bad.gpa_below,
                max_units: bad.max_units,
                ceiling: self.ceiling,
            });
        }

        brackets.sort_by(|a, b| a.gpa_below.total_cmp(&b.gpa_below));
        if let Some(pair) = brackets
            .windows(2)
            .find(|pair| pair[0].gpa_below == pair[1].gpa_below)
        {
            return Err(BuildError::DuplicateBound {
                bound: pair[0].gpa_below,
            });
        }

        Ok(EnrollmentPolicy::new(UnitLimits {
            brackets,
            ceiling: self.ceiling,
        }))
    }
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
