//! Enrollment rule violations.

use crate::enforcement::rules::Rule;
use thiserror::Error;

/// A failed enrollment business rule.
///
/// This is the only error kind the validator produces. Each variant carries
/// the names needed to describe the offending entities; `Display` renders
/// the human-readable message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EnrollmentRuleViolation {
    #[error("The student has already passed {course}")]
    AlreadyPassed { course: String },

    #[error("The student has not passed {prerequisite} as a prerequisite of {course}")]
    MissingPrerequisite { prerequisite: String, course: String },

    #[error("Two offerings {first} and {second} have the same exam time")]
    ExamTimeConflict { first: String, second: String },

    #[error("{course} is requested to be taken twice")]
    DuplicateRequest { course: String },

    #[error("Number of units ({requested}) requested does not match GPA of {gpa:.6}")]
    UnitLimitExceeded { requested: u32, gpa: f64 },
}

impl EnrollmentRuleViolation {
    /// The pipeline stage that produced this violation.
    pub fn rule(&self) -> Rule {
        match self {
            Self::AlreadyPassed { .. } => Rule::AlreadyPassed,
            Self::MissingPrerequisite { .. } => Rule::Prerequisites,
            Self::ExamTimeConflict { .. } => Rule::ExamTimeConflict,
            Self::DuplicateRequest { .. } => Rule::DuplicateRequest,
            Self::UnitLimitExceeded { .. } => Rule::UnitLoad,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}
