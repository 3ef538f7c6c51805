//! The enrollment validator.
//!
//! A request batch runs through a fixed pipeline of rules:
//!
//! 1. already passed
//! 2. prerequisites
//! 3. exam-time conflict
//! 4. duplicate request
//! 5. unit load
//!
//! [`EnrollmentPolicy::enroll`] stops at the first violation and commits
//! nothing unless the whole batch passes. [`EnrollmentPolicy::audit`] uses
//! Stillwater's `Validation` to collect every violation instead, for
//! callers that want to show all problems at once.
//!
//! # Example
//!
//! ```rust
//! use enrollment::core::{Course, CourseOffering, ExamTime, Student};
//! use enrollment::enforcement::{EnrollmentPolicy, EnrollmentRuleViolation};
//! use std::sync::Arc;
//!
//! let physics = Arc::new(Course::new("Physics", 4));
//! let mut student = Student::new(17.0);
//! let batch = vec![
//!     CourseOffering::new(physics.clone(), 1, ExamTime::from_ymd_hm(2024, 6, 10, 9, 0).unwrap()),
//!     CourseOffering::new(physics, 2, ExamTime::from_ymd_hm(2024, 6, 11, 9, 0).unwrap()),
//! ];
//!
//! let result = EnrollmentPolicy::default().enroll(&mut student, &batch);
//! assert!(matches!(result, Err(EnrollmentRuleViolation::DuplicateRequest { .. })));
//! assert!(student.enrollments().is_empty());
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use builder::PolicyBuilder;
pub use context::EnrollmentContext;
pub use error::BuildError;
pub use rules::{
    EnrollmentPolicy, Rule, UnitBracket, UnitLimits, Violations, DEFAULT_MAX_UNITS,
};
pub use violations::EnrollmentRuleViolation;

use crate::core::{CourseOffering, Student};

/// Enroll `student` in `offerings` under the default policy.
pub fn enroll(
    student: &mut Student,
    offerings: &[CourseOffering],
) -> Result<(), EnrollmentRuleViolation> {
    EnrollmentPolicy::default().enroll(student, offerings)
}
