//! Enrollment: a pure, stateless validator for course enrollment requests.
//!
//! A student asks to enroll in a batch of course offerings. The batch runs
//! through a fixed pipeline of business rules, and only if every rule
//! passes are all offerings committed to the student's record. A rejected
//! batch leaves the student exactly as it was.
//!
//! # Core Concepts
//!
//! - **Course / Offering**: Catalog courses and their sections, each with an exam time
//! - **Student**: GPA, passed-course history and the enrollment record
//! - **Policy**: The rule pipeline, configured with GPA-based unit limits
//! - **Violation**: The single error kind describing which rule failed
//!
//! # Example
//!
//! ```rust
//! use enrollment::core::{Course, CourseOffering, ExamTime, Student};
//! use enrollment::enroll;
//! use std::sync::Arc;
//!
//! let calculus = Arc::new(Course::new("Calculus I", 4));
//! let mut student = Student::new(17.0);
//! let exam = ExamTime::from_ymd_hm(2024, 6, 10, 9, 0).unwrap();
//!
//! enroll(&mut student, &[CourseOffering::new(calculus, 1, exam)]).unwrap();
//!
//! assert_eq!(student.enrollments().len(), 1);
//! assert_eq!(student.enrollments()[0].section, 1);
//! ```

pub mod core;
pub mod enforcement;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{Course, CourseOffering, Enrollment, ExamTime, Student};
pub use enforcement::{enroll, EnrollmentPolicy, EnrollmentRuleViolation, PolicyBuilder, Rule};
pub use snapshot::{StudentRecord, StudentSnapshot};
