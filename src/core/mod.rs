//! Core enrollment data model.
//!
//! This module contains the values the validator reasons about:
//! - Courses and their prerequisite graph
//! - Course offerings (sections with an exam time)
//! - Students with their passed-course history and enrollment record
//!
//! Courses and offerings are immutable once built. A student's enrollment
//! record only grows through a successful
//! [`EnrollmentPolicy::enroll`](crate::enforcement::EnrollmentPolicy::enroll).

mod course;
mod student;

pub use course::{Course, CourseOffering, ExamTime};
pub use student::{Enrollment, Student};
