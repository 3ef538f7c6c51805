//! Student academic record.

use super::course::Course;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// One committed (course, section) entry in a student's enrollment record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub course: Arc<Course>,
    pub section: u32,
}

/// A student as seen by the enrollment validator.
///
/// The GPA is a precomputed input. The passed-course set is read-only
/// here; the enrollment record is appended to only when a whole request
/// batch passes every rule.
///
/// # Example
///
/// ```rust
/// use enrollment::core::{Course, Student};
/// use std::sync::Arc;
///
/// let calculus = Arc::new(Course::new("Calculus I", 4));
/// let student = Student::new(15.5).with_passed(calculus.clone());
///
/// assert!(student.has_passed(&calculus));
/// assert!(student.enrollments().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    gpa: f64,
    passed: HashSet<Arc<Course>>,
    enrollments: Vec<Enrollment>,
}

impl Student {
    /// Create a student with the given GPA and an empty history.
    pub fn new(gpa: f64) -> Self {
        Self {
            gpa,
            passed: HashSet::new(),
            enrollments: Vec::new(),
        }
    }

    /// Record a course as already passed.
    pub fn with_passed(mut self, course: Arc<Course>) -> Self {
        self.passed.insert(course);
        self
    }

    /// Record several courses as already passed.
    pub fn with_passed_courses<I>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = Arc<Course>>,
    {
        self.passed.extend(courses);
        self
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Check whether the student has passed `course` (by course identity).
    pub fn has_passed(&self, course: &Course) -> bool {
        self.passed.contains(course)
    }

    /// Passed courses, in no particular order.
    pub fn passed_courses(&self) -> impl Iterator<Item = &Arc<Course>> {
        self.passed.iter()
    }

    /// Committed enrollments, in commit order.
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub(crate) fn take_course(&mut self, course: Arc<Course>, section: u32) {
        self.enrollments.push(Enrollment { course, section });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_student_has_empty_history() {
        let student = Student::new(14.0);

        assert_eq!(student.gpa(), 14.0);
        assert_eq!(student.passed_courses().count(), 0);
        assert!(student.enrollments().is_empty());
    }

    #[test]
    fn has_passed_uses_course_identity() {
        let student = Student::new(14.0).with_passed(Arc::new(Course::new("Statistics", 3)));

        assert!(student.has_passed(&Course::new("Statistics", 3)));
        assert!(!student.has_passed(&Course::new("Probability", 3)));
    }

    #[test]
    fn passed_courses_are_deduplicated() {
        let stats = Arc::new(Course::new("Statistics", 3));
        let student = Student::new(14.0).with_passed_courses(vec![stats.clone(), stats]);

        assert_eq!(student.passed_courses().count(), 1);
    }

    #[test]
    fn take_course_appends_in_order() {
        let mut student = Student::new(14.0);
        student.take_course(Arc::new(Course::new("Networks", 3)), 1);
        student.take_course(Arc::new(Course::new("Security", 3)), 2);

        let record: Vec<(&str, u32)> = student
            .enrollments()
            .iter()
            .map(|e| (e.course.name(), e.section))
            .collect();
        assert_eq!(record, vec![("Networks", 1), ("Security", 2)]);
    }

    #[test]
    fn student_roundtrips_through_json() {
        let mut student = Student::new(17.25).with_passed(Arc::new(Course::new("Calculus I", 4)));
        student.take_course(Arc::new(Course::new("Calculus II", 4)), 3);

        let json = serde_json::to_string(&student).unwrap();
        let restored: Student = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, student);
    }
}
