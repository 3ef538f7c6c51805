//! Courses, exam times and course offerings.
//!
//! Courses are shared through [`Arc`] so that offerings, prerequisite lists
//! and student records can reference the same catalog entry without owning it.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A catalog course.
///
/// A course is identified by its name: two `Course` values with the same
/// name are the same course, whatever their units or prerequisites say.
///
/// # Example
///
/// ```rust
/// use enrollment::core::Course;
/// use std::sync::Arc;
///
/// let calculus = Arc::new(Course::new("Calculus I", 4));
/// let physics = Course::new("Physics I", 3).with_prerequisite(calculus.clone());
///
/// assert_eq!(physics.units(), 3);
/// assert_eq!(physics.prerequisites()[0].name(), "Calculus I");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Course {
    name: String,
    units: u32,
    prerequisites: Vec<Arc<Course>>,
}

impl Course {
    /// Create a course with no prerequisites.
    pub fn new(name: impl Into<String>, units: u32) -> Self {
        Self {
            name: name.into(),
            units,
            prerequisites: Vec::new(),
        }
    }

    /// Add a prerequisite course.
    pub fn with_prerequisite(mut self, prerequisite: Arc<Course>) -> Self {
        self.prerequisites.push(prerequisite);
        self
    }

    /// Add several prerequisite courses.
    pub fn with_prerequisites<I>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = Arc<Course>>,
    {
        self.prerequisites.extend(prerequisites);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    pub fn prerequisites(&self) -> &[Arc<Course>] {
        &self.prerequisites
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Scheduled exam slot of an offering.
///
/// Exam times compare by value: two offerings conflict when their exam
/// times are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExamTime(NaiveDateTime);

impl ExamTime {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// Build an exam time from calendar parts.
    ///
    /// Returns `None` when the parts do not form a valid date and time.
    ///
    /// ```rust
    /// use enrollment::core::ExamTime;
    ///
    /// assert!(ExamTime::from_ymd_hm(2024, 6, 10, 9, 0).is_some());
    /// assert!(ExamTime::from_ymd_hm(2024, 2, 30, 9, 0).is_none());
    /// ```
    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hour, minute, 0)
            .map(Self)
    }

    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for ExamTime {
    fn from(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl fmt::Display for ExamTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

/// A section of a course with its own exam time.
///
/// Several offerings may reference the same course. Offerings have no
/// identity of their own beyond their position in a request batch.
///
/// # Example
///
/// ```rust
/// use enrollment::core::{Course, CourseOffering, ExamTime};
/// use std::sync::Arc;
///
/// let course = Arc::new(Course::new("Databases", 3));
/// let exam = ExamTime::from_ymd_hm(2024, 6, 12, 14, 0).unwrap();
/// let offering = CourseOffering::new(course, 2, exam);
///
/// assert_eq!(offering.to_string(), "Databases (section 2)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOffering {
    course: Arc<Course>,
    section: u32,
    exam_time: ExamTime,
}

impl CourseOffering {
    pub fn new(course: Arc<Course>, section: u32, exam_time: ExamTime) -> Self {
        Self {
            course,
            section,
            exam_time,
        }
    }

    pub fn course(&self) -> &Arc<Course> {
        &self.course
    }

    pub fn section(&self) -> u32 {
        self.section
    }

    pub fn exam_time(&self) -> ExamTime {
        self.exam_time
    }
}

impl fmt::Display for CourseOffering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (section {})", self.course.name, self.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn exam(day: u32, hour: u32) -> ExamTime {
        ExamTime::from_ymd_hm(2024, 6, day, hour, 0).unwrap()
    }

    #[test]
    fn courses_are_equal_by_name() {
        let a = Course::new("Algorithms", 3);
        let b = Course::new("Algorithms", 4).with_prerequisite(Arc::new(Course::new("Discrete", 3)));
        let c = Course::new("Compilers", 3);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn course_hash_follows_name() {
        let mut set = HashSet::new();
        set.insert(Arc::new(Course::new("Algorithms", 3)));

        assert!(set.contains(&Course::new("Algorithms", 5)));
        assert!(!set.contains(&Course::new("Networks", 3)));
    }

    #[test]
    fn prerequisites_keep_insertion_order() {
        let first = Arc::new(Course::new("Programming I", 3));
        let second = Arc::new(Course::new("Programming II", 3));
        let course = Course::new("Data Structures", 3)
            .with_prerequisites(vec![first.clone(), second.clone()]);

        let names: Vec<&str> = course.prerequisites().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Programming I", "Programming II"]);
    }

    #[test]
    fn exam_times_compare_by_value() {
        assert_eq!(exam(10, 9), exam(10, 9));
        assert_ne!(exam(10, 9), exam(10, 14));
        assert!(exam(10, 9) < exam(11, 9));
    }

    #[test]
    fn exam_time_rejects_invalid_parts() {
        assert!(ExamTime::from_ymd_hm(2024, 13, 1, 9, 0).is_none());
        assert!(ExamTime::from_ymd_hm(2024, 6, 1, 25, 0).is_none());
    }

    #[test]
    fn exam_time_displays_minutes() {
        assert_eq!(exam(10, 9).to_string(), "2024-06-10 09:00");
    }

    #[test]
    fn offering_display_names_course_and_section() {
        let course = Arc::new(Course::new("Operating Systems", 3));
        let offering = CourseOffering::new(course, 4, exam(10, 9));

        assert_eq!(offering.to_string(), "Operating Systems (section 4)");
    }

    #[test]
    fn course_serializes_with_prerequisites() {
        let pre = Arc::new(Course::new("Linear Algebra", 3));
        let course = Course::new("Machine Learning", 4).with_prerequisite(pre);

        let json = serde_json::to_string(&course).unwrap();
        let restored: Course = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, course);
        assert_eq!(restored.units(), 4);
        assert_eq!(restored.prerequisites()[0].name(), "Linear Algebra");
    }
}
