//! Serializable snapshots of a student's academic record.
//!
//! A snapshot captures everything the validator may read or write on a
//! student: GPA, passed courses and the enrollment record. Comparing the
//! records of two snapshots shows whether a call changed the student.
//! Snapshots are a transport format; storing them is up to the caller.

use crate::core::Student;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Value view of a student's record.
///
/// Records compare the GPA by bit pattern, so a record always equals
/// itself, NaN GPA included.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StudentRecord {
    pub gpa: f64,

    /// Names of passed courses, sorted
    pub passed: Vec<String>,

    /// (course name, section) pairs in commit order
    pub enrollments: Vec<(String, u32)>,
}

impl StudentRecord {
    pub fn of(student: &Student) -> Self {
        let mut passed: Vec<String> = student
            .passed_courses()
            .map(|course| course.name().to_string())
            .collect();
        passed.sort();

        let enrollments = student
            .enrollments()
            .iter()
            .map(|e| (e.course.name().to_string(), e.section))
            .collect();

        Self {
            gpa: student.gpa(),
            passed,
            enrollments,
        }
    }
}

impl PartialEq for StudentRecord {
    fn eq(&self, other: &Self) -> bool {
        self.gpa.to_bits() == other.gpa.to_bits()
            && self.passed == other.passed
            && self.enrollments == other.enrollments
    }
}

/// Serializable snapshot of a student record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StudentSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When snapshot was taken
    pub taken_at: DateTime<Utc>,

    pub record: StudentRecord,
}

impl StudentSnapshot {
    pub fn of(student: &Student) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            record: StudentRecord::of(student),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}

impl Student {
    /// Take a snapshot of this student's current record.
    pub fn snapshot(&self) -> StudentSnapshot {
        StudentSnapshot::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Course, CourseOffering, ExamTime};
    use crate::enforcement::EnrollmentPolicy;
    use std::sync::Arc;

    fn student() -> Student {
        Student::new(16.5).with_passed_courses(vec![
            Arc::new(Course::new("Zoology", 3)),
            Arc::new(Course::new("Anatomy", 3)),
        ])
    }

    #[test]
    fn record_sorts_passed_courses() {
        let record = StudentRecord::of(&student());

        assert_eq!(record.passed, vec!["Anatomy".to_string(), "Zoology".to_string()]);
        assert_eq!(record.gpa, 16.5);
    }

    #[test]
    fn nan_gpa_record_equals_itself() {
        let mut student = Student::new(f64::NAN);
        let before = student.snapshot();
        let offering = CourseOffering::new(
            Arc::new(Course::new("Botany", 30)),
            1,
            ExamTime::from_ymd_hm(2024, 6, 10, 9, 0).unwrap(),
        );

        assert!(EnrollmentPolicy::default()
            .enroll(&mut student, &[offering])
            .is_err());
        assert_eq!(before.record, student.snapshot().record);
    }

    #[test]
    fn records_with_different_gpa_differ() {
        let a = StudentRecord::of(&Student::new(12.0));
        let b = StudentRecord::of(&Student::new(12.5));

        assert_ne!(a, b);
    }

    #[test]
    fn snapshots_have_unique_ids() {
        let student = student();

        assert_ne!(student.snapshot().id, student.snapshot().id);
    }

    #[test]
    fn record_tracks_committed_enrollments() {
        let mut student = student();
        let before = student.snapshot();
        let offering = CourseOffering::new(
            Arc::new(Course::new("Botany", 3)),
            5,
            ExamTime::from_ymd_hm(2024, 6, 10, 9, 0).unwrap(),
        );

        EnrollmentPolicy::default()
            .enroll(&mut student, &[offering])
            .unwrap();
        let after = student.snapshot();

        assert_ne!(before.record, after.record);
        assert_eq!(after.record.enrollments, vec![("Botany".to_string(), 5)]);
    }

    #[test]
    fn json_roundtrip_preserves_record() {
        let snapshot = student().snapshot();

        let json = snapshot.to_json().unwrap();
        let restored = StudentSnapshot::from_json(&json).unwrap();

        assert_eq!(restored.id, snapshot.id);
        assert_eq!(restored.record, snapshot.record);
    }

    #[test]
    fn binary_roundtrip_preserves_record() {
        let snapshot = student().snapshot();

        let bytes = snapshot.to_binary().unwrap();
        let restored = StudentSnapshot::from_binary(&bytes).unwrap();

        assert_eq!(restored.record, snapshot.record);
        assert_eq!(restored.taken_at, snapshot.taken_at);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut snapshot = student().snapshot();
        snapshot.version = SNAPSHOT_VERSION + 1;
        let json = snapshot.to_json().unwrap();

        let result = StudentSnapshot::from_json(&json);

        assert!(matches!(
            result,
            Err(SnapshotError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn garbage_input_fails_to_decode() {
        assert!(matches!(
            StudentSnapshot::from_json("not json"),
            Err(SnapshotError::DeserializationFailed(_))
        ));
        assert!(matches!(
            StudentSnapshot::from_binary(&[1, 2, 3]),
            Err(SnapshotError::DeserializationFailed(_))
        ));
    }
}
