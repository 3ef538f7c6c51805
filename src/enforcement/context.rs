//! Batch context provided to enrollment rules.

use crate::core::{CourseOffering, Student};

/// Borrowed view of one enrollment request: the student and the ordered
/// offerings requested in this batch.
#[derive(Clone, Copy, Debug)]
pub struct EnrollmentContext<'a> {
    pub student: &'a Student,
    pub offerings: &'a [CourseOffering],
}

impl<'a> EnrollmentContext<'a> {
    pub fn new(student: &'a Student, offerings: &'a [CourseOffering]) -> Self {
        Self { student, offerings }
    }

    /// Sum of the units of every requested offering (pure)
    pub fn total_units(&self) -> u32 {
        self.offerings
            .iter()
            .map(|offering| offering.course().units())
            .fold(0u32, u32::saturating_add)
    }

    /// Every unordered pair of distinct positions `(i, j)` with `i < j`,
    /// in lexicographic order.
    ///
    /// Offerings are told apart by position, never by value, so two equal
    /// offerings at different positions still form a pair.
    pub fn distinct_pairs(
        &self,
    ) -> impl Iterator<Item = (&'a CourseOffering, &'a CourseOffering)> + 'a {
        let offerings = self.offerings;
        offerings.iter().enumerate().flat_map(move |(i, first)| {
            offerings[i + 1..].iter().map(move |second| (first, second))
        })
    }
}
