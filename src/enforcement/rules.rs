//! Enrollment rules and the policy that runs them.

use crate::core::{CourseOffering, Student};
use crate::enforcement::context::EnrollmentContext;
use crate::enforcement::violations::EnrollmentRuleViolation;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, info, warn};

/// Absolute unit ceiling of the default policy, whatever the GPA.
pub const DEFAULT_MAX_UNITS: u32 = 20;

/// A stage of the enrollment pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// A requested course has already been passed
    AlreadyPassed,

    /// A prerequisite of a requested course has not been passed
    Prerequisites,

    /// Two requested offerings share an exam time
    ExamTimeConflict,

    /// The same course is requested more than once
    DuplicateRequest,

    /// The total requested units exceed what the GPA allows
    UnitLoad,
}

impl Rule {
    /// Rules in evaluation order. Unit load always runs last.
    pub const PIPELINE: [Rule; 5] = [
        Rule::AlreadyPassed,
        Rule::Prerequisites,
        Rule::ExamTimeConflict,
        Rule::DuplicateRequest,
        Rule::UnitLoad,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AlreadyPassed => "already-passed",
            Self::Prerequisites => "prerequisites",
            Self::ExamTimeConflict => "exam-time-conflict",
            Self::DuplicateRequest => "duplicate-request",
            Self::UnitLoad => "unit-load",
        }
    }

    /// Every violation of this rule in the batch, in deterministic order (pure).
    ///
    /// The iterator is lazy: taking only the first item does only the work
    /// needed to find it. Per-offering rules report in request order; exam
    /// conflicts report pairs `(i, j)` with `i < j` in lexicographic order;
    /// a duplicated course is reported once, at its second occurrence.
    pub fn violations<'a>(
        &self,
        context: EnrollmentContext<'a>,
        limits: &UnitLimits,
    ) -> Violations<'a> {
        match self {
            Self::AlreadyPassed => already_passed(context),
            Self::Prerequisites => missing_prerequisites(context),
            Self::ExamTimeConflict => exam_time_conflicts(context),
            Self::DuplicateRequest => duplicate_requests(context),
            Self::UnitLoad => unit_load(context, limits),
        }
    }
}

/// Lazy stream of the violations of one rule
pub type Violations<'a> = Box<dyn Iterator<Item = EnrollmentRuleViolation> + 'a>;

fn already_passed(context: EnrollmentContext<'_>) -> Violations<'_> {
    let student = context.student;
    Box::new(
        context
            .offerings
            .iter()
            .filter(move |offering| student.has_passed(offering.course()))
            .map(|offering| EnrollmentRuleViolation::AlreadyPassed {
                course: offering.course().name().to_string(),
            }),
    )
}

// Only courses passed before this batch count; a prerequisite requested in
// the same batch does not satisfy the rule.
fn missing_prerequisites(context: EnrollmentContext<'_>) -> Violations<'_> {
    let student = context.student;
    Box::new(context.offerings.iter().flat_map(move |offering| {
        let course = offering.course();
        course
            .prerequisites()
            .iter()
            .filter(move |prerequisite| !student.has_passed(prerequisite))
            .map(move |prerequisite| EnrollmentRuleViolation::MissingPrerequisite {
                prerequisite: prerequisite.name().to_string(),
                course: course.name().to_string(),
            })
    }))
}

fn exam_time_conflicts(context: EnrollmentContext<'_>) -> Violations<'_> {
    Box::new(
        context
            .distinct_pairs()
            .filter(|(first, second)| first.exam_time() == second.exam_time())
            .map(|(first, second)| EnrollmentRuleViolation::ExamTimeConflict {
                first: first.to_string(),
                second: second.to_string(),
            }),
    )
}

// Position j reports when exactly one earlier offering has the same course,
// so a course requested k times yields one violation.
fn duplicate_requests(context: EnrollmentContext<'_>) -> Violations<'_> {
    let offerings = context.offerings;
    Box::new(
        offerings
            .iter()
            .enumerate()
            .filter(move |(j, offering)| {
                offerings[..*j]
                    .iter()
                    .filter(|earlier| earlier.course() == offering.course())
                    .count()
                    == 1
            })
            .map(|(_, offering)| EnrollmentRuleViolation::DuplicateRequest {
                course: offering.course().name().to_string(),
            }),
    )
}

fn unit_load(context: EnrollmentContext<'_>, limits: &UnitLimits) -> Violations<'static> {
    let gpa = context.student.gpa();
    let requested = context.total_units();
    let violation = (!limits.allows(gpa, requested))
        .then_some(EnrollmentRuleViolation::UnitLimitExceeded { requested, gpa });
    Box::new(violation.into_iter())
}

/// A GPA bracket: students with a GPA strictly below `gpa_below` may take
/// at most `max_units` units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitBracket {
    pub gpa_below: f64,
    pub max_units: u32,
}

/// Unit-load limits keyed by GPA.
///
/// The default limits are:
///
/// | GPA | max units |
/// |-----|-----------|
/// | below 12 | 14 |
/// | 12 up to (not including) 16 | 16 |
/// | 16 and above | 20 |
///
/// ```rust
/// use enrollment::enforcement::UnitLimits;
///
/// let limits = UnitLimits::default();
/// assert_eq!(limits.max_units_for(11.9), 14);
/// assert_eq!(limits.max_units_for(12.0), 16);
/// assert_eq!(limits.max_units_for(16.0), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitLimits {
    pub(crate) brackets: Vec<UnitBracket>,
    pub(crate) ceiling: u32,
}

impl UnitLimits {
    /// Maximum units allowed for `gpa` (pure).
    ///
    /// The smallest limit among the brackets strictly above `gpa`, capped
    /// by the absolute ceiling.
    pub fn max_units_for(&self, gpa: f64) -> u32 {
        self.brackets
            .iter()
            .filter(|bracket| gpa < bracket.gpa_below)
            .map(|bracket| bracket.max_units)
            .fold(self.ceiling, u32::min)
    }

    pub fn allows(&self, gpa: f64, units: u32) -> bool {
        units <= self.max_units_for(gpa)
    }

    pub fn brackets(&self) -> &[UnitBracket] {
        &self.brackets
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }
}

impl Default for UnitLimits {
    fn default() -> Self {
        Self {
            brackets: vec![
                UnitBracket {
                    gpa_below: 12.0,
                    max_units: 14,
                },
                UnitBracket {
                    gpa_below: 16.0,
                    max_units: 16,
                },
            ],
            ceiling: DEFAULT_MAX_UNITS,
        }
    }
}

/// The enrollment validator.
///
/// A policy holds only its unit limits and no per-call state, so one
/// policy can serve any number of students, from any number of threads.
///
/// # Example
///
/// ```rust
/// use enrollment::core::{Course, CourseOffering, ExamTime, Student};
/// use enrollment::enforcement::EnrollmentPolicy;
/// use std::sync::Arc;
///
/// let policy = EnrollmentPolicy::default();
/// let mut student = Student::new(17.0);
/// let course = Arc::new(Course::new("Compilers", 4));
/// let exam = ExamTime::from_ymd_hm(2024, 6, 14, 9, 0).unwrap();
///
/// policy
///     .enroll(&mut student, &[CourseOffering::new(course, 1, exam)])
///     .unwrap();
/// assert_eq!(student.enrollments().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentPolicy {
    pub(crate) limits: UnitLimits,
}

impl EnrollmentPolicy {
    pub fn new(limits: UnitLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &UnitLimits {
        &self.limits
    }

    /// Run the whole pipeline without mutating the student.
    ///
    /// Returns the first violation found, in pipeline order.
    pub fn check(
        &self,
        student: &Student,
        offerings: &[CourseOffering],
    ) -> Result<(), EnrollmentRuleViolation> {
        let context = EnrollmentContext::new(student, offerings);
        debug!(
            offerings = offerings.len(),
            units = context.total_units(),
            gpa = student.gpa(),
            "validating enrollment request"
        );

        for rule in Rule::PIPELINE {
            if let Some(violation) = rule.violations(context, &self.limits).next() {
                warn!(rule = rule.name(), %violation, "enrollment request rejected");
                return Err(violation);
            }
        }
        Ok(())
    }

    /// Validate the batch and, only if every rule passes, append each
    /// offering's (course, section) to the student's record in request order.
    ///
    /// On failure the student is left untouched.
    pub fn enroll(
        &self,
        student: &mut Student,
        offerings: &[CourseOffering],
    ) -> Result<(), EnrollmentRuleViolation> {
        self.check(student, offerings)?;

        for offering in offerings {
            student.take_course(offering.course().clone(), offering.section());
        }
        info!(committed = offerings.len(), "enrollment committed");
        Ok(())
    }

    /// Report every violation in the batch without mutating the student.
    /// Returns Validation::Success(()) if the batch would be accepted.
    /// Returns Validation::Failure with ALL violations, in pipeline order.
    pub fn audit(
        &self,
        student: &Student,
        offerings: &[CourseOffering],
    ) -> Validation<(), NonEmptyVec<EnrollmentRuleViolation>> {
        let context = EnrollmentContext::new(student, offerings);
        debug!(
            offerings = offerings.len(),
            units = context.total_units(),
            gpa = student.gpa(),
            "auditing enrollment request"
        );

        let mut checks: Vec<Validation<(), NonEmptyVec<EnrollmentRuleViolation>>> =
            vec![Validation::success(())];
        for rule in Rule::PIPELINE {
            for violation in rule.violations(context, &self.limits) {
                checks.push(Validation::fail(violation));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
