//! Applicant intake: field validation, record types, and the in-memory
//! registry.
//!
//! Raw strings flow through [`validate`] into the record types in
//! [`domain`], get assembled into an [`Applicant`], and land in the
//! [`ApplicantRegistry`], which enforces identity uniqueness and answers
//! name-keyed queries. [`report`] renders records for human consumption.

pub mod domain;
pub mod registry;
pub mod report;
pub mod validate;

#[cfg(test)]
mod tests;

pub use domain::{
    Applicant, Education, EducationLevel, EmergencyContact, EmergencyContactLevel, Language,
    PersonalInfo, WorkExperience, MAX_WORK_EXPERIENCE,
};
pub use registry::{AddOutcome, ApplicantRegistry, DeleteOutcome, UpdateOutcome};
pub use validate::{normalize_email, normalize_phone, parse_date, FieldError, ValidationError};
