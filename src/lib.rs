//! In-memory intake manager for structured job-application records.
//!
//! The [`intake`] module holds the core: raw-string field validators, the
//! validated record types they feed, and the session-scoped applicant
//! registry. [`config`], [`telemetry`], and [`error`] carry the ambient
//! plumbing used by the CLI binary.

pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;
