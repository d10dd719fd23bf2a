//! Domain Policies
//!
//! Business rules and policies that govern behavior.

mod failure_policy;

pub use failure_policy::FailurePolicy;
