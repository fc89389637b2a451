//! Credential registry
//!
//! Holds registered credentials and classifies password strength.

pub mod records;
pub mod strength;

pub use records::{CredentialRecord, Registry};
pub use strength::{
    CharClass, Requirement, StrengthPolicy, StrengthReport, StrengthVerdict, assess, classify,
};
