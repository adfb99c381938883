//! Identity-resolution validator for call-prep patient lookups.
//!
//! Decides whether an input names a patient through exactly one of two
//! schemes, a subscriber/member ID pair or a full name plus date of birth,
//! and returns a normalized record or a precise error.
//!
//! # Example
//!
//! ```
//! use callprep_validate::IdentityValidator;
//!
//! let validator = IdentityValidator::new();
//! let outcome = validator.validate_text("050028449/00");
//! assert!(outcome.success());
//! ```
//!
//! # Design Principles
//!
//! - **Pure**: no I/O and no shared mutable state; a validator is built once
//!   and shared by reference
//! - **Fixed priority**: ID grammars are tried before Name+DOB, and the first
//!   match decides the scheme
//! - **Errors are values**: every rejection is a [`ValidationOutcome`] with a
//!   stable message, never a panic

pub mod normalization;
pub mod patterns;
mod validator;

pub use callprep_model::{IdentityError, IdentityRecord, RawInput, ValidationOutcome};
pub use patterns::{IdentityPatterns, TextMatch};
pub use validator::IdentityValidator;
