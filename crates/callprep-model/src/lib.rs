//! Data model for call-prep identity resolution.
//!
//! Holds the types that cross the validator boundary: what comes in
//! ([`RawInput`]), what comes out ([`ValidationOutcome`] carrying either an
//! [`IdentityRecord`] or an [`IdentityError`]), the structured-field alias
//! configuration ([`FieldAliases`]), and the request shape handed to the
//! downstream patient lookup ([`LookupRequest`]).

pub mod aliases;
pub mod date;
pub mod error;
pub mod input;
pub mod lookup;
pub mod outcome;
pub mod record;

pub use aliases::FieldAliases;
pub use date::{CANONICAL_DATE_FORMAT, CanonicalDate};
pub use error::{ConfigError, ErrorKind, IdField, IdentityError};
pub use input::RawInput;
pub use lookup::LookupRequest;
pub use outcome::ValidationOutcome;
pub use record::{IdRecord, IdentityRecord, NameDobRecord, Scheme, title_case};
