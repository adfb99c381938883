//! Normalization functions applied before and after pattern matching.
//!
//! - **text**: defensive stringification and hidden-character cleanup
//! - **date**: date-of-birth parsing into the canonical `MM-DD-YYYY` form
//! - **name**: first/last name splitting

pub mod date;
pub mod name;
pub mod text;

pub use date::{DOB_FORMATS, normalize_dob, normalize_dob_as_of};
pub use name::{NameParts, split_name};
pub use text::{cleanse_text, safe_stringify};
