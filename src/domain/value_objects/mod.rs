//! Domain Value Objects
//!
//! Immutable value types that configure and name the generated array.

mod array_name;
mod language;
mod layout;
mod literal_format;

pub use array_name::{ArrayName, FALLBACK_NAME};
pub use language::Language;
pub use layout::{ArrayLayout, DEFAULT_GROUP_SIZE};
pub use literal_format::{LiteralFormat, DEFAULT_HEX_PREFIX};
