//! Name normalization and phonetic keys.
//!
//! - `sanitize`: case folding and edge punctuation stripping applied to every query
//! - `phonetic`: double metaphone keys for first and last name tokens

mod phonetic;
mod sanitize;

pub use phonetic::{NameKeys, PhoneticCode, encode};
pub use sanitize::{sanitize, tokens};
