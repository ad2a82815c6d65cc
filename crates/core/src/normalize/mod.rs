//! Value normalizer - raw field input to canonical amounts.

mod normalizer;
mod raw_input;

pub use normalizer::{clean_text, normalize, normalize_with_digits};
pub use raw_input::RawInput;
