//! Display masker - canonical values to display strings.

mod formatter;
mod masker;

pub use formatter::{format_amount, format_number};
pub use masker::{apply_symbol_override, mask, MaskedValue, SymbolOverride};
