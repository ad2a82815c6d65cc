//! Currency Input Core - value normalization and display masking for
//! currency entry fields.
//!
//! Raw field input (text or a number) becomes two synchronized
//! representations: a canonical [`Decimal`](rust_decimal::Decimal) with the
//! currency's fixed number of fraction digits, and a locale-formatted mask
//! for display.
//!
//! # Pipeline
//!
//! ```text
//! FormatConfig + currency ──> config::resolve_rule ──> ResolvedRule
//!                                                         │
//! RawInput ──> normalize::normalize ──> value ──> mask::mask ──> MaskedValue
//!                                                         │
//!                      previous mask + max ──> gate::gate ──> emitted pair
//! ```
//!
//! [`CurrencyInput`] runs this pipeline for every host event and keeps the
//! displayed mask as its only state. It is UI-agnostic: the text field is
//! an [`InputHost`] and notifications go to [`InputCallbacks`].

pub mod config;
pub mod constants;
pub mod errors;
pub mod gate;
pub mod input;
pub mod locale;
pub mod mask;
pub mod normalize;

pub use config::{CurrencyDisplay, CurrencyRule, FormatConfig, NumberStyle, ResolvedRule};
pub use gate::GateOutcome;
pub use input::{
    CurrencyInput, CurrencyInputOptions, InputCallbacks, InputHost, NoopCallbacks,
    SelectionRange, TextField,
};
pub use locale::{CurrencyPosition, LocaleConventions};
pub use mask::{MaskedValue, SymbolOverride};
pub use normalize::RawInput;

// Re-export error types
pub use errors::{ConfigError, Error, Result};
