//! Scripted replay of field events against an in-memory [`TextField`].
//!
//! A session file is JSON:
//!
//! ```json
//! {
//!   "options": { "currency": "USD", "max": 100, "autoSelect": true },
//!   "events": [
//!     { "type": "focus" },
//!     { "type": "type", "text": "1" },
//!     { "type": "change" },
//!     { "type": "blur" }
//!   ]
//! }
//! ```
//!
//! Editing steps (`type`, `backspace`, `paste`, `selectAll`) only touch the
//! field; `change`, `blur`, `focus` and `keyUp` run the matching handler.

use currency_input_core::{
    CurrencyInput, CurrencyInputOptions, FormatConfig, InputCallbacks, InputHost, TextField,
};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub options: CurrencyInputOptions,
    #[serde(default)]
    pub events: Vec<SessionEvent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    Type {
        text: String,
    },
    Backspace,
    /// Replaces the whole field text, as a paste over a selection would.
    Paste {
        text: String,
    },
    SelectAll,
    Change,
    Focus,
    Blur,
    #[serde(rename_all = "camelCase")]
    KeyUp {
        key: String,
        #[serde(default)]
        key_code: u32,
    },
    SetValue {
        value: Option<Decimal>,
    },
    #[serde(rename_all = "camelCase")]
    SetDefaultValue {
        default_value: Option<Decimal>,
    },
    SetCurrency {
        currency: String,
    },
    SetConfig {
        config: FormatConfig,
    },
    SetMax {
        max: Option<Decimal>,
    },
}

/// Callback sink that records one tab-separated line per notification.
/// The event passed to callbacks is the step index.
#[derive(Debug, Default)]
pub struct Transcript {
    pub lines: Vec<String>,
}

impl Transcript {
    fn record(&mut self, step: usize, kind: &str, value: Decimal, masked: &str) {
        self.lines.push(format!("{step}\t{kind}\t{value}\t{masked}"));
    }
}

impl InputCallbacks<usize> for Transcript {
    fn on_change(&mut self, step: &usize, value: Decimal, masked: &str) {
        self.record(*step, "change", value, masked);
    }

    fn on_blur(&mut self, step: &usize, value: Decimal, masked: &str) {
        self.record(*step, "blur", value, masked);
    }

    fn on_focus(&mut self, step: &usize, value: Decimal, masked: &str) {
        self.record(*step, "focus", value, masked);
    }

    fn on_key_press(&mut self, step: &usize, key: &str, key_code: u32) {
        self.lines.push(format!("{step}\tkey\t{key}\t{key_code}"));
    }
}

/// Runs every event in order. Returns the transcript followed by a
/// `final` line with the value and mask left in the field.
pub fn replay(session: Session) -> currency_input_core::Result<Vec<String>> {
    let mut input = CurrencyInput::new(TextField::new(), Transcript::default(), session.options)?;

    for (step, event) in session.events.into_iter().enumerate() {
        tracing::debug!("step {}: {:?}", step, event);
        match event {
            SessionEvent::Type { text } => input.host_mut().type_text(&text),
            SessionEvent::Backspace => input.host_mut().backspace(),
            SessionEvent::Paste { text } => {
                input.host_mut().select_all();
                input.host_mut().type_text(&text);
            }
            SessionEvent::SelectAll => input.host_mut().select_all(),
            SessionEvent::Change => {
                input.handle_change(&step)?;
            }
            SessionEvent::Focus => {
                input.host_mut().focus();
                input.handle_focus(&step)?;
            }
            SessionEvent::Blur => {
                input.host_mut().blur();
                input.handle_blur(&step)?;
            }
            SessionEvent::KeyUp { key, key_code } => input.handle_key_up(&step, &key, key_code),
            SessionEvent::SetValue { value } => input.set_value(value)?,
            SessionEvent::SetDefaultValue { default_value } => {
                input.set_default_value(default_value)?
            }
            SessionEvent::SetCurrency { currency } => input.set_currency(currency)?,
            SessionEvent::SetConfig { config } => input.set_config(config)?,
            SessionEvent::SetMax { max } => input.set_max(max),
        }
    }

    let value = input.value()?;
    let masked = input.masked_value().to_string();
    let (_, transcript) = input.into_parts();
    let mut lines = transcript.lines;
    lines.push(format!("final\t{value}\t{masked}"));
    Ok(lines)
}
