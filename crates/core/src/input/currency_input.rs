//! The currency input state machine.
//!
//! A [`CurrencyInput`] owns one piece of state, the currently displayed
//! mask. Every host event recomputes a candidate from the field's raw text
//! (resolve, normalize, mask), passes it through the bound gate and then
//! re-renders the host with whatever mask is current. External changes to
//! value, default value, currency or config re-sync the mask directly.
//!
//! Events are handled one at a time; each handler runs to completion and
//! the next one observes the state it left behind.

use log::debug;
use rust_decimal::Decimal;

use super::input_options::CurrencyInputOptions;
use super::input_traits::{InputCallbacks, InputHost, NoopCallbacks};
use crate::config::{FormatConfig, ResolvedRule};
use crate::errors::Result;
use crate::gate::{gate, GateOutcome};
use crate::mask::{mask, MaskedValue, SymbolOverride};
use crate::normalize::{normalize, RawInput};

pub struct CurrencyInput<H, C = NoopCallbacks> {
    host: H,
    callbacks: C,
    options: CurrencyInputOptions,
    masked_value: String,
}

impl<H: InputHost> CurrencyInput<H> {
    /// Creates an input without callbacks.
    pub fn without_callbacks(host: H, options: CurrencyInputOptions) -> Result<Self> {
        Self::new(host, NoopCallbacks, options)
    }
}

impl<H: InputHost, C> CurrencyInput<H, C> {
    /// Attaches to `host` and renders the initial mask.
    ///
    /// Fails when the configuration has no usable rule for the currency.
    pub fn new(host: H, callbacks: C, options: CurrencyInputOptions) -> Result<Self> {
        let mut input = Self {
            host,
            callbacks,
            options,
            masked_value: String::from("0"),
        };
        input.sync()?;

        if input.options.auto_focus && !input.host.has_focus() {
            input.host.focus();
        }

        Ok(input)
    }

    /// The mask currently displayed.
    pub fn masked_value(&self) -> &str {
        &self.masked_value
    }

    /// The canonical value the current mask represents.
    pub fn value(&self) -> Result<Decimal> {
        let rule = self.resolve()?;
        normalize(&RawInput::from(self.masked_value.as_str()), &rule)
    }

    pub fn options(&self) -> &CurrencyInputOptions {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    pub fn into_parts(self) -> (H, C) {
        (self.host, self.callbacks)
    }

    /// Resolves, normalizes and masks `raw` without touching state.
    pub fn calculate(&self, raw: &RawInput) -> Result<MaskedValue> {
        let rule = self.resolve()?;
        self.candidate(raw, &rule)
    }

    // =========================================================================
    // Host events
    // =========================================================================

    /// Handles an input event: the user edited the field's text.
    pub fn handle_change<E>(&mut self, event: &E) -> Result<MaskedValue>
    where
        C: InputCallbacks<E>,
    {
        let emitted = self.update_from_host()?;
        if !emitted.masked.is_empty() {
            self.callbacks
                .on_change(event, emitted.value, &emitted.masked);
        }
        Ok(emitted)
    }

    /// Handles the field losing focus.
    ///
    /// With `auto_reset` the display goes back to zero afterwards; the
    /// callback still receives the value the field held on blur.
    pub fn handle_blur<E>(&mut self, event: &E) -> Result<MaskedValue>
    where
        C: InputCallbacks<E>,
    {
        let emitted = self.update_from_host()?;

        if !emitted.masked.is_empty() {
            self.callbacks.on_blur(event, emitted.value, &emitted.masked);
        }

        if self.options.auto_reset {
            let reset = self.calculate(&RawInput::default())?;
            self.masked_value = reset.masked;
            self.render();
        }
        Ok(emitted)
    }

    /// Handles the field gaining focus.
    ///
    /// With `auto_select` the refreshed mask is selected as a whole.
    pub fn handle_focus<E>(&mut self, event: &E) -> Result<MaskedValue>
    where
        C: InputCallbacks<E>,
    {
        let emitted = self.update_from_host()?;

        if self.options.auto_select {
            self.host.select_all();
        }

        if !emitted.masked.is_empty() {
            self.callbacks
                .on_focus(event, emitted.value, &emitted.masked);
        }
        Ok(emitted)
    }

    /// Forwards a key release; no normalization is involved.
    pub fn handle_key_up<E>(&mut self, event: &E, key: &str, key_code: u32)
    where
        C: InputCallbacks<E>,
    {
        self.callbacks.on_key_press(event, key, key_code);
    }

    // =========================================================================
    // External changes
    // =========================================================================

    pub fn set_value(&mut self, value: Option<Decimal>) -> Result<()> {
        let next = CurrencyInputOptions {
            value,
            ..self.options.clone()
        };
        self.set_options(next)
    }

    pub fn set_default_value(&mut self, default_value: Option<Decimal>) -> Result<()> {
        let next = CurrencyInputOptions {
            default_value,
            ..self.options.clone()
        };
        self.set_options(next)
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) -> Result<()> {
        let next = CurrencyInputOptions {
            currency: currency.into(),
            ..self.options.clone()
        };
        self.set_options(next)
    }

    pub fn set_config(&mut self, config: FormatConfig) -> Result<()> {
        let next = CurrencyInputOptions {
            config,
            ..self.options.clone()
        };
        self.set_options(next)
    }

    /// Changes the bound. Takes effect on the next host event.
    pub fn set_max(&mut self, max: Option<Decimal>) {
        self.options.max = max;
    }

    /// Changes the symbol override. Takes effect on the next recomputation.
    pub fn set_symbol_override(&mut self, symbol_override: Option<SymbolOverride>) {
        self.options.currency_symbol_override = symbol_override;
    }

    /// Replaces all options, re-syncing the display when value, default
    /// value, currency or config changed.
    ///
    /// On error the previous options stay in place.
    pub fn set_options(&mut self, options: CurrencyInputOptions) -> Result<()> {
        let resync = self.options.needs_resync(&options);
        let previous = std::mem::replace(&mut self.options, options);

        if resync {
            if let Err(err) = self.sync() {
                self.options = previous;
                return Err(err);
            }
        }
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn resolve(&self) -> Result<ResolvedRule> {
        Ok(self.options.config.resolve(&self.options.currency)?)
    }

    fn candidate(&self, raw: &RawInput, rule: &ResolvedRule) -> Result<MaskedValue> {
        let value = normalize(raw, rule)?;
        Ok(mask(
            value,
            rule,
            &self.options.currency,
            self.options.currency_symbol_override.as_ref(),
        ))
    }

    /// Recomputes from the host's text and gates the result.
    fn update_from_host(&mut self) -> Result<MaskedValue> {
        let raw = RawInput::from(self.host.text());
        let rule = self.resolve()?;
        let candidate = self.candidate(&raw, &rule)?;

        let outcome = gate(candidate, &self.masked_value, self.options.max, &rule)?;
        if let GateOutcome::Accepted(accepted) = &outcome {
            self.masked_value = accepted.masked.clone();
        }
        self.render();

        Ok(outcome.into_emitted())
    }

    /// Re-derives the mask from value, then default value, then zero.
    /// Bypasses the gate and does not notify.
    fn sync(&mut self) -> Result<()> {
        let current = self
            .options
            .value
            .or(self.options.default_value)
            .map(RawInput::from)
            .unwrap_or_default();

        let synced = self.calculate(&current)?;
        debug!(
            "Synced {} input to {}",
            self.options.currency, synced.masked
        );
        self.masked_value = synced.masked;
        self.render();
        Ok(())
    }

    fn render(&mut self) {
        self.host.set_text(&self.masked_value);
    }
}
