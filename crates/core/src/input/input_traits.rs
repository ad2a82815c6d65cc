//! Seams between the engine and the widget it drives.
//!
//! The engine never renders anything. It reads and writes text through an
//! [`InputHost`] and reports results through [`InputCallbacks`], so any
//! editable text surface can sit behind it.

use rust_decimal::Decimal;

use super::selection::SelectionRange;

/// An editable text surface (text field, numeric field, custom widget).
pub trait InputHost {
    /// Current raw text of the field.
    fn text(&self) -> String;

    /// Replaces the displayed text.
    fn set_text(&mut self, text: &str);

    /// Sets the selection; an empty range places the caret.
    fn set_selection(&mut self, selection: SelectionRange);

    /// Selects the whole text.
    fn select_all(&mut self) {
        let text = self.text();
        self.set_selection(SelectionRange::all(&text));
    }

    /// Moves input focus to the field.
    fn focus(&mut self);

    fn has_focus(&self) -> bool;
}

/// Notifications sent to the embedding application.
///
/// Every method defaults to a no-op. `E` is the host's own event type and
/// is passed through untouched.
pub trait InputCallbacks<E> {
    fn on_change(&mut self, _event: &E, _value: Decimal, _masked: &str) {}

    fn on_blur(&mut self, _event: &E, _value: Decimal, _masked: &str) {}

    fn on_focus(&mut self, _event: &E, _value: Decimal, _masked: &str) {}

    fn on_key_press(&mut self, _event: &E, _key: &str, _key_code: u32) {}
}

/// Callbacks that ignore every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCallbacks;

impl<E> InputCallbacks<E> for NoopCallbacks {}
