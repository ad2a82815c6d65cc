//! In-memory [`InputHost`] used by headless drivers and tests.

use super::input_traits::InputHost;
use super::selection::SelectionRange;

/// A single-line text field kept entirely in memory.
///
/// The caret and selection are byte offsets that always sit on UTF-8
/// character boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    caret: usize,
    selection: Option<SelectionRange>,
    focused: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.len();
        Self {
            text,
            caret,
            ..Self::default()
        }
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Option<SelectionRange> {
        self.selection
    }

    pub fn selected_text(&self) -> &str {
        self.selection
            .map(|range| range.slice(&self.text))
            .unwrap_or("")
    }

    /// Inserts `s` at the caret, replacing the selection if there is one.
    pub fn type_text(&mut self, s: &str) {
        let single_line: String = s.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let range = self.take_selection();
        self.text.replace_range(range.start..range.end, &single_line);
        self.caret = range.start + single_line.len();
    }

    /// Deletes the selection, or the character before the caret.
    pub fn backspace(&mut self) {
        let range = self.take_selection();
        if !range.is_empty() {
            self.text.replace_range(range.start..range.end, "");
            self.caret = range.start;
            return;
        }
        if let Some((index, _)) = self.text[..self.caret].char_indices().next_back() {
            self.text.replace_range(index..self.caret, "");
            self.caret = index;
        }
    }

    /// Moves the caret, dropping any selection.
    pub fn move_caret(&mut self, position: usize) {
        self.selection = None;
        self.caret = self.clamp(position);
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.selection = None;
    }

    fn take_selection(&mut self) -> SelectionRange {
        self.selection
            .take()
            .unwrap_or_else(|| SelectionRange::new(self.caret, self.caret))
    }

    fn clamp(&self, position: usize) -> usize {
        let mut position = position.min(self.text.len());
        while !self.text.is_char_boundary(position) {
            position -= 1;
        }
        position
    }
}

impl InputHost for TextField {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
            self.caret = self.text.len();
            self.selection = None;
        }
    }

    fn set_selection(&mut self, selection: SelectionRange) {
        let range = SelectionRange::new(self.clamp(selection.start), self.clamp(selection.end));
        self.caret = range.end;
        self.selection = if range.is_empty() { None } else { Some(range) };
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }
}
