/// Selected part of a field's text, as byte offsets with `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Builds a range from two offsets in either order.
    pub fn new(anchor: usize, focus: usize) -> Self {
        Self {
            start: anchor.min(focus),
            end: anchor.max(focus),
        }
    }

    /// Covers the whole mask, which is what auto-select highlights.
    pub fn all(text: &str) -> Self {
        Self::new(0, text.len())
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The selected part of `text`. Offsets must lie on char boundaries.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}
