//! Mutable text buffer for editing text content.

use super::TextRange;

/// A mutable text buffer that can be edited.
///
/// This provides methods for changing text content:
/// - [`replace`](Self::replace) - Replace a range with new text
/// - [`insert`](Self::insert) - Insert text at cursor position
/// - [`delete`](Self::delete) - Delete a range of text
/// - [`clear`](Self::clear) - Remove all text
///
/// And for manipulating cursor/selection:
/// - [`place_cursor_at_end`](Self::place_cursor_at_end)
/// - [`place_cursor_before_char`](Self::place_cursor_before_char)
/// - [`select_all`](Self::select_all)
///
/// # Example
///
/// ```
/// use clearpose_foundation::text::TextFieldBuffer;
///
/// let mut buffer = TextFieldBuffer::new("Hello");
/// buffer.place_cursor_at_end();
/// buffer.insert(", World!");
/// assert_eq!(buffer.text(), "Hello, World!");
/// ```
#[derive(Debug, Clone)]
pub struct TextFieldBuffer {
    /// The text content
    text: String,
    /// Current selection (cursor when collapsed)
    selection: TextRange,
    /// Track whether changes have been made
    has_changes: bool,
}

impl TextFieldBuffer {
    /// Creates a new buffer with the given initial text.
    /// Cursor is placed at the end of the text.
    pub fn new(initial_text: impl Into<String>) -> Self {
        let text: String = initial_text.into();
        let len = text.len();
        Self {
            text,
            selection: TextRange::cursor(len),
            has_changes: false,
        }
    }

    /// Returns the current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the current selection range.
    pub fn selection(&self) -> TextRange {
        self.selection
    }

    /// Returns true if there's a non-collapsed selection.
    pub fn has_selection(&self) -> bool {
        !self.selection.collapsed()
    }

    /// Returns true if any changes have been made.
    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    // ========== Text Modification ==========

    /// Replaces text in the given range with new text.
    ///
    /// The cursor moves to the end of the replacement.
    pub fn replace(&mut self, range: TextRange, replacement: &str) {
        let min = self.clamp_prev_boundary(range.min().min(self.text.len()));
        let max = self.clamp_next_boundary(range.max().min(self.text.len()));

        self.text.replace_range(min..max, replacement);
        self.selection = TextRange::cursor(min + replacement.len());
        self.has_changes = true;
    }

    /// Inserts text at the current cursor position (or replaces selection).
    pub fn insert(&mut self, text: &str) {
        if self.has_selection() {
            self.replace(self.selection, text);
        } else {
            let pos = self.clamp_prev_boundary(self.selection.start.min(self.text.len()));
            self.text.insert_str(pos, text);
            self.selection = TextRange::cursor(pos + text.len());
            self.has_changes = true;
        }
    }

    /// Deletes text in the given range.
    pub fn delete(&mut self, range: TextRange) {
        self.replace(range, "");
    }

    /// Deletes the character before the cursor (backspace).
    pub fn delete_before_cursor(&mut self) {
        if self.has_selection() {
            self.delete(self.selection);
        } else if self.selection.start > 0 {
            let pos = self.selection.start;
            let prev_pos = self.prev_char_boundary(pos);
            self.delete(TextRange::new(prev_pos, pos));
        }
    }

    /// Deletes the character after the cursor (delete key).
    pub fn delete_after_cursor(&mut self) {
        if self.has_selection() {
            self.delete(self.selection);
        } else if self.selection.start < self.text.len() {
            let pos = self.selection.start;
            let next_pos = self.next_char_boundary(pos);
            self.delete(TextRange::new(pos, next_pos));
        }
    }

    /// Clears all text.
    pub fn clear(&mut self) {
        self.text.clear();
        self.selection = TextRange::zero();
        self.has_changes = true;
    }

    // ========== Cursor/Selection Manipulation ==========

    /// Places the cursor at the end of the text.
    pub fn place_cursor_at_end(&mut self) {
        self.selection = TextRange::cursor(self.text.len());
    }

    /// Places the cursor at the start of the text.
    pub fn place_cursor_at_start(&mut self) {
        self.selection = TextRange::zero();
    }

    /// Places the cursor before the character at the given byte index.
    pub fn place_cursor_before_char(&mut self, index: usize) {
        let pos = self.clamp_prev_boundary(index.min(self.text.len()));
        self.selection = TextRange::cursor(pos);
    }

    /// Selects all text.
    pub fn select_all(&mut self) {
        self.selection = TextRange::all(self.text.len());
    }

    /// Selects the given range.
    pub fn select(&mut self, range: TextRange) {
        self.selection = range.coerce_in(self.text.len());
    }

    // ========== Helper Methods ==========

    /// Finds the previous character boundary from a byte index.
    fn prev_char_boundary(&self, from: usize) -> usize {
        let mut pos = from.saturating_sub(1);
        while pos > 0 && !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    /// Finds the next character boundary from a byte index.
    fn next_char_boundary(&self, from: usize) -> usize {
        let mut pos = from + 1;
        while pos < self.text.len() && !self.text.is_char_boundary(pos) {
            pos += 1;
        }
        pos.min(self.text.len())
    }

    fn clamp_prev_boundary(&self, from: usize) -> usize {
        if self.text.is_char_boundary(from) {
            from
        } else {
            self.prev_char_boundary(from)
        }
    }

    fn clamp_next_boundary(&self, from: usize) -> usize {
        if self.text.is_char_boundary(from) {
            from
        } else {
            self.next_char_boundary(from)
        }
    }
}

impl Default for TextFieldBuffer {
    fn default() -> Self {
        Self::new("")
    }
}
