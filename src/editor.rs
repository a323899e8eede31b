//! Bounded text editor state: buffer, cursor and character-count banding.
//!
//! The maximum length is a hard cap. Any change that would push the text
//! past it is dropped and the previous text stays in place; nothing is
//! reported to the user beyond the count staying where it was.

use unicode_width::UnicodeWidthStr;

/// Default maximum number of characters accepted by the editor.
pub const DEFAULT_MAX_LENGTH: usize = 10_000;

/// Whether an edit was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// The change was applied.
    Accepted,
    /// The change would exceed the cap and was dropped.
    Rejected,
}

impl Edit {
    /// True when the edit was applied.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Qualitative zone for the character counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountBand {
    /// Below 70% of the cap.
    Ok,
    /// From 70% up to (not including) 90% of the cap.
    Warn,
    /// 90% of the cap or more.
    Critical,
}

impl CountBand {
    /// Band for `count` characters out of `max_length`.
    ///
    /// A zero cap always reports `Ok`.
    #[must_use]
    pub const fn for_count(count: usize, max_length: usize) -> Self {
        if max_length == 0 {
            return Self::Ok;
        }
        // count / max < 0.7  <=>  10 * count < 7 * max
        let scaled = count.saturating_mul(10);
        if scaled < max_length.saturating_mul(7) {
            Self::Ok
        } else if scaled < max_length.saturating_mul(9) {
            Self::Warn
        } else {
            Self::Critical
        }
    }
}

/// Text buffer with a character cap and a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    text: String,

    /// Cursor position within `text` (byte offset, always on a char boundary)
    cursor: usize,

    max_length: usize,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

impl EditorState {
    /// Create an empty editor capped at `max_length` characters.
    #[must_use]
    pub const fn new(max_length: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            max_length,
        }
    }

    /// Committed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor byte offset.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Character cap.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Number of characters in the committed text.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Counter band for the committed text.
    #[must_use]
    pub fn band(&self) -> CountBand {
        CountBand::for_count(self.char_count(), self.max_length)
    }

    /// True when the text is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    const fn fits(&self, chars: usize) -> bool {
        chars <= self.max_length
    }

    /// Replace the whole text if it fits, moving the cursor to the end.
    pub fn set_text(&mut self, candidate: impl Into<String>) -> Edit {
        let candidate = candidate.into();
        if !self.fits(candidate.chars().count()) {
            return Edit::Rejected;
        }
        self.cursor = candidate.len();
        self.text = candidate;
        Edit::Accepted
    }

    /// Clear the text and reset the cursor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) -> Edit {
        if !self.fits(self.char_count() + 1) {
            return Edit::Rejected;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        Edit::Accepted
    }

    /// Insert a string (a paste) at the cursor, all or nothing.
    pub fn insert_str(&mut self, s: &str) -> Edit {
        let normalized = s.replace("\r\n", "\n").replace('\r', "\n");
        if !self.fits(self.char_count() + normalized.chars().count()) {
            return Edit::Rejected;
        }
        self.text.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
        Edit::Accepted
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev_char_boundary = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.text.remove(prev_char_boundary);
            self.cursor = prev_char_boundary;
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    /// Move the cursor left by one character.
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the cursor right by one character.
    pub fn cursor_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.text.len(), |(i, _)| self.cursor + i);
        }
    }

    /// Move the cursor up one line, keeping the column where possible.
    pub fn cursor_up(&mut self) {
        let before = &self.text[..self.cursor];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        if line_start == 0 {
            return;
        }
        let column = before[line_start..].chars().count();
        let prev_start = self.text[..line_start - 1].rfind('\n').map_or(0, |i| i + 1);
        let prev_line = &self.text[prev_start..line_start - 1];
        self.cursor = prev_start + byte_offset_for_column(prev_line, column);
    }

    /// Move the cursor down one line, keeping the column where possible.
    pub fn cursor_down(&mut self) {
        let before = &self.text[..self.cursor];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count();

        if let Some(newline) = self.text[self.cursor..].find('\n') {
            let next_start = self.cursor + newline + 1;
            let next_end = self.text[next_start..]
                .find('\n')
                .map_or(self.text.len(), |i| next_start + i);
            let next_line = &self.text[next_start..next_end];
            self.cursor = next_start + byte_offset_for_column(next_line, column);
        }
    }

    /// Move the cursor to the start of the current line.
    pub fn cursor_home(&mut self) {
        self.cursor = self.text[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
    }

    /// Move the cursor to the end of the current line.
    pub fn cursor_end(&mut self) {
        let rest = &self.text[self.cursor..];
        self.cursor += rest.find('\n').unwrap_or(rest.len());
    }

    /// Zero-based (line, column) of the cursor, column counted in characters.
    #[must_use]
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        (line, before[line_start..].chars().count())
    }

    /// Terminal columns taken by the current line up to the cursor.
    ///
    /// Wide characters (CJK, most emoji) count as two columns.
    #[must_use]
    pub fn cursor_display_column(&self) -> usize {
        let before = &self.text[..self.cursor];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        before[line_start..].width()
    }
}

fn byte_offset_for_column(line: &str, column: usize) -> usize {
    line.char_indices().nth(column).map_or(line.len(), |(i, _)| i)
}
