use std::fmt;

/// A growable character buffer with an insertion cursor.
///
/// The cursor is a character index in `0..=len()`; every operation keeps it
/// there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    chars:  Vec<char>,
    cursor: usize,
}

impl TextBuffer {
    /// Creates an empty buffer with the cursor at 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { chars:  Vec::new(),
               cursor: 0, }
    }

    /// Creates a buffer holding `text`, with the cursor at the end.
    ///
    /// # Example
    /// ```
    /// use grapher::session::text::TextBuffer;
    ///
    /// let buffer = TextBuffer::from_text("sin x");
    /// assert_eq!(buffer.cursor(), 5);
    /// assert_eq!(buffer.to_string(), "sin x");
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    /// Returns the number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the buffer holds no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Adds a character at the end, leaving the cursor where it is.
    pub fn append(&mut self, c: char) {
        self.chars.push(c);
    }

    /// Inserts a character at the cursor and moves the cursor past it.
    ///
    /// # Example
    /// ```
    /// use grapher::session::text::TextBuffer;
    ///
    /// let mut buffer = TextBuffer::from_text("sx");
    /// buffer.set_cursor(1);
    /// buffer.insert('i');
    /// buffer.insert('n');
    /// assert_eq!(buffer.to_string(), "sinx");
    /// assert_eq!(buffer.cursor(), 3);
    /// ```
    pub fn insert(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Removes the character before the cursor and moves the cursor back.
    /// Does nothing at the start of the buffer.
    ///
    /// Returns the removed character.
    pub fn backspace(&mut self) -> Option<char> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.chars.remove(self.cursor))
    }

    /// Moves the cursor, clamping it to the buffer.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.chars.len());
    }

    /// Moves the cursor one character left, stopping at the start.
    pub const fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one character right, stopping at the end.
    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
