//! Character cursor for traversing TC source text.
//!
//! Maintains byte position plus 1-based line/column while the scanner walks
//! the source. Only ASCII is significant in TC (`spec.md` §4.1), but the
//! cursor still decodes UTF-8 correctly so a stray multi-byte character
//! inside a comment, for instance, never panics or misaligns byte offsets.

/// A cursor over a source string, tracking byte position and line/column.
///
/// # Examples
///
/// ```
/// use tcc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("VAR x");
/// assert_eq!(cursor.current_char(), 'V');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'A');
/// ```
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// The full source text this cursor traverses.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-based column, counted in characters.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// `true` once every character of the source has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// The character at the cursor, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// The character `offset` characters ahead of the cursor.
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    fn char_at(&self, char_offset: usize) -> char {
        self.source[self.position..]
            .chars()
            .nth(char_offset)
            .unwrap_or('\0')
    }

    /// Advances past the current character, updating line/column.
    ///
    /// Does nothing at end of input.
    pub fn advance(&mut self) -> char {
        let c = self.current_char();
        if c == '\0' {
            return c;
        }
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// The source slice from byte offset `start` up to (not including) the
    /// cursor's current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_line_and_column() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance();
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 3));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
    }

    #[test]
    fn current_char_is_nul_at_end() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
        assert!(cursor.is_at_end());
    }

    #[test]
    fn peek_does_not_move_position() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.peek_char(1), 'b');
        assert_eq!(cursor.position(), 0);
    }
}
