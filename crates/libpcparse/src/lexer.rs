//! Token-level scanning for `.pc` documents.
//!
//! [`Cursor`] is a byte position over the input plus the token matchers the
//! grammar is built from. Every matcher first skips insignificant whitespace
//! (any whitespace except `\n`), then either consumes its token or leaves the
//! cursor exactly where it was. Newlines are line terminators and are only
//! consumed by [`Cursor::newline`] and the rest-of-line matchers.

/// A position within a `.pc` document.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// The full input this cursor walks over.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move back to an earlier offset (used to backtrack a failed alternative).
    pub fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The next character, without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance past whitespace that is not a newline. Never fails.
    pub fn skip_whitespace(&mut self) {
        let skipped = self
            .rest()
            .find(|c: char| c == '\n' || !c.is_whitespace())
            .unwrap_or(self.rest().len());
        self.pos += skipped;
    }

    /// Whether the cursor sits at a line end (`\n` or end of input) once
    /// insignificant whitespace is skipped. Does not consume anything.
    pub fn at_line_end(&self) -> bool {
        let mut probe = *self;
        probe.skip_whitespace();
        probe.is_eof() || probe.rest().starts_with('\n')
    }

    /// Match an exact literal.
    pub fn literal(&mut self, lit: &str) -> bool {
        let start = self.pos;
        self.skip_whitespace();
        if self.rest().starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            self.pos = start;
            false
        }
    }

    /// Match one `\n`.
    pub fn newline(&mut self) -> bool {
        self.literal("\n")
    }

    /// Match a non-empty run of characters accepted by `class`.
    pub fn take_while1(&mut self, class: impl Fn(char) -> bool) -> Option<&'a str> {
        let start = self.pos;
        self.skip_whitespace();
        let rest = self.rest();
        let len = rest.find(|c: char| !class(c)).unwrap_or(rest.len());
        if len == 0 {
            self.pos = start;
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    /// Everything up to (not including) the next `\n`, with surrounding
    /// insignificant whitespace trimmed. May be empty.
    pub fn rest_of_line(&mut self) -> &'a str {
        self.skip_whitespace();
        let rest = self.rest();
        let len = rest.find('\n').unwrap_or(rest.len());
        self.pos += len;
        rest[..len].trim_end()
    }

    /// A variable or property key.
    pub fn key(&mut self) -> Option<&'a str> {
        self.take_while1(is_key_char)
    }

    /// A dependency identifier.
    pub fn identifier(&mut self) -> Option<&'a str> {
        self.take_while1(is_identifier_char)
    }

    /// A dependency version.
    pub fn version(&mut self) -> Option<&'a str> {
        self.take_while1(is_version_char)
    }
}

pub fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'
}

pub fn is_version_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.'
}
