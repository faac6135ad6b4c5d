//! Token cursor
//!
//!     A [Cursor] is a read head over the lexed line tokens. It is a small `Copy` value: a rule
//!     that wants to look ahead speculatively works on a copy and writes it back only once it
//!     has committed to a match, so a failed rule can never leave the caller's cursor advanced.
//!
//!         let mut c = *cursor;
//!         c.skip_blank_lines();
//!         ... inspect c.here() / c.next() / c.next2(), c.advance() ...
//!         *cursor = c; // commit
//!
//!     The index only ever increases.

use crate::lawtext::error::{ParserError, ParserResult};
use crate::lawtext::token::LineToken;

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    tokens: &'a [LineToken],
    index: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [LineToken]) -> Self {
        Self { tokens, index: 0 }
    }

    /// Token `offset` positions ahead of the current one
    pub fn peek(&self, offset: usize) -> Option<&'a LineToken> {
        self.tokens.get(self.index + offset)
    }

    pub fn here(&self) -> Option<&'a LineToken> {
        self.peek(0)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Option<&'a LineToken> {
        self.peek(1)
    }

    pub fn next2(&self) -> Option<&'a LineToken> {
        self.peek(2)
    }

    pub fn prev(&self) -> Option<&'a LineToken> {
        self.index
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }

    pub fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    pub fn is_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    pub fn skip_blank_lines(&mut self) {
        while self.here().is_some_and(LineToken::is_blank) {
            self.advance();
        }
    }

    pub fn position(&self) -> usize {
        self.index
    }

    /// Source line of the current token, or one past the last line at end of input.
    pub fn line_number(&self) -> usize {
        match (self.here(), self.tokens.last()) {
            (Some(token), _) => token.line,
            (None, Some(last)) => last.line + 1,
            (None, None) => 0,
        }
    }
}

/// Fail with [ParserError::InternalParseFailure] when a loop iteration left the cursor where
/// it was.
pub fn ensure_progress(before: usize, cursor: &Cursor<'_>, rule: &str) -> ParserResult<()> {
    if cursor.position() > before {
        Ok(())
    } else {
        Err(ParserError::InternalParseFailure {
            line: cursor.line_number(),
            message: format!("{} made no progress", rule),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lawtext::token::LineKind;

    fn tokens() -> Vec<LineToken> {
        vec![
            LineToken::new(LineKind::Default, 0, "a", 0),
            LineToken::new(LineKind::Blank, 0, "", 1),
            LineToken::new(LineKind::Blank, 0, "", 2),
            LineToken::new(LineKind::Default, 1, "b", 3),
        ]
    }

    #[test]
    fn test_lookahead_does_not_move() {
        let tokens = tokens();
        let cursor = Cursor::new(&tokens);
        assert_eq!(cursor.here().map(|t| t.body.as_str()), Some("a"));
        assert!(cursor.next().is_some_and(LineToken::is_blank));
        assert!(cursor.next2().is_some_and(LineToken::is_blank));
        assert_eq!(cursor.peek(3).map(|t| t.body.as_str()), Some("b"));
        assert!(cursor.prev().is_none());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_copy_is_speculative() {
        let tokens = tokens();
        let cursor = Cursor::new(&tokens);
        let mut c = cursor;
        c.advance();
        c.skip_blank_lines();
        assert_eq!(c.here().map(|t| t.line), Some(3));
        assert_eq!(c.prev().map(|t| t.line), Some(2));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_end_of_input() {
        let tokens = tokens();
        let mut c = Cursor::new(&tokens);
        for _ in 0..10 {
            c.advance();
        }
        assert!(c.is_end());
        assert_eq!(c.position(), 4);
        assert_eq!(c.line_number(), 4);
    }

    #[test]
    fn test_ensure_progress() {
        let tokens = tokens();
        let mut c = Cursor::new(&tokens);
        assert!(matches!(
            ensure_progress(0, &c, "loop"),
            Err(ParserError::InternalParseFailure { line: 0, .. })
        ));
        c.advance();
        assert!(ensure_progress(0, &c, "loop").is_ok());
    }
}
