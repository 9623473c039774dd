//! Leaf directive construct.
//!
//! The top-level orchestrator: open delimiter, directive name, attribute
//! list, close delimiter, end of line. One transactional attempt - on any
//! rejection the tokenizer is rolled back and the host is free to treat
//! the text as plain content.

use thiserror::Error;

use crate::attributes::attribute_list;
use crate::code::{codes_of, is_ascii_alpha, is_ascii_alphanumeric, is_line_ending, Code};
use crate::event::SpanKind;
use crate::literal::match_literal;
use crate::space::horizontal_space;
use crate::tokenizer::Tokenizer;

/// Invalid delimiter configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DelimiterError {
    #[error("open delimiter literal is empty")]
    EmptyOpen,
    #[error("close delimiter literal is empty")]
    EmptyClose,
}

/// The configured open/close delimiter pair, precomputed into code-point
/// sequences at construction time.
#[derive(Debug, Clone)]
pub struct Delimiters {
    open_literal: String,
    open: Vec<Code>,
    close: Vec<Code>,
}

impl Delimiters {
    /// Build a delimiter pair from literals; both must be non-empty.
    pub fn new(open: &str, close: &str) -> Result<Self, DelimiterError> {
        if open.is_empty() {
            return Err(DelimiterError::EmptyOpen);
        }
        if close.is_empty() {
            return Err(DelimiterError::EmptyClose);
        }
        Ok(Self {
            open_literal: open.to_owned(),
            open: codes_of(open),
            close: codes_of(close),
        })
    }

    /// The open delimiter as text, for candidate scanning.
    #[inline]
    pub fn open_literal(&self) -> &str {
        &self.open_literal
    }

    /// The open delimiter code sequence.
    #[inline]
    pub fn open(&self) -> &[Code] {
        &self.open
    }

    /// The close delimiter code sequence.
    #[inline]
    pub fn close(&self) -> &[Code] {
        &self.close
    }

    /// First code point of the close delimiter; seeing it ends the
    /// attribute list.
    #[inline]
    pub fn close_first(&self) -> Code {
        self.close[0]
    }
}

/// The conventional `{{<` / `>}}` pair.
impl Default for Delimiters {
    fn default() -> Self {
        Self::new("{{<", ">}}").expect("default delimiters are non-empty")
    }
}

/// Attempt a leaf directive at the cursor.
///
/// Either commits one well-nested `Shortcode` span tree and leaves the
/// cursor just past the close delimiter (the trailing line ending, if any,
/// is not consumed), or returns `false` with zero net events appended and
/// the cursor restored.
pub fn shortcode(tokenizer: &mut Tokenizer, delimiters: &Delimiters) -> bool {
    tokenizer.attempt(|tokenizer| tokenize(tokenizer, delimiters))
}

fn tokenize(tokenizer: &mut Tokenizer, delimiters: &Delimiters) -> bool {
    tokenizer.enter(SpanKind::Shortcode);
    if !match_literal(tokenizer, delimiters.open(), SpanKind::ShortcodeOpenMarker) {
        return false;
    }

    horizontal_space(tokenizer);

    // Directive name: ASCII alpha first, then alphanumeric/dash/underscore,
    // not ending in a dash or underscore.
    if !is_ascii_alpha(tokenizer.current()) {
        return false;
    }
    tokenizer.enter(SpanKind::ShortcodeName);
    tokenizer.consume();
    while is_ascii_alphanumeric(tokenizer.current())
        || matches!(tokenizer.current(), Code::Char('-' | '_'))
    {
        tokenizer.consume();
    }
    if matches!(tokenizer.previous(), Some(Code::Char('-' | '_'))) {
        return false;
    }
    tokenizer.exit(SpanKind::ShortcodeName);

    if !attribute_list(tokenizer, delimiters.close_first()) {
        return false;
    }
    if !match_literal(tokenizer, delimiters.close(), SpanKind::ShortcodeCloseMarker) {
        return false;
    }

    // Nothing else on the line after the close delimiter.
    let code = tokenizer.current();
    if code != Code::Eof && !is_line_ending(code) {
        return false;
    }
    tokenizer.exit(SpanKind::Shortcode);
    true
}
