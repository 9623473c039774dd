//! Whitespace factories.
//!
//! Both factories are empty-match tolerant: consuming nothing is a no-op
//! success, and a `Whitespace` span is only emitted when at least one code
//! point was consumed.

use crate::code::{is_space, is_space_or_line_ending};
use crate::event::SpanKind;
use crate::tokenizer::Tokenizer;

/// Consume a run of horizontal space as one `Whitespace` span.
pub fn horizontal_space(tokenizer: &mut Tokenizer) {
    if !is_space(tokenizer.current()) {
        return;
    }
    tokenizer.enter(SpanKind::Whitespace);
    while is_space(tokenizer.current()) {
        tokenizer.consume();
    }
    tokenizer.exit(SpanKind::Whitespace);
}

/// Consume a run mixing horizontal space and line endings, normalized into
/// one `Whitespace` span.
///
/// Leaf directives are single-line and never tolerate embedded line breaks,
/// so the leaf path does not call this; it is the whitespace rule for
/// contexts (future container directives) that do.
pub fn space_or_line_endings(tokenizer: &mut Tokenizer) {
    if !is_space_or_line_ending(tokenizer.current()) {
        return;
    }
    tokenizer.enter(SpanKind::Whitespace);
    while is_space_or_line_ending(tokenizer.current()) {
        tokenizer.consume();
    }
    tokenizer.exit(SpanKind::Whitespace);
}
