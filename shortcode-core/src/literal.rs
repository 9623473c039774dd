//! Literal delimiter matching.

use crate::code::Code;
use crate::event::SpanKind;
use crate::tokenizer::Tokenizer;

/// Consume an exact literal, wrapped in a span of the given kind.
///
/// Compares one code point at a time against the precomputed literal. On a
/// full match the span is closed and the cursor sits just past the literal.
/// On the first mismatch this returns `false` with the bounding span still
/// open - the caller is mid-attempt and must roll back, which discards the
/// dangling `Enter`.
pub(crate) fn match_literal(tokenizer: &mut Tokenizer, literal: &[Code], span: SpanKind) -> bool {
    debug_assert!(!literal.is_empty());
    tokenizer.enter(span);
    for &expected in literal {
        if tokenizer.current() != expected {
            return false;
        }
        tokenizer.consume();
    }
    tokenizer.exit(span);
    true
}
