//! Attribute list tokenization.
//!
//! Recognizes zero or more `name[=value]` pairs between the directive name
//! and the close delimiter. Values are either quoted literals (single or
//! double quoted, no embedded line breaks) or barewords drawn from a
//! restricted character set.
//!
//! The machine is a closed state enum driven by one loop; every iteration
//! either consumes a code point, transitions to a state that will, or
//! leaves the machine. Failure anywhere fails the whole directive attempt -
//! a malformed attribute never degrades to "directive without attributes".

use crate::code::{is_ascii_alphanumeric, is_line_ending, is_space, Code};
use crate::event::SpanKind;
use crate::space::horizontal_space;
use crate::tokenizer::Tokenizer;

/// First code point of an attribute name.
#[inline]
fn is_name_start(code: Code) -> bool {
    matches!(code, Code::Char(c) if c.is_ascii_alphabetic() || c == '_' || c == ':')
}

/// Continuation code point of an attribute name.
#[inline]
fn is_name_continue(code: Code) -> bool {
    is_ascii_alphanumeric(code) || matches!(code, Code::Char('-' | '_' | '.' | ':'))
}

/// Reserved in barewords; any of these inside an unquoted value fails the
/// attempt rather than terminating the value.
#[inline]
fn is_bareword_reserved(code: Code) -> bool {
    matches!(code, Code::Eof | Code::Char('"' | '\'' | '<' | '=' | '>' | '`'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Expecting an attribute name, whitespace, or the close delimiter.
    Between,
    /// Inside an attribute name.
    Name,
    /// After a name: `=` starts a value, anything else ends the attribute.
    AfterName,
    /// After `=`: expecting a quote, a bareword, or space before either.
    BeforeValue,
    /// Just past a quote marker: value text or the closing marker.
    QuotedStart,
    /// Inside a quoted value, between data runs.
    QuotedBetween,
    /// Inside a quoted data run.
    QuotedData,
    /// Just past a closing quote marker.
    AfterQuoted,
    /// Inside an unquoted value.
    Bareword,
}

/// Tokenize the attribute list of a leaf directive.
///
/// `close_first` is the first code point of the configured close delimiter;
/// seeing it at a between position ends the list with the cursor left on
/// it. Returns `false` on any rule violation - the caller rolls back.
///
/// The `AttributeList` span is entered lazily when the first attribute name
/// begins, so a directive without attributes emits no list span at all.
pub(crate) fn attribute_list(tokenizer: &mut Tokenizer, close_first: Code) -> bool {
    let mut state = State::Between;
    let mut in_list = false;
    // Active quote marker while inside a quoted value.
    let mut marker = Code::Eof;

    loop {
        let code = tokenizer.current();
        state = match state {
            State::Between => {
                if code == close_first {
                    if in_list {
                        tokenizer.exit(SpanKind::AttributeList);
                    }
                    return true;
                }
                if is_space(code) {
                    horizontal_space(tokenizer);
                    State::Between
                } else if is_name_start(code) {
                    if !in_list {
                        tokenizer.enter(SpanKind::AttributeList);
                        in_list = true;
                    }
                    tokenizer.enter(SpanKind::Attribute);
                    tokenizer.enter(SpanKind::AttributeName);
                    tokenizer.consume();
                    State::Name
                } else {
                    return false;
                }
            }

            State::Name => {
                if is_name_continue(code) {
                    tokenizer.consume();
                    State::Name
                } else if matches!(tokenizer.previous(), Some(Code::Char('-' | '_'))) {
                    // Trailing dash/underscore makes the name malformed.
                    return false;
                } else {
                    tokenizer.exit(SpanKind::AttributeName);
                    State::AfterName
                }
            }

            State::AfterName => {
                if is_space(code) {
                    horizontal_space(tokenizer);
                    State::AfterName
                } else if code == Code::Char('=') {
                    tokenizer.enter(SpanKind::AttributeInitializerMarker);
                    tokenizer.consume();
                    tokenizer.exit(SpanKind::AttributeInitializerMarker);
                    State::BeforeValue
                } else {
                    // Attribute without a value.
                    tokenizer.exit(SpanKind::Attribute);
                    State::Between
                }
            }

            State::BeforeValue => {
                if is_space(code) {
                    horizontal_space(tokenizer);
                    State::BeforeValue
                } else if matches!(code, Code::Char('"' | '\'')) {
                    marker = code;
                    tokenizer.enter(SpanKind::AttributeValueLiteral);
                    tokenizer.enter(SpanKind::AttributeValueMarker);
                    tokenizer.consume();
                    tokenizer.exit(SpanKind::AttributeValueMarker);
                    State::QuotedStart
                } else if code == close_first
                    || is_line_ending(code)
                    || is_bareword_reserved(code)
                {
                    return false;
                } else {
                    tokenizer.enter(SpanKind::AttributeValue);
                    tokenizer.enter(SpanKind::AttributeValueData);
                    tokenizer.consume();
                    State::Bareword
                }
            }

            State::QuotedStart => {
                if code == marker {
                    tokenizer.enter(SpanKind::AttributeValueMarker);
                    tokenizer.consume();
                    tokenizer.exit(SpanKind::AttributeValueMarker);
                    tokenizer.exit(SpanKind::AttributeValueLiteral);
                    tokenizer.exit(SpanKind::Attribute);
                    State::AfterQuoted
                } else {
                    tokenizer.enter(SpanKind::AttributeValue);
                    State::QuotedBetween
                }
            }

            State::QuotedBetween => {
                if code == marker {
                    tokenizer.exit(SpanKind::AttributeValue);
                    State::QuotedStart
                } else if code == Code::Eof || is_line_ending(code) {
                    // Leaf directives are single-line: a raw line break
                    // inside a quoted value is a match failure.
                    return false;
                } else {
                    tokenizer.enter(SpanKind::AttributeValueData);
                    tokenizer.consume();
                    State::QuotedData
                }
            }

            State::QuotedData => {
                if code == marker || code == Code::Eof || is_line_ending(code) {
                    tokenizer.exit(SpanKind::AttributeValueData);
                    State::QuotedBetween
                } else {
                    tokenizer.consume();
                    State::QuotedData
                }
            }

            State::AfterQuoted => {
                if code == close_first || is_space(code) {
                    State::Between
                } else {
                    // No junk directly after a closing quote.
                    return false;
                }
            }

            State::Bareword => {
                if code == close_first || is_space(code) || is_line_ending(code) {
                    tokenizer.exit(SpanKind::AttributeValueData);
                    tokenizer.exit(SpanKind::AttributeValue);
                    tokenizer.exit(SpanKind::Attribute);
                    State::Between
                } else if is_bareword_reserved(code) {
                    return false;
                } else {
                    tokenizer.consume();
                    State::Bareword
                }
            }
        };
    }
}
