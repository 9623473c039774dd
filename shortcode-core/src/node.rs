//! Shortcode node resolution.
//!
//! A committed span-event tree is only boundaries; downstream rendering
//! wants a name and an attribute list. [`Shortcode::from_events`] walks one
//! committed `Shortcode` tree and resolves it against the source buffer,
//! zero-copy.

use thiserror::Error;

use crate::event::{Event, EventKind, SpanKind};
use crate::span::Span;

/// A resolved attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrValue<'a> {
    /// Unquoted bareword value.
    Bare(&'a str),
    /// Quoted value, quote markers stripped.
    Quoted(&'a str),
}

impl<'a> AttrValue<'a> {
    /// The value text, regardless of quoting.
    #[inline]
    pub fn text(&self) -> &'a str {
        match self {
            AttrValue::Bare(s) | AttrValue::Quoted(s) => s,
        }
    }
}

/// One resolved `name[=value]` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    /// `None` for a valueless (flag) attribute.
    pub value: Option<AttrValue<'a>>,
}

/// A resolved leaf directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcode<'a> {
    /// The directive name.
    pub name: &'a str,
    /// Source range from open delimiter through close delimiter.
    pub span: Span,
    /// Attributes in source order.
    pub attributes: Vec<Attribute<'a>>,
}

/// Malformed event stream handed to resolution.
///
/// A stream produced by a committed [`crate::leaf::shortcode`] attempt
/// never triggers these; they guard against sink misuse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("event stream does not begin with a shortcode span")]
    NotAShortcode,
    #[error("unbalanced span events")]
    Unbalanced,
    #[error("shortcode has no name span")]
    MissingName,
}

impl<'a> Shortcode<'a> {
    /// Resolve one committed `Shortcode` event tree against its source.
    ///
    /// `events` must be exactly the events of one successful attempt,
    /// starting at `Enter(Shortcode)`.
    pub fn from_events(source: &'a str, events: &[Event]) -> Result<Self, ResolveError> {
        match events.first() {
            Some(e) if e.is_enter() && e.span == SpanKind::Shortcode => {}
            _ => return Err(ResolveError::NotAShortcode),
        }
        let start = events[0].at;

        let mut name: Option<&'a str> = None;
        let mut attributes = Vec::new();
        let mut end = start;

        // Per-attribute accumulation.
        let mut attr_name: Option<&'a str> = None;
        let mut data: Option<&'a str> = None;
        let mut quoted = false;

        let mut depth = 0usize;
        let mut enters: Vec<&Event> = Vec::new();

        for event in events {
            match event.kind {
                EventKind::Enter => {
                    depth += 1;
                    enters.push(event);
                    match event.span {
                        SpanKind::Attribute => {
                            attr_name = None;
                            data = None;
                            quoted = false;
                        }
                        SpanKind::AttributeValueLiteral => quoted = true,
                        _ => {}
                    }
                }
                EventKind::Exit => {
                    let enter = enters.pop().ok_or(ResolveError::Unbalanced)?;
                    if enter.span != event.span {
                        return Err(ResolveError::Unbalanced);
                    }
                    depth -= 1;
                    let text = &source[enter.at as usize..event.at as usize];
                    match event.span {
                        SpanKind::ShortcodeName => name = Some(text),
                        SpanKind::AttributeName => attr_name = Some(text),
                        SpanKind::AttributeValueData => data = Some(text),
                        SpanKind::Attribute => {
                            let value = match (quoted, data) {
                                (true, Some(s)) => Some(AttrValue::Quoted(s)),
                                (true, None) => Some(AttrValue::Quoted("")),
                                (false, Some(s)) => Some(AttrValue::Bare(s)),
                                (false, None) => None,
                            };
                            attributes.push(Attribute {
                                name: attr_name.ok_or(ResolveError::Unbalanced)?,
                                value,
                            });
                        }
                        SpanKind::Shortcode => end = event.at,
                        _ => {}
                    }
                }
            }
        }
        if depth != 0 {
            return Err(ResolveError::Unbalanced);
        }

        Ok(Shortcode {
            name: name.ok_or(ResolveError::MissingName)?,
            span: Span::new(start, end),
            attributes,
        })
    }

    /// Look up an attribute value by name (first occurrence wins).
    pub fn get(&self, name: &str) -> Option<&AttrValue<'a>> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_ref())
    }

    /// Check for a valueless (flag) attribute.
    pub fn has_flag(&self, name: &str) -> bool {
        self.attributes
            .iter()
            .any(|a| a.name == name && a.value.is_none())
    }
}
