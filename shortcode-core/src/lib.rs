//! Shortcode Core Tokenizer
//!
//! Tokenizer for leaf shortcode directives embedded in markdown-like text:
//! `{{< name attr="value" flag >}}`, terminated by end-of-line. Emits a
//! well-nested span-event stream; a failed attempt rolls back completely so
//! a host engine can fall back to other constructs or plain text.
//!
//! # Architecture
//!
//! - **code.rs** - code points and classification predicates
//! - **span.rs** - byte-range span type
//! - **event.rs** - span kinds and enter/exit events
//! - **tokenizer.rs** - cursor, event sink, checkpoint/rollback
//! - **literal.rs** - exact delimiter-literal matching
//! - **space.rs** - whitespace factories
//! - **attributes.rs** - attribute list state machine
//! - **leaf.rs** - the leaf directive construct and delimiter config
//! - **node.rs** - event tree to `Shortcode` node resolution
//! - **scan.rs** - document scanning with plain-text fallback
//!
//! # Example
//!
//! ```
//! use shortcode_core::{scan, AttrValue, Inline};
//!
//! let items = scan("see {{< youtube id=\"abc123\" >}}");
//! assert_eq!(items[0], Inline::Text("see "));
//! let Inline::Shortcode(node) = &items[1] else { unreachable!() };
//! assert_eq!(node.name, "youtube");
//! assert_eq!(node.get("id"), Some(&AttrValue::Quoted("abc123")));
//! ```

mod attributes;
pub mod code;
pub mod event;
pub mod leaf;
mod literal;
pub mod node;
pub mod scan;
pub mod space;
pub mod span;
pub mod tokenizer;

pub use code::Code;
pub use event::{Event, EventKind, SpanKind};
pub use leaf::{shortcode, DelimiterError, Delimiters};
pub use node::{AttrValue, Attribute, ResolveError, Shortcode};
pub use scan::{scan, scan_with, Inline};
pub use span::Span;
pub use tokenizer::{Checkpoint, Tokenizer};
