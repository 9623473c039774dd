//! Span events - the output of the tokenizer.
//!
//! This is an enter/exit event model: the structure of a matched directive
//! is represented by strictly nested `Enter`/`Exit` pairs, with no tree
//! built up front. A committed match is always well-nested - every `Enter`
//! has exactly one matching `Exit` of the same kind, and exits close in
//! reverse order of their enters.
//!
//! A full match of `{{< img src="a.png" >}}` emits:
//!
//! ```text
//! Enter Shortcode
//!   Enter ShortcodeOpenMarker  Exit ShortcodeOpenMarker      {{<
//!   Enter Whitespace           Exit Whitespace
//!   Enter ShortcodeName        Exit ShortcodeName            img
//!   Enter Whitespace           Exit Whitespace
//!   Enter AttributeList
//!     Enter Attribute
//!       Enter AttributeName    Exit AttributeName            src
//!       Enter AttributeInitializerMarker  Exit ...           =
//!       Enter AttributeValueLiteral
//!         Enter AttributeValueMarker  Exit ...               "
//!         Enter AttributeValue
//!           Enter AttributeValueData  Exit ...               a.png
//!         Exit AttributeValue
//!         Enter AttributeValueMarker  Exit ...               "
//!       Exit AttributeValueLiteral
//!     Exit Attribute
//!     Enter Whitespace         Exit Whitespace
//!   Exit AttributeList
//!   Enter ShortcodeCloseMarker Exit ShortcodeCloseMarker     >}}
//! Exit Shortcode
//! ```

/// The closed set of span kinds a leaf directive can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// The whole directive, open delimiter through close delimiter.
    Shortcode,
    /// The open delimiter literal (`{{<` by default).
    ShortcodeOpenMarker,
    /// The close delimiter literal (`>}}` by default).
    ShortcodeCloseMarker,
    /// The directive name.
    ShortcodeName,
    /// A run of horizontal space.
    Whitespace,
    /// The attribute list. Absent when the directive has no attributes.
    AttributeList,
    /// One `name[=value]` pair.
    Attribute,
    /// The attribute name.
    AttributeName,
    /// The `=` between an attribute name and its value.
    AttributeInitializerMarker,
    /// The value text region (quoted interior or bareword).
    AttributeValue,
    /// A quoted value including both quote markers.
    AttributeValueLiteral,
    /// One quote character of a quoted value.
    AttributeValueMarker,
    /// Raw value text.
    AttributeValueData,
}

/// Whether an event opens or closes a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Enter,
    Exit,
}

/// One span boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub span: SpanKind,
    /// Byte offset into the source at which the boundary sits.
    pub at: u32,
}

impl Event {
    /// Check if this event opens a span.
    #[inline]
    pub fn is_enter(&self) -> bool {
        self.kind == EventKind::Enter
    }

    /// Check if this event closes a span.
    #[inline]
    pub fn is_exit(&self) -> bool {
        self.kind == EventKind::Exit
    }
}
