//! Tokenizer state: input cursor plus the span-event sink.
//!
//! The tokenizer owns the decoded code-point sequence, a cursor into it,
//! the append-only event list, and the stack of currently open spans. A
//! construct drives it through [`Tokenizer::current`] / [`Tokenizer::consume`]
//! and emits structure through [`Tokenizer::enter`] / [`Tokenizer::exit`].
//!
//! # Transactional attempts
//!
//! A construct attempt either fully matches or leaves no trace. That is
//! implemented with [`Tokenizer::checkpoint`] / [`Tokenizer::rollback`]
//! (or the [`Tokenizer::attempt`] wrapper): rollback truncates the event
//! list and restores the cursor rather than undoing individual events.
//! An attempt must only exit spans it entered itself; the stack discipline
//! enforced by `exit` makes any other shape an implementation fault.

use crate::code::Code;
use crate::event::{Event, EventKind, SpanKind};

/// Snapshot of tokenizer state, for transactional rollback.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint {
    pos: usize,
    events: usize,
    stack: usize,
}

/// Cursor and span-event sink over one source buffer.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
    /// Decoded code points, without the Eof sentinel.
    codes: Vec<Code>,
    /// Byte offset of each code point; one extra trailing entry at
    /// `source.len()` so the cursor always has an offset, including at Eof.
    offsets: Vec<u32>,
    /// Cursor: index into `codes`.
    pos: usize,
    events: Vec<Event>,
    /// Kinds of currently open spans, innermost last.
    stack: Vec<SpanKind>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over a source buffer, cursor at the start.
    pub fn new(source: &'a str) -> Self {
        let mut codes = Vec::with_capacity(source.len());
        let mut offsets = Vec::with_capacity(source.len() + 1);
        for (offset, c) in source.char_indices() {
            codes.push(Code::Char(c));
            offsets.push(offset as u32);
        }
        offsets.push(source.len() as u32);
        Self {
            source,
            codes,
            offsets,
            pos: 0,
            events: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// The source buffer.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The code point under the cursor, or `Eof` past the end.
    #[inline]
    pub fn current(&self) -> Code {
        self.codes.get(self.pos).copied().unwrap_or(Code::Eof)
    }

    /// The most recently consumed code point, if any.
    #[inline]
    pub fn previous(&self) -> Option<Code> {
        self.pos.checked_sub(1).map(|i| self.codes[i])
    }

    /// Byte offset of the cursor into the source.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offsets[self.pos]
    }

    /// Check if the cursor is past the last code point.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos == self.codes.len()
    }

    /// Consume the code point under the cursor.
    ///
    /// # Panics
    ///
    /// Consuming at `Eof` is an implementation fault: every state must
    /// check [`Tokenizer::current`] before consuming.
    #[inline]
    pub fn consume(&mut self) {
        assert!(self.pos < self.codes.len(), "consume past end of input");
        self.pos += 1;
    }

    /// Move the cursor to an absolute byte offset.
    ///
    /// The offset must sit on a code-point boundary; the host engine uses
    /// this to position the tokenizer at a candidate construct start.
    pub fn seek(&mut self, offset: u32) {
        self.pos = self
            .offsets
            .binary_search(&offset)
            .unwrap_or_else(|_| panic!("seek to non-boundary offset {offset}"));
    }

    /// Open a span of the given kind at the cursor.
    pub fn enter(&mut self, span: SpanKind) {
        self.stack.push(span);
        self.events.push(Event {
            kind: EventKind::Enter,
            span,
            at: self.offset(),
        });
    }

    /// Close the innermost open span, which must be of the given kind.
    ///
    /// # Panics
    ///
    /// A mismatched or missing open span is an implementation fault in the
    /// state machine, never an input condition.
    pub fn exit(&mut self, span: SpanKind) {
        let top = self.stack.pop().expect("exit with no open span");
        assert_eq!(top, span, "exit does not match innermost open span");
        self.events.push(Event {
            kind: EventKind::Exit,
            span,
            at: self.offset(),
        });
    }

    /// Events emitted so far.
    #[inline]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consume the tokenizer, returning its events.
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Number of spans currently open.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Snapshot the cursor, event list and open-span stack.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            events: self.events.len(),
            stack: self.stack.len(),
        }
    }

    /// Restore a snapshot, discarding everything emitted since.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        debug_assert!(self.stack.len() >= checkpoint.stack, "attempt closed a pre-checkpoint span");
        self.pos = checkpoint.pos;
        self.events.truncate(checkpoint.events);
        self.stack.truncate(checkpoint.stack);
    }

    /// Run a construct attempt transactionally.
    ///
    /// If the closure reports failure, the tokenizer is rolled back to its
    /// state at entry: zero net events appended, cursor restored.
    pub fn attempt<F>(&mut self, construct: F) -> bool
    where
        F: FnOnce(&mut Self) -> bool,
    {
        let checkpoint = self.checkpoint();
        if construct(self) {
            true
        } else {
            self.rollback(checkpoint);
            false
        }
    }
}
