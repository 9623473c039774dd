//! Document scanning.
//!
//! Stand-in for the host engine's construct dispatch: walk a document,
//! attempt the leaf construct at every occurrence of the open delimiter,
//! and fall back to plain text where the attempt fails. Candidates are
//! located with a substring search rather than trial tokenization at every
//! position - the open delimiter is a fixed literal.

use memchr::memmem;

use crate::leaf::{shortcode, Delimiters};
use crate::node::Shortcode;
use crate::tokenizer::Tokenizer;

/// One scanned item: a plain text run or a matched directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline<'a> {
    Text(&'a str),
    Shortcode(Shortcode<'a>),
}

/// Scan a document for leaf directives with the given delimiters.
///
/// Every byte of the source ends up in exactly one item: matched
/// directives become [`Inline::Shortcode`], everything else (including
/// directive-like text that fails to match) stays [`Inline::Text`].
pub fn scan_with<'a>(source: &'a str, delimiters: &Delimiters) -> Vec<Inline<'a>> {
    let finder = memmem::Finder::new(delimiters.open_literal().as_bytes());
    let mut items = Vec::new();
    let mut tokenizer = Tokenizer::new(source);

    // Start of the text run currently being accumulated.
    let mut text_start = 0usize;
    let mut search_from = 0usize;

    while let Some(found) = finder.find(&source.as_bytes()[search_from..]) {
        let candidate = search_from + found;
        tokenizer.seek(candidate as u32);
        let committed = tokenizer.events().len();
        if shortcode(&mut tokenizer, delimiters) {
            if text_start < candidate {
                items.push(Inline::Text(&source[text_start..candidate]));
            }
            let node = Shortcode::from_events(source, &tokenizer.events()[committed..])
                .expect("committed attempt produced a malformed event tree");
            let end = node.span.end as usize;
            items.push(Inline::Shortcode(node));
            text_start = end;
            search_from = end;
        } else {
            // Not a directive here; leave it to the text run and move on.
            search_from = candidate + 1;
        }
    }

    if text_start < source.len() {
        items.push(Inline::Text(&source[text_start..]));
    }
    items
}

/// Scan with the default `{{<` / `>}}` delimiters.
pub fn scan(source: &str) -> Vec<Inline<'_>> {
    scan_with(source, &Delimiters::default())
}
