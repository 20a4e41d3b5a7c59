//! # Partition Engine
//!
//! Turns a flat phext string into addressed scrolls.
//!
//! The raw text is split on the library delimiter, each piece on the shelf
//! delimiter, and so on down to the scroll delimiter. A single cursor walks
//! along with the recursion: after each piece at some axis has been handled,
//! the cursor advances that axis and resets everything finer. Whatever the
//! cursor reads when a scroll-level piece is reached is that scroll's
//! coordinate.
//!
//! ```text
//! "A" 0x17 "B" 0x18 "C"
//!   1.1.1/1.1.1/1.1.1  A
//!   1.1.1/1.1.1/1.1.2  B
//!   1.1.1/1.1.1/1.2.1  C
//! ```
//!
//! The cursor also advances after the last sibling at every level. This
//! trailing advance never touches a scroll that carries text, but it does
//! show up in [`Partition::cursor`].
//!
//! Scroll text is borrowed from the input; nothing is copied or mutated.

use crate::coordinate::{Axis, Coordinate};
use crate::delimiter::{DelimiterSet, LINE_BREAK};
use log::debug;
use std::collections::BTreeMap;

/// A leaf of the partition tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scroll<'a> {
    pub coordinate: Coordinate,
    pub text: &'a str,
}

impl Scroll<'_> {
    /// Number of lines in the scroll. Lines are display-only; they never
    /// take part in addressing.
    pub fn line_count(&self) -> usize {
        self.text.split(LINE_BREAK).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'a> {
    /// Every non-empty scroll, in document order.
    pub scrolls: Vec<Scroll<'a>>,
    /// Text at the requested target. `Some("")` when the target exists
    /// structurally but is empty, `None` when the walk never reached it.
    pub located: Option<&'a str>,
    /// Where the cursor came to rest.
    pub cursor: Coordinate,
}

impl<'a> Partition<'a> {
    /// Coordinate→text index of the non-empty scrolls.
    pub fn to_map(&self) -> BTreeMap<Coordinate, &'a str> {
        self.scrolls
            .iter()
            .map(|scroll| (scroll.coordinate, scroll.text))
            .collect()
    }
}

/// Splits `raw` into addressed scrolls.
pub fn partition<'a>(raw: &'a str, delimiters: &DelimiterSet) -> Partition<'a> {
    walk(raw, delimiters, None)
}

/// Like [`partition`], but also reports the scroll found at `target`.
pub fn locate<'a>(raw: &'a str, delimiters: &DelimiterSet, target: Coordinate) -> Partition<'a> {
    walk(raw, delimiters, Some(target))
}

fn walk<'a>(raw: &'a str, delimiters: &DelimiterSet, target: Option<Coordinate>) -> Partition<'a> {
    let mut walker = Walker {
        delimiters,
        target,
        cursor: Coordinate::ORIGIN,
        scrolls: Vec::new(),
        located: None,
    };

    // An empty document has no libraries at all, so the cursor stays put.
    // Its origin still reads as one empty scroll, like a lone delimiter's.
    if raw.is_empty() {
        if target == Some(Coordinate::ORIGIN) {
            walker.located = Some(raw);
        }
    } else {
        walker.descend(raw, Axis::Library);
    }

    debug!(
        "partitioned {} bytes into {} scrolls, cursor at {}",
        raw.len(),
        walker.scrolls.len(),
        walker.cursor
    );

    Partition {
        scrolls: walker.scrolls,
        located: walker.located,
        cursor: walker.cursor,
    }
}

struct Walker<'a, 'd> {
    delimiters: &'d DelimiterSet,
    target: Option<Coordinate>,
    cursor: Coordinate,
    scrolls: Vec<Scroll<'a>>,
    located: Option<&'a str>,
}

impl<'a> Walker<'a, '_> {
    fn descend(&mut self, segment: &'a str, axis: Axis) {
        for piece in segment.split(self.delimiters.get(axis)) {
            match axis.finer() {
                Some(finer) => self.descend(piece, finer),
                None => self.visit(piece),
            }
            self.cursor.advance(axis);
        }
    }

    fn visit(&mut self, text: &'a str) {
        if self.target == Some(self.cursor) {
            self.located = Some(text);
        }
        if !text.is_empty() {
            self.scrolls.push(Scroll {
                coordinate: self.cursor,
                text,
            });
        }
    }
}
