//! # Serializer
//!
//! Flattens a sparse coordinate→text mapping back into one phext string.
//!
//! Works bottom-up in nine passes, scroll axis first. Each pass groups the
//! cells that agree on every coarser axis, joins each group with that axis'
//! delimiter (padding skipped positions with empty cells) and hands the
//! joined groups to the next-coarser pass as single cells. After the library
//! pass one string is left.
//!
//! Partitioning the output yields the same non-empty scrolls at the same
//! coordinates. Empty cells are written as given but carry nothing that
//! survives a round trip.

use crate::coordinate::{Axis, Coordinate};
use crate::delimiter::DelimiterSet;
use std::collections::BTreeMap;

pub fn serialize<I, S>(cells: I, delimiters: &DelimiterSet) -> String
where
    I: IntoIterator<Item = (Coordinate, S)>,
    S: AsRef<str>,
{
    let mut level: BTreeMap<Coordinate, String> = cells
        .into_iter()
        .map(|(coordinate, text)| (coordinate, text.as_ref().to_string()))
        .collect();

    for axis in Axis::ALL.iter().rev().copied() {
        level = join_axis(level, axis, delimiters.get(axis));
    }

    // Every key is the origin after the library pass.
    level.into_values().next().unwrap_or_default()
}

fn join_axis(
    cells: BTreeMap<Coordinate, String>,
    axis: Axis,
    delimiter: char,
) -> BTreeMap<Coordinate, String> {
    let mut groups: BTreeMap<Coordinate, (u32, String)> = BTreeMap::new();

    // BTreeMap order guarantees ascending positions within each group.
    for (coordinate, text) in cells {
        let position = coordinate.get(axis);
        let (written, joined) = groups
            .entry(coordinate.reset_from(axis))
            .or_insert_with(|| (1, String::new()));
        for _ in *written..position {
            joined.push(delimiter);
        }
        joined.push_str(&text);
        *written = position;
    }

    groups
        .into_iter()
        .map(|(parent, (_, joined))| (parent, joined))
        .collect()
}
