//! # Coordinates
//!
//! Every scroll in a phext lives at a nine-axis address. The axes run from the
//! coarsest (library) to the finest (scroll), and the textual form groups them
//! in threes:
//!
//! ```text
//! library.shelf.series / collection.volume.book / chapter.section.scroll
//!          Z                      Y                        X
//! ```
//!
//! Parsing is deliberately forgiving: missing or malformed components become
//! `1`, so any string a user types resolves to *some* coordinate. Components
//! are always `>= 1`, and anything built from user input stays below
//! [`COORDINATE_MAXIMUM`].

use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Exclusive upper bound for components parsed or set from user input.
pub const COORDINATE_MAXIMUM: u32 = 1000;

const LARGEST_COMPONENT: u32 = COORDINATE_MAXIMUM - 1;

/// One of the nine hierarchy levels, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    Library,
    Shelf,
    Series,
    Collection,
    Volume,
    Book,
    Chapter,
    Section,
    Scroll,
}

impl Axis {
    pub const COUNT: usize = 9;

    pub const ALL: [Axis; Axis::COUNT] = [
        Axis::Library,
        Axis::Shelf,
        Axis::Series,
        Axis::Collection,
        Axis::Volume,
        Axis::Book,
        Axis::Chapter,
        Axis::Section,
        Axis::Scroll,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The next axis towards the scroll level, if any.
    pub fn finer(self) -> Option<Axis> {
        Axis::ALL.get(self.index() + 1).copied()
    }

    /// The next axis towards the library level, if any.
    pub fn coarser(self) -> Option<Axis> {
        self.index().checked_sub(1).map(|i| Axis::ALL[i])
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Library => "library",
            Axis::Shelf => "shelf",
            Axis::Series => "series",
            Axis::Collection => "collection",
            Axis::Volume => "volume",
            Axis::Book => "book",
            Axis::Chapter => "chapter",
            Axis::Section => "section",
            Axis::Scroll => "scroll",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Axis::ALL
            .iter()
            .copied()
            .find(|axis| axis.name() == wanted)
            .ok_or_else(|| format!("Unknown axis: {}", s))
    }
}

/// A full nine-axis address.
///
/// Ordering is lexicographic from library down to scroll, which is also the
/// order scrolls appear in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    axes: [u32; Axis::COUNT],
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Coordinate {
    /// `1.1.1/1.1.1/1.1.1`, where every parse starts.
    pub const ORIGIN: Coordinate = Coordinate {
        axes: [1; Axis::COUNT],
    };

    pub fn get(&self, axis: Axis) -> u32 {
        self.axes[axis.index()]
    }

    /// Parses the three dot-joined groups of an address.
    ///
    /// Each group holds up to three components. Absent, non-numeric, zero or
    /// out-of-range components default to 1; extra components are ignored.
    pub fn parse(z: &str, y: &str, x: &str) -> Self {
        let mut axes = [1; Axis::COUNT];
        for (group_idx, group) in [z, y, x].iter().enumerate() {
            let mut parts = group.split('.');
            for offset in 0..3 {
                let axis = Axis::ALL[group_idx * 3 + offset];
                axes[axis.index()] = parse_component(parts.next(), axis);
            }
        }
        Self { axes }
    }

    /// Parses a full `Z/Y/X` address. Never fails; see [`Coordinate::parse`].
    pub fn from_address(address: &str) -> Self {
        let mut groups = address.trim().split('/');
        let z = groups.next().unwrap_or("");
        let y = groups.next().unwrap_or("");
        let x = groups.next().unwrap_or("");
        Coordinate::parse(z, y, x)
    }

    /// Returns a copy with `axis` set to `value`, clamped to
    /// `1..COORDINATE_MAXIMUM`. Other axes are untouched.
    pub fn with(mut self, axis: Axis, value: u32) -> Self {
        let clamped = value.clamp(1, LARGEST_COMPONENT);
        if clamped != value {
            warn!("{} {} out of range, using {}", axis, value, clamped);
        }
        self.axes[axis.index()] = clamped;
        self
    }

    /// Closes out the current subtree at `axis`: increments it and resets
    /// every finer axis to 1.
    ///
    /// Unbounded: the partition cursor calls this once per delimiter already
    /// present in the text, so it never outgrows its input.
    pub fn advance(&mut self, axis: Axis) {
        let idx = axis.index();
        self.axes[idx] = self.axes[idx].saturating_add(1);
        self.reset_finer(axis);
    }

    /// The first position of the next sibling at `axis`. Stays on the last
    /// addressable sibling instead of passing [`COORDINATE_MAXIMUM`].
    pub fn next(mut self, axis: Axis) -> Self {
        let idx = axis.index();
        if self.axes[idx] < LARGEST_COMPONENT {
            self.axes[idx] += 1;
        }
        self.reset_finer(axis);
        self
    }

    /// The scroll position after this one in document order. Full axes carry
    /// into the next coarser one; `None` past the last addressable scroll.
    pub fn successor(self) -> Option<Self> {
        let mut axis = Axis::Scroll;
        while self.get(axis) >= LARGEST_COMPONENT {
            axis = axis.coarser()?;
        }
        Some(self.next(axis))
    }

    /// The first position of the previous sibling at `axis`, clamped at 1.
    pub fn previous(mut self, axis: Axis) -> Self {
        let idx = axis.index();
        self.axes[idx] = self.axes[idx].saturating_sub(1).max(1);
        self.reset_finer(axis);
        self
    }

    /// Resets `axis` and every finer axis to 1, yielding the address of the
    /// enclosing subtree one level above `axis`.
    pub fn reset_from(mut self, axis: Axis) -> Self {
        for n in &mut self.axes[axis.index()..] {
            *n = 1;
        }
        self
    }

    fn reset_finer(&mut self, axis: Axis) {
        for n in &mut self.axes[axis.index() + 1..] {
            *n = 1;
        }
    }
}

fn parse_component(part: Option<&str>, axis: Axis) -> u32 {
    let raw = match part {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return 1,
    };
    match raw.trim().parse::<u32>() {
        Ok(n) if (1..COORDINATE_MAXIMUM).contains(&n) => n,
        _ => {
            warn!("invalid {} component {:?}, defaulting to 1", axis, raw);
            1
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.axes;
        write!(
            f,
            "{}.{}.{}/{}.{}.{}/{}.{}.{}",
            a[0], a[1], a[2], a[3], a[4], a[5], a[6], a[7], a[8]
        )
    }
}

impl FromStr for Coordinate {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Coordinate::from_address(s))
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Coordinate::from_address(&s))
    }
}
