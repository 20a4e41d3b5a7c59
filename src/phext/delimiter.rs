//! The nine structural delimiters, coarsest first.
//!
//! Documents must not contain these characters as ordinary text: any
//! occurrence is always read as structure.

use crate::coordinate::Axis;
use crate::error::{PhextError, Result};

pub const LINE_BREAK: char = '\n';
pub const SCROLL_BREAK: char = '\x17';
pub const SECTION_BREAK: char = '\x18';
pub const CHAPTER_BREAK: char = '\x19';
pub const BOOK_BREAK: char = '\x1A';
pub const VOLUME_BREAK: char = '\x1C';
pub const COLLECTION_BREAK: char = '\x1D';
pub const SERIES_BREAK: char = '\x1E';
pub const SHELF_BREAK: char = '\x1F';
pub const LIBRARY_BREAK: char = '\x01';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterSet {
    breaks: [char; Axis::COUNT],
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl DelimiterSet {
    pub const STANDARD: DelimiterSet = DelimiterSet {
        breaks: [
            LIBRARY_BREAK,
            SHELF_BREAK,
            SERIES_BREAK,
            COLLECTION_BREAK,
            VOLUME_BREAK,
            BOOK_BREAK,
            CHAPTER_BREAK,
            SECTION_BREAK,
            SCROLL_BREAK,
        ],
    };

    /// Builds a custom set, ordered library first.
    ///
    /// Rejects repeated characters and the line break, which is reserved for
    /// in-scroll lines.
    pub fn new(breaks: [char; Axis::COUNT]) -> Result<Self> {
        for (i, c) in breaks.iter().enumerate() {
            if *c == LINE_BREAK {
                return Err(PhextError::InvalidDelimiters(format!(
                    "the {} delimiter cannot be a line break",
                    Axis::ALL[i]
                )));
            }
            if let Some(j) = breaks[..i].iter().position(|other| other == c) {
                return Err(PhextError::InvalidDelimiters(format!(
                    "{:?} is used for both {} and {}",
                    c,
                    Axis::ALL[j],
                    Axis::ALL[i]
                )));
            }
        }
        Ok(Self { breaks })
    }

    pub fn get(&self, axis: Axis) -> char {
        self.breaks[axis.index()]
    }

    /// First reserved character found in `text`, if any.
    pub fn find_reserved(&self, text: &str) -> Option<char> {
        text.chars().find(|c| self.breaks.contains(c))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, char)> + '_ {
        Axis::ALL.iter().copied().zip(self.breaks.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set_is_coarse_to_fine() {
        let set = DelimiterSet::STANDARD;
        assert_eq!(set.get(Axis::Library), LIBRARY_BREAK);
        assert_eq!(set.get(Axis::Scroll), SCROLL_BREAK);
        assert_eq!(set.iter().count(), 9);
    }

    #[test]
    fn test_standard_set_passes_validation() {
        let breaks: Vec<char> = DelimiterSet::STANDARD.iter().map(|(_, c)| c).collect();
        let rebuilt = DelimiterSet::new(breaks.try_into().unwrap()).unwrap();
        assert_eq!(rebuilt, DelimiterSet::STANDARD);
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = DelimiterSet::new(['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'a']).unwrap_err();
        assert!(err.to_string().contains("library and scroll"));
    }

    #[test]
    fn test_rejects_line_break() {
        let result = DelimiterSet::new(['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', '\n']);
        assert!(matches!(result, Err(PhextError::InvalidDelimiters(_))));
    }

    #[test]
    fn test_finds_reserved_characters() {
        let set = DelimiterSet::STANDARD;
        assert_eq!(set.find_reserved("plain\ntext"), None);
        assert_eq!(set.find_reserved("a\x18b"), Some(SECTION_BREAK));
    }
}
