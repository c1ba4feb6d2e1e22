//! Static map markers
//!
//! Markers are labeled by their position in the rendered list. Only seven
//! labels exist; the renderer shows at most four places, checked at
//! compile time below.

use crate::constants::map::MARKER_COLOR;
use crate::constants::render::{MAX_MARKERS, MAX_RENDERED};
use crate::coord::Coordinates;
use crate::error::Error;
use std::fmt;

const _: () = assert!(MAX_RENDERED <= MAX_MARKERS);

/// Single-letter marker label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerLabel {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl MarkerLabel {
    /// All labels in list order
    pub const ALL: [MarkerLabel; MAX_MARKERS] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    /// Label letter
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
        }
    }
}

/// Label for a zero-based list position; positions past G are rejected
impl TryFrom<usize> for MarkerLabel {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::MarkerLabel(index))
    }
}

impl fmt::Display for MarkerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// `&markers=...` query parameter for one place
pub fn marker_param(label: MarkerLabel, location: Coordinates) -> String {
    format!(
        "&markers=color:{}|label:{}|{}",
        MARKER_COLOR, label, location
    )
}
