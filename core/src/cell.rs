use serde::{Deserialize, Serialize};

use crate::Coord2;

/// What a cell holds, independent of whether the player has seen it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    /// Number of adjacent mines, always in `1..=8`.
    Count(u8),
    Mine,
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Adjacent mine count, `0` for empty cells and `None` for mines.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Empty => Some(0),
            Self::Count(count) => Some(count),
            Self::Mine => None,
        }
    }

    /// Bumps the count of a safe cell next to a newly placed mine.
    pub(crate) fn add_adjacent_mine(&mut self) {
        *self = match *self {
            Self::Empty => Self::Count(1),
            Self::Count(count) => Self::Count(count + 1),
            Self::Mine => Self::Mine,
        };
    }

    /// Text shown on a revealed cell.
    pub const fn label(self) -> &'static str {
        const DIGITS: [&str; 9] = ["", "1", "2", "3", "4", "5", "6", "7", "8"];
        match self {
            Self::Empty => "",
            Self::Count(count) if (count as usize) < DIGITS.len() => DIGITS[count as usize],
            Self::Count(_) => "?",
            Self::Mine => "B",
        }
    }
}

/// A single square of the board.
///
/// The position is fixed at creation and `revealed` only ever goes from `false` to `true`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    value: CellValue,
    revealed: bool,
}

impl Cell {
    pub(crate) const fn new(coords: Coord2) -> Self {
        Self {
            coords,
            value: CellValue::Empty,
            revealed: false,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn value(&self) -> CellValue {
        self.value
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_mine(&self) -> bool {
        self.value.is_mine()
    }

    pub(crate) fn value_mut(&mut self) -> &mut CellValue {
        &mut self.value
    }

    /// Returns whether the cell was hidden before this call.
    pub(crate) fn mark_revealed(&mut self) -> bool {
        !core::mem::replace(&mut self.revealed, true)
    }
}
