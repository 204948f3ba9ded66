use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates {0:?}")]
    InvalidCoords(Coord2),
    #[error("At least one mine is required")]
    TooFewMines,
    #[error("Too many mines, requested {requested} but only {max} fit")]
    TooManyMines { requested: CellCount, max: CellCount },
    #[error("Board already has mines")]
    AlreadyPopulated,
    #[error("Mine layout covers the first revealed cell {0:?}")]
    UnsafeStart(Coord2),
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Rejected mine count input, the message is meant to be shown to the player.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The input for Bombs must be an integer between {min} and {max}")]
    NotInteger { min: CellCount, max: CellCount },
    #[error("The input for Bombs must be larger than {min}")]
    TooLow { min: CellCount },
    #[error("The input for Bombs must be smaller than {max}")]
    TooHigh { max: CellCount },
}
