use alloc::{collections::VecDeque, vec::Vec};
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Continue,
    HitMine,
}

/// Result of a single [`Board::reveal`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub outcome: RevealOutcome,
    /// Cells that went from hidden to revealed during the call, in reveal order.
    pub cells: Vec<Cell>,
}

impl Reveal {
    const fn unchanged() -> Self {
        Self {
            outcome: RevealOutcome::Continue,
            cells: Vec::new(),
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Rectangular grid of cells.
///
/// A board starts without mines and is populated once, normally right before the first reveal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_safe: CellCount,
}

impl Board {
    pub fn new((cols, rows): Coord2) -> Self {
        let size: Coord2 = (cols.max(1), rows.max(1));
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            Cell::new((x as Coord, y as Coord))
        });
        Self {
            cells,
            mine_count: 0,
            revealed_safe: 0,
        }
    }

    /// Builds a populated board with mines at exactly `mine_coords`.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size);
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board.set_mine(coords);
        }
        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        let (cols, rows) = self.cells.dim();
        (cols as Coord, rows as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (cols, rows) = self.size();
        mult(cols, rows)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn is_populated(&self) -> bool {
        self.mine_count > 0
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords(coords))
        }
    }

    /// Panics when `coords` is out of bounds, check with [`Board::validate_coords`] first.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Coordinates of the 3 to 8 cells around `coords`, the board is not borrowed.
    pub fn neighbors_of(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + Clone + use<> {
        surrounding(coords, self.size())
    }

    /// Safe cells the player still has to uncover, zero means the board is cleared.
    pub fn remaining_hidden_non_mine_cells(&self) -> CellCount {
        self.safe_cell_count() - self.revealed_safe
    }

    pub fn hidden_mine_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_mine() && !cell.is_revealed())
            .count() as CellCount
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_revealed()).count() as CellCount
    }

    /// Scatters `count` mines over every cell but `safe` by drawing random coordinates until
    /// enough distinct free cells were hit.
    pub fn place_mines<R: Rng + ?Sized>(
        &mut self,
        count: CellCount,
        safe: Coord2,
        rng: &mut R,
    ) -> Result<()> {
        let safe = self.validate_coords(safe)?;
        if self.is_populated() {
            return Err(GameError::AlreadyPopulated);
        }
        if count == 0 {
            return Err(GameError::TooFewMines);
        }
        let max = self.total_cells() - 1;
        if count > max {
            return Err(GameError::TooManyMines {
                requested: count,
                max,
            });
        }

        let (cols, rows) = self.size();
        let mut placed = 0;
        let mut draws: u32 = 0;
        while placed < count {
            let coords = (rng.random_range(0..cols), rng.random_range(0..rows));
            draws = draws.saturating_add(1);
            if coords == safe {
                continue;
            }
            if self.set_mine(coords) {
                placed += 1;
            }
        }

        log::debug!(
            "Placed {} mines in {} draws, keeping {:?} safe",
            count,
            draws,
            safe
        );
        Ok(())
    }

    /// Turns the cell into a mine and bumps the counts around it, `false` if it already was one.
    fn set_mine(&mut self, coords: Coord2) -> bool {
        let value = self.cells[coords.to_nd_index()].value_mut();
        if value.is_mine() {
            return false;
        }
        *value = CellValue::Mine;
        self.mine_count += 1;

        for pos in self.neighbors_of(coords) {
            self.cells[pos.to_nd_index()].value_mut().add_adjacent_mine();
        }
        true
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<Reveal> {
        let coords = self.validate_coords(coords)?;

        let mut cells = Vec::new();
        if !self.reveal_cell(coords, &mut cells) {
            return Ok(Reveal::unchanged());
        }

        let outcome = match self.cell_at(coords).value() {
            CellValue::Mine => RevealOutcome::HitMine,
            CellValue::Count(_) => RevealOutcome::Continue,
            CellValue::Empty => {
                self.flood_from(coords, &mut cells);
                RevealOutcome::Continue
            }
        };

        Ok(Reveal { outcome, cells })
    }

    /// Reveals every hidden cell, mines included, and returns them.
    pub fn reveal_all(&mut self) -> Vec<Cell> {
        let mut revealed = Vec::new();
        let (cols, rows) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                self.reveal_cell((col, row), &mut revealed);
            }
        }
        revealed
    }

    fn reveal_cell(&mut self, coords: Coord2, revealed: &mut Vec<Cell>) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if !cell.mark_revealed() {
            return false;
        }
        if !cell.is_mine() {
            self.revealed_safe += 1;
        }
        revealed.push(*cell);
        true
    }

    /// Opens the region of empty cells around `start` plus its numbered border.
    ///
    /// The revealed flag doubles as the visited set, so each cell enters `revealed` once.
    fn flood_from(&mut self, start: Coord2, revealed: &mut Vec<Cell>) {
        let mut to_visit: VecDeque<Coord2> = self.neighbors_of(start).collect();
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            start,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            if !self.reveal_cell(visit_coords, revealed) {
                continue;
            }

            let value = self.cell_at(visit_coords).value();
            log::trace!("Flood revealed {:?} ({:?})", visit_coords, value);

            if value.is_empty() {
                let cells = &self.cells;
                to_visit.extend(
                    self.neighbors_of(visit_coords)
                        .filter(|pos| !cells[pos.to_nd_index()].is_revealed()),
                );
            }
        }
    }
}
