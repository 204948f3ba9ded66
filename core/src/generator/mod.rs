use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Strategy used to put mines on a fresh board right before its first reveal.
pub trait MineGenerator {
    /// Places `mines` mines on `board`, never on `safe`.
    fn populate(&mut self, board: &mut Board, mines: CellCount, safe: Coord2) -> Result<()>;
}

impl<G: MineGenerator + ?Sized> MineGenerator for &mut G {
    fn populate(&mut self, board: &mut Board, mines: CellCount, safe: Coord2) -> Result<()> {
        (**self).populate(board, mines, safe)
    }
}
