use crate::Cell;

/// How a drawn cell should stand out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellHighlight {
    /// Ordinary revealed cell.
    Revealed,
    /// The mine that ended the game.
    Triggered,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
}

/// Visual side of a session, fed with cells as they change.
pub trait Renderer {
    /// Draws `cell` in its current state.
    fn draw_cell(&mut self, cell: &Cell, highlight: CellHighlight);

    /// Called once when the game ends, after the final board has been drawn.
    fn game_over(&mut self, _result: GameResult) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw_cell(&mut self, cell: &Cell, highlight: CellHighlight) {
        (**self).draw_cell(cell, highlight)
    }

    fn game_over(&mut self, result: GameResult) {
        (**self).game_over(result)
    }
}
