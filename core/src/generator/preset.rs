use alloc::vec::Vec;

use super::*;

/// Fixed layout, handy for reproducing a known board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetMineGenerator {
    mines: Vec<Coord2>,
}

impl PresetMineGenerator {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }
}

impl MineGenerator for PresetMineGenerator {
    /// The requested count is ignored in favor of the preset, a layout covering `safe` is
    /// refused.
    fn populate(&mut self, board: &mut Board, mines: CellCount, safe: Coord2) -> Result<()> {
        if board.is_populated() {
            return Err(GameError::AlreadyPopulated);
        }
        if self.mines.contains(&safe) {
            return Err(GameError::UnsafeStart(safe));
        }

        let preset = Board::from_mine_coords(board.size(), &self.mines)?;
        if preset.mine_count() != mines {
            log::warn!(
                "Preset layout has {} mines, {} were requested",
                preset.mine_count(),
                mines
            );
        }
        *board = preset;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_the_preset() {
        let mut board = Board::new((3, 3));

        PresetMineGenerator::new(&[(2, 2), (0, 2)])
            .populate(&mut board, 2, (0, 0))
            .unwrap();

        assert_eq!(board.mine_count(), 2);
        assert!(board.cell_at((2, 2)).is_mine());
        assert_eq!(board.cell_at((1, 2)).value(), CellValue::Count(2));
    }

    #[test]
    fn refuses_mine_under_first_click() {
        let mut board = Board::new((3, 3));

        let result = PresetMineGenerator::new(&[(1, 1)]).populate(&mut board, 1, (1, 1));

        assert_eq!(result, Err(GameError::UnsafeStart((1, 1))));
        assert!(!board.is_populated());
    }

    #[test]
    fn refuses_out_of_bounds_preset() {
        let mut board = Board::new((3, 3));

        let result = PresetMineGenerator::new(&[(5, 0)]).populate(&mut board, 1, (0, 0));

        assert_eq!(result, Err(GameError::InvalidCoords((5, 0))));
    }
}
