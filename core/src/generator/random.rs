use rand::{SeedableRng, rngs::SmallRng};

use super::*;

/// Uniformly random layout, only the first revealed cell is guaranteed to be safe.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn populate(&mut self, board: &mut Board, mines: CellCount, safe: Coord2) -> Result<()> {
        log::debug!(
            "Generating {} mines with seed {} around {:?}",
            mines,
            self.seed,
            safe
        );
        board.place_mines(mines, safe, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine_coords(board: &Board) -> alloc::vec::Vec<Coord2> {
        board
            .cells()
            .filter(|cell| cell.is_mine())
            .map(Cell::coords)
            .collect()
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = Board::new((10, 10));
        let mut b = Board::new((10, 10));

        RandomMineGenerator::new(42).populate(&mut a, 20, (0, 0)).unwrap();
        RandomMineGenerator::new(42).populate(&mut b, 20, (0, 0)).unwrap();

        assert_eq!(mine_coords(&a), mine_coords(&b));
    }

    #[test]
    fn first_cell_is_never_a_mine() {
        for seed in 0..64 {
            let mut board = Board::new((4, 4));
            let safe = ((seed % 4) as Coord, (seed / 16) as Coord);

            RandomMineGenerator::new(seed)
                .populate(&mut board, 15, safe)
                .unwrap();

            assert_eq!(board.mine_count(), 15);
            assert!(!board.cell_at(safe).is_mine());
            let reveal = board.reveal(safe).unwrap();
            assert_eq!(reveal.outcome, RevealOutcome::Continue);
        }
    }
}
