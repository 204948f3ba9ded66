/// Column or row on a board.
pub type Coord = u8;

/// Number of cells or mines on a board.
pub type CellCount = u16;

/// `(col, row)`
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Cell count of a `cols` by `rows` board, saturating at [`CellCount::MAX`].
pub const fn mult(cols: Coord, rows: Coord) -> CellCount {
    (cols as CellCount).saturating_mul(rows as CellCount)
}

/// Steps to the eight surrounding cells, row by row.
const AROUND: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Cells touching `(col, row)` on a `cols` by `rows` board, clipped at the edges.
pub fn surrounding(
    (col, row): Coord2,
    (cols, rows): Coord2,
) -> impl Iterator<Item = Coord2> + Clone {
    AROUND.into_iter().filter_map(move |(dc, dr)| {
        let col = col.checked_add_signed(dc).filter(|&c| c < cols)?;
        let row = row.checked_add_signed(dr).filter(|&r| r < rows)?;
        Some((col, row))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = surrounding((0, 0), (10, 10)).collect();
        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn edge_and_interior_neighbor_counts() {
        assert_eq!(surrounding((5, 0), (10, 10)).count(), 5);
        assert_eq!(surrounding((5, 5), (10, 10)).count(), 8);
        assert_eq!(surrounding((9, 9), (10, 10)).count(), 3);
    }

    #[test]
    fn single_row_board_has_two_neighbors_at_most() {
        assert_eq!(surrounding((0, 0), (3, 1)).count(), 1);
        assert_eq!(surrounding((1, 0), (3, 1)).count(), 2);
    }

    #[test]
    fn mult_saturates() {
        assert_eq!(mult(10, 10), 100);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
