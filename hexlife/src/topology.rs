use crate::grid::Cell;

/// The same six offsets are used for every row, whatever its parity.
pub const DIRECTIONS: [(isize, isize); 6] = [(0, -1), (0, 1), (-1, -1), (-1, 0), (1, -1), (1, 0)];

pub fn neighbours(rows: usize, cols: usize, (row, col): Cell) -> impl Iterator<Item = Cell> {
    DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr).filter(|&r| r < rows)?;
        let c = col.checked_add_signed(dc).filter(|&c| c < cols)?;
        Some((r, c))
    })
}

/// Neighbour lists for every cell of a fixed-size grid, computed once.
#[derive(Clone, Debug)]
pub struct Topology {
    rows: usize,
    cols: usize,
    table: Vec<Vec<Cell>>,
}

impl Topology {
    pub fn new(rows: usize, cols: usize) -> Self {
        let table = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|p| neighbours(rows, cols, p).collect())
            .collect();
        Self { rows, cols, table }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn neighbours(&self, (row, col): Cell) -> &[Cell] {
        &self.table[row * self.cols + col]
    }
}
