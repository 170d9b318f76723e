use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use itertools::Itertools;
use rand::Rng;

pub type Cell = (usize, usize);

/// Fixed-size board of alive/dead cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn dead(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let cells = (0..rows * cols).map(|_| rng.gen_bool(0.5)).collect();
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, (row, col): Cell) -> bool {
        self.cells[self.index((row, col))]
    }

    pub fn set(&mut self, p: Cell, alive: bool) {
        let i = self.index(p);
        self.cells[i] = alive;
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn coords(&self) -> impl Iterator<Item = Cell> + use<> {
        (0..self.rows).cartesian_product(0..self.cols)
    }

    pub fn dead_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.coords().filter(|&p| !self.get(p))
    }

    fn index(&self, (row, col): Cell) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl FromStr for Grid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect_vec();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut grid = Grid::dead(rows, cols);
        for (row, line) in lines.into_iter().enumerate() {
            if line.chars().count() != cols {
                return Err(format!("Row {row} has a different width than row 0"));
            }
            for (col, c) in line.chars().enumerate() {
                match c {
                    '.' => (),
                    'o' => grid.set((row, col), true),
                    _ => return Err(format!("Unexpected character {c}")),
                }
            }
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, line) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if row > 0 {
                f.write_char('\n')?;
            }
            for &alive in line {
                f.write_char(if alive { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}
