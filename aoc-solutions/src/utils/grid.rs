//! Rectangular row-major grid with Moore-neighbourhood helpers.

use anyhow::anyhow;

/// Offsets of the 8 cells surrounding a cell.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Builds a grid from text, one row per line, mapping each character with `cell`.
    ///
    /// Rows shorter than the widest one are padded with `fill`. Errors from
    /// `cell` are reported with their 1-based row and column.
    pub fn parse_with<F>(input: &str, fill: T, mut cell: F) -> anyhow::Result<Self>
    where
        F: FnMut(char) -> Option<T>,
    {
        let lines: Vec<&str> = input
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        let rows = lines.len();
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut cells = Vec::with_capacity(rows * cols);
        for (r, line) in lines.iter().enumerate() {
            let before = cells.len();
            for (c, ch) in line.chars().enumerate() {
                let value = cell(ch).ok_or_else(|| {
                    anyhow!("unexpected character {:?} at row {}, column {}", ch, r + 1, c + 1)
                })?;
                cells.push(value);
            }
            cells.resize(before + cols, fill.clone());
        }

        Ok(Self { rows, cols, cells })
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        (row < self.rows && col < self.cols).then(|| &self.cells[row * self.cols + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = value;
        }
    }

    /// All `(row, col)` positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<T> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| (i / cols, i % cols))
    }

    /// In-bounds Moore neighbours of `(row, col)`.
    pub fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = &T> + '_ {
        MOORE_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.get(r, c)
        })
    }

    /// How many Moore neighbours of `(row, col)` satisfy `pred`.
    pub fn count_neighbours(&self, row: usize, col: usize, pred: impl Fn(&T) -> bool) -> usize {
        self.neighbours(row, col).filter(|&t| pred(t)).count()
    }
}
