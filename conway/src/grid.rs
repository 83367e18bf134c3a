// grid.rs - Grid types for Conway's Game of Life

use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, Result};

/// A single cell. Stored as one byte so a generation is a single flat allocation.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell as u8
    }
}

impl TryFrom<u8> for Cell {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, u8> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            other => Err(other),
        }
    }
}

/// Column `x`, row `y`, both counted from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Moves by a signed offset, or `None` when that would leave the first quadrant.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Coord> {
        Some(Coord {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

/// One generation: a rectangular block of cells in row-major order.
///
/// Width and height are fixed when the grid is created; stepping always
/// produces a fresh grid of the same shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-dead grid.
    ///
    /// # Panics
    ///
    /// If `width * height` overflows `usize`; use [`Grid::try_new`] for untrusted sizes.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// An all-dead grid, or `GridError::TooLarge` when the cell count overflows.
    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        })
    }

    /// The grid with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assembles a grid from rows that are already known to be `width` long.
    pub(crate) fn from_cell_rows(width: usize, rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            debug_assert_eq!(row.len(), width);
            cells.extend(row);
        }
        Self { width, height, cells }
    }

    /// Builds a grid from nested 0/1 rows, checking shape and values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged { row: y, expected: width, found: row.len() });
            }
            for (x, &value) in row.iter().enumerate() {
                let cell = Cell::try_from(value)
                    .map_err(|value| GridError::InvalidCell { value, x, y })?;
                cells.push(cell);
            }
        }

        Ok(Self { width, height: rows.len(), cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// The cell at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if self.contains(coord) {
            Some(self.cells[coord.y * self.width + coord.x])
        } else {
            None
        }
    }

    /// Writes a cell. Coordinates outside the grid are ignored.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        if self.contains(coord) {
            self.cells[coord.y * self.width + coord.x] = cell;
        }
    }

    pub fn toggle(&mut self, coord: Coord) {
        if let Some(cell) = self.get(coord) {
            self.set(coord, cell.toggled());
        }
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&cell| u8::from(cell)).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Reads one row per non-blank line: `#`, `o`, `O`, `*` or `1` alive; `.`, `b` or `0` dead.
    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();

        for (line_no, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for (column, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '#' | 'o' | 'O' | '*' | '1' => Cell::Alive,
                    '.' | 'b' | '0' => Cell::Dead,
                    found => {
                        return Err(GridError::Parse { line: line_no + 1, column: column + 1, found });
                    }
                };
                row.push(cell);
            }
            rows.push(row);
        }

        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows.iter().map(Vec::len).enumerate().find(|&(_, len)| len != width) {
            return Err(GridError::Ragged { row, expected: width, found });
        }
        Ok(Grid::from_cell_rows(width, rows))
    }
}
