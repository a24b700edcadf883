use super::player::Side;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

/// A `height × width` grid of cells. Row 0 is the top, row `height - 1`
/// is the bottom. A cell is `None` while empty; once occupied it is never
/// cleared or reassigned for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Option<Side>>, // row-major
}

impl Board {
    /// Create a new empty board. Both dimensions must be positive;
    /// callers go through validated configuration.
    pub fn new(height: usize, width: usize) -> Self {
        Board {
            height,
            width,
            cells: vec![None; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Option<Side> {
        self.cells[row * self.width + col]
    }

    /// Find the row where a piece dropped in `col` would land: the lowest
    /// empty cell, scanning from the bottom upward. Returns `None` if the
    /// column is full. Precondition: `col < width`.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        (0..self.height).rev().find(|&row| self.get(row, col).is_none())
    }

    /// Record ownership of a cell. Precondition: the cell is empty, which
    /// holds whenever this is called with a row just returned by
    /// [`landing_row`](Self::landing_row).
    pub fn place(&mut self, row: usize, col: usize, side: Side) {
        debug_assert!(
            self.get(row, col).is_none(),
            "cell ({row}, {col}) already occupied"
        );
        self.cells[row * self.width + col] = Some(side);
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}
