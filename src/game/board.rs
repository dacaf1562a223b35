use super::player::Player;

/// Number of columns on the standard board.
pub const WIDTH: usize = 7;
/// Number of rows on the standard board.
pub const HEIGHT: usize = 6;
/// Length of a winning run, and so the smallest usable board dimension.
pub const RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Check whether this cell holds a tile of `player`
    pub fn is_player(self, player: Player) -> bool {
        self == player.to_cell()
    }
}

/// Errors raised by board construction and tile placement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least {min}x{min}, got {width}x{height}", min = RUN_LENGTH)]
    InvalidDimensions { width: usize, height: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },
}

/// A fixed-size grid of cells. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    // Row-major: index = row * width + column
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width < RUN_LENGTH || height < RUN_LENGTH {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// Create an empty board with the standard 7x6 layout
    pub fn standard() -> Self {
        Board {
            width: WIDTH,
            height: HEIGHT,
            cells: vec![Cell::Empty; WIDTH * HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position, `None` if out of range
    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        if column < self.width && row < self.height {
            Some(self.cells[row * self.width + column])
        } else {
            None
        }
    }

    /// Unchecked lookup for callers that already bounded their coordinates.
    pub(crate) fn cell(&self, column: usize, row: usize) -> Cell {
        self.cells[row * self.width + column]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= self.width {
            return true;
        }
        self.cell(column, 0) != Cell::Empty
    }

    /// Drop a tile in a column, returns the row where it landed
    pub fn drop_tile(&mut self, column: usize, player: Player) -> Result<usize, BoardError> {
        if column >= self.width {
            return Err(BoardError::InvalidColumn {
                column,
                width: self.width,
            });
        }

        // Starting from the bottom, find the first empty row
        let row = (0..self.height)
            .rev()
            .find(|&row| self.cell(column, row) == Cell::Empty)
            .ok_or(BoardError::ColumnFull(column))?;

        self.cells[row * self.width + column] = player.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Columns that can still take a tile, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Number of tiles placed so far
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// Iterate over rows top to bottom, each as a slice of cells left to right
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
