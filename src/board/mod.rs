//! Board representation for tic-tac-toe

pub mod anim;
pub mod board;

// Re-exports
pub use anim::CellAnim;
pub use board::{Board, CellState};

/// Grid size (3x3)
pub const GRID_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = GRID_SIZE * GRID_SIZE; // 9

/// Mark occupying a cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// Get the opposing player's mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// True for X and O, false for Empty
    #[inline]
    pub fn is_player(self) -> bool {
        self != Mark::Empty
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
            Mark::Empty => write!(f, "."),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: u8,
    pub row: u8,
}

impl Pos {
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!(col < GRID_SIZE as u8 && row < GRID_SIZE as u8);
        Self { col, row }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    #[inline]
    pub fn is_valid(col: i32, row: i32) -> bool {
        col >= 0 && col < GRID_SIZE as i32 && row >= 0 && row < GRID_SIZE as i32
    }
}
