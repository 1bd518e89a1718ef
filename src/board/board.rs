//! Board structure with per-cell animation state

use super::{CellAnim, Mark, Pos, GRID_SIZE};

/// One cell: its mark plus the animation that grows it in
#[derive(Debug, Clone, Copy, Default)]
pub struct CellState {
    pub mark: Mark,
    pub anim: CellAnim,
}

/// The 3x3 game board. Fixed-size, no heap allocation.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [[CellState; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[CellState::default(); GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.row as usize][pos.col as usize].mark
    }

    /// Get the full cell state at position
    #[inline]
    pub fn cell(&self, pos: Pos) -> &CellState {
        &self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Check if the cell's placement animation is still running
    #[inline]
    pub fn is_animating(&self, pos: Pos) -> bool {
        self.cell(pos).anim.active
    }

    /// Place a mark and start its grow-in animation.
    ///
    /// Validity checks live in the session; this overwrites unconditionally.
    #[inline]
    pub fn place_mark(&mut self, pos: Pos, mark: Mark) {
        let cell = &mut self.cells[pos.row as usize][pos.col as usize];
        cell.mark = mark;
        cell.anim = CellAnim::started();
    }

    /// True iff no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|cell| cell.mark != Mark::Empty)
    }

    /// True iff any cell animation is still running
    pub fn any_animating(&self) -> bool {
        self.cells.iter().flatten().any(|cell| cell.anim.active)
    }

    /// Advance every active animation by one tick.
    ///
    /// Returns true if any cell changed.
    pub fn step_animations(&mut self) -> bool {
        let mut advanced = false;
        for cell in self.cells.iter_mut().flatten() {
            advanced |= cell.anim.step();
        }
        advanced
    }

    /// Clear every cell to Empty with an inactive zero-progress animation
    pub fn clear(&mut self) {
        self.cells = [[CellState::default(); GRID_SIZE]; GRID_SIZE];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
