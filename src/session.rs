//! Game session: board, turn tracking, hover state, and the fixed tick
//!
//! [`GameSession`] is the single owner of all mutable game state. The host
//! shell feeds it pointer moves, clicks, and animation ticks, and each
//! mutation raises a dirty flag the shell reads to decide whether a repaint
//! is worth requesting. The session never touches the windowing layer.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::board::{Board, Mark, Pos};
use crate::board::anim::TICK_INTERVAL;
use crate::rules;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Win(Mark),
    Draw,
}

/// Result of a placement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Invalid target; board and turn untouched
    Ignored,
    /// Mark placed, game continues, turn flipped
    Placed,
    /// Mark placed and the game is over
    Ended(GameEnd),
}

/// All mutable game state, owned by the application shell
pub struct GameSession {
    pub board: Board,
    pub current_turn: Mark,
    pub game_over: Option<GameEnd>,
    /// Winning triple for the board highlight, set on a win
    pub winning_line: Option<[Pos; 3]>,
    /// Hovered cell, if the pointer is over the grid and the game is live
    pub hover: Option<Pos>,
    dirty: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Mark::X,
            game_over: None,
            winning_line: None,
            hover: None,
            dirty: true,
        }
    }

    /// Start a fresh game. X always moves first.
    pub fn reset(&mut self) {
        info!("new game");
        self.board.clear();
        self.current_turn = Mark::X;
        self.game_over = None;
        self.winning_line = None;
        self.hover = None;
        self.dirty = true;
    }

    /// Attempt to place the current player's mark.
    ///
    /// Invalid targets (occupied cell, cell still animating, game already
    /// over) are silently ignored: clicking them is normal UI noise, not an
    /// error. On a terminal placement the turn is left as-is; `reset` will
    /// reassign it.
    pub fn place_mark(&mut self, pos: Pos) -> MoveOutcome {
        if self.game_over.is_some()
            || !self.board.is_empty(pos)
            || self.board.is_animating(pos)
        {
            return MoveOutcome::Ignored;
        }

        let mark = self.current_turn;
        self.board.place_mark(pos, mark);
        self.dirty = true;
        debug!(%mark, col = pos.col, row = pos.row, "placed");

        if let Some(line) = rules::winning_line(&self.board, mark) {
            self.winning_line = Some(line);
            self.game_over = Some(GameEnd::Win(mark));
            info!(winner = %mark, "game over");
            return MoveOutcome::Ended(GameEnd::Win(mark));
        }
        if rules::is_draw(&self.board) {
            self.game_over = Some(GameEnd::Draw);
            info!("game over: draw");
            return MoveOutcome::Ended(GameEnd::Draw);
        }

        self.current_turn = mark.opponent();
        MoveOutcome::Placed
    }

    /// Handle a primary click at the given cell (None = outside the grid).
    ///
    /// A click while the game is over is consumed as a restart request,
    /// wherever it lands.
    pub fn click(&mut self, pos: Option<Pos>) -> MoveOutcome {
        if self.game_over.is_some() {
            self.reset();
            return MoveOutcome::Ignored;
        }
        match pos {
            Some(pos) => self.place_mark(pos),
            None => MoveOutcome::Ignored,
        }
    }

    /// Handle pointer movement. `pos` is None when the pointer left the grid.
    ///
    /// Hover only updates on an actual change, and never while the game is
    /// over, so idle pointer traffic does not trigger redraws.
    pub fn pointer_moved(&mut self, pos: Option<Pos>) {
        let next = if self.game_over.is_some() { None } else { pos };
        if self.hover != next {
            self.hover = next;
            self.dirty = true;
        }
    }

    /// Advance all cell animations by one fixed tick.
    ///
    /// Returns the dirty flag (and clears it): true if any animation moved
    /// or any state changed since the last paint.
    pub fn tick(&mut self) -> bool {
        if self.board.step_animations() {
            self.dirty = true;
        }
        std::mem::take(&mut self.dirty)
    }

    /// True while any placement animation is still running
    pub fn animating(&self) -> bool {
        self.board.any_animating()
    }

    /// Peek at the dirty flag without clearing it
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-step tick accumulator.
///
/// Converts wall-clock time into whole [`TICK_INTERVAL`] steps so animation
/// speed does not depend on how often the host repaints.
pub struct TickClock {
    last: Instant,
    acc: Duration,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            acc: Duration::ZERO,
        }
    }

    /// Number of whole ticks elapsed since the previous call
    pub fn ticks(&mut self) -> u32 {
        let now = Instant::now();
        self.acc += now - self.last;
        self.last = now;

        let mut ticks = 0;
        while self.acc >= TICK_INTERVAL {
            self.acc -= TICK_INTERVAL;
            ticks += 1;
        }
        ticks
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}
