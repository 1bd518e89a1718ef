//! Desktop tic-tac-toe with animated mark placement
//!
//! Two human players alternate turns on a fixed 3x3 grid in a single
//! window. Marks grow in over ten fixed 16 ms ticks, win and draw detection
//! run after every placement, and a click after game end starts a new game.
//!
//! # Architecture
//!
//! - [`board`]: grid, marks, and per-cell animation state
//! - [`rules`]: the 8 winning lines, win/draw detection
//! - [`session`]: the game state machine driven by ticks and input events
//! - [`ui`]: egui/eframe shell, rendering, and pixel/cell geometry
//!
//! The session is host-independent: the shell feeds it `tick`,
//! `pointer_moved`, and `click` events and reads back a dirty flag to decide
//! when a repaint is worth requesting.
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameSession, Mark, MoveOutcome, Pos};
//!
//! let mut session = GameSession::new();
//! assert_eq!(session.current_turn, Mark::X);
//!
//! let outcome = session.place_mark(Pos::new(0, 0));
//! assert_eq!(outcome, MoveOutcome::Placed);
//! assert_eq!(session.current_turn, Mark::O);
//! ```

pub mod board;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, CellAnim, CellState, Mark, Pos, GRID_SIZE};
pub use session::{GameEnd, GameSession, MoveOutcome, TickClock};
