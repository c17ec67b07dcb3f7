//! go-board: a Go rule engine.
//!
//! This crate implements stone placement, group and liberty computation,
//! capture resolution, the simple ko rule and turn management on an NxN
//! board. It does not score games or pick strong moves; a uniform-random
//! move source is provided as a placeholder opponent.
//!
//! ## Modules
//!
//! - [`constants`] - Board size limits and game-flow constants
//! - [`board`] - Grid of cells and group/liberty flood fill
//! - [`state`] - The rule engine ([`BoardState`])
//! - [`error`] - Error types
//! - [`vertex`] - GTP coordinate text (`D4`, `pass`)
//! - [`player`] - Move sources and the random player
//! - [`config`] - Game configuration
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use go_board::board::Cell;
//! use go_board::state::BoardState;
//!
//! let mut game = BoardState::new(9).unwrap();
//! game.place_stone(4, 4).unwrap(); // Black
//! game.place_stone(4, 5).unwrap(); // White
//! assert_eq!(game.current_board().get(4, 5), Some(Cell::White));
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod gtp;
pub mod player;
pub mod state;
pub mod vertex;

pub use board::{Cell, Color, Grid, Group, Point};
pub use error::{ConfigError, MoveError, VertexError};
pub use state::{BoardState, Move, MoveOutcome, Snapshot};
