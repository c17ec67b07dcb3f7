//! Constants for board dimensions, game flow, and rendering.
//!
//! The board size is chosen at runtime when a [`BoardState`] is created;
//! these constants only bound what sizes are accepted.
//!
//! [`BoardState`]: crate::state::BoardState

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest accepted board size. A 1x1 board has no legal move at all.
pub const MIN_SIZE: usize = 2;

/// Largest accepted board size (A-Z without I gives 25 vertex columns).
pub const MAX_SIZE: usize = 25;

/// Board size used when none is given.
pub const DEFAULT_SIZE: usize = 9;

// =============================================================================
// Game Flow
// =============================================================================

/// Consecutive passes that end the game.
pub const PASSES_TO_END: u32 = 2;

/// Default cap on the number of moves in a self-play game
/// (3 times board area to allow for captures and replays).
pub const MAX_GAME_LEN_FACTOR: usize = 3;

/// Rejections a move source may produce in a row before it is made to pass.
pub const MAX_MOVE_ATTEMPTS: usize = 64;

// =============================================================================
// Cell Glyphs (used by `Display` and vertex output)
// =============================================================================

/// Black stone.
pub const GLYPH_BLACK: char = 'X';

/// White stone.
pub const GLYPH_WHITE: char = 'O';

/// Empty point.
pub const GLYPH_EMPTY: char = '.';

/// Column letters used by GTP vertices. `I` is skipped to avoid confusion with `J`.
pub const COLUMN_LETTERS: &[u8; MAX_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";
