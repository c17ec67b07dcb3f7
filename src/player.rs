//! Move sources: anything that proposes moves for a [`BoardState`].
//!
//! The rule engine never chooses moves itself. A [`MoveSource`] proposes a
//! move, [`drive`] submits it and retries on rejection, and [`self_play`]
//! repeats that until the game ends.

use crate::board::{Cell, Color, Grid, Point};
use crate::constants::MAX_MOVE_ATTEMPTS;
use crate::error::MoveError;
use crate::state::{BoardState, Move, MoveOutcome};

/// Something that proposes the next move for the player to move.
pub trait MoveSource {
    fn next_move(&mut self, state: &BoardState) -> Move;

    /// Display name.
    fn name(&self) -> &str;
}

/// Placeholder opponent: picks uniformly among legal moves that do not fill
/// one of its own eyes, and passes when there are none.
pub struct RandomPlayer {
    rng: fastrand::Rng,
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Deterministic player for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl MoveSource for RandomPlayer {
    fn next_move(&mut self, state: &BoardState) -> Move {
        let grid = state.current_board();
        let me = state.current_player();
        let mut candidates: Vec<Point> = (0..grid.size())
            .flat_map(|row| (0..grid.size()).map(move |col| (row, col)))
            .filter(|&(row, col)| grid.get(row, col) == Some(Cell::Empty))
            .filter(|&pt| !is_eyeish(grid, pt, me))
            .collect();

        // Shuffle and try moves until we find a legal one.
        self.rng.shuffle(&mut candidates);
        candidates
            .into_iter()
            .find(|&(row, col)| state.is_legal(row, col))
            .map_or(Move::Pass, |(row, col)| Move::Place { row, col })
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// True if every on-board neighbor of `pt` is a stone of `color`.
///
/// This also accepts false eyes, which is good enough to keep random play
/// from filling its own territory forever.
pub fn is_eyeish(grid: &Grid, pt: Point, color: Color) -> bool {
    let own = Cell::from(color);
    grid.neighbors(pt)
        .all(|(row, col)| grid.get(row, col) == Some(own))
}

/// Ask `source` for a move and apply it, retrying rejected proposals.
///
/// After `max_attempts` rejections in a row the player is made to pass.
/// Fails only if the game is already over.
pub fn drive(
    state: &mut BoardState,
    source: &mut dyn MoveSource,
    max_attempts: usize,
) -> Result<(Move, MoveOutcome), MoveError> {
    if state.is_game_over() {
        return Err(MoveError::GameOver);
    }
    for _ in 0..max_attempts {
        let mv = source.next_move(state);
        match state.play(mv) {
            Ok(outcome) => return Ok((mv, outcome)),
            Err(MoveError::GameOver) => return Err(MoveError::GameOver),
            Err(e) => log::debug!("{} proposed {mv:?}: {e}", source.name()),
        }
    }
    log::debug!(
        "{} made {max_attempts} illegal proposals, passing",
        source.name()
    );
    let outcome = state.play(Move::Pass)?;
    Ok((Move::Pass, outcome))
}

/// Play moves from `source` for both sides until the game ends or
/// `max_moves` moves have been played. Returns the number of moves played.
pub fn self_play(
    state: &mut BoardState,
    source: &mut dyn MoveSource,
    max_moves: usize,
) -> Result<usize, MoveError> {
    let mut played = 0;
    while !state.is_game_over() && played < max_moves {
        drive(state, source, MAX_MOVE_ATTEMPTS)?;
        played += 1;
    }
    Ok(played)
}
