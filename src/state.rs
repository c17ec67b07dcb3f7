//! Game state: the grid plus turn, pass and ko bookkeeping.
//!
//! [`BoardState`] is the rule engine. It validates and applies one move at a
//! time and resolves captures, suicide and the simple ko rule. Every rejected
//! move leaves the state exactly as it was.

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Color, Grid, Group, Point};
use crate::constants::{MAX_SIZE, MIN_SIZE, PASSES_TO_END};
use crate::error::{ConfigError, MoveError};

/// A move as supplied by a move source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Place { row: usize, col: usize },
    Pass,
}

/// Outcome of a successful move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A stone was placed; `captured` lists the removed opponent stones.
    Placed { captured: Vec<Point> },
    /// The player passed; `game_over` is true if this pass ended the game.
    Passed { game_over: bool },
}

/// Go rule engine for a single game.
#[derive(Clone, Debug)]
pub struct BoardState {
    grid: Grid,
    current_player: Color,
    passes: u32,
    /// Grid as it was just before the last successful placement.
    previous: Option<Grid>,
    /// Moves and passes played so far.
    move_number: usize,
    last_move: Option<Move>,
    /// Stones removed by Black and by White respectively.
    captures: [usize; 2],
}

impl BoardState {
    /// Start a new game on an empty `size` x `size` board with Black to move.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(ConfigError::invalid_size(size));
        }
        Ok(Self {
            grid: Grid::new(size),
            current_player: Color::Black,
            passes: 0,
            previous: None,
            move_number: 0,
            last_move: None,
            captures: [0; 2],
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Read-only view of the board for rendering and inspection.
    pub fn current_board(&self) -> &Grid {
        &self.grid
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Consecutive passes since the last placement.
    pub fn pass_count(&self) -> u32 {
        self.passes
    }

    /// Grid before the most recent placement, used for the ko check.
    pub fn previous_board(&self) -> Option<&Grid> {
        self.previous.as_ref()
    }

    pub fn move_number(&self) -> usize {
        self.move_number
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Number of opponent stones `color` has captured.
    pub fn captures(&self, color: Color) -> usize {
        self.captures[color_index(color)]
    }

    pub fn is_game_over(&self) -> bool {
        self.passes >= PASSES_TO_END
    }

    /// The group containing the stone at `(row, col)`, if any.
    pub fn group_at(&self, row: usize, col: usize) -> Option<Group> {
        self.grid.group_at((row, col))
    }

    /// Place a stone for the player to move.
    ///
    /// Opponent groups adjacent to the new stone are each flood-filled on
    /// their own and removed when they have no liberties left. The move is
    /// then rejected if the placed stone's group has no liberties (suicide)
    /// or if the resulting board equals the board before the previous
    /// placement (ko). On success the turn passes to the other player and
    /// the captured points are returned.
    pub fn place_stone(&mut self, row: usize, col: usize) -> Result<Vec<Point>, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if !self.grid.contains(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if self.grid.get(row, col) != Some(Cell::Empty) {
            return Err(MoveError::Occupied);
        }

        let pt = (row, col);
        let color = self.current_player;
        let before = self.grid.clone();

        self.grid.set(pt, Cell::from(color));
        let captured = self.resolve_captures(pt, color.opponent());

        let own_liberties = self
            .grid
            .group_at(pt)
            .map_or(0, |group| group.liberty_count());
        if own_liberties == 0 {
            self.grid = before;
            log::debug!("{color} ({row}, {col}) rejected: suicide");
            return Err(MoveError::Suicide);
        }

        if self.previous.as_ref() == Some(&self.grid) {
            self.grid = before;
            log::debug!("{color} ({row}, {col}) rejected: retakes ko");
            return Err(MoveError::KoViolation);
        }

        if !captured.is_empty() {
            log::debug!("{color} ({row}, {col}) captures {} stone(s)", captured.len());
        }
        self.previous = Some(before);
        self.captures[color_index(color)] += captured.len();
        self.passes = 0;
        self.finish_turn(Move::Place { row, col });
        Ok(captured)
    }

    /// Pass the turn. Returns `true` if this pass ended the game.
    pub fn pass_turn(&mut self) -> Result<bool, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        self.passes += 1;
        self.finish_turn(Move::Pass);
        let over = self.is_game_over();
        if over {
            log::info!("game over after {} moves", self.move_number);
        }
        Ok(over)
    }

    /// Apply either kind of move.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        match mv {
            Move::Place { row, col } => self
                .place_stone(row, col)
                .map(|captured| MoveOutcome::Placed { captured }),
            Move::Pass => self
                .pass_turn()
                .map(|game_over| MoveOutcome::Passed { game_over }),
        }
    }

    /// Check whether [`place_stone`](Self::place_stone) would accept the move,
    /// without changing this state.
    pub fn check_move(&self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if !self.grid.contains(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if self.grid.get(row, col) != Some(Cell::Empty) {
            return Err(MoveError::Occupied);
        }
        let mut trial = self.clone();
        trial.place_stone(row, col).map(|_| ())
    }

    pub fn is_legal(&self, row: usize, col: usize) -> bool {
        self.check_move(row, col).is_ok()
    }

    /// All legal placements for the player to move, row-major.
    pub fn legal_moves(&self) -> Vec<Point> {
        let size = self.size();
        (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .filter(|&(row, col)| self.is_legal(row, col))
            .collect()
    }

    /// Remove every `victim`-colored group touching `pt` that has no liberties.
    fn resolve_captures(&mut self, pt: Point, victim: Color) -> Vec<Point> {
        let victim_cell = Cell::from(victim);
        let adjacent: Vec<Point> = self
            .grid
            .neighbors(pt)
            .filter(|&(r, c)| self.grid.get(r, c) == Some(victim_cell))
            .collect();

        let mut captured = Vec::new();
        for n in adjacent {
            // Already removed as part of a group reached from another neighbor.
            if self.grid.get(n.0, n.1) != Some(victim_cell) {
                continue;
            }
            let Some(group) = self.grid.group_at(n) else {
                continue;
            };
            if group.is_dead() {
                for &stone in &group.stones {
                    self.grid.set(stone, Cell::Empty);
                }
                captured.extend(group.stones);
            }
        }
        captured
    }

    fn finish_turn(&mut self, mv: Move) {
        self.current_player = self.current_player.opponent();
        self.move_number += 1;
        self.last_move = Some(mv);
    }

    /// Capture everything needed to resume this game exactly.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.size(),
            board: self.grid.cells().to_vec(),
            current_player: self.current_player,
            passes: self.passes,
            previous: self.previous.as_ref().map(|g| g.cells().to_vec()),
            move_number: self.move_number,
            last_move: self.last_move,
            captures: self.captures,
        }
    }

    /// Rebuild a state from a [`Snapshot`], validating its dimensions.
    pub fn restore(snapshot: Snapshot) -> Result<Self, ConfigError> {
        let Snapshot {
            size,
            board,
            current_player,
            passes,
            previous,
            move_number,
            last_move,
            captures,
        } = snapshot;

        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(ConfigError::invalid_size(size));
        }
        let grid = Grid::from_cells(size, board).ok_or_else(|| {
            ConfigError::InvalidConfiguration(format!("board does not have {} cells", size * size))
        })?;
        let previous = previous
            .map(|cells| {
                Grid::from_cells(size, cells).ok_or_else(|| {
                    ConfigError::InvalidConfiguration(format!(
                        "previous board does not have {} cells",
                        size * size
                    ))
                })
            })
            .transpose()?;
        if passes > PASSES_TO_END {
            return Err(ConfigError::InvalidConfiguration(format!(
                "pass count {passes} exceeds {PASSES_TO_END}"
            )));
        }

        Ok(Self {
            grid,
            current_player,
            passes,
            previous,
            move_number,
            last_move,
            captures,
        })
    }

    /// Serialize the game to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot())
    }

    /// Load a game from JSON produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(Self::restore(snapshot)?)
    }
}

fn color_index(color: Color) -> usize {
    match color {
        Color::Black => 0,
        Color::White => 1,
    }
}

/// Serializable form of a [`BoardState`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: usize,
    /// Row-major cells.
    pub board: Vec<Cell>,
    pub current_player: Color,
    pub passes: u32,
    pub previous: Option<Vec<Cell>>,
    pub move_number: usize,
    pub last_move: Option<Move>,
    pub captures: [usize; 2],
}
