//! Go Text Protocol (GTP) front end.
//!
//! GTP is a text-based protocol for communicating with Go-playing programs.
//! This module drives a [`BoardState`] from GTP version 2 commands, so the
//! rule engine can be used with graphical Go interfaces like Sabaki or GoGui.
//! Generated moves come from the random move source.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return GTP protocol version (2)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `boardsize <size>` - Set board size and start a new game
//! - `clear_board` - Reset the board to empty
//! - `komi <value>` - Accepted and ignored (no scoring)
//! - `play <color> <vertex>` - Play a move
//! - `genmove <color>` - Generate and play a move for the given color
//! - `showboard` - Print the board

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::board::Color;
use crate::config::GameConfig;
use crate::constants::MAX_MOVE_ATTEMPTS;
use crate::error::ConfigError;
use crate::player::{RandomPlayer, drive};
use crate::state::BoardState;
use crate::vertex::{move_string, parse_vertex};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    state: BoardState,
    player: RandomPlayer,
}

impl GtpEngine {
    /// Create an engine for the configured board size and seed.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let state = config.new_game()?;
        let player = config
            .seed
            .map_or_else(RandomPlayer::new, RandomPlayer::with_seed);
        Ok(Self { state, player })
    }

    /// The game being played.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read GTP command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            if !success {
                log::debug!("{command}: {message}");
            }
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n")
                .context("failed to write GTP response")?;
            output.flush().context("failed to flush GTP response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&arg.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                match BoardState::new(size) {
                    Ok(state) => {
                        self.state = state;
                        (true, String::new())
                    }
                    Err(_) => (false, "unacceptable size".to_string()),
                }
            }

            "clear_board" => match BoardState::new(self.state.size()) {
                Ok(state) => {
                    self.state = state;
                    (true, String::new())
                }
                Err(e) => (false, e.to_string()),
            },

            "komi" => match args.first().map(|a| a.parse::<f32>()) {
                Some(Ok(_)) => (true, String::new()),
                Some(Err(_)) => (false, "invalid komi".to_string()),
                None => (false, "missing argument".to_string()),
            },

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                if let Err(message) = self.check_color(args[0]) {
                    return (false, message);
                }
                let mv = match parse_vertex(args[1], self.state.size()) {
                    Ok(mv) => mv,
                    Err(e) => return (false, e.to_string()),
                };
                match self.state.play(mv) {
                    Ok(_) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                if let Err(message) = self.check_color(arg) {
                    return (false, message);
                }
                match drive(&mut self.state, &mut self.player, MAX_MOVE_ATTEMPTS) {
                    Ok((mv, _)) => match move_string(mv, self.state.size()) {
                        Ok(vertex) => (true, vertex),
                        Err(e) => (false, e.to_string()),
                    },
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.state.current_board())),

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Moves must come in turn order; the color argument has to match.
    fn check_color(&self, arg: &str) -> Result<(), String> {
        let color = match arg.to_lowercase().as_str() {
            "b" | "black" => Color::Black,
            "w" | "white" => Color::White,
            _ => return Err(format!("invalid color: {arg}")),
        };
        if color != self.state.current_player() {
            return Err(format!("it is {}'s turn", self.state.current_player()));
        }
        Ok(())
    }
}
