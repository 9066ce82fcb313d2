//! Move input from a person at the terminal.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::color::Color;
use crate::board::Board;

use super::{Player, PlayerError};

static INDEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([0-9]+)$").expect("INDEX_RE regex should be valid"));
static COLUMN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(?i)c([0-9]+)$").expect("COLUMN_RE regex should be valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// A cell index, as printed on the board.
    Index(usize),
    /// A column, counted from 0 on the left.
    Column(usize),
    Quit,
}

impl MoveInput {
    /// Resolves the input against `board`, or `None` if it names no legal drop.
    pub fn resolve(&self, board: &Board) -> Option<usize> {
        match *self {
            MoveInput::Index(index) if board.is_legal_drop(index) => Some(index),
            MoveInput::Column(column) => board.lowest_empty_in_column(column),
            _ => None,
        }
    }
}

impl FromStr for MoveInput {
    type Err = PlayerError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let invalid = || PlayerError::InvalidInput {
            input: trimmed.to_string(),
        };

        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("q") {
            return Ok(MoveInput::Quit);
        }

        if let Some(caps) = INDEX_RE.captures(trimmed) {
            return caps[1]
                .parse()
                .map(MoveInput::Index)
                .map_err(|_| invalid());
        }

        if let Some(caps) = COLUMN_RE.captures(trimmed) {
            return caps[1]
                .parse()
                .map(MoveInput::Column)
                .map_err(|_| invalid());
        }

        Err(invalid())
    }
}

pub struct HumanPlayer {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl HumanPlayer {
    pub fn new(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self { input, output }
    }

    pub fn stdin() -> Self {
        Self::new(Box::new(io::BufReader::new(io::stdin())), Box::new(io::stdout()))
    }

    fn prompt(&mut self, message: &str) -> Result<(), PlayerError> {
        writeln!(self.output, "{}", message)
            .and_then(|_| self.output.flush())
            .map_err(|e| PlayerError::IOError {
                error: e.to_string(),
            })
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        "human"
    }

    /// Keeps asking until the input names a legal drop. End of input counts as
    /// quitting.
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<usize, PlayerError> {
        self.prompt(&format!(
            "{} ({}) to move. Enter a cell index, c<column>, or quit:",
            color,
            color.symbol()
        ))?;

        loop {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| PlayerError::IOError {
                    error: e.to_string(),
                })?;
            if read == 0 {
                return Err(PlayerError::UserExit);
            }

            match line.parse::<MoveInput>() {
                Ok(MoveInput::Quit) => return Err(PlayerError::UserExit),
                Ok(input) => match input.resolve(board) {
                    Some(index) => return Ok(index),
                    None => {
                        debug!("rejected move input {:?}", input);
                        self.prompt(&format!("{} is not a legal move, try again:", line.trim()))?;
                    }
                },
                Err(error) => self.prompt(&format!("{}, try again:", error))?,
            }
        }
    }
}
