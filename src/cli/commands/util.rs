//! Shared utilities for CLI commands.

use std::process;

use connect_four::board::Board;
use connect_four::game::{Arena, GameError, GameRenderer};
use connect_four::player::{Player, PlayerError};

/// The explicit starting position if one was given, otherwise an empty board
/// of the requested size.
pub(crate) fn starting_board(position: Option<Board>, width: usize, height: usize) -> Board {
    if let Some(board) = position {
        return board;
    }

    match Board::new(width, height) {
        Ok(board) => board,
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    }
}

pub(crate) fn run_game_loop<R: GameRenderer>(
    board: Board,
    red: &mut dyn Player,
    blue: &mut dyn Player,
    mut renderer: R,
) {
    let mut arena = Arena::new(board);
    match arena.play(red, blue, &mut renderer) {
        Ok(_) => {}
        Err(GameError::Player(PlayerError::UserExit)) => println!("Goodbye!"),
        Err(error) => {
            eprintln!("error: {}", error);
            process::exit(1);
        }
    }
}
