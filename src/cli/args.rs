//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_move::BestMoveArgs, play::PlayArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(
    name = "connect4",
    about = "A Connect Four engine using negamax search with alpha-beta pruning"
)]
pub enum Connect4 {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches `--depth` plies ahead (default: 10). Your color is chosen at random unless you specify it with `--color`. The board is 7x4 unless `--width` and `--height` say otherwise, or a starting position is given with `--position`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch two computer players play each other. Choose them with `--red` and `--blue` (human, greedy, alpha-beta, minimax); search players look `--depth` plies ahead (default: 6)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Compute the best move for a position given with `--position` (required), in bottom-row-first notation such as `XO.....-.......-.......-.......-`. The side to move is inferred from the stone counts unless `--color` is given."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for Connect4 {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            BestMove(cmd),
        }
    }
}
