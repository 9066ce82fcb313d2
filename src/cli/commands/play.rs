//! Play command - play a game against the computer.

use connect_four::board::color::Color;
use connect_four::board::Board;
use connect_four::game::ConsoleRenderer;
use connect_four::player::{EngineConfig, HumanPlayer, SearchPlayer};
use structopt::StructOpt;

use super::util::{run_game_loop, starting_board};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "10")]
    pub depth: u8,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Color,
    #[structopt(long, default_value = "7")]
    pub width: usize,
    #[structopt(long, default_value = "4")]
    pub height: usize,
    #[structopt(long = "position")]
    pub starting_position: Option<Board>,
}

impl Command for PlayArgs {
    fn execute(self) {
        let board = starting_board(self.starting_position, self.width, self.height);
        let mut human = HumanPlayer::stdin();
        let mut engine = SearchPlayer::new(EngineConfig::alpha_beta(self.depth));

        println!("You are {} ({}).", self.color, self.color.symbol());
        let renderer = ConsoleRenderer::new(None);
        match self.color {
            Color::Red => run_game_loop(board, &mut human, &mut engine, renderer),
            Color::Blue => run_game_loop(board, &mut engine, &mut human, renderer),
        }
    }
}
