//! Watch command - watch two players play each other.

use std::time::Duration;

use connect_four::board::Board;
use connect_four::game::ConsoleRenderer;
use connect_four::player::{EngineConfig, PlayerKind};
use structopt::StructOpt;

use super::util::{run_game_loop, starting_board};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long, default_value = "alpha-beta")]
    pub red: PlayerKind,
    #[structopt(long, default_value = "greedy")]
    pub blue: PlayerKind,
    #[structopt(short, long, default_value = "6")]
    pub depth: u8,
    #[structopt(long, default_value = "7")]
    pub width: usize,
    #[structopt(long, default_value = "4")]
    pub height: usize,
    #[structopt(long = "position")]
    pub starting_position: Option<Board>,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let board = starting_board(self.starting_position, self.width, self.height);
        let config = EngineConfig::alpha_beta(self.depth);
        let mut red = self.red.build(config);
        let mut blue = self.blue.build(config);

        println!("{} (X) vs {} (O)", self.red, self.blue);
        run_game_loop(
            board,
            red.as_mut(),
            blue.as_mut(),
            ConsoleRenderer::new(Some(Duration::from_millis(self.delay_ms))),
        );
    }
}
