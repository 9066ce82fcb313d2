//! Best move command - determine the best move from a position.

use connect_four::alpha_beta_searcher::SearchConfig;
use connect_four::board::color::Color;
use connect_four::board::Board;
use connect_four::player::{EngineConfig, Player, SearchPlayer};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "10")]
    pub depth: u8,
    #[structopt(long = "position")]
    pub starting_position: Board,
    #[structopt(short = "c", long = "color")]
    pub color: Option<Color>,
    #[structopt(long = "no-pruning", help = "Search the full tree without alpha-beta cutoffs")]
    pub no_pruning: bool,
    #[structopt(long, help = "Search the root moves in parallel")]
    pub parallel: bool,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let board = self.starting_position;
        let color = self.color.unwrap_or_else(|| board.side_to_move());
        let config = EngineConfig {
            search: SearchConfig {
                depth: self.depth,
                pruning: !self.no_pruning,
                parallel: self.parallel,
            },
            ..EngineConfig::alpha_beta(self.depth)
        };
        let mut engine = SearchPlayer::new(config);

        println!("{}", board);
        match engine.choose_move(&board, color) {
            Ok(best_move) => {
                let score = engine.last_result().map_or(0, |result| result.score);
                println!(
                    "{} plays {} (column {}), score {}",
                    color,
                    best_move,
                    board.column_of(best_move),
                    score
                );
                let stats = engine.context().statistics();
                println!(
                    "* Positions searched: {}, cutoffs: {}, took {:?}",
                    stats.positions_searched, stats.cutoffs, stats.duration
                );
            }
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
