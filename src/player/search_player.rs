use log::info;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, SearchConfig, SearchContext, SearchResult,
};
use crate::board::color::Color;
use crate::board::Board;
use crate::evaluate::PositionalEvaluator;
use crate::move_generator::{MoveGenerator, MoveOrdering};

use super::{Player, PlayerError};

/// Settings of a search-based player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub ordering: MoveOrdering,
}

impl EngineConfig {
    /// Pruned search with center-first ordering.
    pub fn alpha_beta(depth: u8) -> Self {
        Self {
            search: SearchConfig::new(depth),
            ordering: MoveOrdering::CenterFirst,
        }
    }

    /// Full-width search over the columns from left to right.
    pub fn minimax(depth: u8) -> Self {
        Self {
            search: SearchConfig {
                depth,
                pruning: false,
                parallel: false,
            },
            ordering: MoveOrdering::LeftToRight,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            ordering: MoveOrdering::default(),
        }
    }
}

pub struct SearchPlayer {
    name: &'static str,
    context: SearchContext,
    move_generator: MoveGenerator,
    evaluator: PositionalEvaluator,
    scratch: Board,
    last_result: Option<SearchResult>,
}

impl SearchPlayer {
    pub fn new(config: EngineConfig) -> Self {
        let name = if config.search.pruning {
            "alpha-beta"
        } else {
            "minimax"
        };
        let scratch = Board::default();
        let mut move_generator = MoveGenerator::new(config.ordering);
        move_generator.prepare(&scratch);

        Self {
            name,
            context: SearchContext::with_config(config.search),
            move_generator,
            evaluator: PositionalEvaluator::for_board(&scratch),
            scratch,
            last_result: None,
        }
    }

    /// Replaces the default weight table, e.g. with a validated custom one.
    /// It is kept for every board of the size it was built for; boards of
    /// another size get that size's default table.
    pub fn with_evaluator(mut self, evaluator: PositionalEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn context(&self) -> &SearchContext {
        &self.context
    }

    pub fn last_result(&self) -> Option<SearchResult> {
        self.last_result
    }
}

impl Player for SearchPlayer {
    fn name(&self) -> &str {
        self.name
    }

    #[cfg_attr(feature = "instrumentation", instrument(skip_all, fields(player = self.name)))]
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<usize, PlayerError> {
        if !self.evaluator.supports(board) {
            self.evaluator = PositionalEvaluator::for_board(board);
        }
        if self.scratch.width() != board.width() {
            self.move_generator.prepare(board);
        }
        self.scratch.clone_from(board);

        let result = alpha_beta_search(
            &mut self.context,
            &mut self.scratch,
            color,
            &self.move_generator,
            &self.evaluator,
        )?;
        info!(
            "{} ({}) chose {} with score {} after {} positions",
            self.name, color, result.best_move, result.score, result.stats.positions_searched
        );

        self.last_result = Some(result);
        Ok(result.best_move)
    }
}
