//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! The search is written in negamax form: every node scores the position from
//! the point of view of the color to move, and the parent negates the child's
//! score. A node first checks whether the previous ply already won (the color
//! to move has lost), then falls back to the static evaluator when the depth
//! horizon is reached or the board is full, and otherwise tries every legal
//! move in the move generator's order.
//!
//! Alpha-beta pruning keeps a window `[alpha, beta]` of scores that can still
//! influence the root. The running best score at a node doubles as its alpha,
//! and once it reaches beta the remaining moves are skipped since the opponent
//! would never allow this line. Pruning never changes the chosen move or its
//! score compared to a full-width search; it only skips work.
//!
//! # Root
//!
//! The root is a thin wrapper around `negamax`: it enumerates the legal moves
//! once, scores each resulting position and keeps the first move with the
//! strictly highest score, so ties go to the move generated first.
//!
//! ## Parallel Search
//! Root moves can be searched in parallel. Every root branch works on its own
//! copy of the board with a full window, and the results are reduced in move
//! generation order, so the parallel search picks the same move as the
//! sequential one.

use std::cmp::min;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use log::{debug, info};
use rayon::prelude::*;
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::Evaluator;
use crate::board::color::Color;
use crate::board::Board;
use crate::evaluate::{player_is_winning, LOSS_SCORE};
use crate::move_generator::{MoveGenerator, MoveList};

/// Bound of the root window, outside of every reachable score.
pub const INFINITY_SCORE: i32 = 1_000_000_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("the game is already decided, {0} has four in a row")]
    GameAlreadyDecided(Color),
    #[error("the evaluator cannot score a {width}x{height} board")]
    EvaluatorMismatch { width: usize, height: usize },
}

/// Search configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub pruning: bool,
    pub parallel: bool,
}

impl SearchConfig {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 10,
            pruning: true,
            parallel: false,
        }
    }
}

/// Counters of the last search, handed out with every result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    pub positions_searched: usize,
    pub leaf_evaluations: usize,
    pub cutoffs: usize,
    pub duration: Duration,
}

/// Statistics collected during search.
struct SearchStats {
    position_count: AtomicUsize,
    leaf_evaluations: AtomicUsize,
    cutoffs: AtomicUsize,
    last_score: Option<i32>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn new() -> Self {
        Self {
            position_count: AtomicUsize::new(0),
            leaf_evaluations: AtomicUsize::new(0),
            cutoffs: AtomicUsize::new(0),
            last_score: None,
            last_duration: None,
        }
    }

    fn increment(&self) {
        self.position_count.fetch_add(1, Ordering::Relaxed);
    }

    fn increment_leaf_evaluations(&self) {
        self.leaf_evaluations.fetch_add(1, Ordering::Relaxed);
    }

    fn increment_cutoffs(&self) {
        self.cutoffs.fetch_add(1, Ordering::Relaxed);
    }

    fn reset(&mut self) {
        self.last_score = None;
        self.last_duration = None;
        self.position_count.store(0, Ordering::SeqCst);
        self.leaf_evaluations.store(0, Ordering::SeqCst);
        self.cutoffs.store(0, Ordering::SeqCst);
    }

    fn record_result(&mut self, score: i32, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }

    fn count(&self) -> usize {
        self.position_count.load(Ordering::SeqCst)
    }

    fn leaf_evaluations(&self) -> usize {
        self.leaf_evaluations.load(Ordering::SeqCst)
    }

    fn cutoffs(&self) -> usize {
        self.cutoffs.load(Ordering::SeqCst)
    }

    fn snapshot(&self) -> SearchStatistics {
        SearchStatistics {
            positions_searched: self.count(),
            leaf_evaluations: self.leaf_evaluations(),
            cutoffs: self.cutoffs(),
            duration: self.last_duration.unwrap_or_default(),
        }
    }
}

/// The chosen move of one search together with its score from the mover's
/// point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: usize,
    pub score: i32,
    /// Depth actually searched, after clamping to the number of empty cells.
    pub depth: u8,
    pub stats: SearchStatistics,
}

pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self::with_config(SearchConfig::new(depth))
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::new(),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }

    pub fn set_pruning(&mut self, pruning: bool) {
        self.config.pruning = pruning;
    }

    pub fn is_pruning(&self) -> bool {
        self.config.pruning
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.count()
    }

    pub fn leaf_evaluation_count(&self) -> usize {
        self.stats.leaf_evaluations()
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoffs()
    }

    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    pub fn statistics(&self) -> SearchStatistics {
        self.stats.snapshot()
    }

    fn increment_position_count(&self) {
        self.stats.increment();
    }

    fn increment_leaf_evaluations(&self) {
        self.stats.increment_leaf_evaluations();
    }

    fn increment_cutoffs(&self) {
        self.stats.increment_cutoffs();
    }
}

/// Places `color`'s stone on `index`, executes a closure with the new board,
/// then takes the stone back.
fn with_move_applied<F, R>(board: &mut Board, index: usize, color: Color, f: F) -> R
where
    F: FnOnce(&mut Board) -> R,
{
    board
        .place(index, color)
        .expect("move application should succeed in search");

    let result = f(board);

    let removed = board
        .remove(index)
        .expect("move undo should succeed in search");
    debug_assert_eq!(removed, color);

    result
}

/// Searches for the best move of `color` using negamax with alpha-beta pruning.
///
/// The configured depth is clamped to the number of empty cells. The board is
/// mutated during the search but restored before returning.
///
/// # Returns
///
/// - `Ok(result)` - The best move, its score and the search statistics
/// - `Err(SearchError::DepthTooLow)` - If search depth is < 1
/// - `Err(SearchError::GameAlreadyDecided)` - If either color already has four in a row
/// - `Err(SearchError::NoAvailableMoves)` - If the board is full
/// - `Err(SearchError::EvaluatorMismatch)` - If the evaluator was built for another board size
///
/// # Examples
///
/// ```
/// use connect_four::alpha_beta_searcher::{alpha_beta_search, SearchContext};
/// use connect_four::board::{color::Color, Board};
/// use connect_four::evaluate::PositionalEvaluator;
/// use connect_four::move_generator::MoveGenerator;
///
/// let mut board = Board::default();
/// let mut context = SearchContext::new(4);
/// let result = alpha_beta_search(
///     &mut context,
///     &mut board,
///     Color::Red,
///     &MoveGenerator::default(),
///     &PositionalEvaluator::default(),
/// )
/// .unwrap();
/// assert!(board.is_legal_drop(result.best_move));
/// ```
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta_search<E>(
    context: &mut SearchContext,
    board: &mut Board,
    color: Color,
    move_generator: &MoveGenerator,
    evaluator: &E,
) -> Result<SearchResult, SearchError>
where
    E: Evaluator,
{
    context.reset_stats();
    let target_depth = context.search_depth();
    debug!("alpha-beta search depth: {}", target_depth);

    if target_depth < 1 {
        return Err(SearchError::DepthTooLow);
    }

    if !evaluator.supports(board) {
        return Err(SearchError::EvaluatorMismatch {
            width: board.width(),
            height: board.height(),
        });
    }

    if let Some(winner) = Color::ALL
        .iter()
        .copied()
        .find(|&c| player_is_winning(board, c))
    {
        return Err(SearchError::GameAlreadyDecided(winner));
    }

    let candidates = move_generator.generate_moves(board);
    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    // never look past a full board
    let depth = min(usize::from(target_depth), board.empty_count()) as u8;
    let start = Instant::now();

    #[cfg(debug_assertions)]
    let original = board.clone();

    let (score, best_move) = if context.is_parallel() {
        search_root_parallel(context, board, color, move_generator, evaluator, &candidates, depth)
    } else {
        search_root_sequential(context, board, color, move_generator, evaluator, &candidates, depth)
    };

    #[cfg(debug_assertions)]
    debug_assert_eq!(*board, original, "search must leave the board untouched");

    context.stats.record_result(score, start.elapsed());
    let stats = context.statistics();
    info!(
        "{} plays {} (score {}, depth {}, {} positions, {} cutoffs, {:?})",
        color,
        best_move,
        score,
        depth,
        stats.positions_searched,
        stats.cutoffs,
        stats.duration
    );

    Ok(SearchResult {
        best_move,
        score,
        depth,
        stats,
    })
}

fn search_root_sequential<E>(
    context: &SearchContext,
    board: &mut Board,
    color: Color,
    move_generator: &MoveGenerator,
    evaluator: &E,
    candidates: &MoveList,
    depth: u8,
) -> (i32, usize)
where
    E: Evaluator,
{
    let mut best_score = -INFINITY_SCORE;
    let mut best_move = candidates[0];

    for &index in candidates.iter() {
        let alpha = if context.is_pruning() {
            best_score
        } else {
            -INFINITY_SCORE
        };

        let score = -with_move_applied(board, index, color, |board| {
            negamax(
                context,
                board,
                color.opposite(),
                move_generator,
                evaluator,
                depth - 1,
                -INFINITY_SCORE,
                -alpha,
            )
        });
        debug!("Index: {} Value: {}", index, score);

        if score > best_score {
            best_score = score;
            best_move = index;
        }
    }

    (best_score, best_move)
}

fn search_root_parallel<E>(
    context: &SearchContext,
    board: &Board,
    color: Color,
    move_generator: &MoveGenerator,
    evaluator: &E,
    candidates: &MoveList,
    depth: u8,
) -> (i32, usize)
where
    E: Evaluator,
{
    let scores: Vec<i32> = candidates
        .as_slice()
        .par_iter()
        .map(|&index| {
            let mut cloned_board = board.clone();
            -with_move_applied(&mut cloned_board, index, color, |board| {
                negamax(
                    context,
                    board,
                    color.opposite(),
                    move_generator,
                    evaluator,
                    depth - 1,
                    -INFINITY_SCORE,
                    INFINITY_SCORE,
                )
            })
        })
        .collect();

    let mut best_score = -INFINITY_SCORE;
    let mut best_move = candidates[0];
    for (&index, &score) in candidates.iter().zip(scores.iter()) {
        debug!("Index: {} Value: {}", index, score);
        if score > best_score {
            best_score = score;
            best_move = index;
        }
    }

    (best_score, best_move)
}

/// Best score `color` can force from this position within `depth` plies,
/// clamped to the window: scores at or below `alpha` come back as `alpha`,
/// and once a move reaches `beta` the node stops searching.
#[allow(clippy::too_many_arguments)]
pub(super) fn negamax<E>(
    context: &SearchContext,
    board: &mut Board,
    color: Color,
    move_generator: &MoveGenerator,
    evaluator: &E,
    depth: u8,
    alpha: i32,
    beta: i32,
) -> i32
where
    E: Evaluator,
{
    context.increment_position_count();

    // The previous ply completed four in a row: we already lost.
    if player_is_winning(board, color.opposite()) {
        return LOSS_SCORE;
    }

    if depth == 0 {
        context.increment_leaf_evaluations();
        return evaluator.evaluate(board, color);
    }

    let candidates = move_generator.generate_moves(board);
    if candidates.is_empty() {
        context.increment_leaf_evaluations();
        return evaluator.evaluate(board, color);
    }

    let pruning = context.is_pruning();
    let mut best = alpha;

    for &index in candidates.iter() {
        let (child_alpha, child_beta) = if pruning {
            (-beta, -best)
        } else {
            (-INFINITY_SCORE, INFINITY_SCORE)
        };

        let value = -with_move_applied(board, index, color, |board| {
            negamax(
                context,
                board,
                color.opposite(),
                move_generator,
                evaluator,
                depth - 1,
                child_alpha,
                child_beta,
            )
        });

        if value > best {
            best = value;
        }

        if pruning && best >= beta {
            context.increment_cutoffs();
            break;
        }
    }

    best
}
