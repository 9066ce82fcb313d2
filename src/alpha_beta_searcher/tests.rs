use super::search::negamax;
use super::*;
use crate::board::color::Color;
use crate::board::Board;
use crate::board_position;
use crate::evaluate::{PositionalEvaluator, LOSS_SCORE, WIN_SCORE};
use crate::move_generator::{MoveGenerator, MoveOrdering};

fn search(board: &mut Board, color: Color, config: SearchConfig) -> Result<SearchResult, SearchError> {
    search_with_ordering(board, color, config, MoveOrdering::CenterFirst)
}

fn search_with_ordering(
    board: &mut Board,
    color: Color,
    config: SearchConfig,
    ordering: MoveOrdering,
) -> Result<SearchResult, SearchError> {
    let mut context = SearchContext::with_config(config);
    let evaluator = PositionalEvaluator::for_board(board);
    alpha_beta_search(
        &mut context,
        board,
        color,
        &MoveGenerator::new(ordering),
        &evaluator,
    )
}

fn config(depth: u8, pruning: bool, parallel: bool) -> SearchConfig {
    SearchConfig {
        depth,
        pruning,
        parallel,
    }
}

fn midgame_position() -> Board {
    board_position![
        ".......",
        "...O...",
        "..XXO..",
        ".OXOX..",
    ]
}

#[test]
fn test_empty_board_depth_4_regression() {
    let mut board = Board::default();
    let result = search(&mut board, Color::Red, SearchConfig::new(4)).unwrap();
    assert_eq!(result.best_move, 3);
    assert_eq!(result.score, 0);
    assert_eq!(result.depth, 4);
    assert_eq!(result.stats.positions_searched, 172);
    assert_eq!(result.stats.cutoffs, 60);
}

#[test]
fn test_search_is_deterministic() {
    let mut board = Board::default();
    let first = search(&mut board, Color::Red, SearchConfig::new(4)).unwrap();
    for _ in 0..5 {
        let again = search(&mut board, Color::Red, SearchConfig::new(4)).unwrap();
        assert_eq!(again.best_move, first.best_move);
        assert_eq!(again.score, first.score);
        assert_eq!(again.stats.positions_searched, first.stats.positions_searched);
    }
}

#[test]
fn test_takes_immediate_win() {
    // red completes the column on 27; any other move lets blue win on 1 or 5
    let position = board_position![
        ".......",
        "......X",
        "......X",
        "..OOO.X",
    ];
    for depth in 1..=6 {
        let mut board = position.clone();
        let result = search(&mut board, Color::Red, SearchConfig::new(depth)).unwrap();
        assert_eq!(result.best_move, 27, "depth {}", depth);
        assert_eq!(result.score, WIN_SCORE, "depth {}", depth);
    }
}

#[test]
fn test_blocks_forced_loss() {
    let position = board_position![
        ".......",
        ".O.....",
        ".OX....",
        "XOX....",
    ];

    // one ply only sees its own stone and misses the threat
    let mut board = position.clone();
    let shallow = search(&mut board, Color::Red, SearchConfig::new(1)).unwrap();
    assert_eq!(shallow.best_move, 3);

    for depth in 2..=5 {
        let mut board = position.clone();
        let result = search(&mut board, Color::Red, SearchConfig::new(depth)).unwrap();
        assert_eq!(result.best_move, 22, "depth {}", depth);
        assert!(result.score > LOSS_SCORE);
    }
}

#[test]
fn test_midgame_scores() {
    let expected = [(1, 24, 8), (2, 24, 2), (3, 24, 8), (4, 24, 2), (5, 24, 8), (6, 24, 2)];
    for &(depth, best_move, score) in expected.iter() {
        let mut board = midgame_position();
        let result = search(&mut board, Color::Red, SearchConfig::new(depth)).unwrap();
        assert_eq!((result.best_move, result.score), (best_move, score), "depth {}", depth);
    }
}

#[test]
fn test_pruning_does_not_change_result() {
    let positions = vec![
        Board::default(),
        midgame_position(),
        board_position![
            ".......",
            ".O.....",
            ".OX....",
            "XOX....",
        ],
        board_position![
            "..XO...",
            "..XO.X.",
            "O.OXOX.",
            "XOXOXOX",
        ],
    ];

    for position in positions.iter() {
        let color = position.side_to_move();
        for ordering in [MoveOrdering::CenterFirst, MoveOrdering::LeftToRight].iter() {
            for depth in 1..=5 {
                let mut board = position.clone();
                let pruned =
                    search_with_ordering(&mut board, color, config(depth, true, false), *ordering)
                        .unwrap();
                let full =
                    search_with_ordering(&mut board, color, config(depth, false, false), *ordering)
                        .unwrap();
                assert_eq!(
                    (pruned.best_move, pruned.score),
                    (full.best_move, full.score),
                    "depth {} ordering {:?} position {}",
                    depth,
                    ordering,
                    position.to_position_string()
                );
                assert!(pruned.stats.positions_searched <= full.stats.positions_searched);
            }
        }
    }
}

#[test]
fn test_left_to_right_ordering_breaks_ties_differently() {
    let mut board = midgame_position();
    let center = search_with_ordering(&mut board, Color::Red, config(3, true, false), MoveOrdering::CenterFirst)
        .unwrap();
    let left = search_with_ordering(&mut board, Color::Red, config(3, true, false), MoveOrdering::LeftToRight)
        .unwrap();
    assert_eq!(center.score, left.score);
    assert_eq!(center.best_move, 24);
    assert_eq!(left.best_move, 16);
}

#[test]
fn test_parallel_search_matches_sequential() {
    for position in [Board::default(), midgame_position()].iter() {
        for depth in 1..=6 {
            let mut board = position.clone();
            let sequential = search(&mut board, Color::Red, config(depth, true, false)).unwrap();
            let parallel = search(&mut board, Color::Red, config(depth, true, true)).unwrap();
            assert_eq!(
                (sequential.best_move, sequential.score),
                (parallel.best_move, parallel.score)
            );
        }
    }
}

#[test]
fn test_board_is_restored_after_search() {
    for &(pruning, parallel) in [(true, false), (false, false), (true, true)].iter() {
        let mut board = midgame_position();
        let before = board.clone();
        search(&mut board, Color::Red, config(6, pruning, parallel)).unwrap();
        assert_eq!(board, before);
    }
}

#[test]
fn test_pruning_statistics() {
    let mut board = Board::default();
    let pruned = search(&mut board, Color::Red, config(4, true, false)).unwrap();
    let full = search(&mut board, Color::Red, config(4, false, false)).unwrap();
    assert!(pruned.stats.cutoffs > 0);
    assert_eq!(full.stats.cutoffs, 0);
    assert!(pruned.stats.positions_searched < full.stats.positions_searched);
    // 7 + 7^2 + 7^3 + 7^4 nodes below the root, 7^4 of them leaves
    assert_eq!(full.stats.positions_searched, 7 + 49 + 343 + 2401);
    assert_eq!(full.stats.leaf_evaluations, 2401);
}

#[test]
fn test_context_keeps_last_result() {
    let mut board = Board::default();
    let mut context = SearchContext::new(3);
    let result = alpha_beta_search(
        &mut context,
        &mut board,
        Color::Red,
        &MoveGenerator::default(),
        &PositionalEvaluator::default(),
    )
    .unwrap();
    assert_eq!(context.last_score(), Some(result.score));
    assert!(context.last_search_duration().is_some());
    assert_eq!(context.searched_position_count(), result.stats.positions_searched);
    assert_eq!(context.cutoff_count(), result.stats.cutoffs);
    assert_eq!(context.leaf_evaluation_count(), result.stats.leaf_evaluations);

    context.reset_stats();
    assert_eq!(context.last_score(), None);
    assert_eq!(context.searched_position_count(), 0);
}

#[test]
fn test_depth_is_clamped_to_empty_cells() {
    let mut board = board_position![
        "OXOXOX.",
        "OXOXOXO",
        "XOXOXOX",
        "XOXOXOX",
    ];
    let result = search(&mut board, Color::Blue, SearchConfig::new(10)).unwrap();
    assert_eq!(result.best_move, 27);
    assert_eq!(result.depth, 1);
}

#[test]
fn test_full_board_is_scored_by_evaluator() {
    let mut board = board_position![
        "OXOXOXO",
        "OXOXOXO",
        "XOXOXOX",
        "XOXOXOX",
    ];
    let evaluator = PositionalEvaluator::default();
    let context = SearchContext::new(4);
    for color in Color::ALL.iter() {
        let score = negamax(
            &context,
            &mut board,
            *color,
            &MoveGenerator::default(),
            &evaluator,
            4,
            -INFINITY_SCORE,
            INFINITY_SCORE,
        );
        assert_ne!(score, LOSS_SCORE);
        assert_eq!(score, evaluator.evaluate(&board, *color));
    }
}

#[test]
fn test_negamax_reports_loss_after_winning_ply() {
    let mut board = board_position![
        ".......",
        ".......",
        "...OOO.",
        "...XXXX",
    ];
    let score = negamax(
        &SearchContext::new(3),
        &mut board,
        Color::Blue,
        &MoveGenerator::default(),
        &PositionalEvaluator::default(),
        3,
        -INFINITY_SCORE,
        INFINITY_SCORE,
    );
    assert_eq!(score, LOSS_SCORE);
}

#[test]
fn test_root_errors() {
    let mut board = Board::default();
    assert_eq!(
        search(&mut board, Color::Red, SearchConfig::new(0)),
        Err(SearchError::DepthTooLow)
    );

    let mut decided = board_position![
        ".......",
        ".......",
        "...OOO.",
        "...XXXX",
    ];
    assert_eq!(
        search(&mut decided, Color::Blue, SearchConfig::new(4)),
        Err(SearchError::GameAlreadyDecided(Color::Red))
    );

    let mut full = board_position![
        "OXOXOXO",
        "OXOXOXO",
        "XOXOXOX",
        "XOXOXOX",
    ];
    assert_eq!(
        search(&mut full, Color::Red, SearchConfig::new(4)),
        Err(SearchError::NoAvailableMoves)
    );
}

#[test]
fn test_evaluator_for_another_board_size_is_rejected() {
    let mut board = Board::new(7, 6).unwrap();
    let mut context = SearchContext::new(2);
    let result = alpha_beta_search(
        &mut context,
        &mut board,
        Color::Red,
        &MoveGenerator::default(),
        &PositionalEvaluator::default(),
    );
    assert_eq!(
        result,
        Err(SearchError::EvaluatorMismatch {
            width: 7,
            height: 6
        })
    );
    assert_eq!(board, Board::new(7, 6).unwrap());

    // same cell count, transposed shape
    let mut transposed = Board::new(4, 7).unwrap();
    let result = alpha_beta_search(
        &mut context,
        &mut transposed,
        Color::Red,
        &MoveGenerator::default(),
        &PositionalEvaluator::default(),
    );
    assert!(matches!(result, Err(SearchError::EvaluatorMismatch { .. })));

    let result = alpha_beta_search(
        &mut context,
        &mut board,
        Color::Red,
        &MoveGenerator::default(),
        &PositionalEvaluator::for_board(&Board::new(7, 6).unwrap()),
    );
    assert!(result.is_ok());
}
