//! Negamax search with alpha-beta pruning.

mod search;
mod traits;

#[cfg(test)]
mod tests;

pub use search::{
    alpha_beta_search, SearchConfig, SearchContext, SearchError, SearchResult, SearchStatistics,
    INFINITY_SCORE,
};
pub use traits::Evaluator;
