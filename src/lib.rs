pub mod alpha_beta_searcher;
pub mod board;
pub mod evaluate;
pub mod game;
#[cfg(feature = "instrumentation")]
pub mod instrumentation;
pub mod move_generator;
pub mod player;
