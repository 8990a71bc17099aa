//! Episode recording.
//!
//! # Components
//!
//! - `games_statistics`: score statistics over a series of games, with CSV output

pub mod games_statistics;

pub use games_statistics::GamesStatistics;
