//! Time-bounded adversarial search for two player, zero-sum, perfect information games.
//!
//! The engine plays through the [`GameState`] trait and never implements game rules.
//! Agents pick moves with fixed-depth minimax or iterative deepening alpha-beta,
//! polling a harness supplied time probe on every node.

pub mod agent;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod search;
pub mod timeman;

#[cfg(test)]
mod mock;

pub use agent::{Agent, AlphaBetaAgent, MinimaxAgent};
pub use config::{ConfigBuilder, SearchConfig};
pub use error::{Error, ErrorKind};
pub use evaluation::{Heuristic, ScoreFn};
pub use game::{GameState, Location};
pub use search::{PlyKind, SearchResult};
pub use timeman::Timer;
