//! Search configuration shared by every move selection of an agent.

use std::fmt;
use std::time::Duration;

use crate::error::{self, ErrorKind};
use crate::evaluation::{Heuristic, ScoreFn};
use crate::game::GameState;
use crate::search::PlyKind;

pub const DEFAULT_DEPTH: PlyKind = 3;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10);

/// Parameters of a search. Immutable for the lifetime of one move selection.
///
/// * `depth`: Exact depth for fixed-depth minimax, and the first depth tried by iterative deepening
/// * `max_depth`: Optional depth at which iterative deepening stops
/// * `score_fn`: Evaluation used at leaves and cutoffs
/// * `timeout`: Search stops once the remaining time drops below this threshold
pub struct SearchConfig<G: GameState> {
    pub depth: PlyKind,
    pub max_depth: Option<PlyKind>,
    pub score_fn: ScoreFn<G>,
    pub timeout: Duration,
}

impl<G: GameState> SearchConfig<G> {
    /// Returns a builder with default parameters.
    pub fn builder() -> ConfigBuilder<G> {
        ConfigBuilder::new()
    }

    /// Scores `state` for `player` with the configured evaluation.
    pub fn score(&self, state: &G, player: G::Player) -> f64 {
        (self.score_fn)(state, player)
    }
}

impl<G: GameState> Default for SearchConfig<G> {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            max_depth: None,
            score_fn: Heuristic::default().score_fn(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl<G: GameState> Clone for SearchConfig<G> {
    fn clone(&self) -> Self {
        Self {
            depth: self.depth,
            max_depth: self.max_depth,
            score_fn: self.score_fn,
            timeout: self.timeout,
        }
    }
}

impl<G: GameState> fmt::Debug for SearchConfig<G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("depth", &self.depth)
            .field("max_depth", &self.max_depth)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// ConfigBuilder allows parameters of a SearchConfig to be set once and validated.
///
/// Default values:
///
/// * `depth`: 3
/// * `max_depth`: None
/// * `score_fn`: Longest path heuristic
/// * `timeout`: 10 milliseconds
pub struct ConfigBuilder<G: GameState> {
    config: SearchConfig<G>,
}

impl<G: GameState> ConfigBuilder<G> {
    /// Create a new default ConfigBuilder.
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Validate and return a new SearchConfig.
    pub fn build(&self) -> error::Result<SearchConfig<G>> {
        let config = self.config.clone();

        if config.depth == 0 {
            return Err((ErrorKind::InvalidDepth, "depth must be at least 1").into());
        }
        if let Some(max_depth) = config.max_depth {
            if max_depth < config.depth {
                return Err((
                    ErrorKind::InvalidDepth,
                    format!("max depth {max_depth} is below depth {}", config.depth),
                )
                    .into());
            }
        }

        Ok(config)
    }

    /// Set the search depth.
    pub fn depth(mut self, depth: PlyKind) -> Self {
        self.config.depth = depth;
        self
    }

    /// Set the depth at which iterative deepening stops.
    pub fn max_depth(mut self, max_depth: PlyKind) -> Self {
        self.config.max_depth = Some(max_depth);
        self
    }

    /// Set the evaluation function.
    pub fn score_fn(mut self, score_fn: ScoreFn<G>) -> Self {
        self.config.score_fn = score_fn;
        self
    }

    /// Set the evaluation function to a built-in heuristic.
    pub fn heuristic(self, heuristic: Heuristic) -> Self {
        self.score_fn(heuristic.score_fn())
    }

    /// Set the remaining time threshold.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }
}

impl<G: GameState> Default for ConfigBuilder<G> {
    fn default() -> Self {
        Self::new()
    }
}
