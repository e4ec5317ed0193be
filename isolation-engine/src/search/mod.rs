//! Search functions.

mod alpha_beta;
mod ids;
mod minimax;

pub use alpha_beta::*;
pub use ids::*;
pub use minimax::*;

use std::fmt::{self, Debug, Display};
use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::{self, Error, ErrorKind};
use crate::game::GameState;
use crate::timeman::Timer;

/// Type alias for search depth, in plies.
pub type PlyKind = u32;

/// The results found from running a search on some root state.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// The best move to make for the root state discovered from search.
    pub best_move: M,
    /// Backed-up score of the best move, from the scoring player's point of view.
    /// 0.0 if no depth was completed.
    pub score: f64,
    /// Deepest fully completed search depth. 0 if the first legal move was played as a fallback.
    pub depth: PlyKind,
    /// Total number of nodes visited, including those of an interrupted depth.
    pub nodes: u64,
    /// Total time elapsed from the start to the end of a search.
    pub elapsed: Duration,
    /// Flag that indicates the search was stopped by the timer.
    pub stopped: bool,
}

impl<M> SearchResult<M> {
    /// Result of a move selection where no search depth completed.
    pub fn fallback(best_move: M, nodes: u64, elapsed: Duration) -> Self {
        Self {
            best_move,
            score: 0.0,
            depth: 0,
            nodes,
            elapsed,
            stopped: true,
        }
    }

    /// Get average nodes per second of search. 0 if no time was measured.
    pub fn nps(&self) -> f64 {
        if self.elapsed.is_zero() {
            return 0.0;
        }
        (self.nodes as f64 / self.elapsed.as_secs_f64()).round()
    }
}

impl<M: Debug> Display for SearchResult<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "SearchResult {{")?;
        writeln!(f, "    best_move: {:?}", self.best_move)?;
        writeln!(f, "    score    : {}", self.score)?;
        writeln!(f, "    depth    : {}", self.depth)?;
        writeln!(f, "    nodes    : {}", self.nodes)?;
        writeln!(f, "    nps      : {}", self.nps())?;
        writeln!(
            f,
            "    elapsed  : {}.{:03}s",
            self.elapsed.as_secs(),
            self.elapsed.subsec_millis()
        )?;
        writeln!(f, "    stopped  : {}", self.stopped)?;
        write!(f, "}}")
    }
}

/// Read-only parameters and counters of one running search.
///
/// Maxing and minning roles alternate by tree level from the root.
/// A branch ends when the depth runs out or the root's active player has won or lost,
/// and the leaf is then scored for `player`, which is not necessarily the root mover.
pub(crate) struct Context<'a, G: GameState> {
    config: &'a SearchConfig<G>,
    timer: Timer<'a>,
    root: G::Player,
    player: G::Player,
    pub(crate) nodes: u64,
    /// Set when a branch was cut off by depth rather than by the game ending.
    pub(crate) horizon: bool,
}

impl<'a, G: GameState> Context<'a, G> {
    pub(crate) fn new(
        state: &G,
        player: G::Player,
        config: &'a SearchConfig<G>,
        timer: Timer<'a>,
    ) -> Self {
        Self {
            config,
            timer,
            root: state.active_player(),
            player,
            nodes: 0,
            horizon: false,
        }
    }

    /// Polls the timer, then counts the node. Every search function calls this first.
    pub(crate) fn enter(&mut self) -> error::Result<()> {
        self.timer.check()?;
        self.nodes += 1;
        Ok(())
    }

    /// Returns the static score of `state` if its branch ends here.
    pub(crate) fn leaf(&mut self, state: &G, ply: PlyKind) -> Option<f64> {
        let decided = state.is_winner(self.root) || state.is_loser(self.root);

        if !decided && ply > 0 {
            return None;
        }
        if !decided {
            self.horizon = true;
        }
        Some(self.config.score(state, self.player))
    }
}

/// Forecasts a legal move, treating an engine refusal as a broken contract.
pub(crate) fn forecast<G: GameState>(state: &G, move_: G::Move) -> error::Result<G> {
    state.forecast(move_).map_err(|err| {
        Error::new(
            ErrorKind::IllegalForecast,
            format!("forecast of {move_:?} failed: {err}"),
        )
    })
}

/// Returns the legal moves of the root, which must not be empty.
pub(crate) fn root_moves<G: GameState>(state: &G) -> error::Result<Vec<G::Move>> {
    let legal_moves = state.legal_moves();
    if legal_moves.is_empty() {
        Err((
            ErrorKind::NoLegalMoves,
            format!("{:?} has no move to search", state.active_player()),
        )
            .into())
    } else {
        Ok(legal_moves)
    }
}

/// Rejects a top-level search depth of 0.
pub(crate) fn check_depth(ply: PlyKind) -> error::Result<()> {
    if ply == 0 {
        Err((ErrorKind::InvalidDepth, "top-level search depth must be at least 1").into())
    } else {
        Ok(())
    }
}
