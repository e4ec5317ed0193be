//! Agents are the harness facing API of the engine: given a state and a time probe,
//! pick a move before the deadline.

use std::time::Instant;

use log::debug;

use crate::config::SearchConfig;
use crate::error::{self, ErrorKind};
use crate::game::GameState;
use crate::search::{self, Context, SearchResult};
use crate::timeman::{TimeLeft, Timer};

pub trait Agent<G: GameState> {
    /// Selects a move for the active player of `state`.
    /// `time_left` is polled on every searched node and must report the time left for this move.
    fn get_move(&mut self, state: &G, time_left: TimeLeft) -> error::Result<G::Move>;
}

/// Searches to the configured depth with plain minimax.
///
/// If the timer runs out before the search completes there is no partial answer
/// to keep, so the first legal move is played.
pub struct MinimaxAgent<G: GameState> {
    player: G::Player,
    config: SearchConfig<G>,
    last_search: Option<SearchResult<G::Move>>,
}

impl<G: GameState> MinimaxAgent<G> {
    /// Create an agent playing as `player`. Leaves are always scored for `player`.
    pub fn new(player: G::Player, config: SearchConfig<G>) -> Self {
        Self {
            player,
            config,
            last_search: None,
        }
    }

    pub fn player(&self) -> G::Player {
        self.player
    }

    pub fn config(&self) -> &SearchConfig<G> {
        &self.config
    }

    /// Returns the result of the most recent move selection.
    pub fn last_search(&self) -> Option<&SearchResult<G::Move>> {
        self.last_search.as_ref()
    }
}

impl<G: GameState> Agent<G> for MinimaxAgent<G> {
    fn get_move(&mut self, state: &G, time_left: TimeLeft) -> error::Result<G::Move> {
        let instant = Instant::now();
        let fallback = *state
            .legal_moves()
            .first()
            .ok_or(ErrorKind::NoLegalMoves)?;
        let timer = Timer::new(time_left, self.config.timeout);
        let mut ctx = Context::new(state, self.player, &self.config, timer);

        let search_result = match search::minimax_with(&mut ctx, state, self.config.depth) {
            Ok(search_result) => search_result,
            Err(err) if err.is_timeout() => {
                debug!(
                    "minimax timed out at depth {} after {} nodes, playing {fallback:?}",
                    self.config.depth, ctx.nodes
                );
                SearchResult::fallback(fallback, ctx.nodes, instant.elapsed())
            }
            Err(err) => return Err(err),
        };

        let best_move = search_result.best_move;
        self.last_search = Some(search_result);
        Ok(best_move)
    }
}

/// Searches with iterative deepening alpha-beta, starting at the configured depth,
/// and plays the move of the deepest depth completed before the timer ran out.
pub struct AlphaBetaAgent<G: GameState> {
    player: G::Player,
    config: SearchConfig<G>,
    last_search: Option<SearchResult<G::Move>>,
}

impl<G: GameState> AlphaBetaAgent<G> {
    /// Create an agent playing as `player`. Leaves are always scored for `player`.
    pub fn new(player: G::Player, config: SearchConfig<G>) -> Self {
        Self {
            player,
            config,
            last_search: None,
        }
    }

    pub fn player(&self) -> G::Player {
        self.player
    }

    pub fn config(&self) -> &SearchConfig<G> {
        &self.config
    }

    /// Returns the result of the most recent move selection.
    pub fn last_search(&self) -> Option<&SearchResult<G::Move>> {
        self.last_search.as_ref()
    }
}

impl<G: GameState> Agent<G> for AlphaBetaAgent<G> {
    fn get_move(&mut self, state: &G, time_left: TimeLeft) -> error::Result<G::Move> {
        let timer = Timer::new(time_left, self.config.timeout);
        let search_result = search::ids(state, self.player, &self.config, timer)?;

        if search_result.depth == 0 {
            debug!(
                "alpha-beta completed no depth, playing {:?}",
                search_result.best_move
            );
        }

        let best_move = search_result.best_move;
        self.last_search = Some(search_result);
        Ok(best_move)
    }
}
