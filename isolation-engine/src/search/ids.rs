//! Iterative Deepening Search.

use std::time::Instant;

use log::debug;

use crate::config::SearchConfig;
use crate::error;
use crate::game::GameState;
use crate::search::{alpha_beta_root, check_depth, root_moves, Context, SearchResult};
use crate::timeman::Timer;

/// Searches the game tree with alpha-beta at `config.depth`, then one ply deeper after
/// every completed depth, until the timer runs out.
///
/// Deepening also ends when `config.max_depth` is reached, or when a completed depth
/// never hit its horizon, since every line was then played out to the end of the game.
///
/// A timeout is not an error here. The result holds the move of the deepest completed
/// depth with `stopped` set, or the first legal move at depth 0 if none completed.
pub fn ids<G: GameState>(
    state: &G,
    player: G::Player,
    config: &SearchConfig<G>,
    timer: Timer,
) -> error::Result<SearchResult<G::Move>> {
    check_depth(config.depth)?;
    let instant = Instant::now();
    let legal_moves = root_moves(state)?;
    let mut ctx = Context::new(state, player, config, timer);

    // Fallback if not even the first depth completes.
    let mut search_result = SearchResult::fallback(legal_moves[0], 0, instant.elapsed());
    search_result.stopped = false;

    let mut ids_ply = config.depth;
    loop {
        ctx.horizon = false;

        match alpha_beta_root(&mut ctx, state, ids_ply) {
            Ok((score, best_move)) => {
                debug!(
                    "ids depth {ids_ply}: {best_move:?} scored {score}, {} nodes",
                    ctx.nodes
                );
                search_result.best_move = best_move;
                search_result.score = score;
                search_result.depth = ids_ply;
            }
            Err(err) if err.is_timeout() => {
                debug!(
                    "ids timed out during depth {ids_ply}, keeping depth {} move {:?}",
                    search_result.depth, search_result.best_move
                );
                search_result.stopped = true;
                break;
            }
            Err(err) => return Err(err),
        }

        if !ctx.horizon {
            debug!("ids exhausted the game tree at depth {ids_ply}");
            break;
        }
        if config.max_depth.is_some_and(|max_depth| ids_ply >= max_depth) {
            break;
        }
        ids_ply += 1;
    }

    search_result.nodes = ctx.nodes;
    search_result.elapsed = instant.elapsed();

    Ok(search_result)
}
