//! Minimax implementation.

use std::time::Instant;

use log::trace;

use crate::config::SearchConfig;
use crate::error;
use crate::game::GameState;
use crate::search::{check_depth, forecast, root_moves, Context, PlyKind, SearchResult};
use crate::timeman::Timer;

/// Base minimax call. Searches every line to exactly `ply` plies and returns the move
/// with the best backed-up score for `player`.
///
/// The active player of `state` is the maxing player at the root.
/// Fails with `SearchTimeout` as soon as the timer runs out anywhere in the tree.
pub fn minimax<G: GameState>(
    state: &G,
    ply: PlyKind,
    player: G::Player,
    config: &SearchConfig<G>,
    timer: Timer,
) -> error::Result<SearchResult<G::Move>> {
    let mut ctx = Context::new(state, player, config, timer);
    minimax_with(&mut ctx, state, ply)
}

/// Runs minimax with a caller owned context, which keeps the node count
/// of a search that timed out.
pub(crate) fn minimax_with<G: GameState>(
    ctx: &mut Context<G>,
    state: &G,
    ply: PlyKind,
) -> error::Result<SearchResult<G::Move>> {
    check_depth(ply)?;
    let instant = Instant::now();

    let (score, best_move) = minimax_root(ctx, state, ply)?;

    Ok(SearchResult {
        best_move,
        score,
        depth: ply,
        nodes: ctx.nodes,
        elapsed: instant.elapsed(),
        stopped: false,
    })
}

/// Minimax root is almost the same as max_value, except it links a score to its move.
/// The first move is kept on ties.
fn minimax_root<G: GameState>(
    ctx: &mut Context<G>,
    state: &G,
    ply: PlyKind,
) -> error::Result<(f64, G::Move)> {
    ctx.enter()?;
    let legal_moves = root_moves(state)?;

    let mut best_move = legal_moves[0];
    let mut best_score = f64::NEG_INFINITY;

    for legal_move in legal_moves {
        let child = forecast(state, legal_move)?;
        let score = min_value(ctx, &child, ply - 1)?;
        trace!("minimax ply {ply}: {legal_move:?} scored {score}");

        if score > best_score {
            best_score = score;
            best_move = legal_move;
        }
    }

    Ok((best_score, best_move))
}

fn max_value<G: GameState>(ctx: &mut Context<G>, state: &G, ply: PlyKind) -> error::Result<f64> {
    ctx.enter()?;
    if let Some(score) = ctx.leaf(state, ply) {
        return Ok(score);
    }

    let mut best_score = f64::NEG_INFINITY;
    for legal_move in state.legal_moves() {
        let child = forecast(state, legal_move)?;
        best_score = best_score.max(min_value(ctx, &child, ply - 1)?);
    }
    Ok(best_score)
}

fn min_value<G: GameState>(ctx: &mut Context<G>, state: &G, ply: PlyKind) -> error::Result<f64> {
    ctx.enter()?;
    if let Some(score) = ctx.leaf(state, ply) {
        return Ok(score);
    }

    let mut best_score = f64::INFINITY;
    for legal_move in state.legal_moves() {
        let child = forecast(state, legal_move)?;
        best_score = best_score.min(max_value(ctx, &child, ply - 1)?);
    }
    Ok(best_score)
}
