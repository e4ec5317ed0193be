//! Minimax with Alpha-Beta pruning implementation.

use std::time::Instant;

use log::trace;

use crate::config::SearchConfig;
use crate::error;
use crate::game::GameState;
use crate::search::{check_depth, forecast, root_moves, Context, PlyKind, SearchResult};
use crate::timeman::Timer;

/// Base alpha_beta call. Searches to exactly `ply` plies and returns the same move
/// as unpruned minimax would, visiting fewer nodes.
///
/// Fails with `SearchTimeout` as soon as the timer runs out anywhere in the tree.
pub fn alpha_beta<G: GameState>(
    state: &G,
    ply: PlyKind,
    player: G::Player,
    config: &SearchConfig<G>,
    timer: Timer,
) -> error::Result<SearchResult<G::Move>> {
    check_depth(ply)?;
    let instant = Instant::now();
    let mut ctx = Context::new(state, player, config, timer);

    let (score, best_move) = alpha_beta_root(&mut ctx, state, ply)?;

    Ok(SearchResult {
        best_move,
        score,
        depth: ply,
        nodes: ctx.nodes,
        elapsed: instant.elapsed(),
        stopped: false,
    })
}

// Properties of Alpha-Beta pruning.
// * The maxing player can only update alpha from its children.
// * The minning player can only update beta from its children.
// * Alpha and Beta are passed down by value, so siblings only see each other's
//   bounds through what their parent hands them.
// * When a node's running score reaches the bound of the other player, a cut off occurs.

/// alpha_beta_root is almost the same as max_value, except it links a score to its move.
/// The best score so far is the alpha of every following sibling, beta stays at +Inf.
/// The first move is kept on ties.
pub(crate) fn alpha_beta_root<G: GameState>(
    ctx: &mut Context<G>,
    state: &G,
    ply: PlyKind,
) -> error::Result<(f64, G::Move)> {
    ctx.enter()?;
    let legal_moves = root_moves(state)?;

    let mut best_move = legal_moves[0];
    let mut best_score = f64::NEG_INFINITY;
    let beta = f64::INFINITY;

    for legal_move in legal_moves {
        let child = forecast(state, legal_move)?;
        let score = min_value(ctx, &child, best_score, beta, ply - 1)?;
        trace!("alpha_beta ply {ply}: {legal_move:?} scored {score}");

        if score > best_score {
            best_score = score;
            best_move = legal_move;
        }
    }

    Ok((best_score, best_move))
}

fn max_value<G: GameState>(
    ctx: &mut Context<G>,
    state: &G,
    mut alpha: f64,
    beta: f64,
    ply: PlyKind,
) -> error::Result<f64> {
    ctx.enter()?;
    if let Some(score) = ctx.leaf(state, ply) {
        return Ok(score);
    }

    let mut best_score = f64::NEG_INFINITY;
    for legal_move in state.legal_moves() {
        let child = forecast(state, legal_move)?;
        best_score = best_score.max(min_value(ctx, &child, alpha, beta, ply - 1)?);

        if best_score >= beta {
            // Beta cutoff
            return Ok(best_score);
        }
        alpha = alpha.max(best_score);
    }
    Ok(best_score)
}

fn min_value<G: GameState>(
    ctx: &mut Context<G>,
    state: &G,
    alpha: f64,
    mut beta: f64,
    ply: PlyKind,
) -> error::Result<f64> {
    ctx.enter()?;
    if let Some(score) = ctx.leaf(state, ply) {
        return Ok(score);
    }

    let mut best_score = f64::INFINITY;
    for legal_move in state.legal_moves() {
        let child = forecast(state, legal_move)?;
        best_score = best_score.min(max_value(ctx, &child, alpha, beta, ply - 1)?);

        if best_score <= alpha {
            // Alpha cutoff
            return Ok(best_score);
        }
        beta = beta.min(best_score);
    }
    Ok(best_score)
}
