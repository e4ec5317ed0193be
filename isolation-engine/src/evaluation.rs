//! Static evaluation functions scored from one player's point of view.
//!
//! Every heuristic returns `-inf` for a player who has already lost and `+inf`
//! for a player who has already won before any heuristic term is computed, so
//! decided outcomes always dominate.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::{self, ErrorKind};
use crate::game::{GameState, Location};

/// Score of a state for the scoring player. Higher is better for that player.
pub type ScoreFn<G> = fn(&G, <G as GameState>::Player) -> f64;

// Evaluation Constants
const CONTESTED: f64 = 100.0;
const UNCONTESTED: f64 = 10.0;
const OPPONENT_MOBILITY_WEIGHT: f64 = 2.0;

/// Returns the score of a decided state for `player`, or None if the game goes on.
/// A loss is checked before a win.
pub fn terminal<G: GameState>(state: &G, player: G::Player) -> Option<f64> {
    if state.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if state.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}

/// Scores a state by the number of plies played to reach it.
/// This prefers the longest path through the game unless an earlier win is available.
pub fn longest_path<G: GameState>(state: &G, player: G::Player) -> f64 {
    if let Some(score) = terminal(state, player) {
        return score;
    }

    f64::from(state.move_count())
}

/// Returns a high score if `player` stands on a cell the opponent could move to next.
pub fn mobility_overlap<G: GameState>(state: &G, player: G::Player) -> f64 {
    if let Some(score) = terminal(state, player) {
        return score;
    }

    let location = match state.player_location(player) {
        Some(location) => location,
        None => return UNCONTESTED,
    };

    let contested = state
        .legal_moves_for(state.opponent(player))
        .into_iter()
        .any(|move_| Into::<Location>::into(move_) == location);

    if contested {
        CONTESTED
    } else {
        UNCONTESTED
    }
}

/// Negative squared distance to the opponent. The agent tries to stay close.
/// Unplaced players have no distance and score 0.
pub fn proximity<G: GameState>(state: &G, player: G::Player) -> f64 {
    if let Some(score) = terminal(state, player) {
        return score;
    }

    let own = state.player_location(player);
    let theirs = state.player_location(state.opponent(player));

    match (own, theirs) {
        (Some((row, col)), Some((their_row, their_col))) => {
            let d_row = f64::from(their_row - row);
            let d_col = f64::from(their_col - col);
            -(d_row * d_row + d_col * d_col)
        }
        _ => 0.0,
    }
}

/// Longest path plus own mobility, minus twice the opponent's mobility.
pub fn weighted_mobility<G: GameState>(state: &G, player: G::Player) -> f64 {
    if let Some(score) = terminal(state, player) {
        return score;
    }

    let own_moves = state.legal_moves_for(player).len() as f64;
    let their_moves = state.legal_moves_for(state.opponent(player)).len() as f64;

    f64::from(state.move_count()) + own_moves - OPPONENT_MOBILITY_WEIGHT * their_moves
}

/// The closed set of built-in evaluation strategies.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Heuristic {
    #[default]
    LongestPath,
    MobilityOverlap,
    Proximity,
    WeightedMobility,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::LongestPath,
        Heuristic::MobilityOverlap,
        Heuristic::Proximity,
        Heuristic::WeightedMobility,
    ];

    /// Returns the evaluation function for this heuristic over any game.
    pub fn score_fn<G: GameState>(self) -> ScoreFn<G> {
        match self {
            Heuristic::LongestPath => longest_path::<G>,
            Heuristic::MobilityOverlap => mobility_overlap::<G>,
            Heuristic::Proximity => proximity::<G>,
            Heuristic::WeightedMobility => weighted_mobility::<G>,
        }
    }

    pub fn evaluate<G: GameState>(self, state: &G, player: G::Player) -> f64 {
        (self.score_fn::<G>())(state, player)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Heuristic::LongestPath => "longest_path",
            Heuristic::MobilityOverlap => "mobility_overlap",
            Heuristic::Proximity => "proximity",
            Heuristic::WeightedMobility => "weighted_mobility",
        }
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Heuristic {
    type Err = error::Error;

    fn from_str(s: &str) -> error::Result<Self> {
        let trimmed = s.trim();
        Heuristic::ALL
            .into_iter()
            .find(|heuristic| heuristic.as_str() == trimmed)
            .ok_or_else(|| (ErrorKind::ParseHeuristicMalformed, trimmed).into())
    }
}
