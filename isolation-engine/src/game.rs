//! The contract between the search core and an external board engine.
//!
//! The core never implements game rules. Any board that can list legal moves,
//! forecast successor states, and answer win/loss queries can be searched.

use std::error;
use std::fmt::Debug;
use std::hash::Hash;

/// A board cell as (row, col).
pub type Location = (i32, i32);

/// An immutable snapshot of a two player, zero-sum, perfect information game.
///
/// Forecasting a move returns a new independent state. The state a move was
/// forecast from is never changed, so a search can branch from it freely.
pub trait GameState: Sized {
    /// Opaque token for one of exactly two competitors.
    type Player: Copy + Eq + Hash + Debug;
    /// One legal action in a given state. A move converts into the cell it targets.
    type Move: Copy + Eq + Debug + Into<Location>;
    /// Error returned by the engine when asked to forecast an illegal move.
    type Error: error::Error + Send + Sync + 'static;

    /// The player whose turn it is.
    fn active_player(&self) -> Self::Player;

    /// The competitor of `player`.
    fn opponent(&self, player: Self::Player) -> Self::Player;

    /// Ordered legal moves of the active player. Empty if there are none.
    fn legal_moves(&self) -> Vec<Self::Move> {
        self.legal_moves_for(self.active_player())
    }

    /// Ordered legal moves of `player` as if it were their turn.
    fn legal_moves_for(&self, player: Self::Player) -> Vec<Self::Move>;

    /// Returns the successor state after the active player makes `move_`.
    fn forecast(&self, move_: Self::Move) -> Result<Self, Self::Error>;

    /// True if `player` has already won in this state.
    fn is_winner(&self, player: Self::Player) -> bool;

    /// True if `player` has already lost in this state.
    fn is_loser(&self, player: Self::Player) -> bool;

    /// Cell occupied by `player`, or None if they have not been placed yet.
    fn player_location(&self, player: Self::Player) -> Option<Location>;

    /// Number of plies played to reach this state.
    fn move_count(&self) -> u32;
}
