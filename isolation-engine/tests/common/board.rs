//! Isolation on a rectangular board with knight moves.
//!
//! Each player first places their piece on any open cell, then moves like a chess knight.
//! Every cell a piece has stood on is blocked for the rest of the game. The player to
//! move who has no legal move loses.

use std::error;
use std::fmt::{self, Display};

use isolation_engine::{GameState, Location};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct IllegalMove(pub Location);

impl Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "illegal move to {:?}", self.0)
    }
}

impl error::Error for IllegalMove {}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
    locations: [Option<Location>; 2],
    active: Player,
    move_count: u32,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            blocked: vec![false; (width * height) as usize],
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }

    /// Plays a sequence of moves from an empty board, panicking on an illegal one.
    pub fn from_moves(width: i32, height: i32, moves: &[Location]) -> Self {
        let mut board = Self::new(width, height);
        for &move_ in moves {
            board = board.forecast(move_).unwrap();
        }
        board
    }

    pub fn is_blocked(&self, (row, col): Location) -> bool {
        self.blocked[(row * self.width + col) as usize]
    }

    fn in_bounds(&self, (row, col): Location) -> bool {
        (0..self.height).contains(&row) && (0..self.width).contains(&col)
    }

    fn is_open(&self, cell: Location) -> bool {
        self.in_bounds(cell) && !self.is_blocked(cell)
    }

    fn has_moves(&self, player: Player) -> bool {
        !self.legal_moves_for(player).is_empty()
    }
}

impl GameState for Board {
    type Player = Player;
    type Move = Location;
    type Error = IllegalMove;

    fn active_player(&self) -> Player {
        self.active
    }

    fn opponent(&self, player: Player) -> Player {
        player.other()
    }

    fn legal_moves_for(&self, player: Player) -> Vec<Location> {
        match self.locations[player.index()] {
            None => (0..self.height)
                .flat_map(|row| (0..self.width).map(move |col| (row, col)))
                .filter(|&cell| !self.is_blocked(cell))
                .collect(),
            Some((row, col)) => KNIGHT_OFFSETS
                .iter()
                .map(|(d_row, d_col)| (row + d_row, col + d_col))
                .filter(|&cell| self.is_open(cell))
                .collect(),
        }
    }

    fn forecast(&self, move_: Location) -> Result<Self, IllegalMove> {
        if !self.legal_moves().contains(&move_) {
            return Err(IllegalMove(move_));
        }

        let mut next = self.clone();
        let (row, col) = move_;
        next.blocked[(row * self.width + col) as usize] = true;
        next.locations[self.active.index()] = Some(move_);
        next.active = self.active.other();
        next.move_count += 1;
        Ok(next)
    }

    fn is_winner(&self, player: Player) -> bool {
        player != self.active && !self.has_moves(self.active)
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active && !self.has_moves(self.active)
    }

    fn player_location(&self, player: Player) -> Option<Location> {
        self.locations[player.index()]
    }

    fn move_count(&self) -> u32 {
        self.move_count
    }
}

/// A 7x7 board six plies in, Player::One to move.
pub fn midgame() -> Board {
    Board::from_moves(7, 7, &[(3, 3), (0, 0), (1, 2), (2, 1), (3, 1), (4, 2)])
}

/// Player::One to move on a 7x7 board, at most 7 plies from the end.
/// Only the last of its legal moves, (4, 3), wins against perfect play.
pub fn endgame() -> Board {
    Board::from_moves(
        7,
        7,
        &[
            (0, 0),
            (6, 6),
            (1, 2),
            (4, 5),
            (3, 3),
            (6, 4),
            (5, 4),
            (5, 2),
            (6, 2),
            (4, 4),
            (4, 1),
            (6, 3),
            (2, 0),
            (4, 2),
            (3, 2),
            (6, 1),
            (5, 3),
            (4, 0),
            (3, 4),
            (2, 1),
            (1, 3),
            (0, 2),
            (2, 5),
            (2, 3),
            (0, 6),
            (1, 5),
            (1, 4),
            (0, 3),
            (2, 2),
            (2, 4),
        ],
    )
}

/// An engine that refuses every forecast, breaking its own legal move contract.
#[derive(Debug, Clone)]
pub struct Refusing(pub Board);

impl GameState for Refusing {
    type Player = Player;
    type Move = Location;
    type Error = IllegalMove;

    fn active_player(&self) -> Player {
        self.0.active_player()
    }

    fn opponent(&self, player: Player) -> Player {
        self.0.opponent(player)
    }

    fn legal_moves_for(&self, player: Player) -> Vec<Location> {
        self.0.legal_moves_for(player)
    }

    fn forecast(&self, move_: Location) -> Result<Self, IllegalMove> {
        Err(IllegalMove(move_))
    }

    fn is_winner(&self, player: Player) -> bool {
        self.0.is_winner(player)
    }

    fn is_loser(&self, player: Player) -> bool {
        self.0.is_loser(player)
    }

    fn player_location(&self, player: Player) -> Option<Location> {
        self.0.player_location(player)
    }

    fn move_count(&self) -> u32 {
        self.0.move_count()
    }
}
