//! Hand built game trees for unit tests.

use std::error;
use std::fmt::{self, Display};

use crate::evaluation::terminal;
use crate::game::{GameState, Location};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub(crate) enum Side {
    Max,
    Min,
}

impl Side {
    pub(crate) fn other(self) -> Self {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Max => 0,
            Side::Min => 1,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Illegal(pub(crate) Location);

impl Display for Illegal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "move {:?} is not legal", self.0)
    }
}

impl error::Error for Illegal {}

/// A node of an explicit game tree. Moves are the cells `(i, 0)` for the i-th child.
#[derive(Debug, Clone)]
pub(crate) struct Mock {
    pub(crate) active: Side,
    pub(crate) value: f64,
    pub(crate) loser: Option<Side>,
    pub(crate) locations: [Option<Location>; 2],
    pub(crate) move_count: u32,
    pub(crate) idle_moves: Vec<Location>,
    pub(crate) children: Vec<Mock>,
}

impl Mock {
    pub(crate) fn leaf(value: f64) -> Self {
        Self {
            active: Side::Max,
            value,
            loser: None,
            locations: [None, None],
            move_count: 0,
            idle_moves: Vec::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn lost_by(side: Side) -> Self {
        Self {
            loser: Some(side),
            ..Self::leaf(0.0)
        }
    }

    pub(crate) fn node(children: Vec<Mock>) -> Self {
        Self {
            children,
            ..Self::leaf(0.0)
        }
    }

    /// Assigns alternating active players and move counts from this node down.
    pub(crate) fn rooted(mut self, active: Side) -> Self {
        self.assign(active, 0);
        self
    }

    fn assign(&mut self, active: Side, ply: u32) {
        self.active = active;
        self.move_count = ply;
        for child in &mut self.children {
            child.assign(active.other(), ply + 1);
        }
    }
}

impl GameState for Mock {
    type Player = Side;
    type Move = Location;
    type Error = Illegal;

    fn active_player(&self) -> Side {
        self.active
    }

    fn opponent(&self, player: Side) -> Side {
        player.other()
    }

    fn legal_moves_for(&self, player: Side) -> Vec<Location> {
        if player == self.active {
            (0..self.children.len() as i32).map(|i| (i, 0)).collect()
        } else {
            self.idle_moves.clone()
        }
    }

    fn forecast(&self, move_: Location) -> Result<Self, Illegal> {
        let (index, col) = move_;
        self.children
            .get(index as usize)
            .filter(|_| col == 0 && index >= 0)
            .cloned()
            .ok_or(Illegal(move_))
    }

    fn is_winner(&self, player: Side) -> bool {
        self.loser == Some(player.other())
    }

    fn is_loser(&self, player: Side) -> bool {
        self.loser == Some(player)
    }

    fn player_location(&self, player: Side) -> Option<Location> {
        self.locations[player.index()]
    }

    fn move_count(&self) -> u32 {
        self.move_count
    }
}

/// Leaf value from Max's point of view, negated for Min.
pub(crate) fn value_of(state: &Mock, player: Side) -> f64 {
    terminal(state, player).unwrap_or(match player {
        Side::Max => state.value,
        Side::Min => -state.value,
    })
}
