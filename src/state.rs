use crate::board::Board;
use crate::data::Pos;
use crate::moves::Moves;

/// One search node. Immutable once constructed - the simulator copies the
/// predecessor's board instead of mutating it.
#[derive(Debug, Clone)]
pub struct State {
    pub player_pos: Pos,
    pub board: Board,
    pub moves: Moves,
    pub cost: i32,
}

impl State {
    pub(crate) fn new(player_pos: Pos, board: Board, moves: Moves, cost: i32) -> State {
        State {
            player_pos,
            board,
            moves,
            cost,
        }
    }

    pub(crate) fn key(&self) -> StateKey {
        StateKey {
            player_pos: self.player_pos,
            walls: self.board.wall_bits(),
        }
    }
}

/// Canonical state identifier: player position plus the entire current wall
/// set, pre-search walls included (it intentionally distinguishes different
/// starting boards). Two states are equivalent iff both parts match; empty
/// cells and the move history carry no identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    player_pos: Pos,
    walls: Vec<u64>,
}
