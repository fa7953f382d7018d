use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::data::Pos;

/// A parsed level: the starting board plus the two distinguished cells.
/// The parser guarantees exactly one player and one target; `player_pos`
/// and `target_pos` always match the board's Player/Target cells.
#[derive(Clone)]
pub struct Level {
    pub board: Board,
    pub player_pos: Pos,
    pub target_pos: Pos,
}

impl Level {
    pub(crate) fn new(board: Board, player_pos: Pos, target_pos: Pos) -> Self {
        Level {
            board,
            player_pos,
            target_pos,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_match_board() {
        let level: Level = "0 0 0\n0 3 0\n0 0 2\n".parse().unwrap();
        assert_eq!(level.player_pos, Pos::new(1, 1));
        assert_eq!(level.target_pos, Pos::new(2, 2));
        assert_eq!(level.to_string(), "0 0 0\n0 3 0\n0 0 2\n");
        assert_eq!(format!("{:?}", level), level.to_string());
    }
}
