use crate::board::Board;
use crate::data::{Cell, Dir, Pos};
use crate::terrain::Elevation;

#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub board: Board,
    pub player_pos: Pos,
    /// Summed terrain cost of every cell the slide entered, the target cell
    /// included. 0 without a terrain model.
    pub cost: i32,
    pub reached_target: bool,
}

/// Simulates one slide: the player pushes off (the starting cell becomes a
/// wall for good), advances until the next cell is a wall or out of bounds,
/// and walls every traversed cell behind it. Entering the target stops the
/// slide immediately and the target is not walled.
///
/// Returns `None` when the very first step is blocked - an illegal move,
/// not an error. The input board is never touched; the outcome carries an
/// independent copy.
pub fn simulate(
    board: &Board,
    player_pos: Pos,
    dir: Dir,
    terrain: Option<&Elevation>,
) -> Option<MoveOutcome> {
    let mut board = board.clone();
    let mut pos = player_pos;
    let mut cost = 0;
    let mut moved = false;
    let mut reached_target = false;

    board.set(pos, Cell::Wall);

    loop {
        let next = pos + dir;
        if !board.is_free(next) {
            break;
        }
        let entering_target = board.cell(next) == Some(Cell::Target);
        if let Some(terrain) = terrain {
            cost += terrain.movement_cost(next.x, next.y);
        }
        pos = next;
        moved = true;
        if entering_target {
            reached_target = true;
            break;
        }
        board.set(pos, Cell::Wall);
    }

    if !moved {
        return None;
    }

    board.set(pos, Cell::Player);
    Some(MoveOutcome {
        board,
        player_pos: pos,
        cost,
        reached_target,
    })
}
