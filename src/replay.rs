use crate::board::Board;
use crate::level::Level;
use crate::moves::Moves;
use crate::simulate::simulate;
use crate::terrain::Elevation;

/// The externally visible result of a solved level: the ordered board
/// snapshots (initial state plus one per replayed move) and the total cost.
/// Search-internal states are gone by the time the run completes, so this
/// reconstruction is the single source of truth for the renderer.
#[derive(Debug, Clone)]
pub struct Replay {
    pub snapshots: Vec<Board>,
    /// Summed terrain cost of the replayed moves, or their count without a
    /// terrain model.
    pub total_cost: i32,
}

/// The zero-padded sequential name the image exporter keys snapshots by.
pub fn frame_label(index: usize) -> String {
    format!("{:04}", index)
}

/// Re-runs a winning move sequence against a fresh copy of the level's
/// original board. Stops as soon as a move reaches the target, even if the
/// sequence nominally continues.
///
/// # Panics
///
/// Panics when the terrain does not cover the board, and when a move
/// cannot be legally repeated. The search validated
/// every move, so a desync here means the board or the sequence is not the
/// one the search ran on - an internal invariant violation, not a
/// recoverable condition.
pub fn replay(level: &Level, moves: &Moves, terrain: Option<&Elevation>) -> Replay {
    if let Some(terrain) = terrain {
        crate::solver::assert_covers(terrain, &level.board);
    }

    let mut snapshots = Vec::with_capacity(moves.move_cnt() + 1);
    let mut board = level.board.clone();
    let mut player_pos = level.player_pos;
    let mut cost = 0;
    let mut replayed = 0;

    snapshots.push(board.clone());

    for &dir in moves {
        let outcome = simulate(&board, player_pos, dir, terrain).unwrap_or_else(|| {
            panic!(
                "replay desync: move {} ({}) is illegal from {}",
                replayed, dir, player_pos
            )
        });
        board = outcome.board;
        player_pos = outcome.player_pos;
        cost += outcome.cost;
        replayed += 1;
        snapshots.push(board.clone());

        if outcome.reached_target {
            break;
        }
    }

    let total_cost = match terrain {
        Some(_) => cost,
        None => replayed,
    };
    Replay {
        snapshots,
        total_cost,
    }
}
