// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod board;
pub mod config;
pub mod data;
pub mod level;
pub mod moves;
pub mod replay;
pub mod simulate;
pub mod solver;
pub mod state;
pub mod terrain;

mod fs;
mod parser;
mod vec2d;

use std::error::Error;

use crate::config::Method;
use crate::level::Level;
use crate::solver::SolverOk;
use crate::terrain::Elevation;

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(
        &self,
        method: Method,
        terrain: Option<&Elevation>,
        print_status: bool,
    ) -> SolverOk;
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::config::Method::{self, CostOptimal, MoveOptimal};

    use super::*;

    #[test]
    fn test_levels_move_optimal() {
        // (level, expected move count or None)
        let levels = [
            ("levels/01-corner.txt", Some(2)),
            ("levels/02-straight.txt", Some(1)),
            ("levels/03-detour.txt", Some(1)),
            ("levels/04-enclosed.txt", None),
            ("levels/05-open.txt", Some(2)),
        ];

        for &(level_path, expected_moves) in levels.iter() {
            let level = level_path.load_level().unwrap();
            let solver_ok = level.solve(MoveOptimal, None, false);
            match solver_ok.solution {
                Some(ref solution) => {
                    assert_eq!(
                        Some(solution.moves.move_cnt()),
                        expected_moves,
                        "{}",
                        level_path
                    );
                    // without terrain the cost is the move count
                    assert_eq!(solution.cost, expected_moves.unwrap() as i32);
                }
                None => assert_eq!(None, expected_moves, "{}", level_path),
            }
        }
    }

    #[test]
    fn test_levels_cost_optimal() {
        let levels = [
            ("levels/01-corner.txt", true),
            ("levels/02-straight.txt", true),
            ("levels/03-detour.txt", true),
            ("levels/04-enclosed.txt", false),
            ("levels/05-open.txt", true),
        ];

        for &(level_path, solvable) in levels.iter() {
            let level = level_path.load_level().unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let terrain = Elevation::generate(
                level.board.width(),
                level.board.height(),
                3,
                &mut rng,
            );
            let solver_ok = level.solve(CostOptimal, Some(&terrain), false);
            match solver_ok.solution {
                Some(ref solution) => {
                    assert!(solvable, "{}", level_path);
                    // every entered cell costs at least 1
                    assert!(solution.cost >= solution.moves.move_cnt() as i32);
                }
                None => assert!(!solvable, "{}", level_path),
            }
        }
    }

    #[test]
    fn both_methods_agree_on_solvability() {
        for level_path in &["levels/01-corner.txt", "levels/04-enclosed.txt"] {
            let level = level_path.load_level().unwrap();
            let moves = level.solve(Method::MoveOptimal, None, false);
            let cost = level.solve(Method::CostOptimal, None, false);
            assert_eq!(
                moves.solution.is_some(),
                cost.solution.is_some(),
                "{}",
                level_path
            );
        }
    }
}
