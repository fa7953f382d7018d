use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::board::Board;
use crate::data::{Cell, Pos, MAX_SIZE};
use crate::level::Level;
use crate::vec2d::Vec2d;

#[derive(Debug, PartialEq, Eq)]
pub enum ParserErr {
    Token(usize, usize),
    Value(usize, usize, i32),
    RowLength(usize),
    TooLarge,
    NoPlayer,
    MultiplePlayers,
    NoTarget,
    MultipleTargets,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Token(r, c) => write!(f, "Not an integer at pos: [{}, {}]", r, c),
            ParserErr::Value(r, c, v) => {
                write!(f, "Invalid cell value {} at pos: [{}, {}]", v, r, c)
            }
            ParserErr::RowLength(r) => write!(f, "Wrong row length on row {}", r),
            ParserErr::TooLarge => write!(f, "Board larger than {} rows/columns", MAX_SIZE),
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoTarget => write!(f, "No target"),
            ParserErr::MultipleTargets => write!(f, "More than one target"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the numeric level format: one row per line, whitespace-separated
/// integers, 0 = empty, 1 = wall, 2 = target, 3 = player.
pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();

    let mut grid: Vec<Vec<Cell>> = Vec::new();
    let mut player_pos = None;
    let mut target_pos = None;

    for (r, line) in level.lines().enumerate() {
        // grid.len(), not r - blank lines don't produce a row, so the raw
        // line index can run ahead of the y coord the row will get
        if grid.len() >= MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        let y = grid.len() as i32;
        let mut row = Vec::new();
        for (c, token) in line.split_whitespace().enumerate() {
            if c >= MAX_SIZE {
                return Err(ParserErr::TooLarge);
            }
            let value: i32 = token.parse().map_err(|_| ParserErr::Token(r, c))?;
            let cell = Cell::from_value(value).map_err(|_| ParserErr::Value(r, c, value))?;
            let pos = Pos::new(c as i32, y);

            match cell {
                Cell::Player => {
                    if player_pos.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player_pos = Some(pos);
                }
                Cell::Target => {
                    if target_pos.is_some() {
                        return Err(ParserErr::MultipleTargets);
                    }
                    target_pos = Some(pos);
                }
                Cell::Empty | Cell::Wall => {}
            }
            row.push(cell);
        }
        if row.is_empty() {
            continue; // blank line, e.g. between levels in hand-edited files
        }
        if !grid.is_empty() && row.len() != grid[0].len() {
            return Err(ParserErr::RowLength(r));
        }
        grid.push(row);
    }

    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;
    let target_pos = target_pos.ok_or(ParserErr::NoTarget)?;
    let board = Board::new(Vec2d::from_rows(&grid));
    Ok(Level::new(board, player_pos, target_pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_empty() {
        assert_failure("", ParserErr::NoPlayer);
    }

    #[test]
    fn fail_no_player() {
        let level = r"
0 0 0
0 0 2
";
        assert_failure(level, ParserErr::NoPlayer);
    }

    #[test]
    fn fail_no_target() {
        let level = r"
0 0 0
0 0 3
";
        assert_failure(level, ParserErr::NoTarget);
    }

    #[test]
    fn fail_multiple_players() {
        let level = r"
3 0 3
0 0 2
";
        assert_failure(level, ParserErr::MultiplePlayers);
    }

    #[test]
    fn fail_multiple_targets() {
        let level = r"
3 2 0
0 0 2
";
        assert_failure(level, ParserErr::MultipleTargets);
    }

    #[test]
    fn fail_bad_token() {
        let level = r"
3 x 0
0 0 2
";
        assert_failure(level, ParserErr::Token(0, 1));
    }

    #[test]
    fn fail_bad_value() {
        let level = r"
3 0 0
0 7 2
";
        assert_failure(level, ParserErr::Value(1, 1, 7));
    }

    #[test]
    fn fail_ragged_rows() {
        let level = r"
3 0 0
0 2
";
        assert_failure(level, ParserErr::RowLength(1));
    }

    #[test]
    fn fail_too_wide() {
        let mut row = "3 2".to_string();
        for _ in 0..60 {
            row.push_str(" 0");
        }
        assert_failure(&row, ParserErr::TooLarge);
    }

    #[test]
    fn fail_too_tall() {
        let mut level = "3 2\n".to_string();
        for _ in 0..60 {
            level.push_str("0 0\n");
        }
        assert_failure(&level, ParserErr::TooLarge);
    }

    #[test]
    fn simplest() {
        let level = r"
3 0 2
";
        assert_success(level, (0, 0), (2, 0));
    }

    #[test]
    fn blank_interior_line_keeps_positions_aligned() {
        // a stray blank line must not shift the rows below it - the player's
        // y coord has to match the row the board actually stores
        let level: Level = "0 0 2\n\n3 0 0\n".parse().unwrap();
        assert_eq!(level.board.height(), 2);
        assert_eq!(level.player_pos, Pos::new(0, 1));
        assert_eq!(level.target_pos, Pos::new(2, 0));
        assert_eq!(level.board.cell(level.player_pos), Some(Cell::Player));
        assert_eq!(level.board.cell(level.target_pos), Some(Cell::Target));
    }

    #[test]
    fn walls_and_positions() {
        let level = r"
0 1 0 0
0 3 1 0
0 0 0 2
";
        assert_success(level, (1, 1), (3, 2));
    }

    fn assert_failure(input: &str, expected_err: ParserErr) {
        assert_eq!(input.parse::<Level>().unwrap_err(), expected_err);
    }

    fn assert_success(input: &str, player: (i32, i32), target: (i32, i32)) {
        let level: Level = input.parse().unwrap();
        assert_eq!(level.player_pos, Pos::new(player.0, player.1));
        assert_eq!(level.target_pos, Pos::new(target.0, target.1));
        assert_eq!(level.to_string(), input.trim_start_matches('\n'));
    }
}
