use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Boards and elevation grids never exceed this on either axis.
pub const MAX_SIZE: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }

    /// Manhattan distance.
    pub fn dist(self, other: Pos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        Pos {
            x: self.x + dir.dx(),
            y: self.y + dir.dy(),
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Declaration order matches the move key alphabet: W, A, S, D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Left,
    Down,
    Right,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Left, Dir::Down, Dir::Right];

impl Dir {
    pub fn key(self) -> char {
        match self {
            Dir::Up => 'W',
            Dir::Left => 'A',
            Dir::Down => 'S',
            Dir::Right => 'D',
        }
    }

    pub fn dx(self) -> i32 {
        match self {
            Dir::Left => -1,
            Dir::Right => 1,
            Dir::Up | Dir::Down => 0,
        }
    }

    pub fn dy(self) -> i32 {
        match self {
            Dir::Up => -1,
            Dir::Down => 1,
            Dir::Left | Dir::Right => 0,
        }
    }

    pub fn from_key(key: char) -> Result<Dir, BadKey> {
        match key {
            'W' => Ok(Dir::Up),
            'A' => Ok(Dir::Left),
            'S' => Ok(Dir::Down),
            'D' => Ok(Dir::Right),
            _ => Err(BadKey(key)),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Target,
    Player,
}

impl Cell {
    pub fn value(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::Wall => 1,
            Cell::Target => 2,
            Cell::Player => 3,
        }
    }

    pub fn from_value(value: i32) -> Result<Cell, BadValue> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Wall),
            2 => Ok(Cell::Target),
            3 => Ok(Cell::Player),
            _ => Err(BadValue(value)),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadKey(pub char);

impl Display for BadKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid direction key: {}", self.0)
    }
}

impl Error for BadKey {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadValue(pub i32);

impl Display for BadValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid cell value: {}", self.0)
    }
}

impl Error for BadValue {}
