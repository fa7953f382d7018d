use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::data::{BadKey, Dir};

/// An ordered move sequence, printed in the WASD move key alphabet so logs
/// stay replay-compatible with the external tooling.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub fn new(moves: Vec<Dir>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn add(&mut self, dir: Dir) {
        self.0.push(dir);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dir> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Dir;
    type IntoIter = std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for dir in self {
            write!(f, "{}", dir)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Moves {
    type Err = BadKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Dir::from_key).collect::<Result<_, _>>().map(Moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![Dir::Up, Dir::Left, Dir::Down, Dir::Right]);
        assert_eq!(moves.to_string(), "WASD");
        assert_eq!(format!("{:?}", moves), "WASD");
    }

    #[test]
    fn parsing_moves() {
        let moves: Moves = "SDWA".parse().unwrap();
        assert_eq!(
            moves,
            Moves::new(vec![Dir::Down, Dir::Right, Dir::Up, Dir::Left])
        );
        assert_eq!("SxD".parse::<Moves>(), Err(BadKey('x')));
        assert_eq!("".parse::<Moves>(), Ok(Moves::default()));
    }

    #[test]
    fn iterating() {
        let v = vec![Dir::Down, Dir::Right, Dir::Down];
        let moves = Moves::new(v.clone());

        let mut v2 = Vec::new();
        for &m in &moves {
            v2.push(m);
        }
        for &m in moves.iter() {
            v2.push(m);
        }
        for m in moves {
            v2.push(m);
        }

        assert_eq!(v2.len(), 9);
        for chunk in v2.chunks(3) {
            assert_eq!(chunk, &v[..]);
        }
    }
}
