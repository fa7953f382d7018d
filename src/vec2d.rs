use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Flat row-major storage - positions use signed coords so callers can step
/// off the edge and get `None` from `get` instead of wrapping.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Copy> Vec2d<T> {
    pub(crate) fn new(width: usize, height: usize, default: T) -> Self {
        assert!(width > 0 && height > 0);

        Vec2d {
            data: vec![default; width * height],
            width,
            height,
        }
    }

    pub(crate) fn from_rows(rows: &[Vec<T>]) -> Self {
        assert!(!rows.is_empty() && !rows[0].is_empty());

        let width = rows[0].len();
        let mut data = Vec::with_capacity(rows.len() * width);
        for row in rows {
            assert_eq!(row.len(), width);
            data.extend_from_slice(row);
        }
        Vec2d {
            data,
            width,
            height: rows.len(),
        }
    }
}

impl<T> Vec2d<T> {
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if pos.x < 0
            || pos.y < 0
            || pos.x >= self.width as i32
            || pos.y >= self.height as i32
        {
            return None;
        }
        Some(&self.data[self.index_of(pos)])
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    fn index_of(&self, pos: Pos) -> usize {
        pos.y as usize * self.width + pos.x as usize
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &T {
        let index = self.index_of(pos);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        let index = self.index_of(pos);
        &mut self.data[index]
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.width) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
