use std::fmt::{self, Debug, Display, Formatter};

use rand::Rng;

use crate::data::{Pos, MAX_SIZE};
use crate::vec2d::Vec2d;

const MIN_SIZE: usize = 8;
const MIN_PYRAMIDS: usize = 1;
const MAX_PYRAMIDS: usize = 8;
/// Centers may fall this far outside the grid so that slopes of off-board
/// peaks still reach onto it.
const BAND: i32 = 4;
const TOP_LEVEL: f64 = 9.0;
const SLOPE: f64 = 1.2;

/// Synthetic elevation field: a few randomly centered pyramids, combined by
/// element-wise maximum (overlapping peaks do not stack - the tallest local
/// pyramid wins). Fixed for the whole run, independent of board mutations.
#[derive(Clone, PartialEq, Eq)]
pub struct Elevation {
    heights: Vec2d<i32>,
}

impl Elevation {
    /// Generates the field. `width`/`height` clamp to [8, 60],
    /// `pyramid_count` to [1, 8]. The generator is explicit so runs are
    /// reproducible from a seed.
    pub fn generate<R: Rng>(
        width: usize,
        height: usize,
        pyramid_count: usize,
        rng: &mut R,
    ) -> Elevation {
        let width = clamp_size(width);
        let height = clamp_size(height);
        let pyramid_count = pyramid_count.max(MIN_PYRAMIDS).min(MAX_PYRAMIDS);

        let mut heights = Vec2d::new(width, height, 0);
        for _ in 0..pyramid_count {
            let cx = rng.gen_range(-BAND..width as i32 + BAND);
            let cy = rng.gen_range(-BAND..height as i32 + BAND);

            for y in 0..height as i32 {
                for x in 0..width as i32 {
                    let h = pyramid_height(cx, cy, x, y);
                    let cell = &mut heights[Pos::new(x, y)];
                    if h > *cell {
                        *cell = h;
                    }
                }
            }
        }
        Elevation { heights }
    }

    /// Builds a model from explicit heights - for tests and embedders that
    /// bring their own terrain. Rows must be rectangular and non-negative.
    pub fn from_grid(rows: &[Vec<i32>]) -> Elevation {
        assert!(rows.iter().all(|row| row.iter().all(|&h| h >= 0)));
        Elevation {
            heights: Vec2d::from_rows(rows),
        }
    }

    pub fn grid_width(&self) -> usize {
        self.heights.width()
    }

    pub fn grid_height(&self) -> usize {
        self.heights.height()
    }

    /// Height of a cell, -1 out of bounds.
    pub fn height(&self, x: i32, y: i32) -> i32 {
        match self.heights.get(Pos::new(x, y)) {
            Some(&h) => h,
            None => -1,
        }
    }

    /// Cost of entering a cell: height + 1, so every step costs at least 1
    /// and the search space has no zero-cost cycles. -1 out of bounds.
    pub fn movement_cost(&self, x: i32, y: i32) -> i32 {
        match self.heights.get(Pos::new(x, y)) {
            Some(&h) => h + 1,
            None => -1,
        }
    }
}

fn clamp_size(size: usize) -> usize {
    size.max(MIN_SIZE).min(MAX_SIZE)
}

fn pyramid_height(cx: i32, cy: i32, x: i32, y: i32) -> i32 {
    let dx = f64::from(cx - x);
    let dy = f64::from(cy - y);
    let distance = (dx * dx + dy * dy).sqrt();
    let height = (TOP_LEVEL - distance * SLOPE).floor() as i32;
    height.max(0)
}

impl Display for Elevation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..self.grid_height() as i32 {
            for x in 0..self.grid_width() as i32 {
                let h = self.height(x, y);
                if h == 0 {
                    write!(f, ".")?;
                } else if h > 9 {
                    write!(f, "*")?;
                } else {
                    write!(f, "{}", h)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Elevation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
