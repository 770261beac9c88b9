//! A bounded grid of wall flags.
//!
//! [`WallGrid`] answers the only question the search layer asks of the
//! world: can the agent stand on this cell? Cells outside the bounds are
//! reported as walls.

use std::fmt;

use crate::geom::{Point, Range};

#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallGrid {
    walls: Vec<bool>,
    bounds: Range,
}

impl WallGrid {
    /// Create an open grid (no walls) of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            walls: vec![false; bounds.len()],
            bounds,
        }
    }

    /// Create a grid whose outermost ring of cells is wall.
    pub fn bordered(width: i32, height: i32) -> Self {
        let mut g = Self::new(width, height);
        for p in g.bounds.iter() {
            if p.x == 0 || p.y == 0 || p.x == width - 1 || p.y == height - 1 {
                g.set_wall(p, true);
            }
        }
        g
    }

    /// Returns the bounding range of this grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.bounds.width() + p.x) as usize)
    }

    /// Whether `p` is a wall. Out-of-bounds points are walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        match self.index(p) {
            Some(i) => self.walls[i],
            None => true,
        }
    }

    /// Whether the agent may stand on `p`.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        !self.is_wall(p)
    }

    /// Set or clear the wall at `p`. Does nothing if out of bounds.
    pub fn set_wall(&mut self, p: Point, wall: bool) {
        if let Some(i) = self.index(p) {
            self.walls[i] = wall;
        }
    }

    /// Number of passable cells.
    pub fn open_cells(&self) -> usize {
        self.walls.iter().filter(|w| !**w).count()
    }
}

impl fmt::Debug for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WallGrid {}", self.bounds)?;
        for y in 0..self.height() {
            for x in 0..self.width() {
                let c = if self.is_wall(Point::new(x, y)) { '%' } else { ' ' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
