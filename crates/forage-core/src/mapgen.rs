//! Random layout generation for benchmarks and randomized tests.
//!
//! [`LayoutGen`] scatters walls over the interior of a bordered grid, then
//! picks an open start cell and a number of distinct open goal cells.
//! Generated layouts are not guaranteed to be connected; goals may be walled
//! off.

use rand::{Rng, RngExt};

use crate::geom::Point;
use crate::goals::GoalSet;
use crate::grid::WallGrid;
use crate::layout::Layout;

/// Random layout generator.
pub struct LayoutGen<R: Rng> {
    pub rng: R,
    /// Probability that an interior cell becomes a wall, in `[0, 1]`.
    pub wall_density: f64,
}

impl<R: Rng> LayoutGen<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            wall_density: 0.2,
        }
    }

    pub fn with_wall_density(mut self, density: f64) -> Self {
        self.wall_density = density.clamp(0.0, 1.0);
        self
    }

    /// Generate a `width` × `height` layout with up to `goals` goal cells.
    ///
    /// Fewer goals are placed when there are not enough open cells.
    /// Dimensions below 3 are raised to 3 so the border leaves one open cell.
    pub fn generate(&mut self, width: i32, height: i32, goals: usize) -> Layout {
        let width = width.max(3);
        let height = height.max(3);
        let mut walls = WallGrid::bordered(width, height);
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                if self.rng.random_bool(self.wall_density) {
                    walls.set_wall(Point::new(x, y), true);
                }
            }
        }

        let start = Point::new(
            self.rng.random_range(1..width - 1),
            self.rng.random_range(1..height - 1),
        );
        walls.set_wall(start, false);

        let mut open: Vec<Point> = walls
            .bounds()
            .iter()
            .filter(|&p| p != start && walls.passable(p))
            .collect();
        let n = goals.min(open.len());
        // Partial Fisher-Yates: the first `n` slots end up a uniform sample.
        for i in 0..n {
            let j = self.rng.random_range(i..open.len());
            open.swap(i, j);
        }
        open.truncate(n);

        Layout {
            walls,
            start,
            goals: GoalSet::new(open),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_layout_is_consistent() {
        let mut lg = LayoutGen::new(StdRng::seed_from_u64(7)).with_wall_density(0.3);
        for _ in 0..20 {
            let l = lg.generate(12, 9, 6);
            assert_eq!(l.walls.width(), 12);
            assert_eq!(l.walls.height(), 9);
            assert!(l.walls.passable(l.start));
            assert!(!l.goals.contains(l.start));
            assert!(l.goals.len() <= 6);
            for &g in &l.goals {
                assert!(l.walls.passable(g));
            }
            for x in 0..12 {
                assert!(l.walls.is_wall(Point::new(x, 0)));
                assert!(l.walls.is_wall(Point::new(x, 8)));
            }
        }
    }

    #[test]
    fn open_grid_places_all_goals() {
        let mut lg = LayoutGen::new(StdRng::seed_from_u64(1)).with_wall_density(0.0);
        let l = lg.generate(6, 6, 10);
        assert_eq!(l.goals.len(), 10);
        assert_eq!(l.walls.open_cells(), 16);
    }

    #[test]
    fn tiny_grid_caps_goal_count() {
        let mut lg = LayoutGen::new(StdRng::seed_from_u64(3));
        let l = lg.generate(1, 1, 4);
        assert_eq!(l.walls.width(), 3);
        assert_eq!(l.start, Point::new(1, 1));
        assert!(l.goals.is_empty());
    }

    #[test]
    fn same_seed_same_layout() {
        let a = LayoutGen::new(StdRng::seed_from_u64(42)).generate(10, 10, 5);
        let b = LayoutGen::new(StdRng::seed_from_u64(42)).generate(10, 10, 5);
        assert_eq!(a, b);
    }
}
