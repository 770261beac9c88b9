//! Immutable goal sets and the composite multi-goal search state.

use std::fmt;
use std::sync::Arc;

use crate::geom::Point;

/// An immutable set of goal cells.
///
/// Goals are kept sorted in row-major order and deduplicated, so two sets
/// holding the same cells compare and hash equal no matter how they were
/// built. Cloning is cheap: the backing slice is shared. The set never
/// changes in place; [`without`](Self::without) returns a new value.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct GoalSet {
    cells: Arc<[Point]>,
}

impl GoalSet {
    /// Build a goal set from any collection of cells.
    pub fn new(cells: impl IntoIterator<Item = Point>) -> Self {
        let mut v: Vec<Point> = cells.into_iter().collect();
        v.sort_unstable();
        v.dedup();
        Self { cells: v.into() }
    }

    /// The empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of goals left.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is one of the goals.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.cells.binary_search(&p).is_ok()
    }

    /// A copy of this set with `p` removed. Returns a clone sharing the same
    /// storage when `p` is not a goal.
    pub fn without(&self, p: Point) -> Self {
        match self.cells.binary_search(&p) {
            Ok(i) => {
                let mut v = Vec::with_capacity(self.cells.len() - 1);
                v.extend_from_slice(&self.cells[..i]);
                v.extend_from_slice(&self.cells[i + 1..]);
                Self { cells: v.into() }
            }
            Err(_) => self.clone(),
        }
    }

    /// Goals in canonical (row-major) order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.cells.iter()
    }

    /// Goals as a sorted slice.
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.cells
    }

    /// The goal closest to `from` by Manhattan distance, with that distance.
    /// Ties go to the first goal in canonical order.
    pub fn nearest(&self, from: Point) -> Option<(Point, i32)> {
        self.cells
            .iter()
            .map(|&g| (g, from.manhattan(g)))
            .min_by_key(|&(_, d)| d)
    }

    /// Goals ordered by increasing Manhattan distance from `from`. Ties keep
    /// canonical order.
    pub fn by_distance(&self, from: Point) -> Vec<Point> {
        let mut v = self.cells.to_vec();
        v.sort_by_key(|&g| from.manhattan(g));
        v
    }
}

impl fmt::Debug for GoalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.cells.iter()).finish()
    }
}

impl FromIterator<Point> for GoalSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a GoalSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GoalSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.cells.as_ref().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GoalSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cells = Vec::<Point>::deserialize(deserializer)?;
        Ok(GoalSet::new(cells))
    }
}

// ---------------------------------------------------------------------------
// ForageState
// ---------------------------------------------------------------------------

/// Multi-goal search state: the agent position plus the goals not yet
/// visited.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForageState {
    pub pos: Point,
    pub remaining: GoalSet,
}

impl ForageState {
    pub fn new(pos: Point, remaining: GoalSet) -> Self {
        Self { pos, remaining }
    }

    /// The state after the agent steps onto `to`, consuming a goal there.
    pub fn step_to(&self, to: Point) -> Self {
        Self {
            pos: to,
            remaining: self.remaining.without(to),
        }
    }

    /// Whether every goal has been visited.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }
}
