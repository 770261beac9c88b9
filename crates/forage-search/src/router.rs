use std::collections::{HashSet, VecDeque};

use forage_core::{ForageState, GoalSpace, Path, Point};
use log::trace;

use crate::deadline::Deadline;
use crate::frontier::{ROOT, SearchTree};

/// Shortest path from `from` to the cell `target` by breadth-first search.
///
/// Goal bookkeeping is carried along in the states but ignored for
/// deduplication: each position is expanded at most once. Returns `None`
/// when the target is unreachable or `deadline` passes first, and an empty
/// path when `from` already stands on `target`.
pub fn route_to<S: GoalSpace>(
    space: &S,
    from: &ForageState,
    target: Point,
    deadline: &Deadline,
) -> Option<Path> {
    let mut tree = SearchTree::with_root(from.clone());
    let mut seen: HashSet<Point> = HashSet::from([from.pos]);
    let mut queue: VecDeque<usize> = VecDeque::from([ROOT]);
    let mut buf = Vec::with_capacity(4);

    while let Some(ni) = queue.pop_front() {
        if deadline.expired() {
            trace!("router: deadline reached before {target}");
            return None;
        }
        if tree.get(ni).state.pos == target {
            return Some(tree.path(ni));
        }

        buf.clear();
        space.successors(&tree.get(ni).state, &mut buf);
        for succ in buf.drain(..) {
            if !seen.insert(succ.state.pos) {
                continue;
            }
            let ci = tree.push(ni, succ.action, succ.state, succ.cost);
            queue.push_back(ci);
        }
    }

    None
}
