use std::fmt;

use itertools::Itertools;

use crate::beam::{trace, Direction, Trace};
use crate::grid::{Cell, Grid, MirrorIndex};
use crate::sweep::intersect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The beam already leaves through the goal.
    Safe,
    /// No single added mirror redirects the beam to the goal.
    Unreachable,
    /// `count` cells accept a mirror that fixes the beam; `first` is the
    /// lexicographically smallest of them.
    Fixable { count: usize, first: Cell },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Safe => write!(f, "0"),
            Outcome::Unreachable => write!(f, "-1"),
            Outcome::Fixable { count, first } => {
                write!(f, "{} {} {}", count, first.row + 1, first.col + 1)
            }
        }
    }
}

/// Cells where one added mirror joins the beam from the origin with the beam
/// traced back from the goal, sorted and without duplicates.
///
/// Empty when the beam from the origin already reaches the goal.
pub fn insertion_points(index: &MirrorIndex, grid: Grid) -> Vec<Cell> {
    let forward = trace(index, grid, grid.origin(), Direction::Right);
    if forward.reached_goal {
        return Vec::new();
    }
    let backward = trace(index, grid, grid.goal(), Direction::Left);
    crossings(&forward, &backward)
}

/// Cells shared by the two paths, sorted. A cell crossed by both pairings is
/// listed once.
fn crossings(forward: &Trace, backward: &Trace) -> Vec<Cell> {
    // A new mirror turns one path into the other wherever they cross, whichever
    // of the two runs along the row.
    intersect(&forward.horizontal, &backward.vertical)
        .into_iter()
        .chain(intersect(&backward.horizontal, &forward.vertical))
        .sorted()
        .dedup()
        .collect()
}

#[tracing::instrument(skip(index), fields(mirrors = index.len()))]
pub fn solve(index: &MirrorIndex, grid: Grid) -> Outcome {
    let forward = trace(index, grid, grid.origin(), Direction::Right);
    if forward.reached_goal {
        return Outcome::Safe;
    }

    let backward = trace(index, grid, grid.goal(), Direction::Left);
    let candidates = crossings(&forward, &backward);
    tracing::debug!(candidates = candidates.len(), "collected insertion points");

    match candidates.first() {
        Some(&first) => Outcome::Fixable {
            count: candidates.len(),
            first,
        },
        None => Outcome::Unreachable,
    }
}
