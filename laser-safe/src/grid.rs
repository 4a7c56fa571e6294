use std::collections::BTreeMap;

/// Grid dimensions. Both must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub rows: i64,
    pub cols: i64,
}

impl Grid {
    pub fn new(rows: i64, cols: i64) -> Self {
        Self { rows, cols }
    }

    /// Cell the beam is launched into, heading right.
    pub fn origin(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// Cell next to the detector, exited rightward on success.
    pub fn goal(&self) -> Cell {
        Cell::new(self.rows - 1, self.cols - 1)
    }
}

/// Zero-based grid position. Field order gives lexicographic `(row, col)` ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

impl Cell {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `/`, ends in the top-right and bottom-left corners.
    Slash,
    /// `\`, ends in the top-left and bottom-right corners.
    Backslash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mirror {
    pub cell: Cell,
    pub orientation: Orientation,
}

impl Mirror {
    pub fn slash(row: i64, col: i64) -> Self {
        Self {
            cell: Cell::new(row, col),
            orientation: Orientation::Slash,
        }
    }

    pub fn backslash(row: i64, col: i64) -> Self {
        Self {
            cell: Cell::new(row, col),
            orientation: Orientation::Backslash,
        }
    }
}

type Lane = BTreeMap<i64, Orientation>;

/// Mirrors bucketed per row and per column, each bucket ordered by position.
///
/// Built once and only read while tracing, so one index can back any number of
/// `solve` calls.
#[derive(Debug, Clone, Default)]
pub struct MirrorIndex {
    by_row: BTreeMap<i64, Lane>,
    by_col: BTreeMap<i64, Lane>,
}

impl MirrorIndex {
    pub fn new(mirrors: impl IntoIterator<Item = Mirror>) -> Self {
        let mut index = Self::default();
        for mirror in mirrors {
            index.insert(mirror);
        }
        index
    }

    fn insert(&mut self, mirror: Mirror) {
        let Cell { row, col } = mirror.cell;
        self.by_row
            .entry(row)
            .or_default()
            .insert(col, mirror.orientation);
        self.by_col
            .entry(col)
            .or_default()
            .insert(row, mirror.orientation);
    }

    pub fn len(&self) -> usize {
        self.by_row.values().map(Lane::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_row.is_empty()
    }

    pub fn get(&self, cell: Cell) -> Option<Orientation> {
        self.by_row.get(&cell.row)?.get(&cell.col).copied()
    }

    /// Nearest mirror in `row` strictly between column `from` and column `edge`,
    /// searching from `from` toward `edge`.
    pub fn nearest_in_row(&self, row: i64, from: i64, edge: i64) -> Option<(i64, Orientation)> {
        nearest(self.by_row.get(&row), from, edge)
    }

    /// Nearest mirror in `col` strictly between row `from` and row `edge`,
    /// searching from `from` toward `edge`.
    pub fn nearest_in_col(&self, col: i64, from: i64, edge: i64) -> Option<(i64, Orientation)> {
        nearest(self.by_col.get(&col), from, edge)
    }
}

impl FromIterator<Mirror> for MirrorIndex {
    fn from_iter<T: IntoIterator<Item = Mirror>>(iter: T) -> Self {
        Self::new(iter)
    }
}

fn nearest(lane: Option<&Lane>, from: i64, edge: i64) -> Option<(i64, Orientation)> {
    let lane = lane?;
    let hit = if edge > from {
        lane.range(from + 1..edge).next()
    } else if edge < from {
        lane.range(edge + 1..from).next_back()
    } else {
        None
    };
    hit.map(|(&pos, &orientation)| (pos, orientation))
}
