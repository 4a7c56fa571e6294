use crate::grid::{Cell, Grid, MirrorIndex, Orientation};
use crate::segment::{HorizontalSegment, VerticalSegment};

/// Heading of the beam. Row 0 is the top of the grid, so `Up` decreases the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Outgoing heading after hitting a 45° mirror.
    pub fn reflect(self, orientation: Orientation) -> Direction {
        use Direction::*;
        use Orientation::*;
        match (self, orientation) {
            (Right, Slash) => Up,
            (Right, Backslash) => Down,
            (Left, Slash) => Down,
            (Left, Backslash) => Up,
            (Down, Slash) => Left,
            (Down, Backslash) => Right,
            (Up, Slash) => Right,
            (Up, Backslash) => Left,
        }
    }

    /// `(row, col)` step for one cell of travel.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }

    /// Coordinate just past the grid border the beam is heading for.
    fn edge(self, grid: Grid) -> i64 {
        match self {
            Direction::Right => grid.cols,
            Direction::Down => grid.rows,
            Direction::Left | Direction::Up => -1,
        }
    }
}

/// Path of one beam, split by axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pub horizontal: Vec<HorizontalSegment>,
    pub vertical: Vec<VerticalSegment>,
    /// The beam left through the right edge of the last row.
    pub reached_goal: bool,
}

/// Follows a beam entering `start` from outside the grid with the given heading
/// until it leaves the grid.
///
/// A mirror on `start` itself deflects the beam. A beam started inside a closed
/// loop of mirrors is cut off once it has made more bounces than the mirrors can
/// account for.
#[tracing::instrument(skip(index))]
pub fn trace(index: &MirrorIndex, grid: Grid, start: Cell, heading: Direction) -> Trace {
    let mut path = Trace::default();
    let mut heading = heading;
    let (dr, dc) = heading.delta();
    let mut pos = Cell::new(start.row - dr, start.col - dc);

    // Each (mirror, incoming heading) pair occurs at most once on an open path.
    let bounces = 4 * index.len() + 1;

    for _ in 0..bounces {
        let edge = heading.edge(grid);

        if heading.is_horizontal() {
            match index.nearest_in_row(pos.row, pos.col, edge) {
                Some((col, orientation)) => {
                    path.horizontal
                        .push(HorizontalSegment::new(pos.row, pos.col, col));
                    pos.col = col;
                    heading = heading.reflect(orientation);
                }
                None => {
                    path.horizontal
                        .push(HorizontalSegment::new(pos.row, pos.col, edge));
                    path.reached_goal = heading == Direction::Right && pos.row == grid.rows - 1;
                    tracing::debug!(?pos, ?heading, reached_goal = path.reached_goal, "beam left the grid");
                    return path;
                }
            }
        } else {
            match index.nearest_in_col(pos.col, pos.row, edge) {
                Some((row, orientation)) => {
                    path.vertical
                        .push(VerticalSegment::new(pos.col, pos.row, row));
                    pos.row = row;
                    heading = heading.reflect(orientation);
                }
                None => {
                    path.vertical
                        .push(VerticalSegment::new(pos.col, pos.row, edge));
                    tracing::debug!(?pos, ?heading, "beam left the grid");
                    return path;
                }
            }
        }
    }

    tracing::debug!(?start, "beam is trapped in a loop of mirrors");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::grid::Mirror;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Right, Orientation::Slash, Direction::Up)]
    #[case(Direction::Right, Orientation::Backslash, Direction::Down)]
    #[case(Direction::Left, Orientation::Slash, Direction::Down)]
    #[case(Direction::Left, Orientation::Backslash, Direction::Up)]
    #[case(Direction::Down, Orientation::Slash, Direction::Left)]
    #[case(Direction::Down, Orientation::Backslash, Direction::Right)]
    #[case(Direction::Up, Orientation::Slash, Direction::Right)]
    #[case(Direction::Up, Orientation::Backslash, Direction::Left)]
    fn reflects(
        #[case] incoming: Direction,
        #[case] orientation: Orientation,
        #[case] outgoing: Direction,
    ) {
        assert_eq!(outgoing, incoming.reflect(orientation));
    }

    #[test]
    fn empty_single_row_reaches_goal() {
        let grid = Grid::new(1, 4);
        let path = trace(&MirrorIndex::default(), grid, grid.origin(), Direction::Right);
        assert!(path.reached_goal);
        assert_eq!(vec![HorizontalSegment::new(0, -1, 4)], path.horizontal);
        assert!(path.vertical.is_empty());
    }

    #[test]
    fn leaving_through_another_row_misses_goal() {
        let grid = Grid::new(3, 4);
        let path = trace(&MirrorIndex::default(), grid, grid.origin(), Direction::Right);
        assert!(!path.reached_goal);
    }

    #[test]
    fn leftward_exit_on_last_row_is_not_the_goal() {
        let grid = Grid::new(2, 3);
        let path = trace(&MirrorIndex::default(), grid, grid.goal(), Direction::Left);
        assert!(!path.reached_goal);
        assert_eq!(vec![HorizontalSegment::new(1, -1, 3)], path.horizontal);
    }

    #[test]
    fn mirror_on_start_cell_deflects() {
        let grid = Grid::new(2, 2);
        let index = MirrorIndex::new([Mirror::slash(0, 0)]);
        let path = trace(&index, grid, grid.origin(), Direction::Right);
        assert!(!path.reached_goal);
        assert_eq!(vec![HorizontalSegment::new(0, -1, 0)], path.horizontal);
        assert_eq!(vec![VerticalSegment::new(0, -1, 0)], path.vertical);
    }

    #[test]
    fn bounces_down_to_goal() {
        let grid = Grid::new(100, 100);
        let index = MirrorIndex::new([Mirror::backslash(0, 76), Mirror::backslash(99, 76)]);
        let path = trace(&index, grid, grid.origin(), Direction::Right);
        assert!(path.reached_goal);
        assert_eq!(
            vec![
                HorizontalSegment::new(0, -1, 76),
                HorizontalSegment::new(99, 76, 100),
            ],
            path.horizontal
        );
        assert_eq!(vec![VerticalSegment::new(76, 0, 99)], path.vertical);
    }

    fn sample() -> MirrorIndex {
        MirrorIndex::new([
            Mirror::slash(1, 2),
            Mirror::backslash(0, 1),
            Mirror::backslash(1, 4),
            Mirror::backslash(3, 1),
            Mirror::backslash(4, 4),
        ])
    }

    #[test]
    fn traces_forward_path() {
        let grid = Grid::new(5, 6);
        let path = trace(&sample(), grid, grid.origin(), Direction::Right);
        assert!(!path.reached_goal);
        assert_eq!(
            vec![
                HorizontalSegment::new(0, -1, 1),
                HorizontalSegment::new(3, 1, 6),
            ],
            path.horizontal
        );
        assert_eq!(vec![VerticalSegment::new(1, 0, 3)], path.vertical);
    }

    #[test]
    fn traces_backward_path() {
        let grid = Grid::new(5, 6);
        let path = trace(&sample(), grid, grid.goal(), Direction::Left);
        assert!(!path.reached_goal);
        assert_eq!(
            vec![
                HorizontalSegment::new(4, 4, 6),
                HorizontalSegment::new(1, 2, 4),
            ],
            path.horizontal
        );
        assert_eq!(
            vec![VerticalSegment::new(4, 1, 4), VerticalSegment::new(2, 1, 5)],
            path.vertical
        );
    }

    #[test]
    fn closed_loop_terminates() {
        let grid = Grid::new(6, 6);
        let index = MirrorIndex::new([
            Mirror::slash(1, 1),
            Mirror::backslash(1, 4),
            Mirror::slash(4, 4),
            Mirror::backslash(4, 1),
        ]);
        let path = trace(&index, grid, Cell::new(1, 2), Direction::Right);
        assert!(!path.reached_goal);
        assert!(!path.horizontal.is_empty());
    }
}
