/// Straight run of the beam along a row, covering columns `start..=end`.
///
/// Endpoints are mirror cells or the edge sentinels `-1` and `cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalSegment {
    pub row: i64,
    pub start: i64,
    pub end: i64,
}

impl HorizontalSegment {
    /// Builds the segment in either travel direction; endpoints are stored ascending.
    pub fn new(row: i64, a: i64, b: i64) -> Self {
        Self {
            row,
            start: a.min(b),
            end: a.max(b),
        }
    }
}

/// Straight run of the beam along a column, covering rows `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalSegment {
    pub col: i64,
    pub start: i64,
    pub end: i64,
}

impl VerticalSegment {
    pub fn new(col: i64, a: i64, b: i64) -> Self {
        Self {
            col,
            start: a.min(b),
            end: a.max(b),
        }
    }
}
