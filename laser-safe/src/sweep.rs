use std::collections::BTreeMap;

use crate::grid::Cell;
use crate::segment::{HorizontalSegment, VerticalSegment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventKind {
    HorizontalEnd,
    VerticalSpan,
    HorizontalStart,
}

impl EventKind {
    /// Tie-break at equal columns. Ends retire before verticals are queried and
    /// starts join afterwards, so a horizontal segment never matches a vertical
    /// sitting on one of its endpoints.
    fn priority(self) -> i8 {
        match self {
            EventKind::HorizontalEnd => -1,
            EventKind::VerticalSpan => 0,
            EventKind::HorizontalStart => 1,
        }
    }
}

/// One stop of the sweep line, which moves left to right across columns.
#[derive(Debug, Clone, Copy)]
struct Event {
    col: i64,
    kind: EventKind,
    /// Row of a horizontal segment, or the inclusive row span of a vertical one.
    low: i64,
    high: i64,
}

impl Event {
    fn key(&self) -> (i64, i8) {
        (self.col, self.kind.priority())
    }
}

fn events(horizontal: &[HorizontalSegment], vertical: &[VerticalSegment]) -> Vec<Event> {
    let mut events = Vec::with_capacity(vertical.len() + 2 * horizontal.len());

    events.extend(vertical.iter().map(|v| Event {
        col: v.col,
        kind: EventKind::VerticalSpan,
        low: v.start,
        high: v.end,
    }));

    for h in horizontal {
        events.push(Event {
            col: h.start,
            kind: EventKind::HorizontalStart,
            low: h.row,
            high: h.row,
        });
        events.push(Event {
            col: h.end,
            kind: EventKind::HorizontalEnd,
            low: h.row,
            high: h.row,
        });
    }

    events.sort_unstable_by_key(Event::key);
    events
}

/// Every cell lying strictly inside a horizontal segment's column span and
/// within a vertical segment's row span.
///
/// Runs in `O((H + V) log(H + V) + K)` for `K` reported cells. Rows covered by
/// several active horizontal segments are reported once per vertical.
pub fn intersect(horizontal: &[HorizontalSegment], vertical: &[VerticalSegment]) -> Vec<Cell> {
    // Active horizontal rows, counted so overlapping segments in one row coexist.
    let mut active: BTreeMap<i64, usize> = BTreeMap::new();
    let mut crossings = Vec::new();

    for event in events(horizontal, vertical) {
        match event.kind {
            EventKind::HorizontalStart => {
                *active.entry(event.low).or_default() += 1;
            }
            EventKind::HorizontalEnd => {
                if let Some(count) = active.get_mut(&event.low) {
                    *count -= 1;
                    if *count == 0 {
                        active.remove(&event.low);
                    }
                }
            }
            EventKind::VerticalSpan => {
                crossings.extend(
                    active
                        .range(event.low..=event.high)
                        .map(|(&row, _)| Cell::new(row, event.col)),
                );
            }
        }
    }

    crossings
}
