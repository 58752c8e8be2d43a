use std::collections::BTreeSet;

use super::event::{BoundaryEvent, EventKind};

/// One display block of the output stream: a time range plus every caption
/// visible throughout it, in lexicographic order.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleBlock {
    pub start: f64,
    pub end: f64,
    pub lines: Vec<String>,
}

/// Gap reserved before a boundary where another caption keeps running or
/// starts, so consecutive blocks never overlap in players that treat ranges
/// as closed intervals.
const BOUNDARY_GAP_SECS: f64 = 0.001;

/// Walk the sorted events once, maintaining the set of currently visible
/// captions, and emit one block per maximal span where that set is non-empty
/// and unchanging.
///
/// Emission is deferred while the next event shares the current timestamp:
/// every simultaneous boundary must be applied before the instant counts as a
/// block edge, which is also what suppresses zero-width blocks. A block ends
/// exactly on the next event when that event cleanly deactivates the sole
/// visible caption; otherwise it ends one millisecond early.
pub fn sweep(events: &[BoundaryEvent]) -> Vec<SubtitleBlock> {
    let mut active: BTreeSet<&str> = BTreeSet::new();
    let mut blocks = Vec::new();

    for (index, event) in events.iter().enumerate() {
        match event.kind {
            EventKind::Activate => {
                active.insert(event.text.as_str());
            }
            EventKind::Deactivate => {
                active.remove(event.text.as_str());
            }
        }

        let Some(next) = events.get(index + 1) else {
            break;
        };

        if active.is_empty() || next.time == event.time {
            continue;
        }

        let end = if active.len() == 1 && next.kind == EventKind::Deactivate {
            next.time
        } else {
            next.time - BOUNDARY_GAP_SECS
        };

        blocks.push(SubtitleBlock {
            start: event.time,
            end,
            lines: active.iter().map(|text| (*text).to_string()).collect(),
        });
    }

    blocks
}
