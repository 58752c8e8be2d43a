use super::label::LabelInterval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventKind {
    Activate,
    Deactivate,
}

/// A caption boundary: the instant a text starts or stops being displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryEvent {
    pub time: f64,
    pub kind: EventKind,
    pub text: String,
}

/// Expand every interval into its activate/deactivate pair, sorted by time.
///
/// At equal times activations sort before deactivations, so a caption taking
/// over at the exact instant another ends is already in the active set when
/// the transition boundary is evaluated. The sort is stable and keyed only on
/// `(time, kind)`, which makes the event order (and everything derived from
/// it) independent of the order the labels were supplied in.
pub fn build_events(intervals: &[LabelInterval]) -> Vec<BoundaryEvent> {
    let mut events = Vec::with_capacity(intervals.len() * 2);

    for interval in intervals {
        events.push(BoundaryEvent {
            time: interval.start,
            kind: EventKind::Activate,
            text: interval.text.clone(),
        });
        events.push(BoundaryEvent {
            time: interval.end,
            kind: EventKind::Deactivate,
            text: interval.text.clone(),
        });
    }

    events.sort_by(|a, b| a.time.total_cmp(&b.time).then(a.kind.cmp(&b.kind)));
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(start: f64, end: f64, text: &str) -> LabelInterval {
        LabelInterval {
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn emits_two_events_per_interval() {
        let events = build_events(&[label(1.0, 2.0, "a"), label(3.0, 4.0, "b")]);
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].kind, EventKind::Activate);
        assert_eq!(events[1].kind, EventKind::Deactivate);
        assert_eq!(events[1].time, 2.0);
    }

    #[test]
    fn sorts_by_time_across_intervals() {
        let events = build_events(&[label(3.0, 4.0, "late"), label(1.0, 2.0, "early")]);
        let times: Vec<f64> = events.iter().map(|event| event.time).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn activation_sorts_before_deactivation_at_the_same_instant() {
        let events = build_events(&[label(0.0, 5.0, "outgoing"), label(5.0, 8.0, "incoming")]);

        assert_eq!(events[1].time, 5.0);
        assert_eq!(events[1].kind, EventKind::Activate);
        assert_eq!(events[1].text, "incoming");
        assert_eq!(events[2].time, 5.0);
        assert_eq!(events[2].kind, EventKind::Deactivate);
        assert_eq!(events[2].text, "outgoing");
    }

    #[test]
    fn event_order_is_independent_of_label_order() {
        let forward = build_events(&[
            label(0.0, 5.0, "a"),
            label(2.0, 7.0, "b"),
            label(6.0, 9.0, "c"),
        ]);
        let shuffled = build_events(&[
            label(6.0, 9.0, "c"),
            label(0.0, 5.0, "a"),
            label(2.0, 7.0, "b"),
        ]);
        assert_eq!(forward, shuffled);
    }
}
