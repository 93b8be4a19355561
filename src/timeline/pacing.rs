use super::cue_timeline::CueTimeline;
use super::types::{CueBlock, CueSink, PaceStatus};
use log::debug;

impl CueTimeline {
    /// Release every cue from the cursor on whose start is before `deadline`.
    ///
    /// Cues with a non-positive start or empty text are consumed without being
    /// sent. Emitted timestamps are shifted by `delay`.
    pub fn pace<S: CueSink + ?Sized>(&mut self, deadline: i64, delay: i64, sink: &mut S) -> PaceStatus {
        while let Some(cue) = self.current() {
            if cue.start >= deadline {
                break;
            }

            if cue.start <= 0 || cue.text.is_empty() {
                debug!("Dropping unusable cue #{} (start {})", self.cursor(), cue.start);
            } else {
                sink.send(CueBlock {
                    pts: cue.start + delay,
                    duration: cue.duration(),
                    payload: cue.text.as_bytes().to_vec(),
                });
            }
            self.advance();
        }

        if self.is_exhausted() {
            PaceStatus::Exhausted
        } else {
            PaceStatus::MoreData
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::types::MockCueSink;
    use crate::timeline::Cue;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use proptest::prelude::*;

    fn build(cues: Vec<Cue>) -> CueTimeline {
        let mut timeline = CueTimeline::new();
        for cue in cues {
            timeline.append(cue).unwrap();
        }
        timeline.finalize();
        timeline
    }

    #[test]
    fn test_pace_emits_due_cues_in_order() {
        let mut timeline = build(vec![
            Cue::new(1_000_000, 2_000_000, "one"),
            Cue::new(3_000_000, 0, "two"),
            Cue::new(5_000_000, 6_000_000, "three"),
        ]);

        let mut sink = MockCueSink::new();
        let mut seq = Sequence::new();
        sink.expect_send()
            .with(eq(CueBlock {
                pts: 1_000_000,
                duration: Some(1_000_000),
                payload: b"one".to_vec(),
            }))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        sink.expect_send()
            .with(eq(CueBlock {
                pts: 3_000_000,
                duration: None,
                payload: b"two".to_vec(),
            }))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        assert_eq!(timeline.pace(4_000_000, 0, &mut sink), PaceStatus::MoreData);
        assert_eq!(timeline.cursor(), 2);
    }

    #[test]
    fn test_pace_drops_zero_start_and_empty_text() {
        let mut timeline = build(vec![
            Cue::new(0, 1_000, "at zero"),
            Cue::new(500, 900, ""),
            Cue::new(700, 800, "kept"),
        ]);

        let mut sent = Vec::new();
        assert_eq!(timeline.pace(i64::MAX, 0, &mut sent), PaceStatus::Exhausted);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].payload, b"kept".to_vec());
    }

    #[test]
    fn test_pace_applies_delay_to_pts() {
        let mut timeline = build(vec![Cue::new(2_000, 3_000, "x")]);
        let mut sent = Vec::new();
        timeline.pace(10_000, -500, &mut sent);
        assert_eq!(sent[0].pts, 1_500);
        assert_eq!(sent[0].duration, Some(1_000));
    }

    #[test]
    fn test_pace_nothing_due() {
        let mut timeline = build(vec![Cue::new(2_000, 3_000, "x")]);
        let mut sink = MockCueSink::new();
        sink.expect_send().never();
        assert_eq!(timeline.pace(2_000, 0, &mut sink), PaceStatus::MoreData);
    }

    #[test]
    fn test_pace_on_empty_timeline() {
        let mut timeline = build(Vec::new());
        let mut sent = Vec::new();
        assert_eq!(timeline.pace(100, 0, &mut sent), PaceStatus::Exhausted);
        assert!(sent.is_empty());
    }

    proptest! {
        #[test]
        fn prop_pace_never_emits_non_positive_start(
            starts in prop::collection::vec(-1_000i64..1_000, 0..30),
            deadline in -1_000i64..2_000,
        ) {
            let mut timeline = build(
                starts.iter().map(|s| Cue::new(*s, 0, "t")).collect(),
            );
            let mut sent = Vec::new();
            timeline.pace(deadline, 0, &mut sent);
            prop_assert!(sent.iter().all(|block| block.pts > 0 && block.pts < deadline));
        }
    }
}
