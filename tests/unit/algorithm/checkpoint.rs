//! Tests for checkpoint scheduling and snapshot sinks

#[cfg(test)]
mod tests {
    use allrgb::AlgorithmError;
    use allrgb::algorithm::checkpoint::{Checkpoint, CheckpointSchedule, CheckpointSink};
    use allrgb::spatial::Canvas;

    // Verifies a single checkpoint lands on the last placement
    // Verified by scheduling at (k + 1) * total / amount
    #[test]
    fn test_single_checkpoint_at_end() {
        let schedule = CheckpointSchedule::new(8, 1).expect("valid schedule");
        assert_eq!(schedule.iter().collect::<Vec<_>>(), vec![(7, 0)]);
        assert_eq!(schedule.checkpoint_at(7), Some(0));
        assert_eq!(schedule.checkpoint_at(6), None);
    }

    // Verifies checkpoints are spread evenly with the last one at the end
    // Verified by rounding the spacing up
    #[test]
    fn test_even_spacing() {
        let schedule = CheckpointSchedule::new(10, 3).expect("valid schedule");
        assert_eq!(
            schedule.iter().collect::<Vec<_>>(),
            vec![(2, 0), (5, 1), (9, 2)]
        );
        assert_eq!(schedule.len(), 3);

        let every = CheckpointSchedule::new(4, 4).expect("valid schedule");
        assert_eq!(
            every.iter().collect::<Vec<_>>(),
            vec![(0, 0), (1, 1), (2, 2), (3, 3)]
        );
    }

    // Verifies amount zero disables checkpoints
    // Verified by always emitting a final checkpoint
    #[test]
    fn test_zero_amount() {
        let schedule = CheckpointSchedule::new(8, 0).expect("valid schedule");
        assert!(schedule.is_empty());
        assert_eq!(schedule.checkpoint_at(7), None);
    }

    // Verifies more checkpoints than placements is rejected
    // Verified by clamping the amount silently
    #[test]
    fn test_amount_exceeds_total() {
        assert!(matches!(
            CheckpointSchedule::new(8, 9),
            Err(AlgorithmError::InvalidParameter {
                parameter: "image.amount",
                ..
            })
        ));
    }

    // Verifies progress is reported as whole percent of placements
    // Verified by reporting the index without the +1
    #[test]
    fn test_progress_percent() {
        let checkpoint = Checkpoint {
            id: 0,
            index: 3,
            snapshot: Canvas::new(2, 4),
        };
        assert_eq!(checkpoint.progress_percent(), 50);

        let last = Checkpoint {
            id: 1,
            index: 7,
            snapshot: Canvas::new(2, 4),
        };
        assert_eq!(last.progress_percent(), 100);
    }

    // Verifies the collecting sink keeps snapshots in order
    // Verified by discarding snapshots in the Vec sink
    #[test]
    fn test_sinks() {
        let mut collected: Vec<Checkpoint> = Vec::new();
        let mut discard = ();
        for id in 0..3 {
            let checkpoint = Checkpoint {
                id,
                index: id,
                snapshot: Canvas::new(1, 1),
            };
            discard.accept(checkpoint.clone());
            collected.accept(checkpoint);
        }
        assert_eq!(
            collected.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }
}
