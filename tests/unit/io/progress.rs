//! Tests for the placement progress reporter

#[cfg(test)]
mod tests {
    use allrgb::io::progress::ProgressReporter;

    // Verifies placements advance the position to index + 1
    // Verified by recording the raw index
    #[test]
    fn test_hidden_tracks_position() {
        let progress = ProgressReporter::hidden();
        assert_eq!(progress.position(), 0);

        progress.placed(0);
        assert_eq!(progress.position(), 1);
        progress.placed(9);
        progress.checkpoint(1);
        assert_eq!(progress.position(), 10);
        progress.finish();
    }

    // Verifies a visible reporter accepts the same calls
    // Verified by panicking on an unstyled bar
    #[test]
    fn test_visible_reporter() {
        let progress = ProgressReporter::new(4);
        for index in 0..4 {
            progress.placed(index);
        }
        assert_eq!(progress.position(), 4);
        progress.finish();
    }
}
