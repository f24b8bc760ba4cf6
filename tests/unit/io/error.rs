//! Tests for error classification and messages

#[cfg(test)]
mod tests {
    use allrgb::AlgorithmError;
    use allrgb::io::error::{ErrorKind, WithPlacement, invalid_parameter};
    use allrgb::spatial::Coordinate;
    use std::error::Error;

    // Verifies configuration and invariant errors abort while export errors do not
    // Verified by marking export errors fatal
    #[test]
    fn test_kind_and_fatality() {
        let configuration = AlgorithmError::DimensionMismatch {
            depth: 2,
            width: 3,
            height: 3,
        };
        let invariant = AlgorithmError::FrontierNotEmpty { remaining: 2 };
        let export = AlgorithmError::ExportWorker {
            reason: "gone".to_string(),
        };

        assert_eq!(configuration.kind(), ErrorKind::Configuration);
        assert_eq!(invariant.kind(), ErrorKind::Invariant);
        assert_eq!(export.kind(), ErrorKind::Export);
        assert!(configuration.is_fatal());
        assert!(invariant.is_fatal());
        assert!(!export.is_fatal());
    }

    // Verifies messages name the offending values
    // Verified by dropping fields from the messages
    #[test]
    fn test_display() {
        let error = invalid_parameter("seed", &"abc", &"not a number");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'seed' = 'abc': not a number"
        );

        let occupied = AlgorithmError::CellOccupied {
            coordinate: Coordinate::new(1, 2),
            index: Some(5),
        };
        assert_eq!(
            occupied.to_string(),
            "Placement 5 targets already filled cell (1, 2)"
        );

        let unknown = AlgorithmError::UnknownDistance {
            name: "cosine".to_string(),
        };
        assert_eq!(unknown.to_string(), "Unknown colour distance 'cosine'");
    }

    // Verifies wrapped I/O errors are exposed as sources
    // Verified by returning None from source
    #[test]
    fn test_source() {
        let error = AlgorithmError::FileSystem {
            path: "out".into(),
            operation: "create directory",
            source: std::io::Error::other("denied"),
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("create directory"));
        assert!(
            AlgorithmError::SequenceNotExhausted { remaining: 1 }
                .source()
                .is_none()
        );
    }

    // Verifies placement indices are attached only to occupied-cell errors
    // Verified by rewriting every error as CellOccupied
    #[test]
    fn test_at_placement_passthrough() {
        let result: allrgb::Result<()> = Err(AlgorithmError::FrontierExhausted { index: 3 });
        match result.at_placement(9) {
            Err(AlgorithmError::FrontierExhausted { index }) => assert_eq!(index, 3),
            other => unreachable!("Expected FrontierExhausted, got {other:?}"),
        }

        let ok: allrgb::Result<u8> = Ok(4);
        assert_eq!(ok.at_placement(1).ok(), Some(4));
    }
}
