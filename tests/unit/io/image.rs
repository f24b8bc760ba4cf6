//! Tests for canvas rendering and checkpoint files

#[cfg(test)]
mod tests {
    use allrgb::AlgorithmError;
    use allrgb::color::Color;
    use allrgb::io::configuration::OutputSettings;
    use allrgb::io::error::ErrorKind;
    use allrgb::io::image::{canvas_to_image, checkpoint_path, export_canvas, export_checkpoint};
    use allrgb::spatial::{Canvas, Coordinate};
    use image::{GenericImageView, ImageFormat, Rgba};
    use std::path::Path;

    fn output(directory: &Path, extension: &str, format: ImageFormat) -> OutputSettings {
        OutputSettings {
            directory: directory.to_path_buf(),
            prefix: "frame".to_string(),
            extension: extension.to_string(),
            format,
        }
    }

    fn partial_canvas() -> Canvas {
        let mut canvas = Canvas::new(3, 2);
        canvas
            .place(Coordinate::new(2, 1), Color::new(1.0, 0.5, 0.0))
            .expect("empty cell");
        canvas
    }

    // Verifies unfilled cells render transparent and filled cells opaque
    // Verified by rendering unfilled cells as opaque black
    #[test]
    fn test_canvas_to_image() {
        let img = canvas_to_image(&partial_canvas());
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(img.get_pixel(2, 1), &Rgba([255, 128, 0, 255]));
    }

    // Verifies checkpoint files are named prefix_id.extension
    // Verified by omitting the separator
    #[test]
    fn test_checkpoint_path() {
        let settings = output(Path::new("out"), "png", ImageFormat::Png);
        assert_eq!(
            checkpoint_path(&settings, 3),
            Path::new("out").join("frame_3.png")
        );
    }

    // Verifies checkpoints are written and readable, creating directories
    // Verified by skipping directory creation
    #[test]
    fn test_export_checkpoint_png() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let settings = output(&dir.path().join("nested"), "png", ImageFormat::Png);

        let path = export_checkpoint(&partial_canvas(), &settings, 0).expect("written checkpoint");
        assert_eq!(path, dir.path().join("nested").join("frame_0.png"));

        let decoded = image::open(&path).expect("readable image");
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(decoded.get_pixel(2, 1), Rgba([255, 128, 0, 255]));
    }

    // Verifies formats without alpha are flattened instead of failing
    // Verified by saving RGBA as JPEG
    #[test]
    fn test_export_without_alpha() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let settings = output(dir.path(), "jpg", ImageFormat::Jpeg);

        let path = export_checkpoint(&partial_canvas(), &settings, 1).expect("written checkpoint");
        let decoded = image::open(&path).expect("readable image");
        assert_eq!(decoded.dimensions(), (3, 2));
    }

    // Verifies unwritable destinations become export errors
    // Verified by panicking on directory creation failure
    #[test]
    fn test_export_failure() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").expect("write blocker file");

        let error = export_canvas(
            &partial_canvas(),
            &blocker.join("sub").join("frame.png"),
            ImageFormat::Png,
        )
        .expect_err("parent is a file");
        assert!(matches!(error, AlgorithmError::FileSystem { .. }));
        assert_eq!(error.kind(), ErrorKind::Export);
    }
}
