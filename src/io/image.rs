//! Canvas rendering and checkpoint image files with transparency for empty cells

use crate::io::configuration::OutputSettings;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::Canvas;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Render the canvas; unfilled cells stay fully transparent
pub fn canvas_to_image(canvas: &Canvas) -> RgbaImage {
    let mut img = ImageBuffer::from_pixel(
        canvas.width() as u32,
        canvas.height() as u32,
        Rgba([0, 0, 0, 0]),
    );

    for (coordinate, cell) in canvas.cells() {
        if let Some(color) = cell {
            img.put_pixel(
                coordinate.x as u32,
                coordinate.y as u32,
                Rgba(color.to_rgba8()),
            );
        }
    }

    img
}

/// File path for checkpoint `id`: `<directory>/<prefix>_<id>.<extension>`
pub fn checkpoint_path(output: &OutputSettings, id: usize) -> PathBuf {
    output
        .directory
        .join(format!("{}_{id}.{}", output.prefix, output.extension))
}

/// Write the canvas to `path` in `format`
///
/// Formats without an alpha channel receive the canvas flattened to RGB,
/// with unfilled cells black.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_canvas(canvas: &Canvas, path: &Path, format: ImageFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let img = canvas_to_image(canvas);
    let saved = match format {
        ImageFormat::Jpeg | ImageFormat::Pnm => DynamicImage::ImageRgba8(img)
            .to_rgb8()
            .save_with_format(path, format),
        _ => img.save_with_format(path, format),
    };

    saved.map_err(|e| AlgorithmError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write checkpoint `id` of `canvas` according to `output`, returning the path written
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image cannot be saved
pub fn export_checkpoint(canvas: &Canvas, output: &OutputSettings, id: usize) -> Result<PathBuf> {
    let path = checkpoint_path(output, id);
    export_canvas(canvas, &path, output.format)?;
    Ok(path)
}
