//! Saved-sample output: path construction and PNG encoding.
//!
//! Saved images are 8-bit grayscale PNGs named `char_<N>.png`, where `N`
//! comes from the registry's persistent image-index counter.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

use super::canvas::Canvas;

/// Build the file name for a saved sample.
#[must_use]
pub fn image_file_name(index: u32) -> String {
    format!("char_{index}.png")
}

/// Build the full output path for a saved sample.
#[must_use]
pub fn image_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(image_file_name(index))
}

/// Create the output directory if it doesn't exist.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Encode the canvas as an 8-bit grayscale PNG at the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoding fails.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(canvas.pixels())?;
    png_writer.finish()?;

    debug!("Wrote {}", path.display());
    Ok(())
}
