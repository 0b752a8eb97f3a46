//! Image generation for hexpaint.
//!
//! This module turns input lines into PNG swatches. Each line is handled on
//! its own: strip leading `#`, parse the color, fill a raster of the requested
//! size, and write it to `<hex>.png`. A line that fails at any of those steps
//! is logged and skipped; only an I/O error reading the input stops the loop.
//!
//! Output files are named after the color, not the line, so repeated colors
//! overwrite the same file.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

use image::{ImageError, ImageFormat, RgbaImage};
use log::{info, warn};
use thiserror::Error;

use crate::color::{Color, ColorError, strip_hash};
use crate::input::InputError;
use crate::size::Size;

const BYTES_PER_PIXEL: u64 = 4;

/// Largest width or height a PNG header can carry.
pub const PNG_MAX_DIMENSION: u32 = (1 << 31) - 1;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("line is not valid UTF-8")]
    NotUtf8(#[from] Utf8Error),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("image of {0} is too large to encode")]
    TooLarge(Size),
    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counts reported at the end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Images written successfully.
    pub generated: usize,
    /// Lines skipped because they were invalid or could not be written.
    pub skipped: usize,
}

/// Build a `size` raster where every pixel is `color`.
///
/// Sizes a PNG cannot describe, or whose pixel buffer cannot be addressed,
/// are rejected before anything is allocated.
pub fn render(color: &Color, size: Size) -> Result<RgbaImage, GenerateError> {
    let addressable = size
        .area()
        .checked_mul(BYTES_PER_PIXEL)
        .is_some_and(|bytes| usize::try_from(bytes).is_ok_and(|b| b <= isize::MAX as usize));
    if size.width > PNG_MAX_DIMENSION || size.height > PNG_MAX_DIMENSION || !addressable {
        return Err(GenerateError::TooLarge(size));
    }
    Ok(RgbaImage::from_pixel(size.width, size.height, color.rgba()))
}

/// Encode `image` as PNG into `path`, creating or truncating the file.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), GenerateError> {
    let file = File::create(path).map_err(|source| GenerateError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|source| GenerateError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    out.flush().map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse one raw input line and write its swatch into `dir`.
///
/// Returns the parsed color and the path of the written file.
pub fn generate_image(
    raw: &str,
    size: Size,
    dir: &Path,
) -> Result<(Color, PathBuf), GenerateError> {
    let color = Color::parse(strip_hash(raw))?;
    let image = render(&color, size)?;
    let path = dir.join(color.file_name());
    write_png(&image, &path)?;
    Ok((color, path))
}

/// `<raw> > <file>`, with the raw input right-aligned to 7 columns.
pub fn mapping_line(raw: &str, color: &Color) -> String {
    format!("{:>7} > {}", raw, color.file_name())
}

/// Warning logged for a line that produced no image.
pub fn skip_message(raw: &str, err: &GenerateError) -> String {
    format!("skipping {:?} due to error: {}", strip_hash(raw), err)
}

/// Generate one image per line of `input` into `dir`.
///
/// Writes a [`mapping_line`] to `out` for each image written and logs a
/// [`skip_message`] warning for each skipped line. Lines end at `\n`; a
/// trailing `\r` is dropped. A line that is not UTF-8 is skipped like any
/// other invalid line.
///
/// # Errors
/// Returns [`InputError::Read`] if reading from `input` fails; images written
/// before the failure are kept.
pub fn generate_images(
    input: impl BufRead,
    size: Size,
    dir: &Path,
    mut out: impl Write,
) -> Result<Summary, InputError> {
    let mut summary = Summary::default();
    for line in input.split(b'\n') {
        let mut bytes = line?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let raw = String::from_utf8_lossy(&bytes);
        let outcome = std::str::from_utf8(&bytes)
            .map_err(GenerateError::from)
            .and_then(|line| generate_image(line, size, dir));
        match outcome {
            Ok((color, path)) => {
                if let Err(e) = writeln!(out, "{}", mapping_line(&raw, &color)) {
                    warn!("failed to print mapping for {:?}: {}", raw, e);
                }
                info!("wrote {}", path.display());
                summary.generated += 1;
            }
            Err(e) => {
                warn!("{}", skip_message(&raw, &e));
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}
