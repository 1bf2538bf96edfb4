//! Thin PGM/PPM file collaborator.
//!
//! Decoding goes through the `image` crate. Writing is done by hand because
//! the PGM format carries an optional `# comment` header line that the
//! `image` PNM encoder cannot emit.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::error;

use crate::error::PixelmarkError;
use crate::media::types::{ColorImage, GrayImage, Rgb};
use crate::result::Result;

const PGM_MAGIC: &[u8] = b"P5";
const PPM_MAGIC: &[u8] = b"P6";
const MAX_SAMPLE_VALUE: u8 = 255;

/// Loads a grayscale image from a PGM file (P2 or P5).
pub fn load_gray(path: impl AsRef<Path>) -> Result<GrayImage> {
    let path = path.as_ref();
    ensure_extension(path, &["pgm", "pnm"])?;

    let img = open_image(path)?.to_luma8();
    let (width, height) = img.dimensions();

    GrayImage::from_raw(width, height, img.into_raw())
}

/// Loads a color image from a PPM file (P3 or P6).
pub fn load_color(path: impl AsRef<Path>) -> Result<ColorImage> {
    let path = path.as_ref();
    ensure_extension(path, &["ppm", "pnm"])?;

    let img = open_image(path)?.to_rgb8();
    let (width, height) = img.dimensions();
    let pixels = img
        .into_raw()
        .chunks_exact(3)
        .map(|c| Rgb::new(c[0], c[1], c[2]))
        .collect();

    ColorImage::from_raw(width, height, pixels)
}

/// Saves a grayscale image as binary PGM (P5), with an optional header comment.
pub fn save_gray(path: impl AsRef<Path>, image: &GrayImage, comment: Option<&str>) -> Result<()> {
    let mut writer = open_for_writing(path.as_ref())?;

    write_header(
        &mut writer,
        PGM_MAGIC,
        image.width(),
        image.height(),
        comment,
    )?;
    writer
        .write_all(image.pixels())
        .map_err(|source| PixelmarkError::WriteError { source })?;
    writer
        .flush()
        .map_err(|source| PixelmarkError::WriteError { source })
}

/// Saves a color image as binary PPM (P6).
pub fn save_color(path: impl AsRef<Path>, image: &ColorImage) -> Result<()> {
    let mut writer = open_for_writing(path.as_ref())?;

    write_header(&mut writer, PPM_MAGIC, image.width(), image.height(), None)?;
    for px in image.pixels() {
        writer
            .write_all(&[px.red, px.green, px.blue])
            .map_err(|source| PixelmarkError::WriteError { source })?;
    }
    writer
        .flush()
        .map_err(|source| PixelmarkError::WriteError { source })
}

fn open_image(path: &Path) -> Result<image::DynamicImage> {
    image::open(path).map_err(|e| {
        error!("Error decoding {path:?}: {e}");
        match e {
            image::error::ImageError::IoError(source) => PixelmarkError::ReadError { source },
            _ => PixelmarkError::InvalidImageMedia,
        }
    })
}

fn ensure_extension(path: &Path, accepted: &[&str]) -> Result<()> {
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            if accepted.contains(&ext.as_str()) {
                Ok(())
            } else {
                Err(PixelmarkError::UnsupportedMedia)
            }
        }
        None => Err(PixelmarkError::UnsupportedMedia),
    }
}

fn open_for_writing(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        error!("Error creating file {path:?}: {e}");
        PixelmarkError::WriteError { source: e }
    })?;
    Ok(BufWriter::new(file))
}

fn write_header(
    writer: &mut impl Write,
    magic: &[u8],
    width: u32,
    height: u32,
    comment: Option<&str>,
) -> Result<()> {
    let mut header = Vec::from(magic);
    header.push(b'\n');
    if let Some(comment) = comment {
        header.extend_from_slice(format!("# {comment}\n").as_bytes());
    }
    header.extend_from_slice(format!("{width} {height}\n{MAX_SAMPLE_VALUE}\n").as_bytes());

    writer
        .write_all(&header)
        .map_err(|source| PixelmarkError::WriteError { source })
}
