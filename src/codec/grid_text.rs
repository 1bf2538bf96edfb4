//! Hides a short `'*'`-terminated message in the low 2 bits of a square
//! sub-grid of a grayscale image.
//!
//! The grid is scaled to the message itself: a message of `n` characters
//! occupies a grid of side `2·⌊√n⌋` whose top-left corner sits at
//! `origin_offset + 2·⌊√n⌋` on both axes, so the message floats inside the
//! image instead of being anchored at the origin. Each character is written
//! as four 2-bit groups into consecutive grid cells, most significant group
//! first, wrapping to the next grid row at the row boundary. Lengths that
//! are not perfect squares spill onto additional grid rows below the square.

use crate::codec::bits;
use crate::error::PixelmarkError;
use crate::media::GrayImage;
use crate::result::Result;

/// Byte that must terminate every hidden message.
pub const MESSAGE_TERMINATOR: u8 = b'*';

pub struct GridTextCodec;

impl GridTextCodec {
    /// Hides `text` (terminator included) inside `image`, in place.
    ///
    /// Validation happens before any pixel is touched, first failure wins:
    /// the message must fit the image capacity of one character per four
    /// pixels, the origin must leave room for the full grid in both axes,
    /// and the last byte must be [`MESSAGE_TERMINATOR`].
    pub fn hide(image: &mut GrayImage, origin_offset: u32, text: &[u8]) -> Result<()> {
        let (width, height) = image.dimensions();

        let available = (width as usize * height as usize) / bits::GROUPS_PER_BYTE as usize;
        if text.len() > available {
            return Err(PixelmarkError::CapacityError {
                available,
                required: text.len(),
            });
        }

        let side = grid_side(text.len());
        let row_limit = i64::from(height) - i64::from(side + grid_rows(text.len(), side));
        let col_limit = i64::from(width) - i64::from(2 * side);
        let max_offset = row_limit.min(col_limit);
        if i64::from(origin_offset) > max_offset {
            return Err(PixelmarkError::OffsetOutOfRange {
                offset: origin_offset,
                max: max_offset,
            });
        }

        if text.last() != Some(&MESSAGE_TERMINATOR) {
            return Err(PixelmarkError::MissingTerminator);
        }

        let mut cells = GridCells::new(origin_offset + side, side);
        for &byte in text {
            for group in bits::split_groups(byte) {
                let (row, col) = cells.next_cell();
                let carrier = image.get(row, col);
                image.set(row, col, bits::conceal_group(carrier, group));
            }
        }

        Ok(())
    }

    /// Reads `char_count` characters back out of `image`.
    ///
    /// The caller must pass the same `origin_offset` and length used for
    /// [`GridTextCodec::hide`]; there is no in-band terminator detection and
    /// no re-validation, so mismatched parameters silently yield garbage.
    pub fn reveal(image: &GrayImage, origin_offset: u32, char_count: usize) -> Vec<u8> {
        let side = grid_side(char_count);
        let mut cells = GridCells::new(origin_offset + side, side);

        (0..char_count)
            .map(|_| {
                let mut groups = [0; bits::GROUPS_PER_BYTE as usize];
                for group in groups.iter_mut() {
                    let (row, col) = cells.next_cell();
                    *group = bits::reveal_group(image.get(row, col));
                }
                bits::merge_groups(groups)
            })
            .collect()
    }
}

/// Grid side for a message of `char_count` characters, truncating square root.
fn grid_side(char_count: usize) -> u32 {
    2 * (char_count as f64).sqrt() as u32
}

/// Number of grid rows the message actually occupies. Equals `side` for
/// perfect-square lengths.
fn grid_rows(char_count: usize, side: u32) -> u32 {
    if side == 0 {
        return 0;
    }
    let cells = char_count as u32 * bits::GROUPS_PER_BYTE;
    cells.div_ceil(side)
}

/// Row-major walk over the message grid.
struct GridCells {
    origin: u32,
    side: u32,
    i: u32,
}

impl GridCells {
    fn new(origin: u32, side: u32) -> Self {
        Self { origin, side, i: 0 }
    }

    fn next_cell(&mut self) -> (u32, u32) {
        let (row, col) = (self.i / self.side, self.i % self.side);
        self.i += 1;
        (self.origin + row, self.origin + col)
    }
}
