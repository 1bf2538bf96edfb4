//! Hides a full grayscale image inside the low-order bits of an equally
//! sized color image.
//!
//! The split is asymmetric on purpose and kept bit-compatible with the
//! historical layout: red carries gray bits 0-2, green carries gray bits 2-4
//! (bit 2 is stored twice), blue carries gray bits 6-7. Gray bit 5 is never
//! stored, so [`ChannelSplitter::extract`] always reconstructs it as 0.

use crate::error::PixelmarkError;
use crate::media::{ColorImage, GrayImage, Rgb};
use crate::result::Result;

/// Gray bits 0-2, stored in red's low 3 bits.
const RED_SLOT: u8 = 0b0000_0111;
/// Gray bits 2-4, stored in green's low 3 bits.
const GREEN_SLOT: u8 = 0b0000_0111;
const GREEN_SOURCE_SHIFT: u32 = 2;
/// Gray bits 6-7, stored in blue's low 2 bits.
const BLUE_SLOT: u8 = 0b0000_0011;
const BLUE_SOURCE_SHIFT: u32 = 6;

/// The gray bits that survive a full embed/extract cycle. Bit 5 has no slot.
pub const RECOVERABLE_BITS: u8 = 0b1101_1111;

pub struct ChannelSplitter;

impl ChannelSplitter {
    /// Embeds `gray` into the low bits of `carrier`, in place.
    ///
    /// High bits of every channel are preserved. Fails with
    /// [`PixelmarkError::DimensionMismatch`] before touching any pixel when
    /// the two images disagree in size.
    pub fn embed(carrier: &mut ColorImage, gray: &GrayImage) -> Result<()> {
        if carrier.dimensions() != gray.dimensions() {
            return Err(PixelmarkError::DimensionMismatch(
                carrier.width(),
                carrier.height(),
                gray.width(),
                gray.height(),
            ));
        }

        for row in 0..carrier.height() {
            for col in 0..carrier.width() {
                let secret = gray.get(row, col);
                let px = carrier.get(row, col);
                carrier.set(
                    row,
                    col,
                    Rgb {
                        red: (px.red & !RED_SLOT) | (secret & RED_SLOT),
                        green: (px.green & !GREEN_SLOT)
                            | ((secret >> GREEN_SOURCE_SHIFT) & GREEN_SLOT),
                        blue: (px.blue & !BLUE_SLOT) | ((secret >> BLUE_SOURCE_SHIFT) & BLUE_SLOT),
                    },
                );
            }
        }

        Ok(())
    }

    /// Reads the hidden grayscale image back out of `carrier`.
    ///
    /// Green contributes only gray bits 3-4; its lowest bit is the duplicate
    /// of bit 2 already taken from red. Bit 5 always comes back as 0.
    pub fn extract(carrier: &ColorImage) -> GrayImage {
        let mut gray = GrayImage::new(carrier.width(), carrier.height())
            .expect("carrier dimensions are already validated");

        for row in 0..carrier.height() {
            for col in 0..carrier.width() {
                let px = carrier.get(row, col);
                let secret = (px.red & RED_SLOT)
                    | (((px.green & GREEN_SLOT) >> 1) << (GREEN_SOURCE_SHIFT + 1))
                    | ((px.blue & BLUE_SLOT) << BLUE_SOURCE_SHIFT);
                gray.set(row, col, secret);
            }
        }

        gray
    }
}
