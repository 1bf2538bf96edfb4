//! Spread-style additive embedding of an 8-byte payload into one 8x8 pixel
//! block.
//!
//! Every payload bit maps to one pixel of the block: a set bit adds the
//! amplitude, a cleared bit subtracts it, both saturating at 0 and 255.
//! Extraction needs the unmodified original and recovers one byte per block
//! row from the sign of the per-pixel difference. Saturation during
//! embedding is not signalled and makes extraction lossy near the pixel
//! value extremes; that edge is part of the contract.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader};
use log::debug;

use crate::error::PixelmarkError;
use crate::media::{EmbeddingRegion, GrayImage};
use crate::result::Result;

/// Fixed block side, one pixel per payload bit.
pub const BLOCK_SIDE: u32 = 8;

/// Fixed payload size, one byte per block row.
pub const PAYLOAD_LENGTH: usize = 8;

pub struct BlockSignalCodec;

impl BlockSignalCodec {
    /// Perturbs the block at `region` by `payload`, in place.
    ///
    /// The region side must be [`BLOCK_SIDE`] and the block must keep one
    /// pixel of margin to the right and bottom edge (`x + 8 < width`, a
    /// strict bound kept for compatibility). All checks run before any
    /// mutation.
    pub fn embed(
        image: &mut GrayImage,
        amplitude: i32,
        region: EmbeddingRegion,
        payload: &[u8; PAYLOAD_LENGTH],
    ) -> Result<()> {
        validate_region(region, image.dimensions())?;
        if amplitude == 0 {
            return Err(PixelmarkError::ZeroAmplitude);
        }

        let mut bits = BitReader::endian(Cursor::new(payload), BigEndian);
        let mut saturated = 0u32;

        for row in 0..BLOCK_SIDE {
            for col in 0..BLOCK_SIDE {
                let sign = if bits.read_bit()? { 1 } else { -1 };
                let (r, c) = (region.y + row, region.x + col);

                let value = i32::from(image.get(r, c)) + amplitude * sign;
                let clamped = value.clamp(0, 255);
                if clamped != value {
                    saturated += 1;
                }
                image.set(r, c, clamped as u8);
            }
        }

        if saturated > 0 {
            debug!("block signal embedding saturated {saturated} sample(s), extraction will be lossy there");
        }

        Ok(())
    }

    /// Recovers the payload by differencing `modified` against `original`.
    ///
    /// One byte per block row, most significant bit first; a non-negative
    /// difference sign reads as 1. Exact only where embedding did not
    /// saturate.
    pub fn extract(
        original: &GrayImage,
        modified: &GrayImage,
        amplitude: i32,
        region: EmbeddingRegion,
    ) -> Result<[u8; PAYLOAD_LENGTH]> {
        if original.dimensions() != modified.dimensions() {
            return Err(PixelmarkError::DimensionMismatch(
                original.width(),
                original.height(),
                modified.width(),
                modified.height(),
            ));
        }
        validate_region(region, original.dimensions())?;
        if amplitude == 0 {
            return Err(PixelmarkError::ZeroAmplitude);
        }

        let mut payload = [0; PAYLOAD_LENGTH];
        for (row, byte) in payload.iter_mut().enumerate() {
            *byte = (0..BLOCK_SIDE).fold(0, |acc, col| {
                let (r, c) = (region.y + row as u32, region.x + col);
                let diff = i32::from(modified.get(r, c)) - i32::from(original.get(r, c));
                (acc << 1) | u8::from(diff / amplitude >= 0)
            });
        }

        Ok(payload)
    }
}

fn validate_region(region: EmbeddingRegion, (width, height): (u32, u32)) -> Result<()> {
    let fits = region.side == BLOCK_SIDE
        && u64::from(region.x) + u64::from(BLOCK_SIDE) < u64::from(width)
        && u64::from(region.y) + u64::from(BLOCK_SIDE) < u64::from(height);
    if fits {
        Ok(())
    } else {
        Err(PixelmarkError::RegionOutOfBounds {
            x: region.x,
            y: region.y,
            side: region.side,
            width,
            height,
        })
    }
}
