//! Patchwork statistical watermark.
//!
//! Carries no payload: two randomly placed 30x30 blocks are shifted by one
//! gray level in opposite directions, which a detector can find by comparing
//! block means against the unmarked original. Pixel values wrap around at
//! the 0/255 ends instead of saturating; the mean shift is measured mod 256.
//!
//! The two blocks may overlap, there is no collision check. Block origins
//! are drawn uniformly over the positions where the whole block fits inside
//! the image, from a caller-owned random source that is never re-seeded
//! here.

use fastrand::Rng;

use crate::error::PixelmarkError;
use crate::media::{ColorImage, GrayImage, Rgb};
use crate::result::Result;

/// Fixed side length of both perturbed blocks.
pub const PATCH_SIDE: u32 = 30;

/// Where the watermark landed, so the operation is auditable and reversible
/// by the caller. Origins are flattened row-major pixel indices.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PatchworkMark {
    pub block_a: usize,
    pub block_b: usize,
    pub side: u32,
}

/// Seam for the image kinds the watermark applies to: a per-channel step of
/// one gray level, down or up, with wraparound.
pub trait Patchable {
    fn dimensions(&self) -> (u32, u32);
    fn step_down(&mut self, row: u32, col: u32);
    fn step_up(&mut self, row: u32, col: u32);
}

impl Patchable for GrayImage {
    fn dimensions(&self) -> (u32, u32) {
        GrayImage::dimensions(self)
    }

    fn step_down(&mut self, row: u32, col: u32) {
        let v = self.get(row, col);
        self.set(row, col, v.wrapping_sub(1));
    }

    fn step_up(&mut self, row: u32, col: u32) {
        let v = self.get(row, col);
        self.set(row, col, v.wrapping_add(1));
    }
}

impl Patchable for ColorImage {
    fn dimensions(&self) -> (u32, u32) {
        ColorImage::dimensions(self)
    }

    fn step_down(&mut self, row: u32, col: u32) {
        let px = self.get(row, col);
        self.set(
            row,
            col,
            Rgb {
                red: px.red.wrapping_sub(1),
                green: px.green.wrapping_sub(1),
                blue: px.blue.wrapping_sub(1),
            },
        );
    }

    fn step_up(&mut self, row: u32, col: u32) {
        let px = self.get(row, col);
        self.set(
            row,
            col,
            Rgb {
                red: px.red.wrapping_add(1),
                green: px.green.wrapping_add(1),
                blue: px.blue.wrapping_add(1),
            },
        );
    }
}

pub struct PatchworkWatermark;

impl PatchworkWatermark {
    /// Darkens one random block by 1 and lightens a second one by 1, in place.
    ///
    /// The image must be at least [`PATCH_SIDE`] pixels in both dimensions.
    /// Where the blocks overlap the two steps cancel out.
    pub fn apply<T: Patchable>(image: &mut T, rng: &mut Rng) -> Result<PatchworkMark> {
        let (width, height) = image.dimensions();
        if width < PATCH_SIDE || height < PATCH_SIDE {
            return Err(PixelmarkError::RegionOutOfBounds {
                x: 0,
                y: 0,
                side: PATCH_SIDE,
                width,
                height,
            });
        }

        let (row_a, col_a) = random_origin(rng, width, height);
        let (row_b, col_b) = random_origin(rng, width, height);

        for dr in 0..PATCH_SIDE {
            for dc in 0..PATCH_SIDE {
                image.step_down(row_a + dr, col_a + dc);
            }
        }
        for dr in 0..PATCH_SIDE {
            for dc in 0..PATCH_SIDE {
                image.step_up(row_b + dr, col_b + dc);
            }
        }

        Ok(PatchworkMark {
            block_a: (row_a * width + col_a) as usize,
            block_b: (row_b * width + col_b) as usize,
            side: PATCH_SIDE,
        })
    }
}

fn random_origin(rng: &mut Rng, width: u32, height: u32) -> (u32, u32) {
    (
        rng.u32(0..=height - PATCH_SIDE),
        rng.u32(0..=width - PATCH_SIDE),
    )
}
