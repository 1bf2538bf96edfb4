//! Forward 8x8 DCT-II block transform.
//!
//! Implemented straight from the mathematical definition with per-axis
//! normalization `α(0) = 1/√N`, `α(k>0) = √(2/N)` and the separable basis
//! `cos((2x+1)uπ/2N)`. The transform is orthonormal, so coefficient energy
//! equals sample energy.
//!
//! This is a deliberate correction: the historical routine this replaces had
//! inconsistent indexing and a loop that never advanced, leaving it as dead
//! code. Its literal arithmetic is not reproduced here.

use std::f64::consts::PI;

use crate::error::PixelmarkError;
use crate::media::{EmbeddingRegion, GrayImage};
use crate::result::Result;

/// Side length of the transformed block.
pub const BLOCK_SIZE: usize = 8;

/// One 8x8 block of pixel samples, `[row][col]`.
pub type SampleBlock = [[u8; BLOCK_SIZE]; BLOCK_SIZE];

/// One 8x8 block of transform coefficients, `[u][v]` frequency pairs.
pub type CoefficientBlock = [[f64; BLOCK_SIZE]; BLOCK_SIZE];

pub struct BlockTransform;

impl BlockTransform {
    /// Transforms one block of samples into its 64 frequency coefficients.
    pub fn forward(samples: &SampleBlock) -> CoefficientBlock {
        let n = BLOCK_SIZE as f64;
        let mut coefficients = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];

        for (u, row) in coefficients.iter_mut().enumerate() {
            for (v, coefficient) in row.iter_mut().enumerate() {
                let mut sum = 0.0;
                for (x, sample_row) in samples.iter().enumerate() {
                    for (y, &sample) in sample_row.iter().enumerate() {
                        sum += f64::from(sample)
                            * basis(x, u, n)
                            * basis(y, v, n);
                    }
                }
                *coefficient = alpha(u, n) * alpha(v, n) * sum;
            }
        }

        coefficients
    }

    /// Reads an 8x8 block out of `image` and transforms it.
    ///
    /// The region side must be [`BLOCK_SIZE`] and the block must lie fully
    /// inside the image.
    pub fn forward_region(image: &GrayImage, region: EmbeddingRegion) -> Result<CoefficientBlock> {
        let (width, height) = image.dimensions();
        let fits = region.side == BLOCK_SIZE as u32
            && u64::from(region.x) + BLOCK_SIZE as u64 <= u64::from(width)
            && u64::from(region.y) + BLOCK_SIZE as u64 <= u64::from(height);
        if !fits {
            return Err(PixelmarkError::RegionOutOfBounds {
                x: region.x,
                y: region.y,
                side: region.side,
                width,
                height,
            });
        }

        let mut samples = [[0; BLOCK_SIZE]; BLOCK_SIZE];
        for (row, sample_row) in samples.iter_mut().enumerate() {
            for (col, sample) in sample_row.iter_mut().enumerate() {
                *sample = image.get(region.y + row as u32, region.x + col as u32);
            }
        }

        Ok(Self::forward(&samples))
    }

    /// Renders coefficients back into 8-bit samples by rounding and clamping.
    ///
    /// Lossy by construction, only useful as a display or debug artifact,
    /// never for coefficient-domain math.
    pub fn coefficients_to_pixels(coefficients: &CoefficientBlock) -> SampleBlock {
        let mut pixels = [[0; BLOCK_SIZE]; BLOCK_SIZE];
        for (row, coefficient_row) in coefficients.iter().enumerate() {
            for (col, &coefficient) in coefficient_row.iter().enumerate() {
                pixels[row][col] = coefficient.round().clamp(0.0, 255.0) as u8;
            }
        }
        pixels
    }
}

fn alpha(k: usize, n: f64) -> f64 {
    if k == 0 {
        (1.0 / n).sqrt()
    } else {
        (2.0 / n).sqrt()
    }
}

fn basis(x: usize, u: usize, n: f64) -> f64 {
    (((2 * x + 1) * u) as f64 * PI / (2.0 * n)).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn constant_block_concentrates_in_the_dc_coefficient() {
        let samples = [[100; BLOCK_SIZE]; BLOCK_SIZE];

        let coefficients = BlockTransform::forward(&samples);

        // DC = N * value for a constant block, every AC coefficient vanishes
        assert!((coefficients[0][0] - 800.0).abs() < EPS);
        for (u, row) in coefficients.iter().enumerate() {
            for (v, &c) in row.iter().enumerate() {
                if (u, v) != (0, 0) {
                    assert!(c.abs() < EPS, "AC coefficient ({u}, {v}) = {c}");
                }
            }
        }
    }

    #[test]
    fn transform_preserves_energy() {
        let mut samples = [[0; BLOCK_SIZE]; BLOCK_SIZE];
        for (x, row) in samples.iter_mut().enumerate() {
            for (y, sample) in row.iter_mut().enumerate() {
                *sample = ((x * 31 + y * 7) % 256) as u8;
            }
        }

        let coefficients = BlockTransform::forward(&samples);

        let sample_energy: f64 = samples
            .iter()
            .flatten()
            .map(|&s| f64::from(s) * f64::from(s))
            .sum();
        let coefficient_energy: f64 = coefficients.iter().flatten().map(|&c| c * c).sum();

        assert!((sample_energy - coefficient_energy).abs() < 1e-6);
    }

    #[test]
    fn forward_region_matches_forward_on_the_same_samples() {
        let image =
            GrayImage::from_raw(16, 16, (0..256).map(|i| (i % 256) as u8).collect()).unwrap();
        let region = EmbeddingRegion::new(8, 8, 8);

        let from_region = BlockTransform::forward_region(&image, region).unwrap();

        let mut samples = [[0; BLOCK_SIZE]; BLOCK_SIZE];
        for (row, sample_row) in samples.iter_mut().enumerate() {
            for (col, sample) in sample_row.iter_mut().enumerate() {
                *sample = image.get(8 + row as u32, 8 + col as u32);
            }
        }
        assert_eq!(from_region, BlockTransform::forward(&samples));
    }

    #[test]
    fn forward_region_rejects_blocks_leaving_the_image() {
        let image = GrayImage::new(16, 16).unwrap();

        // x + 8 == width is still inside, one further is not
        assert!(BlockTransform::forward_region(&image, EmbeddingRegion::new(8, 0, 8)).is_ok());
        assert!(matches!(
            BlockTransform::forward_region(&image, EmbeddingRegion::new(9, 0, 8)),
            Err(PixelmarkError::RegionOutOfBounds { x: 9, .. })
        ));
        assert!(matches!(
            BlockTransform::forward_region(&image, EmbeddingRegion::new(0, 0, 4)),
            Err(PixelmarkError::RegionOutOfBounds { side: 4, .. })
        ));
    }

    #[test]
    fn pixel_rendering_clamps_to_the_byte_range() {
        let mut coefficients = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        coefficients[0][0] = 812.5;
        coefficients[0][1] = -3.2;
        coefficients[1][0] = 127.4;

        let pixels = BlockTransform::coefficients_to_pixels(&coefficients);

        assert_eq!(pixels[0][0], 255);
        assert_eq!(pixels[0][1], 0);
        assert_eq!(pixels[1][0], 127);
    }
}
