//! # Pixelmark
//!
//! Pixel-domain information hiding and statistical watermarking on raw
//! grayscale and color bitmap buffers, with a thin PGM/PPM file collaborator.
//!
//! Four independent techniques are provided:
//! - [`ChannelSplitter`] hides a full grayscale image inside the
//!   least-significant bits of an equally sized color image (3/3/2 split)
//! - [`GridTextCodec`] hides a short `'*'`-terminated message in the low
//!   2 bits of a square sub-grid of a grayscale image
//! - [`BlockSignalCodec`] hides an 8-byte payload in one 8x8 block via
//!   signed additive perturbation, recoverable against the original
//! - [`PatchworkWatermark`] shifts two random blocks in opposite directions
//!   as a payload-free statistical presence mark
//!
//! plus [`BlockTransform`], a forward 8x8 DCT-II building block.
//!
//! None of this is steganalysis-resistant or cryptographically secure; it is
//! a bit- and block-exact manipulation engine for raw pixel buffers.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use pixelmark::{GrayImage, GridTextCodec};
//!
//! let mut image = GrayImage::new(32, 32).expect("dimensions are in range");
//!
//! GridTextCodec::hide(&mut image, 4, b"hidden in plain sight*")
//!     .expect("message fits into the image");
//!
//! let revealed = GridTextCodec::reveal(&image, 4, 22);
//! assert_eq!(&revealed, b"hidden in plain sight*");
//! ```
//!
//! ## Watermark one block and recover the payload
//!
//! ```rust
//! use pixelmark::{BlockSignalCodec, EmbeddingRegion, GrayImage};
//!
//! let original = GrayImage::from_raw(64, 64, vec![128; 64 * 64]).unwrap();
//! let mut marked = original.clone();
//! let region = EmbeddingRegion::new(10, 10, 8);
//!
//! BlockSignalCodec::embed(&mut marked, 4, region, b"PIXELMRK")
//!     .expect("region is valid");
//!
//! let payload = BlockSignalCodec::extract(&original, &marked, 4, region)
//!     .expect("images match");
//! assert_eq!(&payload, b"PIXELMRK");
//! ```

#![warn(clippy::redundant_else)]

pub mod codec;
pub mod error;
pub mod media;
pub mod result;
pub mod transform;

pub use codec::{
    BlockSignalCodec, ChannelSplitter, GridTextCodec, Patchable, PatchworkMark,
    PatchworkWatermark,
};
pub use error::PixelmarkError;
pub use media::{ColorImage, EmbeddingRegion, GrayImage, Rgb, MAX_DIMENSION};
pub use result::Result;
pub use transform::BlockTransform;
