use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelmarkError {
    /// Represents a carrier and a secret whose dimensions disagree where equality is required
    #[error("Image dimensions do not match: {0}x{1} vs {2}x{3}")]
    DimensionMismatch(u32, u32, u32, u32),

    /// Represents a payload that does not fit into the available embedding space
    #[error(
        "Capacity Error: the message of {required} byte(s) does not fit, only {available} byte(s) are available"
    )]
    CapacityError { available: usize, required: usize },

    /// Represents an origin offset that leaves no room for the full message grid
    #[error("Offset {offset} is out of range, it must not exceed {max}")]
    OffsetOutOfRange { offset: u32, max: i64 },

    /// Represents an embedding region that violates the block codec bounds
    #[error("Region at ({x}, {y}) with side {side} is out of bounds for a {width}x{height} image")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        side: u32,
        width: u32,
        height: u32,
    },

    /// Represents a text payload that is not terminated by `'*'`
    #[error("Message is missing the '*' terminator byte")]
    MissingTerminator,

    /// Represents a degenerate perturbation constant
    #[error("Amplitude must not be zero")]
    ZeroAmplitude,

    /// Represents a dimension beyond the configured maximum, or a zero dimension
    #[error("Image dimensions {0}x{1} exceed the supported range")]
    DimensionLimitExceeded(u32, u32),

    /// Represents a raw pixel buffer whose length disagrees with the given dimensions
    #[error("Pixel buffer of {len} element(s) does not match {width}x{height}")]
    BufferSizeMismatch { len: usize, width: u32, height: u32 },

    /// Represents an invalid carrier image media. For example, a broken PGM file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents an unsupported carrier media. For example, a PNG file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
