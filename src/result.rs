use crate::error::PixelmarkError;

pub type Result<T> = std::result::Result<T, PixelmarkError>;
