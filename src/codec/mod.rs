pub mod bits;
pub mod block_signal;
pub mod channel_split;
pub mod grid_text;
pub mod patchwork;

pub use block_signal::BlockSignalCodec;
pub use channel_split::ChannelSplitter;
pub use grid_text::GridTextCodec;
pub use patchwork::{Patchable, PatchworkMark, PatchworkWatermark};
