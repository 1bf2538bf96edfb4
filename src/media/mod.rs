pub mod pnm;
pub mod types;

pub use types::*;
