pub mod classifier;
pub mod frequency;
pub mod ranges;

pub use classifier::{FINAL_SET_SIZE, classify};
pub use frequency::{analyze, rank};
pub use ranges::{DEFAULT_BUCKET_WIDTH, aggregate};
