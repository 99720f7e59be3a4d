pub mod analysis;
pub mod generation;
