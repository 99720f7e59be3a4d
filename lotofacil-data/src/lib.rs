pub mod config;
pub mod error;
pub mod models;
pub mod source;

pub use error::{LotoError, Result};
