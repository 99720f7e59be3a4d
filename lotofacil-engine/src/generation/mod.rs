pub mod combinations;
pub mod sampler;

pub use combinations::{DEFAULT_COMBINATION_LIMIT, binomial, generate, generate_bounded};
pub use sampler::{IndexSource, chunk_size, sample};
