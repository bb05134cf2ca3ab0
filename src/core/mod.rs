pub mod config;
pub mod filter;
pub mod logic;
pub mod normalizer;
pub mod validation;
pub mod views;

pub use filter::{DatePredicate, LogFilter};
pub use normalizer::LogNormalizer;
