//! Generative text adapters

pub mod huggingface;

pub use huggingface::{GeneratorLoader, HfTextGenerator};
