//! Progress reporting while external services run

pub mod reporter;
