//! Application services shared by use cases.

pub mod lazy;
