//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: small text helpers used when rendering external content

pub mod error;
pub mod string;
