//! Disease classifier adapters
//!
//! - [`LocalClassifier`]: JSON model artifact evaluated in-process
//! - [`RemoteClassifier`]: hosted inference endpoint
//! - [`ClassifierLoader`]: picks one from `[classifier]` config for a `LazyHandle`

pub mod artifact;
pub mod loader;
pub mod local;
pub mod registry;
pub mod remote;

pub use artifact::{ArtifactError, ModelArtifact, ModelKind, TreeNode};
pub use loader::ClassifierLoader;
pub use local::LocalClassifier;
pub use registry::{ModelRegistry, RegistryError};
pub use remote::RemoteClassifier;
