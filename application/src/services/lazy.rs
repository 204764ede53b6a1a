//! Lazily-initialized service handles
//!
//! Expensive collaborators (the classifier artifact, the generative model) are
//! loaded on first use and then shared for the lifetime of the handle. The
//! handle is owned by whoever builds the use case, so initialization order is
//! explicit instead of living in global state.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::info;

/// Failure to initialize a service
#[derive(Error, Debug, Clone)]
#[error("Failed to load {service}: {message}")]
pub struct LoadError {
    pub service: String,
    pub message: String,
}

impl LoadError {
    pub fn new(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            message: message.into(),
        }
    }
}

/// Builds a service instance on demand
#[async_trait]
pub trait ServiceLoader<T: ?Sized + Send + Sync>: Send + Sync {
    /// Short description used in logs and errors
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Arc<T>, LoadError>;
}

/// A service that is loaded once, on first [`get`](LazyHandle::get).
///
/// A failed load is not cached: the next call tries again.
pub struct LazyHandle<T: ?Sized + Send + Sync> {
    loader: Option<Box<dyn ServiceLoader<T>>>,
    cell: OnceCell<Arc<T>>,
}

impl<T: ?Sized + Send + Sync> LazyHandle<T> {
    pub fn new(loader: impl ServiceLoader<T> + 'static) -> Self {
        Self {
            loader: Some(Box::new(loader)),
            cell: OnceCell::new(),
        }
    }

    /// A handle that is already initialized with `service`.
    pub fn ready(service: Arc<T>) -> Self {
        Self {
            loader: None,
            cell: OnceCell::new_with(Some(service)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Return the service, loading it first if needed.
    pub async fn get(&self) -> Result<Arc<T>, LoadError> {
        let service = self
            .cell
            .get_or_try_init(|| async {
                match self.loader.as_ref() {
                    Some(loader) => {
                        info!("Loading {}", loader.describe());
                        loader.load().await
                    }
                    None => Err(LoadError::new("service", "no loader configured")),
                }
            })
            .await?;
        Ok(Arc::clone(service))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    struct English;

    impl Greeter for English {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    struct CountingLoader {
        calls: Arc<AtomicUsize>,
        fail_first: bool,
    }

    #[async_trait]
    impl ServiceLoader<dyn Greeter> for CountingLoader {
        fn describe(&self) -> String {
            "greeter".to_string()
        }

        async fn load(&self) -> Result<Arc<dyn Greeter>, LoadError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && n == 0 {
                return Err(LoadError::new("greeter", "registry unreachable"));
            }
            Ok(Arc::new(English))
        }
    }

    #[tokio::test]
    async fn test_loads_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handle: LazyHandle<dyn Greeter> = LazyHandle::new(CountingLoader {
            calls: Arc::clone(&calls),
            fail_first: false,
        });

        assert!(!handle.is_loaded());
        assert_eq!(handle.get().await.unwrap().greet(), "hello");
        assert_eq!(handle.get().await.unwrap().greet(), "hello");
        assert!(handle.is_loaded());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let handle: LazyHandle<dyn Greeter> = LazyHandle::new(CountingLoader {
            calls: Arc::clone(&calls),
            fail_first: true,
        });

        let err = handle.get().await.err().unwrap();
        assert!(err.to_string().contains("registry unreachable"));
        assert!(handle.get().await.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_ready_handle() {
        let handle: LazyHandle<dyn Greeter> = LazyHandle::ready(Arc::new(English));
        assert!(handle.is_loaded());
        assert_eq!(handle.get().await.unwrap().greet(), "hello");
    }
}
