//! Item source abstraction for pulling candidates from a registry.

use async_trait::async_trait;
use hubdigest_types::{Category, RawCandidate};

use crate::AdapterError;

/// Trait for fetching the newest items of a category from a registry.
///
/// Implementations return the registry's page as-is, newest first. They do
/// not filter by time; that is the window filter's job.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use hubdigest_adapters::{AdapterError, ItemSource};
/// use hubdigest_types::{Category, RawCandidate};
///
/// #[derive(Debug)]
/// struct Fixed(Vec<RawCandidate>);
///
/// #[async_trait]
/// impl ItemSource for Fixed {
///     async fn fetch(&self, _category: Category) -> Result<Vec<RawCandidate>, AdapterError> {
///         Ok(self.0.clone())
///     }
///
///     fn description(&self) -> &str {
///         "fixed"
///     }
/// }
/// ```
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetch the most recently created items of `category`.
    ///
    /// Any error is fatal for the run.
    async fn fetch(&self, category: Category) -> Result<Vec<RawCandidate>, AdapterError>;

    /// Returns a human-readable description of the source, used in logs.
    fn description(&self) -> &str;
}
