//! Mail transport abstraction.

use async_trait::async_trait;
use hubdigest_types::Digest;

use crate::AdapterError;

/// Trait for delivering a digest to a single recipient.
///
/// A mailer is shared across concurrent deliveries, so implementations must
/// not hold per-recipient state. Each call is one attempt; mailers never
/// retry.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver `digest` to `recipient`.
    async fn deliver(&self, recipient: &str, digest: &Digest) -> Result<(), AdapterError>;
}
