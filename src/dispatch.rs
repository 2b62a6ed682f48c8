//! Bounded fan-out of one digest to many recipients.
//!
//! Every recipient gets exactly one delivery attempt in its own task. At most
//! `max_concurrent` attempts are in flight at once. A failed or panicked
//! attempt is logged and never touches its siblings, and [`Dispatcher::dispatch`]
//! only returns once every attempt has finished.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use hubdigest_adapters::Mailer;
use hubdigest_types::{Digest, RecipientList};

use crate::config::DEFAULT_MAX_CONCURRENT_DELIVERIES;

/// Fans a digest out through a shared [`Mailer`].
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use hubdigest::dispatch::Dispatcher;
/// use hubdigest_adapters::{AdapterError, Mailer};
/// use hubdigest_types::{Digest, RecipientList};
///
/// struct Noop;
///
/// #[async_trait]
/// impl Mailer for Noop {
///     async fn deliver(&self, _to: &str, _digest: &Digest) -> Result<(), AdapterError> {
///         Ok(())
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let dispatcher = Dispatcher::new(Arc::new(Noop), 5);
/// let digest = Arc::new(Digest::new("subject", "<p>body</p>"));
/// dispatcher.dispatch(digest, &RecipientList::parse("a@x.io,b@x.io")).await;
/// # });
/// ```
pub struct Dispatcher<M: ?Sized> {
    mailer: Arc<M>,
    max_concurrent: usize,
}

impl<M: Mailer + ?Sized + 'static> Dispatcher<M> {
    /// Create a dispatcher allowing at most `max_concurrent` simultaneous
    /// deliveries (clamped to at least one).
    pub fn new(mailer: Arc<M>, max_concurrent: usize) -> Self {
        Self {
            mailer,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Create a dispatcher with the default concurrency cap.
    pub fn with_default_limit(mailer: Arc<M>) -> Self {
        Self::new(mailer, DEFAULT_MAX_CONCURRENT_DELIVERIES)
    }

    /// The concurrency cap in effect.
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Deliver `digest` to every recipient, waiting for all attempts.
    ///
    /// Outcomes are reported through the log only.
    pub async fn dispatch(&self, digest: Arc<Digest>, recipients: &RecipientList) {
        let tally = self.deliver_all(digest, recipients).await;

        if tally.failed.is_empty() {
            info!("Dispatch finished: {} delivered, 0 failed", tally.delivered.len());
        } else {
            warn!(
                "Dispatch finished: {} delivered, {} failed",
                tally.delivered.len(),
                tally.failed.len()
            );
        }
    }

    async fn deliver_all(&self, digest: Arc<Digest>, recipients: &RecipientList) -> Tally {
        let permits = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks = JoinSet::new();
        let mut pending = HashMap::new();

        for recipient in recipients.iter() {
            let to = recipient.to_string();
            let mailer = Arc::clone(&self.mailer);
            let digest = Arc::clone(&digest);
            let permits = Arc::clone(&permits);

            let task = tasks.spawn(async move {
                // Never closed, so this always yields a permit.
                let _permit = permits.acquire_owned().await.ok();
                mailer.deliver(&to, &digest).await
            });
            pending.insert(task.id(), recipient.to_string());
        }

        let mut tally = Tally::default();

        while let Some(joined) = tasks.join_next_with_id().await {
            // A panicked task still maps back to its recipient through the id.
            let (id, result) = match joined {
                Ok((id, result)) => (id, result.map_err(|e| e.to_string())),
                Err(e) => (e.id(), Err(e.to_string())),
            };
            let recipient = pending.remove(&id).unwrap_or_default();

            match result {
                Ok(()) => {
                    info!("Delivered digest to {}", recipient);
                    tally.delivered.push(recipient);
                }
                Err(cause) => {
                    error!("Failed to deliver digest to {}: {}", recipient, cause);
                    tally.failed.push(recipient);
                }
            }
        }

        tally
    }
}

/// Recipients by outcome, in completion order.
#[derive(Debug, Default)]
struct Tally {
    delivered: Vec<String>,
    failed: Vec<String>,
}
