//! One end-to-end run: fetch, filter, rank, render, deliver.
//!
//! ```text
//! ItemSource::fetch(Model)   ItemSource::fetch(Dataset)
//!          │                          │
//!     filter_window               filter_window
//!          │                          │
//!        rank                       rank
//!          └──────────┬───────────────┘
//!                     ▼
//!              nothing new? ──▶ log "no updates", stop
//!                     │
//!                  render
//!                     │
//!         delivery configured? ──no──▶ dry run: log top items
//!                     │
//!               Dispatcher::dispatch
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

use hubdigest_adapters::{ItemSource, Mailer};
use hubdigest_types::{Category, Digest, ItemSummary, RecipientList};

use crate::data::{filter_window, rank};
use crate::dispatch::Dispatcher;
use crate::render::render;

/// Number of items per category listed in the log during a dry run.
pub const DRY_RUN_PREVIEW: usize = 5;

/// Ranked summaries for both categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collected {
    pub models: Vec<ItemSummary>,
    pub datasets: Vec<ItemSummary>,
}

impl Collected {
    /// Whether neither category produced anything inside the window.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.datasets.is_empty()
    }

    /// Ranked summaries for one category.
    pub fn get(&self, category: Category) -> &[ItemSummary] {
        match category {
            Category::Model => &self.models,
            Category::Dataset => &self.datasets,
        }
    }
}

/// Where a rendered digest goes.
pub struct Delivery {
    pub dispatcher: Dispatcher<dyn Mailer>,
    pub recipients: RecipientList,
}

impl Delivery {
    pub fn new(mailer: Arc<dyn Mailer>, recipients: RecipientList, max_concurrent: usize) -> Self {
        Self {
            dispatcher: Dispatcher::new(mailer, max_concurrent),
            recipients,
        }
    }
}

/// How a run ended. Every variant is a successful completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing was created inside the window; no digest was rendered.
    NoUpdates,
    /// A digest was rendered but delivery was not configured.
    DryRun(Arc<Digest>),
    /// The digest was handed to the dispatcher for every recipient.
    Dispatched {
        digest: Arc<Digest>,
        recipients: usize,
    },
}

/// Fetch both categories and return them filtered and ranked.
///
/// A fetch error for either category aborts the whole run.
pub async fn collect(source: &dyn ItemSource, now: DateTime<Utc>) -> Result<Collected> {
    let mut collected = Collected::default();

    for category in Category::ALL {
        info!("Fetching new {} from {}...", category.plural(), source.description());
        let candidates = source
            .fetch(category)
            .await
            .with_context(|| format!("Failed to fetch {}", category.plural()))?;

        let recent = filter_window(&candidates, now);
        debug!(
            "{} of {} {} inside the window",
            recent.len(),
            candidates.len(),
            category.plural()
        );
        info!("Found {} new {}.", recent.len(), category.plural());

        let ranked = rank(&recent);
        match category {
            Category::Model => collected.models = ranked,
            Category::Dataset => collected.datasets = ranked,
        }
    }

    Ok(collected)
}

/// Run the whole pipeline once.
///
/// `now` anchors the 24-hour window and `today` is the local date printed
/// in the subject. With `delivery` set to `None` the run is a dry run.
pub async fn run(
    source: &dyn ItemSource,
    delivery: Option<&Delivery>,
    now: DateTime<Utc>,
    today: NaiveDate,
) -> Result<RunOutcome> {
    let collected = collect(source, now).await?;

    if collected.is_empty() {
        info!("No new updates found in the last 24 hours.");
        return Ok(RunOutcome::NoUpdates);
    }

    let digest = Arc::new(render(&collected.models, &collected.datasets, today));

    let Some(delivery) = delivery else {
        info!("Email delivery not configured, skipping email.");
        log_preview(&collected);
        return Ok(RunOutcome::DryRun(digest));
    };

    info!(
        "Sending \"{}\" to {} recipient(s)",
        digest.subject,
        delivery.recipients.len()
    );
    delivery
        .dispatcher
        .dispatch(Arc::clone(&digest), &delivery.recipients)
        .await;

    Ok(RunOutcome::Dispatched {
        digest,
        recipients: delivery.recipients.len(),
    })
}

fn log_preview(collected: &Collected) {
    for category in Category::ALL {
        for item in collected.get(category).iter().take(DRY_RUN_PREVIEW) {
            info!("{}: {} - Likes: {}", category, item.id, item.likes);
        }
    }
}
