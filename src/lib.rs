//! # hubdigest
//!
//! A daily digest of new Hugging Face models and datasets.
//!
//! Each run pulls the newest items carrying a tag from the registry, keeps
//! those created in the last 24 hours, ranks them by likes, renders one HTML
//! digest and mails it to every configured recipient. Runs are stateless:
//! "new" is re-derived from the rolling window every time.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           pipeline                           │
//! │  ┌────────────┐   ┌─────────────┐   ┌────────┐   ┌────────┐ │
//! │  │ ItemSource │──▶│ data::window│──▶│  data  │──▶│ render │ │
//! │  │ (registry) │   │  (24h cut)  │   │ ::rank │   │ (HTML) │ │
//! │  └────────────┘   └─────────────┘   └────────┘   └───┬────┘ │
//! │                                                      │      │
//! │                                                      ▼      │
//! │                                   ┌─────────────────────┐   │
//! │                                   │ dispatch (≤ N tasks)│──▶ Mailer
//! │                                   └─────────────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`config`]**: Layered [`Settings`] (file, environment, CLI) resolved once
//! - **[`data`]**: Window filter and ranker, both pure functions
//! - **[`render`]**: Deterministic, escaped HTML digest plus subject line
//! - **[`dispatch`]**: Bounded fan-out with per-recipient failure isolation
//! - **[`pipeline`]**: Wires the stages together for one run
//! - **[`logging`]**: tracing subscriber set-up for the binary
//!
//! ## Usage
//!
//! ```bash
//! # Dry run: no credentials configured, digest is only logged
//! hubdigest --tag zh
//!
//! # Send with settings from a file (environment variables still apply)
//! hubdigest --config hubdigest.toml
//!
//! # Render to a file and exit
//! hubdigest --export digest.html
//! ```

pub mod config;
pub mod data;
pub mod dispatch;
pub mod logging;
pub mod pipeline;
pub mod render;

// Re-export main types for convenience
pub use config::{DeliveryConfig, Settings};
pub use dispatch::Dispatcher;
pub use pipeline::{Collected, Delivery, RunOutcome};
pub use hubdigest_types::{Category, Digest, ItemSummary, RawCandidate, RecipientList};
