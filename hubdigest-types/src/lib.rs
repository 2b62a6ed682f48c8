//! # hubdigest-types
//!
//! Core types for the hubdigest update pipeline. This crate defines the
//! records that flow from the registry, through the time-window filter and
//! ranker, into the rendered digest that is fanned out to recipients.
//!
//! ## Features
//!
//! - `serde`: deserialize [`RawCandidate`] straight from registry JSON and
//!   serialize summaries for export
//!
//! ## Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use hubdigest_types::{ItemSummary, RawCandidate};
//!
//! let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
//! let candidate = RawCandidate::new("org/model")
//!     .created_at("2024-05-01T10:00:00.000Z")
//!     .likes(5);
//!
//! let created = candidate.parsed_created_at().unwrap();
//! assert!(created > now - Duration::hours(24));
//!
//! let summary = ItemSummary::from_candidate(&candidate, created);
//! assert_eq!(summary.url, "https://huggingface.co/org/model");
//! ```

mod candidate;
mod category;
mod digest;
mod summary;
mod timestamp;

pub use candidate::*;
pub use category::*;
pub use digest::*;
pub use summary::*;
pub use timestamp::*;

/// Base URL every item link is derived from.
pub const ITEM_BASE_URL: &str = "https://huggingface.co/";

/// Placeholder used when an item carries no description.
pub const NO_DESCRIPTION: &str = "No description available";
