//! Filtering and ranking of registry candidates.
//!
//! ## Submodules
//!
//! - [`window`]: Trailing 24-hour filter turning [`RawCandidate`]s into [`ItemSummary`]s
//! - [`rank`]: Stable ordering by likes
//!
//! ## Data Flow
//!
//! ```text
//! Vec<RawCandidate> (registry page)
//!        │
//!        ▼
//! filter_window(now)  ──▶ unparsable createdAt: skipped
//!        │
//!        ▼
//! Vec<ItemSummary> ──▶ rank() ──▶ renderer
//! ```
//!
//! [`RawCandidate`]: hubdigest_types::RawCandidate
//! [`ItemSummary`]: hubdigest_types::ItemSummary

pub mod rank;
pub mod window;

pub use rank::rank;
pub use window::{filter_window, window_length};
