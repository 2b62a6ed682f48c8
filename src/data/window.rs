//! Trailing 24-hour window filter.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use hubdigest_types::{ItemSummary, RawCandidate};

/// Length of the reporting window.
pub fn window_length() -> Duration {
    Duration::hours(24)
}

/// Keep the candidates created strictly after `now - 24h`.
///
/// Candidates without a parsable `createdAt` are skipped; that is expected
/// registry noise, not an error, so it only shows up at debug level.
/// Survivors keep the order they were received in.
pub fn filter_window(candidates: &[RawCandidate], now: DateTime<Utc>) -> Vec<ItemSummary> {
    let threshold = now - window_length();

    candidates
        .iter()
        .filter_map(|candidate| {
            let Some(created_at) = candidate.parsed_created_at() else {
                debug!(
                    "Skipping {}: unparsable createdAt {:?}",
                    candidate.id, candidate.created_at
                );
                return None;
            };

            (created_at > threshold).then(|| ItemSummary::from_candidate(candidate, created_at))
        })
        .collect()
}
