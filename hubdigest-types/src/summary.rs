//! Normalized summaries of items that passed the time window.

use chrono::{DateTime, Utc};

use crate::{RawCandidate, ITEM_BASE_URL, NO_DESCRIPTION};

/// A registry item that was created inside the reporting window.
///
/// Built once from a [`RawCandidate`] and never mutated afterwards; the
/// ranker and renderer only ever read it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItemSummary {
    pub id: String,
    pub likes: u64,
    pub downloads: u64,
    /// Link to the item page, derived from [`ITEM_BASE_URL`] and `id`.
    pub url: String,
    pub created_at: DateTime<Utc>,
    /// Falls back to [`NO_DESCRIPTION`] when absent or empty.
    pub description: String,
}

impl ItemSummary {
    /// Project a candidate into a summary using its already-parsed timestamp.
    pub fn from_candidate(candidate: &RawCandidate, created_at: DateTime<Utc>) -> Self {
        let description = candidate
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION)
            .to_string();

        Self {
            id: candidate.id.clone(),
            likes: candidate.likes.unwrap_or(0),
            downloads: candidate.downloads.unwrap_or(0),
            url: format!("{}{}", ITEM_BASE_URL, candidate.id),
            created_at,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let summary = ItemSummary::from_candidate(&RawCandidate::new("org/model"), created());

        assert_eq!(summary.id, "org/model");
        assert_eq!(summary.likes, 0);
        assert_eq!(summary.downloads, 0);
        assert_eq!(summary.url, "https://huggingface.co/org/model");
        assert_eq!(summary.created_at, created());
        assert_eq!(summary.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_empty_description_uses_placeholder() {
        let candidate = RawCandidate::new("org/data").description("");
        let summary = ItemSummary::from_candidate(&candidate, created());
        assert_eq!(summary.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_copies_counters_and_description() {
        let candidate = RawCandidate::new("org/data")
            .likes(9)
            .downloads(120)
            .description("Chinese web corpus");
        let summary = ItemSummary::from_candidate(&candidate, created());

        assert_eq!(summary.likes, 9);
        assert_eq!(summary.downloads, 120);
        assert_eq!(summary.description, "Chinese web corpus");
    }
}
