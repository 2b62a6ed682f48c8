//! Raw records as returned by the registry listing API.

use chrono::{DateTime, Utc};

use crate::parse_timestamp;

/// An unfiltered item from the registry.
///
/// Only the fields the pipeline reads are modelled; everything else in the
/// registry payload is ignored. Counters that are absent or `null` in the
/// payload read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RawCandidate {
    /// Repository identifier, e.g. `org/name`.
    pub id: String,

    /// Creation timestamp exactly as the registry sent it. A non-string
    /// value reads as `None` so the record is skipped, not rejected.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "lenient_timestamp")
    )]
    pub created_at: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub likes: Option<u64>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub downloads: Option<u64>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

impl RawCandidate {
    /// Create a candidate with only an identifier set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the raw creation timestamp.
    pub fn created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// Set the like count.
    pub fn likes(mut self, likes: u64) -> Self {
        self.likes = Some(likes);
        self
    }

    /// Set the download count.
    pub fn downloads(mut self, downloads: u64) -> Self {
        self.downloads = Some(downloads);
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parse `created_at`, returning `None` when it is missing or malformed.
    pub fn parsed_created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

#[cfg(feature = "serde")]
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Timestamp {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match serde::Deserialize::deserialize(deserializer)? {
        Timestamp::Text(text) => Some(text),
        Timestamp::Other(_) => None,
    })
}
