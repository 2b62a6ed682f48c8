//! Registry item categories.

use core::fmt;

/// Kind of registry item the pipeline tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// A model repository.
    Model,
    /// A dataset repository.
    Dataset,
}

impl Category {
    /// All categories, in the order they appear in the digest.
    pub const ALL: [Category; 2] = [Category::Model, Category::Dataset];

    /// Path segment of the registry listing endpoint (e.g. `/api/models`).
    pub fn path_segment(&self) -> &'static str {
        match self {
            Category::Model => "models",
            Category::Dataset => "datasets",
        }
    }

    /// Plural label used in log lines.
    pub fn plural(&self) -> &'static str {
        self.path_segment()
    }

    /// Section heading used in the rendered digest.
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Model => "🚀 New Trending Models (Last 24h)",
            Category::Dataset => "📊 New Trending Datasets (Last 24h)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Model => write!(f, "model"),
            Category::Dataset => write!(f, "dataset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segments() {
        assert_eq!(Category::Model.path_segment(), "models");
        assert_eq!(Category::Dataset.path_segment(), "datasets");
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Model.to_string(), "model");
        assert_eq!(Category::Dataset.to_string(), "dataset");
    }
}
