//! Popularity ranking.

use hubdigest_types::ItemSummary;

/// Order summaries by likes, most liked first.
///
/// The sort is stable: items with equal likes keep the registry's order,
/// which is newest first. The input is left untouched.
pub fn rank(summaries: &[ItemSummary]) -> Vec<ItemSummary> {
    let mut ranked = summaries.to_vec();
    ranked.sort_by(|a, b| b.likes.cmp(&a.likes));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use hubdigest_types::RawCandidate;

    fn summary(id: &str, likes: u64) -> ItemSummary {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        ItemSummary::from_candidate(&RawCandidate::new(id).likes(likes), created)
    }

    fn ids(summaries: &[ItemSummary]) -> Vec<&str> {
        summaries.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_sorted_descending() {
        let input = vec![summary("a", 1), summary("b", 10), summary("c", 5)];
        assert_eq!(ids(&rank(&input)), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let input = vec![
            summary("first", 3),
            summary("top", 9),
            summary("second", 3),
            summary("third", 3),
            summary("zero", 0),
        ];
        assert_eq!(
            ids(&rank(&input)),
            vec!["top", "first", "second", "third", "zero"]
        );
    }

    #[test]
    fn test_input_untouched_and_permutation() {
        let input = vec![summary("a", 2), summary("b", 7), summary("c", 2)];
        let ranked = rank(&input);

        assert_eq!(ids(&input), vec!["a", "b", "c"]);
        assert_eq!(ranked.len(), input.len());
        for item in &input {
            assert!(ranked.contains(item));
        }
    }

    #[test]
    fn test_empty() {
        assert!(rank(&[]).is_empty());
    }
}
