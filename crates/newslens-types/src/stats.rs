use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The five confidence ranges the service buckets results into, low to high.
pub const CONFIDENCE_RANGES: [&str; 5] =
    ["0.0-0.2", "0.2-0.4", "0.4-0.6", "0.6-0.8", "0.8-1.0"];

/// Fake/real/total triple. Invariant (server-side): fake + real == total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCount {
    pub total: u64,
    pub fake: u64,
    pub real: u64,
}

impl StatCount {
    /// Share of fake entries, in percent. 0 when the bucket is empty.
    pub fn fake_share(&self) -> f64 {
        percentage(self.fake, self.total)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceStats {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub distribution: BTreeMap<String, u64>,
}

/// Aggregate summary for a time window, computed server-side on every fetch.
///
/// The client treats every field as authoritative; it never recomputes
/// min/max/average from raw records (it was never given them).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub total_count: StatCount,
    pub recent_count: StatCount,
    pub by_source: BTreeMap<String, StatCount>,
    pub confidence_stats: ConfidenceStats,
    #[serde(default)]
    pub daily_counts: BTreeMap<String, StatCount>,
}

impl StatisticsSummary {
    pub fn fake_percentage(&self) -> f64 {
        percentage(self.total_count.fake, self.total_count.total)
    }

    pub fn real_percentage(&self) -> f64 {
        percentage(self.total_count.real, self.total_count.total)
    }

    /// Share of one distribution bucket against all analyzed articles.
    pub fn distribution_percentage(&self, count: u64) -> f64 {
        percentage(count, self.total_count.total)
    }

    /// Distribution counts in range order; ranges the server omitted count 0.
    pub fn ordered_distribution(&self) -> Vec<(&'static str, u64)> {
        CONFIDENCE_RANGES
            .iter()
            .map(|range| {
                (
                    *range,
                    self.confidence_stats
                        .distribution
                        .get(*range)
                        .copied()
                        .unwrap_or(0),
                )
            })
            .collect()
    }

    /// Sources ranked by total analyzed, descending, top `n`. The sort is
    /// stable, so ties keep the map's iteration order.
    pub fn top_sources(&self, n: usize) -> Vec<(&str, &StatCount)> {
        let mut sources: Vec<(&str, &StatCount)> = self
            .by_source
            .iter()
            .map(|(name, counts)| (name.as_str(), counts))
            .collect();
        sources.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        sources.truncate(n);
        sources
    }
}

/// part/total in percent, 0 when total is 0 so empty datasets render "0.0%".
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(total: u64, fake: u64) -> StatCount {
        StatCount {
            total,
            fake,
            real: total - fake,
        }
    }

    #[test]
    fn percentage_guards_empty_totals() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 0), 0.0);
        assert!((percentage(1, 3) - 33.333_333).abs() < 0.001);
    }

    #[test]
    fn summary_percentages_from_counts() {
        let summary = StatisticsSummary {
            total_count: counts(40, 10),
            ..Default::default()
        };
        assert_eq!(summary.fake_percentage(), 25.0);
        assert_eq!(summary.real_percentage(), 75.0);

        let empty = StatisticsSummary::default();
        assert_eq!(empty.fake_percentage(), 0.0);
        assert_eq!(empty.distribution_percentage(0), 0.0);
    }

    #[test]
    fn ordered_distribution_fills_missing_ranges() {
        let mut summary = StatisticsSummary::default();
        summary
            .confidence_stats
            .distribution
            .insert("0.8-1.0".to_string(), 7);

        let ordered = summary.ordered_distribution();
        assert_eq!(ordered.len(), 5);
        assert_eq!(ordered[0], ("0.0-0.2", 0));
        assert_eq!(ordered[4], ("0.8-1.0", 7));
    }

    #[test]
    fn distribution_counts_sum_to_total() {
        let json = r#"{
            "total_count": {"total": 10, "fake": 4, "real": 6},
            "recent_count": {"total": 3, "fake": 1, "real": 2},
            "by_source": {},
            "confidence_stats": {
                "average": 0.71, "min": 0.2, "max": 0.99,
                "distribution": {
                    "0.0-0.2": 0, "0.2-0.4": 1, "0.4-0.6": 2,
                    "0.6-0.8": 3, "0.8-1.0": 4
                }
            }
        }"#;
        let summary: StatisticsSummary = serde_json::from_str(json).unwrap();
        let sum: u64 = summary.ordered_distribution().iter().map(|(_, c)| c).sum();
        assert_eq!(sum, summary.total_count.total);
    }

    #[test]
    fn top_sources_ranks_by_total_with_stable_ties() {
        let mut summary = StatisticsSummary::default();
        summary.by_source.insert("cnn.com".to_string(), counts(5, 1));
        summary.by_source.insert("bbc.com".to_string(), counts(5, 2));
        summary.by_source.insert("blog.example".to_string(), counts(9, 9));

        let ranked = summary.top_sources(2);
        assert_eq!(ranked[0].0, "blog.example");
        // Tie on total: BTreeMap iteration order (alphabetical) is kept.
        assert_eq!(ranked[1].0, "bbc.com");
        assert_eq!(ranked.len(), 2);
    }
}
