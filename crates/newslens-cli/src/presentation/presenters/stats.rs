use crate::presentation::formatters::text::{confidence_percent, format_percent};
use crate::presentation::view_models::{
    DistributionRowViewModel, SourceRowViewModel, StatsViewModel,
};
use newslens_types::{StatisticsSummary, TimeWindow};

const TOP_SOURCES: usize = 6;

pub fn present_statistics(summary: &StatisticsSummary, window: TimeWindow) -> StatsViewModel {
    let sources = summary
        .top_sources(TOP_SOURCES)
        .into_iter()
        .map(|(name, counts)| SourceRowViewModel {
            name: name.to_string(),
            total: counts.total,
            fake: counts.fake,
            fake_percent: format_percent(counts.fake_share()),
        })
        .collect();

    let distribution = summary
        .ordered_distribution()
        .into_iter()
        .map(|(range, count)| DistributionRowViewModel {
            range: range.to_string(),
            label: range_label(range).to_string(),
            count,
            percent: format_percent(summary.distribution_percentage(count)),
        })
        .collect();

    StatsViewModel {
        window: window.label().to_string(),
        total_analyzed: summary.total_count.total,
        recent_analyzed: summary.recent_count.total,
        fake_count: summary.total_count.fake,
        fake_percent: format_percent(summary.fake_percentage()),
        real_count: summary.total_count.real,
        real_percent: format_percent(summary.real_percentage()),
        average_confidence: confidence_percent(summary.confidence_stats.average),
        min_confidence: confidence_percent(summary.confidence_stats.min),
        max_confidence: confidence_percent(summary.confidence_stats.max),
        sources,
        distribution,
    }
}

/// Reading of a confidence range: low confidence means the model leaned
/// real, high confidence that it leaned fake.
fn range_label(range: &str) -> &'static str {
    match range {
        "0.0-0.2" => "Very Confident Real",
        "0.2-0.4" => "Somewhat Confident Real",
        "0.4-0.6" => "Uncertain",
        "0.6-0.8" => "Somewhat Confident Fake",
        _ => "Very Confident Fake",
    }
}
