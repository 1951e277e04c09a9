// SentiView - core/summary.rs
//
// Per-sentiment breakdown of the filtered rows.

use crate::core::model::ParseResult;
use crate::util::constants::BLANK_SENTIMENT_LABEL;
use std::collections::HashMap;

/// Count of filtered rows carrying one sentiment value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentCount {
    pub sentiment: String,
    pub count: usize,
}

/// Aggregate statistics for one parse.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SentimentSummary {
    /// Rows kept after exclusion.
    pub total: usize,
    /// Rows dropped by the exclusion prefixes.
    pub excluded: usize,
    /// Sorted by count descending, then sentiment name.
    pub counts: Vec<SentimentCount>,
}

/// Build the sentiment breakdown for a parse result.
///
/// Sentiment values are grouped trimmed and lowercased; empty values are
/// grouped under a "(blank)" label.
pub fn summarise(result: &ParseResult) -> SentimentSummary {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in &result.rows {
        let value = row.field(result.columns.sentiment).trim().to_lowercase();
        let key = if value.is_empty() {
            BLANK_SENTIMENT_LABEL.to_string()
        } else {
            value
        };
        *counts.entry(key).or_default() += 1;
    }

    let mut counts: Vec<SentimentCount> = counts
        .into_iter()
        .map(|(sentiment, count)| SentimentCount { sentiment, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.sentiment.cmp(&b.sentiment)));

    SentimentSummary {
        total: result.rows.len(),
        excluded: result.excluded,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_content;

    #[test]
    fn test_summary_groups_and_sorts() {
        let raw = "Hit Sentence\tSentiment\n\
                   a,Positive\n\
                   b,negative\n\
                   c, positive \n\
                   RT d,negative\n\
                   e,\n\
                   f,neutral\n\
                   g,Negative";
        let summary = summarise(&parse_content(raw).unwrap());
        assert_eq!(summary.total, 6);
        assert_eq!(summary.excluded, 1);
        let flat: Vec<(&str, usize)> = summary
            .counts
            .iter()
            .map(|c| (c.sentiment.as_str(), c.count))
            .collect();
        assert_eq!(
            flat,
            vec![("negative", 2), ("positive", 2), ("(blank)", 1), ("neutral", 1)]
        );
    }

    #[test]
    fn test_summary_of_empty_result() {
        let summary = summarise(&parse_content("Hit Sentence\tSentiment").unwrap());
        assert_eq!(summary, SentimentSummary::default());
    }
}
