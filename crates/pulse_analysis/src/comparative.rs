use pulse_core::{
    AnalyzedArticle, ComparativeReport, CoverageDifference, Sentiment, SentimentDistribution,
};

const MAX_COMMON_TOPICS: usize = 5;
const THEME_MENTION_LIMIT: usize = 3;

/// Merges per-article results into one cross-article report: sentiment
/// distribution, common topics, coverage-difference statements and the
/// dominant-sentiment narrative.
///
/// An empty batch is an upstream contract violation; it degrades to the
/// zero-filled placeholder report instead of failing.
pub fn aggregate(articles: &[AnalyzedArticle]) -> ComparativeReport {
    if articles.is_empty() {
        return ComparativeReport::empty();
    }

    let mut distribution = SentimentDistribution::default();
    for article in articles {
        distribution.record(article.sentiment);
    }

    let common = common_topics(articles);
    let coverage_differences = coverage_differences(&distribution, &common);
    let final_sentiment = final_sentiment(&distribution, articles.len());

    ComparativeReport {
        sentiment_distribution: distribution,
        coverage_differences,
        common_topics: if common.is_empty() {
            vec!["No common topics".to_string()]
        } else {
            common
        },
        final_sentiment,
    }
}

/// Topics appearing in more than one article, ordered by descending
/// frequency (first-seen order on ties), capped at 5.
fn common_topics(articles: &[AnalyzedArticle]) -> Vec<String> {
    let mut frequencies: Vec<(String, usize)> = Vec::new();
    for article in articles {
        for topic in &article.topics {
            if let Some((_, count)) = frequencies.iter_mut().find(|(t, _)| t == topic) {
                *count += 1;
            } else {
                frequencies.push((topic.clone(), 1));
            }
        }
    }

    frequencies.retain(|(_, count)| *count > 1);
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    frequencies.truncate(MAX_COMMON_TOPICS);
    frequencies.into_iter().map(|(topic, _)| topic).collect()
}

fn coverage_differences(
    distribution: &SentimentDistribution,
    common: &[String],
) -> Vec<CoverageDifference> {
    let mut differences = Vec::new();

    if distribution.positive > distribution.negative {
        differences.push(CoverageDifference {
            comparison: format!(
                "{} articles have positive sentiment, while {} are negative.",
                distribution.positive, distribution.negative
            ),
            impact: "The majority of coverage is positive, suggesting favorable public perception."
                .to_string(),
        });
    } else if distribution.negative > distribution.positive {
        differences.push(CoverageDifference {
            comparison: format!(
                "{} articles have negative sentiment, while {} are positive.",
                distribution.negative, distribution.positive
            ),
            impact: "The majority of coverage is negative, suggesting potential reputation issues."
                .to_string(),
        });
    } else {
        differences.push(CoverageDifference {
            comparison: "Coverage is evenly split between positive and negative sentiment."
                .to_string(),
            impact: "Mixed reception in the media with no clear sentiment trend.".to_string(),
        });
    }

    if !common.is_empty() {
        let themes: Vec<&str> = common
            .iter()
            .take(THEME_MENTION_LIMIT)
            .map(String::as_str)
            .collect();
        differences.push(CoverageDifference {
            comparison: format!(
                "Common themes across articles include {}.",
                themes.join(", ")
            ),
            impact: "These recurring themes represent the main public discussion points about the company."
                .to_string(),
        });
    }

    differences
}

/// Picks the label with the maximum count. Ties resolve by fixed
/// priority Positive > Negative > Neutral.
fn dominant_sentiment(distribution: &SentimentDistribution) -> Sentiment {
    let mut dominant = Sentiment::Positive;
    for candidate in [Sentiment::Negative, Sentiment::Neutral] {
        if distribution.count(candidate) > distribution.count(dominant) {
            dominant = candidate;
        }
    }
    dominant
}

fn final_sentiment(distribution: &SentimentDistribution, total: usize) -> String {
    match dominant_sentiment(distribution) {
        Sentiment::Positive => format!(
            "Coverage is predominantly positive ({}/{} articles). Suggests favorable public perception.",
            distribution.positive, total
        ),
        Sentiment::Negative => format!(
            "Coverage is predominantly negative ({}/{} articles). May indicate challenges or controversies.",
            distribution.negative, total
        ),
        Sentiment::Neutral => format!(
            "Coverage is mostly neutral ({}/{} articles). Suggests factual reporting with limited emotional content.",
            distribution.neutral, total
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(sentiment: Sentiment, topics: &[&str]) -> AnalyzedArticle {
        AnalyzedArticle {
            title: "t".to_string(),
            summary: "s".to_string(),
            sentiment,
            topics: topics.iter().map(|t| t.to_string()).collect(),
            url: "http://test.com".to_string(),
        }
    }

    #[test]
    fn test_distribution_sums_to_batch_size() {
        let batch = vec![
            article(Sentiment::Positive, &[]),
            article(Sentiment::Neutral, &[]),
            article(Sentiment::Negative, &[]),
            article(Sentiment::Negative, &[]),
        ];
        let report = aggregate(&batch);
        assert_eq!(report.sentiment_distribution.total(), batch.len());
    }

    #[test]
    fn test_positive_majority_narrative() {
        let batch = vec![
            article(Sentiment::Positive, &[]),
            article(Sentiment::Positive, &[]),
            article(Sentiment::Negative, &[]),
        ];
        let report = aggregate(&batch);

        assert_eq!(report.sentiment_distribution.positive, 2);
        assert_eq!(report.sentiment_distribution.negative, 1);
        assert_eq!(report.sentiment_distribution.neutral, 0);

        let first = &report.coverage_differences[0];
        assert!(first.comparison.contains('2'));
        assert!(first.comparison.contains('1'));
        assert!(first.impact.contains("favorable"));
        assert!(report.final_sentiment.contains("predominantly positive"));
        assert!(report.final_sentiment.contains("2/3"));
    }

    #[test]
    fn test_negative_majority_narrative() {
        let batch = vec![
            article(Sentiment::Negative, &[]),
            article(Sentiment::Negative, &[]),
            article(Sentiment::Positive, &[]),
        ];
        let report = aggregate(&batch);
        assert!(report.coverage_differences[0]
            .impact
            .contains("reputation issues"));
        assert!(report.final_sentiment.contains("predominantly negative"));
    }

    #[test]
    fn test_even_split_fires_mixed_branch() {
        let batch = vec![
            article(Sentiment::Positive, &[]),
            article(Sentiment::Negative, &[]),
        ];
        let report = aggregate(&batch);
        assert!(report.coverage_differences[0]
            .comparison
            .contains("evenly split"));
    }

    #[test]
    fn test_common_topics_need_two_articles() {
        let batch = vec![
            article(Sentiment::Neutral, &["Ai", "Cloud"]),
            article(Sentiment::Neutral, &["Ai", "Chips"]),
            article(Sentiment::Neutral, &["Ai", "Cloud"]),
        ];
        let report = aggregate(&batch);
        assert_eq!(
            report.common_topics,
            vec!["Ai".to_string(), "Cloud".to_string()]
        );
        let themes = &report.coverage_differences[1];
        assert!(themes.comparison.contains("Ai"));
        assert!(themes.comparison.contains("Cloud"));
    }

    #[test]
    fn test_no_common_topics_placeholder() {
        let batch = vec![
            article(Sentiment::Neutral, &["Solar"]),
            article(Sentiment::Neutral, &["Wind"]),
        ];
        let report = aggregate(&batch);
        assert_eq!(report.common_topics, vec!["No common topics".to_string()]);
        // No theme statement when nothing recurs.
        assert_eq!(report.coverage_differences.len(), 1);
    }

    #[test]
    fn test_common_topics_capped_at_five() {
        let topics: Vec<String> = (0..8).map(|i| format!("Topic{}", i)).collect();
        let refs: Vec<&str> = topics.iter().map(String::as_str).collect();
        let batch = vec![
            article(Sentiment::Neutral, &refs),
            article(Sentiment::Neutral, &refs),
        ];
        let report = aggregate(&batch);
        assert_eq!(report.common_topics.len(), 5);
    }

    #[test]
    fn test_neutral_dominant_narrative() {
        let batch = vec![
            article(Sentiment::Neutral, &[]),
            article(Sentiment::Neutral, &[]),
            article(Sentiment::Positive, &[]),
        ];
        let report = aggregate(&batch);
        assert!(report.final_sentiment.contains("mostly neutral"));
        assert!(report.final_sentiment.contains("2/3"));
    }

    #[test]
    fn test_three_way_tie_prefers_positive() {
        let batch = vec![
            article(Sentiment::Positive, &[]),
            article(Sentiment::Negative, &[]),
            article(Sentiment::Neutral, &[]),
        ];
        let report = aggregate(&batch);
        assert!(report.final_sentiment.contains("predominantly positive"));
    }

    #[test]
    fn test_empty_batch_fallback() {
        let report = aggregate(&[]);
        assert_eq!(report.sentiment_distribution.total(), 0);
        assert!(report.coverage_differences.is_empty());
        assert_eq!(report.common_topics, vec!["No common topics".to_string()]);
        assert_eq!(
            report.final_sentiment,
            "Could not determine overall sentiment."
        );
    }
}
