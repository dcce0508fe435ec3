use std::collections::HashMap;

pub const DEFAULT_TOP_N: usize = 3;

const STOPWORDS: &[&str] = &[
    "the", "and", "a", "to", "in", "of", "is", "it", "that", "for", "on",
    "with", "as", "was", "by", "at",
];

const FALLBACK_TOPIC: &str = "General News";

/// Derives a small ranked set of keyword/phrase labels from one document
/// via unigram+bigram frequency. Topics are cosmetic; failure degrades
/// to a placeholder.
pub struct TopicExtractor {
    top_n: usize,
}

impl TopicExtractor {
    pub fn new() -> Self {
        Self { top_n: DEFAULT_TOP_N }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return vec![FALLBACK_TOPIC.to_string()];
        }

        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in &tokens {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }
        for pair in tokens.windows(2) {
            *counts
                .entry(format!("{} {}", pair[0], pair[1]))
                .or_insert(0) += 1;
        }

        // Descending frequency, alphabetical on ties for determinism.
        let mut features: Vec<(String, usize)> = counts.into_iter().collect();
        features.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        features.truncate(self.top_n * 2);

        features
            .into_iter()
            .take(self.top_n)
            .map(|(feature, _)| title_case(&feature))
            .collect()
    }
}

impl Default for TopicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| w.chars().count() > 2 && !STOPWORDS.contains(w))
        .map(str::to_string)
        .collect()
}

fn title_case(feature: &str) -> String {
    feature
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_most_frequent_terms() {
        let extractor = TopicExtractor::new();
        let topics = extractor.extract(
            "Electric vehicles dominate the market. Electric vehicles sell well. \
             Electric vehicles everywhere. Batteries improve.",
        );
        assert_eq!(topics.len(), 3);
        assert!(topics.contains(&"Electric".to_string()));
        assert!(topics.contains(&"Vehicles".to_string()));
        assert!(topics.contains(&"Electric Vehicles".to_string()));
    }

    #[test]
    fn test_empty_text_falls_back() {
        let extractor = TopicExtractor::new();
        assert_eq!(extractor.extract(""), vec!["General News".to_string()]);
    }

    #[test]
    fn test_all_stopword_text_falls_back() {
        let extractor = TopicExtractor::new();
        assert_eq!(
            extractor.extract("the and to in of is it at by"),
            vec!["General News".to_string()]
        );
    }

    #[test]
    fn test_short_tokens_dropped() {
        let extractor = TopicExtractor::new();
        // "ab" and "yz" are too short to count as tokens.
        let topics = extractor.extract("ab yz market market market");
        assert_eq!(topics[0], "Market");
        assert!(!topics.contains(&"Ab".to_string()));
    }

    #[test]
    fn test_respects_top_n() {
        let extractor = TopicExtractor::new().with_top_n(1);
        let topics = extractor.extract("shares shares revenue revenue revenue costs");
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0], "Revenue");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("electric vehicles"), "Electric Vehicles");
        assert_eq!(title_case("market"), "Market");
    }
}
