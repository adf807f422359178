//! Extractive summarization: keep the highest scoring sentences of the body,
//! in their original order.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_SENTENCES: usize = 5;

/// Longest synopsis kept, in characters, before the "..." marker.
pub const MAX_SYNOPSIS_CHARS: usize = 1000;

static SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^.!?]+(?:[.!?]+["'”’)\]]*|$)"#).unwrap());
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}'’-]*").unwrap());

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
        "during", "each", "few", "for", "from", "further", "had", "has", "have", "having", "he",
        "her", "here", "hers", "herself", "him", "himself", "his", "how", "i", "if", "in",
        "into", "is", "it", "its", "itself", "just", "me", "more", "most", "my", "myself", "no",
        "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours",
        "ourselves", "out", "over", "own", "said", "same", "says", "she", "should", "so", "some",
        "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
        "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "very",
        "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
        "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug, Clone, Copy)]
pub struct Summarizer {
    max_sentences: usize,
}

impl Summarizer {
    pub fn new(max_sentences: usize) -> Self {
        Self {
            max_sentences: max_sentences.max(1),
        }
    }

    /// Picks up to `max_sentences` sentences of `text`. Words shared with
    /// `title` raise a sentence's score. The result is cut to
    /// [`MAX_SYNOPSIS_CHARS`].
    pub fn summarize(&self, title: &str, text: &str) -> String {
        truncate_synopsis(self.select_sentences(title, text))
    }

    fn select_sentences(&self, title: &str, text: &str) -> String {
        let sentences = split_sentences(text);
        if sentences.len() <= self.max_sentences {
            return sentences.join(" ");
        }

        let frequencies = term_frequencies(text);
        let max_frequency = frequencies.values().copied().max().unwrap_or(1) as f64;
        let title_terms: HashSet<String> = keywords(title).collect();

        let mut scored: Vec<(usize, f64)> = sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| {
                let terms: Vec<String> = keywords(sentence).collect();
                if terms.is_empty() {
                    return (index, 0.0);
                }

                let density = terms
                    .iter()
                    .map(|term| frequencies.get(term).copied().unwrap_or(0) as f64 / max_frequency)
                    .sum::<f64>()
                    / terms.len() as f64;

                let title_overlap = if title_terms.is_empty() {
                    0.0
                } else {
                    let shared: HashSet<&String> =
                        terms.iter().filter(|t| title_terms.contains(*t)).collect();
                    shared.len() as f64 / title_terms.len() as f64
                };

                (index, density + title_overlap)
            })
            .collect();

        // Highest score first; earlier sentence wins ties
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.truncate(self.max_sentences);
        scored.sort_by_key(|(index, _)| *index);

        scored
            .into_iter()
            .map(|(index, _)| sentences[index].as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(DEFAULT_SENTENCES)
    }
}

fn truncate_synopsis(text: String) -> String {
    let Some((cut, _)) = text.char_indices().nth(MAX_SYNOPSIS_CHARS) else {
        return text;
    };

    let head = &text[..cut];
    // Try to break at a word boundary
    let head = head.rfind(' ').map_or(head, |pos| &head[..pos]);
    format!("{}...", head.trim_end())
}

fn split_sentences(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(|paragraph| SENTENCE.find_iter(paragraph))
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|sentence| sentence.chars().any(char::is_alphanumeric))
        .collect()
}

/// Lowercased words that are not stopwords.
fn keywords(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|word| !STOPWORDS.contains(word.as_str()))
}

fn term_frequencies(text: &str) -> HashMap<String, usize> {
    let mut frequencies = HashMap::new();
    for word in keywords(text) {
        *frequencies.entry(word).or_insert(0) += 1;
    }
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("First one. Second one!\nThird \"quoted.\" Trailing words");
        assert_eq!(
            sentences,
            vec!["First one.", "Second one!", "Third \"quoted.\"", "Trailing words"]
        );
    }

    #[test]
    fn test_short_text_returned_whole() {
        let summarizer = Summarizer::new(3);
        assert_eq!(
            summarizer.summarize("Title", "One fact.  Two facts."),
            "One fact. Two facts."
        );
    }

    #[test]
    fn test_empty_text_gives_empty_synopsis() {
        assert_eq!(Summarizer::default().summarize("Title", ""), "");
    }

    #[test]
    fn test_keeps_relevant_sentences_in_order() {
        let text = "The volcano erupted on Tuesday morning.\n\
                    Residents near the volcano were evacuated.\n\
                    A local bakery sold bread.\n\
                    Ash from the volcano erupted again at night.\n\
                    The weather was mild.";
        let summary = Summarizer::new(2).summarize("Volcano erupted", text);

        assert_eq!(
            summary,
            "The volcano erupted on Tuesday morning. Ash from the volcano erupted again at night."
        );
    }

    #[test]
    fn test_deterministic() {
        let text = "Alpha beta. Gamma delta. Alpha gamma. Beta delta. Epsilon zeta. Eta theta.";
        let summarizer = Summarizer::new(2);
        assert_eq!(
            summarizer.summarize("", text),
            summarizer.summarize("", text)
        );
    }

    #[test]
    fn test_zero_sentences_clamped() {
        let summary = Summarizer::new(0).summarize("", "First point. Second point. Third point.");
        assert_eq!(summary, "First point.");
    }

    #[test]
    fn test_long_unpunctuated_body_is_cut() {
        let text = "headline ".repeat(2000);
        let summary = Summarizer::default().summarize("Headline", &text);

        assert!(summary.ends_with("..."));
        assert!(summary.chars().count() <= MAX_SYNOPSIS_CHARS + 3);
        // Cut on a word boundary
        assert!(summary.trim_end_matches("...").ends_with("headline"));
    }

    #[test]
    fn test_truncation_is_char_safe() {
        let text = "é".repeat(MAX_SYNOPSIS_CHARS + 10);
        let synopsis = truncate_synopsis(text);

        assert_eq!(synopsis.chars().count(), MAX_SYNOPSIS_CHARS + 3);
        assert!(synopsis.ends_with("..."));
    }
}
