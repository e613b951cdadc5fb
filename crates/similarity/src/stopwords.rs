//! English stopwords excluded from token-overlap comparisons.
//!
//! Membership is fixed: scores are only reproducible across runs and
//! deployments if every scorer filters exactly this set. Contraction
//! fragments ("s", "ll", "don", "wouldn", ...) are included because the
//! tokenizer splits "don't" into "don" and "t".

use std::collections::HashSet;
use std::sync::LazyLock;

/// Every stopword, in reference order
pub const STOPWORDS: &[&str] = &[
  // pronouns
  "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours", "yourself", "yourselves",
  "he", "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
  "theirs", "themselves",
  // interrogatives and demonstratives
  "what", "which", "who", "whom", "this", "that", "these", "those",
  // be / have / do
  "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does", "did",
  "doing",
  // articles, conjunctions, prepositions, adverbs
  "a", "an", "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for", "with",
  "about", "against", "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
  "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once", "here", "there",
  "when", "where", "why", "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
  "nor", "not", "only", "own", "same", "so", "than", "too", "very",
  // modals and contraction fragments
  "s", "t", "can", "will", "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y",
  // negated contraction stems
  "ain", "aren", "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn",
  "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Check a lower-cased token against the stopword set
pub fn is_stopword(token: &str) -> bool {
  STOPWORD_SET.contains(token)
}
