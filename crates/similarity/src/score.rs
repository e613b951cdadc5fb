use crate::tokenize::{content_tokens, leading_chars, normalize, significant_tokens};
use plagscan_core::SimilarityResult;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Weight of title similarity in the overall score
pub const TITLE_WEIGHT: f64 = 0.2;
/// Weight of abstract similarity in the overall score
pub const ABSTRACT_WEIGHT: f64 = 0.3;
/// Weight of content similarity in the overall score
pub const CONTENT_WEIGHT: f64 = 0.5;

/// Leading slice of the uploaded text compared against a project's abstract
pub const ABSTRACT_CHARS: usize = 1000;

/// Below this many characters `text_similarity` uses Jaro-Winkler instead of token overlap
pub const SHORT_TEXT_CHARS: usize = 20;

/// Vocabulary kept per document by `content_similarity`
pub const TOP_TERMS: usize = 100;

/// Score an uploaded document against one existing project.
///
/// Pure and infallible: empty operands score 0 for their component.
pub fn compute_similarity(
  uploaded_title: &str,
  uploaded_text: &str,
  project_title: &str,
  project_abstract: &str,
  project_text: &str,
) -> SimilarityResult {
  let title_similarity = text_similarity(uploaded_title, project_title);
  let abstract_similarity = text_similarity(leading_chars(uploaded_text, ABSTRACT_CHARS), project_abstract);
  let content_similarity = content_similarity(uploaded_text, project_text);

  let overall_similarity =
    title_similarity * TITLE_WEIGHT + abstract_similarity * ABSTRACT_WEIGHT + content_similarity * CONTENT_WEIGHT;

  SimilarityResult {
    title_similarity,
    abstract_similarity,
    content_similarity,
    overall_similarity,
  }
}

/// Similarity of two short texts such as titles or an abstract against an excerpt.
///
/// Short inputs (either side under `SHORT_TEXT_CHARS` characters after
/// normalization) use Jaro-Winkler, since a handful of tokens makes set
/// overlap meaningless. Longer inputs use Jaccard over stopword-filtered tokens.
pub fn text_similarity(a: &str, b: &str) -> f64 {
  if a.is_empty() || b.is_empty() {
    return 0.0;
  }

  let a = normalize(a);
  let b = normalize(b);
  if a.is_empty() || b.is_empty() {
    return 0.0;
  }

  if a.chars().count() < SHORT_TEXT_CHARS || b.chars().count() < SHORT_TEXT_CHARS {
    // Order operands so the score is symmetric
    let (x, y) = if a <= b { (&a, &b) } else { (&b, &a) };
    return strsim::jaro_winkler(x, y).clamp(0.0, 1.0);
  }

  let set_a: HashSet<&str> = significant_tokens(&a).collect();
  let set_b: HashSet<&str> = significant_tokens(&b).collect();
  jaccard_index(&set_a, &set_b)
}

/// Similarity of two full documents.
///
/// Each side is reduced to its `TOP_TERMS` most frequent content tokens
/// (stopwords and tokens of two characters or fewer removed), then compared
/// with Jaccard. Long-tail vocabulary is deliberately ignored.
pub fn content_similarity(a: &str, b: &str) -> f64 {
  if a.is_empty() || b.is_empty() {
    return 0.0;
  }

  let a = normalize(a);
  let b = normalize(b);

  let tokens_a = content_tokens(&a);
  let tokens_b = content_tokens(&b);

  let set_a: HashSet<&str> = top_terms(&tokens_a, TOP_TERMS).into_iter().collect();
  let set_b: HashSet<&str> = top_terms(&tokens_b, TOP_TERMS).into_iter().collect();
  jaccard_index(&set_a, &set_b)
}

/// The `n` most frequent tokens, most frequent first.
///
/// Equal counts keep first-occurrence order, so the cutoff is reproducible.
pub fn top_terms<'a>(tokens: &[&'a str], n: usize) -> Vec<&'a str> {
  let mut counts: Vec<(&'a str, usize)> = Vec::new();
  let mut positions: HashMap<&'a str, usize> = HashMap::new();

  for &token in tokens {
    match positions.get(token) {
      Some(&idx) => counts[idx].1 += 1,
      None => {
        positions.insert(token, counts.len());
        counts.push((token, 1));
      }
    }
  }

  // sort_by is stable
  counts.sort_by(|x, y| y.1.cmp(&x.1));
  counts.into_iter().take(n).map(|(token, _)| token).collect()
}

/// `|A ∩ B| / |A ∪ B|`, or 0 when both sets are empty
pub fn jaccard_index<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
  let intersection = a.intersection(b).count();
  let union = a.len() + b.len() - intersection;

  if union == 0 {
    return 0.0;
  }

  intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  const LONG_A: &str = "A distributed sensor network monitors traffic density across intersections \
    and adapts signal timing using reinforcement learning agents deployed on edge devices.";
  const LONG_B: &str = "Volunteers catalogue botanical specimens, photograph herbarium sheets, \
    and publish taxonomic descriptions for regional flora inventories.";

  #[test]
  fn test_text_similarity_empty() {
    assert_eq!(text_similarity("", "anything"), 0.0);
    assert_eq!(text_similarity("anything", ""), 0.0);
    assert_eq!(text_similarity("", ""), 0.0);
    // Whitespace-only normalizes to empty
    assert_eq!(text_similarity("   ", "   "), 0.0);
  }

  #[test]
  fn test_identical_short_titles() {
    assert_eq!(text_similarity("Smart Traffic System", "Smart Traffic System"), 1.0);
    assert_eq!(text_similarity("AI Chatbot", "ai chatbot  "), 1.0);
  }

  #[test]
  fn test_short_titles_tolerate_typos() {
    let sim = text_similarity("Library System", "Libary System");
    assert!(sim > 0.9, "similarity was {sim}");
    assert!(sim < 1.0);
  }

  #[test]
  fn test_jaro_winkler_boundary() {
    // 19 characters: Jaro-Winkler on differently ordered strings is below 1
    let a19 = "delta gamma alphabe";
    let b19 = "alphabe gamma delta";
    assert_eq!(a19.len(), 19);
    assert!(text_similarity(a19, b19) < 1.0);

    // 20 characters: same token set, so Jaccard is exactly 1
    let a20 = "delta gamma alphabet";
    let b20 = "alphabet gamma delta";
    assert_eq!(a20.len(), 20);
    assert_eq!(text_similarity(a20, b20), 1.0);
  }

  #[test]
  fn test_long_text_self_similarity() {
    assert_eq!(text_similarity(LONG_A, LONG_A), 1.0);
  }

  #[test]
  fn test_long_text_disjoint() {
    assert_eq!(text_similarity(LONG_A, LONG_B), 0.0);
  }

  #[test]
  fn test_long_text_only_stopwords() {
    let a = "and the of to in is it that was for on are";
    let b = "with as by at from this be or an have had";
    assert_eq!(text_similarity(a, b), 0.0);
  }

  #[test]
  fn test_content_similarity_empty_operand() {
    assert_eq!(content_similarity("the cat sat on the mat", ""), 0.0);
    assert_eq!(content_similarity("", "the cat sat on the mat"), 0.0);
  }

  #[test]
  fn test_content_similarity_no_shared_vocabulary() {
    assert_eq!(content_similarity(LONG_A, LONG_B), 0.0);
  }

  #[test]
  fn test_content_similarity_partial_overlap() {
    // {network, traffic, signal} vs {network, traffic, weather}
    let sim = content_similarity("network traffic signal", "Network TRAFFIC weather");
    assert_eq!(sim, 2.0 / 4.0);
  }

  #[test]
  fn test_content_similarity_ignores_short_tokens() {
    // Only "ai", "ml", "go" would overlap, and all are too short
    assert_eq!(content_similarity("ai ml go robotics", "ai ml go ledger"), 0.0);
  }

  #[test]
  fn test_top_terms_orders_by_frequency() {
    let tokens = vec!["beta", "alpha", "beta", "gamma", "alpha", "beta"];
    assert_eq!(top_terms(&tokens, 2), vec!["beta", "alpha"]);
  }

  #[test]
  fn test_top_terms_ties_keep_first_occurrence() {
    let tokens = vec!["delta", "alpha", "charlie", "bravo"];
    assert_eq!(top_terms(&tokens, 3), vec!["delta", "alpha", "charlie"]);
  }

  #[test]
  fn test_content_similarity_caps_vocabulary() {
    // 101 distinct terms, each once: the last one falls outside the top 100
    let words: Vec<String> = (0..101).map(|i| format!("term{i:03}")).collect();
    let document = words.join(" ");

    assert_eq!(content_similarity(&document, "term100"), 0.0);
    assert_eq!(content_similarity(&document, "term000"), 1.0 / 100.0);
  }

  #[test]
  fn test_jaccard_index() {
    let a: HashSet<&str> = ["x", "y", "z"].into_iter().collect();
    let b: HashSet<&str> = ["y", "z", "w"].into_iter().collect();
    assert_eq!(jaccard_index(&a, &b), 0.5);

    let empty: HashSet<&str> = HashSet::new();
    assert_eq!(jaccard_index(&empty, &empty), 0.0);
    assert_eq!(jaccard_index(&a, &empty), 0.0);
  }

  #[test]
  fn test_compute_similarity_weights() {
    let result = compute_similarity("AI Chatbot", LONG_A, "AI Chatbot", LONG_A, LONG_A);
    assert_eq!(result.title_similarity, 1.0);
    assert_eq!(result.abstract_similarity, 1.0);
    assert_eq!(result.content_similarity, 1.0);
    assert_eq!(result.overall_similarity, 1.0);
  }

  #[test]
  fn test_compute_similarity_title_only_match() {
    let filler = "Volunteers catalogue botanical specimens for regional herbarium archives. ".repeat(20);
    assert!(filler.chars().count() > 1000);

    let result = compute_similarity("AI Chatbot", &filler, "AI Chatbot", LONG_A, LONG_A);
    assert_eq!(result.title_similarity, 1.0);
    assert_eq!(result.abstract_similarity, 0.0);
    assert_eq!(result.content_similarity, 0.0);
    assert_eq!(result.overall_similarity, TITLE_WEIGHT);
  }

  #[test]
  fn test_compute_similarity_empty_inputs() {
    let result = compute_similarity("", "", "", "", "");
    assert_eq!(result, SimilarityResult::default());
  }

  #[test]
  fn test_abstract_uses_leading_excerpt_only() {
    // The matching abstract text sits beyond the first 1000 characters of the upload
    let padding = "x".repeat(ABSTRACT_CHARS);
    let upload = format!("{padding} {LONG_A}");
    let result = compute_similarity("", &upload, "", LONG_A, "");
    assert_eq!(result.abstract_similarity, 0.0);

    let upload = format!("{LONG_A} {padding}");
    let result = compute_similarity("", &upload, "", LONG_A, "");
    assert!(result.abstract_similarity > 0.9);
  }
}
