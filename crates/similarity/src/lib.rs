//! Document similarity scoring.
//!
//! Compares an uploaded document against a stored project on three axes
//! (title, abstract, content) and blends them into one overall score.
//! Everything here is pure and reentrant; the only shared state is the
//! read-only stopword set.

pub mod score;
pub mod stopwords;
pub mod tokenize;

pub use score::{
  ABSTRACT_CHARS, ABSTRACT_WEIGHT, CONTENT_WEIGHT, SHORT_TEXT_CHARS, TITLE_WEIGHT, TOP_TERMS, compute_similarity,
  content_similarity, jaccard_index, text_similarity, top_terms,
};
pub use stopwords::{STOPWORDS, is_stopword};
pub use tokenize::{leading_chars, normalize, tokenize};
