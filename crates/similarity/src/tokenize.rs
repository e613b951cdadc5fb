use crate::stopwords::is_stopword;

/// Lower-case then trim, the normalization applied before every comparison
pub fn normalize(text: &str) -> String {
  text.to_lowercase().trim().to_string()
}

/// Split text into word tokens on runs of non-word characters.
///
/// Word characters are alphanumerics and `_`. Punctuation never yields a token.
/// Case is preserved; callers normalize first.
pub fn tokenize(text: &str) -> Vec<&str> {
  text
    .split(|c: char| !c.is_alphanumeric() && c != '_')
    .filter(|s| !s.is_empty())
    .collect()
}

/// Tokens that survive stopword filtering
pub fn significant_tokens(text: &str) -> impl Iterator<Item = &str> {
  tokenize(text).into_iter().filter(|t| !is_stopword(t))
}

/// Tokens that survive stopword filtering and are longer than two characters
pub fn content_tokens(text: &str) -> Vec<&str> {
  significant_tokens(text).filter(|t| t.chars().count() > 2).collect()
}

/// The first `n` characters of `text`
pub fn leading_chars(text: &str, n: usize) -> &str {
  match text.char_indices().nth(n) {
    Some((idx, _)) => &text[..idx],
    None => text,
  }
}
