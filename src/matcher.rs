//! Keyword matching between response text and candidate sources.
//!
//! Matching is deliberately naive: a source matches when any
//! whitespace-delimited token of its context, lower-cased, occurs anywhere
//! in the lower-cased response. Partial words and one-letter tokens match
//! too, and downstream expectations depend on that.

use crate::models::{Citation, Source};

/// Splits a context string into its whitespace-delimited tokens.
///
/// The information separators U+001C..=U+001F count as whitespace here,
/// on top of Unicode `White_Space`.
pub fn context_tokens(context: &str) -> impl Iterator<Item = &str> {
    context
        .split(is_token_separator)
        .filter(|token| !token.is_empty())
}

fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Returns true if any context token of `source` occurs in `response_lower`.
///
/// `response_lower` must already be lower-cased.
pub fn source_matches(response_lower: &str, source: &Source) -> bool {
    context_tokens(&source.context).any(|token| response_lower.contains(&token.to_lowercase()))
}

/// Finds the sources cited by `response_text`.
///
/// Returns one citation per matched source with a non-empty link, in the
/// order the sources were given. Duplicate ids are kept.
pub fn find_citations(response_text: &str, sources: &[Source]) -> Vec<Citation> {
    let response_lower = response_text.to_lowercase();

    sources
        .iter()
        .filter(|source| source_matches(&response_lower, source))
        .filter(|source| source.has_link())
        .map(Citation::from)
        .collect()
}
