use crate::stop_words::StopWords;
use std::collections::BTreeSet;

/// Prefix marking a query word whose documents must be dropped.
pub const MINUS_MARKER: char = '-';

/// A parsed free-text query. `required` and `excluded` never share a word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Words that add to a document's relevance.
    pub required: BTreeSet<String>,
    /// Words whose documents are removed from the result, marker stripped.
    pub excluded: BTreeSet<String>,
}

impl Query {
    pub fn is_empty(&self) -> bool { self.required.is_empty() && self.excluded.is_empty() }
}

/// Split a raw query into required and excluded words.
///
/// Stop words are matched against the raw token, before the marker is
/// stripped. A bare `-` yields an excluded empty string, which matches no
/// document. A word given both plainly and negated is only excluded.
pub fn parse_query(text: &str, stop_words: &StopWords) -> Query {
    let mut query = Query::default();
    for word in stop_words.split_into_words_no_stop(text) {
        match word.strip_prefix(MINUS_MARKER) {
            Some(rest) => { query.excluded.insert(rest.to_string()); }
            None => { query.required.insert(word.to_string()); }
        }
    }
    let Query { required, excluded } = &mut query;
    required.retain(|word| !excluded.contains(word));
    query
}
