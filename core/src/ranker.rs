//! TF-IDF relevance ranking over an [`InvertedIndex`].

use crate::index::{DocId, InvertedIndex};
use crate::query::Query;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A document id with its relevance to one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDocument {
    #[serde(rename = "document_id")]
    pub id: DocId,
    pub relevance: f64,
}

/// Inverse document frequency of a term found in `docs_with_term` documents.
fn inverse_document_frequency(document_count: usize, docs_with_term: usize) -> Option<f64> {
    if document_count == 0 || docs_with_term == 0 {
        return None;
    }
    Some((document_count as f64 / docs_with_term as f64).ln())
}

/// Score every document matching a required word, then drop each document
/// containing an excluded word. Results are ordered by document id.
pub fn find_all_documents(query: &Query, index: &InvertedIndex) -> Vec<ScoredDocument> {
    let mut document_to_relevance: BTreeMap<DocId, f64> = BTreeMap::new();

    for word in &query.required {
        let Some(postings) = index.lookup(word) else { continue };
        let Some(idf) = inverse_document_frequency(index.document_count(), postings.len()) else { continue };
        for (&doc_id, &tf) in postings {
            *document_to_relevance.entry(doc_id).or_insert(0.0) += idf * tf;
        }
    }

    for word in &query.excluded {
        if let Some(postings) = index.lookup(word) {
            for doc_id in postings.keys() {
                document_to_relevance.remove(doc_id);
            }
        }
    }

    document_to_relevance
        .into_iter()
        .map(|(id, relevance)| ScoredDocument { id, relevance })
        .collect()
}

/// Highest-relevance documents first, at most `limit` of them.
///
/// Equal relevance is broken by ascending document id.
pub fn find_top_documents(query: &Query, index: &InvertedIndex, limit: usize) -> Vec<ScoredDocument> {
    let mut matched = find_all_documents(query, index);
    matched.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    matched.truncate(limit);
    tracing::debug!(
        required = query.required.len(),
        excluded = query.excluded.len(),
        hits = matched.len(),
        "ranked documents"
    );
    matched
}
