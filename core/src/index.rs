use crate::error::{Result, SearchError};
use crate::stop_words::StopWords;
use std::collections::{BTreeMap, BTreeSet, HashMap};

pub type DocId = u32;

/// Per-term posting list: document id -> term frequency in that document.
pub type Postings = BTreeMap<DocId, f64>;

/// Inverted index from term to per-document term frequency.
///
/// The frequency stored for `(term, doc)` is the share of the document's
/// non-stop-word tokens equal to `term`, so the frequencies of one document
/// sum to 1.0. Posting lists are ordered by document id.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Postings>,
    document_ids: BTreeSet<DocId>,
    num_docs: usize,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Index one document.
    ///
    /// Ids must be unique and presented in increasing order; a violating id is
    /// rejected and leaves the index untouched. A document with no words left
    /// after stop-word filtering is still counted but writes no postings.
    pub fn add_document(&mut self, doc_id: DocId, text: &str, stop_words: &StopWords) -> Result<()> {
        if self.document_ids.contains(&doc_id) {
            return Err(SearchError::DuplicateDocument(doc_id));
        }
        if let Some(&last) = self.document_ids.last() {
            if doc_id < last {
                return Err(SearchError::DocumentOutOfOrder { id: doc_id, last });
            }
        }

        let words = stop_words.split_into_words_no_stop(text);
        if words.is_empty() {
            tracing::debug!(doc_id, "document has no indexable words");
        } else {
            let weight = 1.0 / words.len() as f64;
            for word in &words {
                *self
                    .postings
                    .entry(word.to_string())
                    .or_default()
                    .entry(doc_id)
                    .or_insert(0.0) += weight;
            }
            tracing::debug!(doc_id, words = words.len(), "indexed document");
        }

        self.document_ids.insert(doc_id);
        self.num_docs += 1;
        Ok(())
    }

    /// Posting list for `term`, or `None` if it was never indexed.
    pub fn lookup(&self, term: &str) -> Option<&Postings> { self.postings.get(term) }

    pub fn term_frequency(&self, term: &str, doc_id: DocId) -> Option<f64> {
        self.lookup(term).and_then(|p| p.get(&doc_id)).copied()
    }

    /// Number of ingested documents, used as the IDF corpus size.
    pub fn document_count(&self) -> usize { self.num_docs }

    pub fn term_count(&self) -> usize { self.postings.len() }

    pub fn contains_document(&self, doc_id: DocId) -> bool { self.document_ids.contains(&doc_id) }

    /// Smallest id that `add_document` would currently accept, or `None`
    /// once `DocId::MAX` has been used.
    pub fn next_document_id(&self) -> Option<DocId> {
        match self.document_ids.last() {
            Some(last) => last.checked_add(1),
            None => Some(0),
        }
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, &Postings)> {
        self.postings.iter().map(|(term, postings)| (term.as_str(), postings))
    }
}
