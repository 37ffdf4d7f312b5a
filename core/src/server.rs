use crate::error::Result;
use crate::index::{DocId, InvertedIndex};
use crate::query::{parse_query, Query};
use crate::ranker::{find_top_documents, ScoredDocument};
use crate::stop_words::StopWords;

/// Default number of documents returned by [`SearchServer::find_top_documents`].
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Owns the stop words and the index for one corpus.
///
/// Ingestion needs `&mut self`, querying only `&self`: once a server is shared
/// for reading it can no longer change.
#[derive(Debug, Default)]
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
}

impl SearchServer {
    pub fn new() -> Self { Self::default() }

    pub fn with_stop_words(text: &str) -> Self {
        Self { stop_words: StopWords::from_text(text), index: InvertedIndex::new() }
    }

    /// Add stop words. Call before adding documents so that every document is
    /// filtered with the same set.
    pub fn set_stop_words(&mut self, text: &str) {
        if self.index.document_count() > 0 {
            tracing::warn!(documents = self.index.document_count(), "stop words changed after indexing started");
        }
        self.stop_words.extend_from_text(text);
    }

    pub fn add_document(&mut self, doc_id: DocId, text: &str) -> Result<()> {
        self.index.add_document(doc_id, text, &self.stop_words)
    }

    pub fn parse_query(&self, text: &str) -> Query { parse_query(text, &self.stop_words) }

    pub fn find_top_documents(&self, raw_query: &str) -> Vec<ScoredDocument> {
        self.find_top_documents_with_limit(raw_query, MAX_RESULT_DOCUMENT_COUNT)
    }

    pub fn find_top_documents_with_limit(&self, raw_query: &str, limit: usize) -> Vec<ScoredDocument> {
        let query = self.parse_query(raw_query);
        find_top_documents(&query, &self.index, limit)
    }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }
}
