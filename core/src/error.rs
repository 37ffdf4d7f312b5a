use crate::index::DocId;

/// Errors returned by the search core.
///
/// Only caller contract violations surface here. Stop words, unknown query
/// terms and empty documents are expected conditions, not errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The caller attempted to add an already-indexed document id.
    #[error("document already exists: {0}")]
    DuplicateDocument(DocId),
    /// Document ids must be presented in strictly increasing order.
    #[error("document {id} added after document {last}; ids must increase")]
    DocumentOutOfOrder { id: DocId, last: DocId },
}

pub type Result<T> = std::result::Result<T, SearchError>;
