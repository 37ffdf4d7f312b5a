pub mod error;
pub mod index;
pub mod query;
pub mod ranker;
pub mod server;
pub mod stop_words;
pub mod tokenizer;

pub use error::{Result, SearchError};
pub use index::*;
pub use query::{parse_query, Query};
pub use ranker::{find_all_documents, find_top_documents, ScoredDocument};
pub use server::{SearchServer, MAX_RESULT_DOCUMENT_COUNT};
pub use stop_words::StopWords;
