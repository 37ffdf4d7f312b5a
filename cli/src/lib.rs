pub mod input;
pub mod output;

use anyhow::Result;
use input::{create_search_server, read_query};
use output::{write_json, write_text, OutputFormat, SearchResponse};
use search_core::{find_all_documents, find_top_documents};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub top_k: usize,
    pub format: OutputFormat,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { top_k: search_core::MAX_RESULT_DOCUMENT_COUNT, format: OutputFormat::Text }
    }
}

/// Read a corpus and one query from `reader`, write the ranked documents to `out`.
pub fn run<R: BufRead, W: Write>(reader: &mut R, out: &mut W, options: RunOptions) -> Result<()> {
    let server = create_search_server(reader)?;
    let raw_query = read_query(reader)?;

    let start = std::time::Instant::now();
    let query = server.parse_query(&raw_query);
    let results = find_top_documents(&query, server.index(), options.top_k);
    tracing::info!(query = %raw_query, hits = results.len(), took_s = start.elapsed().as_secs_f64(), "search complete");

    match options.format {
        OutputFormat::Text => write_text(out, &results)?,
        OutputFormat::Json => {
            let total_hits = find_all_documents(&query, server.index()).len();
            write_json(out, &SearchResponse { query: &raw_query, total_hits, results: &results })?;
        }
    }
    out.flush()?;
    Ok(())
}
