use anyhow::{bail, Context, Result};
use search_core::{DocId, SearchServer};
use std::io::BufRead;

/// Read one line without its trailing `\n` or `\r\n`. `None` at end of input.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the read.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf).context("failed to read input line")? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Read a line holding a single unsigned integer.
pub fn read_line_with_number<R: BufRead>(reader: &mut R) -> Result<usize> {
    let Some(line) = read_line(reader)? else {
        bail!("unexpected end of input: expected document count");
    };
    let count = line
        .trim()
        .parse::<usize>()
        .with_context(|| format!("invalid document count: {line:?}"))?;
    Ok(count)
}

/// Build a server from the stop-word line, the count line and that many
/// document lines. Documents get ids `0..count` in input order.
pub fn create_search_server<R: BufRead>(reader: &mut R) -> Result<SearchServer> {
    let mut server = SearchServer::new();
    server.set_stop_words(&read_line(reader)?.unwrap_or_default());

    let document_count = read_line_with_number(reader)?;
    for document_id in 0..document_count {
        let Some(text) = read_line(reader)? else {
            bail!("unexpected end of input: read {document_id} of {document_count} documents");
        };
        let id = DocId::try_from(document_id).context("document id out of range")?;
        server.add_document(id, &text)?;
    }
    tracing::info!(
        documents = server.document_count(),
        terms = server.index().term_count(),
        stop_words = server.stop_words().len(),
        "corpus indexed"
    );
    Ok(server)
}

/// The query line. Missing input reads as an empty query.
pub fn read_query<R: BufRead>(reader: &mut R) -> Result<String> {
    Ok(read_line(reader)?.unwrap_or_default())
}
