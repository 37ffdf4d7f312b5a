use anyhow::Result;
use search_core::ScoredDocument;
use serde::Serialize;
use std::io::Write;

/// Significant digits of a default-formatted floating point number.
const RELEVANCE_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `{ document_id = 0, relevance = 0.173287 }` per line
    #[default]
    Text,
    /// A single JSON object
    Json,
}

#[derive(Serialize)]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub total_hits: usize,
    pub results: &'a [ScoredDocument],
}

/// Format like `%g`: six significant digits, trailing zeros dropped,
/// scientific notation for exponents below -4 or from 6 up.
pub fn format_relevance(value: f64) -> String {
    if value == 0.0 {
        return "0".into();
    }
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".into() } else { "-inf".into() };
    }

    let scientific = format!("{:.*e}", RELEVANCE_PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else { return scientific };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= RELEVANCE_PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (RELEVANCE_PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

pub fn write_text<W: Write>(out: &mut W, documents: &[ScoredDocument]) -> Result<()> {
    for doc in documents {
        writeln!(out, "{{ document_id = {}, relevance = {} }}", doc.id, format_relevance(doc.relevance))?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, response: &SearchResponse) -> Result<()> {
    serde_json::to_writer(&mut *out, response)?;
    writeln!(out)?;
    Ok(())
}
