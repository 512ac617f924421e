//! Result rendering for stdout

use termsim_core::SearchResults;

use crate::config::OutputFormat;
use crate::error::Result;

pub fn render(results: &SearchResults, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(results)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

/// One `candidate<TAB>score` line per match, then a summary line.
pub fn render_text(results: &SearchResults) -> String {
    let noun = if results.total() == 1 { "match" } else { "matches" };

    results
        .iter()
        .map(|m| format!("{}\t{:.2}", m.candidate(), m.similarity()))
        .chain(std::iter::once(format!(
            "{} {} for {:?}",
            results.total(),
            noun,
            results.term()
        )))
        .collect::<Vec<_>>()
        .join("\n")
}
