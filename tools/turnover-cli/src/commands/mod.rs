pub mod export;
pub mod info;
pub mod parse;
pub mod shots;
pub mod validate;

use std::path::Path;

use turnover_edl::{parse_edl_document, EdlDocument, ParseOptions};

/// Read and parse an EDL from disk.
pub fn load_document(path: &Path, fps: u32) -> anyhow::Result<EdlDocument> {
    if fps == 0 {
        anyhow::bail!("fps must be greater than zero");
    }

    let content = turnover_common::error::read_text_file(path)
        .map_err(|e| anyhow::anyhow!("Failed to read EDL: {e}"))?;

    let document = parse_edl_document(&content, &ParseOptions::with_fps(fps));
    tracing::info!(
        path = %path.display(),
        events = document.total_events(),
        "loaded EDL"
    );
    for warning in &document.warnings {
        tracing::debug!(line = warning.line, raw = %warning.raw, "{}", warning.message);
    }

    Ok(document)
}
