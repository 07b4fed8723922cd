//! Strictly validate the video events of an EDL.

use std::path::PathBuf;

use turnover_common::error::TurnoverError;
use turnover_edl::validate_events;

pub fn run(path: PathBuf, fps: u32, strict: bool) -> anyhow::Result<()> {
    println!("Validating EDL at: {}", path.display());

    let document = super::load_document(&path, fps)?;
    let events = document.video_events();
    println!("  Video events: {}", events.len());
    println!("  Unrecognized lines: {}", document.warnings.len());

    let issues = validate_events(&events, fps);
    if issues.is_empty() {
        println!("\nEDL is valid.");
        return Ok(());
    }

    println!("\nValidation issues:");
    for issue in &issues {
        println!("  - {issue}");
    }
    println!("\n{} issue(s) found.", issues.len());

    if strict {
        return Err(TurnoverError::validation(format!(
            "{} issue(s) in {}",
            issues.len(),
            path.display()
        ))
        .into());
    }

    Ok(())
}
