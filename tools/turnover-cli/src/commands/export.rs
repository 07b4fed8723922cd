//! Rewrite the video events of an EDL as clean CMX 3600.

use std::path::PathBuf;

use turnover_edl::{generate_edl, ExportOptions, ExportShot};

pub fn run(
    path: PathBuf,
    output: Option<PathBuf>,
    title: Option<String>,
    drop_frame: bool,
    fps: u32,
) -> anyhow::Result<()> {
    let document = super::load_document(&path, fps)?;

    let title = title
        .or_else(|| (!document.title.is_empty()).then(|| document.title.clone()))
        .unwrap_or_else(|| "Untitled".to_string());

    let shots: Vec<ExportShot> = document.video_events().iter().map(ExportShot::from).collect();
    let options = ExportOptions {
        title,
        fps,
        drop_frame,
    };
    let content = generate_edl(&shots, &options);

    match output {
        Some(output_path) => {
            std::fs::write(&output_path, content).map_err(|e| {
                anyhow::anyhow!("Failed to write {}: {e}", output_path.display())
            })?;
            eprintln!(
                "Wrote {} event(s) to {}",
                shots.len(),
                output_path.display()
            );
        }
        None => print!("{content}"),
    }

    Ok(())
}
