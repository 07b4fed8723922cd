//! Show EDL information.

use std::path::PathBuf;

pub fn run(path: PathBuf, fps: u32) -> anyhow::Result<()> {
    let document = super::load_document(&path, fps)?;

    let title = if document.title.is_empty() {
        "(untitled)"
    } else {
        document.title.as_str()
    };

    println!("EDL: {title}");
    println!("  File: {}", path.display());
    println!("  Frame code mode: {:?}", document.fcm);
    println!();

    println!("Events:");
    println!("  Total: {}", document.total_events());
    println!("  Video: {}", document.video_event_count());
    println!("  Audio: {}", document.audio_event_count());

    let video = document.video_events();
    let with_clip = video.iter().filter(|e| e.clip_name.is_some()).count();
    let with_file = video.iter().filter(|e| e.source_file.is_some()).count();
    let total_frames: i64 = video.iter().map(|e| e.duration_frames()).sum();
    println!("  Video with clip name: {with_clip}");
    println!("  Video with source file: {with_file}");
    println!("  Video source frames @ {fps}fps: {total_frames}");
    println!();

    if document.warnings.is_empty() {
        println!("Warnings: none");
    } else {
        println!("Warnings:");
        for warning in &document.warnings {
            println!("  line {}: {} ({})", warning.line, warning.message, warning.raw);
        }
    }

    Ok(())
}
