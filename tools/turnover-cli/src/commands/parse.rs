//! List the edit events of an EDL.

use std::path::PathBuf;

pub fn run(path: PathBuf, fps: u32, all_tracks: bool, json: bool) -> anyhow::Result<()> {
    let document = super::load_document(&path, fps)?;

    let events = if all_tracks {
        document.events
    } else {
        document.into_video_events()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    println!("{} event(s) @ {fps}fps", events.len());
    for event in &events {
        println!(
            "  {:03}  {:<8} {:<4} {:<4} {} {}  frames {}-{} ({})",
            event.event_number,
            event.reel_name,
            event.track_type,
            event.edit_type,
            event.source_in,
            event.source_out,
            event.frame_start,
            event.frame_end,
            event.duration_frames(),
        );
        if let Some(ref clip) = event.clip_name {
            println!("       clip: {clip}");
        }
        if let Some(ref file) = event.source_file {
            println!("       file: {file}");
        }
    }

    Ok(())
}
