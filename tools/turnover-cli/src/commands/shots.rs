//! Suggest shot codes for the video events of an EDL.

use std::path::PathBuf;

use serde::Serialize;
use turnover_edl::suggest_shot_code;

#[derive(Debug, Serialize)]
struct ShotSuggestion {
    code: String,
    event_number: u32,
    reel_name: String,
    clip_name: Option<String>,
    source_in: String,
    source_out: String,
    frame_start: u64,
    frame_end: u64,
}

pub fn run(path: PathBuf, fps: u32, sequence: String, json: bool) -> anyhow::Result<()> {
    let document = super::load_document(&path, fps)?;

    let suggestions: Vec<ShotSuggestion> = document
        .into_video_events()
        .into_iter()
        .enumerate()
        .map(|(index, event)| ShotSuggestion {
            code: suggest_shot_code(&sequence, index),
            event_number: event.event_number,
            reel_name: event.reel_name,
            clip_name: event.clip_name,
            source_in: event.source_in,
            source_out: event.source_out,
            frame_start: event.frame_start,
            frame_end: event.frame_end,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    for shot in &suggestions {
        println!(
            "{}  event {:03}  {}  {}-{}",
            shot.code,
            shot.event_number,
            shot.clip_name.as_deref().unwrap_or(&shot.reel_name),
            shot.source_in,
            shot.source_out,
        );
    }

    Ok(())
}
