//! CMX 3600 EDL writer.
//!
//! Produces the plain layout editorial tools expect: a `TITLE`/`FCM`
//! header, then one video cut per shot followed by its clip name comment.

use crate::event::EditEvent;
use crate::timecode::{frames_to_timecode, DEFAULT_FPS};

/// Length given to shots that carry no timecodes of their own.
pub const DEFAULT_SHOT_LENGTH_FRAMES: u64 = 100;

/// Reel names are limited to eight characters in CMX 3600.
const REEL_WIDTH: usize = 8;

/// A shot to write as one EDL event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportShot {
    pub code: String,
    pub clip_name: Option<String>,
    pub source_in: Option<String>,
    pub source_out: Option<String>,
    pub record_in: Option<String>,
    pub record_out: Option<String>,
    pub reel_name: Option<String>,
    pub source_file: Option<String>,
}

impl From<&EditEvent> for ExportShot {
    fn from(event: &EditEvent) -> Self {
        Self {
            code: event.clip_name.clone().unwrap_or_default(),
            clip_name: event.clip_name.clone(),
            source_in: Some(event.source_in.clone()),
            source_out: Some(event.source_out.clone()),
            record_in: Some(event.record_in.clone()),
            record_out: Some(event.record_out.clone()),
            reel_name: Some(event.reel_name.clone()),
            source_file: event.source_file.clone(),
        }
    }
}

/// Header and timing settings for [`generate_edl`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub title: String,
    pub fps: u32,
    pub drop_frame: bool,
}

impl ExportOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fps: DEFAULT_FPS,
            drop_frame: false,
        }
    }
}

/// Render shots as CMX 3600 text.
///
/// Shots without source timecodes span frames 0..100; shots without record
/// timecodes are laid end to end, 100 frames apart.
pub fn generate_edl(shots: &[ExportShot], options: &ExportOptions) -> String {
    let ExportOptions {
        title,
        fps,
        drop_frame,
    } = options;
    let timecode = |frames: u64| frames_to_timecode(frames, *fps, *drop_frame);

    let mut lines = vec![
        format!("TITLE: {title}"),
        format!(
            "FCM: {}",
            if *drop_frame {
                "DROP FRAME"
            } else {
                "NON-DROP FRAME"
            }
        ),
        String::new(),
    ];

    let mut record_position = 0u64;
    for (index, shot) in shots.iter().enumerate() {
        let event_number = index + 1;
        let reel = reel_column(shot);

        let source_in = shot.source_in.clone().unwrap_or_else(|| timecode(0));
        let source_out = shot
            .source_out
            .clone()
            .unwrap_or_else(|| timecode(DEFAULT_SHOT_LENGTH_FRAMES));
        let record_in = shot
            .record_in
            .clone()
            .unwrap_or_else(|| timecode(record_position));
        let record_out = shot
            .record_out
            .clone()
            .unwrap_or_else(|| timecode(record_position + DEFAULT_SHOT_LENGTH_FRAMES));

        lines.push(format!(
            "{event_number:03}  {reel} V     C        {source_in} {source_out} {record_in} {record_out}"
        ));

        if let Some(name) = non_empty(&shot.clip_name).or(non_empty_str(&shot.code)) {
            lines.push(format!("* FROM CLIP NAME: {name}"));
        }
        if let Some(file) = non_empty(&shot.source_file) {
            lines.push(format!("* SOURCE FILE: {file}"));
        }

        lines.push(String::new());
        record_position += DEFAULT_SHOT_LENGTH_FRAMES;
    }

    lines.join("\n")
}

/// First non-empty of reel, clip name and `AX`, cut and padded to the reel column.
fn reel_column(shot: &ExportShot) -> String {
    let reel = non_empty(&shot.reel_name)
        .or(non_empty(&shot.clip_name))
        .unwrap_or("AX");
    let reel: String = reel.chars().take(REEL_WIDTH).collect();
    format!("{reel:<width$}", width = REEL_WIDTH)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().and_then(non_empty_str)
}

fn non_empty_str(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
