//! Timecode <-> frame count conversion.
//!
//! Timecodes are `HH:MM:SS:FF` or `HH:MM:SS;FF`. Both separators use the
//! same nominal arithmetic: drop-frame numbering is recognised but not
//! compensated, so frame counts are never drop-frame corrected.

/// Frame rate assumed when the caller does not provide one.
pub const DEFAULT_FPS: u32 = 24;

/// Convert a timecode to an absolute frame count at `fps`.
///
/// Returns 0 when the string does not split into exactly four numeric
/// fields (or when the result would overflow). Malformed input is
/// treated as "no timing information", never as an error.
pub fn timecode_to_frames(timecode: &str, fps: u32) -> u64 {
    let parts: Vec<&str> = timecode.split(&[':', ';'][..]).collect();
    if parts.len() != 4 {
        return 0;
    }

    let mut fields = [0u64; 4];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        match part.parse::<u64>() {
            Ok(value) => *slot = value,
            Err(_) => return 0,
        }
    }

    let [hours, minutes, seconds, frames] = fields;
    nominal_frames(hours, minutes, seconds, frames, u64::from(fps)).unwrap_or(0)
}

fn nominal_frames(hours: u64, minutes: u64, seconds: u64, frames: u64, fps: u64) -> Option<u64> {
    hours
        .checked_mul(3600 * fps)?
        .checked_add(minutes.checked_mul(60 * fps)?)?
        .checked_add(seconds.checked_mul(fps)?)?
        .checked_add(frames)
}

/// Format an absolute frame count as a timecode at `fps`.
///
/// With `drop_frame` the frame field is separated by `;`. The numbering
/// itself stays nominal. An `fps` of 0 is treated as 1.
pub fn frames_to_timecode(frames: u64, fps: u32, drop_frame: bool) -> String {
    let fps = u64::from(fps.max(1));
    let total_seconds = frames / fps;
    let remaining_frames = frames % fps;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let sep = if drop_frame { ';' } else { ':' };

    format!("{hours:02}:{minutes:02}:{seconds:02}{sep}{remaining_frames:02}")
}

/// Whether a timecode is written in drop-frame notation.
pub fn is_drop_frame(timecode: &str) -> bool {
    timecode.contains(';')
}
