//! Edit event types produced by the EDL parser.
//!
//! Track and edit types serialize as their CMX 3600 codes (`"V"`, `"A2"`,
//! `"W001"`, ...) so parsed events read the same way in JSON as they do in
//! the EDL they came from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error for an unrecognised track or edit type code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("unknown track type: {0:?}")]
    UnknownTrackType(String),

    #[error("unknown edit type: {0:?}")]
    UnknownEditType(String),
}

/// Track an event applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TrackType {
    /// `V`
    Video,
    /// `A`, or `A1`..`A9` when a channel is given.
    Audio { channel: Option<u8> },
    /// `AA`
    AudioBoth,
    /// `B`: audio and video.
    Both,
    /// `AA/V`
    AudioBothVideo,
}

impl TrackType {
    /// CMX 3600 code for this track.
    pub fn code(&self) -> String {
        match self {
            Self::Video => "V".to_string(),
            Self::Audio { channel: None } => "A".to_string(),
            Self::Audio {
                channel: Some(channel),
            } => format!("A{channel}"),
            Self::AudioBoth => "AA".to_string(),
            Self::Both => "B".to_string(),
            Self::AudioBothVideo => "AA/V".to_string(),
        }
    }

    /// Only the plain `V` track counts as video.
    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video)
    }

    /// Every track whose code starts with `A`.
    pub fn is_audio(&self) -> bool {
        matches!(
            self,
            Self::Audio { .. } | Self::AudioBoth | Self::AudioBothVideo
        )
    }
}

impl FromStr for TrackType {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "V" => Ok(Self::Video),
            "A" => Ok(Self::Audio { channel: None }),
            "AA" => Ok(Self::AudioBoth),
            "B" => Ok(Self::Both),
            "AA/V" => Ok(Self::AudioBothVideo),
            _ => {
                let channel = s
                    .strip_prefix('A')
                    .filter(|rest| rest.len() == 1)
                    .and_then(|rest| rest.parse::<u8>().ok());
                match channel {
                    Some(channel) => Ok(Self::Audio {
                        channel: Some(channel),
                    }),
                    None => Err(CodeError::UnknownTrackType(s.to_string())),
                }
            }
        }
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.code())
    }
}

impl From<TrackType> for String {
    fn from(track: TrackType) -> Self {
        track.code()
    }
}

impl TryFrom<String> for TrackType {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Transition used to enter an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EditType {
    /// `C`
    Cut,
    /// `D`
    Dissolve,
    /// `W<n>`, where n is the SMPTE wipe pattern number.
    Wipe { pattern: u32 },
    /// `K`
    Key,
    /// `KB`
    KeyBackground,
    /// `KO`
    KeyOut,
}

impl EditType {
    /// CMX 3600 code for this edit. Wipe patterns are written with three digits.
    pub fn code(&self) -> String {
        match self {
            Self::Cut => "C".to_string(),
            Self::Dissolve => "D".to_string(),
            Self::Wipe { pattern } => format!("W{pattern:03}"),
            Self::Key => "K".to_string(),
            Self::KeyBackground => "KB".to_string(),
            Self::KeyOut => "KO".to_string(),
        }
    }

    /// Whether the edit has a duration (everything except a cut).
    pub fn is_transition(&self) -> bool {
        !matches!(self, Self::Cut)
    }
}

impl FromStr for EditType {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Self::Cut),
            "D" => Ok(Self::Dissolve),
            "K" => Ok(Self::Key),
            "KB" => Ok(Self::KeyBackground),
            "KO" => Ok(Self::KeyOut),
            _ => s
                .strip_prefix('W')
                .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|digits| digits.parse::<u32>().ok())
                .map(|pattern| Self::Wipe { pattern })
                .ok_or_else(|| CodeError::UnknownEditType(s.to_string())),
        }
    }
}

impl fmt::Display for EditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.code())
    }
}

impl From<EditType> for String {
    fn from(edit: EditType) -> Self {
        edit.code()
    }
}

impl TryFrom<String> for EditType {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An `M2` motion-effect line: the reel plays back at `speed` fps from `timecode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedChange {
    pub reel_name: String,
    /// Playback speed in frames per second. Negative means reverse.
    pub speed: f64,
    pub timecode: String,
}

/// One cut or transition recorded in an EDL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditEvent {
    /// Event number as written in the document. Not guaranteed unique.
    pub event_number: u32,

    pub reel_name: String,

    pub track_type: TrackType,

    pub edit_type: EditType,

    /// Transition length in frames for dissolves, wipes and keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<u32>,

    pub source_in: String,
    pub source_out: String,
    pub record_in: String,
    pub record_out: String,

    /// Frame count of `source_in` at the parse frame rate.
    pub frame_start: u64,

    /// Frame count of `source_out` at the parse frame rate.
    pub frame_end: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,

    /// Comment lines attached to the event, without the leading `*`.
    #[serde(default)]
    pub comments: Vec<String>,

    #[serde(default)]
    pub speed_changes: Vec<SpeedChange>,
}

impl EditEvent {
    /// Source duration in frames. Negative when the source runs backwards.
    pub fn duration_frames(&self) -> i64 {
        self.frame_end as i64 - self.frame_start as i64
    }

    pub fn is_video(&self) -> bool {
        self.track_type.is_video()
    }
}

/// Suggest a shot code for the `index`-th (zero-based) event of a sequence.
///
/// Codes step by ten so shots can be inserted later: `SEQ_0010`, `SEQ_0020`, ...
pub fn suggest_shot_code(sequence_code: &str, index: usize) -> String {
    let shot_number = (index + 1) * 10;
    format!("{sequence_code}_{shot_number:04}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> EditEvent {
        EditEvent {
            event_number: 1,
            reel_name: "REEL001".to_string(),
            track_type: TrackType::Video,
            edit_type: EditType::Cut,
            transition_duration: None,
            source_in: "01:00:00:00".to_string(),
            source_out: "01:00:04:00".to_string(),
            record_in: "01:00:10:00".to_string(),
            record_out: "01:00:14:00".to_string(),
            frame_start: 86_400,
            frame_end: 86_496,
            clip_name: Some("ShotA_take3".to_string()),
            source_file: None,
            comments: vec![],
            speed_changes: vec![],
        }
    }

    #[test]
    fn test_track_type_codes() {
        for code in ["V", "A", "A1", "A2", "A9", "AA", "B", "AA/V"] {
            let track: TrackType = code.parse().unwrap();
            assert_eq!(track.code(), code);
        }
        assert!("A10".parse::<TrackType>().is_err());
        assert!("X".parse::<TrackType>().is_err());
    }

    #[test]
    fn test_track_classification() {
        assert!(TrackType::Video.is_video());
        assert!(!TrackType::Both.is_video());
        assert!(!TrackType::AudioBothVideo.is_video());
        assert!(TrackType::Audio { channel: Some(2) }.is_audio());
        assert!(TrackType::AudioBothVideo.is_audio());
        assert!(!TrackType::Both.is_audio());
    }

    #[test]
    fn test_edit_type_codes() {
        assert_eq!("C".parse::<EditType>().unwrap(), EditType::Cut);
        assert_eq!("D".parse::<EditType>().unwrap(), EditType::Dissolve);
        assert_eq!(
            "W001".parse::<EditType>().unwrap(),
            EditType::Wipe { pattern: 1 }
        );
        assert_eq!("KB".parse::<EditType>().unwrap(), EditType::KeyBackground);
        assert_eq!(EditType::Wipe { pattern: 12 }.code(), "W012");
        assert!("W".parse::<EditType>().is_err());
        assert!("W+1".parse::<EditType>().is_err());
        assert!("X".parse::<EditType>().is_err());
        assert!(!EditType::Cut.is_transition());
        assert!(EditType::Dissolve.is_transition());
    }

    #[test]
    fn test_event_json_uses_edl_codes() {
        let json = serde_json::to_string(&sample_event()).unwrap();
        assert!(json.contains("\"track_type\":\"V\""));
        assert!(json.contains("\"edit_type\":\"C\""));
        assert!(json.contains("\"clip_name\":\"ShotA_take3\""));
        assert!(!json.contains("source_file"));

        let parsed: EditEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_event());
    }

    #[test]
    fn test_unknown_code_fails_deserialization() {
        let json = serde_json::to_string(&sample_event())
            .unwrap()
            .replace("\"track_type\":\"V\"", "\"track_type\":\"Q\"");
        assert!(serde_json::from_str::<EditEvent>(&json).is_err());
    }

    #[test]
    fn test_duration_frames() {
        let mut event = sample_event();
        assert_eq!(event.duration_frames(), 96);
        event.frame_end = 0;
        assert_eq!(event.duration_frames(), -86_400);
    }

    #[test]
    fn test_suggest_shot_code() {
        assert_eq!(suggest_shot_code("SEQ", 0), "SEQ_0010");
        assert_eq!(suggest_shot_code("ABC", 4), "ABC_0050");
        assert_eq!(suggest_shot_code("XY", 999), "XY_10000");
    }
}
