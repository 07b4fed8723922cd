//! CMX 3600 EDL parser.
//!
//! The format has no formal grammar enforced by the tools that write it, so
//! parsing is a single forward pass that recognises what it can and skips
//! the rest:
//!
//! 1. Every trimmed line is offered to an ordered list of matchers. All of
//!    them run; a line may produce several facts (a `* FROM CLIP NAME:` line
//!    is both a clip name and a comment).
//! 2. An event line opens a new event, sealing the one currently open.
//!    Clip name, source file, comment and `M2` lines attach to the open
//!    event, or are dropped when no event is open.
//! 3. End of input seals the last event.
//!
//! Nothing here fails: malformed timecodes become frame 0 and unknown lines
//! are only reported as [`ParseWarning`]s on the full [`EdlDocument`].

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::event::{EditEvent, EditType, SpeedChange, TrackType};
use crate::timecode::{timecode_to_frames, DEFAULT_FPS};

static EVENT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{3,})\s+(\S+)\s+(AA/V|AA|A\d?|V|B)\s+(KB|KO|K|C|D|W\d+)\s*(\d{3})?\s+(\d{2}:\d{2}:\d{2}[:;]\d{2})\s+(\d{2}:\d{2}:\d{2}[:;]\d{2})\s+(\d{2}:\d{2}:\d{2}[:;]\d{2})\s+(\d{2}:\d{2}:\d{2}[:;]\d{2})",
    )
    .unwrap()
});

static CLIP_NAME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:\*|>>>)?\s*FROM CLIP NAME:\s*(.+)$").unwrap());

static SOURCE_FILE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:\*|>>>)?\s*SOURCE FILE:\s*(.+)$").unwrap());

static TITLE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^TITLE:\s*(.+)$").unwrap());

static FCM_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^FCM:\s*(DROP\s*FRAME|NON[\s-]*DROP\s*FRAME)").unwrap()
});

static SPEED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^M2\s+(\S+)\s+(-?\d+(?:\.\d+)?)\s+(\d{2}:\d{2}:\d{2}[:;]\d{2})").unwrap()
});

/// Frame code mode declared by the `FCM:` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrameCodeMode {
    DropFrame,
    NonDropFrame,
    #[default]
    Unknown,
}

/// A line the parser could not place, once events have started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// One-based line number.
    pub line: usize,
    pub message: String,
    pub raw: String,
}

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Frame rate used to derive `frame_start` / `frame_end`.
    pub fps: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { fps: DEFAULT_FPS }
    }
}

impl ParseOptions {
    pub fn with_fps(fps: u32) -> Self {
        Self { fps }
    }
}

/// Everything recovered from an EDL, on every track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdlDocument {
    pub title: String,
    pub fcm: FrameCodeMode,
    /// Sealed events in document order, audio included.
    pub events: Vec<EditEvent>,
    pub warnings: Vec<ParseWarning>,
}

impl EdlDocument {
    pub fn total_events(&self) -> usize {
        self.events.len()
    }

    pub fn video_event_count(&self) -> usize {
        self.events.iter().filter(|e| e.track_type.is_video()).count()
    }

    pub fn audio_event_count(&self) -> usize {
        self.events.iter().filter(|e| e.track_type.is_audio()).count()
    }

    /// Video events only, in document order.
    pub fn video_events(&self) -> Vec<EditEvent> {
        self.events
            .iter()
            .filter(|e| e.track_type.is_video())
            .cloned()
            .collect()
    }

    pub fn into_video_events(self) -> Vec<EditEvent> {
        self.events
            .into_iter()
            .filter(|e| e.track_type.is_video())
            .collect()
    }
}

/// Parse an EDL and return its video events at the default 24 fps.
///
/// Never fails; an input without event lines yields an empty vector.
pub fn parse_edl(content: &str) -> Vec<EditEvent> {
    parse_edl_with(content, &ParseOptions::default())
}

/// Parse an EDL and return its video events at a chosen frame rate.
pub fn parse_edl_with(content: &str, options: &ParseOptions) -> Vec<EditEvent> {
    parse_edl_document(content, options).into_video_events()
}

/// Parse an EDL into a full [`EdlDocument`].
pub fn parse_edl_document(content: &str, options: &ParseOptions) -> EdlDocument {
    let mut parser = EdlParser::new(*options);
    for (index, raw) in content.lines().enumerate() {
        parser.feed_line(index + 1, raw);
    }
    let document = parser.finish();

    tracing::debug!(
        title = %document.title,
        events = document.total_events(),
        video = document.video_event_count(),
        audio = document.audio_event_count(),
        warnings = document.warnings.len(),
        "parsed EDL"
    );

    document
}

/// Fields of a recognised event line, before frame counts are derived.
#[derive(Debug, Clone, PartialEq)]
struct EventLine<'a> {
    event_number: u32,
    reel_name: &'a str,
    track_type: TrackType,
    edit_type: EditType,
    transition_duration: Option<u32>,
    source_in: &'a str,
    source_out: &'a str,
    record_in: &'a str,
    record_out: &'a str,
}

/// A fact recognised on a single line.
#[derive(Debug, Clone, PartialEq)]
enum LineMatch<'a> {
    Title(&'a str),
    FrameCodeMode(FrameCodeMode),
    Event(EventLine<'a>),
    ClipName(&'a str),
    SourceFile(&'a str),
    Comment(&'a str),
    Speed {
        text: &'a str,
        change: Option<SpeedChange>,
    },
}

type Matcher = for<'a> fn(&'a str) -> Option<LineMatch<'a>>;

/// Tried in order on every line; none of them stops the others.
const MATCHERS: &[Matcher] = &[
    match_title,
    match_fcm,
    match_event,
    match_clip_name,
    match_source_file,
    match_comment,
    match_speed,
];

fn capture<'a>(caps: &Captures<'a>, index: usize) -> Option<&'a str> {
    caps.get(index).map(|m| m.as_str())
}

fn match_title(line: &str) -> Option<LineMatch<'_>> {
    let caps = TITLE_LINE.captures(line)?;
    Some(LineMatch::Title(capture(&caps, 1)?.trim()))
}

fn match_fcm(line: &str) -> Option<LineMatch<'_>> {
    let caps = FCM_LINE.captures(line)?;
    let mode = if capture(&caps, 1)?.to_ascii_uppercase().contains("NON") {
        FrameCodeMode::NonDropFrame
    } else {
        FrameCodeMode::DropFrame
    };
    Some(LineMatch::FrameCodeMode(mode))
}

fn match_event(line: &str) -> Option<LineMatch<'_>> {
    let caps = EVENT_LINE.captures(line)?;
    // Codes the pattern admits but the types reject (an oversized event
    // number or wipe pattern) make the line unrecognised, not an error.
    let event = EventLine {
        event_number: capture(&caps, 1)?.parse().ok()?,
        reel_name: capture(&caps, 2)?,
        track_type: capture(&caps, 3)?.parse().ok()?,
        edit_type: capture(&caps, 4)?.parse().ok()?,
        transition_duration: match capture(&caps, 5) {
            Some(digits) => Some(digits.parse().ok()?),
            None => None,
        },
        source_in: capture(&caps, 6)?,
        source_out: capture(&caps, 7)?,
        record_in: capture(&caps, 8)?,
        record_out: capture(&caps, 9)?,
    };
    Some(LineMatch::Event(event))
}

fn match_clip_name(line: &str) -> Option<LineMatch<'_>> {
    let caps = CLIP_NAME_LINE.captures(line)?;
    Some(LineMatch::ClipName(capture(&caps, 1)?.trim()))
}

fn match_source_file(line: &str) -> Option<LineMatch<'_>> {
    let caps = SOURCE_FILE_LINE.captures(line)?;
    Some(LineMatch::SourceFile(capture(&caps, 1)?.trim()))
}

fn match_comment(line: &str) -> Option<LineMatch<'_>> {
    if let Some(rest) = line.strip_prefix('*') {
        Some(LineMatch::Comment(rest.trim()))
    } else if line.starts_with(">>>") {
        Some(LineMatch::Comment(line))
    } else {
        None
    }
}

fn match_speed(line: &str) -> Option<LineMatch<'_>> {
    if !line.starts_with("M2") || !line[2..].starts_with(char::is_whitespace) {
        return None;
    }
    let change = SPEED_LINE.captures(line).and_then(|caps| {
        Some(SpeedChange {
            reel_name: capture(&caps, 1)?.to_string(),
            speed: capture(&caps, 2)?.parse().ok()?,
            timecode: capture(&caps, 3)?.to_string(),
        })
    });
    Some(LineMatch::Speed { text: line, change })
}

/// Whether an event is currently accumulating continuation lines.
#[derive(Debug)]
enum ParserState {
    NoOpenEvent,
    OpenEvent(EditEvent),
}

/// Single-document parser. Lives for one call; nothing is shared.
struct EdlParser {
    options: ParseOptions,
    state: ParserState,
    sealed: Vec<EditEvent>,
    title: String,
    fcm: FrameCodeMode,
    warnings: Vec<ParseWarning>,
}

impl EdlParser {
    fn new(options: ParseOptions) -> Self {
        Self {
            options,
            state: ParserState::NoOpenEvent,
            sealed: Vec::new(),
            title: String::new(),
            fcm: FrameCodeMode::Unknown,
            warnings: Vec::new(),
        }
    }

    fn feed_line(&mut self, line_number: usize, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        let mut recognised = false;
        for matcher in MATCHERS {
            if let Some(found) = matcher(line) {
                recognised = true;
                self.apply(found);
            }
        }

        if !recognised && self.events_started() {
            self.warnings.push(ParseWarning {
                line: line_number,
                message: "Unrecognized line format".to_string(),
                raw: line.to_string(),
            });
        }
    }

    fn events_started(&self) -> bool {
        !self.sealed.is_empty() || matches!(self.state, ParserState::OpenEvent(_))
    }

    fn apply(&mut self, found: LineMatch<'_>) {
        match found {
            LineMatch::Title(title) => self.title = title.to_string(),
            LineMatch::FrameCodeMode(mode) => self.fcm = mode,
            LineMatch::Event(line) => {
                self.seal();
                self.state = ParserState::OpenEvent(self.open(line));
            }
            other => {
                let ParserState::OpenEvent(event) = &mut self.state else {
                    return;
                };
                match other {
                    LineMatch::ClipName(name) => event.clip_name = Some(name.to_string()),
                    LineMatch::SourceFile(file) => event.source_file = Some(file.to_string()),
                    LineMatch::Comment(text) => event.comments.push(text.to_string()),
                    LineMatch::Speed { text, change } => {
                        event.comments.push(format!("Speed: {text}"));
                        event.speed_changes.extend(change);
                    }
                    LineMatch::Title(_) | LineMatch::FrameCodeMode(_) | LineMatch::Event(_) => {}
                }
            }
        }
    }

    fn open(&self, line: EventLine<'_>) -> EditEvent {
        let fps = self.options.fps;
        EditEvent {
            event_number: line.event_number,
            reel_name: line.reel_name.to_string(),
            track_type: line.track_type,
            edit_type: line.edit_type,
            transition_duration: line.transition_duration,
            source_in: line.source_in.to_string(),
            source_out: line.source_out.to_string(),
            record_in: line.record_in.to_string(),
            record_out: line.record_out.to_string(),
            frame_start: timecode_to_frames(line.source_in, fps),
            frame_end: timecode_to_frames(line.source_out, fps),
            clip_name: None,
            source_file: None,
            comments: Vec::new(),
            speed_changes: Vec::new(),
        }
    }

    fn seal(&mut self) {
        if let ParserState::OpenEvent(event) =
            std::mem::replace(&mut self.state, ParserState::NoOpenEvent)
        {
            self.sealed.push(event);
        }
    }

    fn finish(mut self) -> EdlDocument {
        self.seal();
        EdlDocument {
            title: self.title,
            fcm: self.fcm,
            events: self.sealed,
            warnings: self.warnings,
        }
    }
}
