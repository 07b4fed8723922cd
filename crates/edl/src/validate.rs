//! Strict checks over parsed events.
//!
//! The parser accepts anything that looks like an event line. Callers that
//! need stronger guarantees run these checks afterwards.

use std::collections::HashSet;
use std::fmt;

use crate::event::EditEvent;
use crate::timecode::timecode_to_frames;

/// Problem found in an otherwise well-formed event list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventIssue {
    /// `frame_end <= frame_start`
    EmptySourceRange {
        event_number: u32,
        frame_start: u64,
        frame_end: u64,
    },
    /// Record out is not after record in.
    EmptyRecordRange {
        event_number: u32,
        record_in: String,
        record_out: String,
    },
    /// Event number used more than once.
    DuplicateEventNumber { event_number: u32 },
    /// Event number lower than the one before it.
    EventNumberOutOfOrder { event_number: u32, previous: u32 },
}

impl EventIssue {
    pub fn event_number(&self) -> u32 {
        match self {
            Self::EmptySourceRange { event_number, .. }
            | Self::EmptyRecordRange { event_number, .. }
            | Self::DuplicateEventNumber { event_number }
            | Self::EventNumberOutOfOrder { event_number, .. } => *event_number,
        }
    }
}

impl fmt::Display for EventIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySourceRange {
                event_number,
                frame_start,
                frame_end,
            } => write!(
                f,
                "Event {event_number:03}: source range is empty (frames {frame_start}..{frame_end})"
            ),
            Self::EmptyRecordRange {
                event_number,
                record_in,
                record_out,
            } => write!(
                f,
                "Event {event_number:03}: record range is empty ({record_in} -> {record_out})"
            ),
            Self::DuplicateEventNumber { event_number } => {
                write!(f, "Event {event_number:03}: event number is used more than once")
            }
            Self::EventNumberOutOfOrder {
                event_number,
                previous,
            } => write!(
                f,
                "Event {event_number:03}: follows event {previous:03} out of order"
            ),
        }
    }
}

/// Check events for empty ranges and event numbering problems.
///
/// `fps` is used for record timecodes; source ranges use the frame counts
/// already stored on the events.
pub fn validate_events(events: &[EditEvent], fps: u32) -> Vec<EventIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    let mut previous: Option<u32> = None;

    for event in events {
        let number = event.event_number;

        if event.frame_end <= event.frame_start {
            issues.push(EventIssue::EmptySourceRange {
                event_number: number,
                frame_start: event.frame_start,
                frame_end: event.frame_end,
            });
        }

        if timecode_to_frames(&event.record_out, fps) <= timecode_to_frames(&event.record_in, fps) {
            issues.push(EventIssue::EmptyRecordRange {
                event_number: number,
                record_in: event.record_in.clone(),
                record_out: event.record_out.clone(),
            });
        }

        if !seen.insert(number) {
            issues.push(EventIssue::DuplicateEventNumber {
                event_number: number,
            });
        } else if let Some(prev) = previous.filter(|prev| number < *prev) {
            issues.push(EventIssue::EventNumberOutOfOrder {
                event_number: number,
                previous: prev,
            });
        }

        previous = Some(number);
    }

    issues
}
