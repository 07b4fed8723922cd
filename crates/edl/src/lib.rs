//! Turnover EDL
//!
//! Reads and writes the CMX 3600 Edit Decision Lists exchanged between
//! editorial and VFX:
//! - **Timecode:** `HH:MM:SS:FF` / `HH:MM:SS;FF` to and from frame counts
//! - **Parser:** tolerant line-by-line recognition of event lines and the
//!   comment lines editing tools attach to them
//! - **Export:** CMX 3600 text from shot lists
//! - **Validate:** optional strict checks over parsed events
//!
//! Parsing never fails. Unknown lines are skipped and malformed timecodes
//! map to frame 0, so EDLs from any tool load as far as they can.
//!
//! ```
//! let edl = "001  REEL001  V  C  01:00:00:00 01:00:04:00 01:00:10:00 01:00:14:00\n\
//!            * FROM CLIP NAME: ShotA_take3\n";
//! let events = turnover_edl::parse_edl(edl);
//! assert_eq!(events[0].frame_start, 86_400);
//! assert_eq!(events[0].clip_name.as_deref(), Some("ShotA_take3"));
//! ```

pub mod event;
pub mod export;
pub mod parser;
pub mod timecode;
pub mod validate;

pub use event::*;
pub use export::{generate_edl, ExportOptions, ExportShot};
pub use parser::{
    parse_edl, parse_edl_document, parse_edl_with, EdlDocument, FrameCodeMode, ParseOptions,
    ParseWarning,
};
pub use timecode::{frames_to_timecode, is_drop_frame, timecode_to_frames, DEFAULT_FPS};
pub use validate::{validate_events, EventIssue};
