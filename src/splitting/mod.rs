//! Speech segmentation for General Assembly meeting transcripts.
//!
//! `patterns` recognizes the formulaic lines that structure a transcript
//! (speech introductions, presiding-officer interjections, terminal
//! markers); `segmenter` turns one transcript into an ordered sequence of
//! speech spans with review flags for near-miss lines.

mod patterns;
mod segmenter;

pub use patterns::{
    find_general_debate_start, find_potential_introductions, find_speech_introductions,
    is_head_of_state, meeting_end_offsets, president_marker_offsets, PotentialIntroduction,
};
pub use segmenter::{segment, Segmentation, NO_GENERAL_DEBATE_REASON};
