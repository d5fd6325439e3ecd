//! Per-speech text file emission.
//!
//! Each speech is written as a standalone UTF-8 file: a fixed-key
//! `[METADATA]` block (consumed by qualitative-analysis tooling), a blank
//! line, then the speech body.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::tables::Organization;
use crate::types::Speech;

/// Render the metadata block for a speech file.
///
/// Membership lines report membership at the time of the speech, not
/// ever-membership.
#[must_use]
pub fn render_metadata_block(speech: &Speech) -> String {
    let year = speech
        .year
        .map_or_else(|| "Unknown".to_string(), |y| y.to_string());
    let session = speech
        .session
        .strip_prefix("session_")
        .unwrap_or(&speech.session);

    let mut block = String::new();
    block.push_str("[METADATA]\n");
    let _ = writeln!(block, "Speech ID: {}", speech.id);
    let _ = writeln!(block, "Year: {year}");
    let _ = writeln!(block, "Session: {session}");
    let _ = writeln!(block, "Meeting: {}", speech.meeting_id);
    let _ = writeln!(block, "Country: {}", speech.country);
    let _ = writeln!(block, "Region: {}", speech.region);
    let _ = writeln!(block, "Speaker: {}", speech.speaker);
    let _ = writeln!(block, "Language: {}", speech.language);
    for org in Organization::ALL {
        let membership = speech.memberships.get(org);
        let _ = writeln!(
            block,
            "{} Member: {}",
            org.label(),
            membership.at_speech_time
        );
    }
    block.push_str("[/METADATA]\n");
    block
}

/// Write a speech file into `dir` under the speech's generated file name.
///
/// # Returns
/// Path to the written file.
pub fn write_speech_file(dir: &Path, speech: &Speech) -> Result<PathBuf> {
    let path = dir.join(&speech.output_file);
    let content = format!("{}\n{}", render_metadata_block(speech), speech.body);
    fs::write(&path, content)?;
    Ok(path)
}
