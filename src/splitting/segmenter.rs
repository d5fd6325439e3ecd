//! Segmentation of one meeting transcript into speech spans.

use std::collections::HashSet;

use tracing::debug;

use super::patterns;
use crate::config::FLAGGED_EXCERPT_CHARS;
use crate::types::{FlaggedLine, SpeechSpan};

/// Skip reason recorded for documents without a General Debate section.
pub const NO_GENERAL_DEBATE_REASON: &str = "No general debate section found";

/// Review reason recorded for candidate lines that failed validation.
const FLAGGED_REASON: &str = "Looks like a speech introduction but failed validation";

/// Result of segmenting one meeting transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segmentation {
    /// The document had a General Debate section. The speech list may be
    /// empty; the meeting is still worth recording in that case.
    Segmented {
        /// Ordered, non-overlapping speech spans.
        speeches: Vec<SpeechSpan>,

        /// Candidate lines queued for manual review.
        flagged: Vec<FlaggedLine>,
    },

    /// The document was rejected for segmentation.
    Skipped {
        /// Why the document produced no speeches.
        reason: String,
    },
}

/// Segment a meeting transcript into delegate speeches.
///
/// Locates the General Debate section, scans it for introduction lines,
/// and delimits each speech's body: the span runs from just past the
/// introduction's colon to the earliest of the next introduction, the next
/// presiding-officer interjection, the next meeting-end marker, or the end
/// of the text. A procedural interruption therefore always truncates a
/// speech even when another speech follows later.
///
/// Loose matches with no strict match at the same offset become flagged
/// lines; `filename` attributes them to their source document.
#[must_use]
pub fn segment(text: &str, filename: &str) -> Segmentation {
    let Some(section_start) = patterns::find_general_debate_start(text) else {
        return Segmentation::Skipped {
            reason: NO_GENERAL_DEBATE_REASON.to_string(),
        };
    };
    let section = &text[section_start..];

    let introductions = patterns::find_speech_introductions(section);
    let president_marks = patterns::president_marker_offsets(section);
    let meeting_end_marks = patterns::meeting_end_offsets(section);

    let strict_starts: HashSet<usize> = introductions.iter().map(|i| i.start).collect();
    let flagged = patterns::find_potential_introductions(section)
        .into_iter()
        .filter(|p| !strict_starts.contains(&p.start))
        .map(|p| FlaggedLine {
            file: filename.to_string(),
            line: p.line.chars().take(FLAGGED_EXCERPT_CHARS).collect(),
            reason: FLAGGED_REASON.to_string(),
        })
        .collect();

    let mut speeches = Vec::with_capacity(introductions.len());
    for (i, introduction) in introductions.iter().enumerate() {
        let body_start = introduction.body_start;

        // Earliest end marker wins.
        let mut end = introductions
            .get(i + 1)
            .map_or(section.len(), |next| next.start);
        if let Some(marker) = first_at_or_after(&president_marks, body_start) {
            end = end.min(marker);
        }
        if let Some(marker) = first_at_or_after(&meeting_end_marks, body_start) {
            end = end.min(marker);
        }

        let body = section[body_start..end].trim().to_string();
        if body.is_empty() {
            debug!(
                file = filename,
                speaker = %introduction.speaker,
                "speech introduction with empty body"
            );
        }
        speeches.push(SpeechSpan {
            introduction: introduction.clone(),
            body,
        });
    }

    Segmentation::Segmented { speeches, flagged }
}

/// First offset at or after `pos` in an ascending offset list.
fn first_at_or_after(offsets: &[usize], pos: usize) -> Option<usize> {
    let idx = offsets.partition_point(|&o| o < pos);
    offsets.get(idx).copied()
}
