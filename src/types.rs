//! Core data types for the extractor.
//!
//! These types follow a speech through the pipeline: a `MeetingDocument`
//! is segmented into `SpeechSpan`s, each span is enriched into a `Speech`,
//! and per-meeting results are rolled up into a `MeetingSummary`.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::tables::Organization;

/// One meeting transcript as handed to the pipeline.
///
/// Ephemeral input: not retained beyond the processing call.
#[derive(Debug, Clone)]
pub struct MeetingDocument {
    /// Session identifier, e.g. "session_48" (the corpus directory name).
    pub session: String,

    /// Source file name, e.g. "meeting_48_05.txt".
    pub filename: String,

    /// Full transcript text.
    pub text: String,
}

impl MeetingDocument {
    /// Create a new meeting document.
    #[must_use]
    pub fn new(
        session: impl Into<String>,
        filename: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            session: session.into(),
            filename: filename.into(),
            text: text.into(),
        }
    }

    /// Meeting identifier: the file name without its extension.
    #[must_use]
    pub fn meeting_id(&self) -> String {
        meeting_id_for(&self.filename)
    }
}

/// Meeting identifier for a transcript file name ("meeting_48_05.txt" ->
/// "meeting_48_05").
#[must_use]
pub fn meeting_id_for(filename: &str) -> String {
    PathBuf::from(filename)
        .file_stem()
        .map_or_else(|| filename.to_string(), |s| s.to_string_lossy().into_owned())
}

/// A validated delegate speech-introduction line.
///
/// Produced by the pattern matcher; immutable once created and ordered by
/// position of occurrence in the section text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechIntroduction {
    /// Speaker name with title, e.g. "Mr. Onkeya".
    pub speaker: String,

    /// Country name as captured, e.g. "Lao People's Democratic Republic".
    pub country: String,

    /// Optional language annotation, e.g. "spoke in French".
    pub language: Option<String>,

    /// Offset where the introduction line begins (used as the previous
    /// speech's end boundary).
    pub start: usize,

    /// Offset just past the introduction's colon (the speech body start).
    pub body_start: usize,
}

/// A segmented but not yet enriched speech: one introduction plus the
/// contiguous text span it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechSpan {
    /// The introduction that opened this span.
    pub introduction: SpeechIntroduction,

    /// Speech body, trimmed of leading/trailing whitespace.
    pub body: String,
}

/// Membership of one country in one organization, evaluated for a speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Membership {
    /// Country appears in the organization's join table at all.
    pub ever: bool,

    /// Join year, if a member.
    pub joined: Option<i32>,

    /// Exit year, if the organization tracks exits and the country left.
    pub exited: Option<i32>,

    /// Member in the year the speech was delivered: joined on or before
    /// that year and not yet exited. Always `false` when the speech year
    /// is unknown.
    pub at_speech_time: bool,
}

/// Membership flags for all tracked organizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Memberships {
    pub focac: Membership,
    pub cascf: Membership,
    pub sco: Membership,
    pub bri: Membership,
    pub celac: Membership,
}

impl Memberships {
    /// Membership record for one organization.
    #[must_use]
    pub fn get(&self, org: Organization) -> Membership {
        match org {
            Organization::Focac => self.focac,
            Organization::Cascf => self.cascf,
            Organization::Sco => self.sco,
            Organization::Bri => self.bri,
            Organization::Celac => self.celac,
        }
    }
}

/// A fully enriched speech record.
#[derive(Debug, Clone)]
pub struct Speech {
    /// Globally unique identifier, e.g. "speech_00042".
    pub id: String,

    /// Meeting identifier (source file name without extension).
    pub meeting_id: String,

    /// Session identifier, e.g. "session_48".
    pub session: String,

    /// Calendar year of the session; `None` for unrecognized sessions.
    pub year: Option<i32>,

    /// Source transcript file name.
    pub source_file: String,

    /// Generated per-speech output file name.
    pub output_file: String,

    /// Full path of the written per-speech file (set on emission).
    pub output_path: String,

    /// Speaker name with title.
    pub speaker: String,

    /// Country name.
    pub country: String,

    /// UN regional group, or "Unknown".
    pub region: String,

    /// Delivery language; "English" when the transcript carries no note.
    pub language: String,

    /// Trimmed speech body.
    pub body: String,

    /// Whitespace-delimited token count of the body.
    pub word_count: usize,

    /// Non-empty blocks when the body is split on blank lines.
    pub paragraph_count: usize,

    /// Speaker title indicates a head of state or government.
    pub is_head_of_state: bool,

    /// Organization memberships evaluated for this speech.
    pub memberships: Memberships,
}

/// Per-meeting rollup of extraction results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingSummary {
    /// Meeting identifier (file name without extension).
    pub meeting_id: String,

    /// Session identifier.
    pub session: String,

    /// Source transcript file name.
    pub meeting_file: String,

    /// Number of speeches extracted.
    pub speech_count: usize,

    /// Distinct countries, sorted.
    pub countries: Vec<String>,

    /// Distinct languages, sorted.
    pub languages: Vec<String>,

    /// Summed word count across all speeches.
    pub total_word_count: usize,

    /// Number of head-of-state speeches.
    pub head_of_state_count: usize,

    /// Number of lines flagged for review in this meeting's file.
    pub flagged_count: usize,
}

/// A line that resembled a speech introduction but failed validation.
///
/// Recorded for human review; never turned into a `Speech`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlaggedLine {
    /// Source transcript file name.
    pub file: String,

    /// Excerpt of the offending line (first 100 characters).
    pub line: String,

    /// Why the line was flagged.
    pub reason: String,
}

/// A document that produced no speeches, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Session identifier.
    pub session: String,

    /// Source transcript file name.
    pub file: String,

    /// Why the document was skipped.
    pub reason: String,
}

/// A head-of-state or head-of-government speech noted for review.
///
/// These are counted as ordinary speeches as well; the note is purely
/// informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadOfStateNote {
    /// Source transcript file name.
    pub file: String,

    /// Speaker name with title.
    pub speaker: String,

    /// Country name.
    pub country: String,
}

/// Accumulated results of one extraction run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of transcript files found (processed plus skipped).
    pub total_files: usize,

    /// All extracted speeches, in processing order.
    pub speeches: Vec<Speech>,

    /// One rollup per segmented meeting.
    pub meetings: Vec<MeetingSummary>,

    /// Lines queued for manual review.
    pub flagged: Vec<FlaggedLine>,

    /// Documents that produced no speeches.
    pub skipped: Vec<SkippedFile>,

    /// Head-of-state speeches noted for review.
    pub head_of_state: Vec<HeadOfStateNote>,
}

impl RunSummary {
    /// Number of distinct sessions with at least one extracted speech.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.speeches
            .iter()
            .map(|s| s.session.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Number of distinct countries across all extracted speeches.
    #[must_use]
    pub fn country_count(&self) -> usize {
        self.speeches
            .iter()
            .map(|s| s.country.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Summed word count across all extracted speeches.
    #[must_use]
    pub fn total_word_count(&self) -> usize {
        self.speeches.iter().map(|s| s.word_count).sum()
    }
}
