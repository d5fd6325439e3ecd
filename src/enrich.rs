//! Derived speech attributes.
//!
//! Enrichment is pure given the static reference tables: running it twice
//! over the same span yields identical derived fields.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::splitting::is_head_of_state;
use crate::tables::{self, Organization};
use crate::types::{meeting_id_for, Memberships, Speech, SpeechSpan};

/// Language recorded when the transcript carries no language note.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Characters removed outright (not substituted) during sanitization.
const UNSAFE_FILENAME_CHARS: &[char] = &[
    '/', '\\', ':', '*', '?', '"', '<', '>', '|', '\'', ',', '.', ';',
];

/// Sanitize a country name for use in a generated file name.
///
/// Decomposes accented characters and drops the combining marks (é -> e,
/// ô -> o), then removes spaces and filesystem-unsafe punctuation. The
/// result is a cross-platform-safe token; sanitizing twice is a no-op.
///
/// # Examples
/// ```
/// use unga_extractor::enrich::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Côte d'Ivoire"), "CotedIvoire");
/// assert_eq!(sanitize_filename("Lao People's Democratic Republic"),
///            "LaoPeoplesDemocraticRepublic");
/// ```
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| *c != ' ' && !UNSAFE_FILENAME_CHARS.contains(c))
        .collect()
}

/// Whitespace-delimited token count of a speech body.
#[must_use]
pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

/// Number of non-empty blocks when the body is split on blank lines.
#[must_use]
pub fn paragraph_count(body: &str) -> usize {
    body.split("\n\n").filter(|p| !p.trim().is_empty()).count()
}

/// Evaluate all organization memberships for a country and speech year.
#[must_use]
pub fn memberships_for(country: &str, year: Option<i32>) -> Memberships {
    Memberships {
        focac: Organization::Focac.membership(country, year),
        cascf: Organization::Cascf.membership(country, year),
        sco: Organization::Sco.membership(country, year),
        bri: Organization::Bri.membership(country, year),
        celac: Organization::Celac.membership(country, year),
    }
}

/// Enrich a segmented span into a full `Speech` record.
///
/// # Arguments
/// * `span` - The segmented speech span
/// * `session` - Session identifier, e.g. "session_48"
/// * `source_file` - Source transcript file name
/// * `id` - Allocated speech identifier, e.g. "speech_00042"
#[must_use]
pub fn enrich(span: SpeechSpan, session: &str, source_file: &str, id: String) -> Speech {
    let SpeechSpan { introduction, body } = span;

    let year = tables::session_year(session);
    let region = tables::region(&introduction.country).to_string();
    let language = introduction
        .language
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let meeting_id = meeting_id_for(source_file);
    let output_file = format!(
        "{id}_{meeting_id}_{}.txt",
        sanitize_filename(&introduction.country)
    );
    let memberships = memberships_for(&introduction.country, year);
    let is_head_of_state = is_head_of_state(&introduction.speaker);
    let word_count = word_count(&body);
    let paragraph_count = paragraph_count(&body);

    Speech {
        id,
        meeting_id,
        session: session.to_string(),
        year,
        source_file: source_file.to_string(),
        output_file,
        output_path: String::new(),
        speaker: introduction.speaker,
        country: introduction.country,
        region,
        language,
        body,
        word_count,
        paragraph_count,
        is_head_of_state,
        memberships,
    }
}
