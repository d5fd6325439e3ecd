//! Configuration constants for the extractor.

/// Default directory containing one `session_NN/` subdirectory per
/// General Assembly session, each holding plain-text meeting transcripts.
pub const DEFAULT_INPUT_DIR: &str = "data/full-txt";

/// Default directory for per-speech files and tabular exports.
pub const DEFAULT_OUTPUT_DIR: &str = "data/speech";

/// File name of the human-readable extraction report.
pub const LOG_FILE_NAME: &str = "extraction_log.txt";

/// File name of the speech-level metadata export.
pub const SPEECH_METADATA_CSV: &str = "speech_metadata.csv";

/// File name of the meeting-level metadata export.
pub const MEETING_METADATA_CSV: &str = "meeting_metadata.csv";

/// File name of the ATLAS.ti document-variables export.
///
/// ATLAS.ti matches rows to imported documents by exact file name, so this
/// export is keyed by the generated per-speech file name.
pub const ATLASTI_VARIABLES_CSV: &str = "atlasti_document_variables.csv";

/// First General Assembly session with transcripts in the corpus (1993).
pub const FIRST_SESSION: u32 = 48;

/// Last General Assembly session with transcripts in the corpus (2024).
pub const LAST_SESSION: u32 = 79;

/// Sessions are numbered from the founding year of the United Nations:
/// session 48 convened in 1993, session 79 in 2024.
pub const SESSION_EPOCH_YEAR: i32 = 1945;

/// Number of characters of a flagged line retained for manual review.
pub const FLAGGED_EXCERPT_CHARS: usize = 100;
