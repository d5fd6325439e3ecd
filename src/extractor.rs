//! Batch extraction service that ties all components together.
//!
//! Walks a corpus directory (`<input>/session_NN/*.txt`), runs each
//! transcript through segmentation and enrichment, writes the per-speech
//! files, and accumulates the run-level results. A document that cannot be
//! read or segmented becomes a skip record; it never aborts the batch.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::enrich::enrich;
use crate::error::Result;
use crate::output::write_speech_file;
use crate::splitting::{segment, Segmentation};
use crate::types::{
    HeadOfStateNote, MeetingDocument, MeetingSummary, RunSummary, SkippedFile,
};

/// One transcript file discovered in the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingFile {
    /// Session identifier (the subdirectory name, e.g. "session_48").
    pub session: String,

    /// File name, e.g. "meeting_48_05.txt".
    pub filename: String,

    /// Full path to the file.
    pub path: PathBuf,
}

/// Allocator for globally unique speech identifiers.
///
/// The counter is process-wide state shared across all documents; it is
/// incremented through a single atomic operation so identifiers stay
/// unique even if meetings are ever processed concurrently.
#[derive(Debug, Default)]
pub struct SpeechIdAllocator {
    issued: AtomicU64,
}

impl SpeechIdAllocator {
    /// Create an allocator starting at `speech_00001`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next identifier, e.g. "speech_00042".
    ///
    /// Identifiers are zero-padded to five digits; the width grows past
    /// 99999 speeches instead of failing.
    #[must_use]
    pub fn next_id(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        format!("speech_{n:05}")
    }

    /// Number of identifiers handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }
}

/// Discover all transcript files under `<input>/session_NN/*.txt`.
///
/// Sessions and files are visited in name order so speech identifiers are
/// deterministic across runs. Non-directories at the top level and
/// non-`.txt` entries inside session directories are ignored.
pub fn discover_meetings(input_dir: &Path) -> Result<Vec<MeetingFile>> {
    let mut session_dirs: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    session_dirs.sort();

    let mut meetings = Vec::new();
    for session_dir in session_dirs {
        let session = match session_dir.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        let mut files: Vec<PathBuf> = fs::read_dir(&session_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
            })
            .collect();
        files.sort();

        for path in files {
            let filename = match path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => continue,
            };
            meetings.push(MeetingFile {
                session: session.clone(),
                filename,
                path,
            });
        }
    }

    Ok(meetings)
}

/// Run the full extraction over a corpus directory.
///
/// `on_file` is invoked once per discovered transcript before it is
/// processed (used by the CLI for progress reporting).
///
/// # Arguments
/// * `input_dir` - Corpus root with `session_NN/` subdirectories
/// * `output_dir` - Destination for per-speech files (must exist)
pub fn run_extraction(
    input_dir: &Path,
    output_dir: &Path,
    mut on_file: impl FnMut(&MeetingFile),
) -> Result<RunSummary> {
    let meetings = discover_meetings(input_dir)?;
    let ids = SpeechIdAllocator::new();

    let mut summary = RunSummary {
        total_files: meetings.len(),
        ..RunSummary::default()
    };

    for meeting in &meetings {
        on_file(meeting);

        let text = match fs::read_to_string(&meeting.path) {
            Ok(text) => text,
            Err(e) => {
                warn!(file = %meeting.path.display(), error = %e, "failed to read transcript");
                summary.skipped.push(SkippedFile {
                    session: meeting.session.clone(),
                    file: meeting.filename.clone(),
                    reason: format!("Failed to read file: {e}"),
                });
                continue;
            }
        };

        let document = MeetingDocument::new(&meeting.session, &meeting.filename, text);
        process_document(&document, &ids, output_dir, &mut summary)?;
    }

    Ok(summary)
}

/// Process one meeting document to completion.
fn process_document(
    document: &MeetingDocument,
    ids: &SpeechIdAllocator,
    output_dir: &Path,
    summary: &mut RunSummary,
) -> Result<()> {
    let (spans, flagged) = match segment(&document.text, &document.filename) {
        Segmentation::Segmented { speeches, flagged } => (speeches, flagged),
        Segmentation::Skipped { reason } => {
            debug!(file = %document.filename, reason = %reason, "document skipped");
            summary.skipped.push(SkippedFile {
                session: document.session.clone(),
                file: document.filename.clone(),
                reason,
            });
            return Ok(());
        }
    };

    let session_dir = output_dir.join(&document.session);
    fs::create_dir_all(&session_dir)?;

    let mut countries = BTreeSet::new();
    let mut languages = BTreeSet::new();
    let mut total_word_count = 0;
    let mut head_of_state_count = 0;
    let mut speech_count = 0;

    for span in spans {
        let id = ids.next_id();
        let mut speech = enrich(span, &document.session, &document.filename, id);

        let path = write_speech_file(&session_dir, &speech)?;
        speech.output_path = path.to_string_lossy().into_owned();

        if speech.is_head_of_state {
            head_of_state_count += 1;
            summary.head_of_state.push(HeadOfStateNote {
                file: document.filename.clone(),
                speaker: speech.speaker.clone(),
                country: speech.country.clone(),
            });
        }

        countries.insert(speech.country.clone());
        languages.insert(speech.language.clone());
        total_word_count += speech.word_count;
        speech_count += 1;

        summary.speeches.push(speech);
    }

    summary.meetings.push(MeetingSummary {
        meeting_id: document.meeting_id(),
        session: document.session.clone(),
        meeting_file: document.filename.clone(),
        speech_count,
        countries: countries.into_iter().collect(),
        languages: languages.into_iter().collect(),
        total_word_count,
        head_of_state_count,
        flagged_count: flagged.len(),
    });
    summary.flagged.extend(flagged);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_speech_id_allocator_is_sequential_and_padded() {
        let ids = SpeechIdAllocator::new();
        assert_eq!(ids.next_id(), "speech_00001");
        assert_eq!(ids.next_id(), "speech_00002");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_speech_id_width_grows_past_five_digits() {
        let ids = SpeechIdAllocator::new();
        ids.issued.store(99_999, Ordering::Relaxed);
        assert_eq!(ids.next_id(), "speech_100000");
    }

    #[test]
    fn test_discover_meetings_sorts_and_filters() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        fs::create_dir(root.join("session_49")).expect("mkdir");
        fs::create_dir(root.join("session_48")).expect("mkdir");
        fs::write(root.join("session_48/meeting_48_02.txt"), "x").expect("write");
        fs::write(root.join("session_48/meeting_48_01.txt"), "x").expect("write");
        fs::write(root.join("session_48/notes.md"), "x").expect("write");
        fs::write(root.join("stray.txt"), "x").expect("write");

        let meetings = discover_meetings(root).expect("discover");
        let names: Vec<_> = meetings
            .iter()
            .map(|m| format!("{}/{}", m.session, m.filename))
            .collect();
        assert_eq!(
            names,
            vec!["session_48/meeting_48_01.txt", "session_48/meeting_48_02.txt"]
        );
    }

    #[test]
    fn test_run_extraction_accumulates_and_skips() {
        let input = tempfile::tempdir().expect("tempdir");
        let output = tempfile::tempdir().expect("tempdir");
        fs::create_dir(input.path().join("session_54")).expect("mkdir");
        fs::write(
            input.path().join("session_54/meeting_54_04.txt"),
            "General debate\n\nMr. Abdullah (Malaysia):\nFour words exactly here.\n\
             \nThe meeting rose at 1 p.m.\n",
        )
        .expect("write");
        fs::write(
            input.path().join("session_54/meeting_54_05.txt"),
            "Agenda item 5\nElections\n",
        )
        .expect("write");

        let mut seen = 0;
        let summary =
            run_extraction(input.path(), output.path(), |_| seen += 1).expect("extraction");

        assert_eq!(seen, 2);
        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.speeches.len(), 1);
        assert_eq!(summary.meetings.len(), 1);
        assert_eq!(summary.skipped.len(), 1);

        let speech = &summary.speeches[0];
        assert_eq!(speech.id, "speech_00001");
        assert_eq!(speech.year, Some(1999));
        assert_eq!(speech.word_count, 4);
        assert!(speech.output_path.contains("session_54"));
        assert!(output
            .path()
            .join("session_54")
            .join(&speech.output_file)
            .exists());

        let meeting = &summary.meetings[0];
        assert_eq!(meeting.speech_count, 1);
        assert_eq!(meeting.countries, vec!["Malaysia"]);
        assert_eq!(meeting.languages, vec!["English"]);
        assert_eq!(meeting.total_word_count, 4);
    }

    #[test]
    fn test_meeting_with_no_speeches_still_summarized() {
        let input = tempfile::tempdir().expect("tempdir");
        let output = tempfile::tempdir().expect("tempdir");
        fs::create_dir(input.path().join("session_60")).expect("mkdir");
        fs::write(
            input.path().join("session_60/meeting_60_01.txt"),
            "General debate\n\nThe President: We shall now proceed.\n",
        )
        .expect("write");

        let summary = run_extraction(input.path(), output.path(), |_| {}).expect("extraction");
        assert!(summary.speeches.is_empty());
        assert_eq!(summary.meetings.len(), 1);
        assert_eq!(summary.meetings[0].speech_count, 0);
        assert!(summary.skipped.is_empty());
    }
}
