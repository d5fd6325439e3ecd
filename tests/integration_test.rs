//! End-to-end integration tests for the extraction pipeline.
//!
//! Runs the full pipeline (discovery, segmentation, enrichment, file
//! emission, exports, report) over fixture transcripts modeled on the
//! fifty-fourth session's verbatim records.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use unga_extractor::config::{
    ATLASTI_VARIABLES_CSV, LOG_FILE_NAME, MEETING_METADATA_CSV, SPEECH_METADATA_CSV,
};
use unga_extractor::extractor::run_extraction;
use unga_extractor::output::{
    write_atlasti_csv, write_meeting_csv, write_report, write_speech_csv,
};
use unga_extractor::types::RunSummary;

/// Path to the fixture corpus (one session directory with two meetings).
fn fixture_corpus() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Run the pipeline over the fixture corpus into a fresh tempdir.
fn run_pipeline() -> (RunSummary, TempDir) {
    let output = TempDir::new().expect("create output tempdir");
    let summary = run_extraction(&fixture_corpus(), output.path(), |_| {})
        .expect("extraction should succeed");
    (summary, output)
}

#[test]
fn test_pipeline_counts() {
    let (summary, _output) = run_pipeline();

    assert_eq!(summary.total_files, 2);
    assert_eq!(summary.meetings.len(), 1);
    assert_eq!(summary.speeches.len(), 3);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.flagged.len(), 1);
    assert_eq!(summary.head_of_state.len(), 1);
    assert_eq!(summary.session_count(), 1);
    assert_eq!(summary.country_count(), 3);
}

#[test]
fn test_pipeline_speech_identifiers_are_sequential() {
    let (summary, _output) = run_pipeline();

    let ids: Vec<_> = summary.speeches.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["speech_00001", "speech_00002", "speech_00003"]);
}

#[test]
fn test_pipeline_speech_fields() {
    let (summary, _output) = run_pipeline();

    let cambodia = &summary.speeches[0];
    assert_eq!(cambodia.country, "Cambodia");
    assert_eq!(cambodia.speaker, "Mr. Chem Widhya");
    assert_eq!(cambodia.language, "spoke in French");
    assert_eq!(cambodia.year, Some(1999));
    assert_eq!(cambodia.region, "Asia-Pacific");
    assert_eq!(cambodia.paragraph_count, 2);
    assert!(!cambodia.is_head_of_state);
    // Truncated by the Acting President, so the next speaker's text is
    // not part of this span.
    assert!(cambodia.body.starts_with("It is a\ngreat honour"));
    assert!(cambodia.body.ends_with("principles of the Charter."));
    assert!(!cambodia.body.contains("Bangladesh"));
    // Cambodia signed on to the BRI in 2013, after this speech.
    assert!(cambodia.memberships.bri.ever);
    assert_eq!(cambodia.memberships.bri.joined, Some(2013));
    assert!(!cambodia.memberships.bri.at_speech_time);

    let bangladesh = &summary.speeches[1];
    assert_eq!(bangladesh.country, "Bangladesh");
    assert!(bangladesh.is_head_of_state);

    let lao = &summary.speeches[2];
    assert_eq!(lao.country, "Lao People's Democratic Republic");
    assert_eq!(lao.language, "English");
    assert!(lao.body.ends_with("his election."));
}

#[test]
fn test_pipeline_flagged_and_skipped_records() {
    let (summary, _output) = run_pipeline();

    let flagged = &summary.flagged[0];
    assert_eq!(flagged.file, "meeting_54_04.txt");
    assert!(flagged.line.starts_with("Mr. Asselborn ( spoke in French )"));

    let skipped = &summary.skipped[0];
    assert_eq!(skipped.file, "meeting_54_20.txt");
    assert_eq!(skipped.reason, "No general debate section found");
}

#[test]
fn test_pipeline_meeting_rollup() {
    let (summary, _output) = run_pipeline();

    let meeting = &summary.meetings[0];
    assert_eq!(meeting.meeting_id, "meeting_54_04");
    assert_eq!(meeting.session, "session_54");
    assert_eq!(meeting.speech_count, 3);
    assert_eq!(
        meeting.countries,
        vec!["Bangladesh", "Cambodia", "Lao People's Democratic Republic"]
    );
    assert_eq!(meeting.languages, vec!["English", "spoke in French"]);
    assert_eq!(meeting.head_of_state_count, 1);
    assert_eq!(meeting.flagged_count, 1);
    assert_eq!(
        meeting.total_word_count,
        summary.speeches.iter().map(|s| s.word_count).sum::<usize>()
    );
}

#[test]
fn test_pipeline_writes_speech_files() {
    let (summary, output) = run_pipeline();

    let session_dir = output.path().join("session_54");
    let lao_file = session_dir.join("speech_00003_meeting_54_04_LaoPeoplesDemocraticRepublic.txt");
    assert!(lao_file.exists(), "expected {}", lao_file.display());

    let content = fs::read_to_string(&lao_file).expect("read speech file");
    assert!(content.starts_with("[METADATA]\n"));
    assert!(content.contains("Speech ID: speech_00003\n"));
    assert!(content.contains("Year: 1999\n"));
    assert!(content.contains("Session: 54\n"));
    assert!(content.contains("Meeting: meeting_54_04\n"));
    assert!(content.contains("Country: Lao People's Democratic Republic\n"));
    assert!(content.contains("Region: Asia-Pacific\n"));
    assert!(content.contains("Language: English\n"));
    assert!(content.contains("BRI Member: false\n"));
    assert!(content.contains("[/METADATA]\n\nOn behalf"));

    // Every recorded output path must exist on disk.
    for speech in &summary.speeches {
        assert!(Path::new(&speech.output_path).exists());
    }
}

#[test]
fn test_pipeline_exports_and_report() {
    let (summary, output) = run_pipeline();

    let speech_csv = output.path().join(SPEECH_METADATA_CSV);
    let meeting_csv = output.path().join(MEETING_METADATA_CSV);
    let atlasti_csv = output.path().join(ATLASTI_VARIABLES_CSV);
    let log_file = output.path().join(LOG_FILE_NAME);

    write_speech_csv(&speech_csv, &summary.speeches).expect("speech csv");
    write_meeting_csv(&meeting_csv, &summary.meetings).expect("meeting csv");
    write_atlasti_csv(&atlasti_csv, &summary.speeches).expect("atlasti csv");
    write_report(&log_file, &summary).expect("report");

    let speech_rows = fs::read_to_string(&speech_csv).expect("read speech csv");
    assert_eq!(speech_rows.lines().count(), 4); // header + 3 speeches
    assert!(speech_rows.contains("speech_00002"));
    assert!(speech_rows.contains("Sheikh Hasina"));

    let meeting_rows = fs::read_to_string(&meeting_csv).expect("read meeting csv");
    assert!(meeting_rows
        .contains("Bangladesh; Cambodia; Lao People's Democratic Republic"));

    let atlasti_rows = fs::read_to_string(&atlasti_csv).expect("read atlasti csv");
    assert!(atlasti_rows.starts_with("Document Name,Speech ID,Session,Year"));
    assert!(atlasti_rows.contains("speech_00001_meeting_54_04_Cambodia.txt"));

    let report = fs::read_to_string(&log_file).expect("read report");
    assert!(report.contains("Total speeches extracted: 3"));
    assert!(report.contains("Sheikh Hasina (Bangladesh) - meeting_54_04.txt"));
    assert!(report.contains("session_54/meeting_54_20.txt"));
    assert!(report.contains("Line: Mr. Asselborn ( spoke in French ):"));
}

#[test]
fn test_pipeline_is_deterministic() {
    let (first, _out1) = run_pipeline();
    let (second, _out2) = run_pipeline();

    assert_eq!(first.speeches.len(), second.speeches.len());
    for (a, b) in first.speeches.iter().zip(&second.speeches) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.country, b.country);
        assert_eq!(a.word_count, b.word_count);
        assert_eq!(a.memberships, b.memberships);
    }
}
