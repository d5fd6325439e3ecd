//! Human-readable extraction report.
//!
//! One plain-text file per run: summary statistics, then the review
//! sections (head-of-state speeches, skipped documents, flagged lines).
//! The report is the audit trail for the best-effort extraction policy:
//! nothing is silently dropped, it is listed here instead.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::RunSummary;

const RULE_HEAVY: &str = "================================================================================";
const RULE_LIGHT: &str = "----------------------------------------";

/// Write the extraction report to `path`.
pub fn write_report(path: &Path, summary: &RunSummary) -> Result<()> {
    let timestamp = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S");
    fs::write(path, render_report(summary, &timestamp.to_string()))?;
    Ok(())
}

/// Render the full report.
fn render_report(summary: &RunSummary, timestamp: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Speech Extraction Log - {timestamp}");
    let _ = writeln!(out, "{RULE_HEAVY}\n");

    render_statistics(&mut out, summary);
    let _ = writeln!(out, "\n{RULE_HEAVY}\n");

    render_head_of_state(&mut out, summary);
    let _ = writeln!(out, "\n{RULE_HEAVY}\n");

    render_skipped(&mut out, summary);
    let _ = writeln!(out, "\n{RULE_HEAVY}\n");

    render_flagged(&mut out, summary);
    out
}

fn render_statistics(out: &mut String, summary: &RunSummary) {
    let speeches = summary.speeches.len();
    let meetings = summary.meetings.len();
    let total_words = summary.total_word_count();

    let _ = writeln!(out, "SUMMARY STATISTICS");
    let _ = writeln!(out, "{RULE_LIGHT}");
    let _ = writeln!(out, "Total files found: {}", summary.total_files);
    let _ = writeln!(out, "Total meetings processed: {meetings}");
    let _ = writeln!(out, "Files skipped: {}", summary.skipped.len());
    let _ = writeln!(out, "Total speeches extracted: {speeches}");
    let _ = writeln!(out, "Total sessions processed: {}", summary.session_count());
    let _ = writeln!(out, "Total countries represented: {}", summary.country_count());
    let _ = writeln!(out, "Total word count: {total_words}");
    if speeches > 0 {
        let _ = writeln!(
            out,
            "Average speech length: {:.0} words",
            total_words as f64 / speeches as f64
        );
    }
    if meetings > 0 {
        let _ = writeln!(
            out,
            "Average speeches per meeting: {:.1}",
            speeches as f64 / meetings as f64
        );
    }
    let _ = writeln!(
        out,
        "Head-of-state speeches: {}",
        summary.head_of_state.len()
    );

    let _ = writeln!(out, "\nSpeeches by session:");
    let mut by_session: BTreeMap<&str, usize> = BTreeMap::new();
    for speech in &summary.speeches {
        *by_session.entry(&speech.session).or_default() += 1;
    }
    for (session, count) in by_session {
        let _ = writeln!(out, "  {session}: {count}");
    }

    let _ = writeln!(out, "\nTop 10 countries by speech count:");
    for (country, count) in top_counts(summary.speeches.iter().map(|s| s.country.as_str()), 10) {
        let _ = writeln!(out, "  {country}: {count}");
    }

    let _ = writeln!(out, "\nLanguage breakdown:");
    for (language, count) in
        top_counts(summary.speeches.iter().map(|s| s.language.as_str()), usize::MAX)
    {
        let _ = writeln!(out, "  {language}: {count}");
    }
}

fn render_head_of_state(out: &mut String, summary: &RunSummary) {
    let _ = writeln!(out, "HEAD-OF-STATE/GOVERNMENT SPEECHES");
    let _ = writeln!(out, "{RULE_LIGHT}");
    let _ = writeln!(
        out,
        "Legitimate General Debate speeches delivered by a head of state or\n\
         government; listed separately in case they warrant separate analysis.\n"
    );
    if summary.head_of_state.is_empty() {
        let _ = writeln!(out, "No head-of-state speeches found.");
        return;
    }
    let _ = writeln!(
        out,
        "Found {} head-of-state speeches:\n",
        summary.head_of_state.len()
    );
    for note in &summary.head_of_state {
        let _ = writeln!(out, "  {} ({}) - {}", note.speaker, note.country, note.file);
    }
}

fn render_skipped(out: &mut String, summary: &RunSummary) {
    let _ = writeln!(out, "SKIPPED FILES");
    let _ = writeln!(out, "{RULE_LIGHT}");
    let _ = writeln!(
        out,
        "Documents that produced no speeches: procedural meetings and\n\
         elections without a general debate section, or unreadable files.\n"
    );
    if summary.skipped.is_empty() {
        let _ = writeln!(out, "No files skipped.");
        return;
    }
    let _ = writeln!(out, "Skipped {} files:\n", summary.skipped.len());
    let mut skipped: Vec<_> = summary.skipped.iter().collect();
    skipped.sort_by(|a, b| (&a.session, &a.file).cmp(&(&b.session, &b.file)));
    for skip in skipped {
        let _ = writeln!(out, "  {}/{} ({})", skip.session, skip.file, skip.reason);
    }
}

fn render_flagged(out: &mut String, summary: &RunSummary) {
    let _ = writeln!(out, "FLAGGED LINES FOR MANUAL REVIEW");
    let _ = writeln!(out, "{RULE_LIGHT}");
    let _ = writeln!(
        out,
        "Lines that look like delegate speech introductions but failed\n\
         validation; none of them produced a speech.\n"
    );
    if summary.flagged.is_empty() {
        let _ = writeln!(out, "No flagged lines.");
        return;
    }
    let _ = writeln!(out, "Found {} flagged lines:\n", summary.flagged.len());
    for flagged in &summary.flagged {
        let _ = writeln!(out, "File: {}", flagged.file);
        let _ = writeln!(out, "Line: {}", flagged.line);
        let _ = writeln!(out, "Reason: {}", flagged.reason);
        let _ = writeln!(out, "{RULE_LIGHT}");
    }
}

/// Count occurrences and return the `limit` most frequent values,
/// most frequent first, ties broken alphabetically.
fn top_counts<'a>(values: impl Iterator<Item = &'a str>, limit: usize) -> Vec<(&'a str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    counts.truncate(limit);
    counts
}
