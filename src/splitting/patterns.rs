//! Compiled patterns for transcript structure recognition.
//!
//! A delegate speech opens with the formulaic line
//! `[Title] [Name] ([Country]) [(language note)]:`, for example:
//!
//! ```text
//! Mr. Onkeya (Lao People's Democratic Republic):
//! Mr. Chem Widhya (Cambodia) (spoke in French):
//! Dame Billie Miller (Barbados):
//! ```
//!
//! Lines that resemble an introduction but carry a language note or a UN
//! staff title where the country should be (`Mr. Asselborn ( spoke in
//! French ):`, `Mr. Shaaban (Under-Secretary-General ...):`) must not
//! become speeches. Two patterns share the same line shape: the strict one
//! constrains the country slot and feeds segmentation, the loose one
//! accepts any parenthetical and exists only so that near misses can be
//! surfaced for review (loose minus strict, by start offset). The staff-
//! title exclusions run as post-match predicates in the same strict scan.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::SpeechIntroduction;

/// Titles that open a delegate introduction line. Delegates always speak
/// under a formal title; the set is closed on purpose so that procedural
/// text ("The President:", "... took the Chair.") can never match.
const SPEAKER_TITLES: &str = r"(?x:
    Mr\.?|Mrs\.?|Ms\.?|Miss|Mme\.?
    |Dame|Sir|Dr\.?
    |His[ \t]+Excellency|Her[ \t]+Excellency
    |His[ \t]+Royal[ \t]+Highness|Her[ \t]+Royal[ \t]+Highness
    |Baron|Baroness|Lord|Lady
    |Prince|Princess|Sheikh|Dato|Datuk
    |Chief
    |Commodore|Admiral
    |Major-General|Lieutenant-General|Brigadier-General|General|Colonel|Major|Captain
    |Archbishop|Cardinal|Bishop|Monsignor|Father|Pastor
    |U|Daw
    |President
    |Prime[ \t]+Minister
    |Minister
)";

/// Strict introduction line: title + name, a parenthesized country that
/// starts with a capital letter, an optional second parenthetical
/// (language note), and a colon. Capture groups: (1) speaker with title,
/// (2) country, (3) language note.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SPEECH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?m)^[ \t]*({SPEAKER_TITLES}[^\n(]+)[ \t]+\(([A-Z][^)]+)\)(?:[ \t]+\(([^)]+)\))?[ \t]*:"
    );
    Regex::new(&pattern).expect("valid regex")
});

/// Loose introduction line: same shape, but any parenthesized content in
/// the country slot. Used only to surface near misses for review.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static POTENTIAL_SPEECH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?m)^[ \t]*{SPEAKER_TITLES}[^\n(]+[ \t]+\([^)]+\)(?:[ \t]+\([^)]+\))?[ \t]*:"
    );
    Regex::new(&pattern).expect("valid regex")
});

/// The "general debate" agenda-item heading on a line of its own.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static GENERAL_DEBATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^[ \t]*general debate[ \t]*$").expect("valid regex"));

/// "The President:" or "The Acting President:", optionally with a
/// parenthetical language note. Marks a return to procedural remarks and
/// therefore the end of the running speech.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PRESIDENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*The (?:Acting )?President(?:[ \t]*\([^)]+\))?[ \t]*:")
        .expect("valid regex")
});

/// "The meeting rose at ...", the transcript's terminal boundary.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MEETING_END_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*The meeting rose at").expect("valid regex"));

/// Titles that indicate a head of state or government speaking.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HEAD_OF_STATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:President|Prime\s+Minister|Sheikh)\s+").expect("valid regex")
});

/// UN staff titles that disqualify the country slot when they start it.
const EXCLUDED_COUNTRY_PREFIXES: &[&str] = &["Under-Secretary", "Secretary-General"];

/// Validate the raw country slot of a structurally matching line.
///
/// The country must not be a language note (`spoke in ...`,
/// `interpretation from ...`) or a UN staff title. The capital-letter
/// requirement is already part of the strict pattern; it is re-checked
/// here so the predicate stands on its own.
fn is_valid_country_field(raw: &str) -> bool {
    let after_indent = raw.trim_start_matches([' ', '\t']);
    if after_indent.starts_with("spoke") || after_indent.starts_with("interpretation") {
        return false;
    }
    if EXCLUDED_COUNTRY_PREFIXES.iter().any(|p| raw.starts_with(p)) {
        return false;
    }
    if let Some(rest) = raw.strip_prefix("Assistant") {
        let after_ws = rest.trim_start_matches([' ', '\t']);
        if after_ws.len() < rest.len() && after_ws.starts_with("Secretary") {
            return false;
        }
    }
    let mut chars = raw.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase()) && chars.next().is_some()
}

/// A loose-pattern match kept for comparison against the strict matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotentialIntroduction {
    /// Offset where the matched line begins.
    pub start: usize,

    /// The matched text, trimmed.
    pub line: String,
}

/// Locate the start of the General Debate section.
///
/// Returns the offset just past the heading line, i.e. where scanning for
/// speeches should begin, or `None` when the document has no such section.
#[must_use]
pub fn find_general_debate_start(text: &str) -> Option<usize> {
    GENERAL_DEBATE_PATTERN.find(text).map(|m| m.end())
}

/// Scan for strictly validated speech introductions, in document order.
///
/// Matches are non-overlapping and scanned left to right; the country
/// exclusion predicates run against each structural match in the same
/// pass.
#[must_use]
pub fn find_speech_introductions(text: &str) -> Vec<SpeechIntroduction> {
    SPEECH_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let (m, speaker, country) = (caps.get(0)?, caps.get(1)?, caps.get(2)?);
            if !is_valid_country_field(country.as_str()) {
                return None;
            }
            let language = caps
                .get(3)
                .map(|l| l.as_str().trim().to_string())
                .filter(|l| !l.is_empty());
            Some(SpeechIntroduction {
                speaker: speaker.as_str().trim().to_string(),
                country: country.as_str().trim().to_string(),
                language,
                start: m.start(),
                body_start: m.end(),
            })
        })
        .collect()
}

/// Scan for all loosely matching introduction lines, in document order.
///
/// The caller subtracts the strict matches by start offset; what remains
/// is the flagged-for-review list.
#[must_use]
pub fn find_potential_introductions(text: &str) -> Vec<PotentialIntroduction> {
    POTENTIAL_SPEECH_PATTERN
        .find_iter(text)
        .map(|m| PotentialIntroduction {
            start: m.start(),
            line: m.as_str().trim().to_string(),
        })
        .collect()
}

/// Start offsets of all presiding-officer interjections.
#[must_use]
pub fn president_marker_offsets(text: &str) -> Vec<usize> {
    PRESIDENT_PATTERN.find_iter(text).map(|m| m.start()).collect()
}

/// Start offsets of all meeting-end markers.
#[must_use]
pub fn meeting_end_offsets(text: &str) -> Vec<usize> {
    MEETING_END_PATTERN.find_iter(text).map(|m| m.start()).collect()
}

/// Whether a speaker field indicates a head of state or government.
#[must_use]
pub fn is_head_of_state(speaker: &str) -> bool {
    HEAD_OF_STATE_PATTERN.is_match(speaker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Loose matches whose start offset has no strict counterpart.
    fn near_misses(text: &str) -> Vec<PotentialIntroduction> {
        let strict: Vec<usize> = find_speech_introductions(text)
            .iter()
            .map(|i| i.start)
            .collect();
        find_potential_introductions(text)
            .into_iter()
            .filter(|p| !strict.contains(&p.start))
            .collect()
    }

    #[test]
    fn test_plain_introduction() {
        let text = "\nMr. Onkeya (Lao People's Democratic Republic):\n I thank you.";
        let intros = find_speech_introductions(text);
        assert_eq!(intros.len(), 1);
        assert_eq!(intros[0].speaker, "Mr. Onkeya");
        assert_eq!(intros[0].country, "Lao People's Democratic Republic");
        assert_eq!(intros[0].language, None);
        assert_eq!(&text[intros[0].body_start..], "\n I thank you.");
    }

    #[test]
    fn test_introduction_with_language_note() {
        let text = "\nMr. Chem Widhya (Cambodia) (spoke in French):\n";
        let intros = find_speech_introductions(text);
        assert_eq!(intros.len(), 1);
        assert_eq!(intros[0].speaker, "Mr. Chem Widhya");
        assert_eq!(intros[0].country, "Cambodia");
        assert_eq!(intros[0].language, Some("spoke in French".to_string()));
    }

    #[test]
    fn test_title_variants() {
        for line in [
            "Dame Billie Miller (Barbados):",
            "His Excellency Mr. Niyazov (Turkmenistan):",
            "Sheikh Hasina (Bangladesh):",
            "U Win Aung (Myanmar):",
            "Prime Minister Schoof (Kingdom of the Netherlands):",
        ] {
            let text = format!("\n{line}\n");
            assert_eq!(
                find_speech_introductions(&text).len(),
                1,
                "expected a strict match for {line:?}"
            );
        }
    }

    #[test]
    fn test_indented_introduction() {
        let text = "\n\t  Ms. Rodham (United States):\nThank you.";
        let intros = find_speech_introductions(text);
        assert_eq!(intros.len(), 1);
        assert_eq!(intros[0].country, "United States");
    }

    #[test]
    fn test_president_line_is_not_an_introduction() {
        let text = "\nThe President (spoke in French):\n";
        assert!(find_speech_introductions(text).is_empty());
        assert!(find_potential_introductions(text).is_empty());
        assert_eq!(president_marker_offsets(text), vec![1]);
    }

    #[test]
    fn test_acting_president_marker() {
        let text = "words\nThe Acting President:\n";
        assert_eq!(president_marker_offsets(text).len(), 1);
    }

    #[test]
    fn test_procedural_chair_line_is_not_matched() {
        // No trailing colon after the parenthetical, so not even a loose match.
        let text = "\nMr. Olhaye (Djibouti), Vice-President, took the Chair.\n";
        assert!(find_speech_introductions(text).is_empty());
        assert!(find_potential_introductions(text).is_empty());
    }

    #[test]
    fn test_language_note_in_country_slot_is_a_near_miss() {
        let text = "\nMr. Asselborn ( spoke in French ):\n";
        assert!(find_speech_introductions(text).is_empty());
        let misses = near_misses(text);
        assert_eq!(misses.len(), 1);
        assert_eq!(misses[0].line, "Mr. Asselborn ( spoke in French ):");
    }

    #[test]
    fn test_un_officials_are_near_misses() {
        let text = "\nMr. Shaaban (Under-Secretary-General for General Assembly Affairs):\n";
        assert!(find_speech_introductions(text).is_empty());
        assert_eq!(near_misses(text).len(), 1);

        let text = "\nMs. Fréchette (Assistant Secretary-General):\n";
        assert!(find_speech_introductions(text).is_empty());
        assert_eq!(near_misses(text).len(), 1);
    }

    #[test]
    fn test_head_of_state_without_country_is_a_near_miss() {
        let text = "\nPresident Wade (spoke in French):\n";
        assert!(find_speech_introductions(text).is_empty());
        assert_eq!(near_misses(text).len(), 1);
    }

    #[test]
    fn test_strict_matches_are_not_near_misses() {
        let text = "\nMr. Onkeya (Lao People's Democratic Republic):\n";
        assert_eq!(find_potential_introductions(text).len(), 1);
        assert!(near_misses(text).is_empty());
    }

    #[test]
    fn test_country_validation_predicates() {
        assert!(is_valid_country_field("Cambodia"));
        assert!(!is_valid_country_field("spoke in French"));
        assert!(!is_valid_country_field(" spoke in French "));
        assert!(!is_valid_country_field("interpretation from Russian"));
        assert!(!is_valid_country_field("Under-Secretary-General for Legal Affairs"));
        assert!(!is_valid_country_field("Secretary-General"));
        assert!(!is_valid_country_field("Assistant Secretary-General"));
        // Needs whitespace between "Assistant" and "Secretary" to be a title.
        assert!(is_valid_country_field("AssistantSecretaryland"));
        assert!(!is_valid_country_field("X"));
        assert!(!is_valid_country_field("côte"));
    }

    #[test]
    fn test_general_debate_detection() {
        let text = "Agenda item 9\n  General debate  \nAddress by someone";
        let offset = find_general_debate_start(text).expect("should find heading");
        assert_eq!(&text[offset..], "\nAddress by someone");
    }

    #[test]
    fn test_general_debate_must_own_its_line() {
        assert!(find_general_debate_start("continuation of the general debate on item 9\n").is_none());
        assert!(find_general_debate_start("GENERAL DEBATE\n").is_some());
    }

    #[test]
    fn test_meeting_end_marker() {
        let text = "closing remarks\nThe meeting rose at 1 p.m.\n";
        assert_eq!(meeting_end_offsets(text), vec![16]);
    }

    #[test]
    fn test_head_of_state_titles() {
        assert!(is_head_of_state("President Tong"));
        assert!(is_head_of_state("Prime Minister Schoof"));
        assert!(is_head_of_state("Sheikh Hasina"));
        assert!(is_head_of_state("president Tong"));
        assert!(!is_head_of_state("Mr. Onkeya"));
        assert!(!is_head_of_state("Presidente Fernandez"));
    }

    #[test]
    fn test_introductions_are_ordered_and_non_overlapping() {
        let text = "\nMr. A. Bell (Canada):\nwords\nMs. C. Dunn (Ghana):\nmore";
        let intros = find_speech_introductions(text);
        assert_eq!(intros.len(), 2);
        assert!(intros[0].body_start <= intros[1].start);
    }
}
