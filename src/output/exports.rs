//! Tabular exports for downstream analysis.
//!
//! Three views of the same run: a speech-level table with every derived
//! field, a meeting-level rollup table, and an ATLAS.ti document-variables
//! table keyed by generated file name (ATLAS.ti matches rows to imported
//! documents by exact file name, so the first column must be the output
//! file).

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::types::{MeetingSummary, Speech};

/// Speech-level row with every derived field.
#[derive(Debug, Serialize)]
struct SpeechRow<'a> {
    speech_id: &'a str,
    meeting_id: &'a str,
    session: &'a str,
    year: Option<i32>,
    source_file: &'a str,
    output_file: &'a str,
    output_path: &'a str,
    speaker: &'a str,
    country: &'a str,
    region: &'a str,
    language: &'a str,
    word_count: usize,
    paragraph_count: usize,
    is_head_of_state: bool,
    is_focac_member: bool,
    is_cascf_member: bool,
    is_sco_member: bool,
    is_bri_member: bool,
    focac_joined: Option<i32>,
    cascf_joined: Option<i32>,
    sco_joined: Option<i32>,
    bri_joined: Option<i32>,
    bri_exited: Option<i32>,
    focac_at_speech: bool,
    cascf_at_speech: bool,
    sco_at_speech: bool,
    bri_at_speech: bool,
    is_celac_member: bool,
    celac_joined: Option<i32>,
    celac_at_speech: bool,
}

impl<'a> From<&'a Speech> for SpeechRow<'a> {
    fn from(s: &'a Speech) -> Self {
        let m = &s.memberships;
        Self {
            speech_id: &s.id,
            meeting_id: &s.meeting_id,
            session: &s.session,
            year: s.year,
            source_file: &s.source_file,
            output_file: &s.output_file,
            output_path: &s.output_path,
            speaker: &s.speaker,
            country: &s.country,
            region: &s.region,
            language: &s.language,
            word_count: s.word_count,
            paragraph_count: s.paragraph_count,
            is_head_of_state: s.is_head_of_state,
            is_focac_member: m.focac.ever,
            is_cascf_member: m.cascf.ever,
            is_sco_member: m.sco.ever,
            is_bri_member: m.bri.ever,
            focac_joined: m.focac.joined,
            cascf_joined: m.cascf.joined,
            sco_joined: m.sco.joined,
            bri_joined: m.bri.joined,
            bri_exited: m.bri.exited,
            focac_at_speech: m.focac.at_speech_time,
            cascf_at_speech: m.cascf.at_speech_time,
            sco_at_speech: m.sco.at_speech_time,
            bri_at_speech: m.bri.at_speech_time,
            is_celac_member: m.celac.ever,
            celac_joined: m.celac.joined,
            celac_at_speech: m.celac.at_speech_time,
        }
    }
}

/// Meeting-level rollup row.
#[derive(Debug, Serialize)]
struct MeetingRow<'a> {
    meeting_id: &'a str,
    session: &'a str,
    meeting_file: &'a str,
    speech_count: usize,
    country_count: usize,
    countries: String,
    languages: String,
    total_word_count: usize,
    head_of_state_count: usize,
    flagged_count: usize,
}

impl<'a> From<&'a MeetingSummary> for MeetingRow<'a> {
    fn from(m: &'a MeetingSummary) -> Self {
        Self {
            meeting_id: &m.meeting_id,
            session: &m.session,
            meeting_file: &m.meeting_file,
            speech_count: m.speech_count,
            country_count: m.countries.len(),
            countries: m.countries.join("; "),
            languages: m.languages.join("; "),
            total_word_count: m.total_word_count,
            head_of_state_count: m.head_of_state_count,
            flagged_count: m.flagged_count,
        }
    }
}

/// ATLAS.ti document-variables row: renamed, reordered speech columns.
#[derive(Debug, Serialize)]
struct AtlastiRow<'a> {
    #[serde(rename = "Document Name")]
    document_name: &'a str,
    #[serde(rename = "Speech ID")]
    speech_id: &'a str,
    #[serde(rename = "Session")]
    session: &'a str,
    #[serde(rename = "Year")]
    year: Option<i32>,
    #[serde(rename = "Country")]
    country: &'a str,
    #[serde(rename = "UN Region")]
    region: &'a str,
    #[serde(rename = "Speaker")]
    speaker: &'a str,
    #[serde(rename = "Language")]
    language: &'a str,
    #[serde(rename = "Word Count")]
    word_count: usize,
    #[serde(rename = "Paragraph Count")]
    paragraph_count: usize,
    #[serde(rename = "Head of State")]
    head_of_state: bool,
    #[serde(rename = "FOCAC Member")]
    focac_member: bool,
    #[serde(rename = "CASCF Member")]
    cascf_member: bool,
    #[serde(rename = "SCO Member")]
    sco_member: bool,
    #[serde(rename = "BRI Member")]
    bri_member: bool,
    #[serde(rename = "CELAC Member")]
    celac_member: bool,
    #[serde(rename = "FOCAC Joined")]
    focac_joined: Option<i32>,
    #[serde(rename = "CASCF Joined")]
    cascf_joined: Option<i32>,
    #[serde(rename = "SCO Joined")]
    sco_joined: Option<i32>,
    #[serde(rename = "BRI Joined")]
    bri_joined: Option<i32>,
    #[serde(rename = "BRI Exited")]
    bri_exited: Option<i32>,
    #[serde(rename = "CELAC Joined")]
    celac_joined: Option<i32>,
    #[serde(rename = "FOCAC At Speech")]
    focac_at_speech: bool,
    #[serde(rename = "CASCF At Speech")]
    cascf_at_speech: bool,
    #[serde(rename = "SCO At Speech")]
    sco_at_speech: bool,
    #[serde(rename = "BRI At Speech")]
    bri_at_speech: bool,
    #[serde(rename = "CELAC At Speech")]
    celac_at_speech: bool,
}

impl<'a> From<&'a Speech> for AtlastiRow<'a> {
    fn from(s: &'a Speech) -> Self {
        let m = &s.memberships;
        Self {
            document_name: &s.output_file,
            speech_id: &s.id,
            session: &s.session,
            year: s.year,
            country: &s.country,
            region: &s.region,
            speaker: &s.speaker,
            language: &s.language,
            word_count: s.word_count,
            paragraph_count: s.paragraph_count,
            head_of_state: s.is_head_of_state,
            focac_member: m.focac.ever,
            cascf_member: m.cascf.ever,
            sco_member: m.sco.ever,
            bri_member: m.bri.ever,
            celac_member: m.celac.ever,
            focac_joined: m.focac.joined,
            cascf_joined: m.cascf.joined,
            sco_joined: m.sco.joined,
            bri_joined: m.bri.joined,
            bri_exited: m.bri.exited,
            celac_joined: m.celac.joined,
            focac_at_speech: m.focac.at_speech_time,
            cascf_at_speech: m.cascf.at_speech_time,
            sco_at_speech: m.sco.at_speech_time,
            bri_at_speech: m.bri.at_speech_time,
            celac_at_speech: m.celac.at_speech_time,
        }
    }
}

/// Write the speech-level metadata CSV.
pub fn write_speech_csv(path: &Path, speeches: &[Speech]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for speech in speeches {
        writer.serialize(SpeechRow::from(speech))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the meeting-level metadata CSV.
pub fn write_meeting_csv(path: &Path, meetings: &[MeetingSummary]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for meeting in meetings {
        writer.serialize(MeetingRow::from(meeting))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the ATLAS.ti document-variables CSV.
pub fn write_atlasti_csv(path: &Path, speeches: &[Speech]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for speech in speeches {
        writer.serialize(AtlastiRow::from(speech))?;
    }
    writer.flush()?;
    Ok(())
}
