//! Output emission: per-speech text files, tabular exports, and the
//! extraction report.

mod exports;
mod report;
mod speech_files;

pub use exports::{write_atlasti_csv, write_meeting_csv, write_speech_csv};
pub use report::write_report;
pub use speech_files::{render_metadata_block, write_speech_file};
