//! UNGA Extractor - Split UN General Assembly meeting transcripts into
//! individually labeled speech records.
//!
//! The extractor locates the General Debate section of each transcript,
//! finds every delegate speech-introduction line, delimits each speech's
//! text span, and attaches per-speech and per-meeting metadata (country,
//! region, language, organization memberships, word and paragraph counts).
//! Ambiguous lines are flagged for manual review instead of being guessed
//! at, and documents without a recognizable General Debate section are
//! reported and skipped.
//!
//! # Example
//!
//! ```
//! use unga_extractor::splitting::{segment, Segmentation};
//!
//! let text = "General debate\n\nMr. Onkeya (Lao People's Democratic Republic):\nThank you.\n";
//! match segment(text, "meeting_53_01.txt") {
//!     Segmentation::Segmented { speeches, flagged } => {
//!         assert_eq!(speeches.len(), 1);
//!         assert!(flagged.is_empty());
//!     }
//!     Segmentation::Skipped { .. } => unreachable!(),
//! }
//! ```
//!
//! # Architecture
//!
//! - [`tables`]: Static reference tables (session years, regions,
//!   organization memberships)
//! - [`splitting`]: Pattern matching and speech segmentation
//! - [`enrich`]: Derived speech attributes
//! - [`extractor`]: Batch orchestration over a transcript corpus
//! - [`output`]: Per-speech files, CSV exports, and the extraction report
//! - [`types`]: Core data types
//! - [`error`]: Error types and Result alias
//! - [`config`]: Configuration constants
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod enrich;
pub mod error;
pub mod extractor;
pub mod output;
pub mod splitting;
pub mod tables;
pub mod types;

// Re-export main entry points
pub use extractor::run_extraction;
pub use splitting::{segment, Segmentation};

// Re-export commonly used items
pub use error::{ExtractError, Result};
pub use types::{MeetingSummary, RunSummary, Speech};
