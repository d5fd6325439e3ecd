//! Command-line interface for the extractor.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    ATLASTI_VARIABLES_CSV, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, LOG_FILE_NAME,
    MEETING_METADATA_CSV, SPEECH_METADATA_CSV,
};
use crate::error::{ExtractError, Result};
use crate::extractor::run_extraction;
use crate::output::{write_atlasti_csv, write_meeting_csv, write_report, write_speech_csv};

/// UNGA Extractor - Split General Assembly transcripts into labeled speeches.
#[derive(Parser)]
#[command(name = "unga-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract per-speech files and metadata tables from a transcript corpus.
    Extract {
        /// Corpus directory with session_NN subdirectories (default: data/full-txt)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory for speech files and exports (default: data/speech)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suppress the progress spinner
        #[arg(long)]
        no_progress: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            output,
            no_progress,
        } => extract_command(input.as_deref(), output.as_deref(), no_progress),
    }
}

/// Execute the extract command.
fn extract_command(
    input: Option<&Path>,
    output: Option<&Path>,
    no_progress: bool,
) -> Result<()> {
    let input_dir = input.unwrap_or(Path::new(DEFAULT_INPUT_DIR));
    let output_dir = output.unwrap_or(Path::new(DEFAULT_OUTPUT_DIR));

    // Validate the corpus location before doing any work.
    if !input_dir.exists() {
        return Err(ExtractError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input directory does not exist: {}", input_dir.display()),
        )));
    }
    if !input_dir.is_dir() {
        return Err(ExtractError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Input path is not a directory: {}", input_dir.display()),
        )));
    }
    fs::create_dir_all(output_dir)?;

    println!(
        "{} {} {} {}",
        style("Extracting speeches from").bold(),
        style(input_dir.display()).cyan(),
        style("into").bold(),
        style(output_dir.display()).cyan()
    );
    println!();

    let pb = if no_progress {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {pos} files  {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let summary = match run_extraction(input_dir, output_dir, |meeting| {
        pb.set_message(format!("{}/{}", meeting.session, meeting.filename));
        pb.inc(1);
    }) {
        Ok(summary) => summary,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Writing exports...");

    let speech_csv = output_dir.join(SPEECH_METADATA_CSV);
    let meeting_csv = output_dir.join(MEETING_METADATA_CSV);
    let atlasti_csv = output_dir.join(ATLASTI_VARIABLES_CSV);
    let log_file = output_dir.join(LOG_FILE_NAME);

    let export_result = write_speech_csv(&speech_csv, &summary.speeches)
        .and_then(|()| write_meeting_csv(&meeting_csv, &summary.meetings))
        .and_then(|()| write_atlasti_csv(&atlasti_csv, &summary.speeches))
        .and_then(|()| write_report(&log_file, &summary));
    pb.finish_and_clear();
    export_result?;

    println!(
        "{} {} speeches from {} meetings across {} sessions",
        style("Extracted").green().bold(),
        summary.speeches.len(),
        summary.meetings.len(),
        summary.session_count()
    );
    println!("  Speech metadata: {}", speech_csv.display());
    println!("  Meeting metadata: {}", meeting_csv.display());
    println!("  Document variables: {}", atlasti_csv.display());
    println!("  Extraction log: {}", log_file.display());

    if !summary.head_of_state.is_empty() {
        println!(
            "  {} head-of-state speeches noted for review",
            style(summary.head_of_state.len()).yellow()
        );
    }
    if !summary.skipped.is_empty() {
        println!(
            "  {} files skipped",
            style(summary.skipped.len()).yellow()
        );
    }
    if summary.flagged.is_empty() {
        println!("  No flagged lines - all candidate introductions validated");
    } else {
        println!(
            "  {} lines flagged for manual review",
            style(summary.flagged.len()).yellow().bold()
        );
    }

    Ok(())
}
