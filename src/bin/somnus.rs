//! Somnus CLI - score sleep records from the command line
//!
//! Commands:
//! - score: Score a single JSON sleep record
//! - batch: Score newline-delimited JSON records (one result per line)
//! - schema: Print sample input and output documents

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use somnus::{compute_quality, SleepRecord, ENGINE_VERSION, PRODUCER_NAME};

/// Somnus - deterministic sleep quality scoring engine
#[derive(Parser)]
#[command(name = "somnus")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Score single-night sleep records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single JSON sleep record
    Score {
        /// Input file path (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Pretty-print the result (default when stdout is a terminal)
        #[arg(long)]
        pretty: bool,
    },

    /// Score newline-delimited JSON records (one result per line)
    Batch {
        /// Input file path (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Continue past records that fail to score, reporting them on stderr
        #[arg(long)]
        skip_errors: bool,
    },

    /// Print sample input and output documents
    Schema {
        /// Document to print
        #[arg(value_enum)]
        schema_type: SchemaType,
    },
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Sample sleep record input
    Input,
    /// Sample scoring result output
    Output,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SomnusCliError> {
    match cli.command {
        Commands::Score { input, pretty } => cmd_score(&input, pretty),
        Commands::Batch {
            input,
            output,
            skip_errors,
        } => cmd_batch(&input, &output, skip_errors),
        Commands::Schema { schema_type } => cmd_schema(schema_type),
    }
}

fn cmd_score(input: &PathBuf, pretty: bool) -> Result<(), SomnusCliError> {
    let input_data = read_input(input)?;

    let record: SleepRecord = serde_json::from_str(&input_data)?;
    let result = compute_quality(&record)?;

    let pretty = pretty || atty::is(atty::Stream::Stdout);
    let rendered = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };

    println!("{rendered}");
    Ok(())
}

fn cmd_batch(input: &PathBuf, output: &PathBuf, skip_errors: bool) -> Result<(), SomnusCliError> {
    let mut out: Box<dyn Write> = if output.to_string_lossy() == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(fs::File::create(output)?)
    };

    let input_data = read_input(input)?;
    let mut failed = 0usize;

    for (line_no, line) in input_data.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match somnus::score_json(trimmed) {
            Ok(result_json) => writeln!(out, "{result_json}")?,
            Err(e) if skip_errors => {
                failed += 1;
                eprintln!("line {}: {}", line_no + 1, e);
            }
            Err(e) => {
                return Err(SomnusCliError::BatchLine {
                    line: line_no + 1,
                    source: e,
                })
            }
        }
    }
    out.flush()?;

    if failed > 0 {
        eprintln!("{failed} records skipped");
    }
    Ok(())
}

fn cmd_schema(schema_type: SchemaType) -> Result<(), SomnusCliError> {
    let document = match schema_type {
        SchemaType::Input => sample_input()?,
        SchemaType::Output => sample_output()?,
    };
    println!("{document}");
    Ok(())
}

fn sample_record() -> SleepRecord {
    serde_json::from_value(serde_json::json!({
        "bedtime": "23:15",
        "wake_time": "06:45",
        "tst_min": 420,
        "waso_min": 15,
        "awakenings": 1,
        "deep_min": 80,
        "rem_min": 95,
        "caffeine_after_14": false
    }))
    .expect("sample record is valid")
}

fn sample_input() -> Result<String, SomnusCliError> {
    Ok(serde_json::to_string_pretty(&sample_record())?)
}

fn sample_output() -> Result<String, SomnusCliError> {
    let result = compute_quality(&sample_record())?;
    Ok(serde_json::to_string_pretty(&result)?)
}

fn read_input(input: &PathBuf) -> Result<String, SomnusCliError> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

// Error types

#[derive(Debug)]
enum SomnusCliError {
    Io(io::Error),
    Score(somnus::ScoreError),
    Json(serde_json::Error),
    BatchLine {
        line: usize,
        source: somnus::ScoreError,
    },
}

impl std::fmt::Display for SomnusCliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SomnusCliError::Io(e) => write!(f, "{e}"),
            SomnusCliError::Score(e) => write!(f, "{e}"),
            SomnusCliError::Json(e) => write!(f, "{e}"),
            SomnusCliError::BatchLine { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl From<io::Error> for SomnusCliError {
    fn from(e: io::Error) -> Self {
        SomnusCliError::Io(e)
    }
}

impl From<somnus::ScoreError> for SomnusCliError {
    fn from(e: somnus::ScoreError) -> Self {
        SomnusCliError::Score(e)
    }
}

impl From<serde_json::Error> for SomnusCliError {
    fn from(e: serde_json::Error) -> Self {
        SomnusCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<SomnusCliError> for CliError {
    fn from(e: SomnusCliError) -> Self {
        match e {
            SomnusCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            SomnusCliError::Score(e) => CliError {
                code: "SCORE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some(format!(
                    "Run '{PRODUCER_NAME} schema input' for a sample record"
                )),
            },
            SomnusCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            SomnusCliError::BatchLine { line, source } => CliError {
                code: "BATCH_LINE_ERROR".to_string(),
                message: format!("line {line}: {source}"),
                hint: Some("Use --skip-errors to continue past bad records".to_string()),
            },
        }
    }
}
