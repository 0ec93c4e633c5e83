use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use glob::glob;
use serde::Serialize;
use serde_json::Value;
use sporedid_core::DidRecord;
use sporedid_core::bytes::{BytesLike, assert_hex_decimal, encode_latin1, normalize};
use sporedid_core::record::{DecodeOptions, TimestampRange, Utf8Policy};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("SPOREDID_BUILD_COMMIT"),
    ", ",
    env!("SPOREDID_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = concat!(
    "Examples:\n",
    "  sporedid record decode 0x0001...626974\n",
    "  sporedid record decode --file payloads.txt -o records.json --pretty\n",
    "  sporedid bytes normalize '[0, 1, 255]'"
);

#[derive(Parser, Debug)]
#[command(name = "sporedid")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Offline decoder for DID records stored in Spore cell content.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on DID record payloads.
    Record {
        #[command(subcommand)]
        command: RecordCommands,
    },
    /// Byte normalization and hex validation helpers.
    Bytes {
        #[command(subcommand)]
        command: BytesCommands,
    },
}

#[derive(Subcommand, Debug)]
enum RecordCommands {
    /// Decode payloads into DID records and emit a JSON array.
    #[command(alias = "parse")]
    #[command(after_help = EXAMPLES)]
    Decode(DecodeArgs),
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Payloads as 0x-prefixed hex or JSON byte lists such as '[0, 1, 255]'
    #[arg(required_unless_present = "file")]
    payloads: Vec<String>,

    /// Read payloads from a file (one per line, '#' starts a comment); globs allowed
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Output path (JSON); defaults to stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,

    /// Exit with a non-zero code if any payload fails to decode
    #[arg(long)]
    strict: bool,

    /// Replace malformed UTF-8 in account names instead of failing
    #[arg(long)]
    lossy_utf8: bool,

    /// Reject expiries above 2^53 - 1 milliseconds
    #[arg(long)]
    safe_integer_timestamps: bool,
}

#[derive(Subcommand, Debug)]
enum BytesCommands {
    /// Print the canonical bytes of a payload as JSON.
    Normalize {
        /// Payload as 0x-prefixed hex or a JSON byte list
        payload: String,

        /// Treat the payload as raw Latin-1 text
        #[arg(long)]
        latin1: bool,
    },
    /// Validate a 0x-prefixed hex number.
    CheckDecimal {
        value: String,

        /// Maximum size of the number in bytes
        #[arg(long)]
        max_bytes: Option<usize>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let quiet = matches!(
        &cli.command,
        Commands::Record {
            command: RecordCommands::Decode(args)
        } if args.quiet
    );
    init_logging(cli.verbose, quiet);

    let result = match cli.command {
        Commands::Record { command } => match command {
            RecordCommands::Decode(args) => cmd_record_decode(args),
        },
        Commands::Bytes { command } => match command {
            BytesCommands::Normalize { payload, latin1 } => cmd_bytes_normalize(&payload, latin1),
            BytesCommands::CheckDecimal { value, max_bytes } => {
                cmd_bytes_check_decimal(&value, max_bytes)
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

/// One element of the `record decode` output array.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DecodeEntry {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<DidRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expire_at_rfc3339: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn cmd_record_decode(args: DecodeArgs) -> Result<(), CliError> {
    let options = decode_options(&args);
    let mut payloads = args.payloads;
    if let Some(pattern) = args.file.as_ref() {
        let path = resolve_input_path(pattern)?;
        payloads.extend(read_payload_file(&path)?);
    }
    if payloads.is_empty() {
        return Err(CliError::new(
            "no payloads to decode",
            Some("pass payloads as arguments or use -f/--file".to_string()),
        ));
    }

    debug!(count = payloads.len(), ?options, "decoding payloads");
    let entries: Vec<DecodeEntry> = payloads
        .iter()
        .enumerate()
        .map(|(index, payload)| decode_entry(index, payload, &options))
        .collect();
    let failed = entries.iter().filter(|entry| entry.error.is_some()).count();
    let json = serialize_entries(&entries, args.pretty, args.compact)?;

    match args.output.as_ref() {
        Some(output) => {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(output, json)
                .with_context(|| format!("Failed to write output: {}", output.display()))?;
            if !args.quiet {
                eprintln!(
                    "OK: {} record(s) written -> {}",
                    entries.len() - failed,
                    output.display()
                );
            }
        }
        None => println!("{}", json),
    }

    if args.strict && failed > 0 {
        return Err(CliError::new(
            format!("{} payload(s) failed to decode", failed),
            Some("inspect the \"error\" entries in the output".to_string()),
        ));
    }
    Ok(())
}

fn decode_options(args: &DecodeArgs) -> DecodeOptions {
    let mut options = DecodeOptions::default();
    if args.lossy_utf8 {
        options = options.with_utf8(Utf8Policy::Lossy);
    }
    if args.safe_integer_timestamps {
        options = options.with_timestamp(TimestampRange::SafeInteger);
    }
    options
}

fn decode_entry(index: usize, payload: &str, options: &DecodeOptions) -> DecodeEntry {
    let result = parse_payload(payload).and_then(|input| {
        sporedid_core::decode_did_record_with(input, options).map_err(|err| err.to_string())
    });
    match result {
        Ok(record) => DecodeEntry {
            index,
            expire_at_rfc3339: record.expire_at_rfc3339(),
            record: Some(record),
            error: None,
        },
        Err(error) => {
            warn!(index, %error, "payload failed to decode");
            DecodeEntry {
                index,
                record: None,
                expire_at_rfc3339: None,
                error: Some(error),
            }
        }
    }
}

/// JSON arrays become byte lists, anything else is taken as hex text.
fn parse_payload(payload: &str) -> Result<BytesLike, String> {
    let payload = payload.trim();
    if !payload.starts_with('[') {
        return Ok(BytesLike::HexString(payload.to_string()));
    }
    let value: Value = serde_json::from_str(payload)
        .map_err(|err| format!("invalid JSON byte list: {err}"))?;
    BytesLike::from_json(&value).map_err(|err| err.to_string())
}

fn serialize_entries(
    entries: &[DecodeEntry],
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(entries)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(entries)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn read_payload_file(path: &Path) -> Result<Vec<String>, CliError> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload file: {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[derive(Debug, Serialize)]
struct NormalizedBytes {
    hex: String,
    length: usize,
}

fn cmd_bytes_normalize(payload: &str, latin1: bool) -> Result<(), CliError> {
    let canonical = if latin1 {
        encode_latin1(payload).map_err(|err| {
            CliError::new(
                err.to_string(),
                Some("use characters up to U+00FF".to_string()),
            )
        })?
    } else {
        let hint = "expected 0x-prefixed hex or a JSON byte list";
        let input =
            parse_payload(payload).map_err(|err| CliError::new(err, Some(hint.to_string())))?;
        normalize(input).map_err(|err| CliError::new(err.to_string(), Some(hint.to_string())))?
    };

    let out = NormalizedBytes {
        hex: canonical.to_string(),
        length: canonical.len(),
    };
    let json = serde_json::to_string(&out).context("JSON serialization failed")?;
    println!("{}", json);
    Ok(())
}

fn cmd_bytes_check_decimal(value: &str, max_bytes: Option<usize>) -> Result<(), CliError> {
    assert_hex_decimal(value, max_bytes).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some("expected 0x followed by at least one hex digit, e.g. 0x0".to_string()),
        )
    })?;
    eprintln!("OK: valid hex decimal");
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        if !input.is_file() {
            return Err(CliError::new(
                format!("payload file not found: {}", input.display()),
                Some("pass an existing text file with one payload per line".to_string()),
            ));
        }
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single payload file, or run once per file".to_string()),
        ));
    }

    matches.pop().ok_or_else(|| {
        CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        )
    })
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
