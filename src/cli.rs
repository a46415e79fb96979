// Command-line inspector for wire buffers.
//
// Decodes a buffer against a comma-separated field layout and prints the
// values, either as plain lines or as a JSON document.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use log::debug;

use crate::wire::layout::{self, Field, FieldKind};
use crate::wire::{Cursor, DecodeError, MAX_MESSAGE_SIZE, WireConfig, message, varint};

// ---------------------------------------------------------------------------
// Byte size parsing (supports K, M, G suffixes)
// ---------------------------------------------------------------------------

fn parse_byte_size(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty size string".into());
    }
    let (num_part, multiplier) = match s.as_bytes().last() {
        Some(b'k' | b'K') => (&s[..s.len() - 1], 1024usize),
        Some(b'm' | b'M') => (&s[..s.len() - 1], 1024 * 1024),
        Some(b'g' | b'G') => (&s[..s.len() - 1], 1024 * 1024 * 1024),
        _ => (s, 1usize),
    };
    let num: usize = num_part
        .trim()
        .parse()
        .map_err(|e| format!("invalid size '{s}': {e}"))?;
    num.checked_mul(multiplier)
        .ok_or_else(|| format!("size overflow: '{s}'"))
}

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Inspect buffers encoded in the compact varint wire format.
#[derive(Parser, Debug)]
#[command(
    name = "wirecursor",
    version,
    about = "Wire-format buffer inspector",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Quiet mode (only errors are logged).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose logging (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Decode a buffer field by field.
    Decode(DecodeArgs),
    /// Show the encoded length implied by a varint lead byte.
    Varint(VarintArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["hex", "base64", "file"])))]
struct DecodeArgs {
    /// Field layout, e.g. `u16,i32,string,bytes,blob:4`.
    #[arg(long, short = 'l')]
    layout: String,

    /// Buffer as hex digits (whitespace allowed).
    #[arg(long)]
    hex: Option<String>,

    /// Buffer as standard base64.
    #[arg(long)]
    base64: Option<String>,

    /// Read the raw buffer from a file (`-` for stdin).
    file: Option<PathBuf>,

    /// Reject buffers larger than this (supports K/M/G suffix).
    #[arg(long = "max-size", value_parser = parse_byte_size, default_value_t = MAX_MESSAGE_SIZE)]
    max_size: usize,

    /// Fail if bytes remain after the last field.
    #[arg(long)]
    exact: bool,
}

#[derive(Args, Debug)]
struct VarintArgs {
    /// Lead byte (0-255).
    lead: u8,
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

fn load_input(args: &DecodeArgs) -> Result<Vec<u8>, String> {
    if let Some(text) = &args.hex {
        return message::hex_to_bytes(text).map_err(|e| e.to_string());
    }
    if let Some(text) = &args.base64 {
        return decode_base64(text);
    }
    match &args.file {
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|e| format!("stdin: {e}"))?;
            Ok(buf)
        }
        Some(path) => std::fs::read(path).map_err(|e| format!("{}: {e}", path.display())),
        None => Err("no input given".into()),
    }
}

#[cfg(feature = "base64")]
fn decode_base64(text: &str) -> Result<Vec<u8>, String> {
    message::base64_to_bytes(text).map_err(|e| e.to_string())
}

#[cfg(not(feature = "base64"))]
fn decode_base64(_text: &str) -> Result<Vec<u8>, String> {
    Err("base64 input not enabled. Rebuild with `--features base64`".into())
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn field_to_json(field: &Field) -> serde_json::Value {
    use serde_json::{Value, json};

    match field {
        Field::Unsigned(v) => json!(v),
        Field::Signed(v) => json!(v),
        Field::Float(v) => json!(v),
        Field::Bool(v) => json!(v),
        Field::Char(v) => json!(v.to_string()),
        Field::Text(v) => json!(v),
        Field::Bytes(None) => Value::Null,
        Field::Bytes(Some(b)) => {
            let hex: String = b.iter().map(|byte| format!("{byte:02x}")).collect();
            json!(hex)
        }
        Field::Skipped(n) => json!({ "skipped": n }),
    }
}

struct DecodeReport {
    size: usize,
    consumed: usize,
    fields: Vec<(FieldKind, Field)>,
    error: Option<(usize, DecodeError)>,
}

impl DecodeReport {
    fn to_json(&self) -> serde_json::Value {
        let fields: Vec<_> = self
            .fields
            .iter()
            .map(|(kind, field)| {
                serde_json::json!({ "kind": kind.to_string(), "value": field_to_json(field) })
            })
            .collect();
        let mut doc = serde_json::json!({
            "size": self.size,
            "consumed": self.consumed,
            "remaining": self.size - self.consumed,
            "fields": fields,
        });
        if let Some((index, err)) = &self.error {
            doc["error"] = serde_json::json!({ "field": index, "message": err.to_string() });
        }
        doc
    }

    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, (kind, field)) in self.fields.iter().enumerate() {
            writeln!(out, "{i}\t{kind}\t{field}")?;
        }
        writeln!(
            out,
            "-- {} of {} bytes consumed, {} remaining",
            self.consumed,
            self.size,
            self.size - self.consumed
        )
    }
}

fn decode_with_layout(bytes: &[u8], kinds: &[FieldKind]) -> DecodeReport {
    let mut cursor = Cursor::new(bytes);
    let mut fields = Vec::with_capacity(kinds.len());
    let mut error = None;
    for (i, &kind) in kinds.iter().enumerate() {
        match layout::decode_field(&mut cursor, kind) {
            Ok(field) => fields.push((kind, field)),
            Err(e) => {
                debug!("field {i} ({kind}) failed at {cursor}");
                error = Some((i, e));
                break;
            }
        }
    }
    DecodeReport {
        size: bytes.len(),
        consumed: cursor.consumed(),
        fields,
        error,
    }
}

// ---------------------------------------------------------------------------
// Decode command
// ---------------------------------------------------------------------------

fn cmd_decode(args: &DecodeArgs, json_output: bool) -> i32 {
    let kinds = match layout::parse_layout(&args.layout) {
        Ok(kinds) => kinds,
        Err(e) => {
            eprintln!("wirecursor: --layout: {e}");
            return 1;
        }
    };

    let bytes = match load_input(args) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("wirecursor: input: {e}");
            return 1;
        }
    };

    let config = WireConfig::default()
        .with_max_message_size(args.max_size)
        .with_reject_trailing(args.exact);
    if let Err(e) = config.check_size(bytes.len()) {
        eprintln!("wirecursor: decode: {e}");
        return 1;
    }

    let mut report = decode_with_layout(&bytes, &kinds);
    let remaining = report.size - report.consumed;
    if report.error.is_none() && config.reject_trailing && remaining > 0 {
        report.error = Some((kinds.len(), DecodeError::TrailingBytes { remaining }));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = if json_output {
        match serde_json::to_string_pretty(&report.to_json()) {
            Ok(text) => writeln!(out, "{text}"),
            Err(e) => {
                eprintln!("wirecursor: json: {e}");
                return 1;
            }
        }
    } else {
        report.write_text(&mut out)
    };
    if let Err(e) = written {
        eprintln!("wirecursor: write: {e}");
        return 1;
    }

    match &report.error {
        Some((index, e)) => {
            eprintln!("wirecursor: decode: field {index}: {e}");
            1
        }
        None => 0,
    }
}

// ---------------------------------------------------------------------------
// Varint command
// ---------------------------------------------------------------------------

fn cmd_varint(args: &VarintArgs, json_output: bool) -> i32 {
    let lead = args.lead;
    let u16_len = varint::encoded_len_u16(lead);
    let u32_len = varint::encoded_len_u32(lead);
    let u64_len = varint::encoded_len_u64(lead);

    if json_output {
        let json = serde_json::json!({
            "lead": lead,
            "u16": u16_len,
            "u32": u32_len,
            "u64": u64_len,
        });
        match serde_json::to_string_pretty(&json) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("wirecursor: json: {e}");
                return 1;
            }
        }
    } else {
        let u16_text = u16_len.map_or_else(|| "malformed".to_string(), |n| n.to_string());
        println!("lead {lead}: u16={u16_text} u32={u32_len} u64={u64_len}");
    }
    0
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("wirecursor version {version}");

    let base64 = cfg!(feature = "base64") as u8;
    let ptr_size = std::mem::size_of::<*const ()>();

    eprintln!("BASE64={base64}");
    eprintln!("MAX_MESSAGE_SIZE={MAX_MESSAGE_SIZE}");
    eprintln!("MAX_VARINT_LEN={}", varint::MAX_VARINT_LEN);
    eprintln!("sizeof(usize)={ptr_size}");

    0
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("wirecursor".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(Cli {
        command: Cmd::Decode(args),
        ..
    }) = Cli::try_parse_from(argv)
    {
        let _ = layout::parse_layout(&args.layout);
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn log_filter(quiet: bool, verbose: u8) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.quiet, cli.verbose)),
    )
    .format_timestamp(None)
    .format_target(false)
    .init();

    let exit_code = match &cli.command {
        Cmd::Decode(args) => cmd_decode(args, cli.json_output),
        Cmd::Varint(args) => cmd_varint(args, cli.json_output),
        Cmd::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
