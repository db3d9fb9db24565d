/// NBT command-line tool: dump, validate and analyse Named Binary Tag
/// files.
///
/// # Command overview
///
/// ```text
/// nbt <COMMAND> [OPTIONS]
///
/// Commands:
///   dump       Print a decoded tree (pretty layout or SNBT)
///   validate   Check that a file decodes cleanly
///   stats      Print tag counts and payload totals
///   help       Print help information
///
/// Global options:
///   -v, --verbose      Print input size, compression and timing to stderr
///   --max-depth <N>    Reject containers nested deeper than N
///   -h, --help         Print help
///   -V, --version      Print version
/// ```
///
/// Every command takes a file path, or `-` to read standard input. Input
/// that starts with the zstd frame magic is decompressed transparently.
///
/// # Exit codes
///
/// | Code | Meaning                                   |
/// |------|-------------------------------------------|
/// | 0    | Success                                   |
/// | 1    | Error (I/O failure, malformed input, ...) |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_dump;
mod cmd_stats;
mod cmd_validate;
mod input;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The NBT command-line tool.
#[derive(Parser)]
#[command(name = "nbt", version, about = "Named Binary Tag decoder CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print input size, compression and decode timing to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Maximum container nesting depth (unlimited when omitted).
    #[arg(long, global = true, value_name = "N")]
    max_depth: Option<usize>,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print a decoded tree.
    Dump(DumpArgs),
    /// Check that a file decodes cleanly, with no trailing bytes.
    Validate(ValidateArgs),
    /// Print tag counts, depth and payload totals.
    Stats(StatsArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `nbt dump`.
///
/// ```text
/// ┌───────────────┬─────────────────────────────────────────────────┐
/// │ Flag          │ Values / default                                │
/// ├───────────────┼─────────────────────────────────────────────────┤
/// │ --mode        │ pretty (default) | snbt                         │
/// │ --indent      │ spaces per level in pretty mode (default 4)     │
/// │ -o / --output │ write to file instead of stdout                 │
/// └───────────────┴─────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DumpArgs {
    /// Path to the NBT file, or `-` for stdin.
    pub file: PathBuf,

    /// Output format: `pretty` or `snbt`.
    #[arg(long, default_value = "pretty")]
    pub mode: String,

    /// Spaces per nesting level in pretty mode.
    #[arg(long, default_value_t = 4)]
    pub indent: usize,

    /// Write rendered output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `nbt validate`.
///
/// Decodes the whole file in strict mode (bytes after the root tag are an
/// error) and prints a `✓`/`✗` report. Exits with code 1 on failure.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the NBT file, or `-` for stdin.
    pub file: PathBuf,
}

/// Arguments for `nbt stats`.
#[derive(clap::Args)]
pub struct StatsArgs {
    /// Path to the NBT file, or `-` for stdin.
    pub file: PathBuf,

    /// Emit the report as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Options shared by every command.
pub struct GlobalOpts {
    pub verbose: bool,
    pub max_depth: Option<usize>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    let opts = GlobalOpts {
        verbose: cli.verbose,
        max_depth: cli.max_depth,
    };

    let result = match cli.command {
        Commands::Dump(args) => cmd_dump::run(&args, &opts),
        Commands::Validate(args) => cmd_validate::run(&args, &opts),
        Commands::Stats(args) => cmd_stats::run(&args, &opts),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
