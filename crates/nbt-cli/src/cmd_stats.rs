/// Implementation of `nbt stats`.
///
/// Decodes an NBT file and prints its shape: per-kind tag counts, nesting
/// depth and payload totals.
///
/// # Example output
///
/// ```text
/// File:    level.dat  (1093 bytes, zstd)
/// Root:    TAG_Compound("Data")
/// Tags:    214 total, max depth 5
///
/// Kind                 Count
/// ──────────────────────────
/// TAG_Byte                31
/// TAG_Compound            12
/// TAG_Int                 40
/// ──────────────────────────
/// Total                  214
///
/// Payload:
///   byte arrays   0 bytes
///   int arrays    16 ints
///   strings       508 bytes
/// ```
///
/// With `--json` the same data is printed as one JSON object.
use anyhow::{Context, Result};
use nbt_decoder::decompression::is_zstd;
use nbt_render::TreeStats;
use serde::Serialize;

use crate::input::{decode_bytes, display_name, read_input};
use crate::{GlobalOpts, StatsArgs};

/// JSON shape of the `--json` report.
#[derive(Serialize)]
struct StatsReport<'a> {
    file: &'a str,
    input_bytes: usize,
    compressed: bool,
    root_name: String,
    root_kind: &'static str,
    #[serde(flatten)]
    stats: &'a TreeStats,
}

/// Run the `nbt stats` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or decoded, or the report
/// cannot be serialized.
pub fn run(args: &StatsArgs, opts: &GlobalOpts) -> Result<()> {
    let label = display_name(&args.file);
    let bytes = read_input(&args.file)?;
    let root = decode_bytes(&bytes, opts, false, &label)
        .with_context(|| format!("failed to decode {label}"))?;
    let stats = TreeStats::collect(&root);
    let compressed = is_zstd(&bytes);

    if args.json {
        let report = StatsReport {
            file: &label,
            input_bytes: bytes.len(),
            compressed,
            root_name: root.name.to_string(),
            root_kind: root.value.kind().name(),
            stats: &stats,
        };
        let json = serde_json::to_string_pretty(&report).context("cannot serialize stats")?;
        println!("{json}");
        return Ok(());
    }

    let compression_note = if compressed { ", zstd" } else { "" };
    println!("File:    {label}  ({} bytes{compression_note})", bytes.len());
    println!("Root:    {}(\"{}\")", root.value.kind(), root.name);
    println!(
        "Tags:    {} total, max depth {}",
        stats.total_tags, stats.max_depth
    );
    println!();

    let sep = "─".repeat(26);
    println!("{:<20}{:>6}", "Kind", "Count");
    println!("{sep}");
    for (kind, count) in &stats.kinds {
        println!("{kind:<20}{count:>6}");
    }
    println!("{sep}");
    println!("{:<20}{:>6}", "Total", stats.total_tags);
    println!();

    println!("Payload:");
    println!("  byte arrays   {} bytes", stats.byte_array_bytes);
    println!("  int arrays    {} ints", stats.int_array_ints);
    println!("  strings       {} bytes", stats.string_bytes);

    Ok(())
}
