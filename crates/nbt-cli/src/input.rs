/// Input handling shared by every command: reading a file or stdin and
/// running the decoder with the global options applied.
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use nbt_decoder::decompression::is_zstd;
use nbt_decoder::{DecodeError, DecoderConfig, NbtDecoder};
use nbt_types::RootTag;

use crate::GlobalOpts;

/// Human-readable name for an input path (`<stdin>` for `-`).
pub fn display_name(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read the whole input into memory.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if is_stdin(path) {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("cannot read stdin")?;
        Ok(buf)
    } else {
        fs::read(path).with_context(|| format!("cannot read {}", path.display()))
    }
}

/// Decode `bytes` with the global options, reporting size, compression and
/// timing on stderr when `--verbose` is set.
///
/// # Errors
///
/// Returns the decoder's error unchanged so callers can inspect it.
pub fn decode_bytes(
    bytes: &[u8],
    opts: &GlobalOpts,
    strict: bool,
    label: &str,
) -> Result<RootTag, DecodeError> {
    let decoder = NbtDecoder::new(DecoderConfig {
        max_depth: opts.max_depth,
        reject_trailing_data: strict,
        ..DecoderConfig::default()
    });

    if opts.verbose {
        let compression = if is_zstd(bytes) { "zstd" } else { "uncompressed" };
        eprintln!("{label}: {} bytes ({compression})", bytes.len());
    }

    let started = Instant::now();
    let result = decoder.decode(bytes);
    if opts.verbose {
        eprintln!("{label}: decoded in {:.3?}", started.elapsed());
    }
    result
}

/// Read and decode an input path in one step.
///
/// # Errors
///
/// Returns an error if the input cannot be read or does not decode.
pub fn load(path: &Path, opts: &GlobalOpts) -> Result<RootTag> {
    let label = display_name(path);
    let bytes = read_input(path)?;
    decode_bytes(&bytes, opts, false, &label).with_context(|| format!("failed to decode {label}"))
}
