/// Implementation of `nbt dump`.
///
/// Decodes an NBT file and renders the tree with [`DefaultRenderer`]. The
/// output is written to stdout or to `-o <file>`.
///
/// # Output modes
///
/// ```text
/// ┌────────┬─────────────────────────────────────────────────────────────┐
/// │ Mode   │ Format                                                      │
/// ├────────┼─────────────────────────────────────────────────────────────┤
/// │ pretty │ TAG_Compound("name"): 2 entries / { ... }   (default)       │
/// │ snbt   │ {name:"Steve",pos:[I;0,64,0]}                               │
/// └────────┴─────────────────────────────────────────────────────────────┘
/// ```
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result, anyhow};
use nbt_render::{DefaultRenderer, NbtRenderer, OutputMode, RenderConfig};

use crate::input::load;
use crate::{DumpArgs, GlobalOpts};

/// Run the `nbt dump` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or decoded, the mode is
/// unrecognised, or the output cannot be written.
pub fn run(args: &DumpArgs, opts: &GlobalOpts) -> Result<()> {
    let mode = parse_output_mode(&args.mode)?;
    let root = load(&args.file, opts)?;

    let config = RenderConfig {
        mode,
        indent: args.indent,
    };
    let rendered = DefaultRenderer.render(&root, &config);

    if let Some(path) = &args.output {
        fs::write(path, rendered.as_bytes())
            .with_context(|| format!("cannot write {}", path.display()))?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(rendered.as_bytes())
            .context("cannot write to stdout")?;
        if !rendered.ends_with('\n') {
            handle.write_all(b"\n").context("cannot write to stdout")?;
        }
    }

    Ok(())
}

/// Parses the `--mode` string to an [`OutputMode`].
///
/// # Errors
///
/// Returns an error for unrecognised mode names.
fn parse_output_mode(s: &str) -> Result<OutputMode> {
    match s.to_lowercase().as_str() {
        "pretty" => Ok(OutputMode::Pretty),
        "snbt" => Ok(OutputMode::Snbt),
        _ => Err(anyhow!("unknown mode {s:?}, expected pretty|snbt")),
    }
}
