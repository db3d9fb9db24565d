/// Implementation of `nbt validate`.
///
/// Decodes the whole input in strict mode and reports either a series of
/// success checkmarks (`✓`) or a diagnostic failure line (`✗`). The
/// command exits with code 0 on a valid file and code 1 on any error.
///
/// # Success output
///
/// ```text
/// ✓ Root: TAG_Compound("Level")
/// ✓ Tags: 1742 tags decoded, max depth 6
/// ✓ Termination: no bytes after the root tag
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: unknown tag kind 0x0C at offset 17
/// ```
use anyhow::{Result, anyhow};
use nbt_decoder::DecodeError;
use nbt_render::TreeStats;

use crate::input::{decode_bytes, display_name, read_input};
use crate::{GlobalOpts, ValidateArgs};

/// Run the `nbt validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or fails to decode.
pub fn run(args: &ValidateArgs, opts: &GlobalOpts) -> Result<()> {
    let label = display_name(&args.file);
    let bytes = read_input(&args.file)?;

    match decode_bytes(&bytes, opts, true, &label) {
        Ok(root) => {
            let stats = TreeStats::collect(&root);
            println!("✓ Root: {}(\"{}\")", root.value.kind(), root.name);
            println!(
                "✓ Tags: {} tag{} decoded, max depth {}",
                stats.total_tags,
                if stats.total_tags == 1 { "" } else { "s" },
                stats.max_depth
            );
            println!("✓ Termination: no bytes after the root tag");
            Ok(())
        }
        Err(e) => {
            println!("✗ Error: {}", decode_error_diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

/// Converts a [`DecodeError`] into a human-readable diagnostic string.
///
/// ```text
/// ┌───────────────────────┬────────────────────────────────────────────┐
/// │ DecodeError variant   │ Diagnostic message                         │
/// ├───────────────────────┼────────────────────────────────────────────┤
/// │ PrematureEndOfInput   │ "truncated input: ..."                     │
/// │ TrailingData          │ "{n} unexpected bytes after the root tag"  │
/// │ EmptyRoot             │ "empty document (root kind is TAG_End)"    │
/// │ anything else         │ "<error Display>"                          │
/// └───────────────────────┴────────────────────────────────────────────┘
/// ```
fn decode_error_diagnostic(e: &DecodeError) -> String {
    match e {
        DecodeError::PrematureEndOfInput { offset, needed } => {
            format!("truncated input: needed {needed} more bytes at offset {offset}")
        }
        DecodeError::TrailingData { extra_bytes } => {
            format!("{extra_bytes} unexpected bytes after the root tag")
        }
        DecodeError::EmptyRoot => "empty document (root kind is TAG_End)".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics() {
        assert_eq!(
            decode_error_diagnostic(&DecodeError::TrailingData { extra_bytes: 2 }),
            "2 unexpected bytes after the root tag"
        );
        assert_eq!(
            decode_error_diagnostic(&DecodeError::InvalidListElementKind { count: 4 }),
            "list of TAG_End declares 4 elements"
        );
    }
}
