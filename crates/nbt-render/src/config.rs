/// Configuration for tree rendering.
///
/// ```text
/// ┌────────┬──────────────────────────────────────────────────────┐
/// │ Field  │ Purpose                                              │
/// ├────────┼──────────────────────────────────────────────────────┤
/// │ mode   │ Selects the pretty dump or single-line SNBT          │
/// │ indent │ Spaces per nesting level (pretty mode only)          │
/// └────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub mode: OutputMode,
    pub indent: usize,
}

impl Default for RenderConfig {
    /// Pretty mode with four-space indentation.
    fn default() -> Self {
        Self {
            mode: OutputMode::Pretty,
            indent: 4,
        }
    }
}

/// Output format for rendered trees.
///
/// ```text
/// ┌────────┬──────────────────────────────────────────────────────┐
/// │ Mode   │ Shape                                                │
/// ├────────┼──────────────────────────────────────────────────────┤
/// │ Pretty │ One tag per line, `TAG_Kind("name"): value`          │
/// │ Snbt   │ Stringified NBT on a single line, `{a:1b,b:[I;2]}`   │
/// └────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Pretty,
    Snbt,
}
