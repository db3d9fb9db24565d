use nbt_types::RootTag;

use crate::config::{OutputMode, RenderConfig};
use crate::pretty::PrettyRenderer;
use crate::snbt::SnbtRenderer;

/// Core rendering interface: turns a decoded tree into text.
///
/// Implementations are stateless; all options come through
/// [`RenderConfig`]. Rendering cannot fail because every tree the decoder
/// produces has a textual form.
///
/// ```text
/// RootTag ──▶ NbtRenderer::render() ──▶ String
///                     │
///               RenderConfig
///               (mode, indent)
/// ```
pub trait NbtRenderer {
    fn render(&self, root: &RootTag, config: &RenderConfig) -> String;
}

/// Renderer that dispatches on [`RenderConfig::mode`].
///
/// ```text
/// ┌──────────┐     ┌──────────┐     ┌────────────────┐
/// │ RootTag  │────▶│ dispatch │────▶│ PrettyRenderer │
/// │          │     │          │     │ SnbtRenderer   │
/// └──────────┘     └──────────┘     └────────────────┘
/// ```
pub struct DefaultRenderer;

impl NbtRenderer for DefaultRenderer {
    fn render(&self, root: &RootTag, config: &RenderConfig) -> String {
        match config.mode {
            OutputMode::Pretty => PrettyRenderer::render_all(root, config.indent),
            OutputMode::Snbt => SnbtRenderer::render_all(root),
        }
    }
}

#[cfg(test)]
mod tests {
    use nbt_types::TagValue;

    use super::*;

    #[test]
    fn dispatches_on_mode() {
        let root = RootTag::new("n", TagValue::Short(5));
        let pretty = DefaultRenderer.render(&root, &RenderConfig::default());
        assert_eq!(pretty, "TAG_Short(\"n\"): 5\n");

        let snbt = DefaultRenderer.render(
            &root,
            &RenderConfig {
                mode: OutputMode::Snbt,
                ..RenderConfig::default()
            },
        );
        assert_eq!(snbt, "5s");
    }
}
