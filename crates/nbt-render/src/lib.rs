#![warn(clippy::pedantic)]

pub mod config;
pub mod pretty;
pub mod renderer;
pub mod snbt;
pub mod stats;

pub use config::{OutputMode, RenderConfig};
pub use pretty::PrettyRenderer;
pub use renderer::{DefaultRenderer, NbtRenderer};
pub use snbt::SnbtRenderer;
pub use stats::TreeStats;
