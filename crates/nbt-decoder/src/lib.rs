#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod decompression;
pub mod engine;
pub mod error;
pub mod payload;
pub mod streaming;

pub use config::DecoderConfig;
pub use decoder::NbtDecoder;
pub use engine::read_nbt;
pub use error::DecodeError;
pub use streaming::decode_async;
