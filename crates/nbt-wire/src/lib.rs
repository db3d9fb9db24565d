#![warn(clippy::pedantic)]

pub mod error;
pub mod kind_id;
pub mod primitive;
pub mod source;

pub use error::WireError;
pub use source::{ByteSource, ReadSource, SliceSource};
