#![warn(clippy::pedantic)]

pub mod byte_string;
pub mod compound;
pub mod error;
pub mod kind;
pub mod list;
pub mod value;
pub mod walk;

mod deep;
mod teardown;

pub use byte_string::ByteString;
pub use compound::Compound;
pub use error::TypeError;
pub use kind::TagKind;
pub use list::TagList;
pub use value::{RootTag, TagValue};
pub use walk::{Visit, Walk};
