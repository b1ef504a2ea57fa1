//! Turns icon font stylesheets into C++ headers of UTF-8 string constants.
//!
//! A line such as `.ri-arrow-left:before { content: "\f104"; }` becomes
//! `const char* const ICON_ARROW_LEFT = "\xef\x84\x84";`.

pub mod config;
pub mod error;
pub mod header;
pub mod manifest;
pub mod pattern;
pub mod transform;

pub use config::Config;
pub use error::{Error, Result};
pub use header::Generator;
pub use pattern::{IconMatch, IconPattern};
pub use transform::{EscapeStyle, IconConstant};
