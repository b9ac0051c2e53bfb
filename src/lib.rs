//! # jsontidy
//!
//! A single-pass reindenter for JSON-like text. It rewrites whitespace and
//! punctuation into a fixed 4-space-indented layout without ever parsing
//! the input:
//!
//! - One object member or array element per line
//! - String contents pass through byte-for-byte, escapes included
//! - Malformed input (unbalanced brackets, unterminated strings, stray
//!   bytes) is rendered best-effort instead of rejected
//! - No options: indent width, spacing, and line breaks are fixed
//!
//! Because there is no parser, jsontidy is useful exactly where a strict
//! formatter gives up: log fragments, truncated payloads, and almost-JSON
//! from tools that never quite agree on the grammar.
//!
//! ## Command-Line Tool
//!
//! The crate ships the `jtidy` binary for use as a shell filter:
//!
//! ```sh
//! # Format text given as an argument
//! jtidy '{"a":1,"b":[2,3]}'
//!
//! # Format stdin
//! curl -s https://example.com/data.json | jtidy
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! let input = r#"{"name":"Alice","scores":[95,87]}"#;
//!
//! let output = jsontidy::reformat(input).unwrap();
//!
//! assert_eq!(output, "\
//! {
//!     \"name\": \"Alice\",
//!     \"scores\": [
//!         95,
//!         87
//!     ]
//! }");
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be rendered directly:
//!
//! ```rust
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     scores: Vec<i32>,
//! }
//!
//! let player = Player {
//!     name: "Alice".into(),
//!     scores: vec![95, 87, 92],
//! };
//!
//! let output = jsontidy::to_string_pretty(&player).unwrap();
//! ```
//!
//! ## How It Works
//!
//! A scanner walks the input once, byte by byte, tracking only bracket
//! depth and whether it is inside a string literal. Inside a literal,
//! bytes are copied verbatim (escape tracking exists solely to spot the
//! closing quote). Outside, `{` `[` `}` `]` `,` and `:` are rewritten with
//! newlines and indentation, original whitespace is dropped, and anything
//! else is copied through. Stray closing brackets clamp the depth at zero
//! rather than corrupting the layout.
//!
//! ## Embedding
//!
//! For foreign hosts the [`ffi`] module exports `format_json` and
//! `free_result` with C linkage; build the crate as a `cdylib` and the
//! pair behaves like a classic allocate/release C API.

mod buffer;
mod convert;
mod error;
pub mod ffi;
mod scanner;

pub use crate::convert::to_string_pretty;
pub use crate::error::JsonTidyError;
pub use crate::scanner::{reformat, reformat_bytes};
