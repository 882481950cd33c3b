//! Error types for the Grimoire dossier generator.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The user-facing taxonomy maps onto these types as follows:
//!
//! | failure | type |
//! |---|---|
//! | backend unreachable or refusing | [`HttpError`], [`GeminiError`] |
//! | malformed or incomplete model output | [`SchemaError`] |
//! | reroll on an ineligible field | [`InvalidFieldError`] |
//! | unreadable stored collection | [`StorageError`] (swallowed on load) |
//!
//! # Examples
//!
//! ```
//! use grimoire_error::{GrimoireResult, HttpError};
//!
//! fn fetch_data() -> GrimoireResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod field;
mod gemini;
mod http;
mod input;
mod json;
mod schema;
mod storage;
mod workflow;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{GrimoireError, GrimoireErrorKind, GrimoireResult};
pub use field::InvalidFieldError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;
pub use input::InputError;
pub use json::JsonError;
pub use schema::{SchemaError, SchemaErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use workflow::{WorkflowError, WorkflowErrorKind};
