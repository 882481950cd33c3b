//! Backend seam for the Grimoire dossier generator.
//!
//! [`GrimoireDriver`] is the one trait a generative backend implements. With
//! the `mock` feature, [`MockDriver`] provides a scripted stand-in for tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(any(test, feature = "mock"))]
mod mock;
mod traits;

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockBehavior, MockDriver, MockResponse};
pub use traits::GrimoireDriver;
