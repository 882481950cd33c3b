//! Schema-constrained dossier generation for Grimoire.
//!
//! [`Forge`] renders a prompt from user constraints, asks the backend for JSON
//! matching the dossier schema, and validates what comes back before handing
//! out a typed dossier with a fresh id. The same machinery regenerates a
//! single section of an existing dossier.
//!
//! # Example
//!
//! ```no_run
//! use grimoire_core::BeastInput;
//! use grimoire_forge::Forge;
//! use grimoire_models::{GeminiClient, GeminiConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let forge = Forge::new(GeminiClient::new(GeminiConfig::default())?);
//! let beast = forge.generate_beast(&BeastInput::from_description("A glass creature")).await?;
//! println!("{} ({})", beast.display_name, beast.id);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod forge;
mod prompts;

pub use extraction::{extract_json, parse_json};
pub use forge::Forge;
pub use prompts::{SYSTEM_INSTRUCTION, beast_prompt, character_prompt, reroll_prompt};
