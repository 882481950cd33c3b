//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use grimoire::ExportFormat;
use std::path::PathBuf;

/// Grimoire - fantasy character and bestiary dossiers generated by Gemini
#[derive(Parser, Debug)]
#[command(name = "grimoire")]
#[command(about = "Generate, refine and export fantasy character and bestiary dossiers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Keep collections in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Configuration file replacing the user config files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Character commands
    #[command(subcommand)]
    Character(CharacterCommands),

    /// Beast commands
    #[command(subcommand)]
    Beast(BeastCommands),

    /// Export a dossier
    Export {
        /// Id of the character or beast
        id: String,

        /// Output format
        #[arg(long, default_value = "markdown")]
        format: ExportFormat,

        /// File to write, or a directory to write a named file into; stdout when absent
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Profile commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Print suggested beast taxonomies, affinities and environments
    Catalog,
}

/// Constraints for a new character
#[derive(Args, Debug, Clone)]
pub struct CharacterArgs {
    /// Concept, in a sentence or two
    #[arg(long, short)]
    pub description: String,

    /// Role in the story
    #[arg(long)]
    pub role: Option<String>,

    /// Race
    #[arg(long)]
    pub race: Option<String>,

    /// Archetype
    #[arg(long)]
    pub archetype: Option<String>,

    /// Goals
    #[arg(long)]
    pub goals: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Signature weapon
    #[arg(long)]
    pub sword_type: Option<String>,

    /// Story the character belongs to
    #[arg(long)]
    pub story_summary: Option<String>,

    /// Existing relationships
    #[arg(long)]
    pub relationships: Option<String>,

    /// Gender
    #[arg(long)]
    pub gender: Option<String>,

    /// Character type (hero, villain, ...)
    #[arg(long)]
    pub character_type: Option<String>,
}

/// Character subcommands
#[derive(Subcommand, Debug)]
pub enum CharacterCommands {
    /// Generate a new character
    Create(CharacterArgs),

    /// Generate a variant of an existing character
    Variant {
        /// Id of the original
        id: String,

        /// Concept for the variant; derived from the original when absent
        #[arg(long, short)]
        description: Option<String>,
    },

    /// Regenerate one section of a character
    Reroll {
        /// Id of the character
        id: String,

        /// Section to regenerate (backstory, appearance, personality, abilities, relationships)
        section: String,
    },

    /// List characters, newest first
    List,

    /// Print one character as Markdown
    Show {
        /// Id of the character
        id: String,
    },

    /// Delete a character
    Delete {
        /// Id of the character
        id: String,
    },

    /// Save a character to the profile
    Save {
        /// Id of the character
        id: String,
    },
}

/// Beast subcommands
#[derive(Subcommand, Debug)]
pub enum BeastCommands {
    /// Generate a new beast
    Create {
        /// Concept, in a sentence or two
        #[arg(long, short)]
        description: String,

        /// Taxonomy (see `grimoire catalog`)
        #[arg(long)]
        taxonomy: Option<String>,

        /// Affinity (see `grimoire catalog`)
        #[arg(long)]
        affinity: Option<String>,

        /// Environment (see `grimoire catalog`)
        #[arg(long)]
        environment: Option<String>,
    },

    /// Regenerate one section of a beast
    Reroll {
        /// Id of the beast
        id: String,

        /// Section to regenerate (abilities, flaw, loot_table, ...)
        section: String,
    },

    /// List beasts, newest first
    List,

    /// Print one beast as Markdown
    Show {
        /// Id of the beast
        id: String,
    },

    /// Delete a beast
    Delete {
        /// Id of the beast
        id: String,
    },

    /// Save a beast to the profile
    Save {
        /// Id of the beast
        id: String,
    },
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List saved dossiers, oldest first
    List,
}
