//! Grimoire CLI binary.
//!
//! Generate characters and beasts, regenerate sections, manage the profile
//! and export dossiers.

use clap::Parser;
use grimoire::{
    Backend, CollectionStore, EntityId, FileSystemStore, GrimoireConfig, GrimoireResult,
    InMemoryStore, Workshop, init_tracing,
};
use std::process::ExitCode;
use std::sync::Arc;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: cli::Cli) -> GrimoireResult<()> {
    use cli::{
        Commands, ProfileCommands, export_dossier, handle_beast_command, handle_character_command,
        list_profile, print_catalog,
    };

    let config = GrimoireConfig::load(cli.config.as_deref())?;

    let store: Arc<dyn CollectionStore> = if cli.ephemeral {
        Arc::new(InMemoryStore::new())
    } else {
        Arc::new(FileSystemStore::new(config.storage().resolve_dir()?)?)
    };
    let workshop = Workshop::open(Backend::from_config(config.gemini()), store);

    match cli.command {
        Commands::Character(cmd) => handle_character_command(&workshop, cmd).await?,
        Commands::Beast(cmd) => handle_beast_command(&workshop, cmd).await?,
        Commands::Export { id, format, output } => {
            export_dossier(&workshop, &EntityId::from(id), format, output)?
        }
        Commands::Profile(ProfileCommands::List) => list_profile(&workshop),
        Commands::Catalog => print_catalog(),
    }

    Ok(())
}
