//! Configuration layering tests.

use grimoire::{GrimoireConfig, GrimoireErrorKind};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn write_config(dir: &TempDir, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.path().join("grimoire.toml");
    std::fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn test_bundled_defaults_apply_under_empty_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "")?;

    let config = GrimoireConfig::load_with_env(Some(&path), env(&[]))?;
    assert_eq!(config.gemini().model(), "gemini-3-pro-preview");
    assert_eq!(config.gemini().api_key_env(), "GEMINI_API_KEY");
    assert!(config.storage().dir().is_none());
    Ok(())
}

#[test]
fn test_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(
        &dir,
        "[gemini]\nmodel = \"gemini-2.5-flash\"\ntemperature = 0.4\n\n[storage]\ndir = \"/srv/grimoire\"\n",
    )?;

    let config = GrimoireConfig::load_with_env(Some(&path), env(&[]))?;
    assert_eq!(config.gemini().model(), "gemini-2.5-flash");
    assert_eq!(*config.gemini().temperature(), Some(0.4));
    assert_eq!(
        config.storage().dir().as_deref(),
        Some(Path::new("/srv/grimoire"))
    );
    assert_eq!(config.gemini().api_key_env(), "GEMINI_API_KEY");
    Ok(())
}

#[test]
fn test_environment_overrides_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "[gemini]\nmodel = \"from-file\"\n")?;

    let config = GrimoireConfig::load_with_env(
        Some(&path),
        env(&[
            ("GRIMOIRE__GEMINI__MODEL", "from-env"),
            ("GRIMOIRE__GEMINI__TIMEOUT_SECS", "30"),
        ]),
    )?;
    assert_eq!(config.gemini().model(), "from-env");
    assert_eq!(*config.gemini().timeout_secs(), Some(30));
    Ok(())
}

#[test]
fn test_missing_explicit_file_is_config_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("absent.toml");

    let err = GrimoireConfig::load_with_env(Some(&missing), env(&[])).unwrap_err();
    assert!(matches!(err.kind(), GrimoireErrorKind::Config(_)));
    Ok(())
}

#[test]
fn test_wrong_type_is_config_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "[gemini]\ntimeout_secs = \"soon\"\n")?;

    let err = GrimoireConfig::load_with_env(Some(&path), env(&[])).unwrap_err();
    assert!(err.to_string().contains("parse"));
    Ok(())
}
