//! Entity kinds.

use serde::{Deserialize, Serialize};

/// The two kinds of dossier the generator produces.
///
/// # Examples
///
/// ```
/// use grimoire_core::EntityKind;
///
/// assert_eq!(EntityKind::Character.to_string(), "character");
/// assert_eq!("beast".parse::<EntityKind>().unwrap(), EntityKind::Beast);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    /// Characters: people with a story
    Character,
    /// Beasts: creatures of the wild places
    Beast,
}
