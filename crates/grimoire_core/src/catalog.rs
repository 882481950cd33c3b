//! Suggested values for beast constraints.
//!
//! These are offered as choices; free text is always accepted.

/// Broad creature classifications.
pub const BEAST_TAXONOMY: &[&str] = &[
    "Beast",
    "Humanoid",
    "Aberration",
    "Construct",
    "Fauna",
    "Faerie",
    "Undead",
    "Elemental",
    "Dragon",
    "Plant",
];

/// Magical and elemental affinities.
pub const BEAST_AFFINITY: &[&str] = &[
    "Primal",
    "Arcane",
    "Elemental (Fire)",
    "Elemental (Water)",
    "Elemental (Air)",
    "Elemental (Earth)",
    "Celestial",
    "Abyssal",
    "Shadow",
    "Radiant",
    "Mechanical",
    "Cybernetic",
    "Spirit",
    "Chemical",
    "Rot",
];

/// Habitats.
pub const BEAST_ENVIRONMENT: &[&str] = &[
    "Forest",
    "Swamp",
    "Mountain",
    "Urban Ruins",
    "Subterranean",
    "Sea",
    "Sky",
    "Wasteland",
    "Desert",
    "Tundra",
    "Plains",
    "Netspace (Cyberpunk)",
];
