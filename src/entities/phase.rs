// Kill Chain Phase Entity
// One stage in the find/fix/track/target/engage/assess sequence used to
// categorize a company's documented role.

use serde::{Deserialize, Serialize};

// ============================================================================
// PHASE KEY
// ============================================================================

/// Closed set of kill chain phase keys.
///
/// Companies reference phases through this enum, so a tag can never point at
/// a phase that does not exist in the type system. The registry entry for a
/// key can still be missing from a dataset, which `Dataset::validate` treats
/// as a reference-integrity failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseKey {
    /// Collection and surveillance
    Find,

    /// AI target identification
    Fix,

    /// Logistics, fuel, sensor lock
    Track,

    /// C4ISR and strike authorization
    Target,

    /// Kinetic action
    Engage,

    /// Battle damage assessment and analytics
    Assess,
}

impl PhaseKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKey::Find => "find",
            PhaseKey::Fix => "fix",
            PhaseKey::Track => "track",
            PhaseKey::Target => "target",
            PhaseKey::Engage => "engage",
            PhaseKey::Assess => "assess",
        }
    }

    /// All keys in kill chain order.
    pub fn all() -> [PhaseKey; 6] {
        [
            PhaseKey::Find,
            PhaseKey::Fix,
            PhaseKey::Track,
            PhaseKey::Target,
            PhaseKey::Engage,
            PhaseKey::Assess,
        ]
    }
}

impl std::fmt::Display for PhaseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PHASE ENTITY
// ============================================================================

/// Registry entry for a kill chain phase: display metadata only, the key
/// carries the identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub key: PhaseKey,

    /// Two-digit sequence id shown on cards ("01".."06")
    pub id: String,

    /// Display name ("FIND", "FIX", ...)
    pub name: String,

    /// Subtitle line ("SURVEILLANCE & CLOUD", ...)
    pub alias: String,

    pub description: String,

    /// Ownership-range label shown on the phase card ("1.0% - 2.0%")
    pub ownership_range: String,

    /// CSS color for card accents
    pub color: String,

    /// Lucide icon name
    pub icon: String,
}

impl Phase {
    pub fn new(
        key: PhaseKey,
        id: &str,
        name: &str,
        alias: &str,
        description: &str,
        ownership_range: &str,
        color: &str,
        icon: &str,
    ) -> Self {
        Phase {
            key,
            id: id.to_string(),
            name: name.to_string(),
            alias: alias.to_string(),
            description: description.to_string(),
            ownership_range: ownership_range.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
