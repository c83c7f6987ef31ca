// Company Entity
// One tracked holding: identity (name, ticker), ownership stake, kill chain
// phase tags, role description, and source references.

use serde::{Deserialize, Serialize};

use super::phase::PhaseKey;

// ============================================================================
// HOLDING STATUS
// ============================================================================

/// Whether a company is currently part of the tracked holdings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldingStatus {
    /// Currently invested
    Active,

    /// Position sold off; kept in the list as a historical record
    Excluded,
}

impl HoldingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HoldingStatus::Active => "Active",
            HoldingStatus::Excluded => "Excluded",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, HoldingStatus::Active)
    }
}

// ============================================================================
// COMPANY ENTITY
// ============================================================================

/// A tracked holding. Immutable after dataset construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,

    pub ticker: String,

    /// Kill chain phases this company is tagged with (at least one)
    pub phases: Vec<PhaseKey>,

    /// Short role line ("Project Nimbus Cloud", "MK84 Bomb Bodies")
    pub role: String,

    pub description: String,

    /// Fund ownership stake, percent of outstanding shares
    pub stake_pct: f64,

    /// Market value of the stake in raw USD (not millions)
    pub value_usd: f64,

    /// Free-form flags shown as badges ("Project Nimbus", "Munitions")
    pub flags: Vec<String>,

    /// Keys into the source registry backing the claims above
    pub sources: Vec<String>,

    pub status: HoldingStatus,
}

impl Company {
    pub fn new(
        name: &str,
        ticker: &str,
        phases: Vec<PhaseKey>,
        role: &str,
        description: &str,
        stake_pct: f64,
        value_usd: f64,
    ) -> Self {
        Company {
            name: name.to_string(),
            ticker: ticker.to_string(),
            phases,
            role: role.to_string(),
            description: description.to_string(),
            stake_pct,
            value_usd,
            flags: Vec::new(),
            sources: Vec::new(),
            status: HoldingStatus::Active,
        }
    }

    pub fn with_flags(mut self, flags: &[&str]) -> Self {
        self.flags = flags.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_sources(mut self, sources: &[&str]) -> Self {
        self.sources = sources.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_status(mut self, status: HoldingStatus) -> Self {
        self.status = status;
        self
    }

    /// True if this company is tagged with the given phase.
    pub fn has_phase(&self, key: PhaseKey) -> bool {
        self.phases.contains(&key)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_company() -> Company {
        Company::new(
            "Alphabet Inc. (Google)",
            "GOOGL",
            vec![PhaseKey::Find, PhaseKey::Fix],
            "Project Nimbus Cloud",
            "Cloud services for surveillance and AI workloads.",
            1.84,
            35_000_000_000.0,
        )
        .with_flags(&["Project Nimbus", "AI Infrastructure"])
        .with_sources(&["nimbus-contract", "nbim-holdings"])
    }

    #[test]
    fn test_company_construction() {
        let company = sample_company();

        assert_eq!(company.ticker, "GOOGL");
        assert_eq!(company.phases.len(), 2);
        assert_eq!(company.flags.len(), 2);
        assert_eq!(company.sources.len(), 2);
        assert_eq!(company.status, HoldingStatus::Active);
    }

    #[test]
    fn test_has_phase() {
        let company = sample_company();

        assert!(company.has_phase(PhaseKey::Find));
        assert!(company.has_phase(PhaseKey::Fix));
        assert!(!company.has_phase(PhaseKey::Engage));
    }

    #[test]
    fn test_status_flags() {
        let active = sample_company();
        assert!(active.status.is_active());

        let excluded = sample_company().with_status(HoldingStatus::Excluded);
        assert!(!excluded.status.is_active());
        assert_eq!(excluded.status.as_str(), "Excluded");
    }
}
