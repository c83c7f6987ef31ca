// Central Data Repository
// Single source of truth for all pages: phase registry, companies, source
// registry, exclusions, and AI system records.
//
// The dataset is constructed explicitly and passed into the aggregation and
// rendering layers. Reference integrity is checked once at load time with
// `Dataset::validate`; invalid data never reaches a renderer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::entities::{
    AiSystem, Company, ExcludedEntity, Phase, PhaseKey, SourceCategory, SourceRef,
};

// ============================================================================
// DATASET ERROR
// ============================================================================

/// Reference-integrity and sanity failures detected at load time.
///
/// Each variant names the offending record so a broken dataset is fixable
/// from the error message alone.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("company '{company}' references unknown phase '{phase}'")]
    UnknownPhase { company: String, phase: String },

    #[error("company '{company}' references unknown source key '{key}'")]
    UnknownSource { company: String, key: String },

    #[error("company '{company}' has no phase tags")]
    MissingPhase { company: String },

    #[error("company '{company}' has invalid {field}: {value}")]
    InvalidNumber {
        company: String,
        field: &'static str,
        value: f64,
    },

    #[error("duplicate phase key '{0}' in phase registry")]
    DuplicatePhase(String),

    #[error("duplicate source key '{0}' in source registry")]
    DuplicateSource(String),

    #[error("exchange rate must be positive and finite, got {0}")]
    InvalidExchangeRate(f64),
}

// ============================================================================
// META
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub last_updated: NaiveDate,

    /// Documented operations backing the dataset
    pub total_operations: u32,

    /// Fixed USD -> NOK conversion rate used for secondary-currency display
    pub usd_to_nok: f64,

    /// Headline attribution line shown in page footers
    pub source_note: String,
}

// ============================================================================
// DATASET
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub meta: Meta,
    pub phases: Vec<Phase>,
    pub companies: Vec<Company>,
    pub sources: Vec<SourceRef>,
    pub exclusions: Vec<ExcludedEntity>,
    pub ai_systems: Vec<AiSystem>,
}

impl Dataset {
    /// Look up a phase registry entry by key.
    pub fn phase(&self, key: PhaseKey) -> Option<&Phase> {
        self.phases.iter().find(|p| p.key == key)
    }

    /// Look up a source registry entry by key.
    pub fn source(&self, key: &str) -> Option<&SourceRef> {
        self.sources.iter().find(|s| s.key == key)
    }

    /// Cross-check every reference in the dataset. Fails fast on the first
    /// violation so bad data is rejected before any page is rendered.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if !(self.meta.usd_to_nok.is_finite() && self.meta.usd_to_nok > 0.0) {
            return Err(DatasetError::InvalidExchangeRate(self.meta.usd_to_nok));
        }

        let mut phase_keys = HashSet::new();
        for phase in &self.phases {
            if !phase_keys.insert(phase.key) {
                return Err(DatasetError::DuplicatePhase(phase.key.to_string()));
            }
        }

        let mut source_keys = HashSet::new();
        for source in &self.sources {
            if !source_keys.insert(source.key.as_str()) {
                return Err(DatasetError::DuplicateSource(source.key.clone()));
            }
        }

        for company in &self.companies {
            if company.phases.is_empty() {
                return Err(DatasetError::MissingPhase {
                    company: company.name.clone(),
                });
            }

            for key in &company.phases {
                if !phase_keys.contains(key) {
                    return Err(DatasetError::UnknownPhase {
                        company: company.name.clone(),
                        phase: key.to_string(),
                    });
                }
            }

            for key in &company.sources {
                if !source_keys.contains(key.as_str()) {
                    return Err(DatasetError::UnknownSource {
                        company: company.name.clone(),
                        key: key.clone(),
                    });
                }
            }

            if !(company.stake_pct.is_finite() && company.stake_pct >= 0.0) {
                return Err(DatasetError::InvalidNumber {
                    company: company.name.clone(),
                    field: "stake_pct",
                    value: company.stake_pct,
                });
            }

            if !(company.value_usd.is_finite() && company.value_usd >= 0.0) {
                return Err(DatasetError::InvalidNumber {
                    company: company.name.clone(),
                    field: "value_usd",
                    value: company.value_usd,
                });
            }
        }

        Ok(())
    }

    /// The curated dataset compiled into the crate.
    pub fn builtin() -> Dataset {
        Dataset {
            meta: Meta {
                last_updated: date(2024, 12, 2),
                total_operations: 52,
                usd_to_nok: 11.0,
                source_note: "SEC Filings, Albanese Report, SIPRI, Leaked Contracts (Nimbus)"
                    .to_string(),
            },
            phases: builtin_phases(),
            companies: builtin_companies(),
            sources: builtin_sources(),
            exclusions: builtin_exclusions(),
            ai_systems: builtin_ai_systems(),
        }
    }
}

// Dates in the curated content are hand-checked literals.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Curated values are recorded in millions of USD; records store raw units.
fn usd_millions(m: f64) -> f64 {
    m * 1_000_000.0
}

// ============================================================================
// BUILTIN CONTENT - PHASES
// ============================================================================

fn builtin_phases() -> Vec<Phase> {
    vec![
        Phase::new(
            PhaseKey::Find,
            "01",
            "FIND",
            "SURVEILLANCE & CLOUD",
            "Digital surveillance, mass data collection and the cloud \
             infrastructure enabling real-time intelligence.",
            "1.1% - 2.0%",
            "#38bdf8",
            "eye",
        ),
        Phase::new(
            PhaseKey::Fix,
            "02",
            "FIX",
            "AI TARGETING",
            "AI processing (Lavender/Gospel) identifying and generating \
             targets from raw collection data.",
            "1.0% - 1.9%",
            "#a78bfa",
            "cpu",
        ),
        Phase::new(
            PhaseKey::Track,
            "03",
            "TRACK",
            "LOGISTICS & FUEL",
            "Physical movement, jet fuel supply and sensor lock on targets.",
            "1.2% - 2.1%",
            "#fbbf24",
            "fuel",
        ),
        Phase::new(
            PhaseKey::Target,
            "04",
            "TARGET",
            "C4ISR & LOCK-ON",
            "Command, control and precision guidance before the strike.",
            "1.0% - 1.4%",
            "#fb923c",
            "crosshair",
        ),
        Phase::new(
            PhaseKey::Engage,
            "05",
            "ENGAGE",
            "KINETIC STRIKE",
            "The physical destruction: bombs, airframes, artillery and tanks.",
            "1.1% - 2.0%",
            "#f87171",
            "flame",
        ),
        Phase::new(
            PhaseKey::Assess,
            "06",
            "ASSESS",
            "BDA & ANALYTICS",
            "Battle damage assessment and post-strike analytics feeding the \
             next targeting cycle.",
            "-",
            "#34d399",
            "bar-chart-3",
        ),
    ]
}

// ============================================================================
// BUILTIN CONTENT - COMPANIES
// ============================================================================

fn builtin_companies() -> Vec<Company> {
    vec![
        // --- DIGITAL / CLOUD ---
        Company::new(
            "Alphabet Inc. (Google)",
            "GOOGL",
            vec![PhaseKey::Find, PhaseKey::Fix],
            "Project Nimbus Cloud",
            "Delivers Project Nimbus ($1.2B) cloud services to the IDF, \
             providing infrastructure for AI surveillance and data storage. \
             The contract forbids refusal of service.",
            1.84,
            usd_millions(35_000.0),
        )
        .with_flags(&["Project Nimbus", "AI Infrastructure"])
        .with_sources(&["nimbus-contract", "nbim-holdings"]),
        Company::new(
            "Microsoft",
            "MSFT",
            vec![PhaseKey::Find],
            "Azure Cloud / AI",
            "Integrated in the IDF's digital infrastructure; supplies the OS \
             and cloud services supporting military operations.",
            1.35,
            usd_millions(45_000.0),
        )
        .with_flags(&["Cloud Infrastructure"])
        .with_sources(&["nbim-holdings", "whoprofits-db"]),
        Company::new(
            "Amazon",
            "AMZN",
            vec![PhaseKey::Find, PhaseKey::Fix],
            "AWS Cloud (Nimbus)",
            "Partner in Project Nimbus; provides AWS servers storing mass \
             surveillance data.",
            1.13,
            usd_millions(22_000.0),
        )
        .with_flags(&["Project Nimbus"])
        .with_sources(&["nimbus-contract", "nbim-holdings"]),
        Company::new(
            "Palantir Technologies",
            "PLTR",
            vec![PhaseKey::Fix, PhaseKey::Target],
            "AI Targeting Systems",
            "Entered a strategic partnership with the IDF in January 2024 \
             for war-related missions; supplies target-selection analytics.",
            1.03,
            usd_millions(3_307.0),
        )
        .with_flags(&["Strategic Partnership 2024", "AI Targeting"])
        .with_sources(&["palantir-pr", "lavender-972"]),
        Company::new(
            "NVIDIA",
            "NVDA",
            vec![PhaseKey::Fix],
            "AI Hardware",
            "Supplies the GPUs that train and run the IDF's AI models \
             (Lavender/Gospel).",
            1.10,
            usd_millions(28_000.0),
        )
        .with_flags(&["AI Hardware"])
        .with_sources(&["lavender-972", "sec-13f"]),
        // --- NETWORK & SURVEILLANCE ---
        Company::new(
            "Cisco Systems",
            "CSCO",
            vec![PhaseKey::Find, PhaseKey::Target],
            "C4I Network Backbone",
            "Network infrastructure for IDF command platforms, including the \
             David's Citadel data center.",
            1.21,
            usd_millions(1_450.0),
        )
        .with_flags(&["C4I Backbone"])
        .with_sources(&["whoprofits-db"]),
        Company::new(
            "Motorola Solutions",
            "MSI",
            vec![PhaseKey::Find],
            "Mountain Rose Encrypted Comms",
            "Supplies the Mountain Rose encrypted cellular network and \
             surveillance systems around settlements.",
            1.42,
            usd_millions(690.0),
        )
        .with_flags(&["Surveillance"])
        .with_sources(&["whoprofits-db", "amnesty-wolfpack"]),
        // --- LOGISTICS / TRACK ---
        Company::new(
            "Valero Energy",
            "VLO",
            vec![PhaseKey::Track],
            "Military Jet Fuel (JP-8)",
            "Main supplier of JP-8 jet fuel shipped from Texas to Israel, \
             fueling F-35s and Apache helicopters. Stake increased in 2025.",
            1.98,
            usd_millions(827.0),
        )
        .with_flags(&["Jet Fuel Supplier", "Increased Stake"])
        .with_sources(&["valero-fuel", "nbim-holdings"]),
        Company::new(
            "Volvo Group",
            "VOLV-B",
            vec![PhaseKey::Track],
            "Heavy Transport",
            "Supplies heavy transport and trucks used for logistics and \
             troop movement.",
            2.02,
            usd_millions(1_000.0),
        )
        .with_flags(&["Logistics"])
        .with_sources(&["whoprofits-db"]),
        Company::new(
            "Caterpillar",
            "CAT",
            vec![PhaseKey::Track],
            "D9 Bulldozers",
            "Manufactures the D9 bulldozers used for demolishing civilian \
             infrastructure and clearing paths for ground forces.",
            1.29,
            usd_millions(2_372.0),
        )
        .with_flags(&["Demolition", "Ground Invasion"])
        .with_sources(&["albanese-report", "whoprofits-db"]),
        Company::new(
            "HD Hyundai",
            "267250",
            vec![PhaseKey::Track],
            "Excavators",
            "Supplies excavators used in military engineering operations.",
            1.54,
            usd_millions(500.0),
        )
        .with_flags(&["Engineering"])
        .with_sources(&["whoprofits-db"]),
        // --- KINETIC / TARGET & ENGAGE ---
        Company::new(
            "Lockheed Martin",
            "LMT",
            vec![PhaseKey::Engage],
            "F-35I / F-16I Platform",
            "Manufactures the main air strike platforms (F-35, F-16) and \
             Hellfire missiles.",
            1.14,
            usd_millions(4_210.0),
        )
        .with_flags(&["Primary Platform"])
        .with_sources(&["sipri-arms", "nbim-holdings"]),
        Company::new(
            "Boeing",
            "BA",
            vec![PhaseKey::Engage],
            "F-15I / JDAM Munitions",
            "Supplies F-15 fighters, Apache helicopters and the JDAM tail \
             kits that turn unguided bombs into guided ones.",
            1.60,
            usd_millions(1_733.0),
        )
        .with_flags(&["Munitions", "Aircraft"])
        .with_sources(&["sipri-arms"]),
        Company::new(
            "General Dynamics",
            "GD",
            vec![PhaseKey::Engage],
            "MK84 Bomb Bodies",
            "Produces the MK80-series bomb bodies filled with explosives. \
             Deliveries approved 2024/25.",
            1.15,
            usd_millions(928.0),
        )
        .with_flags(&["Bomb Bodies", "Artillery"])
        .with_sources(&["sipri-arms", "albanese-report"]),
        Company::new(
            "Rheinmetall",
            "RHM",
            vec![PhaseKey::Engage],
            "155mm Artillery",
            "Supplies 120mm tank ammunition and 155mm artillery shells.",
            1.88,
            usd_millions(420.0),
        )
        .with_flags(&["Artillery", "Tank Ammo"])
        .with_sources(&["sipri-arms"]),
        Company::new(
            "Northrop Grumman",
            "NOC",
            vec![PhaseKey::Target],
            "F-35 Radar / Sensors",
            "Supplies the AN/APG-81 radar for the F-35 and sensor systems \
             for target lock.",
            1.38,
            usd_millions(1_003.0),
        )
        .with_flags(&["Sensors"])
        .with_sources(&["sipri-arms"]),
        Company::new(
            "Raytheon (RTX)",
            "RTX",
            vec![PhaseKey::Engage, PhaseKey::Target],
            "Paveway / Iron Dome",
            "Produces laser-guided Paveway bombs and Iron Dome interceptors.",
            1.26,
            usd_millions(2_120.0),
        )
        .with_flags(&["Guided Munitions"])
        .with_sources(&["sipri-arms", "nbim-holdings"]),
        Company::new(
            "Leonardo",
            "LDO",
            vec![PhaseKey::Target],
            "Naval Guns / Electronics",
            "Supplies 76mm guns for Israeli corvettes shelling the Gaza \
             coastline.",
            1.10,
            usd_millions(180.0),
        )
        .with_flags(&["Naval"])
        .with_sources(&["whoprofits-db"]),
        Company::new(
            "BAE Systems",
            "BA.",
            vec![PhaseKey::Engage],
            "M109 Artillery Components",
            "Supplies components for howitzers and naval guns.",
            1.97,
            usd_millions(2_005.0),
        )
        .with_flags(&["Components"])
        .with_sources(&["sipri-arms"]),
        Company::new(
            "L3Harris",
            "LHX",
            vec![PhaseKey::Target],
            "Comms & Bomb Racks",
            "Supplies bomb release mechanisms for the F-35.",
            1.35,
            usd_millions(616.0),
        )
        .with_flags(&["Components"])
        .with_sources(&["sipri-arms"]),
    ]
}

// ============================================================================
// BUILTIN CONTENT - SOURCES
// ============================================================================

fn builtin_sources() -> Vec<SourceRef> {
    vec![
        SourceRef::new(
            "nbim-holdings",
            "NBIM equity holdings register",
            "https://www.nbim.no/en/responsible-investment/holdings/",
            SourceCategory::Official,
        ),
        SourceRef::new(
            "sec-13f",
            "SEC 13F filings, Norges Bank",
            "https://www.sec.gov/cgi-bin/browse-edgar?action=getcompany&company=norges+bank&type=13F",
            SourceCategory::Official,
        ),
        SourceRef::new(
            "ethics-council",
            "Council on Ethics recommendations",
            "https://etikkradet.no/en/recommendations/",
            SourceCategory::Official,
        ),
        SourceRef::new(
            "albanese-report",
            "UN Special Rapporteur report A/HRC/59/23",
            "https://www.ohchr.org/en/documents/country-reports/ahrc5923",
            SourceCategory::UnReport,
        ),
        SourceRef::new(
            "nimbus-contract",
            "The Intercept: Project Nimbus contract documents",
            "https://theintercept.com/2022/07/24/google-israel-artificial-intelligence-project-nimbus/",
            SourceCategory::Journalism,
        ),
        SourceRef::new(
            "lavender-972",
            "+972 Magazine: 'Lavender', the AI machine directing the bombing",
            "https://www.972mag.com/lavender-ai-israeli-army-gaza/",
            SourceCategory::Journalism,
        ),
        SourceRef::new(
            "gospel-972",
            "+972 Magazine: 'A mass assassination factory'",
            "https://www.972mag.com/mass-assassination-factory-israel-calculated-bombing-gaza/",
            SourceCategory::Journalism,
        ),
        SourceRef::new(
            "valero-fuel",
            "Jet fuel shipment tracking, Texas to Israel",
            "https://www.oilchange.org/jet-fuel-tracker/",
            SourceCategory::Journalism,
        ),
        SourceRef::new(
            "whoprofits-db",
            "Who Profits corporate database",
            "https://www.whoprofits.org/companies/",
            SourceCategory::NgoReport,
        ),
        SourceRef::new(
            "amnesty-wolfpack",
            "Amnesty International: Automated Apartheid",
            "https://www.amnesty.org/en/documents/mde15/6701/2023/en/",
            SourceCategory::NgoReport,
        ),
        SourceRef::new(
            "palantir-pr",
            "Palantir strategic partnership announcement",
            "https://investors.palantir.com/news-details/2024/",
            SourceCategory::Corporate,
        ),
        SourceRef::new(
            "sipri-arms",
            "SIPRI Arms Transfers Database",
            "https://www.sipri.org/databases/armstransfers",
            SourceCategory::Academic,
        ),
    ]
}

// ============================================================================
// BUILTIN CONTENT - EXCLUSIONS
// ============================================================================

fn builtin_exclusions() -> Vec<ExcludedEntity> {
    vec![
        ExcludedEntity::new(
            "Elbit Systems",
            "ESLT",
            date(2009, 9, 1),
            "Supply of surveillance systems for the separation barrier",
        ),
        ExcludedEntity::new(
            "Shapir Engineering and Industry",
            "SPEN",
            date(2021, 12, 22),
            "Construction activity linked to settlements in the West Bank",
        ),
        ExcludedEntity::new(
            "Mivne Real Estate",
            "MVNE",
            date(2021, 12, 22),
            "Leasing of industrial parks connected to settlements",
        ),
    ]
}

// ============================================================================
// BUILTIN CONTENT - AI SYSTEMS
// ============================================================================

fn builtin_ai_systems() -> Vec<AiSystem> {
    vec![
        AiSystem::new(
            "Lavender",
            "AI target generation",
            "Machine learning system assigning target scores to individuals \
             from mass surveillance data.",
            &["37,000 flagged individuals", "~20 seconds per human review"],
        ),
        AiSystem::new(
            "The Gospel (Habsora)",
            "Structural target generation",
            "AI system generating building and infrastructure targets from \
             collection data.",
            &["Up to 100 targets generated per day"],
        ),
        AiSystem::new(
            "Wolf Pack",
            "Biometric database",
            "Facial-recognition database fed by the Blue Wolf and Red Wolf \
             checkpoint apps.",
            &["Blue Wolf / Red Wolf apps", "Checkpoint facial recognition"],
        ),
    ]
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Small synthetic dataset for isolated unit tests.
    pub fn dataset() -> Dataset {
        Dataset {
            meta: Meta {
                last_updated: date(2024, 12, 2),
                total_operations: 3,
                usd_to_nok: 10.0,
                source_note: "Test sources".to_string(),
            },
            phases: builtin_phases(),
            companies: vec![
                Company::new(
                    "Alpha Corp",
                    "ALPH",
                    vec![PhaseKey::Find],
                    "Cloud",
                    "Cloud provider.",
                    2.0,
                    usd_millions(1_000.0),
                )
                .with_sources(&["src-a"]),
                Company::new(
                    "Beta Industries",
                    "BETA",
                    vec![PhaseKey::Find, PhaseKey::Engage],
                    "Munitions",
                    "Munitions manufacturer.",
                    1.0,
                    usd_millions(3_000.0),
                )
                .with_sources(&["src-a", "src-b"]),
                Company::new(
                    "Gamma Ltd",
                    "GAMM",
                    vec![PhaseKey::Engage],
                    "Artillery",
                    "Artillery components.",
                    3.0,
                    usd_millions(2_000.0),
                ),
            ],
            sources: vec![
                SourceRef::new(
                    "src-a",
                    "Source A",
                    "https://example.com/a",
                    SourceCategory::Official,
                ),
                SourceRef::new(
                    "src-b",
                    "Source B",
                    "https://example.com/b",
                    SourceCategory::Journalism,
                ),
            ],
            exclusions: vec![ExcludedEntity::new(
                "Delta Excluded",
                "DELT",
                date(2020, 1, 15),
                "Test exclusion",
            )],
            ai_systems: vec![AiSystem::new(
                "TestNet",
                "Test system",
                "Synthetic AI system record.",
                &["1 figure"],
            )],
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_validates() {
        let dataset = Dataset::builtin();
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn test_builtin_dataset_content() {
        let dataset = Dataset::builtin();

        assert_eq!(dataset.phases.len(), 6);
        assert_eq!(dataset.companies.len(), 20);
        assert_eq!(dataset.exclusions.len(), 3);
        assert_eq!(dataset.ai_systems.len(), 3);
        assert!(dataset.sources.len() >= 10);
        assert_eq!(dataset.meta.usd_to_nok, 11.0);
    }

    #[test]
    fn test_phase_lookup() {
        let dataset = fixtures::dataset();

        let find = dataset.phase(PhaseKey::Find);
        assert!(find.is_some());
        assert_eq!(find.unwrap().name, "FIND");
    }

    #[test]
    fn test_source_lookup() {
        let dataset = fixtures::dataset();

        assert!(dataset.source("src-a").is_some());
        assert!(dataset.source("missing-key").is_none());
    }

    #[test]
    fn test_validate_rejects_unknown_source() {
        let mut dataset = fixtures::dataset();
        dataset.companies[0].sources.push("ghost-key".to_string());

        let err = dataset.validate().unwrap_err();
        assert_eq!(
            err,
            DatasetError::UnknownSource {
                company: "Alpha Corp".to_string(),
                key: "ghost-key".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_rejects_unknown_phase() {
        let mut dataset = fixtures::dataset();
        // Drop the Engage registry entry while companies still reference it
        dataset.phases.retain(|p| p.key != PhaseKey::Engage);

        let err = dataset.validate().unwrap_err();
        assert_eq!(
            err,
            DatasetError::UnknownPhase {
                company: "Beta Industries".to_string(),
                phase: "engage".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_rejects_missing_phase_tags() {
        let mut dataset = fixtures::dataset();
        dataset.companies[2].phases.clear();

        let err = dataset.validate().unwrap_err();
        assert_eq!(
            err,
            DatasetError::MissingPhase {
                company: "Gamma Ltd".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_rejects_negative_value() {
        let mut dataset = fixtures::dataset();
        dataset.companies[0].value_usd = -5.0;

        let err = dataset.validate().unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidNumber {
                field: "value_usd",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_nan_stake() {
        let mut dataset = fixtures::dataset();
        dataset.companies[1].stake_pct = f64::NAN;

        let err = dataset.validate().unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidNumber {
                field: "stake_pct",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_source_key() {
        let mut dataset = fixtures::dataset();
        dataset.sources.push(SourceRef::new(
            "src-a",
            "Duplicate",
            "https://example.com/dup",
            SourceCategory::Corporate,
        ));

        let err = dataset.validate().unwrap_err();
        assert_eq!(err, DatasetError::DuplicateSource("src-a".to_string()));
    }

    #[test]
    fn test_validate_rejects_duplicate_phase() {
        let mut dataset = fixtures::dataset();
        let dup = dataset.phases[0].clone();
        dataset.phases.push(dup);

        let err = dataset.validate().unwrap_err();
        assert_eq!(err, DatasetError::DuplicatePhase("find".to_string()));
    }

    #[test]
    fn test_validate_rejects_bad_exchange_rate() {
        let mut dataset = fixtures::dataset();
        dataset.meta.usd_to_nok = 0.0;

        let err = dataset.validate().unwrap_err();
        assert_eq!(err, DatasetError::InvalidExchangeRate(0.0));
    }

    #[test]
    fn test_every_builtin_company_has_resolvable_sources() {
        let dataset = Dataset::builtin();

        for company in &dataset.companies {
            for key in &company.sources {
                assert!(
                    dataset.source(key).is_some(),
                    "company '{}' has dangling source '{}'",
                    company.name,
                    key
                );
            }
        }
    }
}
