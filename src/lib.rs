// NBIM Kill Chain - Core Library
// Exposes the dataset, aggregation, formatting and rendering layers for the
// generator binary and tests.

pub mod dataset;
pub mod entities;
pub mod format;
pub mod pages;
pub mod render;
pub mod site;
pub mod stats;

// Re-export commonly used types
pub use dataset::{Dataset, DatasetError, Meta};
pub use entities::{
    AiSystem, Company, ExcludedEntity, HoldingStatus, Phase, PhaseKey, SourceCategory, SourceRef,
};
pub use pages::{fill_slot, render_page, Page};
pub use site::{build_site, export_companies_csv, export_summary_json};
pub use stats::{companies_by_phase, phase_breakdown, phase_total, summary, top_holdings, Stats};

/// Library version, logged by the page bootstrap script
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
