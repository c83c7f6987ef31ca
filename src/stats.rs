// Aggregation Layer
// Pure functions computing derived views over the dataset: summary totals,
// per-phase subsets and totals, top holdings.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::entities::{Company, PhaseKey};

// ============================================================================
// SUMMARY STATISTICS
// ============================================================================

/// Headline numbers for the dashboard and the JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    /// Sum of active holdings, raw USD
    pub total_value_usd: f64,

    /// Same total converted at the configured fixed rate
    pub total_value_nok: f64,

    /// Mean ownership stake over active holdings, percent.
    /// Defined as 0.0 for an empty active set, never NaN.
    pub average_stake_pct: f64,

    pub company_count: usize,

    pub excluded_count: usize,
}

/// Per-phase rollup for the JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseTotal {
    pub phase: PhaseKey,
    pub name: String,
    pub total_value_usd: f64,
    pub company_count: usize,
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// Compute summary statistics over the active holdings.
pub fn summary(dataset: &Dataset) -> Stats {
    let active: Vec<&Company> = dataset
        .companies
        .iter()
        .filter(|c| c.status.is_active())
        .collect();

    let total_value_usd: f64 = active.iter().map(|c| c.value_usd).sum();

    // Guard the one real edge case: an empty active set must not divide by
    // zero and leak NaN into the rendered pages.
    let average_stake_pct = if active.is_empty() {
        0.0
    } else {
        active.iter().map(|c| c.stake_pct).sum::<f64>() / active.len() as f64
    };

    Stats {
        total_value_usd,
        total_value_nok: total_value_usd * dataset.meta.usd_to_nok,
        average_stake_pct,
        company_count: active.len(),
        excluded_count: dataset.exclusions.len(),
    }
}

/// Companies tagged with the given phase, largest stake value first.
/// The sort is stable, so ties keep their dataset order.
pub fn companies_by_phase(dataset: &Dataset, key: PhaseKey) -> Vec<&Company> {
    let mut matches: Vec<&Company> = dataset
        .companies
        .iter()
        .filter(|c| c.has_phase(key))
        .collect();

    matches.sort_by(|a, b| b.value_usd.total_cmp(&a.value_usd));
    matches
}

/// Total stake value across companies tagged with the given phase.
pub fn phase_total(dataset: &Dataset, key: PhaseKey) -> f64 {
    dataset
        .companies
        .iter()
        .filter(|c| c.has_phase(key))
        .map(|c| c.value_usd)
        .sum()
}

/// Per-phase rollup over the whole registry, in kill chain order.
pub fn phase_breakdown(dataset: &Dataset) -> Vec<PhaseTotal> {
    dataset
        .phases
        .iter()
        .map(|phase| PhaseTotal {
            phase: phase.key,
            name: phase.name.clone(),
            total_value_usd: phase_total(dataset, phase.key),
            company_count: companies_by_phase(dataset, phase.key).len(),
        })
        .collect()
}

/// The n largest active holdings by stake value.
pub fn top_holdings(dataset: &Dataset, n: usize) -> Vec<&Company> {
    let mut active: Vec<&Company> = dataset
        .companies
        .iter()
        .filter(|c| c.status.is_active())
        .collect();

    active.sort_by(|a, b| b.value_usd.total_cmp(&a.value_usd));
    active.truncate(n);
    active
}

// ============================================================================
// TESTS
// ============================================================================
