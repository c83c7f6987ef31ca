// Site Builder
// Writes the rendered pages to an output directory and produces the
// machine-readable exports (summary JSON, company CSV) alongside them.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::Dataset;
use crate::pages::{render_page, Page};
use crate::stats::{self, PhaseTotal, Stats};

// ============================================================================
// SITE BUILD
// ============================================================================

/// Render all pages into `out_dir`, creating it if needed.
/// Returns the written paths. Callers validate the dataset first.
pub fn build_site(dataset: &Dataset, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut written = Vec::new();

    for page in Page::all() {
        let path = out_dir.join(page.file_name());
        let html = render_page(dataset, page);
        fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}

// ============================================================================
// EXPORTS
// ============================================================================

#[derive(Serialize)]
struct SummaryExport<'a> {
    last_updated: String,
    source_note: &'a str,
    stats: Stats,
    phases: Vec<PhaseTotal>,
}

/// Summary statistics plus per-phase totals as pretty-printed JSON.
pub fn export_summary_json(dataset: &Dataset, path: &Path) -> Result<()> {
    let export = SummaryExport {
        last_updated: dataset.meta.last_updated.format("%Y-%m-%d").to_string(),
        source_note: &dataset.meta.source_note,
        stats: stats::summary(dataset),
        phases: stats::phase_breakdown(dataset),
    };

    let json = serde_json::to_string_pretty(&export)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;

    Ok(())
}

/// Flat company table as CSV, one row per holding, largest value first.
pub fn export_companies_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record([
        "name",
        "ticker",
        "phases",
        "stake_pct",
        "value_usd",
        "role",
        "status",
        "sources",
    ])?;

    let mut companies: Vec<_> = dataset.companies.iter().collect();
    companies.sort_by(|a, b| b.value_usd.total_cmp(&a.value_usd));

    for company in companies {
        let phases = company
            .phases
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("|");

        let stake = format!("{:.2}", company.stake_pct);
        let value = format!("{:.0}", company.value_usd);
        let sources = company.sources.join("|");

        writer.write_record([
            company.name.as_str(),
            company.ticker.as_str(),
            phases.as_str(),
            stake.as_str(),
            value.as_str(),
            company.role.as_str(),
            company.status.as_str(),
            sources.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
