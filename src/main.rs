// killchain-report - static site generator for the NBIM kill chain dataset
//
// Commands:
//   build [OUT_DIR]   validate, render all pages + exports (default: dist/)
//   stats             print the console summary
//   validate          run the dataset integrity checks and report

use anyhow::{bail, Result};
use std::env;
use std::path::Path;

use nbim_killchain::{
    format::{format_nok, format_pct, format_usd},
    stats, Dataset, PhaseKey,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("build");

    match command {
        "build" => {
            let out_dir = args.get(2).map(String::as_str).unwrap_or("dist");
            run_build(Path::new(out_dir))
        }
        "stats" => run_stats(),
        "validate" => run_validate(),
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!();
            eprintln!("Usage: killchain-report [build [OUT_DIR] | stats | validate]");
            bail!("unknown command '{}'", other);
        }
    }
}

fn load_validated() -> Result<Dataset> {
    let dataset = Dataset::builtin();
    dataset.validate()?;
    Ok(dataset)
}

fn run_build(out_dir: &Path) -> Result<()> {
    println!("🛠  NBIM Kill Chain - site build");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("\n🔍 Validating dataset...");
    let dataset = load_validated()?;
    println!(
        "✓ {} companies, {} phases, {} sources",
        dataset.companies.len(),
        dataset.phases.len(),
        dataset.sources.len()
    );

    println!("\n📄 Rendering pages...");
    let written = nbim_killchain::build_site(&dataset, out_dir)?;
    for path in &written {
        println!("✓ {}", path.display());
    }

    println!("\n💾 Writing exports...");
    let json_path = out_dir.join("summary_statistics.json");
    nbim_killchain::export_summary_json(&dataset, &json_path)?;
    println!("✓ {}", json_path.display());

    let csv_path = out_dir.join("companies.csv");
    nbim_killchain::export_companies_csv(&dataset, &csv_path)?;
    println!("✓ {}", csv_path.display());

    println!("\n✅ Build complete: {} files in {}", written.len() + 2, out_dir.display());
    Ok(())
}

fn run_stats() -> Result<()> {
    let dataset = load_validated()?;
    let s = stats::summary(&dataset);
    let rate = dataset.meta.usd_to_nok;

    println!("═══════════════════════════════════════════════");
    println!("NBIM KILL CHAIN - SUMMARY");
    println!("═══════════════════════════════════════════════");
    println!();
    println!("Total value:      {} ({})", format_usd(s.total_value_usd), format_nok(s.total_value_usd, rate));
    println!("Average stake:    {}", format_pct(s.average_stake_pct));
    println!("Companies:        {}", s.company_count);
    println!("Excluded:         {}", s.excluded_count);
    println!("Last updated:     {}", dataset.meta.last_updated.format("%Y-%m-%d"));

    println!("\nPER PHASE:");
    println!("-----------------------------------------------");
    for key in PhaseKey::all() {
        let Some(phase) = dataset.phase(key) else { continue };
        let subset = stats::companies_by_phase(&dataset, key);
        println!(
            "{} {:<8} {:>10}  ({} companies)",
            phase.id,
            phase.name,
            format_usd(stats::phase_total(&dataset, key)),
            subset.len()
        );
    }

    println!("\nTOP HOLDINGS:");
    println!("-----------------------------------------------");
    for (i, company) in stats::top_holdings(&dataset, 5).iter().enumerate() {
        println!(
            "{}. {} ({}) - {} at {}",
            i + 1,
            company.name,
            company.ticker,
            format_usd(company.value_usd),
            format_pct(company.stake_pct)
        );
    }

    println!("\nEXCLUSIONS:");
    println!("-----------------------------------------------");
    for excluded in &dataset.exclusions {
        println!(
            "- {} ({}) excluded {}: {}",
            excluded.name,
            excluded.ticker,
            excluded.excluded_on.format("%Y-%m-%d"),
            excluded.reason
        );
    }

    Ok(())
}

fn run_validate() -> Result<()> {
    println!("🔍 Validating builtin dataset...");
    let dataset = Dataset::builtin();

    match dataset.validate() {
        Ok(()) => {
            println!(
                "✅ Dataset valid: {} companies, {} sources, {} exclusions",
                dataset.companies.len(),
                dataset.sources.len(),
                dataset.exclusions.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Dataset invalid: {}", e);
            Err(e.into())
        }
    }
}
