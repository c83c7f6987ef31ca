// Page Assembly
// Page shells for the three delivered pages, plus the slot-filling mechanism
// fragments are injected through. Filling a slot whose marker is absent is a
// silent no-op; the shell comes back unchanged.

use crate::dataset::Dataset;
use crate::format::{format_nok, format_pct, format_usd, group_thousands};
use crate::render::{
    escape_html, render_company_table, render_navigation, render_phase_cards,
};
use crate::stats;

// ============================================================================
// PAGE IDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    KillChain,
    Companies,
}

impl Page {
    pub fn all() -> [Page; 3] {
        [Page::Dashboard, Page::KillChain, Page::Companies]
    }

    /// Nav id, matching the entries in `render::NAV_PAGES`.
    pub fn id(&self) -> &'static str {
        match self {
            Page::Dashboard => "index",
            Page::KillChain => "killchain",
            Page::Companies => "companies",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "index.html",
            Page::KillChain => "killchain.html",
            Page::Companies => "companies.html",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "NBIM Kill Chain - Dashboard",
            Page::KillChain => "NBIM Kill Chain - Phases",
            Page::Companies => "NBIM Kill Chain - Company List",
        }
    }
}

// ============================================================================
// SLOT FILLING
// ============================================================================

/// Replace the `<!-- slot:NAME -->` marker with a fragment.
///
/// A shell without the marker is returned unchanged and no error is raised;
/// a missing target is a no-op by policy, not a failure.
pub fn fill_slot(html: &str, name: &str, fragment: &str) -> String {
    let marker = format!("<!-- slot:{name} -->", name = name);
    if html.contains(&marker) {
        html.replacen(&marker, fragment, 1)
    } else {
        html.to_string()
    }
}

/// The shared shell every page is assembled from.
pub fn page_shell(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="https://unpkg.com/lucide@latest"></script>
    <style>{css}</style>
</head>
<body>
    <nav id="nav-container"><!-- slot:nav --></nav>
    <main class="container"><!-- slot:content --></main>
    <footer><!-- slot:footer --></footer>
    <script>{js}</script>
</body>
</html>"#,
        title = escape_html(title),
        css = inline_css(),
        js = bootstrap_script(),
    )
}

// ============================================================================
// PAGE RENDERING
// ============================================================================

/// Assemble one complete page: shell + nav + content + footer.
pub fn render_page(dataset: &Dataset, page: Page) -> String {
    let content = match page {
        Page::Dashboard => dashboard_content(dataset),
        Page::KillChain => killchain_content(dataset),
        Page::Companies => companies_content(dataset),
    };

    let shell = page_shell(page.title());
    let shell = fill_slot(&shell, "nav", &render_navigation(page.id()));
    let shell = fill_slot(&shell, "content", &content);
    fill_slot(&shell, "footer", &footer_content(dataset))
}

fn dashboard_content(dataset: &Dataset) -> String {
    let s = stats::summary(dataset);
    let rate = dataset.meta.usd_to_nok;

    let stat_cards = format!(
        r#"<div class="stat-grid">
    <div class="stat-card"><h3>Total Value</h3><div class="value">{total_usd}</div><div class="sub">{total_nok}</div></div>
    <div class="stat-card"><h3>Average Stake</h3><div class="value">{avg}</div></div>
    <div class="stat-card"><h3>Companies Tracked</h3><div class="value">{count}</div></div>
    <div class="stat-card"><h3>Excluded Entities</h3><div class="value">{excluded}</div></div>
    <div class="stat-card"><h3>Documented Operations</h3><div class="value">{ops}</div></div>
</div>"#,
        total_usd = format_usd(s.total_value_usd),
        total_nok = format_nok(s.total_value_usd, rate),
        avg = format_pct(s.average_stake_pct),
        count = s.company_count,
        excluded = s.excluded_count,
        ops = group_thousands(dataset.meta.total_operations as u64),
    );

    let top = stats::top_holdings(dataset, 5);
    let top_table = render_company_table(dataset, &top);

    let ai_cards: String = dataset
        .ai_systems
        .iter()
        .map(|system| {
            let figures: String = system
                .figures
                .iter()
                .map(|f| format!("<li>{}</li>", escape_html(f)))
                .collect();
            format!(
                r#"    <div class="ai-card">
        <h3>{name}</h3>
        <div class="ai-type">{system_type}</div>
        <p>{description}</p>
        <ul>{figures}</ul>
    </div>
"#,
                name = escape_html(&system.name),
                system_type = escape_html(&system.system_type),
                description = escape_html(&system.description),
                figures = figures,
            )
        })
        .collect();

    let exclusion_rows: String = dataset
        .exclusions
        .iter()
        .map(|e| {
            format!(
                r#"        <tr><td>{name}</td><td class="ticker">{ticker}</td><td>{date}</td><td>{reason}</td></tr>
"#,
                name = escape_html(&e.name),
                ticker = escape_html(&e.ticker),
                date = e.excluded_on.format("%Y-%m-%d"),
                reason = escape_html(&e.reason),
            )
        })
        .collect();

    format!(
        r#"<h1>NBIM Kill Chain Dashboard</h1>
{stat_cards}
<section class="section">
    <h2>Top Holdings</h2>
    {top_table}
</section>
<section class="section">
    <h2>Documented AI Systems</h2>
    <div class="ai-grid">
{ai_cards}    </div>
</section>
<section class="section">
    <h2>Excluded Entities</h2>
    <table class="company-table">
        <thead><tr><th>Name</th><th>Ticker</th><th>Excluded</th><th>Reason</th></tr></thead>
        <tbody>
{exclusion_rows}        </tbody>
    </table>
</section>"#
    )
}

fn killchain_content(dataset: &Dataset) -> String {
    format!(
        r#"<h1>The Kill Chain</h1>
<p class="intro">Each phase below maps tracked holdings to their documented
role in the find / fix / track / target / engage / assess sequence.</p>
{cards}"#,
        cards = render_phase_cards(dataset),
    )
}

fn companies_content(dataset: &Dataset) -> String {
    let mut companies: Vec<_> = dataset.companies.iter().collect();
    companies.sort_by(|a, b| b.value_usd.total_cmp(&a.value_usd));

    format!(
        r#"<h1>Company List</h1>
<p class="intro">{count} tracked holdings, largest stake value first.</p>
{table}"#,
        count = companies.len(),
        table = render_company_table(dataset, &companies),
    )
}

fn footer_content(dataset: &Dataset) -> String {
    format!(
        r#"<div class="meta">Last updated {date} &middot; Sources: {note}</div>"#,
        date = dataset.meta.last_updated.format("%Y-%m-%d"),
        note = escape_html(&dataset.meta.source_note),
    )
}

// ============================================================================
// STATIC ASSETS
// ============================================================================

/// One-shot page bootstrap: icon initialization plus a version line in the
/// console, mirroring what the shell expects.
fn bootstrap_script() -> String {
    format!(
        r#"
document.addEventListener('DOMContentLoaded', function () {{
    if (typeof lucide !== 'undefined') {{
        lucide.createIcons();
    }}
    console.log('nbim-killchain v{version}');
}});
"#,
        version = crate::VERSION,
    )
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #e5e7eb;
    background: #0f172a;
}

.container { max-width: 1200px; margin: 0 auto; padding: 2rem; }

h1 { font-size: 2rem; margin-bottom: 1.5rem; letter-spacing: 0.05em; }
h2 { font-size: 1.4rem; margin-bottom: 1rem; }

.intro { color: #94a3b8; margin-bottom: 1.5rem; }

.section { margin-bottom: 2.5rem; }

/* Navigation */
#nav-container { padding: 1rem 2rem; border-bottom: 1px solid #1e293b; }
.tab-group { display: flex; gap: 0.5rem; }
.tab-btn {
    padding: 0.5rem 1rem;
    color: #94a3b8;
    text-decoration: none;
    border-radius: 0.375rem;
    font-size: 0.875rem;
    letter-spacing: 0.1em;
}
.tab-btn.active { background: #1e293b; color: #f8fafc; }

/* Stat cards */
.stat-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
    gap: 1rem;
    margin-bottom: 2rem;
}
.stat-card {
    background: #1e293b;
    padding: 1rem;
    border-radius: 0.5rem;
    border-left: 4px solid #38bdf8;
}
.stat-card h3 { font-size: 0.75rem; color: #94a3b8; text-transform: uppercase; }
.stat-card .value { font-size: 1.5rem; font-weight: 700; }
.stat-card .sub { font-size: 0.8rem; color: #94a3b8; }

/* Phase cards */
.phase-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 1rem;
}
.phase-card {
    background: #1e293b;
    border-top: 4px solid #38bdf8;
    border-radius: 0.5rem;
    padding: 1.25rem;
}
.phase-id { font-size: 0.75rem; color: #64748b; }
.phase-alias { font-size: 0.8rem; color: #94a3b8; letter-spacing: 0.1em; margin-bottom: 0.5rem; }
.phase-range { font-size: 0.8rem; color: #94a3b8; margin-top: 0.5rem; }
.phase-total { font-size: 1.25rem; font-weight: 700; margin: 0.5rem 0; }
.phase-examples { list-style: none; font-size: 0.85rem; color: #cbd5e1; }

/* AI system cards */
.ai-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 1rem;
}
.ai-card { background: #1e293b; border-radius: 0.5rem; padding: 1.25rem; }
.ai-type { font-size: 0.8rem; color: #94a3b8; margin-bottom: 0.5rem; }
.ai-card ul { list-style: none; font-size: 0.85rem; color: #cbd5e1; margin-top: 0.5rem; }

/* Tables */
.company-table { width: 100%; border-collapse: collapse; }
.company-table th {
    text-align: left;
    font-size: 0.75rem;
    text-transform: uppercase;
    color: #94a3b8;
    padding: 0.6rem;
    border-bottom: 2px solid #334155;
}
.company-table td { padding: 0.6rem; border-bottom: 1px solid #1e293b; font-size: 0.875rem; }
.company-table .num { text-align: right; font-variant-numeric: tabular-nums; }
.company-name { font-weight: 600; }
.ticker { color: #94a3b8; font-family: ui-monospace, monospace; }

.phase-badge {
    display: inline-block;
    border: 1px solid;
    border-radius: 0.25rem;
    padding: 0 0.375rem;
    font-size: 0.7rem;
    margin-right: 0.25rem;
}

.source-link { color: #38bdf8; text-decoration: none; font-size: 0.8rem; }

footer { padding: 1.5rem 2rem; border-top: 1px solid #1e293b; }
footer .meta { font-size: 0.8rem; color: #64748b; }
"#
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures;

    #[test]
    fn test_fill_slot_replaces_marker() {
        let html = "<div><!-- slot:nav --></div>";
        let out = fill_slot(html, "nav", "<span>NAV</span>");
        assert_eq!(out, "<div><span>NAV</span></div>");
    }

    #[test]
    fn test_fill_slot_missing_marker_is_noop() {
        let html = "<div>no slots here</div>";
        let out = fill_slot(html, "nav", "<span>NAV</span>");
        assert_eq!(out, html);
    }

    #[test]
    fn test_fill_slot_only_fills_named_slot() {
        let html = "<!-- slot:nav --><!-- slot:content -->";
        let out = fill_slot(html, "content", "BODY");
        assert_eq!(out, "<!-- slot:nav -->BODY");
    }

    #[test]
    fn test_page_shell_has_all_slots() {
        let shell = page_shell("Test");
        assert!(shell.contains("<!-- slot:nav -->"));
        assert!(shell.contains("<!-- slot:content -->"));
        assert!(shell.contains("<!-- slot:footer -->"));
        assert!(shell.contains("<title>Test</title>"));
    }

    #[test]
    fn test_render_dashboard_page() {
        let dataset = fixtures::dataset();
        let html = render_page(&dataset, Page::Dashboard);

        assert!(html.contains("NBIM Kill Chain Dashboard"));
        assert!(html.contains("$6.0B"));
        assert!(html.contains("60.0 mrd. NOK"));
        assert!(html.contains("TestNet"));
        assert!(html.contains("Delta Excluded"));
        // All slots consumed
        assert!(!html.contains("<!-- slot:"));
    }

    #[test]
    fn test_render_killchain_page() {
        let dataset = fixtures::dataset();
        let html = render_page(&dataset, Page::KillChain);

        assert!(html.contains("The Kill Chain"));
        assert!(html.contains("ENGAGE"));
        assert!(html.contains(r#"class="tab-btn active">KILL CHAIN"#));
    }

    #[test]
    fn test_render_companies_page_sorted() {
        let dataset = fixtures::dataset();
        let html = render_page(&dataset, Page::Companies);

        let beta = html.find("Beta Industries").unwrap();
        let gamma = html.find("Gamma Ltd").unwrap();
        let alpha = html.find("Alpha Corp").unwrap();
        assert!(beta < gamma && gamma < alpha);
    }

    #[test]
    fn test_footer_has_meta() {
        let dataset = fixtures::dataset();
        let html = render_page(&dataset, Page::Dashboard);

        assert!(html.contains("Last updated 2024-12-02"));
        assert!(html.contains("Test sources"));
    }

    #[test]
    fn test_bootstrap_logs_version() {
        let shell = page_shell("Test");
        assert!(shell.contains(crate::VERSION));
        assert!(shell.contains("lucide.createIcons"));
    }

    #[test]
    fn test_page_metadata() {
        assert_eq!(Page::Dashboard.file_name(), "index.html");
        assert_eq!(Page::KillChain.id(), "killchain");
        assert_eq!(Page::all().len(), 3);
    }
}
