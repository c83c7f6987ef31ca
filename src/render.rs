// Rendering Layer
// format!-built HTML fragments for tables, phase cards, navigation and
// source links. Every interpolated datum goes through escape_html; source
// keys are resolved through the registry with a safe '#' fallback.

use crate::dataset::Dataset;
use crate::format::{format_pct, format_usd};
use crate::stats;
use crate::entities::Company;

// ============================================================================
// HELPERS
// ============================================================================

/// Minimal HTML escaping for text and attribute positions.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Resolve a source key to its URL, or "#" when the key is not in the
/// registry. Lookups degrade, they never raise.
pub fn resolve_source_href<'a>(dataset: &'a Dataset, key: &str) -> &'a str {
    dataset.source(key).map(|s| s.url.as_str()).unwrap_or("#")
}

/// Resolve a source key to its tooltip title, or a placeholder.
pub fn resolve_source_title(dataset: &Dataset, key: &str) -> String {
    dataset
        .source(key)
        .map(|s| format!("{} ({})", s.title, s.category.as_str()))
        .unwrap_or_else(|| "Unknown source".to_string())
}

// ============================================================================
// SOURCE LINKS
// ============================================================================

/// Numbered, clickable citation links for a company's source keys.
pub fn render_source_links(dataset: &Dataset, keys: &[String]) -> String {
    let mut html = String::new();

    for (i, key) in keys.iter().enumerate() {
        let href = resolve_source_href(dataset, key);
        let title = resolve_source_title(dataset, key);
        html.push_str(&format!(
            r#"<a class="source-link" href="{href}" title="{title}" target="_blank" rel="noopener">[{n}]</a> "#,
            href = escape_html(href),
            title = escape_html(&title),
            n = i + 1,
        ));
    }

    html
}

// ============================================================================
// COMPANY TABLE
// ============================================================================

/// One row per company: name, ticker, phase badges, stake, value, role and
/// resolved source links.
pub fn render_company_table(dataset: &Dataset, companies: &[&Company]) -> String {
    let mut rows = String::new();

    for company in companies {
        let badges: String = company
            .phases
            .iter()
            .map(|key| {
                let (name, color) = dataset
                    .phase(*key)
                    .map(|p| (p.name.clone(), p.color.clone()))
                    .unwrap_or_else(|| (key.to_string(), "#9ca3af".to_string()));
                format!(
                    r#"<span class="phase-badge" style="border-color: {color}">{name}</span>"#,
                    color = escape_html(&color),
                    name = escape_html(&name),
                )
            })
            .collect();

        rows.push_str(&format!(
            r#"        <tr>
            <td class="company-name">{name}</td>
            <td class="ticker">{ticker}</td>
            <td>{badges}</td>
            <td class="num">{stake}</td>
            <td class="num">{value}</td>
            <td>{role}</td>
            <td class="sources">{links}</td>
        </tr>
"#,
            name = escape_html(&company.name),
            ticker = escape_html(&company.ticker),
            badges = badges,
            stake = format_pct(company.stake_pct),
            value = format_usd(company.value_usd),
            role = escape_html(&company.role),
            links = render_source_links(dataset, &company.sources),
        ));
    }

    format!(
        r#"<table class="company-table">
    <thead>
        <tr>
            <th>Company</th>
            <th>Ticker</th>
            <th>Phases</th>
            <th>Stake</th>
            <th>Value</th>
            <th>Role</th>
            <th>Sources</th>
        </tr>
    </thead>
    <tbody>
{rows}    </tbody>
</table>"#
    )
}

// ============================================================================
// PHASE CARDS
// ============================================================================

/// One styled card per registry phase: id, name, alias, description,
/// ownership range, formatted total and up to three example companies.
pub fn render_phase_cards(dataset: &Dataset) -> String {
    let mut cards = String::new();

    for phase in &dataset.phases {
        let subset = stats::companies_by_phase(dataset, phase.key);
        let total = stats::phase_total(dataset, phase.key);

        let examples: String = subset
            .iter()
            .take(3)
            .map(|c| format!("<li>{}</li>", escape_html(&c.name)))
            .collect();

        cards.push_str(&format!(
            r#"    <div class="phase-card" style="border-top-color: {color}">
        <div class="phase-id">{id}</div>
        <i data-lucide="{icon}"></i>
        <h3>{name}</h3>
        <div class="phase-alias">{alias}</div>
        <p>{description}</p>
        <div class="phase-range">Ownership: {range}</div>
        <div class="phase-total">{total}</div>
        <ul class="phase-examples">{examples}</ul>
    </div>
"#,
            color = escape_html(&phase.color),
            id = escape_html(&phase.id),
            icon = escape_html(&phase.icon),
            name = escape_html(&phase.name),
            alias = escape_html(&phase.alias),
            description = escape_html(&phase.description),
            range = escape_html(&phase.ownership_range),
            total = format_usd(total),
            examples = examples,
        ));
    }

    format!("<div class=\"phase-grid\">\n{cards}</div>")
}

// ============================================================================
// NAVIGATION
// ============================================================================

/// Fixed nav entries shared by every page.
pub const NAV_PAGES: [(&str, &str, &str); 3] = [
    ("index", "DASHBOARD", "index.html"),
    ("killchain", "KILL CHAIN", "killchain.html"),
    ("companies", "COMPANY LIST", "companies.html"),
];

/// Tab-style navigation with the active page marked.
pub fn render_navigation(active: &str) -> String {
    let mut html = String::from("<div class=\"tab-group\">");

    for (id, label, url) in NAV_PAGES {
        let class = if *id == *active {
            "tab-btn active"
        } else {
            "tab-btn"
        };
        html.push_str(&format!(
            r#"<a href="{url}" class="{class}">{label}</a>"#
        ));
    }

    html.push_str("</div>");
    html
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_resolve_known_source() {
        let dataset = fixtures::dataset();
        assert_eq!(
            resolve_source_href(&dataset, "src-a"),
            "https://example.com/a"
        );
        assert!(resolve_source_title(&dataset, "src-a").contains("Source A"));
    }

    #[test]
    fn test_resolve_unknown_source_is_safe_placeholder() {
        let dataset = fixtures::dataset();
        assert_eq!(resolve_source_href(&dataset, "ghost"), "#");
        assert_eq!(resolve_source_title(&dataset, "ghost"), "Unknown source");
    }

    #[test]
    fn test_render_source_links_numbered() {
        let dataset = fixtures::dataset();
        let keys = vec!["src-a".to_string(), "src-b".to_string()];
        let html = render_source_links(&dataset, &keys);

        assert!(html.contains("[1]"));
        assert!(html.contains("[2]"));
        assert!(html.contains("https://example.com/a"));
        assert!(html.contains("https://example.com/b"));
    }

    #[test]
    fn test_render_company_table() {
        let dataset = fixtures::dataset();
        let companies: Vec<_> = dataset.companies.iter().collect();
        let html = render_company_table(&dataset, &companies);

        assert!(html.contains("Alpha Corp"));
        assert!(html.contains("BETA"));
        assert!(html.contains("$3.0B"));
        assert!(html.contains("2.00%"));
        assert!(html.contains("FIND"));
    }

    #[test]
    fn test_render_company_table_escapes_content() {
        let mut dataset = fixtures::dataset();
        dataset.companies[0].name = "Evil <script> & Co".to_string();

        let companies: Vec<_> = dataset.companies.iter().collect();
        let html = render_company_table(&dataset, &companies);

        assert!(!html.contains("<script>"));
        assert!(html.contains("Evil &lt;script&gt; &amp; Co"));
    }

    #[test]
    fn test_render_phase_cards_covers_registry() {
        let dataset = fixtures::dataset();
        let html = render_phase_cards(&dataset);

        for phase in &dataset.phases {
            assert!(html.contains(&phase.name));
        }
        // Engage phase: Beta (3,000M) + Gamma (2,000M)
        assert!(html.contains("$5.0B"));
    }

    #[test]
    fn test_render_phase_cards_limits_examples_to_three() {
        let dataset = crate::dataset::Dataset::builtin();
        let html = render_phase_cards(&dataset);

        // Engage has five tagged companies in the builtin dataset; only the
        // three largest appear as examples.
        assert!(html.contains("Lockheed Martin"));
        assert!(html.contains("Raytheon"));
        assert!(!html.contains("<li>Rheinmetall</li>"));
    }

    #[test]
    fn test_render_phase_cards_empty_phase() {
        let dataset = fixtures::dataset();
        let html = render_phase_cards(&dataset);

        // Assess has no companies but still renders a card with a $0 total
        assert!(html.contains("ASSESS"));
        assert!(html.contains("$0"));
    }

    #[test]
    fn test_render_navigation_marks_active() {
        let html = render_navigation("killchain");

        assert!(html.contains(r#"href="killchain.html" class="tab-btn active""#));
        assert!(html.contains(r#"href="index.html" class="tab-btn""#));
        assert!(html.contains("COMPANY LIST"));
    }

    #[test]
    fn test_render_navigation_unknown_page_has_no_active() {
        let html = render_navigation("nonexistent");
        assert!(!html.contains("tab-btn active"));
    }
}
