// Source Reference Entity
// The citation registry: short key -> title, URL, category.

use serde::{Deserialize, Serialize};

// ============================================================================
// SOURCE CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    /// NBIM, SEC, government publications
    Official,

    /// UN reports
    UnReport,

    /// Investigative journalism (+972, Guardian, Intercept)
    Journalism,

    /// NGO reports (Who Profits, Amnesty, HRW)
    NgoReport,

    /// Company documentation
    Corporate,

    /// Academic sources
    Academic,
}

impl SourceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceCategory::Official => "Official",
            SourceCategory::UnReport => "UN Report",
            SourceCategory::Journalism => "Journalism",
            SourceCategory::NgoReport => "NGO Report",
            SourceCategory::Corporate => "Corporate",
            SourceCategory::Academic => "Academic",
        }
    }
}

// ============================================================================
// SOURCE REFERENCE
// ============================================================================

/// One citation in the source registry, referenced from companies by key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRef {
    pub key: String,
    pub title: String,
    pub url: String,
    pub category: SourceCategory,
}

impl SourceRef {
    pub fn new(key: &str, title: &str, url: &str, category: SourceCategory) -> Self {
        SourceRef {
            key: key.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            category,
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
    fn test_source_construction() {
        let source = SourceRef::new(
            "albanese-report",
            "UN Special Rapporteur report A/HRC/59/23",
            "https://www.ohchr.org/en/documents/country-reports/ahrc5923",
            SourceCategory::UnReport,
        );

        assert_eq!(source.key, "albanese-report");
        assert_eq!(source.category.as_str(), "UN Report");
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(SourceCategory::Official.as_str(), "Official");
        assert_eq!(SourceCategory::NgoReport.as_str(), "NGO Report");
        assert_eq!(SourceCategory::Journalism.as_str(), "Journalism");
    }
}
