// Excluded Entity
// Companies the fund has divested from on Council on Ethics recommendation.
// Independent of the kill chain phase model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcludedEntity {
    pub name: String,
    pub ticker: String,
    pub excluded_on: NaiveDate,
    pub reason: String,
}

impl ExcludedEntity {
    pub fn new(name: &str, ticker: &str, excluded_on: NaiveDate, reason: &str) -> Self {
        ExcludedEntity {
            name: name.to_string(),
            ticker: ticker.to_string(),
            excluded_on,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_construction() {
        let date = NaiveDate::from_ymd_opt(2009, 9, 1).unwrap();
        let excluded = ExcludedEntity::new(
            "Elbit Systems",
            "ESLT",
            date,
            "Supply of surveillance systems for the separation barrier",
        );

        assert_eq!(excluded.ticker, "ESLT");
        assert_eq!(excluded.excluded_on, date);
    }
}
