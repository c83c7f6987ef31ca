// Formatting Layer
// Pure display formatting for currency values and percentages. Total over
// all finite inputs; no error conditions.

const TRILLION: f64 = 1_000_000_000_000.0;
const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;

/// Format a raw USD amount with the largest suffix whose threshold it meets:
/// one decimal for trillions/billions, none for millions, grouped thousands
/// below one million.
///
/// 1_200_000_000.0 -> "$1.2B", 45_000_000.0 -> "$45M", 500.0 -> "$500"
pub fn format_usd(raw: f64) -> String {
    let (sign, value) = split_sign(raw);

    if value >= TRILLION {
        format!("{sign}${:.1}T", value / TRILLION)
    } else if value >= BILLION {
        format!("{sign}${:.1}B", value / BILLION)
    } else if value >= MILLION {
        format!("{sign}${:.0}M", value / MILLION)
    } else {
        format!("{sign}${}", group_thousands(value.round() as u64))
    }
}

/// Convert a raw USD amount at the given fixed rate and format it with
/// Norwegian unit labels: bill. (1e12), mrd. (1e9), mill. (1e6).
pub fn format_nok(usd_raw: f64, rate: f64) -> String {
    let (sign, value) = split_sign(usd_raw * rate);

    if value >= TRILLION {
        format!("{sign}{:.1} bill. NOK", value / TRILLION)
    } else if value >= BILLION {
        format!("{sign}{:.1} mrd. NOK", value / BILLION)
    } else if value >= MILLION {
        format!("{sign}{:.0} mill. NOK", value / MILLION)
    } else {
        format!("{sign}{} NOK", group_thousands(value.round() as u64))
    }
}

/// Ownership percentage with two decimals.
pub fn format_pct(pct: f64) -> String {
    format!("{:.2}%", pct)
}

/// Insert comma separators every three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

fn split_sign(raw: f64) -> (&'static str, f64) {
    if raw < 0.0 {
        ("-", -raw)
    } else {
        ("", raw)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_billions() {
        assert_eq!(format_usd(1_200_000_000.0), "$1.2B");
        assert_eq!(format_usd(45_000_000_000.0), "$45.0B");
    }

    #[test]
    fn test_format_usd_millions() {
        assert_eq!(format_usd(45_000_000.0), "$45M");
        assert_eq!(format_usd(827_000_000.0), "$827M");
    }

    #[test]
    fn test_format_usd_trillions() {
        assert_eq!(format_usd(1_500_000_000_000.0), "$1.5T");
    }

    #[test]
    fn test_format_usd_below_one_million() {
        assert_eq!(format_usd(500.0), "$500");
        assert_eq!(format_usd(999_999.0), "$999,999");
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn test_format_usd_threshold_boundaries() {
        // Exactly at a threshold selects that suffix
        assert_eq!(format_usd(1_000_000.0), "$1M");
        assert_eq!(format_usd(1_000_000_000.0), "$1.0B");
        assert_eq!(format_usd(999_999_999.0), "$1000M");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(-1_200_000_000.0), "-$1.2B");
    }

    #[test]
    fn test_format_nok_conversion() {
        // 45,000M USD * 11 = 495 mrd NOK
        assert_eq!(format_nok(45_000_000_000.0, 11.0), "495.0 mrd. NOK");
        assert_eq!(format_nok(200_000_000_000.0, 11.0), "2.2 bill. NOK");
        assert_eq!(format_nok(5_000_000.0, 11.0), "55 mill. NOK");
        assert_eq!(format_nok(100.0, 11.0), "1,100 NOK");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(1.84), "1.84%");
        assert_eq!(format_pct(0.0), "0.00%");
        assert_eq!(format_pct(2.0), "2.00%");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(500), "500");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(999_999), "999,999");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
