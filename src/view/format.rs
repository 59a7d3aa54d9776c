//! Display formatting for the detail view.

/// Shown wherever a value is missing or unusable.
pub const PLACEHOLDER: &str = "—";

/// `1234` becomes `"1,234 sq.ft."`.
#[must_use]
pub fn format_area(total_area: Option<f64>) -> String {
    match total_area {
        Some(area) if area.is_finite() => format!("{} sq.ft.", format_grouped(area, 0, 3)),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `500000` becomes `"AED 500,000.00"`.
#[must_use]
pub fn format_aed(sales_value: Option<f64>) -> String {
    match sales_value {
        Some(value) if value.is_finite() => {
            let amount = format_grouped(value.abs(), 2, 2);
            let sign = if value < 0.0 && amount != "0.00" { "-" } else { "" };
            format!("{sign}AED {amount}")
        }
        _ => PLACEHOLDER.to_string(),
    }
}

#[must_use]
pub fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Groups the integer part with commas and keeps between `min_frac` and
/// `max_frac` fraction digits, trimming trailing zeros past the minimum.
fn format_grouped(value: f64, min_frac: usize, max_frac: usize) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.*}", max_frac, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), ""),
    };

    let mut frac = frac_part.to_string();
    while frac.len() > min_frac && frac.ends_with('0') {
        frac.pop();
    }

    let mut out = String::new();
    if negative && (int_part != "0" || !frac.chars().all(|c| c == '0')) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }
    let first_len = match len % 3 {
        0 => 3,
        n => n,
    };
    let mut out = digits[..first_len].to_string();
    for i in (first_len..len).step_by(3) {
        out.push(',');
        out.push_str(&digits[i..i + 3]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn area_gets_separators_and_suffix() {
        assert_eq!(format_area(Some(1234.0)), "1,234 sq.ft.");
        assert_eq!(format_area(Some(980.0)), "980 sq.ft.");
        assert_eq!(format_area(Some(1_234_567.25)), "1,234,567.25 sq.ft.");
        assert_eq!(format_area(Some(1500.1239)), "1,500.124 sq.ft.");
    }

    #[test]
    fn missing_area_is_placeholder() {
        assert_eq!(format_area(None), "—");
        assert_eq!(format_area(Some(f64::NAN)), "—");
    }

    #[test]
    fn price_formats_as_aed() {
        assert_eq!(format_aed(Some(500_000.0)), "AED 500,000.00");
        assert_eq!(format_aed(Some(1_250_000.5)), "AED 1,250,000.50");
        assert_eq!(format_aed(Some(0.0)), "AED 0.00");
        assert_eq!(format_aed(Some(-5.0)), "-AED 5.00");
    }

    #[test]
    fn missing_price_is_placeholder() {
        assert_eq!(format_aed(None), "—");
        assert_eq!(format_aed(Some(f64::INFINITY)), "—");
    }

    #[test]
    fn text_placeholder_for_blank_values() {
        assert_eq!(text_or_placeholder(Some("Sea View")), "Sea View");
        assert_eq!(text_or_placeholder(Some("0")), "0");
        assert_eq!(text_or_placeholder(Some(" ")), "—");
        assert_eq!(text_or_placeholder(None), "—");
    }
}
