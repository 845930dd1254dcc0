/// Formats an amount as US dollars with thousands separators and two decimals,
/// e.g. `$10,778.15` or `-$5,000.00`.
pub fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let sign = if value < 0.0 && formatted.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{fraction}", group_thousands(whole))
}

/// Formats a score in `[0, 1]` as a percentage with one decimal, e.g. `72.0%`.
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
