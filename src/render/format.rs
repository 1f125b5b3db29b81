//! Value formatting for the loaded views.
//!
//! Currency and counts use en-US thousands grouping, matching what the host
//! CRM renders elsewhere on the page. Source integers stay integers: no
//! fractional digits are introduced.

/// Group an integer with thousands separators: 75000 → "75,000".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    group_thousands(&digits)
}

/// Currency with symbol prefix and grouping: 75000 → "$75,000".
/// Negative amounts keep the sign ahead of the symbol: "-$1,500".
pub fn format_currency(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Percentage display for a 0–100 score.
pub fn format_percent(value: u32) -> String {
    format!("{}%", value)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
