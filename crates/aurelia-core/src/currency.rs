//! # Currency Formatting
//!
//! The single presentation seam for money: formats raw rupee amounts as
//! Indian-locale currency strings.
//!
//! ## Indian Digit Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Western grouping:   1,234,567.00                                       │
//! │  Indian grouping:   12,34,567.00                                        │
//! │                                                                         │
//! │  Rule: the last three digits form one group, everything before them    │
//! │  is grouped in pairs.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Core numeric functions return raw `f64` amounts and never format; every
//! display surface funnels through [`format_inr`]. Two fraction digits are
//! always shown.

/// Formats a rupee amount as an Indian-locale currency string.
///
/// ## Example
/// ```rust
/// use aurelia_core::currency::format_inr;
///
/// assert_eq!(format_inr(27000.0), "₹27,000.00");
/// assert_eq!(format_inr(100000.0), "₹1,00,000.00");
/// assert_eq!(format_inr(-550.5), "-₹550.50");
/// ```
pub fn format_inr(amount: f64) -> String {
    // Round to paise first so the whole/fraction split is consistent
    // (e.g. 123.456 → 123.46, and 999.999 carries into the whole part).
    let paise = (amount.abs() * 100.0).round() as i128;
    let whole = paise / 100;
    let fraction = paise % 100;

    let sign = if amount < 0.0 && paise > 0 { "-" } else { "" };
    format!("{}₹{}.{:02}", sign, group_indian(whole), fraction)
}

/// Groups a non-negative integer with Indian digit separators.
fn group_indian(value: i128) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);

    // Group the head in pairs, right to left.
    let head_bytes = head.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head_bytes.len() % 2;
    if lead == 1 {
        grouped.push(head_bytes[0] as char);
    }
    for (i, chunk) in head_bytes[lead..].chunks(2).enumerate() {
        if i > 0 || lead == 1 {
            grouped.push(',');
        }
        grouped.push(chunk[0] as char);
        grouped.push(chunk[1] as char);
    }

    format!("{},{}", grouped, tail)
}

// =============================================================================
// Unit Tests
// =============================================================================
