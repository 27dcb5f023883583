use time::macros::format_description;
use time::{Date, OffsetDateTime};
use time::format_description::well_known::Rfc3339;

/// "2026-08-22" or an RFC 3339 timestamp -> "Sat, Aug 22, 2026".
/// Unparseable input is passed through unchanged.
pub fn format_date(value: &str) -> String {
    let date = OffsetDateTime::parse(value, &Rfc3339)
        .map(OffsetDateTime::date)
        .or_else(|_| Date::parse(value, format_description!("[year]-[month]-[day]")));
    let Ok(date) = date else {
        return value.to_string();
    };
    date.format(format_description!(
        "[weekday repr:short], [month repr:short] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| value.to_string())
}

/// RFC 3339 timestamp -> "Aug 22, 2026, 06:30 PM".
pub fn format_date_time(value: &str) -> String {
    let Ok(parsed) = OffsetDateTime::parse(value, &Rfc3339) else {
        return value.to_string();
    };
    parsed
        .format(format_description!(
            "[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]"
        ))
        .unwrap_or_else(|_| value.to_string())
}

/// A zero amount renders as the literal "Free"; anything else as a
/// symbol-prefixed, thousands-grouped amount with two decimals.
pub fn format_currency(amount: f64, currency: &str) -> String {
    if amount == 0.0 {
        return "Free".to_string();
    }
    let symbol = match currency {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "IDR" => "Rp",
        _ => "",
    };
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 { "-" } else { "" };
    let grouped = group_thousands(cents / 100);
    let frac = cents % 100;
    if symbol.is_empty() {
        format!("{sign}{grouped}.{frac:02} {currency}")
    } else {
        format!("{sign}{symbol}{grouped}.{frac:02}")
    }
}

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

/// Truncates to `length` characters, appending `...` when anything was cut.
pub fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let mut out: String = text.chars().take(length).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_dates() {
        assert_eq!(format_date("2026-08-22"), "Sat, Aug 22, 2026");
        assert_eq!(format_date("2024-06-01T19:30:00Z"), "Sat, Jun 1, 2024");
    }

    #[test]
    fn passes_through_unparseable_dates() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn formats_date_times() {
        assert_eq!(
            format_date_time("2024-06-01T17:40:00Z"),
            "Jun 1, 2024, 05:40 PM"
        );
        assert_eq!(
            format_date_time("2026-01-03T09:05:00Z"),
            "Jan 3, 2026, 09:05 AM"
        );
    }

    #[test]
    fn zero_amounts_are_free() {
        assert_eq!(format_currency(0.0, "USD"), "Free");
    }

    #[test]
    fn formats_currency_amounts() {
        assert_eq!(format_currency(25.0, "USD"), "$25.00");
        assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
        assert_eq!(format_currency(8.75, "EUR"), "€8.75");
        assert_eq!(format_currency(150000.0, "IDR"), "Rp150,000.00");
        assert_eq!(format_currency(42.0, "CHF"), "42.00 CHF");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(18234), "18,234");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate("short", 100), "short");
        assert_eq!(truncate("abcdefgh", 5), "abcde...");
        assert_eq!(truncate("héllo wörld", 7), "héllo w...");
    }
}
