//! Cell parsing — currency and percentage text to numbers.
//!
//! Parsing never fails: a cell that is absent, blank, or not a finite number
//! yields the caller's default. Spreadsheet cells are routinely blank or hold
//! placeholders such as "TBD", so these fallbacks are silent.

/// Fallback for an unreadable portfolio value (the starting capital).
pub const DEFAULT_PORTFOLIO_VALUE: f64 = 10_000.0;

/// Fallback for an unreadable percentage.
pub const DEFAULT_PERCENT: f64 = 0.0;

/// Fallback for an unreadable per-stock price.
pub const DEFAULT_PRICE: f64 = 0.0;

const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

/// Parse a currency cell such as `"$11,250.50"`.
pub fn parse_currency(cell: Option<&str>, default: f64) -> f64 {
    parse_number(cell, |c| c == ',' || CURRENCY_SYMBOLS.contains(&c)).unwrap_or(default)
}

/// Parse a percentage cell such as `"-4.25%"`, falling back to [`DEFAULT_PERCENT`].
pub fn parse_percent(cell: Option<&str>) -> f64 {
    parse_percent_or(cell, DEFAULT_PERCENT)
}

/// Parse a percentage cell with an explicit fallback.
pub fn parse_percent_or(cell: Option<&str>, default: f64) -> f64 {
    parse_number(cell, |c| c == ',' || c == '%').unwrap_or(default)
}

fn parse_number(cell: Option<&str>, strip: impl Fn(char) -> bool) -> Option<f64> {
    let cleaned: String = cell?.chars().filter(|&c| !strip(c)).collect();
    let value = leading_number(cleaned.trim())?;
    value.is_finite().then_some(value)
}

/// Longest numeric prefix of `s`: optional sign, digits with an optional
/// fraction, optional exponent. Trailing text (`"12.5 est"`) is ignored.
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
