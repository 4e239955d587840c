//! Numeral normalization
//!
//! Japanese input frequently carries full-width digits and punctuation
//! (`１２３．５`). Captured numbers are normalized to ASCII before parsing.

/// Convert full-width digits, decimal point and commas to ASCII
pub fn fullwidth_to_ascii(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            '．' => '.',
            '，' | '、' => ',',
            _ => c,
        })
        .collect()
}

/// Normalize and strip thousands separators
fn normalize_number(raw: &str) -> String {
    fullwidth_to_ascii(raw.trim()).replace(',', "")
}

/// Parse a positive integer (`1,024`, `４２`). Zero is rejected.
pub fn parse_identifier(raw: &str) -> Option<u64> {
    normalize_number(raw).parse::<u64>().ok().filter(|v| *v > 0)
}

/// Parse a finite, non-negative decimal (`45.5`, `１７５．０`)
pub fn parse_decimal(raw: &str) -> Option<f64> {
    normalize_number(raw)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
