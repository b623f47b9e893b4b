//! Numeric field handling shared by every pass.
//!
//! RULE: A field is either a finite number or "missing". Empty strings,
//! free text, NaN and infinities are all missing, never an error.

/// Parse a price/cost field. Surrounding whitespace is ignored.
pub fn parse_optional_number(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Round to two places, half away from zero, on the shortest decimal
/// representation of `value` (129.625 -> "129.63").
pub fn round_half_up_2(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let int_str: String = digits[..split].iter().map(|d| char::from(b'0' + d)).collect();
    let frac_str: String = digits[split..].iter().map(|d| char::from(b'0' + d)).collect();
    let int_str = if int_str.is_empty() { "0".to_string() } else { int_str };

    let is_zero = digits.iter().all(|&d| d == 0);
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };
    format!("{sign}{int_str}.{frac_str}")
}

/// Round to two places on the binary value, nearest-even on exact ties.
pub fn round_2(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values() {
        assert_eq!(parse_optional_number(""), None);
        assert_eq!(parse_optional_number("   "), None);
        assert_eq!(parse_optional_number("n/a"), None);
        assert_eq!(parse_optional_number("NaN"), None);
        assert_eq!(parse_optional_number("inf"), None);
    }

    #[test]
    fn numeric_values() {
        assert_eq!(parse_optional_number("100"), Some(100.0));
        assert_eq!(parse_optional_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_optional_number("-3"), Some(-3.0));
        assert_eq!(parse_optional_number("1e3"), Some(1000.0));
    }

    #[test]
    fn half_up_on_shortest_repr() {
        assert_eq!(round_half_up_2(305.0), "305.00");
        assert_eq!(round_half_up_2(129.625), "129.63");
        assert_eq!(round_half_up_2(101.6565), "101.66");
        assert_eq!(round_half_up_2(0.995), "1.00");
        assert_eq!(round_half_up_2(99.995), "100.00");
        assert_eq!(round_half_up_2(0.004), "0.00");
        assert_eq!(round_half_up_2(-2.345), "-2.35");
    }

    #[test]
    fn standard_rounding() {
        assert_eq!(round_2(366.00000000000006), "366.00");
        assert_eq!(round_2(305.0), "305.00");
        assert_eq!(round_2(91.5), "91.50");
    }
}
