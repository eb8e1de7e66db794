//! Ingredient Quantities
//!
//! Scale factors offered on the recipe page and the formatter that turns a
//! scaled amount into display text ("1/2", "2", "1.5", "0.17").

/// How a fraction rule compares against the scaled amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractionMatch {
    Exact,
    /// Absolute difference strictly below the tolerance
    Within(f64),
}

/// A cooking fraction shown instead of its decimal value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionRule {
    pub value: f64,
    pub matching: FractionMatch,
    pub label: &'static str,
}

impl FractionRule {
    fn matches(&self, scaled: f64) -> bool {
        match self.matching {
            FractionMatch::Exact => scaled == self.value,
            FractionMatch::Within(tolerance) => (scaled - self.value).abs() < tolerance,
        }
    }
}

/// Checked in order; the first match wins.
pub const COMMON_FRACTIONS: &[FractionRule] = &[
    FractionRule { value: 0.5, matching: FractionMatch::Exact, label: "1/2" },
    FractionRule { value: 0.33, matching: FractionMatch::Within(0.01), label: "1/3" },
    FractionRule { value: 0.25, matching: FractionMatch::Exact, label: "1/4" },
];

/// Formatting thresholds for scaled amounts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityFormat {
    /// Amounts below this use the fraction table or two decimals
    pub fraction_below: f64,
    pub fractions: &'static [FractionRule],
}

impl Default for QuantityFormat {
    fn default() -> Self {
        Self {
            fraction_below: 1.0,
            fractions: COMMON_FRACTIONS,
        }
    }
}

impl QuantityFormat {
    pub fn format(&self, amount: f64, scale: f64) -> String {
        let scaled = amount * scale;

        if scaled < self.fraction_below {
            return self
                .fractions
                .iter()
                .find(|rule| rule.matches(scaled))
                .map(|rule| rule.label.to_string())
                .unwrap_or_else(|| to_fixed(scaled, 2));
        }

        if scaled.fract() == 0.0 {
            format!("{:.0}", scaled)
        } else {
            to_fixed(scaled, 1)
        }
    }
}

/// Enough fractional digits to print any finite f64 exactly
const EXACT_DIGITS: usize = 1100;

/// Fixed-point text with ties rounded away from zero.
///
/// `{:.N}` rounds exact ties to even (`1.25` -> `"1.2"`); recipe amounts
/// round half up (`1.25` -> `"1.3"`). Rounding is decided on the exact
/// decimal value, so `0.345` (stored as 0.34499...) still gives `"0.34"`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();

    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().map(|&d| d as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|&d| d as char));
    }
    out
}

/// Format `amount * scale` with the default thresholds
pub fn format_amount(amount: f64, scale: f64) -> String {
    QuantityFormat::default().format(amount, scale)
}

/// Recipe scale options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scale {
    Half,
    #[default]
    One,
    Double,
    Triple,
}

impl Scale {
    pub const ALL: [Scale; 4] = [Scale::Half, Scale::One, Scale::Double, Scale::Triple];

    pub fn factor(self) -> f64 {
        match self {
            Scale::Half => 0.5,
            Scale::One => 1.0,
            Scale::Double => 2.0,
            Scale::Triple => 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scale::Half => "½x",
            Scale::One => "1x",
            Scale::Double => "2x",
            Scale::Triple => "3x",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_fractions() {
        assert_eq!(format_amount(0.5, 1.0), "1/2");
        assert_eq!(format_amount(1.0 / 3.0, 1.0), "1/3");
        assert_eq!(format_amount(0.25, 1.0), "1/4");
    }

    #[test]
    fn test_whole_numbers_have_no_decimals() {
        assert_eq!(format_amount(2.0, 1.0), "2");
        assert_eq!(format_amount(4.0, 3.0), "12");
    }

    #[test]
    fn test_mixed_amount_uses_one_decimal() {
        assert_eq!(format_amount(1.5, 1.0), "1.5");
        assert_eq!(format_amount(1.5, 3.0), "4.5");
    }

    #[test]
    fn test_scale_is_applied_before_formatting() {
        assert_eq!(format_amount(4.0, 0.5), "2");
        assert_eq!(format_amount(1.0 / 3.0, 3.0), "1");
        assert_eq!(format_amount(1.0, 0.5), "1/2");
        assert_eq!(format_amount(1.0 / 3.0, 2.0), "0.67");
    }

    #[test]
    fn test_other_small_amounts_fall_through_to_decimals() {
        // Half of a third is not reduced to 1/6
        assert_eq!(format_amount(1.0 / 3.0, 0.5), "0.17");
        assert_eq!(format_amount(0.75, 1.0), "0.75");
        assert_eq!(format_amount(0.2, 1.0), "0.20");
    }

    #[test]
    fn test_third_tolerance_is_strict() {
        assert_eq!(format_amount(0.335, 1.0), "1/3");
        assert_eq!(format_amount(0.345, 1.0), "0.34");
    }

    #[test]
    fn test_exact_ties_round_up() {
        assert_eq!(format_amount(0.125, 1.0), "0.13");
        assert_eq!(format_amount(2.5, 0.5), "1.3");
        assert_eq!(format_amount(0.75, 3.0), "2.3");
        assert_eq!(format_amount(0.375, 1.0), "0.38");
    }

    #[test]
    fn test_to_fixed_carries_and_keeps_near_ties() {
        assert_eq!(to_fixed(0.999, 2), "1.00");
        assert_eq!(to_fixed(9.96, 1), "10.0");
        assert_eq!(to_fixed(-1.25, 1), "-1.3");
        assert_eq!(to_fixed(2.5, 0), "3");
        // 1.005 is stored just below the tie
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn test_out_of_contract_inputs_still_format() {
        assert_eq!(format_amount(0.0, 1.0), "0.00");
        assert_eq!(format_amount(-2.0, 1.0), "-2.00");
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let first = format_amount(1.0 / 3.0, 0.5);
        for _ in 0..10 {
            assert_eq!(format_amount(1.0 / 3.0, 0.5), first);
        }
    }

    #[test]
    fn test_custom_cutoff_and_table() {
        const HALVES: &[FractionRule] = &[FractionRule {
            value: 1.5,
            matching: FractionMatch::Exact,
            label: "1 1/2",
        }];
        let format = QuantityFormat { fraction_below: 2.0, fractions: HALVES };
        assert_eq!(format.format(0.75, 2.0), "1 1/2");
        assert_eq!(format.format(0.5, 1.0), "0.50");
        assert_eq!(format.format(2.0, 1.0), "2");
    }

    #[test]
    fn test_scale_options() {
        let factors: Vec<f64> = Scale::ALL.iter().map(|s| s.factor()).collect();
        assert_eq!(factors, vec![0.5, 1.0, 2.0, 3.0]);
        assert_eq!(Scale::default(), Scale::One);
        assert_eq!(Scale::Half.label(), "½x");
        assert_eq!(Scale::Triple.label(), "3x");
    }
}
