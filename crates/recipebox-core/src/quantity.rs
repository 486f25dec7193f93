//! Kitchen-style quantity formatting.
//!
//! Decimal ingredient amounts are shown as mixed-number fractions the way a
//! cook would read them: `1.5` becomes `1 1/2`, `0.333` becomes `1/3` and
//! `2` stays `2`.
//!
//! The fractional remainder is approximated by the closest `n/d` with
//! `d <= max_denominator` (16 by default). Denominators are searched in
//! ascending order and only a strictly better approximation replaces the
//! current one, so ties go to the smaller denominator and the result is
//! always in lowest terms.
//!
//! # Examples
//!
//! ```rust
//! use recipebox_core::quantity::format_quantity;
//!
//! assert_eq!(format_quantity(1.5).unwrap(), "1 1/2");
//! assert_eq!(format_quantity(0.333).unwrap(), "1/3");
//! assert_eq!(format_quantity(3.0).unwrap(), "3");
//! assert!(format_quantity(-1.0).is_err());
//! ```

use std::fmt;

use crate::error::{RecipeError, Result};

/// Largest denominator considered by [`QuantityFormatter::default`].
pub const DEFAULT_MAX_DENOMINATOR: u32 = 16;

// Floating point noise allowed when comparing approximation errors.
const TIE_EPSILON: f64 = 1e-12;

/// A simple fraction `numerator/denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    /// Numeric value of the fraction.
    pub fn value(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// Closest fraction to `value` (expected in `[0, 1]`) whose denominator
    /// does not exceed `max_denominator`.
    pub fn nearest(value: f64, max_denominator: u32) -> Self {
        let mut best = Fraction {
            numerator: value.round() as u32,
            denominator: 1,
        };
        let mut best_error = (value - best.value()).abs();

        for denominator in 2..=max_denominator.max(1) {
            let numerator = (value * f64::from(denominator)).round() as u32;
            let candidate = Fraction {
                numerator,
                denominator,
            };
            let error = (value - candidate.value()).abs();
            if error < best_error - TIE_EPSILON {
                best = candidate;
                best_error = error;
            }
        }

        best
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Formats decimal amounts as mixed-number fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityFormatter {
    max_denominator: u32,
}

impl QuantityFormatter {
    /// Creates a formatter with the given denominator bound (at least 1).
    pub fn new(max_denominator: u32) -> Self {
        Self {
            max_denominator: max_denominator.max(1),
        }
    }

    pub fn max_denominator(&self) -> u32 {
        self.max_denominator
    }

    /// Largest difference between an amount and the value of its formatted
    /// text: half the spacing of the finest denominator.
    pub fn max_error(&self) -> f64 {
        1.0 / (2.0 * f64::from(self.max_denominator))
    }

    /// Formats a non-negative, finite amount.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidAmount` for negative, NaN or infinite
    /// amounts.
    pub fn format(&self, amount: f64) -> Result<String> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(RecipeError::InvalidAmount { amount });
        }

        if amount == 0.0 {
            return Ok("0".to_string());
        }

        if amount.fract() == 0.0 {
            return Ok(format!("{amount:.0}"));
        }

        // Any amount with a fractional part is below 2^52, so the whole part
        // fits in a u64.
        let mut whole = amount.floor() as u64;
        let fraction = Fraction::nearest(amount.fract(), self.max_denominator);

        if fraction.numerator == fraction.denominator {
            whole += 1;
            return Ok(whole.to_string());
        }

        Ok(match (whole, fraction.numerator) {
            (whole, 0) => whole.to_string(),
            (0, _) => fraction.to_string(),
            (whole, _) => format!("{whole} {fraction}"),
        })
    }
}

impl Default for QuantityFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DENOMINATOR)
    }
}

/// Formats `amount` with the default formatter.
pub fn format_quantity(amount: f64) -> Result<String> {
    QuantityFormatter::default().format(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parses formatter output ("2", "3/4", "1 1/3") back into a number.
    fn parse_mixed(text: &str) -> f64 {
        text.split(' ')
            .map(|part| match part.split_once('/') {
                Some((n, d)) => n.parse::<f64>().unwrap() / d.parse::<f64>().unwrap(),
                None => part.parse::<f64>().unwrap(),
            })
            .sum()
    }

    #[test]
    fn test_integers_render_plainly() {
        for n in 0..=200u32 {
            assert_eq!(format_quantity(f64::from(n)).unwrap(), n.to_string());
        }
    }

    #[test]
    fn test_zero_and_negative_zero() {
        assert_eq!(format_quantity(0.0).unwrap(), "0");
        assert_eq!(format_quantity(-0.0).unwrap(), "0");
    }

    #[test]
    fn test_common_kitchen_fractions() {
        assert_eq!(format_quantity(1.5).unwrap(), "1 1/2");
        assert_eq!(format_quantity(1.0 / 3.0).unwrap(), "1/3");
        assert_eq!(format_quantity(0.333).unwrap(), "1/3");
        assert_eq!(format_quantity(2.25).unwrap(), "2 1/4");
        assert_eq!(format_quantity(1.33).unwrap(), "1 1/3");
        assert_eq!(format_quantity(0.75).unwrap(), "3/4");
        assert_eq!(format_quantity(0.125).unwrap(), "1/8");
        assert_eq!(format_quantity(3.6667).unwrap(), "3 2/3");
    }

    #[test]
    fn test_remainder_rounding_to_zero_drops_fraction() {
        assert_eq!(format_quantity(2.001).unwrap(), "2");
        assert_eq!(format_quantity(0.01).unwrap(), "0");
    }

    #[test]
    fn test_remainder_rounding_to_one_carries() {
        assert_eq!(format_quantity(1.999).unwrap(), "2");
        assert_eq!(format_quantity(0.995).unwrap(), "1");
    }

    #[test]
    fn test_ties_prefer_smaller_denominator() {
        // 0.5 is exactly 1/2, 2/4, 4/8 and 8/16
        assert_eq!(Fraction::nearest(0.5, 16), Fraction { numerator: 1, denominator: 2 });
        // 0.25 is exactly 1/4, 2/8 and 4/16
        assert_eq!(Fraction::nearest(0.25, 16), Fraction { numerator: 1, denominator: 4 });
    }

    #[test]
    fn test_denominator_bound_is_respected() {
        let quarters = QuantityFormatter::new(4);
        assert_eq!(quarters.format(0.2).unwrap(), "1/4");
        // Equidistant from 0 and 1/4; the smaller denominator wins
        assert_eq!(quarters.format(0.125).unwrap(), "0");
        assert_eq!(quarters.format(1.9).unwrap(), "2");
        assert_eq!(QuantityFormatter::new(0).max_denominator(), 1);
    }

    #[test]
    fn test_invalid_amounts_are_rejected() {
        for amount in [-1.0, -0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match format_quantity(amount) {
                Err(RecipeError::InvalidAmount { .. }) => {}
                other => panic!("expected InvalidAmount for {amount}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_formatted_value_stays_within_tolerance() {
        let formatter = QuantityFormatter::default();
        let tolerance = formatter.max_error() + 1e-9;
        for step in 0..=5000u32 {
            let amount = f64::from(step) / 100.0;
            let text = formatter.format(amount).unwrap();
            let rendered = parse_mixed(&text);
            assert!(
                (rendered - amount).abs() <= tolerance,
                "{amount} rendered as {text} ({rendered})"
            );
        }
    }

    #[test]
    fn test_huge_integers_do_not_saturate() {
        assert_eq!(format_quantity(1e20).unwrap(), "100000000000000000000");
    }
}
