//! Locale-aware price formatting and parsing.
//!
//! Prices are [`Decimal`] values so no binary-float rounding drift can creep
//! into what the user typed. The display convention is the Colombian one:
//! `.` groups thousands and `,` separates decimals, so `1234567.89` renders
//! as `1.234.567,89`.
//!
//! [`PriceFormat`] bundles three related conversions:
//!
//! - [`format`](PriceFormat::format) / [`parse`](PriceFormat::parse) - the
//!   canonical mapping between amounts and display strings,
//! - [`on_keystroke`](PriceFormat::on_keystroke) - the incremental input
//!   mask, which works on the raw text instead of round-tripping through
//!   `parse`/`format` because those lose mid-edit states (a trailing comma
//!   with no digits yet, a leading zero before the comma is typed),
//! - [`on_blur`](PriceFormat::on_blur) - the finalize step that snaps
//!   whatever the user left behind to the canonical rendering.
//!
//! None of these functions panic or allocate surprises; invalid input
//! degrades to an empty string or clamps to the `[0, max]` range.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Maximum accepted price: `999_999_999.99`.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_215_752_191, 23, 0, false, 2);

/// Separator characters for one locale's number rendering.
///
/// Grouping and parsing are parameterized by these so an alternate locale
/// only needs a new constant, not changes to the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleSeparators {
    /// Thousands grouping separator.
    pub group: char,
    /// Decimal separator.
    pub decimal: char,
}

impl LocaleSeparators {
    /// Colombian Spanish: `1.234.567,89`.
    pub const ES_CO: Self = Self {
        group: '.',
        decimal: ',',
    };
}

/// Formatter/parser for price input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceFormat {
    separators: LocaleSeparators,
    max: Decimal,
}

impl PriceFormat {
    /// Create a formatter with explicit separator rules and cap.
    #[must_use]
    pub const fn new(separators: LocaleSeparators, max: Decimal) -> Self {
        Self { separators, max }
    }

    /// The shipped locale: es-CO separators, capped at [`MAX_PRICE`].
    #[must_use]
    pub const fn es_co() -> Self {
        Self::new(LocaleSeparators::ES_CO, MAX_PRICE)
    }

    /// The maximum amount this formatter accepts.
    #[must_use]
    pub const fn max(&self) -> Decimal {
        self.max
    }

    /// Render an amount as a display string.
    ///
    /// Zero and negative amounts render as the empty string (an absent
    /// price is shown as an empty field, never as `0`). Anything else is
    /// clamped to `[0, max]` and rendered with grouping separators and up
    /// to two decimal digits, trailing zeros trimmed.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        if amount.is_sign_negative() || amount.is_zero() {
            return String::new();
        }
        let clamped = amount.min(self.max).round_dp(2).normalize();
        if clamped.is_zero() {
            return String::new();
        }
        let text = clamped.to_string();
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let grouped = self.group_digits(int_part);
        if frac_part.is_empty() {
            grouped
        } else {
            format!("{grouped}{}{frac_part}", self.separators.decimal)
        }
    }

    /// Parse a display string back into an amount.
    ///
    /// Whitespace and grouping separators are stripped, the decimal
    /// separator becomes `.`, and the remainder is parsed as a decimal.
    /// Unparsable input yields `0`; the result is clamped to `[0, max]`.
    /// Inverts [`format`](Self::format) for any string it can produce.
    #[must_use]
    pub fn parse(&self, input: &str) -> Decimal {
        let mut cleaned = String::with_capacity(input.len());
        for c in input.chars() {
            if c.is_whitespace() || c == self.separators.group {
                continue;
            }
            cleaned.push(if c == self.separators.decimal { '.' } else { c });
        }
        match Decimal::from_str(&cleaned) {
            Ok(value) => value.clamp(Decimal::ZERO, self.max),
            // A digit run too long for Decimal is far above the cap.
            Err(_) if is_plain_number(&cleaned) => self.max,
            Err(_) => Decimal::ZERO,
        }
    }

    /// Re-mask the raw text of the price input after an edit.
    ///
    /// The contract, in order:
    ///
    /// 1. every character that is not a digit or the decimal separator is
    ///    dropped;
    /// 2. only the first decimal separator survives;
    /// 3. decimal digits are truncated to two;
    /// 4. the numeric value is clamped to `[0, max]`, flooring for the
    ///    integer rendering;
    /// 5. the integer part is re-grouped, and the decimal separator plus
    ///    the typed decimal digits are appended verbatim.
    ///
    /// A lone separator stays a lone separator (`","` renders as `","`,
    /// not `"0,"` and not `""`) so the user can keep typing decimals. As
    /// soon as any digit accompanies the separator the integer part
    /// materializes as `0` (`",5"` renders as `"0,5"`). Input that cannot
    /// be interpreted at all resets the field to empty rather than
    /// guessing.
    #[must_use]
    pub fn on_keystroke(&self, raw: &str) -> String {
        let mut int_digits = String::new();
        let mut dec_digits = String::new();
        let mut has_sep = false;
        for c in raw.chars() {
            if c.is_ascii_digit() {
                if has_sep {
                    dec_digits.push(c);
                } else {
                    int_digits.push(c);
                }
            } else if c == self.separators.decimal && !has_sep {
                has_sep = true;
            }
        }
        dec_digits.truncate(2);

        let int_or_zero = if int_digits.is_empty() {
            "0"
        } else {
            int_digits.as_str()
        };
        let combined = if dec_digits.is_empty() {
            int_or_zero.to_string()
        } else {
            format!("{int_or_zero}.{dec_digits}")
        };
        let value = match Decimal::from_str(&combined) {
            Ok(v) => v.clamp(Decimal::ZERO, self.max),
            Err(_) if is_plain_number(&combined) => self.max,
            // Hard reset on garbage rather than best-effort.
            Err(_) => return String::new(),
        };

        let int_val = value.trunc();
        let typed_digit = !int_digits.is_empty() || !dec_digits.is_empty();
        let base = if int_val > Decimal::ZERO {
            self.group_digits(&int_val.to_string())
        } else if has_sep && typed_digit {
            "0".to_string()
        } else {
            String::new()
        };
        if has_sep {
            format!("{base}{}{dec_digits}", self.separators.decimal)
        } else {
            base
        }
    }

    /// Finalize the field: canonical rendering of whatever was left behind.
    ///
    /// Equivalent to `format(parse(current))` - fixes grouping and decimal
    /// digit count, and empties the field if nothing parsable remains.
    #[must_use]
    pub fn on_blur(&self, current: &str) -> String {
        self.format(self.parse(current))
    }

    /// Render an amount as COP currency for read-only display.
    ///
    /// Always two decimal digits: `$ 1.234,50`.
    #[must_use]
    pub fn format_currency(&self, amount: Decimal) -> String {
        let rounded = amount.max(Decimal::ZERO).round_dp(2);
        let text = format!("{rounded:.2}");
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        format!(
            "$ {}{}{frac_part}",
            self.group_digits(int_part),
            self.separators.decimal
        )
    }

    /// Insert the grouping separator every three digits, from the right.
    fn group_digits(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.separators.group);
            }
            out.push(c);
        }
        out
    }
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self::es_co()
    }
}

/// True when `s` is nothing but digits and at most one `.`, with at least
/// one digit. Used to tell "too many digits for `Decimal`" apart from
/// genuinely non-numeric input.
fn is_plain_number(s: &str) -> bool {
    let mut seen_dot = false;
    let mut seen_digit = false;
    for c in s.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).expect("test literal")
    }

    #[test]
    fn max_price_value() {
        assert_eq!(MAX_PRICE, dec("999999999.99"));
    }

    #[test]
    fn format_groups_and_trims() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.format(dec("1234567.89")), "1.234.567,89");
        assert_eq!(fmt.format(dec("1234.5")), "1.234,5");
        assert_eq!(fmt.format(dec("1234.50")), "1.234,5");
        assert_eq!(fmt.format(dec("999")), "999");
        assert_eq!(fmt.format(dec("0.5")), "0,5");
    }

    #[test]
    fn format_empty_for_zero_and_negative() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.format(Decimal::ZERO), "");
        assert_eq!(fmt.format(dec("-12.5")), "");
    }

    #[test]
    fn format_clamps_to_max() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.format(dec("1000000000")), "999.999.999,99");
    }

    #[test]
    fn parse_strips_grouping_and_maps_comma() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.parse("1.234.567,89"), dec("1234567.89"));
        assert_eq!(fmt.parse(" 1.234,5 "), dec("1234.5"));
        assert_eq!(fmt.parse("999"), dec("999"));
    }

    #[test]
    fn parse_garbage_yields_zero() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.parse(""), Decimal::ZERO);
        assert_eq!(fmt.parse("abc"), Decimal::ZERO);
        assert_eq!(fmt.parse(","), Decimal::ZERO);
    }

    #[test]
    fn parse_clamps_bounds() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.parse("9.999.999.999,99"), MAX_PRICE);
        assert_eq!(fmt.parse("-5"), Decimal::ZERO);
        // More digits than Decimal can hold is still "above the cap".
        assert_eq!(fmt.parse("99999999999999999999999999999999"), MAX_PRICE);
    }

    #[test]
    fn round_trip_for_formatted_amounts() {
        let fmt = PriceFormat::es_co();
        for raw in ["0.01", "1", "999.99", "1234.5", "1234567.89", "999999999.99"] {
            let amount = dec(raw);
            assert_eq!(fmt.parse(&fmt.format(amount)), amount, "round trip {raw}");
        }
    }

    #[test]
    fn format_parse_format_is_idempotent() {
        let fmt = PriceFormat::es_co();
        for raw in ["0.5", "20", "1234.56", "987654321.09"] {
            let once = fmt.format(dec(raw));
            assert_eq!(fmt.format(fmt.parse(&once)), once, "idempotent {raw}");
        }
    }

    #[test]
    fn keystroke_discards_non_digits() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.on_keystroke("12a3$4"), "1.234");
        assert_eq!(fmt.on_keystroke("abc"), "");
    }

    #[test]
    fn keystroke_keeps_only_first_separator() {
        let fmt = PriceFormat::es_co();
        // "1,234,56" -> first comma splits, remaining digits join the
        // decimal part and are truncated to two.
        assert_eq!(fmt.on_keystroke("1,234,56"), "1,23");
    }

    #[test]
    fn keystroke_truncates_decimals_to_two() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.on_keystroke("12,999"), "12,99");
    }

    #[test]
    fn keystroke_lone_separator_stays() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.on_keystroke(","), ",");
    }

    #[test]
    fn keystroke_decimal_digits_materialize_zero_integer() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.on_keystroke(",5"), "0,5");
        assert_eq!(fmt.on_keystroke(",55"), "0,55");
    }

    #[test]
    fn keystroke_bare_zero_clears() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.on_keystroke("0,5"), "0,5");
        assert_eq!(fmt.on_keystroke("0,"), "0,");
        assert_eq!(fmt.on_keystroke("0"), "");
        assert_eq!(fmt.on_keystroke(""), "");
    }

    #[test]
    fn keystroke_groups_integer_part() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.on_keystroke("1234567"), "1.234.567");
        assert_eq!(fmt.on_keystroke("1234,5"), "1.234,5");
    }

    #[test]
    fn keystroke_clamps_to_max() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.on_keystroke("1000000000"), "999.999.999");
        assert_eq!(
            fmt.on_keystroke("99999999999999999999999999999999"),
            "999.999.999"
        );
    }

    #[test]
    fn blur_canonicalizes() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.on_blur("1234,5"), "1.234,5");
        assert_eq!(fmt.on_blur(","), "");
        assert_eq!(fmt.on_blur(""), "");
        assert_eq!(fmt.on_blur("999.999.999,99"), "999.999.999,99");
    }

    #[test]
    fn currency_always_two_decimals() {
        let fmt = PriceFormat::es_co();
        assert_eq!(fmt.format_currency(dec("1234.5")), "$ 1.234,50");
        assert_eq!(fmt.format_currency(dec("20")), "$ 20,00");
        assert_eq!(fmt.format_currency(Decimal::ZERO), "$ 0,00");
    }
}
