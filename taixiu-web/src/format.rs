//! Display formatting: coin amounts, deltas, timestamps, labels.

use taixiu_game::{Outcome, Side};

/// Dot-grouped thousands, vi-VN style: `10000` renders as `"10.000"`.
#[must_use]
pub fn format_coins(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Signed delta for history lines: `"+1.000"` on a win, `"-500"` on a loss.
#[must_use]
pub fn format_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", format_coins(delta))
    } else {
        format_coins(delta)
    }
}

/// Player-facing label for a wagerable side.
#[must_use]
pub fn side_label(side: Side) -> &'static str {
    match side {
        Side::Over => "Tài",
        Side::Under => "Xỉu",
    }
}

/// Player-facing label for a round outcome.
#[must_use]
pub fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Over => "Tài",
        Outcome::Under => "Xỉu",
        Outcome::Triple => "Tam hoa",
    }
}

/// Locale time string for history entries. Opaque display text; settlement
/// never reads it back.
#[must_use]
pub fn now_time_string() -> String {
    js_sys::Date::new_0().to_locale_time_string("vi-VN").into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_coins(0), "0");
        assert_eq!(format_coins(999), "999");
        assert_eq!(format_coins(10_000), "10.000");
        assert_eq!(format_coins(1_234_567), "1.234.567");
        assert_eq!(format_coins(-9_500), "-9.500");
    }

    #[test]
    fn deltas_carry_an_explicit_sign_on_wins() {
        assert_eq!(format_delta(1_000), "+1.000");
        assert_eq!(format_delta(-500), "-500");
    }

    #[test]
    fn labels_match_the_table_wording() {
        assert_eq!(side_label(Side::Over), "Tài");
        assert_eq!(outcome_label(Outcome::Triple), "Tam hoa");
    }
}
