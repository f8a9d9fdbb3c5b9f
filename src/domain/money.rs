use rust_decimal::{Decimal, RoundingStrategy};

/// No-break space, the thousands separator and currency spacer the ru-RU
/// locale uses.
const NBSP: char = '\u{a0}';

/// Formats an amount of rubles the way the browser's ru-RU currency
/// formatter does: digits grouped in threes with no-break spaces, a comma
/// before the fraction digits, and a trailing ruble sign.
///
/// `fraction_digits` is exact, not a maximum: the order calculator renders
/// two fraction digits, the service calculator renders none.
pub fn format_rub(amount: Decimal, fraction_digits: u32) -> String {
    let rounded = amount
        .round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    // "1234.5" -> ("1234", "50") at two fraction digits
    let unsigned = rounded.abs();
    let text = format!("{:.*}", fraction_digits as usize, unsigned);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + 8);
    if negative {
        out.push('-');
    }
    let digits: Vec<char> = int_part.chars().collect();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(NBSP);
        }
        out.push(*digit);
    }
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out.push(NBSP);
    out.push('₽');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_two_fraction_digits_with_grouping() {
        assert_eq!(format_rub(dec!(8999.97), 2), "8\u{a0}999,97\u{a0}₽");
        assert_eq!(format_rub(dec!(1599.50), 2), "1\u{a0}599,50\u{a0}₽");
        assert_eq!(format_rub(dec!(179.5), 2), "179,50\u{a0}₽");
        assert_eq!(format_rub(dec!(0), 2), "0,00\u{a0}₽");
    }

    #[test]
    fn test_whole_ruble_rendering() {
        assert_eq!(format_rub(dec!(2500), 0), "2\u{a0}500\u{a0}₽");
        assert_eq!(format_rub(dec!(500), 0), "500\u{a0}₽");
        assert_eq!(format_rub(dec!(1234567), 0), "1\u{a0}234\u{a0}567\u{a0}₽");
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(format_rub(dec!(1.5), 0), "2\u{a0}₽");
        assert_eq!(format_rub(dec!(2.345), 2), "2,35\u{a0}₽");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_rub(dec!(-1250.25), 2), "-1\u{a0}250,25\u{a0}₽");
    }
}
