use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

// Quantity pattern: no leading zero, at most three digits.
static QUANTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[1-9][0-9]{0,2}$").expect("quantity pattern is valid")
});

/// Accepts exactly the integers 1..=999 written without a leading zero.
pub fn validate_quantity(text: &str) -> bool {
    if !QUANTITY_RE.is_match(text) {
        return false;
    }
    matches!(text.parse::<u32>(), Ok(n) if (1..=999).contains(&n))
}

/// Exact decimal product, no rounding beyond what display formatting does.
pub fn compute_total(unit_price: Decimal, quantity: u32) -> Decimal {
    unit_price * Decimal::from(quantity)
}
