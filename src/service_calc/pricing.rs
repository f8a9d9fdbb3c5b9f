use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{AddOn, ServiceTier};

/// One computed price, broken into the parts the itemized view shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub base_total: Decimal,
    pub add_on_total: Decimal,
    pub multiplier: Decimal,
    pub final_total: Decimal,
}

impl Quote {
    /// True when the +50% surcharge entered the formula.
    pub fn surcharge_applied(&self) -> bool {
        self.multiplier != Decimal::ONE
    }
}

/// Pure pricing formula; derived values are never stored, only recomputed.
///
/// The tier's capability flags gate the optional parts: a stale add-on or
/// surcharge selection left in a control the tier does not expose is priced
/// at zero.
pub fn quote(tier: ServiceTier, quantity: u32, add_on: AddOn, surcharge: bool) -> Quote {
    let quantity = Decimal::from(quantity);
    let base_total = tier.base_price() * quantity;
    let add_on_total = if tier.offers_add_on() {
        add_on.price() * quantity
    } else {
        Decimal::ZERO
    };
    let multiplier = if tier.offers_surcharge() && surcharge {
        dec!(1.5)
    } else {
        Decimal::ONE
    };
    let final_total = (base_total + add_on_total) * multiplier;

    Quote { base_total, add_on_total, multiplier, final_total }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_is_base_price_times_quantity() {
        let q = quote(ServiceTier::Basic, 5, AddOn::None, false);
        assert_eq!(q.final_total, dec!(2500));
        assert_eq!(q.add_on_total, Decimal::ZERO);
        assert!(!q.surcharge_applied());
    }

    #[test]
    fn test_standard_prices_the_add_on_per_unit() {
        let q = quote(ServiceTier::Standard, 2, AddOn::Fast, false);
        assert_eq!(q.base_total, dec!(1600));
        assert_eq!(q.add_on_total, dec!(400));
        assert_eq!(q.final_total, dec!(2000));
    }

    #[test]
    fn test_premium_surcharge_multiplies_by_one_and_a_half() {
        let q = quote(ServiceTier::Premium, 1, AddOn::None, true);
        assert_eq!(q.final_total, dec!(1800));
        assert!(q.surcharge_applied());
    }

    #[test]
    fn test_stale_selections_are_gated_by_capabilities() {
        // Basic ignores both a selected add-on and the surcharge flag
        let q = quote(ServiceTier::Basic, 3, AddOn::Vip, true);
        assert_eq!(q.final_total, dec!(1500));

        // Standard ignores the surcharge flag but prices the add-on
        let q = quote(ServiceTier::Standard, 3, AddOn::Vip, true);
        assert_eq!(q.final_total, dec!(4200));

        // Premium ignores the add-on but honours the surcharge
        let q = quote(ServiceTier::Premium, 3, AddOn::Vip, true);
        assert_eq!(q.final_total, dec!(5400));
    }

    #[test]
    fn test_same_state_same_quote() {
        let a = quote(ServiceTier::Standard, 42, AddOn::Priority, false);
        let b = quote(ServiceTier::Standard, 42, AddOn::Priority, false);
        assert_eq!(a, b);
    }
}
