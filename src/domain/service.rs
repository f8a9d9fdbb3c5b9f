use std::fmt;
use std::str::FromStr;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A service tier with its base price and capability flags.
///
/// Standard exposes the add-on selector, Premium exposes the surcharge
/// toggle, Basic exposes neither. A control a tier does not expose keeps its
/// stored value but is excluded from pricing through these flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceTier {
    Basic,
    Standard,
    Premium,
}

impl ServiceTier {
    pub fn base_price(self) -> Decimal {
        match self {
            ServiceTier::Basic => dec!(500),
            ServiceTier::Standard => dec!(800),
            ServiceTier::Premium => dec!(1200),
        }
    }

    pub fn offers_add_on(self) -> bool {
        matches!(self, ServiceTier::Standard)
    }

    pub fn offers_surcharge(self) -> bool {
        matches!(self, ServiceTier::Premium)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ServiceTier::Basic => "Basic service",
            ServiceTier::Standard => "Standard service",
            ServiceTier::Premium => "Premium service",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceTier::Basic => "basic",
            ServiceTier::Standard => "standard",
            ServiceTier::Premium => "premium",
        }
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(ServiceTier::Basic),
            "standard" => Ok(ServiceTier::Standard),
            "premium" => Ok(ServiceTier::Premium),
            other => Err(format!("unknown service tier: {}", other)),
        }
    }
}

/// An optional add-on priced per unit, flat across tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOn {
    None,
    Fast,
    Priority,
    Vip,
}

impl AddOn {
    pub fn price(self) -> Decimal {
        match self {
            AddOn::None => dec!(0),
            AddOn::Fast => dec!(200),
            AddOn::Priority => dec!(400),
            AddOn::Vip => dec!(600),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            AddOn::None => "Standard handling",
            AddOn::Fast => "Fast track",
            AddOn::Priority => "Priority handling",
            AddOn::Vip => "VIP handling",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AddOn::None => "default",
            AddOn::Fast => "fast",
            AddOn::Priority => "priority",
            AddOn::Vip => "vip",
        }
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddOn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(AddOn::None),
            "fast" => Ok(AddOn::Fast),
            "priority" => Ok(AddOn::Priority),
            "vip" => Ok(AddOn::Vip),
            other => Err(format!("unknown add-on: {}", other)),
        }
    }
}
