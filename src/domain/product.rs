use std::fmt;
use std::str::FromStr;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The five products the order calculator sells. The view's select control
/// submits the lowercase name as its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductId {
    Laptop,
    Smartphone,
    Tablet,
    Headphones,
    Keyboard,
}

/// A catalog entry: display name plus the unit price in rubles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub unit_price: Decimal,
}

impl ProductId {
    /// Catalog lookup. Infallible: unknown keys are rejected when the view's
    /// select value is parsed, before an id ever exists.
    pub fn info(self) -> Product {
        match self {
            ProductId::Laptop => Product { name: "Laptop", unit_price: dec!(2999.99) },
            ProductId::Smartphone => Product { name: "Smartphone", unit_price: dec!(1599.50) },
            ProductId::Tablet => Product { name: "Tablet", unit_price: dec!(899.99) },
            ProductId::Headphones => Product { name: "Headphones", unit_price: dec!(249.99) },
            ProductId::Keyboard => Product { name: "Keyboard", unit_price: dec!(179.50) },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProductId::Laptop => "laptop",
            ProductId::Smartphone => "smartphone",
            ProductId::Tablet => "tablet",
            ProductId::Headphones => "headphones",
            ProductId::Keyboard => "keyboard",
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "laptop" => Ok(ProductId::Laptop),
            "smartphone" => Ok(ProductId::Smartphone),
            "tablet" => Ok(ProductId::Tablet),
            "headphones" => Ok(ProductId::Headphones),
            "keyboard" => Ok(ProductId::Keyboard),
            other => Err(format!("unknown product: {}", other)),
        }
    }
}
