//! Discounted order totals

use serde::{Deserialize, Serialize};

/// An order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub special: bool,
}

/// Discount percentages; either may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Discounts {
    #[serde(default)]
    pub default: Option<f64>,
    #[serde(default)]
    pub special: Option<f64>,
}

impl Discounts {
    /// Percentage that applies to `product`
    ///
    /// Special products only ever get the special discount and the others
    /// only the default one; a missing percentage means no discount.
    #[must_use]
    pub fn percentage_for(&self, product: &Product) -> f64 {
        let percentage = if product.special {
            self.special
        } else {
            self.default
        };
        percentage.unwrap_or(0.0)
    }
}

/// Sum of `price * quantity` with each line's discount applied
#[must_use]
pub fn get_total(products: &[Product], discounts: &Discounts) -> f64 {
    products
        .iter()
        .map(|product| {
            let discount = discounts.percentage_for(product) / 100.0;
            let unit_price = product.price - product.price * discount;
            unit_price * f64::from(product.quantity)
        })
        .sum()
}
