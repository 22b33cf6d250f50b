//! # Pricing
//!
//! Order totals: the drink's base price, a size surcharge, and a flat fee per
//! extra. Prices are computed once when an order is placed.

/// Added for a medium drink.
pub const MEDIUM_SURCHARGE: f64 = 0.50;
/// Added for a large drink.
pub const LARGE_SURCHARGE: f64 = 1.00;
/// Added for each extra, whatever it is.
pub const EXTRA_PRICE: f64 = 0.50;

/// Cup sizes that affect the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    #[default]
    Small,
    Medium,
    Large,
}

impl Size {
    /// Reads a size label. Anything other than `medium` or `large`, including
    /// an empty or misspelled label, prices as small.
    pub fn from_label(label: &str) -> Self {
        match label {
            "medium" => Size::Medium,
            "large" => Size::Large,
            _ => Size::Small,
        }
    }

    pub fn surcharge(self) -> f64 {
        match self {
            Size::Small => 0.0,
            Size::Medium => MEDIUM_SURCHARGE,
            Size::Large => LARGE_SURCHARGE,
        }
    }
}

/// Total price of a drink of `size` with `extra_count` extras.
pub fn compute_price(base_price: f64, size: &str, extra_count: usize) -> f64 {
    base_price + Size::from_label(size).surcharge() + EXTRA_PRICE * extra_count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_and_extras_add_up() {
        assert_eq!(compute_price(2.00, "medium", 2), 3.50);
        assert_eq!(compute_price(3.50, "large", 0), 4.50);
        assert_eq!(compute_price(2.50, "small", 3), 4.00);
    }

    #[test]
    fn test_unrecognized_sizes_price_as_small() {
        assert_eq!(compute_price(3.00, "", 0), 3.00);
        assert_eq!(compute_price(3.00, "venti", 1), 3.50);
        assert_eq!(compute_price(3.00, "Large", 0), 3.00);
        assert_eq!(Size::from_label("tall"), Size::Small);
    }
}
