//! Vietnamese dong amounts.
//!
//! The storefront only ever deals in whole dong, so amounts are plain `i64`
//! values with no minor unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Suffix used for rendered prices.
pub const PRICE_SUFFIX: &str = "đ";

/// Suffix used in price-range labels.
pub const RANGE_SUFFIX: &str = "₫";

/// An amount of Vietnamese dong.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Vnd(pub i64);

impl Vnd {
    /// Create an amount.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero dong.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Raw amount.
    pub fn amount(&self) -> i64 {
        self.0
    }

    /// Apply a percentage discount, rounding half up to the nearest dong.
    ///
    /// ```
    /// use shop_commerce::money::Vnd;
    /// assert_eq!(Vnd::new(200_000).discounted(10.0), Vnd::new(180_000));
    /// assert_eq!(Vnd::new(99_999).discounted(50.0), Vnd::new(50_000));
    /// ```
    pub fn discounted(&self, percent_off: f64) -> Vnd {
        let exact = self.0 as f64 * (1.0 - percent_off / 100.0);
        Vnd((exact + 0.5).floor() as i64)
    }

    /// Checked multiplication by a quantity.
    pub fn try_multiply(&self, factor: u32) -> Option<Vnd> {
        self.0.checked_mul(i64::from(factor)).map(Vnd)
    }

    /// Group digits by thousands with `.` (vi-VN style), no suffix.
    pub fn display_amount(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if self.0 < 0 {
            grouped.push('-');
        }
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        grouped
    }

    /// Format for display next to a product (e.g., "100.000đ").
    pub fn display(&self) -> String {
        format!("{}{}", self.display_amount(), PRICE_SUFFIX)
    }

    /// Format for a price-range label (e.g., "200.000₫").
    pub fn label(&self) -> String {
        format!("{}{}", self.display_amount(), RANGE_SUFFIX)
    }
}

impl Add for Vnd {
    type Output = Vnd;

    fn add(self, other: Vnd) -> Vnd {
        Vnd(self.0 + other.0)
    }
}

impl Mul<i64> for Vnd {
    type Output = Vnd;

    fn mul(self, factor: i64) -> Vnd {
        Vnd(self.0 * factor)
    }
}

impl From<i64> for Vnd {
    fn from(amount: i64) -> Self {
        Vnd(amount)
    }
}

impl fmt::Display for Vnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
