//! Discounts and the catalog merge.

use crate::catalog::{EnrichedProduct, Product};
use crate::ids::ProductCode;
use crate::money::Vnd;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A time-limited discount on one product code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discount {
    /// Product code this discount targets.
    #[serde(rename = "maSanPham")]
    pub code: ProductCode,
    /// Price the percentage is taken from.
    #[serde(rename = "giaGoc")]
    pub original_price: Vnd,
    /// Percent off, 0 to 100.
    #[serde(rename = "phanTramGiam")]
    pub percent_off: f64,
    /// Instant after which the discount no longer applies. `None` when the
    /// document carried no readable date; such a discount never applies.
    #[serde(rename = "ngayKetThuc", default, deserialize_with = "deserialize_expiry")]
    pub ends_at: Option<DateTime<Utc>>,
}

impl Discount {
    /// A discount is active strictly before its end instant.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.ends_at.is_some_and(|ends_at| ends_at > now)
    }

    /// Sale price computed from the original price.
    pub fn sale_price(&self) -> Vnd {
        self.original_price.discounted(self.percent_off)
    }
}

/// Discount metadata carried by an enriched product (`giamGia`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppliedDiscount {
    #[serde(rename = "giaGoc")]
    pub original_price: Vnd,
    #[serde(rename = "phanTramGiam")]
    pub percent_off: f64,
}

impl AppliedDiscount {
    /// Badge text, e.g. "-10%".
    pub fn badge(&self) -> String {
        format!("-{}%", self.percent_off)
    }
}

/// Resolve every product's effective price against the discount list.
///
/// The first discount whose code matches is the only one considered; if it
/// has expired at `now` the product keeps its base price even when a later
/// entry for the same code would still be running. Output order follows
/// `products`.
pub fn merge_discounts(
    products: &[Product],
    discounts: &[Discount],
    now: DateTime<Utc>,
) -> Vec<EnrichedProduct> {
    products
        .iter()
        .map(|product| {
            let discount = discounts.iter().find(|d| d.code == product.code);
            match discount {
                Some(d) if d.is_active(now) => EnrichedProduct {
                    product: product.clone(),
                    effective_price: d.sale_price(),
                    discount: Some(AppliedDiscount {
                        original_price: d.original_price,
                        percent_off: d.percent_off,
                    }),
                },
                _ => EnrichedProduct::undiscounted(product.clone()),
            }
        })
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExpiry {
    Millis(i64),
    FractionalMillis(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Epoch milliseconds or a date string. Anything unreadable becomes `None`
/// so one bad entry does not fail the whole document.
fn deserialize_expiry<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawExpiry>::deserialize(deserializer)? {
        Some(RawExpiry::Millis(ms)) => DateTime::from_timestamp_millis(ms),
        Some(RawExpiry::FractionalMillis(ms)) if ms.is_finite() => {
            DateTime::from_timestamp_millis(ms.trunc() as i64)
        }
        Some(RawExpiry::Text(raw)) => parse_expiry(&raw),
        _ => None,
    })
}

/// RFC 3339, a zone-less date-time (read as UTC), a month-name date-time
/// such as "Jun 16, 2024 00:00:00" or a bare date (UTC midnight).
pub(crate) fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%b %d, %Y %H:%M:%S",
        "%B %d, %Y %H:%M:%S",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
