use serde::{Deserialize, Serialize};
use std::fmt;

/// Ratio of cubic yards per pound of base price above which a skip earns
/// the "Most Efficient" badge.
pub const EFFICIENCY_THRESHOLD: f64 = 0.1;

/// Opaque skip identifier. The API sends numbers, but only equality matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkipId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SkipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipId::Number(n) => write!(f, "{n}"),
            SkipId::Text(s) => f.write_str(s),
        }
    }
}

/// A single skip hire offer as returned by the catalog endpoint.
///
/// Extra fields in the payload (postcode, transport cost, timestamps...) are
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipOption {
    pub id: SkipId,
    pub size: u32,
    pub price_before_vat: f64,
    pub vat: f64,
    pub hire_period_days: u32,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

/// Picture class used for the card artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipArt {
    Small,
    Medium,
    Large,
}

impl SkipArt {
    pub fn for_size(size: u32) -> Self {
        if size == 4 {
            Self::Small
        } else if size >= 20 {
            Self::Large
        } else {
            Self::Medium
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Small => "▙▟",
            Self::Medium => "▙▄▟",
            Self::Large => "▙▄▄▄▟",
        }
    }
}

/// VAT charged on top of the base price.
pub fn vat_amount(option: &SkipOption) -> f64 {
    option.price_before_vat * option.vat / 100.0
}

/// Base price plus VAT. Not rounded; see [`format_gbp`] for display.
pub fn total_price(option: &SkipOption) -> f64 {
    option.price_before_vat + vat_amount(option)
}

/// Size per unit of *base* price, not total.
///
/// A zero base price yields infinity (efficient) unless the size is also
/// zero, in which case the ratio is NaN and the comparison is false.
pub fn is_most_efficient(option: &SkipOption) -> bool {
    f64::from(option.size) / option.price_before_vat > EFFICIENCY_THRESHOLD
}

/// Two-decimal pound string, e.g. `£120.00`.
pub fn format_gbp(amount: f64) -> String {
    format!("£{amount:.2}")
}

#[cfg(test)]
pub(crate) fn sample(id: i64, size: u32, price_before_vat: f64) -> SkipOption {
    SkipOption {
        id: SkipId::Number(id),
        size,
        price_before_vat,
        vat: 20.0,
        hire_period_days: 14,
        allowed_on_road: true,
        allows_heavy_waste: false,
    }
}
