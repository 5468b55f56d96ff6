use crate::catalog::{SkipOption, total_price};

pub const DEFAULT_MIN_PRICE: f64 = 0.0;
pub const DEFAULT_MAX_PRICE: f64 = 1500.0;

/// User-controlled inclusion criteria.
///
/// `min_price <= max_price` is not enforced: crossed bounds simply match
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterState {
    pub min_price: f64,
    pub max_price: f64,
    pub show_road_only: bool,
    pub show_heavy_waste: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            show_road_only: false,
            show_heavy_waste: false,
        }
    }
}

impl FilterState {
    /// Whether a single option passes every active criterion.
    pub fn matches(&self, option: &SkipOption) -> bool {
        let total = total_price(option);
        if total < self.min_price || total > self.max_price {
            return false;
        }
        if self.show_road_only && !option.allowed_on_road {
            return false;
        }
        if self.show_heavy_waste && !option.allows_heavy_waste {
            return false;
        }
        true
    }
}

/// Range offered by the price sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    pub min_price: f64,
    pub max_price: f64,
}

impl PriceBounds {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min_price, self.max_price)
    }
}

/// Narrow `options` to those matching `filters`, keeping their order.
pub fn apply_filters(options: &[SkipOption], filters: &FilterState) -> Vec<SkipOption> {
    options
        .iter()
        .filter(|option| filters.matches(option))
        .cloned()
        .collect()
}

/// Slider range for the price filter.
///
/// The observed total price range is only reported to the log; the sliders
/// always span the fixed default range.
pub fn price_bounds(options: &[SkipOption]) -> PriceBounds {
    let fixed = PriceBounds {
        min_price: DEFAULT_MIN_PRICE,
        max_price: DEFAULT_MAX_PRICE,
    };
    if options.is_empty() {
        return fixed;
    }

    let (lowest, highest) = options
        .iter()
        .map(total_price)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
            (lo.min(t), hi.max(t))
        });
    tracing::debug!(lowest, highest, "observed total price range");

    fixed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;
    use proptest::prelude::*;

    fn catalog() -> Vec<SkipOption> {
        let mut a = sample(1, 4, 278.0);
        a.allows_heavy_waste = true;
        let mut b = sample(2, 6, 305.0);
        b.allowed_on_road = false;
        let mut c = sample(3, 20, 992.0);
        c.allowed_on_road = false;
        c.allows_heavy_waste = true;
        let d = sample(4, 40, 1100.0); // 1320 with VAT
        vec![a, b, c, d]
    }

    fn ids(options: &[SkipOption]) -> Vec<String> {
        options.iter().map(|o| o.id.to_string()).collect()
    }

    #[test]
    fn test_default_filter_returns_everything() {
        let options = catalog();
        assert_eq!(apply_filters(&options, &FilterState::default()), options);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let options = catalog();
        let filters = FilterState {
            min_price: 366.0,
            max_price: 1200.0,
            ..FilterState::default()
        };
        // 333.6 below, 366 on the lower edge, 1190.4 inside, 1320 above
        let res = apply_filters(&options, &filters);
        assert_eq!(ids(&res), vec!["2", "3"]);
    }

    #[test]
    fn test_crossed_bounds_yield_empty() {
        let filters = FilterState {
            min_price: 900.0,
            max_price: 100.0,
            ..FilterState::default()
        };
        assert!(apply_filters(&catalog(), &filters).is_empty());
    }

    #[test]
    fn test_road_only() {
        let filters = FilterState {
            show_road_only: true,
            ..FilterState::default()
        };
        assert_eq!(ids(&apply_filters(&catalog(), &filters)), vec!["1", "4"]);
    }

    #[test]
    fn test_heavy_waste_only() {
        let filters = FilterState {
            show_heavy_waste: true,
            ..FilterState::default()
        };
        assert_eq!(ids(&apply_filters(&catalog(), &filters)), vec!["1", "3"]);
    }

    #[test]
    fn test_flags_are_conjunctive() {
        let filters = FilterState {
            show_road_only: true,
            show_heavy_waste: true,
            ..FilterState::default()
        };
        assert_eq!(ids(&apply_filters(&catalog(), &filters)), vec!["1"]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(apply_filters(&[], &FilterState::default()).is_empty());
    }

    #[test]
    fn test_price_bounds_fixed_regardless_of_data() {
        let fixed = PriceBounds {
            min_price: 0.0,
            max_price: 1500.0,
        };
        assert_eq!(price_bounds(&[]), fixed);
        assert_eq!(price_bounds(&catalog()), fixed);
        assert_eq!(price_bounds(&[sample(1, 40, 9000.0)]), fixed);
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = price_bounds(&[]);
        assert_eq!(bounds.clamp(-10.0), 0.0);
        assert_eq!(bounds.clamp(1510.0), 1500.0);
        assert_eq!(bounds.clamp(700.0), 700.0);
    }

    fn arb_option() -> impl Strategy<Value = SkipOption> {
        (
            any::<i64>(),
            1u32..50,
            0.0f64..2000.0,
            0.0f64..30.0,
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(id, size, price, vat, road, heavy)| {
                let mut option = sample(id, size, price);
                option.vat = vat;
                option.allowed_on_road = road;
                option.allows_heavy_waste = heavy;
                option
            })
    }

    fn arb_filters() -> impl Strategy<Value = FilterState> {
        (0.0f64..1500.0, 0.0f64..1500.0, any::<bool>(), any::<bool>()).prop_map(
            |(min_price, max_price, show_road_only, show_heavy_waste)| FilterState {
                min_price,
                max_price,
                show_road_only,
                show_heavy_waste,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_idempotent(options in prop::collection::vec(arb_option(), 0..20), filters in arb_filters()) {
            let once = apply_filters(&options, &filters);
            let twice = apply_filters(&once, &filters);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_preserves_order(options in prop::collection::vec(arb_option(), 0..20), filters in arb_filters()) {
            let res = apply_filters(&options, &filters);
            let mut cursor = options.iter();
            for kept in &res {
                prop_assert!(cursor.any(|o| o == kept));
            }
        }

        #[test]
        fn prop_road_flag_independent_of_price(option in arb_option()) {
            let open = FilterState {
                min_price: f64::NEG_INFINITY,
                max_price: f64::INFINITY,
                show_road_only: true,
                show_heavy_waste: false,
            };
            prop_assert_eq!(open.matches(&option), option.allowed_on_road);
            let off = FilterState { show_road_only: false, ..open };
            prop_assert!(off.matches(&option));
        }

        #[test]
        fn prop_crossed_bounds_empty(options in prop::collection::vec(arb_option(), 0..20), lo in 0.0f64..1500.0, gap in 0.01f64..500.0) {
            let filters = FilterState {
                min_price: lo + gap,
                max_price: lo,
                ..FilterState::default()
            };
            prop_assert!(apply_filters(&options, &filters).is_empty());
        }
    }
}
