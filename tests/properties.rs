use adcalc::{compute, CalculatorInput};
use proptest::prelude::*;

fn field() -> impl Strategy<Value = f64> {
    0.0..1_000_000.0f64
}

fn percent() -> impl Strategy<Value = f64> {
    0.0..100.0f64
}

proptest! {
    /// Property: for any finite input the three ratios are finite, and
    /// exactly 0 whenever their divisor is 0.
    #[test]
    fn prop_ratios_are_finite_or_guarded(
        product_price in field(),
        ad_cost in field(),
        reach in field(),
        click_conversion in percent(),
        cart_conversion in percent(),
        order_conversion in percent(),
    ) {
        let input = CalculatorInput {
            product_name: String::new(),
            product_price,
            ad_cost,
            reach,
            click_conversion,
            cart_conversion,
            order_conversion,
        };
        let results = compute(&input);

        prop_assert!(results.romi.is_finite());
        prop_assert!(results.drr.is_finite());
        prop_assert!(results.cpr.is_finite());

        if ad_cost == 0.0 {
            prop_assert_eq!(results.romi, 0.0);
        }
        if results.revenue == 0.0 {
            prop_assert_eq!(results.drr, 0.0);
        }
        if results.orders == 0.0 {
            prop_assert_eq!(results.cpr, 0.0);
        }
    }

    /// Property: conversions in [0, 100] keep the funnel narrowing.
    #[test]
    fn prop_funnel_narrows_for_in_range_conversions(
        reach in field(),
        click_conversion in percent(),
        cart_conversion in percent(),
        order_conversion in percent(),
    ) {
        let input = CalculatorInput {
            reach,
            click_conversion,
            cart_conversion,
            order_conversion,
            ..Default::default()
        };
        let results = compute(&input);

        prop_assert!(results.clicks <= reach);
        prop_assert!(results.carts <= results.clicks);
        prop_assert!(results.orders <= results.carts);
    }

    /// Property: growing reach with everything else fixed and positive
    /// strictly grows every funnel figure.
    #[test]
    fn prop_reach_is_monotone(
        reach in 1.0..1_000_000.0f64,
        growth in 1.01..10.0f64,
        click_conversion in 1.0..100.0f64,
        cart_conversion in 1.0..100.0f64,
        order_conversion in 1.0..100.0f64,
        product_price in 1.0..100_000.0f64,
        ad_cost in 1.0..100_000.0f64,
    ) {
        let input = CalculatorInput {
            product_name: String::new(),
            product_price,
            ad_cost,
            reach,
            click_conversion,
            cart_conversion,
            order_conversion,
        };
        let mut grown = input.clone();
        grown.reach = reach * growth;

        let before = compute(&input);
        let after = compute(&grown);

        prop_assert!(after.clicks > before.clicks);
        prop_assert!(after.carts > before.carts);
        prop_assert!(after.orders > before.orders);
        prop_assert!(after.revenue > before.revenue);
    }

    /// Property: compute is a pure function; identical input yields
    /// bit-identical output.
    #[test]
    fn prop_compute_is_idempotent(
        product_price in field(),
        ad_cost in field(),
        reach in field(),
        click_conversion in percent(),
        cart_conversion in percent(),
        order_conversion in percent(),
    ) {
        let input = CalculatorInput {
            product_name: String::new(),
            product_price,
            ad_cost,
            reach,
            click_conversion,
            cart_conversion,
            order_conversion,
        };
        let first = compute(&input);
        let second = compute(&input);

        prop_assert_eq!(first.clicks.to_bits(), second.clicks.to_bits());
        prop_assert_eq!(first.carts.to_bits(), second.carts.to_bits());
        prop_assert_eq!(first.orders.to_bits(), second.orders.to_bits());
        prop_assert_eq!(first.revenue.to_bits(), second.revenue.to_bits());
        prop_assert_eq!(first.romi.to_bits(), second.romi.to_bits());
        prop_assert_eq!(first.drr.to_bits(), second.drr.to_bits());
        prop_assert_eq!(first.cpr.to_bits(), second.cpr.to_bits());
    }
}
