use crate::core::{CalculatorInput, CalculatorResult};

/// Derive funnel volumes, revenue, and efficiency ratios from one input
/// snapshot.
///
/// Pure and total: no I/O, no panics. Each ratio carries an explicit
/// zero-guard on its divisor and short-circuits to 0 instead of producing
/// an infinity or NaN. Conversion percentages are not clamped, so
/// out-of-range or negative inputs propagate algebraically.
pub fn compute(input: &CalculatorInput) -> CalculatorResult {
    let clicks = input.reach * input.click_conversion / 100.0;
    let carts = clicks * input.cart_conversion / 100.0;
    let orders = carts * input.order_conversion / 100.0;
    let revenue = orders * input.product_price;

    let romi = if input.ad_cost == 0.0 {
        0.0
    } else {
        (revenue - input.ad_cost) / input.ad_cost * 100.0
    };

    let drr = if revenue == 0.0 {
        0.0
    } else {
        input.ad_cost / revenue * 100.0
    };

    let cpr = if orders == 0.0 {
        0.0
    } else {
        input.ad_cost / orders
    };

    CalculatorResult {
        clicks,
        carts,
        orders,
        revenue,
        romi,
        drr,
        cpr,
    }
}
