use serde::{Deserialize, Serialize};

/// One snapshot of the calculator form. Fields default to zero / empty so a
/// partially filled form is always computable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Display-only label, never enters the arithmetic.
    #[serde(default)]
    pub product_name: String,

    /// Unit price of the advertised product.
    #[serde(default)]
    pub product_price: f64,

    /// Total ad spend for the campaign.
    #[serde(default)]
    pub ad_cost: f64,

    /// Audience reach (impressions).
    #[serde(default)]
    pub reach: f64,

    /// Reach -> click conversion, percent. Expected in [0, 100], not clamped.
    #[serde(default)]
    pub click_conversion: f64,

    /// Click -> cart conversion, percent. Expected in [0, 100], not clamped.
    #[serde(default)]
    pub cart_conversion: f64,

    /// Cart -> order conversion, percent. Expected in [0, 100], not clamped.
    #[serde(default)]
    pub order_conversion: f64,
}

/// Derived funnel volumes and efficiency ratios. Values are stored unrounded;
/// rounding and grouping happen in the display layer only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    pub clicks: f64,
    pub carts: f64,
    pub orders: f64,
    pub revenue: f64,
    /// Return on marketing investment, signed percent.
    pub romi: f64,
    /// Ad spend as a share of revenue, percent.
    pub drr: f64,
    /// Ad spend per resulting order.
    pub cpr: f64,
}

/// Input echoed alongside its derived results, so serialized reports are
/// self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    pub input: CalculatorInput,
    pub results: CalculatorResult,
}

impl CalculationReport {
    pub fn new(input: CalculatorInput, results: CalculatorResult) -> Self {
        Self { input, results }
    }
}
