use serde::{Deserialize, Serialize};

/// The three efficiency ratios the calculator derives. Each carries the
/// explanatory copy shown on demand next to its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Romi,
    Drr,
    Cpr,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Romi, Metric::Drr, Metric::Cpr];

    /// Short label used in report rows.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Romi => "ROMI",
            Metric::Drr => "DRR",
            Metric::Cpr => "CPR",
        }
    }

    /// Full title, label plus its expansion.
    pub fn title(&self) -> &'static str {
        match self {
            Metric::Romi => "ROMI (Return on Marketing Investment)",
            Metric::Drr => "DRR (ad-spend share of revenue)",
            Metric::Cpr => "CPR (Cost Per Order)",
        }
    }

    /// One-paragraph plain-language description of what the ratio means.
    pub fn description(&self) -> &'static str {
        match self {
            Metric::Romi => {
                "Shows how much profit every unit of currency invested in \
                 advertising returned. A ROMI of 200% means each invested \
                 unit came back as two units of profit."
            }
            Metric::Drr => {
                "Shows what share of revenue was spent on advertising. A DRR \
                 of 20% means a fifth of all revenue went back into ads. The \
                 lower this ratio, the better."
            }
            Metric::Cpr => {
                "Shows how much ad spend one order cost. A CPR of 1000 means \
                 each order took 1000 units of currency in advertising. The \
                 lower this ratio, the more efficient the campaign."
            }
        }
    }

    /// Human-readable formula, matching the computation exactly.
    pub fn formula(&self) -> &'static str {
        match self {
            Metric::Romi => "((revenue - ad cost) / ad cost) x 100%",
            Metric::Drr => "(ad cost / revenue) x 100%",
            Metric::Cpr => "ad cost / orders",
        }
    }

    /// Unit suffix attached to the formatted value.
    pub fn suffix(&self) -> &'static str {
        match self {
            Metric::Romi | Metric::Drr => "%",
            Metric::Cpr => " ₽",
        }
    }
}
