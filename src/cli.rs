use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "adcalc")]
#[command(about = "Advertising funnel efficiency calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute funnel volumes, revenue and efficiency ratios
    Compute {
        /// Product name (display only)
        #[arg(long = "product-name")]
        product_name: Option<String>,

        /// Product price; non-numeric text is treated as 0
        #[arg(long = "price", visible_alias = "product-price", allow_hyphen_values = true)]
        price: Option<String>,

        /// Total ad spend; non-numeric text is treated as 0
        #[arg(long = "ad-cost", allow_hyphen_values = true)]
        ad_cost: Option<String>,

        /// Audience reach; non-numeric text is treated as 0
        #[arg(long = "reach", allow_hyphen_values = true)]
        reach: Option<String>,

        /// Reach -> click conversion, percent
        #[arg(long = "click-conversion", allow_hyphen_values = true)]
        click_conversion: Option<String>,

        /// Click -> cart conversion, percent
        #[arg(long = "cart-conversion", allow_hyphen_values = true)]
        cart_conversion: Option<String>,

        /// Cart -> order conversion, percent
        #[arg(long = "order-conversion", allow_hyphen_values = true)]
        order_conversion: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to .adcalc.toml when present)
        #[arg(short, long, env = "ADCALC_CONFIG")]
        config: Option<PathBuf>,

        /// Disable colors (ASCII report)
        #[arg(long)]
        plain: bool,

        /// Increase verbosity; -v appends each ratio's formula to the report
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Explain one of the efficiency metrics
    Explain {
        /// Metric to explain
        #[arg(value_enum)]
        metric: MetricName,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MetricName {
    Romi,
    Drr,
    Cpr,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

impl From<MetricName> for crate::metrics::Metric {
    fn from(m: MetricName) -> Self {
        match m {
            MetricName::Romi => crate::metrics::Metric::Romi,
            MetricName::Drr => crate::metrics::Metric::Drr,
            MetricName::Cpr => crate::metrics::Metric::Cpr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Markdown),
            crate::io::output::OutputFormat::Markdown
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_metric_name_conversion() {
        assert_eq!(
            crate::metrics::Metric::from(MetricName::Romi),
            crate::metrics::Metric::Romi
        );
        assert_eq!(
            crate::metrics::Metric::from(MetricName::Drr),
            crate::metrics::Metric::Drr
        );
        assert_eq!(
            crate::metrics::Metric::from(MetricName::Cpr),
            crate::metrics::Metric::Cpr
        );
    }

    #[test]
    fn test_cli_parsing_compute_command() {
        let args = vec![
            "adcalc",
            "compute",
            "--reach",
            "1000",
            "--click-conversion",
            "10",
            "--format",
            "json",
        ];

        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Compute {
                reach,
                click_conversion,
                format,
                ..
            } => {
                assert_eq!(reach.as_deref(), Some("1000"));
                assert_eq!(click_conversion.as_deref(), Some("10"));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            _ => panic!("Expected Compute command"),
        }
    }

    #[test]
    fn test_cli_accepts_non_numeric_field_text() {
        // Fields are raw text on purpose: coercion to 0 happens later.
        let args = vec!["adcalc", "compute", "--price", "abc"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Compute { price, .. } => {
                assert_eq!(price.as_deref(), Some("abc"));
            }
            _ => panic!("Expected Compute command"),
        }
    }

    #[test]
    fn test_cli_accepts_negative_field_values() {
        let args = vec!["adcalc", "compute", "--price", "-1000", "--reach", "-5"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Compute { price, reach, .. } => {
                assert_eq!(price.as_deref(), Some("-1000"));
                assert_eq!(reach.as_deref(), Some("-5"));
            }
            _ => panic!("Expected Compute command"),
        }
    }

    #[test]
    fn test_cli_parsing_explain_command() {
        let args = vec!["adcalc", "explain", "romi"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Explain { metric } => {
                assert_eq!(metric, MetricName::Romi);
            }
            _ => panic!("Expected Explain command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let args = vec!["adcalc", "init", "--force"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Init { force } => {
                assert!(force);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_verbosity_is_repeatable() {
        let args = vec!["adcalc", "compute", "-vv"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Compute { verbosity, .. } => {
                assert_eq!(verbosity, 2);
            }
            _ => panic!("Expected Compute command"),
        }
    }
}
