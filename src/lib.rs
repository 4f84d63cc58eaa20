// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod metrics;

// Re-export commonly used types
pub use crate::core::{compute, CalculationReport, CalculatorInput, CalculatorResult};

pub use crate::core::parsing::coerce_number;

pub use crate::errors::AdcalcError;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::metrics::Metric;
