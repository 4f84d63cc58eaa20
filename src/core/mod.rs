pub mod funnel;
pub mod parsing;
pub mod types;

pub use funnel::compute;
pub use types::{CalculationReport, CalculatorInput, CalculatorResult};
