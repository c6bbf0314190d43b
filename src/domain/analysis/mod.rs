//! Analysis Module - pure computations over encoded respondents.
//!
//! # Components
//!
//! - `SatisfactionAggregator` - mean satisfaction per category code
//! - `CorrelationAnalyzer` - Pearson and Spearman coefficients with p-values
//! - `LinearFit` - least-squares line drawn through the category means
//! - `AnalysisReport` - per-variable results handed to report sinks
//!
//! Nothing here performs I/O; charts and reports go through ports.

mod aggregator;
mod correlation;
mod regression;
mod report;

pub use aggregator::{AggregationMap, CategoryMean, SatisfactionAggregator};
pub use correlation::{Correlation, CorrelationAnalyzer, CorrelationSummary};
pub use regression::LinearFit;
pub use report::{AnalysisReport, VariableReport};
