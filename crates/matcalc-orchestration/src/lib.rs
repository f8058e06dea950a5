//! # matcalc-orchestration
//!
//! Parallel execution, multiplier selection, and result analysis.

pub mod interfaces;
pub mod orchestrator;
pub mod selection;

pub use interfaces::{ProductResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_products};
pub use selection::get_multipliers_to_run;
