//! Parallel batch validation
//!
//! Validates many descriptions at once using rayon. Enable with the
//! `parallel` feature.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "parallel")]
//! # fn main() {
//! use hgvs_validate::parallel::{validate_parallel, ParallelStats};
//! use hgvs_validate::Validator;
//!
//! let inputs = vec!["c.76A>T", "p.Trp24Cys", "r.spl"];
//! let results = validate_parallel(&Validator::new(), &inputs);
//! let stats = ParallelStats::from_results(&results);
//! assert_eq!(stats.success, 3);
//! # }
//! # #[cfg(not(feature = "parallel"))]
//! # fn main() {}
//! ```

use rayon::prelude::*;

use crate::error::ValidationError;
use crate::hgvs::variant::VariantExpression;
use crate::validator::Validator;

/// Validate descriptions in parallel
///
/// Returns one result per input. Order is preserved.
pub fn validate_parallel<S: AsRef<str> + Sync>(
    validator: &Validator,
    inputs: &[S],
) -> Vec<Result<VariantExpression, ValidationError>> {
    inputs
        .par_iter()
        .map(|s| validator.validate_expression(s.as_ref()))
        .collect()
}

/// Validate descriptions in parallel, keeping only the valid ones
pub fn validate_parallel_ok<S: AsRef<str> + Sync>(
    validator: &Validator,
    inputs: &[S],
) -> Vec<VariantExpression> {
    inputs
        .par_iter()
        .filter_map(|s| validator.validate_expression(s.as_ref()).ok())
        .collect()
}

/// Statistics from parallel processing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParallelStats {
    /// Total items processed
    pub total: usize,
    /// Successfully processed
    pub success: usize,
    /// Failed to process
    pub errors: usize,
}

impl ParallelStats {
    pub fn from_results<T, E>(results: &[Result<T, E>]) -> Self {
        let success = results.iter().filter(|r| r.is_ok()).count();
        Self {
            total: results.len(),
            success,
            errors: results.len() - success,
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.success as f64 / self.total as f64) * 100.0
        }
    }
}
