//! Engine configuration.

/// Tolerance applied to double and float adjustments that do not set one.
pub const DEFAULT_EPSILON: f64 = 0.000_000_1;

/// Configuration for a [`crate::Reconciler`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconcileConfig {
    /// Default tolerance for `double` adjustments.
    pub double_epsilon: f64,
    /// Default tolerance for `float` adjustments.
    pub float_epsilon: f32,
}

impl ReconcileConfig {
    /// Use the same default tolerance for both floating kinds.
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            double_epsilon: epsilon,
            float_epsilon: epsilon as f32,
        }
    }
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self::with_epsilon(DEFAULT_EPSILON)
    }
}
