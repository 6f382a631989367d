//! Error types for curve operations.

/// Error type for curve operations.
///
/// The rate and throttle functions themselves never fail; only sampling
/// validates its arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// Sample count outside `1..=max`.
    #[error("Invalid sample count {count}: must be between 1 and {max}")]
    InvalidSampleCount {
        /// The rejected count.
        count: usize,
        /// Largest accepted count.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_sample_count() {
        let err = CurveError::InvalidSampleCount { count: 0, max: 10 };
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid sample count 0"));
        assert!(msg.contains("between 1 and 10"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = CurveError::InvalidSampleCount { count: 0, max: 1 };
        let _: &dyn std::error::Error = &err;
    }
}
