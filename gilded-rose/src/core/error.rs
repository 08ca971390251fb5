//! Construction-time errors for conditions and actions.
//!
//! Evaluation and application are total; the only failures happen while a
//! rule set is being assembled.

/// Configuration error raised while building a condition or action.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("invalid name pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid clamp bounds: min {min} exceeds max {max}")]
    InvalidBounds { min: i32, max: i32 },
}
