/// Crate-wide result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// The single failure surface of the engine.
///
/// Raised only at construction time (`EngineConfig::new`,
/// `VqeEngine::from_theta`, `RunPolicy::new`); `step` and `snapshot` are
/// total functions over a validly constructed engine and never fail.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A constructor argument violated its constraint. The engine refuses to
    /// construct rather than proceeding with degenerate state.
    InvalidConfiguration {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl std::error::Error for EngineError {}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidConfiguration { parameter, value, reason } => {
                write!(f, "Invalid configuration for '{parameter}': {value}: {reason}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Ensure the Display impl names the offending parameter, its value, and
    // the reason, so constructor failures are diagnosable from the message
    // alone.
    fn display_includes_parameter_value_and_reason() {
        let err = EngineError::InvalidConfiguration {
            parameter: "learning_rate",
            value: -0.5,
            reason: "Learning rate must be strictly positive.",
        };

        let rendered = err.to_string();
        assert!(rendered.contains("learning_rate"));
        assert!(rendered.contains("-0.5"));
        assert!(rendered.contains("strictly positive"));
    }
}
