//! Error types for parsing, configuration and restored state.
//!
//! Gameplay itself has no recoverable errors: a wrong submission is the
//! normal `GameOver` outcome, and contract violations (out-of-catalog
//! signal indices, unknown selector names) panic. These errors cover the
//! text and config surface a presentation layer feeds into the engine.

/// Error type for caller-facing parsing and configuration.
#[derive(thiserror::Error, Debug)]
pub enum GeniusError {
    /// Signal name not in the catalog.
    #[error("Unknown signal: {0}")]
    UnknownSignal(String),

    /// Difficulty name other than easy/medium/hard.
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A restored game state breaks the engine's invariants.
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Configuration JSON could not be parsed.
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for engine operations that can fail.
pub type Result<T> = std::result::Result<T, GeniusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GeniusError::UnknownSignal("magenta".to_string());
        assert_eq!(err.to_string(), "Unknown signal: magenta");

        let err = GeniusError::InvalidConfig("flash_ms must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: flash_ms must be positive");

        let err = GeniusError::InvalidState("Playback with an empty sequence".to_string());
        assert_eq!(err.to_string(), "Invalid game state: Playback with an empty sequence");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<u32, serde_json::Error> = serde_json::from_str("nope");
        let err: GeniusError = parse.unwrap_err().into();
        assert!(matches!(err, GeniusError::Json(_)));
    }
}
