use thiserror::Error;

/// Render an optional "did you mean" hint for unknown selections.
fn hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

#[derive(Debug, Error)]
pub enum PartyError {
    #[error("Invalid guest count: {0} (need at least 1 guest)")]
    InvalidGuestCount(i64),

    #[error("Invalid duration: {0} hours (need at least 1 hour)")]
    InvalidDuration(i64),

    #[error("No drink types selected")]
    EmptyDrinkSelection,

    #[error("Unknown drink type: '{value}'{}", hint(.suggestion))]
    UnknownDrinkType {
        value: String,
        suggestion: Option<String>,
    },

    #[error("Unknown mixer type: '{value}'{}", hint(.suggestion))]
    UnknownMixerType {
        value: String,
        suggestion: Option<String>,
    },

    #[error("Unknown drinker type: '{value}' (expected light, medium, or heavy)")]
    UnknownIntensity { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PartyError {
    /// Whether this error came from validating a request (as opposed to I/O).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PartyError::InvalidGuestCount(_)
                | PartyError::InvalidDuration(_)
                | PartyError::EmptyDrinkSelection
                | PartyError::UnknownDrinkType { .. }
                | PartyError::UnknownMixerType { .. }
                | PartyError::UnknownIntensity { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PartyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_drink_message_with_suggestion() {
        let err = PartyError::UnknownDrinkType {
            value: "wisky".to_string(),
            suggestion: Some("whiskey".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Unknown drink type: 'wisky' (did you mean 'whiskey'?)"
        );
    }

    #[test]
    fn test_unknown_mixer_message_without_suggestion() {
        let err = PartyError::UnknownMixerType {
            value: "milk".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Unknown mixer type: 'milk'");
    }

    #[test]
    fn test_is_validation() {
        assert!(PartyError::InvalidGuestCount(0).is_validation());
        assert!(PartyError::EmptyDrinkSelection.is_validation());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(!PartyError::from(io).is_validation());
    }
}
