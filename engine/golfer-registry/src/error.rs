use std::fmt;

/// Errors that can occur during golfer lookup
#[derive(Debug, Clone)]
pub enum GolferLookupError {
    /// Golfer not found in the current snapshot
    GolferNotFound(String),

    /// Registry has no golfers loaded
    RegistryEmpty,
}

impl fmt::Display for GolferLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GolferLookupError::GolferNotFound(name) => {
                write!(f, "Golfer '{name}' not found in registry")
            }
            GolferLookupError::RegistryEmpty => {
                write!(f, "Golfer registry has no snapshot loaded")
            }
        }
    }
}

impl std::error::Error for GolferLookupError {}
