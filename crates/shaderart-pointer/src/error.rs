use std::fmt;

/// Error raised while binding a plugin to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// `setup` was called without a host element.
    MissingHostElement,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingHostElement => f.write_str("host element not found"),
        }
    }
}

impl std::error::Error for SetupError {}
