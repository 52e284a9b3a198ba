//! Error types for style resolution.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during style resolution.
///
/// Unknown size or color-scheme names are *not* errors; they fall back to the
/// registered defaults. Only integration mistakes (a theme without the
/// requested component entry, malformed token values) are raised.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The theme registry has no entry for the requested component.
    #[error("theme has no style entry for component '{component}'")]
    UnknownComponent { component: String },

    /// A token value could not be used for the requested derivation.
    #[error("invalid value for '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

impl Error {
    /// Create an unknown-component error.
    pub fn unknown_component(component: impl Into<String>) -> Self {
        Self::UnknownComponent {
            component: component.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
