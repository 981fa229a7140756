use alloc::string::String;

/// Failure raised by an accessor (or the property store behind it).
///
/// The driver never produces these on its own: it only forwards what accessors return. A failed
/// tick aborts the remaining writes of that tick, and a failed final tick skips the completion
/// callback.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// Reading the current value failed.
    #[error("failed to read `{property}`: {message}")]
    Read { property: String, message: String },

    /// Writing an interpolated or final value failed.
    #[error("failed to write `{property}`: {message}")]
    Write { property: String, message: String },

    /// The property does not exist on the target.
    #[error("property `{property}` is not defined on the target")]
    MissingProperty { property: String },
}

impl AnimationError {
    pub fn read(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Read {
            property: property.into(),
            message: message.into(),
        }
    }

    pub fn write(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            property: property.into(),
            message: message.into(),
        }
    }

    pub fn missing(property: impl Into<String>) -> Self {
        Self::MissingProperty {
            property: property.into(),
        }
    }

    pub fn property(&self) -> &str {
        match self {
            Self::Read { property, .. }
            | Self::Write { property, .. }
            | Self::MissingProperty { property } => property,
        }
    }
}
