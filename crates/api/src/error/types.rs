//! Error type definitions for key-derivation operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for edkeys operations
///
/// Key derivation itself cannot fail on typed inputs. Errors only arise at the
/// byte boundary (importing persisted keys) and when drawing a seed from an RNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for edkeys operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::RandomGenerationError {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::RandomGenerationError {
                context,
                #[cfg(feature = "std")]
                message,
            },
        }
    }

    /// Replace the message of an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
        }
    }

    /// The static context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::RandomGenerationError { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidKey { context } => {
                write!(f, "Invalid key: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
        }
    }
}
