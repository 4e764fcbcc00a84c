//! # Errors raised at the `build` / `set_data` boundary
//!
//! Configuration problems surface immediately as [`ListError::Configuration`]; the controller
//! renders an empty list instead of handing negative sizes to the host. Binding a slot past the
//! end of the dataset is not an error: such slots are blanked.

use core::fmt;

/// An invalid slot count, padding or viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// `display_count` must be at least 1.
    ZeroDisplayCount,
    /// Padding must be finite and non-negative.
    InvalidPadding(f32),
    /// The viewport reported a negative or non-finite height.
    InvalidViewportHeight(f32),
    /// The viewport is too small to fit `display_count` rows with `padding` between them.
    NonPositiveItemHeight {
        viewport_height: f32,
        display_count: usize,
        padding: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDisplayCount => f.write_str("display count must be at least 1"),
            Self::InvalidPadding(padding) => {
                write!(f, "padding must be finite and non-negative (got {padding})")
            }
            Self::InvalidViewportHeight(height) => {
                write!(f, "viewport height must be finite and non-negative (got {height})")
            }
            Self::NonPositiveItemHeight {
                viewport_height,
                display_count,
                padding,
            } => write!(
                f,
                "viewport height {viewport_height} cannot fit {display_count} rows with padding {padding}"
            ),
        }
    }
}

/// An error returned by [`crate::ListBuilder::build`], [`crate::RecyclingListController`]
/// operations, and the interchange helpers.
///
/// This is marked non-exhaustive since more variants may be added in the future.
#[derive(Debug)]
#[non_exhaustive]
pub enum ListError {
    /// The configuration cannot produce a positive row height.
    Configuration(ConfigError),
    /// A required collaborator (viewport, row factory) was not supplied at build time.
    MissingDependency(&'static str),
    /// Records could not be converted to or from their JSON form.
    #[cfg(feature = "json")]
    Interchange(serde_json::Error),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "invalid list configuration: {err}"),
            Self::MissingDependency(what) => write!(f, "missing dependency: {what}"),
            #[cfg(feature = "json")]
            Self::Interchange(err) => write!(f, "record interchange failed: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(err) => Some(err),
            Self::MissingDependency(_) => None,
            #[cfg(feature = "json")]
            Self::Interchange(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ListError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for ListError {
    fn from(err: serde_json::Error) -> Self {
        Self::Interchange(err)
    }
}
