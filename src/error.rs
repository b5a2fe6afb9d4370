//! error handling stuff
use thiserror::Error;

#[derive(Debug, Error)]
/// An error
pub enum ThemeError {
    /// a theme id that isn't in the registry was handed to the controller
    #[error("invalid theme key: {0:?}")]
    InvalidKey(String),

    /// a registry lookup for an id that doesn't exist
    #[error("theme not found: {0:?}")]
    NotFound(String),

    /// the controller was used before `initialize()`
    #[error("theme controller used before initialization")]
    Uninitialized,

    /// an IO error
    #[error("i/o error: {0}")]
    IO(#[from] std::io::Error),

    /// a json error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// a toml serialization error
    #[error("toml serialization error: {0}")]
    TOMLSer(#[from] toml::ser::Error),

    /// a report from color_eyre
    #[error("{0}")]
    EyreReport(color_eyre::Report),

    /// a report from miette
    #[error("{0}")]
    MietteReport(miette::Report),

    /// a miette hook install error
    #[error("error installing miette hook: {0}")]
    MietteInstall(#[from] miette::InstallError),

    /// a custom error
    #[error("error: {0}")]
    Other(String),
}

impl From<String> for ThemeError {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}

impl From<color_eyre::Report> for ThemeError {
    fn from(value: color_eyre::Report) -> Self {
        Self::EyreReport(value)
    }
}

impl From<miette::Report> for ThemeError {
    fn from(value: miette::Report) -> Self {
        Self::MietteReport(value)
    }
}

/// A result using [`ThemeError`] as the `Err` variant
pub type Result<T, U = ThemeError> = miette::Result<T, U>;

/// bail
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::ThemeError::from(String::from($msg)))
    };

    ($err:expr $(,)?) => {
        return Err($crate::error::ThemeError::from($err))
    };

    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::ThemeError::from(format!($fmt, $($arg)*)))
    };
}
