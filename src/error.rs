// SPDX-License-Identifier: MPL-2.0
use crate::buttons::ButtonType;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    /// Settings could not be parsed, or a button configuration is invalid.
    Config(String),
    /// A descriptor carries a type the dispatcher cannot route.
    /// Only reachable through a descriptor built outside the resolver.
    UnknownButtonType(String),
}

impl Error {
    /// Builds the configuration error raised when a custom button list holds
    /// an entry outside the allow-list.
    pub(crate) fn invalid_custom_button(index: usize, kind: &ButtonType) -> Self {
        Error::Config(format!(
            "button #{} has unsupported type `{}`; use the `custom` type for non-standard buttons",
            index, kind
        ))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::UnknownButtonType(kind) => write!(f, "Unknown button type: {}", kind),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn invalid_custom_button_mentions_custom_type() {
        let err = Error::invalid_custom_button(2, &ButtonType::Other("share".into()));
        let message = err.to_string();
        assert!(message.starts_with("Config Error:"));
        assert!(message.contains("#2"));
        assert!(message.contains("share"));
        assert!(message.contains("`custom` type"));
    }

    #[test]
    fn unknown_button_type_display() {
        let err = Error::UnknownButtonType("share".into());
        assert_eq!(err.to_string(), "Unknown button type: share");
    }
}
