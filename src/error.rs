//! Errors found throughout this crate

use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ParseError, ReplyError};

/// Errors that occur from interacting with the X-Server
#[derive(Debug, Error)]
pub enum Error {
    /// Failure to connect to the server
    #[error("failed to connect to the X11 server: {0}")]
    Connection(#[from] ConnectError),

    /// Failure to send a request over an established connection
    #[error("failed to send request to the X11 server: {0}")]
    Request(#[from] ConnectionError),

    /// The server answered a request with an error, or not at all
    #[error("failed to get reply from the X11 server: {0}")]
    Reply(#[from] ReplyError),

    /// An event from the server could not be parsed
    #[error("failed to parse event from the X11 server: {0}")]
    Parse(#[from] ParseError),

    /// The server does not offer the named extension
    #[error("the {0} X11 extension is unsupported")]
    ExtensionMissing(&'static str),

    /// The server offers `randr`, but at a version we cannot work with
    #[error("Xrandr version {major}.{minor} is not supported")]
    UnsupportedVersion {
        /// Major version reported by the server
        major: u32,
        /// Minor version reported by the server
        minor: u32,
    },
}

impl Error {
    /// Whether the connection is still usable after the error. A single
    /// event that fails to parse does not take the connection down with it
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use x11rb::errors::{ConnectionError, ParseError};

    #[test]
    fn only_parse_errors_are_recoverable() {
        assert!(Error::Parse(ParseError::InsufficientData).is_recoverable());
        assert!(!Error::Request(ConnectionError::UnknownError).is_recoverable());
        assert!(!Error::ExtensionMissing("RANDR").is_recoverable());
    }
}
