use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum VolumeError {
    /// No connection to the audio server.
    Connection(String),
    /// The endpoint is missing or was replaced.
    Device(String),
    /// A get or set request did not complete.
    Operation(String),
}

impl fmt::Display for VolumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeError::Connection(msg) => write!(f, "connection error: {msg}"),
            VolumeError::Device(msg) => write!(f, "device error: {msg}"),
            VolumeError::Operation(msg) => write!(f, "operation error: {msg}"),
        }
    }
}

impl std::error::Error for VolumeError {}
