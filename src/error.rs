use std::fmt;

/// Failure talking to the upstream API. Never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, timeout or body read failure
    Network { url: String, message: String },
    /// Upstream answered with a non-2xx status
    Status { url: String, status: u16 },
    /// Body was not the JSON shape we expected
    Decode { url: String, message: String },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Network { url, message } => {
                write!(f, "Network error for {url}: {message}")
            }
            TransportError::Status { url, status } => {
                write!(f, "HTTP {status} for {url}")
            }
            TransportError::Decode { url, message } => {
                write!(f, "Unexpected response from {url}: {message}")
            }
        }
    }
}

impl std::error::Error for TransportError {}

/// A structurally required field was missing from an otherwise good response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterError {
    pub entity: &'static str,
    pub field: &'static str,
}

impl AdapterError {
    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        Self { entity, field }
    }
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} record is missing required field '{}'", self.entity, self.field)
    }
}

impl std::error::Error for AdapterError {}

/// Error surfaced to the caller of a fetch-and-transform operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NhlError {
    Transport(TransportError),
    Adapter(AdapterError),
}

impl fmt::Display for NhlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NhlError::Transport(e) => write!(f, "{e}"),
            NhlError::Adapter(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for NhlError {}

impl From<TransportError> for NhlError {
    fn from(e: TransportError) -> Self {
        NhlError::Transport(e)
    }
}

impl From<AdapterError> for NhlError {
    fn from(e: AdapterError) -> Self {
        NhlError::Adapter(e)
    }
}
