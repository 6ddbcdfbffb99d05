use thiserror::Error;

/// Errors from chat store operations.
///
/// The three variants match how failures surface to the user: a server
/// that answered with an error status (possibly carrying a `detail`
/// string), a request that never got a response, and a 2xx response
/// whose body could not be understood.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("server responded with HTTP {status}")]
    Http { status: u16, detail: Option<String> },

    #[error("connection error: {0}")]
    Transport(String),

    #[error("invalid response: {0}")]
    Decode(String),
}

/// Errors from the local identity store.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity store io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = StoreError::Http {
            status: 500,
            detail: Some("db down".to_string()),
        };
        assert_eq!(err.to_string(), "server responded with HTTP 500");
    }

    #[test]
    fn test_transport_error_display() {
        let err = StoreError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_identity_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IdentityError::from(io);
        assert!(err.to_string().contains("denied"));
    }
}
