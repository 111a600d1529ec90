use std::fmt;

/// Reasons an `Authorization` header can be rejected.
///
/// Both kinds are authentication failures. Callers usually answer either one
/// with `401 Unauthorized` (see [`AuthError::status_code`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthError {
    /// The `Authorization` header is missing or empty
    NoAuthHeader,
    /// The header is not `ApiKey` followed by a key token
    MalformedHeader,
}

impl AuthError {
    /// HTTP status code a server should answer this rejection with.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::NoAuthHeader | AuthError::MalformedHeader => 401,
        }
    }

    /// Short machine-readable label, used as the `reason` field in logs.
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::NoAuthHeader => "no_auth_header",
            AuthError::MalformedHeader => "malformed_header",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NoAuthHeader => write!(f, "no authorization header included"),
            AuthError::MalformedHeader => write!(f, "malformed authorization header"),
        }
    }
}

impl std::error::Error for AuthError {}
