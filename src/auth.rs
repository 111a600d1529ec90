//! API key extraction from the `Authorization` header.
//!
//! Clients authenticate with a header of the form:
//!
//! ```text
//! Authorization: ApiKey <key>
//! ```
//!
//! The scheme token is matched case-sensitively. Only the first value of the
//! header is read, and tokens after the key are ignored.

use crate::error::AuthError;
use crate::headers::HeaderSet;
use crate::secret::Secret;

/// Name of the header carrying the credential (lookups are case-insensitive).
pub const AUTHORIZATION: &str = "authorization";

/// Scheme token that must open the header value.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extracts the API key from a request's headers.
///
/// # Errors
///
/// - [`AuthError::NoAuthHeader`] if there is no `Authorization` value, or the
///   first value is the empty string
/// - [`AuthError::MalformedHeader`] if the first value is not `ApiKey`
///   followed by at least one more whitespace-separated token
///
/// # Examples
///
/// ```
/// use apikey_auth::{get_api_key, AuthError, HeaderSet};
///
/// let mut headers = HeaderSet::new();
/// headers.append("Authorization", "ApiKey my-secret-key");
///
/// let key = get_api_key(&headers).expect("well-formed header");
/// assert_eq!(key.expose_secret(), "my-secret-key");
///
/// assert_eq!(
///     get_api_key(&HeaderSet::new()).unwrap_err(),
///     AuthError::NoAuthHeader
/// );
/// ```
pub fn get_api_key(headers: &HeaderSet) -> Result<Secret<String>, AuthError> {
    let value = headers.get(AUTHORIZATION).unwrap_or_default();
    parse_authorization(value)
}

/// Parses a raw `Authorization` header value.
///
/// This is the value-level half of [`get_api_key`], for callers that already
/// hold the header string. An empty value is treated as a missing header.
///
/// ```
/// use apikey_auth::{parse_authorization, AuthError};
///
/// let key = parse_authorization("ApiKey key extra-stuff").unwrap();
/// assert_eq!(key.expose_secret(), "key");
///
/// assert_eq!(
///     parse_authorization("apikey key").unwrap_err(),
///     AuthError::MalformedHeader
/// );
/// ```
pub fn parse_authorization(value: &str) -> Result<Secret<String>, AuthError> {
    if value.is_empty() {
        return Err(reject(AuthError::NoAuthHeader));
    }

    let mut tokens = value.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(API_KEY_SCHEME), Some(key)) => {
            tracing::trace!(scheme = API_KEY_SCHEME, "api key extracted");
            Ok(Secret::new(key.to_string()))
        }
        _ => Err(reject(AuthError::MalformedHeader)),
    }
}

fn reject(err: AuthError) -> AuthError {
    // Never include the header value here, it may hold a valid key.
    tracing::debug!(reason = err.reason(), "rejected authorization header");
    err
}
