//! API key extraction from HTTP `Authorization` headers.
//!
//! Clients send `Authorization: ApiKey <key>`. This crate finds that header
//! in a request's headers, checks the scheme and hands back the key, or
//! reports why the header was rejected.
//!
//! # Core Types
//!
//! - [`HeaderSet`]: Case-insensitive, multi-valued header collection
//! - [`get_api_key`]: Extracts the key from a [`HeaderSet`]
//! - [`AuthError`]: Closed set of rejection reasons
//! - [`Secret<T>`]: Wrapper that redacts the extracted key in logs/output
//!
//! # Examples
//!
//! ```
//! use apikey_auth::{get_api_key, AuthError, HeaderSet};
//!
//! let headers: HeaderSet = [("Authorization", "ApiKey my-secret-key")]
//!     .into_iter()
//!     .collect();
//!
//! let key = get_api_key(&headers).expect("well-formed header");
//! println!("{:?}", key); // Prints: [REDACTED]
//! assert_eq!(key.expose_secret(), "my-secret-key");
//!
//! let bearer: HeaderSet = [("Authorization", "Bearer my-secret-key")]
//!     .into_iter()
//!     .collect();
//! assert_eq!(get_api_key(&bearer).unwrap_err(), AuthError::MalformedHeader);
//! ```
//!
//! # Logging
//!
//! Rejections are reported through [`tracing`] at `DEBUG` level with a
//! `reason` field. The key itself is never logged. The crate installs no
//! subscriber.
//!
//! # Features
//!
//! - `http`: `From<&http::HeaderMap>` for [`HeaderSet`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod error;
mod headers;
mod secret;

pub use auth::{get_api_key, parse_authorization, API_KEY_SCHEME, AUTHORIZATION};
pub use error::AuthError;
pub use headers::HeaderSet;
pub use secret::Secret;
