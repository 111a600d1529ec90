use std::fmt;

/// A wrapper that keeps an extracted credential out of logs and output.
///
/// The key returned by [`get_api_key`](crate::get_api_key) is wrapped in
/// `Secret<String>`. Formatting it never shows the value; reading it requires
/// the explicit [`expose_secret`](Self::expose_secret) call.
///
/// # Examples
///
/// ```
/// use apikey_auth::Secret;
///
/// let api_key = Secret::new("sk-1234567890".to_string());
///
/// assert_eq!(format!("{:?}", api_key), "[REDACTED]");
/// assert_eq!(format!("{}", api_key), "[REDACTED]");
/// assert_eq!(api_key.expose_secret(), "sk-1234567890");
/// ```
// Do NOT derive Clone, Copy or Default, and do NOT implement Deref, AsRef or Borrow.
// Every read of the value must go through expose_secret().
pub struct Secret<T> {
    // Must stay private (CWE-532).
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Explicitly exposes the secret value.
    ///
    /// Do not log or display what this returns.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }

    /// Consumes the wrapper and hands the value over to the caller.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: PartialEq> PartialEq for Secret<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for Secret<T> {}

impl<T> fmt::Debug for Secret<T> {
    /// Must unconditionally print "[REDACTED]", debug builds included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
