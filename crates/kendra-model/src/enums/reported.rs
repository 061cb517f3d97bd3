//! Enumerated values as reported by the service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An enumerated value decoded from a service response.
///
/// The service may report values added after this client was built. Read
/// models hold them as [`Reported::Unknown`] so that one new status does not
/// fail a whole response; `from_value` and request shapes stay closed.
///
/// ```
/// use kendra_model::enums::{IndexStatus, Reported};
///
/// let status: Reported<IndexStatus> = serde_json::from_str("\"ACTIVE\"")?;
/// assert_eq!(status.known(), Some(IndexStatus::Active));
///
/// let status: Reported<IndexStatus> = serde_json::from_str("\"MIGRATING\"")?;
/// assert_eq!(status, Reported::Unknown("MIGRATING".to_string()));
/// assert_eq!(status.as_str(), "MIGRATING");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reported<T> {
    /// A value from the declared set.
    Known(T),

    /// A value outside the declared set, kept verbatim.
    Unknown(String),
}

impl<T: Copy> Reported<T> {
    /// Returns the declared value, or `None` for an unknown one.
    #[inline]
    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(value) => Some(*value),
            Self::Unknown(_) => None,
        }
    }
}

impl<T> Reported<T> {
    /// Returns whether the value belongs to the declared set.
    #[inline]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl<T: AsRef<str>> Reported<T> {
    /// Returns the exact wire string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(value) => value.as_ref(),
            Self::Unknown(value) => value,
        }
    }
}

impl<T: AsRef<str>> fmt::Display for Reported<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T> From<T> for Reported<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}
