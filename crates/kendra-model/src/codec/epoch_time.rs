//! Timestamps encoded as (possibly fractional) seconds since the Unix epoch.

use std::fmt;

use jiff::Timestamp;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point in time with millisecond precision, as carried on the wire.
///
/// Whole seconds serialize as a JSON integer, anything else as seconds with a
/// millisecond fraction. Construction from a [`Timestamp`] truncates any
/// sub-millisecond digits, so a value always survives a wire round-trip.
///
/// ```
/// use jiff::Timestamp;
/// use kendra_model::codec::EpochTime;
///
/// let time = EpochTime::from(Timestamp::from_nanosecond(1_700_000_000_123_456_789)?);
/// assert_eq!(serde_json::to_string(&time)?, "1700000000.123");
///
/// let decoded: EpochTime = serde_json::from_str("1700000000.123")?;
/// assert_eq!(decoded, time);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpochTime(Timestamp);

impl EpochTime {
    /// The Unix epoch.
    pub const UNIX_EPOCH: Self = Self(Timestamp::UNIX_EPOCH);

    /// Creates a time from a timestamp, truncated to the millisecond.
    pub fn new(timestamp: Timestamp) -> Self {
        Self(Timestamp::from_millisecond(timestamp.as_millisecond()).unwrap_or(timestamp))
    }

    /// Returns the current time.
    pub fn now() -> Self {
        Self::new(Timestamp::now())
    }

    /// Creates a time from whole epoch seconds.
    pub fn from_second(seconds: i64) -> Result<Self, jiff::Error> {
        Timestamp::from_second(seconds).map(Self)
    }

    /// Creates a time from epoch milliseconds.
    pub fn from_millisecond(milliseconds: i64) -> Result<Self, jiff::Error> {
        Timestamp::from_millisecond(milliseconds).map(Self)
    }

    /// Creates a time from fractional epoch seconds, rounded to the millisecond.
    pub fn from_seconds(seconds: f64) -> Result<Self, jiff::Error> {
        Self::from_millisecond((seconds * 1000.0).round() as i64)
    }

    /// Returns fractional epoch seconds.
    pub fn as_seconds(&self) -> f64 {
        self.0.as_millisecond() as f64 / 1000.0
    }

    /// Returns epoch milliseconds.
    pub fn as_millisecond(&self) -> i64 {
        self.0.as_millisecond()
    }

    /// Returns the underlying timestamp.
    pub fn as_timestamp(&self) -> Timestamp {
        self.0
    }
}

impl fmt::Display for EpochTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Timestamp> for EpochTime {
    fn from(timestamp: Timestamp) -> Self {
        Self::new(timestamp)
    }
}

impl From<EpochTime> for Timestamp {
    fn from(time: EpochTime) -> Self {
        time.0
    }
}

impl Serialize for EpochTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.subsec_millisecond() == 0 {
            serializer.serialize_i64(self.0.as_second())
        } else {
            serializer.serialize_f64(self.as_seconds())
        }
    }
}

impl<'de> Deserialize<'de> for EpochTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = f64::deserialize(deserializer)?;
        if !seconds.is_finite() {
            return Err(D::Error::custom("epoch seconds must be finite"));
        }

        Self::from_seconds(seconds).map_err(D::Error::custom)
    }
}
