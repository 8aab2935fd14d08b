//! Cache time-to-live

use crate::constants::{TTL_DISABLED, TTL_NEVER};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Expiration policy for a cache write
///
/// Configured as signed seconds: `-1` never expires, `0` disables the
/// write, `N > 0` expires after `N` seconds. Any other negative number is
/// read as "never expire".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CacheTtl {
    /// Keep the entry until it is deleted
    #[default]
    Never,
    /// Skip the write entirely
    Disabled,
    /// Expire after the given duration
    Expires(Duration),
}

impl CacheTtl {
    /// Map signed seconds onto a TTL policy
    pub fn from_seconds(seconds: i64) -> Self {
        match seconds {
            s if s < 0 => Self::Never,
            0 => Self::Disabled,
            s => Self::Expires(Duration::from_secs(s.unsigned_abs())),
        }
    }

    /// The signed-seconds form of this policy
    pub fn as_seconds(&self) -> i64 {
        match self {
            Self::Never => TTL_NEVER,
            Self::Disabled => TTL_DISABLED,
            Self::Expires(d) => i64::try_from(d.as_secs()).unwrap_or(i64::MAX),
        }
    }

    /// Expiry duration, if the entry expires at all
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Self::Expires(d) => Some(*d),
            Self::Never | Self::Disabled => None,
        }
    }

    /// Whether writes under this policy should be skipped
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

impl From<i64> for CacheTtl {
    fn from(seconds: i64) -> Self {
        Self::from_seconds(seconds)
    }
}

impl From<Duration> for CacheTtl {
    fn from(duration: Duration) -> Self {
        if duration.is_zero() {
            Self::Disabled
        } else {
            Self::Expires(duration)
        }
    }
}

impl fmt::Display for CacheTtl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Never => write!(f, "never"),
            Self::Disabled => write!(f, "disabled"),
            Self::Expires(d) => write!(f, "{}s", d.as_secs()),
        }
    }
}

impl Serialize for CacheTtl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_seconds())
    }
}

impl<'de> Deserialize<'de> for CacheTtl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_seconds)
    }
}
