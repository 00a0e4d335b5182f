/*
[INPUT]:  Epoch-seconds timestamps from the bank, possibly null
[OUTPUT]: Typed timestamp newtype with tolerant deserialization
[POS]:    Data layer - codec adapter for numeric time fields
[UPDATE]: When the bank's time encoding changes
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Unix-epoch seconds as sent by the bank. A JSON `null` decodes to the zero
/// value instead of failing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = Option::<i64>::deserialize(deserializer)?;
        Ok(Timestamp(seconds.unwrap_or_default()))
    }
}

impl From<i64> for Timestamp {
    fn from(seconds: i64) -> Self {
        Timestamp(seconds)
    }
}

impl Timestamp {
    /// Convert to a UTC datetime. `None` when out of chrono's range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }
}
