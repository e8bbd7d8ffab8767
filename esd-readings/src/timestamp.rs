use chrono::{DateTime, NaiveDateTime};
use esd_utils::dates::parse_timestamp;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// The `reading_ts` field of a reading.
///
/// The raw text is what gets displayed and serialized back out; `instant`
/// is the parsed value used for time ordering and is `None` when the text
/// is not a recognizable timestamp.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadingTimestamp {
    raw: String,
    instant: Option<NaiveDateTime>,
}

impl ReadingTimestamp {
    pub fn parse(raw: &str) -> Self {
        let instant = parse_timestamp(raw).ok();
        if instant.is_none() && !raw.trim().is_empty() {
            log::debug!("[ESD] timestamp: unparseable reading_ts {:?}", raw);
        }
        Self {
            raw: raw.to_string(),
            instant,
        }
    }

    /// Epoch milliseconds, as a browser `Date` would read a numeric value.
    pub fn from_epoch_millis(millis: i64) -> Self {
        Self {
            raw: millis.to_string(),
            instant: DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc()),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn instant(&self) -> Option<NaiveDateTime> {
        self.instant
    }

    pub fn is_valid(&self) -> bool {
        self.instant.is_some()
    }

    /// Chronological order. Unparseable timestamps sort before every valid one
    /// and compare equal to each other.
    pub fn cmp_instant(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl fmt::Display for ReadingTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for ReadingTimestamp {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl Serialize for ReadingTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = ReadingTimestamp;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a timestamp string, epoch milliseconds or any other JSON value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ReadingTimestamp, E> {
        Ok(ReadingTimestamp::parse(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ReadingTimestamp, E> {
        Ok(ReadingTimestamp::from_epoch_millis(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ReadingTimestamp, E> {
        match i64::try_from(v) {
            Ok(millis) => Ok(ReadingTimestamp::from_epoch_millis(millis)),
            Err(_) => Ok(ReadingTimestamp {
                raw: v.to_string(),
                instant: None,
            }),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ReadingTimestamp, E> {
        if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
            Ok(ReadingTimestamp::from_epoch_millis(v as i64))
        } else {
            Ok(ReadingTimestamp {
                raw: v.to_string(),
                instant: None,
            })
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<ReadingTimestamp, E> {
        Ok(ReadingTimestamp::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<ReadingTimestamp, E> {
        Ok(ReadingTimestamp::default())
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<ReadingTimestamp, A::Error> {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(ReadingTimestamp::default())
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<ReadingTimestamp, A::Error> {
        while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
        Ok(ReadingTimestamp::default())
    }
}

impl<'de> Deserialize<'de> for ReadingTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}
