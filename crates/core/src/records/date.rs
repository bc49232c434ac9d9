//! Stored record dates.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// A date exactly as the persistence layer stored it.
///
/// Parsing happens on read, so a record with an unparsable date can still be
/// decoded and simply drops out of date-based computations.
///
/// Accepted forms, all interpreted in UTC:
/// - RFC 3339 timestamps (`2024-05-01T08:30:00.000Z`, `2024-05-01T10:30:00+02:00`)
/// - naive timestamps (`2024-05-01T08:30:00`, optional fractional seconds)
/// - plain dates (`2024-05-01`, midnight)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordDate(String);

impl RecordDate {
    /// Wraps stored date text.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the stored text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the stored text into a UTC instant.
    #[must_use]
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        let text = self.0.trim();
        if text.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    /// Parses the stored text into a UTC calendar date.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.instant().map(|dt| dt.date_naive())
    }
}

impl From<NaiveDate> for RecordDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }
}

impl From<DateTime<Utc>> for RecordDate {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.to_rfc3339())
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RecordDateVisitor)
    }
}

struct RecordDateVisitor;

impl RecordDateVisitor {
    fn unreadable(kind: &str) -> RecordDate {
        warn!(kind, "Unreadable stored date kept as blank");
        RecordDate::default()
    }
}

impl<'de> Visitor<'de> for RecordDateVisitor {
    type Value = RecordDate;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a date string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RecordDate, E> {
        Ok(RecordDate::new(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RecordDate, E> {
        Ok(RecordDate(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RecordDate, E> {
        Ok(RecordDate::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<RecordDate, E> {
        Ok(RecordDate::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RecordDate, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E: de::Error>(self, _v: i64) -> Result<RecordDate, E> {
        Ok(Self::unreadable("number"))
    }

    fn visit_u64<E: de::Error>(self, _v: u64) -> Result<RecordDate, E> {
        Ok(Self::unreadable("number"))
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<RecordDate, E> {
        Ok(Self::unreadable("number"))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<RecordDate, E> {
        Ok(Self::unreadable("boolean"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RecordDate, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Self::unreadable("array"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RecordDate, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Self::unreadable("object"))
    }
}
