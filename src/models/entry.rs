use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::carbon::percent_cleaner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
}

impl Rating {
    pub fn from_carbon(carbon: f64) -> Self {
        if carbon < 0.2 {
            Rating::APlus
        } else if carbon < 0.4 {
            Rating::A
        } else if carbon < 0.6 {
            Rating::B
        } else {
            Rating::C
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::APlus => write!(f, "A+"),
            Rating::A => write!(f, "A"),
            Rating::B => write!(f, "B"),
            Rating::C => write!(f, "C"),
        }
    }
}

// Older data files carry percentCleaner as a numeric string
fn deserialize_percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(u8),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
        StringOrInt::Int(i) => Ok(i),
    }
}

/// RFC 3339 timestamps that always carry milliseconds (`...15.000Z`).
mod millis_date {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

/// One carbon check, as persisted in the record store and returned by the API.
///
/// `rating` and `percent_cleaner` are fixed when the entry is created and are
/// never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,
    pub url: String,
    pub carbon: f64,
    pub rating: Rating,
    #[serde(deserialize_with = "deserialize_percent")]
    pub percent_cleaner: u8,
    #[serde(with = "millis_date")]
    pub date: DateTime<Utc>,
}

impl Entry {
    /// Build a new entry ranked against `existing`, the entries stored before it.
    pub fn new(url: String, carbon: f64, existing: &[Entry], now: DateTime<Utc>) -> Self {
        let id = now.timestamp_millis();
        Self {
            id,
            url,
            carbon,
            rating: Rating::from_carbon(carbon),
            percent_cleaner: percent_cleaner(carbon, existing),
            date: DateTime::from_timestamp_millis(id).unwrap_or(now),
        }
    }
}
