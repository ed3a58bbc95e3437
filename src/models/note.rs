use crate::schema::notes;
use crate::validation::NoteFields;
use chrono::{NaiveDateTime, SubsecRound, Utc};
use diesel::{Insertable, Queryable};
use nanoid::nanoid;
use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Queryable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = notes)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(with = "utc_timestamp")]
    pub created_at: NaiveDateTime,
}

impl Note {
    /// Builds a fresh note with a generated id. The timestamp is cut to
    /// microseconds so it survives a round trip through either backend.
    pub fn new(fields: NoteFields) -> Self {
        Note {
            id: nanoid!(),
            title: fields.title,
            content: fields.content,
            created_at: Utc::now().naive_utc().trunc_subsecs(6),
        }
    }
}

/// Request body for create and update. Both fields are optional here so
/// that absence is reported by validation instead of the JSON extractor.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct NoteInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl NoteInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        NoteInput {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    pub fn validate(&self) -> Result<NoteFields, crate::errors::ServerError> {
        crate::validation::validate(self.title.as_deref(), self.content.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    /// The id, if present and not blank.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

/// `createdAt` travels as RFC 3339 in UTC while the column stays a plain
/// `TIMESTAMP` on both backends.
mod utc_timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        let utc = DateTime::<Utc>::from_naive_utc_and_offset(*time, Utc);
        s.serialize_str(&utc.to_rfc3339_opts(SecondsFormat::Micros, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|time| time.naive_utc())
            .map_err(serde::de::Error::custom)
    }
}
