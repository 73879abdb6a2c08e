use std::fmt;

use chrono::Utc;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::{Map, Value};

use golli_types::Timestamp;

use crate::error::{IngestError, IngestResult};
use crate::stamp::{Ingest, IngestSource};

/// Run the full pipeline over a buffered request body, stamping with the
/// current UTC time.
pub fn ingest<T: Ingest>(body: &[u8]) -> IngestResult<T> {
    ingest_at(body, Utc::now())
}

/// Run the full pipeline with an explicit creation time.
pub fn ingest_at<T: Ingest>(body: &[u8], now: Timestamp) -> IngestResult<T> {
    let fields = parse_fields(body)?;
    reject_nulls(&fields)?;

    let draft: T::Draft = serde_json::from_slice(body).map_err(|e| IngestError::SchemaMismatch {
        kind: T::KIND,
        reason: e.to_string(),
    })?;

    let source = IngestSource {
        raw: body,
        fields: &fields.map,
        now,
    };
    let entity = T::stamp(draft, &source)?;
    tracing::debug!(kind = T::KIND, id = entity.id(), "entity ingested");
    Ok(entity)
}

/// Untyped view of a request body.
///
/// `map` keeps the last value of each top-level key, as JSON decoding
/// usually does. Explicit nulls are recorded separately while the body is
/// read, so a repeated key cannot hide one.
#[derive(Debug, Default)]
pub struct BodyFields {
    pub map: Map<String, Value>,
    nulls: Vec<String>,
}

impl BodyFields {
    /// Every top-level key that carried an explicit `null`, in body order.
    pub fn null_keys(&self) -> &[String] {
        &self.nulls
    }
}

impl<'de> Deserialize<'de> for BodyFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BodyFieldsVisitor)
    }
}

struct BodyFieldsVisitor;

impl<'de> Visitor<'de> for BodyFieldsVisitor {
    type Value = BodyFields;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<BodyFields, A::Error> {
        let mut fields = BodyFields::default();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            if value.is_null() {
                fields.nulls.push(key.clone());
            }
            fields.map.insert(key, value);
        }
        Ok(fields)
    }
}

/// Stage 1: decode the body into an untyped JSON object.
pub fn parse_fields(body: &[u8]) -> IngestResult<BodyFields> {
    serde_json::from_slice(body).map_err(|e| IngestError::MalformedBody(e.to_string()))
}

/// Stage 2: fail on the first field whose value was an explicit `null`.
///
/// Absent fields are fine; only `null` is rejected. Only top-level fields are
/// inspected.
pub fn reject_nulls(fields: &BodyFields) -> IngestResult<()> {
    match fields.null_keys().first() {
        Some(key) => Err(IngestError::InvalidField(key.clone())),
        None => Ok(()),
    }
}
