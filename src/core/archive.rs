//! Archival encoding shared by every model object.
//!
//! A record is a JSON envelope tagged with the model's kind and a format revision:
//!
//! ```json
//! {"kind": "JoinSiteRequest", "format": 1, "fields": {"shortName": "eng", "identifier": null, "message": null}}
//! ```
//!
//! Every field is written, including unset ones, and every field must be present when reading.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ModelError, Result};

/// Format revision written by [`Archive::encode`].
pub const ARCHIVE_FORMAT: u32 = 1;

/// Marks a model type as archivable under a stable kind tag.
pub trait Archivable: Serialize + DeserializeOwned {
    const ARCHIVE_KIND: &'static str;
}

/// Symmetric encode/decode to an opaque byte record.
pub trait Archive: Sized {
    fn encode(&self) -> Result<Vec<u8>>;
    fn decode(bytes: &[u8]) -> Result<Self>;
}

#[derive(Serialize)]
struct RecordRef<'a, T> {
    kind: &'a str,
    format: u32,
    fields: &'a T,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Record {
    kind: String,
    format: u32,
    fields: Value,
}

impl<T: Archivable> Archive for T {
    fn encode(&self) -> Result<Vec<u8>> {
        let record = RecordRef {
            kind: T::ARCHIVE_KIND,
            format: ARCHIVE_FORMAT,
            fields: self,
        };
        Ok(serde_json::to_vec(&record)?)
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        let record: Record = serde_json::from_slice(bytes)?;
        if record.kind != T::ARCHIVE_KIND {
            return Err(ModelError::ArchiveKindMismatch {
                expected: T::ARCHIVE_KIND,
                found: record.kind,
            });
        }
        if record.format != ARCHIVE_FORMAT {
            return Err(ModelError::UnsupportedArchiveFormat(record.format));
        }
        Ok(serde_json::from_value(record.fields)?)
    }
}

/// Reads an `Option` field that must be present in the record, even if `null`.
///
/// Plain `Option` fields are silently defaulted by serde when missing.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Sample {
        name: String,
        #[serde(deserialize_with = "nullable")]
        note: Option<String>,
    }

    impl Archivable for Sample {
        const ARCHIVE_KIND: &'static str = "Sample";
    }

    #[test]
    fn test_encode_writes_unset_fields() {
        let bytes = Sample {
            name: "a".into(),
            note: None,
        }
        .encode()
        .unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"kind": "Sample", "format": 1, "fields": {"name": "a", "note": null}})
        );
    }

    #[test]
    fn test_decode_requires_nullable_field() {
        let bytes = br#"{"kind":"Sample","format":1,"fields":{"name":"a"}}"#;
        assert!(matches!(Sample::decode(bytes), Err(ModelError::Json(_))));
    }

    #[test]
    fn test_decode_checks_envelope() {
        let wrong_kind = br#"{"kind":"Other","format":1,"fields":{"name":"a","note":null}}"#;
        assert!(matches!(
            Sample::decode(wrong_kind),
            Err(ModelError::ArchiveKindMismatch { expected: "Sample", .. })
        ));

        let wrong_format = br#"{"kind":"Sample","format":9,"fields":{"name":"a","note":null}}"#;
        assert!(matches!(
            Sample::decode(wrong_format),
            Err(ModelError::UnsupportedArchiveFormat(9))
        ));
    }
}
