//! Decoding of the server's list envelopes into typed pages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PropertyModel;
use crate::config::DecodeOptions;
use crate::error::{ModelError, Result};
use crate::types::PropertyMap;

/// Paging metadata returned alongside a list of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub count: u64,
    pub has_more_items: bool,
    pub total_items: Option<u64>,
    pub skip_count: u64,
    pub max_items: Option<u64>,
}

impl Pagination {
    /// Metadata for a complete, unpaged list of `count` items.
    pub fn complete(count: usize) -> Self {
        let count = count as u64;
        Self {
            count,
            has_more_items: false,
            total_items: Some(count),
            skip_count: 0,
            max_items: None,
        }
    }
}

/// One page of model objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T: PropertyModel> PagedList<T> {
    /// Decode `{"list": {"pagination": {...}, "entries": [{"entry": {...}}, ...]}}`.
    pub fn from_public_json(document: &Value, options: &DecodeOptions) -> Result<Self> {
        let list = document
            .get("list")
            .ok_or_else(|| ModelError::InvalidDocument("missing `list` object".into()))?;
        let entries = list
            .get("entries")
            .and_then(Value::as_array)
            .ok_or_else(|| ModelError::InvalidDocument("missing `list.entries` array".into()))?;

        let items = decode_entries(
            entries.iter().map(|e| e.get("entry").unwrap_or(e)),
            options,
        )?;
        let pagination = match list.get("pagination") {
            Some(p) => match serde_json::from_value(p.clone()) {
                Ok(pagination) => pagination,
                Err(err) if options.is_strict() => return Err(err.into()),
                Err(err) => {
                    tracing::warn!(error = %err, "Ignoring malformed pagination block");
                    Pagination::complete(items.len())
                }
            },
            None => Pagination::complete(items.len()),
        };
        Ok(Self { items, pagination })
    }

    /// Decode `{"data": [...]}` or a bare array, as returned by the legacy API.
    pub fn from_legacy_json(document: &Value, options: &DecodeOptions) -> Result<Self> {
        let entries = match document {
            Value::Array(entries) => entries,
            other => other
                .get("data")
                .and_then(Value::as_array)
                .ok_or_else(|| ModelError::InvalidDocument("missing `data` array".into()))?,
        };
        let items = decode_entries(entries.iter(), options)?;
        Ok(Self {
            pagination: Pagination::complete(items.len()),
            items,
        })
    }
}

fn decode_entries<'a, T, I>(entries: I, options: &DecodeOptions) -> Result<Vec<T>>
where
    T: PropertyModel,
    I: Iterator<Item = &'a Value>,
{
    let mut items = Vec::new();
    for (index, entry) in entries.enumerate() {
        match entry {
            Value::Object(map) => {
                let props = PropertyMap::from(map.clone());
                items.push(T::try_from_properties(&props, options)?);
            }
            _ if options.is_strict() => {
                return Err(ModelError::InvalidDocument(format!(
                    "entry {index} is not an object"
                )));
            }
            _ => tracing::warn!(index, "Skipping list entry that is not an object"),
        }
    }
    Ok(items)
}
