use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::DecodeOptions;
use crate::error::{ModelError, Result};

/// A loosely typed property bag, as produced by a response parser.
///
/// Keys are server field names. Values are whatever the parser produced: strings from XML,
/// strings, numbers and booleans from JSON. Ordering of keys carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap(Map<String, Value>);

impl PropertyMap {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap a JSON value, which must be an object.
    pub fn from_json_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ModelError::InvalidDocument(format!(
                "expected a JSON object, found {}",
                value_kind(&other)
            ))),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Read a flat XML element: root attributes and direct children become properties.
    pub fn from_xml_str(xml: &str) -> Result<Self> {
        super::xml::parse(xml)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for PropertyMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Short name of a JSON value's type, for diagnostics.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn coerce_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).ok()
            } else {
                // Integral floats such as `3.0` are accepted.
                n.as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .filter(|f| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(f))
                    .map(|f| f as i32)
            }
        }
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Typed field extraction over a [`PropertyMap`].
///
/// Each lookup takes a list of keys; the first key holding a non-null value wins. Absent and
/// null values yield `None`. A value that cannot be coerced also yields `None`, after a warning.
pub(crate) struct Fields<'a> {
    kind: &'static str,
    props: &'a PropertyMap,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(kind: &'static str, props: &'a PropertyMap) -> Self {
        Self { kind, props }
    }

    fn lookup(&self, keys: &[&'static str]) -> Option<(&'static str, &'a Value)> {
        keys.iter()
            .find_map(|key| match self.props.get(key) {
                None | Some(Value::Null) => None,
                Some(value) => Some((*key, value)),
            })
    }

    fn coerce<T>(
        &self,
        keys: &[&'static str],
        expected: &'static str,
        coerce: fn(&Value) -> Option<T>,
    ) -> Option<T> {
        let (key, value) = self.lookup(keys)?;
        let coerced = coerce(value);
        if coerced.is_none() {
            tracing::warn!(
                kind = self.kind,
                field = key,
                expected,
                found = value_kind(value),
                "Ignoring malformed property value"
            );
        }
        coerced
    }

    pub(crate) fn string(&self, keys: &[&'static str]) -> Option<String> {
        self.coerce(keys, "string", coerce_string)
    }

    pub(crate) fn int(&self, keys: &[&'static str]) -> Option<i32> {
        self.coerce(keys, "integer", coerce_int)
    }

    pub(crate) fn boolean(&self, keys: &[&'static str]) -> Option<bool> {
        self.coerce(keys, "boolean", coerce_bool)
    }

    /// A required string field. In strict mode a missing, null or blank value is an error
    /// reported under the first key; in lenient mode it defaults to an empty string. A value of
    /// the wrong type defaults to an empty string in both modes.
    pub(crate) fn required_string(
        &self,
        keys: &[&'static str],
        options: &DecodeOptions,
    ) -> Result<String> {
        let found = match self.lookup(keys) {
            // Present but malformed: fail soft like any other field.
            Some(_) => match self.string(keys) {
                Some(s) if s.trim().is_empty() => s,
                Some(s) => return Ok(s),
                None => return Ok(String::new()),
            },
            None => String::new(),
        };
        if options.is_strict() {
            return Err(ModelError::MissingField {
                kind: self.kind,
                field: keys[0],
            });
        }
        tracing::debug!(kind = self.kind, field = keys[0], "Defaulting required field");
        Ok(found)
    }
}
