//! Decoding configuration.
//!
//! These options are plain serde types so a host application can embed them in its own
//! configuration file.

use serde::{Deserialize, Serialize};

/// How the property-mapping constructors treat a missing required field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Missing required fields take their default value.
    #[default]
    Lenient,
    /// Missing, null or blank required fields fail construction.
    Strict,
}

/// Options for `try_from_properties` and list decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub strictness: Strictness,
}

impl DecodeOptions {
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
        }
    }

    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            strictness: Strictness::Lenient,
        }
    }

    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self.strictness, Strictness::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        assert_eq!(DecodeOptions::default(), DecodeOptions::lenient());
        assert!(!DecodeOptions::default().is_strict());
    }

    #[test]
    fn test_deserialize_from_config() {
        let options: DecodeOptions = serde_json::from_str(r#"{"strictness":"strict"}"#).unwrap();
        assert!(options.is_strict());

        let options: DecodeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.strictness, Strictness::Lenient);
    }
}
