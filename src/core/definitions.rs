use serde::{Deserialize, Serialize};

use super::archive::{nullable, Archivable};
use super::PropertyModel;
use crate::config::DecodeOptions;
use crate::error::Result;
use crate::types::{Fields, PropertyMap};

const KIND: &str = "ProcessDefinition";

const ID: &[&str] = &["id"];
const CATEGORY: &[&str] = &["category"];
const NAME: &[&str] = &["name"];
const START_FORM_KEY: &[&str] = &["startFormKey", "startFormResourceKey"];
const DEPLOYMENT_ID: &[&str] = &["deploymentId"];
const GRAPHIC_NOTATION_DEFINED: &[&str] = &["graphicNotationDefined"];
const KEY: &[&str] = &["key"];
const VERSION: &[&str] = &["version"];

/// A workflow process definition: a named, versioned template registered by a deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProcessDefinition {
    identifier: String,
    #[serde(deserialize_with = "nullable")]
    category: Option<String>,
    name: String,
    #[serde(deserialize_with = "nullable")]
    start_form_key: Option<String>,
    deployment_identifier: String,
    graphic_notation_defined: bool,
    key: String,
    version: i32,
}

impl ProcessDefinition {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key of the form used to start an instance of this process, if it has one.
    pub fn start_form_key(&self) -> Option<&str> {
        self.start_form_key.as_deref()
    }

    pub fn deployment_identifier(&self) -> &str {
        &self.deployment_identifier
    }

    /// Whether the server holds a diagram for this definition.
    pub fn graphic_notation_defined(&self) -> bool {
        self.graphic_notation_defined
    }

    /// Stable key shared by every version of the definition.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    fn assemble(fields: &Fields<'_>, identifier: String) -> Self {
        Self {
            identifier,
            category: fields.string(CATEGORY),
            name: fields.string(NAME).unwrap_or_default(),
            start_form_key: fields.string(START_FORM_KEY),
            deployment_identifier: fields.string(DEPLOYMENT_ID).unwrap_or_default(),
            graphic_notation_defined: fields.boolean(GRAPHIC_NOTATION_DEFINED).unwrap_or_default(),
            key: fields.string(KEY).unwrap_or_default(),
            version: fields.int(VERSION).unwrap_or_default(),
        }
    }
}

impl PropertyModel for ProcessDefinition {
    fn from_properties(props: &PropertyMap) -> Self {
        let fields = Fields::new(KIND, props);
        let identifier = fields.string(ID).unwrap_or_default();
        Self::assemble(&fields, identifier)
    }

    fn try_from_properties(props: &PropertyMap, options: &DecodeOptions) -> Result<Self> {
        let fields = Fields::new(KIND, props);
        let identifier = fields.required_string(ID, options)?;
        Ok(Self::assemble(&fields, identifier))
    }

    fn to_properties(&self) -> PropertyMap {
        let mut props = PropertyMap::new()
            .with(ID[0], self.identifier.as_str())
            .with(NAME[0], self.name.as_str())
            .with(DEPLOYMENT_ID[0], self.deployment_identifier.as_str())
            .with(GRAPHIC_NOTATION_DEFINED[0], self.graphic_notation_defined)
            .with(KEY[0], self.key.as_str())
            .with(VERSION[0], self.version);
        if let Some(category) = &self.category {
            props.insert(CATEGORY[0], category.as_str());
        }
        if let Some(start_form_key) = &self.start_form_key {
            props.insert(START_FORM_KEY[0], start_form_key.as_str());
        }
        props
    }
}

impl Archivable for ProcessDefinition {
    const ARCHIVE_KIND: &'static str = KIND;
}
