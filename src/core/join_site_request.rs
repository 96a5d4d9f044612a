use serde::{Deserialize, Serialize};

use super::archive::{nullable, Archivable};
use super::PropertyModel;
use crate::config::DecodeOptions;
use crate::error::Result;
use crate::types::{Fields, PropertyMap};

const KIND: &str = "JoinSiteRequest";

// Legacy moderated-invitation responses use `resourceName`, `inviteId` and `inviteeComments`.
const SHORT_NAME: &[&str] = &["shortName", "resourceName"];
const IDENTIFIER: &[&str] = &["id", "identifier", "inviteId"];
const MESSAGE: &[&str] = &["message", "inviteeComments"];

/// A pending request by the current user to join a moderated site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JoinSiteRequest {
    short_name: String,
    #[serde(deserialize_with = "nullable")]
    identifier: Option<String>,
    #[serde(deserialize_with = "nullable")]
    message: Option<String>,
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

impl JoinSiteRequest {
    /// A request built on the client before the target site is known.
    ///
    /// `short_name` is left empty. Empty `identifier` or `message` strings are treated as unset.
    pub fn new(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self::for_site(String::new(), identifier, message)
    }

    pub fn for_site(
        short_name: impl Into<String>,
        identifier: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            short_name: short_name.into(),
            identifier: non_empty(identifier.into()),
            message: non_empty(message.into()),
        }
    }

    /// Short name of the site the request targets.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Server-assigned identifier of the request, once known.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn assemble(fields: &Fields<'_>, short_name: String) -> Self {
        Self {
            short_name,
            identifier: fields.string(IDENTIFIER).and_then(non_empty),
            message: fields.string(MESSAGE).and_then(non_empty),
        }
    }
}

impl PropertyModel for JoinSiteRequest {
    fn from_properties(props: &PropertyMap) -> Self {
        let fields = Fields::new(KIND, props);
        let short_name = fields.string(SHORT_NAME).unwrap_or_default();
        Self::assemble(&fields, short_name)
    }

    fn try_from_properties(props: &PropertyMap, options: &DecodeOptions) -> Result<Self> {
        let fields = Fields::new(KIND, props);
        let short_name = fields.required_string(SHORT_NAME, options)?;
        Ok(Self::assemble(&fields, short_name))
    }

    fn to_properties(&self) -> PropertyMap {
        let mut props = PropertyMap::new().with(SHORT_NAME[0], self.short_name.as_str());
        if let Some(identifier) = &self.identifier {
            props.insert(IDENTIFIER[0], identifier.as_str());
        }
        if let Some(message) = &self.message {
            props.insert(MESSAGE[0], message.as_str());
        }
        props
    }
}

impl Archivable for JoinSiteRequest {
    const ARCHIVE_KIND: &'static str = KIND;
}
