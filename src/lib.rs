//! Typed, immutable model objects for the content server's workflow and site APIs.
//!
//! Objects are built from a loosely typed [`PropertyMap`] produced by a response parser, and can
//! be archived to bytes for caching.
//!
//! ```
//! use alfresco_model::{Archive, ProcessDefinition, PropertyMap, PropertyModel};
//!
//! let props = PropertyMap::from_json_str(r#"{"id": "wf-42", "version": "3"}"#)?;
//! let definition = ProcessDefinition::from_properties(&props);
//! assert_eq!(definition.version(), 3);
//!
//! let restored = ProcessDefinition::decode(&definition.encode()?)?;
//! assert_eq!(restored, definition);
//! # Ok::<(), alfresco_model::ModelError>(())
//! ```
//!
//! Fields can only be set at construction:
//!
//! ```compile_fail
//! use alfresco_model::JoinSiteRequest;
//!
//! let mut request = JoinSiteRequest::new("req-1", "please admit me");
//! request.short_name = String::from("engineering");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use crate::config::{DecodeOptions, Strictness};
pub use crate::core::{
    Archivable, Archive, JoinSiteRequest, PagedList, Pagination, ProcessDefinition, PropertyModel,
};
pub use crate::error::{ModelError, Result};
pub use crate::types::PropertyMap;
