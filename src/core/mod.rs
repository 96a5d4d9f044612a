//! Model objects and the contracts they share.

mod archive;
mod definitions;
mod join_site_request;
mod paging;

pub use archive::{Archivable, Archive, ARCHIVE_FORMAT};
pub use definitions::ProcessDefinition;
pub use join_site_request::JoinSiteRequest;
pub use paging::{PagedList, Pagination};

use crate::config::DecodeOptions;
use crate::error::Result;
use crate::types::PropertyMap;

/// Construction from, and conversion back to, a server property bag.
pub trait PropertyModel: Sized {
    /// Build an instance, defaulting any missing or malformed field. Never fails.
    fn from_properties(props: &PropertyMap) -> Self;

    /// Build an instance honoring `options`; strict mode rejects a missing required field.
    fn try_from_properties(props: &PropertyMap, options: &DecodeOptions) -> Result<Self>;

    /// Properties keyed by primary server field names. Unset optional fields are omitted.
    fn to_properties(&self) -> PropertyMap;
}
