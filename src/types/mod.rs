//! Property-bag input types shared by every model object.

mod property_map;
mod xml;

pub use property_map::PropertyMap;
pub(crate) use property_map::Fields;
