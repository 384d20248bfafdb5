//! Schema-agnostic struct reflection contracts for `protostruct`.
//!
//! This crate provides the engine-side vocabulary ([`Category`] /
//! [`TypeInfo`]), the inspector traits implemented by schema adapters, the
//! primitive singletons and list factory the engine supplies, and the shared
//! [`InspectorError`] taxonomy.

mod error;
mod inspector;
mod type_info;

pub use error::InspectorError;
pub use inspector::{
    FieldInspector, ListInspector, ObjectInspector, PrimitiveInspector, SettableStructInspector,
    StructField, StructInspector,
};
pub use type_info::{
    Category, FieldInfo, PrimitiveCategory, TypeInfo, format_field_infos, format_type_info,
};
