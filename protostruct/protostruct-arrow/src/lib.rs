//! Arrow integration layer for `protostruct`.
//!
//! Converts `protostruct-core` type descriptions ([`TypeInfo`]) into Arrow
//! `DataType`s and `Schema`s, so a columnar engine can allocate builders for
//! records exposed through a struct inspector.
//!
//! Conversion follows the engine's type names one-to-one:
//! - `int`/`bigint` become `Int32`/`Int64`, `float`/`double` become
//!   `Float32`/`Float64`.
//! - `string` becomes `Utf8` and `binary` becomes `Binary`.
//! - `array<T>` becomes a `List` with a nullable `item` child.
//! - `struct<...>` becomes a `Struct` with nullable children.
//!
//! # Typical Flow
//! ```rust
//! use protostruct_arrow::struct_type_info_to_arrow_schema;
//! use protostruct_core::{FieldInfo, PrimitiveCategory, TypeInfo};
//!
//! let person = TypeInfo::Struct(vec![FieldInfo::new(
//!     "age",
//!     TypeInfo::Primitive(PrimitiveCategory::Int),
//! )]);
//! let schema = struct_type_info_to_arrow_schema(&person).unwrap();
//! assert_eq!(schema.field(0).name(), "age");
//! ```
//!
//! [`TypeInfo`]: protostruct_core::TypeInfo
pub mod error;
pub mod schema_convert;

/// Re-export of [`error::ArrowBridgeError`].
pub use error::ArrowBridgeError;
/// Re-exports from [`schema_convert`].
pub use schema_convert::{
    LIST_ITEM_NAME, field_infos_to_arrow_schema, inspector_to_arrow_schema,
    struct_type_info_to_arrow_schema, type_info_to_arrow_type,
};
