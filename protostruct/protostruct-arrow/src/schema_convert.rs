use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};
use protostruct_core::{FieldInfo, ObjectInspector, PrimitiveCategory, TypeInfo};

use crate::error::ArrowBridgeError;

// ---------------------------------------------------------------------------
// TypeInfo -> Arrow
// ---------------------------------------------------------------------------

/// Name of the child field of every Arrow `List` produced here.
pub const LIST_ITEM_NAME: &str = "item";

/// Converts struct members into an Arrow `Schema`, one top-level column per
/// member in declaration order.
///
/// Every column is nullable: an engine record may lack any field.
pub fn field_infos_to_arrow_schema(fields: &[FieldInfo]) -> Schema {
    let arrow_fields: Vec<Field> = fields.iter().map(field_info_to_arrow_field).collect();
    Schema::new(arrow_fields)
}

/// Converts a struct `TypeInfo` into an Arrow `Schema`.
pub fn struct_type_info_to_arrow_schema(type_info: &TypeInfo) -> Result<Schema, ArrowBridgeError> {
    let Some(fields) = type_info.struct_fields() else {
        return Err(ArrowBridgeError::NotAStruct {
            type_name: type_info.to_string(),
        });
    };
    Ok(field_infos_to_arrow_schema(fields))
}

/// Converts the type exposed by a struct inspector into an Arrow `Schema`.
pub fn inspector_to_arrow_schema(
    inspector: &impl ObjectInspector,
) -> Result<Schema, ArrowBridgeError> {
    struct_type_info_to_arrow_schema(&inspector.type_info())
}

/// Converts any `TypeInfo` into the matching Arrow `DataType`.
pub fn type_info_to_arrow_type(type_info: &TypeInfo) -> DataType {
    match type_info {
        TypeInfo::Primitive(category) => primitive_to_arrow_type(*category),
        TypeInfo::List(element) => DataType::List(Arc::new(Field::new(
            LIST_ITEM_NAME,
            type_info_to_arrow_type(element),
            true,
        ))),
        TypeInfo::Struct(fields) => {
            let arrow_fields: Vec<Field> = fields.iter().map(field_info_to_arrow_field).collect();
            DataType::Struct(arrow_fields.into())
        }
    }
}

fn field_info_to_arrow_field(field: &FieldInfo) -> Field {
    Field::new(&field.name, type_info_to_arrow_type(&field.type_info), true)
}

fn primitive_to_arrow_type(category: PrimitiveCategory) -> DataType {
    match category {
        PrimitiveCategory::Int => DataType::Int32,
        PrimitiveCategory::Long => DataType::Int64,
        PrimitiveCategory::Float => DataType::Float32,
        PrimitiveCategory::Double => DataType::Float64,
        PrimitiveCategory::Boolean => DataType::Boolean,
        PrimitiveCategory::String => DataType::Utf8,
        PrimitiveCategory::Binary => DataType::Binary,
    }
}
