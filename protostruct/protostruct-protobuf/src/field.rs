//! Struct member inspector over one protobuf field.

use std::sync::Arc;

use bytes::{Buf, BufMut, BytesMut};
use prost_reflect::{FieldDescriptor, Kind};
use protostruct_core::{
    FieldInspector, InspectorError, ListInspector, PrimitiveCategory, PrimitiveInspector,
    StructField,
};
use tracing::debug;

use crate::{
    codec::{SchemaCodec, TypeLocator, get_u32, put_unit},
    inspector::ProtobufStructInspector,
};

/// Resolved type of a protobuf field.
pub type ProtobufFieldInspector = FieldInspector<ProtobufStructInspector>;

/// Inspector for one field of a protobuf message.
///
/// The resolved type is computed once at construction; message-typed fields
/// own a freshly built nested [`ProtobufStructInspector`].
#[derive(Debug, Clone)]
pub struct ProtobufStructField {
    descriptor: FieldDescriptor,
    inspector: ProtobufFieldInspector,
}

impl ProtobufStructField {
    pub fn new(descriptor: FieldDescriptor) -> Result<Self, InspectorError> {
        Self::build(descriptor, &mut Vec::new())
    }

    /// `ancestors` holds the full names of the message types currently being
    /// built above this field.
    pub(crate) fn build(
        descriptor: FieldDescriptor,
        ancestors: &mut Vec<String>,
    ) -> Result<Self, InspectorError> {
        let element = element_inspector(&descriptor, ancestors)?;
        let inspector = if descriptor.is_list() || descriptor.is_map() {
            FieldInspector::List(ListInspector::new(element))
        } else {
            element
        };
        Ok(Self {
            descriptor,
            inspector,
        })
    }

    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    /// Write the field index, the containing message's locator and the whole
    /// file schema. Nothing is written when any part fails.
    pub fn serialize_to(
        &self,
        codec: &SchemaCodec,
        sink: &mut impl BufMut,
    ) -> Result<(), InspectorError> {
        let containing = self.descriptor.parent_message();
        let index = containing
            .fields()
            .position(|f| f.name() == self.descriptor.name())
            .ok_or_else(|| InspectorError::FieldNotFound {
                type_name: containing.full_name().to_string(),
                field: self.descriptor.name().to_string(),
            })?;

        let mut unit = BytesMut::new();
        unit.put_u32(index as u32);
        TypeLocator::of(containing)?.encode(&mut unit)?;
        codec.encode_file(containing.parent_file().file_descriptor_proto(), &mut unit)?;
        put_unit(sink, &unit)
    }

    /// Rebuild a field inspector from bytes written by
    /// [`ProtobufStructField::serialize_to`].
    pub fn deserialize_from(
        codec: &SchemaCodec,
        source: &mut impl Buf,
    ) -> Result<Self, InspectorError> {
        let index = get_u32(source)? as usize;
        let locator = TypeLocator::decode(source)?;
        let file = codec.decode_file(source)?;
        let containing = locator.resolve(&file)?;
        let descriptor = containing.fields().nth(index).ok_or_else(|| {
            InspectorError::SchemaValidation {
                schema_name: file.name().to_string(),
                source: format!(
                    "field index {index} out of range for '{}'",
                    containing.full_name()
                )
                .into(),
            }
        })?;
        debug!(field = descriptor.full_name(), "rebuilt field inspector");
        Self::new(descriptor)
    }
}

impl StructField for ProtobufStructField {
    type Inspector = ProtobufFieldInspector;

    fn field_name(&self) -> &str {
        self.descriptor.name()
    }

    fn field_inspector(&self) -> &Self::Inspector {
        &self.inspector
    }
}

fn element_inspector(
    field: &FieldDescriptor,
    ancestors: &mut Vec<String>,
) -> Result<ProtobufFieldInspector, InspectorError> {
    let category = match field.kind() {
        Kind::Int32 | Kind::Sint32 | Kind::Sfixed32 | Kind::Uint32 | Kind::Fixed32 => {
            PrimitiveCategory::Int
        }
        Kind::Int64 | Kind::Sint64 | Kind::Sfixed64 | Kind::Uint64 | Kind::Fixed64 => {
            PrimitiveCategory::Long
        }
        Kind::Float => PrimitiveCategory::Float,
        Kind::Double => PrimitiveCategory::Double,
        Kind::Bool => PrimitiveCategory::Boolean,
        Kind::String => PrimitiveCategory::String,
        Kind::Bytes => PrimitiveCategory::Binary,
        // Enum values surface as their symbolic name.
        Kind::Enum(_) => PrimitiveCategory::String,
        Kind::Message(message) => {
            let nested = ProtobufStructInspector::build(message, ancestors)?;
            return Ok(FieldInspector::Struct(Arc::new(nested)));
        }
    };
    Ok(FieldInspector::Primitive(PrimitiveInspector::get(category)))
}
