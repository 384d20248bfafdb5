//! Struct inspector over one protobuf message type.

use std::hash::{Hash, Hasher};

use bytes::{Buf, BufMut, BytesMut};
use prost_reflect::{DynamicMessage, FieldDescriptor, MessageDescriptor, ReflectMessage, Value};
use protostruct_core::{
    Category, FieldInfo, InspectorError, ObjectInspector, SettableStructInspector, StructField,
    StructInspector, TypeInfo,
};
use tracing::debug;

use crate::{
    codec::{SchemaCodec, TypeLocator, put_unit},
    coerce::coerce_field_value,
    field::ProtobufStructField,
    signature::TypeSignature,
};

/// Inspector exposing a protobuf message type as an engine struct.
///
/// Owns one [`ProtobufStructField`] per declared field, in declaration order.
/// Field access always re-resolves fields by name on the record's own
/// descriptor, so records and inspectors built from independently decoded
/// schemas interoperate.
///
/// Two inspectors are equal when their message types expand into the same
/// type tree, regardless of which descriptor pool they came from.
#[derive(Debug, Clone)]
pub struct ProtobufStructInspector {
    descriptor: MessageDescriptor,
    signature: TypeSignature,
    fields: Vec<ProtobufStructField>,
}

impl ProtobufStructInspector {
    /// Build the inspector tree for `descriptor`.
    ///
    /// Fails with [`InspectorError::RecursiveType`] when the message contains
    /// itself, directly or through nested messages.
    pub fn new(descriptor: MessageDescriptor) -> Result<Self, InspectorError> {
        Self::build(descriptor, &mut Vec::new())
    }

    pub(crate) fn build(
        descriptor: MessageDescriptor,
        ancestors: &mut Vec<String>,
    ) -> Result<Self, InspectorError> {
        if ancestors.iter().any(|name| name == descriptor.full_name()) {
            return Err(InspectorError::RecursiveType {
                type_name: descriptor.full_name().to_string(),
            });
        }

        ancestors.push(descriptor.full_name().to_string());
        let fields = descriptor
            .fields()
            .map(|field| ProtobufStructField::build(field, ancestors))
            .collect::<Result<Vec<_>, _>>();
        ancestors.pop();

        Ok(Self {
            signature: TypeSignature::of(&descriptor),
            descriptor,
            fields: fields?,
        })
    }

    pub fn descriptor(&self) -> &MessageDescriptor {
        &self.descriptor
    }

    /// Write the message's locator followed by its whole file schema.
    /// Nothing is written when either part fails.
    pub fn serialize_to(
        &self,
        codec: &SchemaCodec,
        sink: &mut impl BufMut,
    ) -> Result<(), InspectorError> {
        let mut unit = BytesMut::new();
        TypeLocator::of(&self.descriptor)?.encode(&mut unit)?;
        codec.encode_file(self.descriptor.parent_file().file_descriptor_proto(), &mut unit)?;
        put_unit(sink, &unit)
    }

    /// Rebuild an inspector tree from bytes written by
    /// [`ProtobufStructInspector::serialize_to`].
    pub fn deserialize_from(
        codec: &SchemaCodec,
        source: &mut impl Buf,
    ) -> Result<Self, InspectorError> {
        let locator = TypeLocator::decode(source)?;
        let file = codec.decode_file(source)?;
        let descriptor = locator.resolve(&file)?;
        debug!(type_name = descriptor.full_name(), "rebuilt struct inspector");
        Self::new(descriptor)
    }

    fn field_not_found(&self, name: &str) -> InspectorError {
        InspectorError::FieldNotFound {
            type_name: self.descriptor.full_name().to_string(),
            field: name.to_string(),
        }
    }
}

impl PartialEq for ProtobufStructInspector {
    fn eq(&self, other: &Self) -> bool {
        self.signature == other.signature
    }
}

impl Eq for ProtobufStructInspector {}

impl Hash for ProtobufStructInspector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.descriptor.full_name().hash(state);
    }
}

impl ObjectInspector for ProtobufStructInspector {
    fn category(&self) -> Category {
        Category::Struct
    }

    fn type_info(&self) -> TypeInfo {
        TypeInfo::Struct(
            self.fields
                .iter()
                .map(|f| FieldInfo::new(f.field_name(), f.field_inspector().type_info()))
                .collect(),
        )
    }
}

impl StructInspector for ProtobufStructInspector {
    type Data = DynamicMessage;
    type Value = Value;
    type Field = ProtobufStructField;

    fn fields(&self) -> &[ProtobufStructField] {
        &self.fields
    }

    /// Exact match first, then a match of the lower-cased declared name
    /// against `name`, so exact matches win when both exist.
    fn field_by_name(&self, name: &str) -> Result<&ProtobufStructField, InspectorError> {
        self.fields
            .iter()
            .find(|f| f.field_name() == name)
            .or_else(|| {
                self.fields
                    .iter()
                    .find(|f| f.field_name().to_lowercase() == name)
            })
            .ok_or_else(|| self.field_not_found(name))
    }

    fn field_data(
        &self,
        data: Option<&DynamicMessage>,
        field: &ProtobufStructField,
    ) -> Result<Option<Value>, InspectorError> {
        let Some(message) = data else {
            return Ok(None);
        };
        let runtime_field = runtime_field(message, field.field_name())?;
        let value = message.get_field(&runtime_field).into_owned();
        Ok(Some(coerce_field_value(value, &runtime_field)))
    }

    fn fields_data_as_list(
        &self,
        data: Option<&DynamicMessage>,
    ) -> Result<Option<Vec<Value>>, InspectorError> {
        let Some(message) = data else {
            return Ok(None);
        };
        self.fields
            .iter()
            .map(|field| {
                let runtime_field = runtime_field(message, field.field_name())?;
                Ok(message.get_field(&runtime_field).into_owned())
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

impl SettableStructInspector for ProtobufStructInspector {
    fn create(&self) -> DynamicMessage {
        DynamicMessage::new(self.descriptor.clone())
    }

    fn set_field_data(
        &self,
        data: &DynamicMessage,
        field: &ProtobufStructField,
        value: Value,
    ) -> Result<DynamicMessage, InspectorError> {
        let descriptor = data.descriptor();
        let invalid = |detail: String| InspectorError::InvalidFieldAssignment {
            type_name: descriptor.full_name().to_string(),
            field: field.field_name().to_string(),
            detail,
        };

        let runtime_field = descriptor
            .get_field_by_name(field.field_name())
            .ok_or_else(|| invalid("field is not declared by the record's type".to_string()))?;
        if !value.is_valid_for_field(&runtime_field) {
            return Err(invalid(format!(
                "value {value:?} does not fit kind {:?}",
                runtime_field.kind()
            )));
        }

        let mut updated = data.clone();
        updated.set_field(&runtime_field, value);
        Ok(updated)
    }
}

fn runtime_field(message: &DynamicMessage, name: &str) -> Result<FieldDescriptor, InspectorError> {
    let descriptor = message.descriptor();
    descriptor
        .get_field_by_name(name)
        .ok_or_else(|| InspectorError::FieldNotFound {
            type_name: descriptor.full_name().to_string(),
            field: name.to_string(),
        })
}
