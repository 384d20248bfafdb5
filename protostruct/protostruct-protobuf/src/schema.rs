//! Build struct inspectors from a serialized protobuf `FileDescriptorSet`.

use prost_reflect::{DescriptorPool, MessageDescriptor};
use protostruct_core::InspectorError;

use crate::inspector::ProtobufStructInspector;

/// Build the struct inspector for `schema_name` from the given protobuf
/// `FileDescriptorSet` bytes.
///
/// `schema_name` is the fully-qualified protobuf message name
/// (e.g. `"my.package.MyMessage"`).  `schema_data` must be a valid
/// serialized `google.protobuf.FileDescriptorSet`.
pub fn struct_inspector_for_message(
    schema_name: &str,
    schema_data: &[u8],
) -> Result<ProtobufStructInspector, InspectorError> {
    let message_desc = parse_message_descriptor(schema_name, schema_data)?;
    ProtobufStructInspector::new(message_desc)
}

/// Decode `schema_data` and look up `schema_name` in it.
pub fn parse_message_descriptor(
    schema_name: &str,
    schema_data: &[u8],
) -> Result<MessageDescriptor, InspectorError> {
    let pool = DescriptorPool::decode(schema_data).map_err(|e| InspectorError::SchemaParse {
        schema_name: schema_name.to_string(),
        source: Box::new(e),
    })?;
    pool.get_message_by_name(schema_name)
        .ok_or_else(|| InspectorError::MessageNotFound {
            schema_name: schema_name.to_string(),
        })
}
