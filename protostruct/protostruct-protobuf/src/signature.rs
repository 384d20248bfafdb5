//! Structural identity of message types across descriptor pools.

use std::collections::BTreeMap;

use prost::Message;
use prost_reflect::{Kind, MessageDescriptor};

/// A message type's full name plus the encoded declaration of every message
/// and enum type reachable from it through its fields.
///
/// Two descriptors from independently built pools have equal signatures
/// exactly when they expand into the same type tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct TypeSignature {
    full_name: String,
    declarations: BTreeMap<String, Vec<u8>>,
}

impl TypeSignature {
    pub(crate) fn of(descriptor: &MessageDescriptor) -> Self {
        let mut declarations = BTreeMap::new();
        collect_message(descriptor, &mut declarations);
        Self {
            full_name: descriptor.full_name().to_string(),
            declarations,
        }
    }

    pub(crate) fn full_name(&self) -> &str {
        &self.full_name
    }
}

fn collect_message(message: &MessageDescriptor, out: &mut BTreeMap<String, Vec<u8>>) {
    if out.contains_key(message.full_name()) {
        return;
    }
    out.insert(
        message.full_name().to_string(),
        message.descriptor_proto().encode_to_vec(),
    );

    for field in message.fields() {
        match field.kind() {
            Kind::Message(nested) => collect_message(&nested, out),
            Kind::Enum(enum_desc) => {
                out.entry(enum_desc.full_name().to_string())
                    .or_insert_with(|| enum_desc.enum_descriptor_proto().encode_to_vec());
            }
            _ => {}
        }
    }
}
