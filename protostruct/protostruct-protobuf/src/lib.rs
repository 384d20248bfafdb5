//! Protobuf struct inspectors for the protostruct engine contract.
//!
//! This crate provides [`ProtobufStructInspector`], which exposes a protobuf
//! message type as an engine struct, and [`ProtobufStructField`] for its
//! members. Both can be serialized with a [`SchemaCodec`] and rebuilt in
//! another process that shares nothing but the bytes: the whole file schema
//! travels in a fixed-size frame together with a [`TypeLocator`] pointing at
//! the message inside it.

mod cache;
mod codec;
mod coerce;
mod field;
mod inspector;
mod schema;
mod signature;

pub use cache::InspectorCache;
pub use codec::{DEFAULT_FRAME_CAPACITY, SchemaCodec, TypeLocator};
pub use coerce::coerce_field_value;
pub use field::{ProtobufFieldInspector, ProtobufStructField};
pub use inspector::ProtobufStructInspector;
pub use schema::{parse_message_descriptor, struct_inspector_for_message};
