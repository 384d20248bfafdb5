//! Shared helpers for building protobuf schemas in tests.
#![allow(dead_code)]

use prost::Message;
use prost_reflect::{DescriptorPool, MessageDescriptor};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileDescriptorSet, OneofDescriptorProto,
    field_descriptor_proto::{Label, Type},
};

/// Build a proto3 file with the given message types and top-level enums.
pub fn build_file(
    file_name: &str,
    messages: Vec<DescriptorProto>,
    enums: Vec<EnumDescriptorProto>,
) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(file_name.to_string()),
        message_type: messages,
        enum_type: enums,
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

/// Build a `FileDescriptorSet` containing a single file with the given message
/// types and serialize it to bytes.
pub fn build_fds(file_name: &str, messages: Vec<DescriptorProto>) -> Vec<u8> {
    build_fds_with_enums(file_name, messages, vec![])
}

/// Build a `FileDescriptorSet` with messages and top-level enums.
pub fn build_fds_with_enums(
    file_name: &str,
    messages: Vec<DescriptorProto>,
    enums: Vec<EnumDescriptorProto>,
) -> Vec<u8> {
    let fds = FileDescriptorSet {
        file: vec![build_file(file_name, messages, enums)],
    };
    fds.encode_to_vec()
}

/// Load `file` into a fresh pool and look up `name` in it.
pub fn message_desc(file: FileDescriptorProto, name: &str) -> MessageDescriptor {
    let mut pool = DescriptorPool::new();
    pool.add_file_descriptor_proto(file).unwrap();
    pool.get_message_by_name(name).unwrap()
}

/// Create a plain message type.
pub fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

/// `Person { name, age, tags, address: Person.Address { city } }`.
pub fn person_file() -> FileDescriptorProto {
    let address = message("Address", vec![scalar_field("city", 1, Type::String)]);
    let person = DescriptorProto {
        name: Some("Person".to_string()),
        field: vec![
            scalar_field("name", 1, Type::String),
            scalar_field("age", 2, Type::Int32),
            repeated_field("tags", 3, Type::String),
            message_field("address", 4, ".demo.Person.Address", Label::Optional),
        ],
        nested_type: vec![address],
        ..Default::default()
    };
    FileDescriptorProto {
        package: Some("demo".to_string()),
        ..build_file("person.proto", vec![person], vec![])
    }
}

/// `User { userId, status: Status, avatar }` with `Status { UNKNOWN, ACTIVE }`.
pub fn user_file() -> FileDescriptorProto {
    let status = simple_enum("Status", &[("UNKNOWN", 0), ("ACTIVE", 1)]);
    let user = message(
        "User",
        vec![
            scalar_field("userId", 1, Type::Int64),
            enum_field("status", 2, ".Status"),
            scalar_field("avatar", 3, Type::Bytes),
        ],
    );
    build_file("user.proto", vec![user], vec![status])
}

/// Create a scalar field descriptor.
pub fn scalar_field(name: &str, number: i32, typ: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        r#type: Some(typ.into()),
        label: Some(Label::Optional.into()),
        ..Default::default()
    }
}

/// Create a repeated (list) field descriptor.
pub fn repeated_field(name: &str, number: i32, typ: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        r#type: Some(typ.into()),
        label: Some(Label::Repeated.into()),
        ..Default::default()
    }
}

/// Create a message-typed field descriptor.
pub fn message_field(
    name: &str,
    number: i32,
    type_name: &str,
    label: Label,
) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        r#type: Some(Type::Message.into()),
        type_name: Some(type_name.to_string()),
        label: Some(label.into()),
        ..Default::default()
    }
}

/// Create an enum-typed field descriptor.
pub fn enum_field(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        r#type: Some(Type::Enum.into()),
        type_name: Some(type_name.to_string()),
        label: Some(Label::Optional.into()),
        ..Default::default()
    }
}

/// Create a repeated enum-typed field descriptor.
pub fn repeated_enum_field(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        label: Some(Label::Repeated.into()),
        ..enum_field(name, number, type_name)
    }
}

/// Create a simple enum descriptor.
pub fn simple_enum(name: &str, values: &[(&str, i32)]) -> EnumDescriptorProto {
    EnumDescriptorProto {
        name: Some(name.to_string()),
        value: values
            .iter()
            .map(|(n, num)| EnumValueDescriptorProto {
                name: Some(n.to_string()),
                number: Some(*num),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// Create a map entry message (protobuf encodes maps as repeated message
/// fields with a special map_entry option).
pub fn map_entry_message(name: &str, key_type: Type, value_type: Type) -> DescriptorProto {
    use prost_types::MessageOptions;
    DescriptorProto {
        name: Some(name.to_string()),
        field: vec![
            scalar_field("key", 1, key_type),
            scalar_field("value", 2, value_type),
        ],
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Create a proto3 optional scalar field descriptor.
///
/// Caller is responsible for ensuring the containing message has a matching
/// oneof declaration at `oneof_index`.
pub fn proto3_optional_scalar_field(
    name: &str,
    number: i32,
    typ: Type,
    oneof_index: i32,
) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        r#type: Some(typ.into()),
        label: Some(Label::Optional.into()),
        oneof_index: Some(oneof_index),
        proto3_optional: Some(true),
        ..Default::default()
    }
}

/// Create a synthetic oneof declaration used by proto3 optional fields.
pub fn synthetic_oneof(name: &str) -> OneofDescriptorProto {
    OneofDescriptorProto {
        name: Some(name.to_string()),
        ..Default::default()
    }
}
