//! Map raw protobuf field values onto the representation the engine expects
//! for each resolved field type.

use prost_reflect::{DynamicMessage, EnumDescriptor, FieldDescriptor, Kind, MapKey, Value};

/// Coerce a value read from `field`.
///
/// Enumerations surface as their symbolic name, byte sequences as raw bytes,
/// map fields as a list of entry messages. Everything else is returned as is;
/// nested messages are coerced later by their own inspector.
pub fn coerce_field_value(value: Value, field: &FieldDescriptor) -> Value {
    match (value, field.kind()) {
        (Value::Map(entries), Kind::Message(entry_desc)) => {
            let entries = entries
                .into_iter()
                .map(|(key, value)| {
                    let mut entry = DynamicMessage::new(entry_desc.clone());
                    entry.set_field(&entry_desc.map_entry_key_field(), map_key_to_value(key));
                    entry.set_field(&entry_desc.map_entry_value_field(), value);
                    Value::Message(entry)
                })
                .collect();
            Value::List(entries)
        }
        (value, kind) => coerce_value(value, &kind),
    }
}

fn coerce_value(value: Value, kind: &Kind) -> Value {
    match (value, kind) {
        (Value::EnumNumber(n), Kind::Enum(ed)) => enum_to_value(n, ed),
        (Value::Bytes(bytes), _) => Value::Bytes(bytes),
        (Value::List(items), _) => Value::List(
            items
                .into_iter()
                .map(|item| coerce_value(item, kind))
                .collect(),
        ),
        (value, _) => value,
    }
}

fn enum_to_value(n: i32, ed: &EnumDescriptor) -> Value {
    let name = ed
        .get_value(n)
        .map(|v| v.name().to_string())
        .unwrap_or_else(|| n.to_string());
    Value::String(name)
}

fn map_key_to_value(k: MapKey) -> Value {
    match k {
        MapKey::Bool(v) => Value::Bool(v),
        MapKey::I32(v) => Value::I32(v),
        MapKey::I64(v) => Value::I64(v),
        MapKey::U32(v) => Value::U32(v),
        MapKey::U64(v) => Value::U64(v),
        MapKey::String(s) => Value::String(s),
    }
}
