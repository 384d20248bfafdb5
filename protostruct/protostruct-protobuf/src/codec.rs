//! Fixed-frame transport for file schemas and type locators.
//!
//! A transported schema always occupies exactly [`SchemaCodec::capacity`]
//! bytes: the length-delimited `FileDescriptorProto` followed by zero
//! padding. The frame carries no outer length, so both ends must agree on the
//! capacity. Locators and field indices are written as big-endian `u32`s.

use bytes::{Buf, BufMut};
use prost::Message;
use prost_reflect::{DescriptorPool, FileDescriptor, MessageDescriptor};
use prost_types::FileDescriptorProto;
use protostruct_core::InspectorError;
use tracing::{debug, trace};

/// Frame size used when no capacity is configured.
pub const DEFAULT_FRAME_CAPACITY: usize = 131_072;

const U32_LEN: usize = size_of::<u32>();

/// Encodes file schemas into, and decodes them out of, fixed-size frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaCodec {
    capacity: usize,
}

impl SchemaCodec {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_FRAME_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Write `file` as one frame.
    ///
    /// Fails with [`InspectorError::OversizeSchema`] rather than truncating
    /// when the encoded schema does not fit.
    pub fn encode_file(
        &self,
        file: &FileDescriptorProto,
        sink: &mut impl BufMut,
    ) -> Result<(), InspectorError> {
        if !file.dependency.is_empty() {
            return Err(InspectorError::SchemaValidation {
                schema_name: file.name().to_string(),
                source: format!(
                    "file imports {:?}; only self-contained files can be transported",
                    file.dependency
                )
                .into(),
            });
        }

        let payload = file.encode_length_delimited_to_vec();
        if payload.len() > self.capacity {
            return Err(InspectorError::OversizeSchema {
                schema_name: file.name().to_string(),
                size: payload.len(),
                capacity: self.capacity,
            });
        }
        if sink.remaining_mut() < self.capacity {
            return Err(InspectorError::Truncated {
                needed: self.capacity,
                remaining: sink.remaining_mut(),
            });
        }

        debug!(
            schema = file.name(),
            size = payload.len(),
            capacity = self.capacity,
            "encoding schema frame"
        );
        sink.put_slice(&payload);
        sink.put_bytes(0, self.capacity - payload.len());
        Ok(())
    }

    /// Read one frame and rebuild a validated [`FileDescriptor`] from it.
    pub fn decode_file(&self, source: &mut impl Buf) -> Result<FileDescriptor, InspectorError> {
        ensure_remaining(source, self.capacity)?;
        let frame = source.copy_to_bytes(self.capacity);

        let proto = FileDescriptorProto::decode_length_delimited(frame)
            .map_err(|e| InspectorError::SchemaDecode {
                source: Box::new(e),
            })?;
        let schema_name = proto.name().to_string();
        debug!(schema = %schema_name, "decoded schema frame");

        let mut pool = DescriptorPool::new();
        pool.add_file_descriptor_proto(proto)
            .map_err(|e| InspectorError::SchemaValidation {
                schema_name: schema_name.clone(),
                source: Box::new(e),
            })?;
        pool.get_file_by_name(&schema_name)
            .ok_or_else(|| InspectorError::SchemaValidation {
                schema_name: schema_name.clone(),
                source: "file missing from rebuilt descriptor pool".into(),
            })
    }
}

impl Default for SchemaCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of nested-type indices from a file's top-level messages down to one
/// message type.
///
/// The first index selects among the file's top-level messages, each further
/// index among the previous message's nested messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeLocator(Vec<u32>);

impl TypeLocator {
    pub fn new(indices: Vec<u32>) -> Self {
        Self(indices)
    }

    /// Locator of `message` within its own file.
    pub fn of(message: &MessageDescriptor) -> Result<Self, InspectorError> {
        let mut indices = Vec::new();
        let mut current = message.clone();
        loop {
            match current.parent_message() {
                Some(parent) => {
                    indices.push(position_of(parent.child_messages(), &current)?);
                    current = parent;
                }
                None => {
                    indices.push(position_of(current.parent_file().messages(), &current)?);
                    break;
                }
            }
        }
        indices.reverse();
        Ok(Self(indices))
    }

    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    /// Walk `file` along this locator.
    pub fn resolve(&self, file: &FileDescriptor) -> Result<MessageDescriptor, InspectorError> {
        let unresolved = || InspectorError::SchemaValidation {
            schema_name: file.name().to_string(),
            source: format!("type locator {:?} does not resolve", self.0).into(),
        };

        let (first, rest) = self.0.split_first().ok_or_else(unresolved)?;
        let mut message = file
            .messages()
            .nth(*first as usize)
            .ok_or_else(unresolved)?;
        for index in rest {
            let next = message.child_messages().nth(*index as usize);
            message = next.ok_or_else(unresolved)?;
        }
        Ok(message)
    }

    pub fn encode(&self, sink: &mut impl BufMut) -> Result<(), InspectorError> {
        let needed = U32_LEN * (self.0.len() + 1);
        if sink.remaining_mut() < needed {
            return Err(InspectorError::Truncated {
                needed,
                remaining: sink.remaining_mut(),
            });
        }
        sink.put_u32(self.0.len() as u32);
        for index in &self.0 {
            sink.put_u32(*index);
        }
        Ok(())
    }

    pub fn decode(source: &mut impl Buf) -> Result<Self, InspectorError> {
        let count = get_u32(source)? as usize;
        ensure_remaining(source, count.saturating_mul(U32_LEN))?;
        let indices: Vec<u32> = (0..count).map(|_| source.get_u32()).collect();
        trace!(?indices, "decoded type locator");
        Ok(Self(indices))
    }
}

fn position_of(
    mut siblings: impl Iterator<Item = MessageDescriptor>,
    message: &MessageDescriptor,
) -> Result<u32, InspectorError> {
    siblings
        .position(|m| m.full_name() == message.full_name())
        .map(|i| i as u32)
        .ok_or_else(|| InspectorError::SchemaValidation {
            schema_name: message.parent_file().name().to_string(),
            source: format!("'{}' not found among its siblings", message.full_name()).into(),
        })
}

/// Copy a fully encoded unit into `sink`, or leave `sink` untouched.
pub(crate) fn put_unit(sink: &mut impl BufMut, unit: &[u8]) -> Result<(), InspectorError> {
    if sink.remaining_mut() < unit.len() {
        return Err(InspectorError::Truncated {
            needed: unit.len(),
            remaining: sink.remaining_mut(),
        });
    }
    sink.put_slice(unit);
    Ok(())
}

pub(crate) fn get_u32(source: &mut impl Buf) -> Result<u32, InspectorError> {
    ensure_remaining(source, U32_LEN)?;
    Ok(source.get_u32())
}

fn ensure_remaining(source: &impl Buf, needed: usize) -> Result<(), InspectorError> {
    if source.remaining() < needed {
        return Err(InspectorError::Truncated {
            needed,
            remaining: source.remaining(),
        });
    }
    Ok(())
}
