//! Error types for inspector construction, field access and schema transport.

/// Error returned by inspectors and the schema transport.
#[derive(Debug, thiserror::Error)]
pub enum InspectorError {
    /// Name lookup failed both the exact and the lower-cased pass.
    #[error("field '{field}' not found in '{type_name}'")]
    FieldNotFound { type_name: String, field: String },

    /// A field declares a kind the inspector tree cannot represent.
    #[error("field '{field}' has unsupported kind {kind}")]
    UnsupportedFieldKind { field: String, kind: String },

    /// A message type contains itself, so eager construction would not terminate.
    #[error("message type '{type_name}' is recursive")]
    RecursiveType { type_name: String },

    /// The field does not belong to the instance's type, or the value does not fit it.
    #[error("cannot assign field '{field}' on '{type_name}': {detail}")]
    InvalidFieldAssignment {
        type_name: String,
        field: String,
        detail: String,
    },

    /// A reconstructed schema is structurally inconsistent.
    #[error("schema '{schema_name}' failed validation: {source}")]
    SchemaValidation {
        schema_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The encoded schema does not fit in the transport frame.
    #[error("schema '{schema_name}' encodes to {size} bytes, exceeding the {capacity}-byte frame")]
    OversizeSchema {
        schema_name: String,
        size: usize,
        capacity: usize,
    },

    /// A transport buffer ended before a complete unit could be read or written.
    #[error("transport buffer too short: needed {needed} bytes, {remaining} available")]
    Truncated { needed: usize, remaining: usize },

    /// Frame bytes are not a valid encoded schema.
    #[error("failed to decode transported schema: {source}")]
    SchemaDecode {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Schema data (e.g., a serialized `FileDescriptorSet`) could not be parsed.
    #[error("failed to parse schema '{schema_name}': {source}")]
    SchemaParse {
        schema_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The requested message type is not declared by the schema.
    #[error("message descriptor not found: '{schema_name}'")]
    MessageNotFound { schema_name: String },
}
