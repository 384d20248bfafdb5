use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use bytes::BytesMut;
use clap::Args;
use protostruct_core::StructInspector;
use protostruct_protobuf::{DEFAULT_FRAME_CAPACITY, SchemaCodec, struct_inspector_for_message};
use tracing::info;

#[derive(Args)]
pub struct PackArgs {
    /// Path to a serialized FileDescriptorSet
    input: PathBuf,

    /// Fully-qualified message name
    #[arg(short, long)]
    message: String,

    /// Pack a single field of the message instead of the whole struct
    #[arg(long)]
    field: Option<String>,

    /// Schema frame size in bytes
    #[arg(long, default_value_t = DEFAULT_FRAME_CAPACITY)]
    capacity: usize,

    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
}

impl PackArgs {
    pub fn run(self) -> Result<()> {
        let schema_data = fs::read(&self.input)
            .with_context(|| format!("failed to read {}", self.input.display()))?;
        let inspector = struct_inspector_for_message(&self.message, &schema_data)?;
        let codec = SchemaCodec::with_capacity(self.capacity);

        let mut buf = BytesMut::new();
        match &self.field {
            Some(name) => inspector.field_by_name(name)?.serialize_to(&codec, &mut buf)?,
            None => inspector.serialize_to(&codec, &mut buf)?,
        }

        fs::write(&self.output, &buf)
            .with_context(|| format!("failed to write {}", self.output.display()))?;
        info!(
            type_name = %self.message,
            field = ?self.field,
            bytes = buf.len(),
            output = %self.output.display(),
            "packed inspector"
        );
        Ok(())
    }
}
