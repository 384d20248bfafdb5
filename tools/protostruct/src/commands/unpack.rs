use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use bytes::{Buf, Bytes};
use clap::Args;
use protostruct_core::StructField;
use protostruct_protobuf::{
    DEFAULT_FRAME_CAPACITY, ProtobufStructField, ProtobufStructInspector, SchemaCodec,
};

use crate::{commands::emit, format::OutputFormat};

#[derive(Args)]
pub struct UnpackArgs {
    /// Path to bytes written by `pack`
    input: PathBuf,

    /// The input holds a single field rather than a whole struct
    #[arg(long)]
    field: bool,

    /// Schema frame size in bytes
    #[arg(long, default_value_t = DEFAULT_FRAME_CAPACITY)]
    capacity: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::TypeName)]
    format: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl UnpackArgs {
    pub fn run(self) -> Result<()> {
        let mut bytes = Bytes::from(
            fs::read(&self.input)
                .with_context(|| format!("failed to read {}", self.input.display()))?,
        );
        let codec = SchemaCodec::with_capacity(self.capacity);

        let text = if self.field {
            let field = ProtobufStructField::deserialize_from(&codec, &mut bytes)?;
            self.format.render_field(field.field_name(), field.field_inspector())?
        } else {
            let inspector = ProtobufStructInspector::deserialize_from(&codec, &mut bytes)?;
            self.format.render(&inspector)?
        };

        if bytes.has_remaining() {
            bail!("{} trailing bytes after the packed inspector", bytes.remaining());
        }
        emit(&text, self.output.as_deref())
    }
}
