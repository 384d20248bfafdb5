use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use protostruct_protobuf::struct_inspector_for_message;
use tracing::info;

use crate::{commands::emit, format::OutputFormat};

#[derive(Args)]
pub struct SchemaArgs {
    /// Path to a serialized FileDescriptorSet
    input: PathBuf,

    /// Fully-qualified message name
    #[arg(short, long)]
    message: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::TypeName)]
    format: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let schema_data = fs::read(&self.input)
            .with_context(|| format!("failed to read {}", self.input.display()))?;
        let inspector = struct_inspector_for_message(&self.message, &schema_data)?;
        info!(type_name = %self.message, "built struct inspector");

        let text = self.format.render(&inspector)?;
        emit(&text, self.output.as_deref())
    }
}
