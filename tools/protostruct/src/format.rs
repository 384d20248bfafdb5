use anyhow::Result;
use clap::ValueEnum;
use protostruct_arrow::{field_infos_to_arrow_schema, inspector_to_arrow_schema};
use protostruct_core::{FieldInfo, ObjectInspector, format_field_infos, format_type_info};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Single-line engine type name, e.g. `struct<a:int>`
    TypeName,
    /// Indented field tree
    Tree,
    /// Arrow schema derived from the type
    Arrow,
}

impl OutputFormat {
    pub fn render(&self, inspector: &impl ObjectInspector) -> Result<String> {
        let text = match self {
            OutputFormat::TypeName => inspector.type_name(),
            OutputFormat::Tree => format_type_info(&inspector.type_info())?
                .trim_end()
                .to_string(),
            OutputFormat::Arrow => inspector_to_arrow_schema(inspector)?.to_string(),
        };
        Ok(text)
    }

    /// Render one named member: `name: type`, a one-entry tree, or a
    /// one-column Arrow schema.
    pub fn render_field(&self, name: &str, inspector: &impl ObjectInspector) -> Result<String> {
        let field = [FieldInfo::new(name, inspector.type_info())];
        let text = match self {
            OutputFormat::TypeName => format!("{name}: {}", inspector.type_name()),
            OutputFormat::Tree => format_field_infos(&field)?.trim_end().to_string(),
            OutputFormat::Arrow => field_infos_to_arrow_schema(&field).to_string(),
        };
        Ok(text)
    }
}
