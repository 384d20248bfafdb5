//! Engine-side type vocabulary shared by every inspector.

mod format;
mod types;

pub use format::{format_field_infos, format_type_info};
pub use types::{Category, FieldInfo, PrimitiveCategory, TypeInfo};
