use std::fmt::{Error, Result, Write as _};

use super::{FieldInfo, TypeInfo};

/// Format struct members in a readable style:
/// primitive fields are rendered in one line, compound fields are pretty-printed.
/// Nested fields follow the same rule.
pub fn format_field_infos(fields: impl AsRef<[FieldInfo]>) -> std::result::Result<String, Error> {
    let mut out = String::new();

    for field in fields.as_ref() {
        format_labeled_type(&field.name, &field.type_info, 0, &mut out)?;
    }

    Ok(out)
}

/// Format a whole type tree. Struct roots are rendered as their member list,
/// anything else as a single `root` entry.
pub fn format_type_info(type_info: &TypeInfo) -> std::result::Result<String, Error> {
    match type_info.struct_fields() {
        Some(fields) => format_field_infos(fields),
        None => {
            let mut out = String::new();
            format_labeled_type("root", type_info, 0, &mut out)?;
            Ok(out)
        }
    }
}

fn format_compound(type_info: &TypeInfo, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: {}", type_info.kind_name())?;

    match type_info {
        TypeInfo::Struct(fields) => {
            writeln!(out, "{pad}fields:")?;
            for child in fields {
                format_labeled_type(&child.name, &child.type_info, indent + 4, out)?;
            }
        }
        TypeInfo::List(element) => {
            format_labeled_type("item", element, indent, out)?;
        }
        TypeInfo::Primitive(_) => unreachable!("{type_info:?} is not a compound type"),
    }

    Ok(())
}

fn format_labeled_type(
    label: &str,
    type_info: &TypeInfo,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    if type_info.is_primitive() {
        writeln!(out, "{pad}{label}: {{ type: {} }}", type_info.kind_name())?;
    } else {
        writeln!(out, "{pad}{label}:")?;
        format_compound(type_info, indent + 4, out)?;
    }
    Ok(())
}
