use std::fmt::{Display, Formatter, Result};

/// Top-level classification of an inspected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Primitive,
    List,
    Struct,
}

/// Primitive types known to the host engine.
///
/// The engine has no unsigned integers; callers map unsigned schema kinds
/// onto the signed category of the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveCategory {
    Int,
    Long,
    Float,
    Double,
    Boolean,
    String,
    Binary,
}

impl PrimitiveCategory {
    pub const ALL: [PrimitiveCategory; 7] = [
        PrimitiveCategory::Int,
        PrimitiveCategory::Long,
        PrimitiveCategory::Float,
        PrimitiveCategory::Double,
        PrimitiveCategory::Boolean,
        PrimitiveCategory::String,
        PrimitiveCategory::Binary,
    ];

    /// Token used when rendering type names, e.g. `bigint` in
    /// `struct<id:bigint>`.
    pub fn type_name(&self) -> &'static str {
        match self {
            PrimitiveCategory::Int => "int",
            PrimitiveCategory::Long => "bigint",
            PrimitiveCategory::Float => "float",
            PrimitiveCategory::Double => "double",
            PrimitiveCategory::Boolean => "boolean",
            PrimitiveCategory::String => "string",
            PrimitiveCategory::Binary => "binary",
        }
    }
}

/// Structural description of an inspected type.
///
/// Two inspectors built from independently reconstructed schemas compare
/// equal through their `TypeInfo` even though they are distinct objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeInfo {
    Primitive(PrimitiveCategory),
    List(Box<TypeInfo>),
    Struct(Vec<FieldInfo>),
}

impl TypeInfo {
    pub fn category(&self) -> Category {
        match self {
            TypeInfo::Primitive(_) => Category::Primitive,
            TypeInfo::List(_) => Category::List,
            TypeInfo::Struct(_) => Category::Struct,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeInfo::Primitive(_))
    }

    /// Short label used by the tree formatter.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeInfo::Primitive(category) => category.type_name(),
            TypeInfo::List(_) => "array",
            TypeInfo::Struct(_) => "struct",
        }
    }

    /// Struct members, or `None` for primitives and lists.
    pub fn struct_fields(&self) -> Option<&[FieldInfo]> {
        match self {
            TypeInfo::Struct(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Renders the engine's type-name grammar:
/// `struct<name:string,tags:array<string>>`.
impl Display for TypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TypeInfo::Primitive(category) => f.write_str(category.type_name()),
            TypeInfo::List(element) => write!(f, "array<{element}>"),
            TypeInfo::Struct(fields) => {
                f.write_str("struct<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}:{}", field.name, field.type_info)?;
                }
                f.write_str(">")
            }
        }
    }
}

/// Named member of a [`TypeInfo::Struct`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldInfo {
    pub name: String,
    pub type_info: TypeInfo,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, type_info: TypeInfo) -> Self {
        Self {
            name: name.into(),
            type_info,
        }
    }
}
