//! Inspector traits and the engine-provided primitive and list inspectors.

use std::{fmt::Debug, sync::Arc};

use crate::{
    error::InspectorError,
    type_info::{Category, PrimitiveCategory, TypeInfo},
};

/// Reflection object describing one type to the host engine.
///
/// Inspectors are immutable once built, so they are shared freely across
/// threads.
pub trait ObjectInspector: Debug + Send + Sync {
    fn category(&self) -> Category;

    /// Structural description of the inspected type.
    fn type_info(&self) -> TypeInfo;

    /// Rendered type name, e.g. `struct<a:int,b:array<string>>`.
    fn type_name(&self) -> String {
        self.type_info().to_string()
    }
}

/// One member of a struct inspector.
pub trait StructField: Debug + Send + Sync {
    type Inspector: ObjectInspector;

    fn field_name(&self) -> &str;

    fn field_inspector(&self) -> &Self::Inspector;

    fn field_comment(&self) -> Option<&str> {
        None
    }
}

/// Read access to struct-shaped records of type [`StructInspector::Data`].
pub trait StructInspector: ObjectInspector {
    /// Record instance handled by this inspector.
    type Data;
    /// Field value handed back to the engine.
    type Value;
    type Field: StructField;

    /// Members in declaration order.
    fn fields(&self) -> &[Self::Field];

    /// Look up a member by name.
    ///
    /// Returns [`InspectorError::FieldNotFound`] if no member matches.
    fn field_by_name(&self, name: &str) -> Result<&Self::Field, InspectorError>;

    /// Value of `field` in `data`, or `None` when there is no record.
    fn field_data(
        &self,
        data: Option<&Self::Data>,
        field: &Self::Field,
    ) -> Result<Option<Self::Value>, InspectorError>;

    /// All member values in declaration order, or `None` when there is no
    /// record.
    fn fields_data_as_list(
        &self,
        data: Option<&Self::Data>,
    ) -> Result<Option<Vec<Self::Value>>, InspectorError>;
}

/// Struct inspector that can also create and rebuild records.
pub trait SettableStructInspector: StructInspector {
    /// New record with no fields populated.
    fn create(&self) -> Self::Data;

    /// Copy of `data` with `field` set to `value`. `data` is left untouched.
    fn set_field_data(
        &self,
        data: &Self::Data,
        field: &Self::Field,
        value: Self::Value,
    ) -> Result<Self::Data, InspectorError>;
}

/// Engine-provided inspector for a primitive type.
///
/// Instances are process-wide singletons obtained through
/// [`PrimitiveInspector::get`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PrimitiveInspector {
    category: PrimitiveCategory,
}

static INT: PrimitiveInspector = PrimitiveInspector::of(PrimitiveCategory::Int);
static LONG: PrimitiveInspector = PrimitiveInspector::of(PrimitiveCategory::Long);
static FLOAT: PrimitiveInspector = PrimitiveInspector::of(PrimitiveCategory::Float);
static DOUBLE: PrimitiveInspector = PrimitiveInspector::of(PrimitiveCategory::Double);
static BOOLEAN: PrimitiveInspector = PrimitiveInspector::of(PrimitiveCategory::Boolean);
static STRING: PrimitiveInspector = PrimitiveInspector::of(PrimitiveCategory::String);
static BINARY: PrimitiveInspector = PrimitiveInspector::of(PrimitiveCategory::Binary);

impl PrimitiveInspector {
    const fn of(category: PrimitiveCategory) -> Self {
        Self { category }
    }

    pub fn get(category: PrimitiveCategory) -> &'static PrimitiveInspector {
        match category {
            PrimitiveCategory::Int => &INT,
            PrimitiveCategory::Long => &LONG,
            PrimitiveCategory::Float => &FLOAT,
            PrimitiveCategory::Double => &DOUBLE,
            PrimitiveCategory::Boolean => &BOOLEAN,
            PrimitiveCategory::String => &STRING,
            PrimitiveCategory::Binary => &BINARY,
        }
    }

    pub fn primitive_category(&self) -> PrimitiveCategory {
        self.category
    }
}

impl ObjectInspector for PrimitiveInspector {
    fn category(&self) -> Category {
        Category::Primitive
    }

    fn type_info(&self) -> TypeInfo {
        TypeInfo::Primitive(self.category)
    }

    fn type_name(&self) -> String {
        self.category.type_name().to_string()
    }
}

/// Engine-provided list inspector wrapping an element inspector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListInspector<E> {
    element: Box<E>,
}

impl<E: ObjectInspector> ListInspector<E> {
    pub fn new(element: E) -> Self {
        Self {
            element: Box::new(element),
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }
}

impl<E: ObjectInspector> ObjectInspector for ListInspector<E> {
    fn category(&self) -> Category {
        Category::List
    }

    fn type_info(&self) -> TypeInfo {
        TypeInfo::List(Box::new(self.element.type_info()))
    }
}

/// Resolved type of a struct member: an engine primitive, a nested struct
/// inspector of type `S`, or a list of either.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldInspector<S> {
    Primitive(&'static PrimitiveInspector),
    List(ListInspector<FieldInspector<S>>),
    Struct(Arc<S>),
}

impl<S> FieldInspector<S> {
    pub fn as_struct(&self) -> Option<&Arc<S>> {
        match self {
            FieldInspector::Struct(inspector) => Some(inspector),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListInspector<FieldInspector<S>>> {
        match self {
            FieldInspector::List(inspector) => Some(inspector),
            _ => None,
        }
    }
}

impl<S: ObjectInspector> ObjectInspector for FieldInspector<S> {
    fn category(&self) -> Category {
        match self {
            FieldInspector::Primitive(inspector) => inspector.category(),
            FieldInspector::List(inspector) => inspector.category(),
            FieldInspector::Struct(inspector) => inspector.category(),
        }
    }

    fn type_info(&self) -> TypeInfo {
        match self {
            FieldInspector::Primitive(inspector) => inspector.type_info(),
            FieldInspector::List(inspector) => inspector.type_info(),
            FieldInspector::Struct(inspector) => inspector.type_info(),
        }
    }

    fn type_name(&self) -> String {
        match self {
            FieldInspector::Primitive(inspector) => inspector.type_name(),
            FieldInspector::List(inspector) => inspector.type_name(),
            FieldInspector::Struct(inspector) => inspector.type_name(),
        }
    }
}
