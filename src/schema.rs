//! Descriptor → schema-fragment translation (the core of the crate).
//!
//! `translate` is a pure, synchronous, deterministic function: one exhaustive
//! match over the descriptor's discriminant, one arm per supported shape,
//! recursing for lists, records, unions, and annotations. There is no
//! fallback schema; anything the arms reject fails outright. The descriptor
//! enum is closed, so the unsupported-shape errors all come from inside the
//! literal-set and union arms rather than a catch-all.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::descriptor::{Field, LiteralValue, Marker, Primitive, TypeDescriptor};
use crate::error::Error;

// -------------------------------- Output ---------------------------------- //

/// The seven JSON type tags a fragment can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    String,
    Integer,
    Number,
    Object,
    Array,
    Boolean,
    Null,
}

/// A fragment's `type` key: a single tag, or an ordered tag list for unions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeSet {
    One(TypeTag),
    Many(Vec<TypeTag>),
}

/// One JSON-Schema-shaped object describing one type. Optional keys are
/// omitted from serialization entirely when unset, so the serialized shape
/// matches the manifest format byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaFragment {
    #[serde(rename = "type")]
    pub ty: TypeSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaFragment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaFragment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(rename = "additionalProperties", skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_: Option<Vec<Value>>,
}

impl SchemaFragment {
    /// Fragment with just a `type` key.
    pub fn bare(tag: TypeTag) -> Self {
        SchemaFragment {
            ty: TypeSet::One(tag),
            items: None,
            description: None,
            properties: None,
            required: None,
            additional_properties: None,
            enum_: None,
        }
    }
}

// ------------------------------- Translate -------------------------------- //

/// Translate one type descriptor into one schema fragment.
pub fn translate(descriptor: &TypeDescriptor) -> Result<SchemaFragment, Error> {
    match descriptor {
        TypeDescriptor::Primitive(p) => Ok(SchemaFragment::bare(primitive_tag(*p))),
        TypeDescriptor::LiteralSet(values) => literal_set_schema(values),
        TypeDescriptor::List(element) => {
            let mut out = SchemaFragment::bare(TypeTag::Array);
            out.items = Some(Box::new(translate(element)?));
            Ok(out)
        }
        TypeDescriptor::Record(fields) => record_schema(fields),
        TypeDescriptor::Union(alternatives) => union_schema(alternatives),
        TypeDescriptor::Annotated { base, markers } => annotated_schema(base, markers),
    }
}

fn primitive_tag(p: Primitive) -> TypeTag {
    match p {
        Primitive::Integer => TypeTag::Integer,
        Primitive::Number => TypeTag::Number,
        Primitive::String => TypeTag::String,
        Primitive::Boolean => TypeTag::Boolean,
        Primitive::Null => TypeTag::Null,
    }
}

// ------------------------------ Literal sets ------------------------------ //

/// Only these three tags may appear in an `enum`, and every member of one
/// set must classify as the same one. `LiteralValue` keeps booleans and
/// integers structurally apart, so `true` can never slip into an integer
/// enum the way it would under a loose numeric lattice.
fn literal_tag(v: &LiteralValue) -> TypeTag {
    match v {
        LiteralValue::Int(_) => TypeTag::Integer,
        LiteralValue::Str(_) => TypeTag::String,
        LiteralValue::Bool(_) => TypeTag::Boolean,
    }
}

fn literal_json(v: &LiteralValue) -> Value {
    match v {
        LiteralValue::Int(i) => Value::from(*i),
        LiteralValue::Str(s) => Value::from(s.clone()),
        LiteralValue::Bool(b) => Value::from(*b),
    }
}

fn literal_set_schema(values: &[LiteralValue]) -> Result<SchemaFragment, Error> {
    let Some(first) = values.first() else {
        return Err(Error::UnsupportedType("empty literal set".into()));
    };
    let tag = literal_tag(first);
    if values.iter().any(|v| literal_tag(v) != tag) {
        return Err(Error::UnsupportedType(format!(
            "mixed types in literal set: {values:?}"
        )));
    }
    let mut out = SchemaFragment::bare(tag);
    out.enum_ = Some(values.iter().map(literal_json).collect());
    Ok(out)
}

// -------------------------------- Records --------------------------------- //

fn record_schema(fields: &[Field]) -> Result<SchemaFragment, Error> {
    let mut properties = IndexMap::with_capacity(fields.len());
    let mut required = Vec::with_capacity(fields.len());
    // Declared field order, not any intermediate ordering.
    for field in fields {
        properties.insert(field.name.clone(), translate(&field.ty)?);
        required.push(field.name.clone());
    }
    let mut out = SchemaFragment::bare(TypeTag::Object);
    out.properties = Some(properties);
    out.required = Some(required);
    out.additional_properties = Some(false);
    Ok(out)
}

// --------------------------------- Unions --------------------------------- //

fn union_schema(alternatives: &[TypeDescriptor]) -> Result<SchemaFragment, Error> {
    let mut tags: Vec<TypeTag> = Vec::with_capacity(alternatives.len());
    let mut carriers: Vec<SchemaFragment> = Vec::new();

    for alt in alternatives {
        let fragment = translate(alt)?;
        match &fragment.ty {
            TypeSet::One(tag) => tags.push(*tag),
            // A nested union resolved to its own tag list. Unions never
            // flatten transitively; each alternative must land on one tag.
            TypeSet::Many(list) => {
                return Err(Error::UnsupportedType(format!(
                    "union alternative resolved to a tag list: {list:?}"
                )));
            }
        }
        if fragment.properties.is_some() || fragment.items.is_some() {
            carriers.push(fragment);
        }
    }

    // Tag order follows alternative declaration order; duplicates stay.
    let mut out = SchemaFragment {
        ty: TypeSet::Many(tags),
        items: None,
        description: None,
        properties: None,
        required: None,
        additional_properties: None,
        enum_: None,
    };

    // Alternatives that came from a record or list donate their payload keys.
    // Later alternatives override earlier ones; a union of two record shapes
    // keeps only the last one's properties (known lossy edge, kept as-is).
    for schema in carriers {
        if schema.properties.is_some() {
            out.properties = schema.properties;
        }
        if schema.required.is_some() {
            out.required = schema.required;
        }
        if schema.additional_properties.is_some() {
            out.additional_properties = schema.additional_properties;
        }
        if schema.items.is_some() {
            out.items = schema.items;
        }
    }

    Ok(out)
}

// ------------------------------- Annotated -------------------------------- //

fn annotated_schema(base: &TypeDescriptor, markers: &[Marker]) -> Result<SchemaFragment, Error> {
    let mut descriptions = markers.iter().filter_map(|m| match m {
        Marker::Description(text) => Some(text),
        Marker::Ignored(_) => None,
    });
    let first = descriptions.next();
    if descriptions.next().is_some() {
        return Err(Error::MultipleDescriptionMarkers);
    }

    let mut out = translate(base)?;
    if let Some(text) = first {
        // Descriptor-derived keys win on collision. Base translation never
        // sets a description of its own, so in practice this always fills.
        if out.description.is_none() {
            out.description = Some(text.clone());
        }
    }
    Ok(out)
}

// --------------------------------- Tests ---------------------------------- //
