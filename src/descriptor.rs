//! Tagged type-descriptor model. No serde_json::Value here.
//!
//! This is the contract between whatever declares a tool's signature and the
//! schema translator: one variant per supported shape, nesting allowed,
//! always finite (no recursive aliases).

/// The declared type of one parameter (or one nested position inside it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Primitive(Primitive),
    /// Fixed finite set of same-typed constant values, in declaration order.
    LiteralSet(Vec<LiteralValue>),
    /// Homogeneous list of one element shape.
    List(Box<TypeDescriptor>),
    /// Ordered alternatives; never flattened transitively.
    Union(Vec<TypeDescriptor>),
    /// Ordered field name → shape mapping. All fields required, no extras.
    Record(Vec<Field>),
    /// A base shape plus attached markers (at most one description counts).
    Annotated {
        base: Box<TypeDescriptor>,
        markers: Vec<Marker>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Integer,
    Number,
    String,
    Boolean,
    Null,
}

/// One member of a literal set. Booleans and integers are distinct variants
/// on purpose: a literal `true` never classifies as an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    Int(i64),
    Str(String),
    Bool(bool),
}

/// One declared record field. Declaration order is carried by the `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeDescriptor,
}

/// Metadata attached to an annotated descriptor. Anything that is not a
/// description is ignored by the translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Description(String),
    Ignored(String),
}

/// Shorthand for the one marker kind the translator acts on.
pub fn description(text: impl Into<String>) -> Marker {
    Marker::Description(text.into())
}

// ------------------------------ Constructors ------------------------------ //

impl TypeDescriptor {
    pub fn list(element: TypeDescriptor) -> Self {
        TypeDescriptor::List(Box::new(element))
    }

    pub fn union(alternatives: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        TypeDescriptor::Union(alternatives.into_iter().collect())
    }

    pub fn record<N: Into<String>>(fields: impl IntoIterator<Item = (N, TypeDescriptor)>) -> Self {
        TypeDescriptor::Record(
            fields
                .into_iter()
                .map(|(name, ty)| Field { name: name.into(), ty })
                .collect(),
        )
    }

    pub fn annotated(base: TypeDescriptor, markers: impl IntoIterator<Item = Marker>) -> Self {
        TypeDescriptor::Annotated {
            base: Box::new(base),
            markers: markers.into_iter().collect(),
        }
    }

    /// `T | null`, the common optional-value shape.
    pub fn optional(inner: TypeDescriptor) -> Self {
        TypeDescriptor::union([inner, TypeDescriptor::Primitive(Primitive::Null)])
    }
}

impl From<Primitive> for TypeDescriptor {
    fn from(p: Primitive) -> Self {
        TypeDescriptor::Primitive(p)
    }
}
