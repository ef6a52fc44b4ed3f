//! Top-level schema generation over a declared parameter list.

use indexmap::IndexMap;
use serde::Serialize;

use crate::descriptor::TypeDescriptor;
use crate::error::Error;
use crate::schema::{SchemaFragment, translate};

/// One declared parameter: name plus its type descriptor. Order of a
/// parameter slice is declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub descriptor: TypeDescriptor,
}

impl Parameter {
    pub fn new(name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        Parameter { name: name.into(), descriptor }
    }
}

/// The whole-parameter-list schema. Always an object; every declared
/// parameter is required (optionality lives in value types, never at the
/// parameter level); extra arguments are always refused.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonSchema {
    #[serde(rename = "type")]
    pub ty: ObjectTag,
    pub properties: IndexMap<String, SchemaFragment>,
    pub required: Vec<String>,
    #[serde(rename = "additionalProperties")]
    pub additional_properties: AlwaysFalse,
}

/// Serializes as the literal string `"object"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectTag {
    Object,
}

/// Serializes as the literal `false`; the top level never omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlwaysFalse;

impl Serialize for AlwaysFalse {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(false)
    }
}

/// Translate every parameter in declaration order into one object schema.
pub fn generate_json_schema(parameters: &[Parameter]) -> Result<JsonSchema, Error> {
    let mut properties = IndexMap::with_capacity(parameters.len());
    let mut required = Vec::with_capacity(parameters.len());
    for param in parameters {
        properties.insert(param.name.clone(), translate(&param.descriptor)?);
        required.push(param.name.clone());
    }
    Ok(JsonSchema {
        ty: ObjectTag::Object,
        properties,
        required,
        additional_properties: AlwaysFalse,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Primitive, description};
    use serde_json::json;

    fn int() -> TypeDescriptor {
        TypeDescriptor::Primitive(Primitive::Integer)
    }

    fn string() -> TypeDescriptor {
        TypeDescriptor::Primitive(Primitive::String)
    }

    fn schema_json(params: &[Parameter]) -> serde_json::Value {
        serde_json::to_value(generate_json_schema(params).unwrap()).unwrap()
    }

    #[test]
    fn single_int_parameter() {
        assert_eq!(
            schema_json(&[Parameter::new("a", int())]),
            json!({
                "type": "object",
                "properties": {"a": {"type": "integer"}},
                "required": ["a"],
                "additionalProperties": false,
            })
        );
    }

    #[test]
    fn no_parameters_still_yields_full_object_shape() {
        assert_eq!(
            schema_json(&[]),
            json!({
                "type": "object",
                "properties": {},
                "required": [],
                "additionalProperties": false,
            })
        );
    }

    #[test]
    fn parameters_keep_declaration_order() {
        assert_eq!(
            schema_json(&[
                Parameter::new("a", TypeDescriptor::union([int(), string()])),
                Parameter::new("b", TypeDescriptor::optional(
                    TypeDescriptor::Primitive(Primitive::Boolean),
                )),
            ]),
            json!({
                "type": "object",
                "properties": {
                    "a": {"type": ["integer", "string"]},
                    "b": {"type": ["boolean", "null"]},
                },
                "required": ["a", "b"],
                "additionalProperties": false,
            })
        );
    }

    #[test]
    fn annotated_parameter_keeps_description() {
        assert_eq!(
            schema_json(&[Parameter::new(
                "a",
                TypeDescriptor::annotated(int(), [description("This is an integer")]),
            )]),
            json!({
                "type": "object",
                "properties": {
                    "a": {"type": "integer", "description": "This is an integer"},
                },
                "required": ["a"],
                "additionalProperties": false,
            })
        );
    }

    #[test]
    fn nested_record_parameter() {
        assert_eq!(
            schema_json(&[Parameter::new(
                "a",
                TypeDescriptor::list(TypeDescriptor::record([
                    ("foo", string()),
                    ("bar", int()),
                ])),
            )]),
            json!({
                "type": "object",
                "properties": {
                    "a": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "foo": {"type": "string"},
                                "bar": {"type": "integer"},
                            },
                            "required": ["foo", "bar"],
                            "additionalProperties": false,
                        },
                    },
                },
                "required": ["a"],
                "additionalProperties": false,
            })
        );
    }

    #[test]
    fn translation_failure_propagates() {
        let bad = Parameter::new("a", TypeDescriptor::LiteralSet(vec![]));
        assert!(generate_json_schema(&[bad]).is_err());
    }
}
