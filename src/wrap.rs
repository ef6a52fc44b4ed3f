//! Callable wrapping: bind a callable, its generated schema, its extracted
//! documentation, and its name into one immutable unit.

use std::fmt;
use std::sync::Arc;

use serde_json::{Value, json};

use crate::descriptor::TypeDescriptor;
use crate::error::Error;
use crate::generate::{JsonSchema, Parameter, generate_json_schema};

/// The contract a tool implementation provides to [`wrap`].
///
/// `parameters()` is the signature-scanner surface: Rust has no runtime
/// reflection, so the implementer declares the signature explicitly, one
/// entry per parameter in declaration order. Every declared parameter
/// becomes a required schema property.
pub trait Callable {
    fn name(&self) -> &str;

    /// `None` means the callable has no documentation at all, which makes
    /// [`wrap`] fail. An explicitly empty string is accepted.
    fn documentation(&self) -> Option<String>;

    /// Declared parameters, in declaration order.
    fn parameters(&self) -> Vec<Parameter>;

    /// Invoke with one arguments object. The payload is forwarded verbatim
    /// and the result returned unmodified; nothing is ever validated
    /// against the generated schema.
    fn call(&self, arguments: Value) -> Result<Value, Error>;
}

/// A callable bundled with its generated schema, documentation, and name.
/// Built once by [`wrap`], never mutated afterwards.
#[derive(Clone)]
pub struct Wrapper {
    name: String,
    doc: String,
    parameters: JsonSchema,
    func: Arc<dyn Callable + Send + Sync>,
}

/// Wrap a callable, attaching the JSON schema generated from its declared
/// signature and retaining its documentation.
///
/// Fails with [`Error::MissingDocumentation`] before any schema work if the
/// callable carries no documentation, and propagates any translation error
/// from the declared parameter types.
pub fn wrap(callable: impl Callable + Send + Sync + 'static) -> Result<Wrapper, Error> {
    let name = callable.name().to_string();
    let doc = callable
        .documentation()
        .ok_or_else(|| Error::MissingDocumentation(name.clone()))?;
    let parameters = generate_json_schema(&callable.parameters())?;
    Ok(Wrapper {
        name,
        doc,
        parameters,
        func: Arc::new(callable),
    })
}

impl Wrapper {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// The schema describing this callable's expected call arguments.
    pub fn parameters(&self) -> &JsonSchema {
        &self.parameters
    }

    /// Forward an arguments object to the underlying callable.
    pub fn call(&self, arguments: Value) -> Result<Value, Error> {
        self.func.call(arguments)
    }

    /// Parse a JSON text payload, then invoke. Parse failures carry the
    /// JSON path at which deserialization stopped.
    pub fn call_json(&self, arguments: &str) -> Result<Value, Error> {
        let de = &mut serde_json::Deserializer::from_str(arguments);
        let value: Value = serde_path_to_error::deserialize(de).map_err(|err| {
            let path = err.path().to_string();
            Error::InvalidArguments(format!("at JSON path {path} → {}", err.into_inner()))
        })?;
        self.call(value)
    }

    /// One entry for a tool-calling manifest: name, description, and the
    /// generated input schema.
    pub fn manifest_entry(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.doc,
            "input_schema": self.parameters,
        })
    }
}

// The erased call fn cannot be compared, so wrapper equality is over the
// immutable metadata: name, documentation, and generated schema.
impl PartialEq for Wrapper {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.doc == other.doc && self.parameters == other.parameters
    }
}

impl fmt::Debug for Wrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapper")
            .field("name", &self.name)
            .field("doc", &self.doc)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

// -------------------------------- FnTool ---------------------------------- //

type Handler = dyn Fn(Value) -> Result<Value, Error> + Send + Sync;

/// Closure-backed [`Callable`], so plain functions can be registered without
/// hand-implementing the trait. Builder-style: set documentation and declare
/// parameters, then hand the result to [`wrap`].
pub struct FnTool {
    name: String,
    doc: Option<String>,
    parameters: Vec<Parameter>,
    handler: Box<Handler>,
}

impl FnTool {
    pub fn new(
        name: impl Into<String>,
        handler: impl Fn(Value) -> Result<Value, Error> + Send + Sync + 'static,
    ) -> Self {
        FnTool {
            name: name.into(),
            doc: None,
            parameters: Vec::new(),
            handler: Box::new(handler),
        }
    }

    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.doc = Some(text.into());
        self
    }

    /// Declare the next parameter. Call order is declaration order.
    pub fn param(mut self, name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        self.parameters.push(Parameter::new(name, descriptor));
        self
    }
}

impl Callable for FnTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn documentation(&self) -> Option<String> {
        self.doc.clone()
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.parameters.clone()
    }

    fn call(&self, arguments: Value) -> Result<Value, Error> {
        (self.handler)(arguments)
    }
}
