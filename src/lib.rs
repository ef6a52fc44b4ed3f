//! Turn declared parameter types into JSON Schema and publish callables in a
//! name-indexed tool registry.
//!
//! Three entry points cover the whole surface:
//! - [`translate`]: one type descriptor → one schema fragment (the core).
//! - [`wrap`]: callable + declared signature → [`Wrapper`] with schema,
//!   documentation, and name attached.
//! - [`Registry`]: immutable name → wrapper map with call-by-name dispatch.
//!
//! Everything is synchronous and immutable after construction; the only side
//! effects are whatever the registered callables themselves do. Generated
//! schemas describe arguments, they never enforce them.

pub mod descriptor;
pub mod error;
pub mod generate;
pub mod registry;
pub mod schema;
pub mod wrap;

pub use descriptor::{Field, LiteralValue, Marker, Primitive, TypeDescriptor, description};
pub use error::Error;
pub use generate::{JsonSchema, Parameter, generate_json_schema};
pub use registry::Registry;
pub use schema::{SchemaFragment, TypeSet, TypeTag, translate};
pub use wrap::{Callable, FnTool, Wrapper, wrap};
