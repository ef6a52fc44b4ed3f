use thiserror::Error;

/// Everything that can go wrong while translating descriptors, wrapping
/// callables, or dispatching through a registry.
#[derive(Debug, Error)]
pub enum Error {
    /// Descriptor shape the translator does not support: an unknown kind,
    /// an empty or mixed-typed literal set, or a union alternative that
    /// itself resolved to a list of type tags.
    #[error("unsupported type descriptor: {0}")]
    UnsupportedType(String),

    /// More than one description marker attached to a single annotated
    /// descriptor.
    #[error("multiple description markers on one annotated descriptor")]
    MultipleDescriptionMarkers,

    /// Attempted to wrap a callable that carries no documentation at all.
    /// An explicitly empty documentation string is fine; `None` is not.
    #[error("callable `{0}` has no documentation")]
    MissingDocumentation(String),

    /// Registry lookup or call-by-name on a name that was never registered.
    #[error("no tool registered under `{0}`")]
    NameNotFound(String),

    /// A JSON argument payload that could not be parsed. Carries the JSON
    /// path at which deserialization failed.
    #[error("invalid argument payload: {0}")]
    InvalidArguments(String),

    /// The underlying callable failed. Forwarded unmodified.
    #[error("tool `{name}` failed: {message}")]
    Tool { name: String, message: String },
}
