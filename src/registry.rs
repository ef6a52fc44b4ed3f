//! Immutable name-indexed collection of wrapped tools.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::Error;
use crate::wrap::Wrapper;

/// An order-preserving name → [`Wrapper`] map, built once from a fixed list.
///
/// Duplicate names overwrite earlier entries (last write wins) while the
/// position of the first insertion is kept, so iteration follows the
/// insertion order of the distinct names. There is no way to add or remove
/// tools afterwards; build a new registry instead.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tools: IndexMap<String, Wrapper>,
}

impl Registry {
    pub fn new(wrappers: impl IntoIterator<Item = Wrapper>) -> Self {
        let mut tools = IndexMap::new();
        for wrapper in wrappers {
            tools.insert(wrapper.name().to_string(), wrapper);
        }
        Registry { tools }
    }

    /// Look a tool up by name.
    pub fn get(&self, name: &str) -> Result<&Wrapper, Error> {
        self.tools
            .get(name)
            .ok_or_else(|| Error::NameNotFound(name.to_string()))
    }

    /// Wrappers in insertion order of their distinct names.
    pub fn iter(&self) -> impl Iterator<Item = &Wrapper> {
        self.tools.values()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Membership by name.
    pub fn contains_name(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Membership by value: an equality scan across all held wrappers.
    pub fn contains(&self, wrapper: &Wrapper) -> bool {
        self.tools.values().any(|held| held == wrapper)
    }

    /// Look up then invoke, propagating the wrapper's call contract.
    pub fn call(&self, name: &str, arguments: Value) -> Result<Value, Error> {
        self.get(name)?.call(arguments)
    }

    /// Look up then invoke with a JSON text payload.
    pub fn call_json(&self, name: &str, arguments: &str) -> Result<Value, Error> {
        self.get(name)?.call_json(arguments)
    }

    /// Manifest entries for every tool, in iteration order.
    pub fn manifest(&self) -> Vec<Value> {
        self.iter().map(Wrapper::manifest_entry).collect()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Wrapper;
    type IntoIter = indexmap::map::Values<'a, String, Wrapper>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.values()
    }
}
