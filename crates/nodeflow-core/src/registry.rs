//! Node type registry with a mandatory `"default"` entry.

use crate::node::DEFAULT_NODE_TYPE;
use std::collections::HashMap;
use thiserror::Error;

/// Registry errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Node type registry has no \"default\" entry")]
    MissingDefault,
}

/// Outcome of looking up a node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeResolution<'a, C> {
    /// The requested type is registered.
    Exact { key: &'a str, component: &'a C },
    /// The requested type is unknown; the `"default"` entry is used instead.
    Fallback { requested: &'a str, component: &'a C },
}

impl<'a, C> TypeResolution<'a, C> {
    /// The component to render with.
    pub fn component(&self) -> &'a C {
        match *self {
            TypeResolution::Exact { component, .. } | TypeResolution::Fallback { component, .. } => {
                component
            }
        }
    }

    /// The type key the node asked for.
    pub fn type_key(&self) -> &'a str {
        match *self {
            TypeResolution::Exact { key, .. } => key,
            TypeResolution::Fallback { requested, .. } => requested,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TypeResolution::Fallback { .. })
    }
}

/// Maps node type keys to render-capable components.
///
/// A `"default"` entry always exists, so every lookup yields a component.
#[derive(Debug, Clone)]
pub struct NodeTypes<C> {
    components: HashMap<String, C>,
}

impl<C> NodeTypes<C> {
    /// Create a registry whose `"default"` entry is `default`.
    pub fn new(default: C) -> Self {
        let mut components = HashMap::new();
        components.insert(DEFAULT_NODE_TYPE.to_string(), default);
        Self { components }
    }

    /// Build a registry from an existing map, which must contain `"default"`.
    pub fn from_map(components: HashMap<String, C>) -> Result<Self, RegistryError> {
        if !components.contains_key(DEFAULT_NODE_TYPE) {
            return Err(RegistryError::MissingDefault);
        }
        Ok(Self { components })
    }

    /// Register a component for a type key, returning the one it replaces.
    pub fn register(&mut self, key: impl Into<String>, component: C) -> Option<C> {
        self.components.insert(key.into(), component)
    }

    /// Builder form of [`NodeTypes::register`].
    pub fn with(mut self, key: impl Into<String>, component: C) -> Self {
        self.register(key, component);
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.components.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&C> {
        self.components.get(key)
    }

    /// The `"default"` component.
    pub fn default_component(&self) -> &C {
        &self.components[DEFAULT_NODE_TYPE]
    }

    /// Look up a type key (`None` means `"default"`), falling back to the
    /// `"default"` entry when it is not registered.
    pub fn resolve<'a>(&'a self, node_type: Option<&'a str>) -> TypeResolution<'a, C> {
        let key = node_type.unwrap_or(DEFAULT_NODE_TYPE);
        match self.components.get(key) {
            Some(component) => TypeResolution::Exact { key, component },
            None => TypeResolution::Fallback {
                requested: key,
                component: self.default_component(),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
