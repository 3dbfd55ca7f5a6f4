//! Named attribute container.
//!
//! An `AttributeMap` attaches auxiliary expressions to a declaration
//! or module context under unique names. Bindings are write-once: the
//! first writer of a name wins and later writers leave the map
//! unchanged. Enumeration is deterministic in insertion order.
//!
//! The map is not internally synchronized; callers that share one
//! instance across threads must serialize access themselves.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::expr::VExprRef;

/// Name-to-expression bindings for one context, write-once per name.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeMap {
    bindings: FxHashMap<SmolStr, VExprRef>,
    order: Vec<SmolStr>,
}

impl AttributeMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `expr` to `name` if the name is unbound, and return
    /// whether a new binding was created. An existing binding is
    /// never overwritten.
    pub fn add(&mut self, name: impl Into<SmolStr>, expr: VExprRef) -> bool {
        let name = name.into();
        if self.bindings.contains_key(&name) {
            return false;
        }
        self.order.push(name.clone());
        self.bindings.insert(name, expr);
        true
    }

    /// Look up the expression bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VExprRef> {
        self.bindings.get(name)
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the map holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &VExprRef)> {
        self.order.iter().map(|name| (name, &self.bindings[name]))
    }
}
