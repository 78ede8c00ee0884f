pub mod registry;
pub mod rewriter;

pub use registry::SheetRegistry;
pub use rewriter::{PropertyAxis, RewriteOptions, StyleRewriter};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Unknown style sheet: {0}")]
    UnknownSheet(String),
}

pub type Result<T> = std::result::Result<T, StyleError>;

/// A single style property value.
///
/// Style trees are open-ended and heterogeneous: numbers carry layout
/// values in design units, strings carry colors and keyword enums, nested
/// nodes carry sub-styles, and lists hold transform-like sequences. The
/// rewriter only ever touches the `Number` branch (and, when coercion is
/// enabled, numeric-looking strings); everything else passes through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Number(f32),
    String(String),
    List(Vec<StyleValue>),
    Node(StyleNode),
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f32)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<StyleNode> for StyleValue {
    fn from(value: StyleNode) -> Self {
        Self::Node(value)
    }
}

impl From<Vec<StyleValue>> for StyleValue {
    fn from(value: Vec<StyleValue>) -> Self {
        Self::List(value)
    }
}

/// A mapping from property name to value. The tree is caller-owned and
/// acyclic by construction: nodes own their children outright, so the
/// unbounded-recursion hazard of cyclic inputs cannot arise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleNode {
    properties: HashMap<String, StyleValue>,
}

impl StyleNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.properties.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut StyleValue> {
        self.properties.get_mut(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<StyleValue>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<StyleValue> {
        self.properties.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.properties.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.properties.iter()
    }

    /// The numeric value of a property, if it holds one.
    pub fn number(&self, name: &str) -> Option<f32> {
        match self.properties.get(name) {
            Some(StyleValue::Number(n)) => Some(*n),
            _ => None,
        }
    }
}

impl From<HashMap<String, StyleValue>> for StyleNode {
    fn from(properties: HashMap<String, StyleValue>) -> Self {
        Self { properties }
    }
}

impl FromIterator<(String, StyleValue)> for StyleNode {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}
