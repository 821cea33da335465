//! Visual tree emitted by the renderer.
//!
//! A `VisualNode` is a host-agnostic description of one rendered
//! element: tag, attributes, inline styles, classes, children. The
//! host (web view, preview canvas) materializes it however it likes.
//!
//! Attribute and style maps are ordered so identical inputs always
//! serialize to identical output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of the rendered output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VisualNode {
    Element {
        tag: String,
        #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
        attributes: BTreeMap<String, String>,
        #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
        styles: BTreeMap<String, String>,
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        classes: Vec<String>,
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        children: Vec<VisualNode>,
    },

    Text { content: String },
}

impl VisualNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VisualNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VisualNode::Text {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VisualNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VisualNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        if let VisualNode::Element {
            ref mut classes, ..
        } = self
        {
            classes.push(class.into());
        }
        self
    }

    pub fn with_child(mut self, child: VisualNode) -> Self {
        if let VisualNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VisualNode>) -> Self {
        if let VisualNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VisualNode::Element { tag, .. } => Some(tag),
            VisualNode::Text { .. } => None,
        }
    }

    pub fn style(&self, key: &str) -> Option<&str> {
        match self {
            VisualNode::Element { styles, .. } => styles.get(key).map(String::as_str),
            VisualNode::Text { .. } => None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VisualNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            VisualNode::Text { .. } => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        match self {
            VisualNode::Element { classes, .. } => classes.iter().any(|c| c == class),
            VisualNode::Text { .. } => false,
        }
    }

    pub fn children(&self) -> &[VisualNode] {
        match self {
            VisualNode::Element { children, .. } => children,
            VisualNode::Text { .. } => &[],
        }
    }

    /// Depth-first search for the first descendant carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&VisualNode> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find_class(class))
    }

    /// Index of the first direct child carrying `class`.
    pub fn child_index_of(&self, class: &str) -> Option<usize> {
        self.children().iter().position(|c| c.has_class(class))
    }

    /// Concatenated text content of this subtree.
    pub fn text_content(&self) -> String {
        match self {
            VisualNode::Text { content } => content.clone(),
            VisualNode::Element { children, .. } => {
                children.iter().map(VisualNode::text_content).collect()
            }
        }
    }
}

/// Rendered output for a whole composition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualTree {
    pub nodes: Vec<VisualNode>,
}

impl VisualTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: VisualNode) {
        self.nodes.push(node);
    }

    pub fn find_class(&self, class: &str) -> Option<&VisualNode> {
        self.nodes.iter().find_map(|node| node.find_class(class))
    }
}
