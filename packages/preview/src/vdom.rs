use crate::layout::SectionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        children: Vec<VNode>,
        /// Stable key for collection items (`experience-3`, ...)
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },

    /// Text node
    Text { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            key: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    /// Element holding a single text child
    pub fn text_element(tag: impl Into<String>, content: impl Into<String>) -> Self {
        VNode::element(tag).with_child(VNode::text(content))
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        if let VNode::Element {
            key: ref mut node_key,
            ..
        } = self
        {
            *node_key = Some(key.into());
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            VNode::Text { .. } => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            VNode::Text { .. } => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            VNode::Element { key, .. } => key.as_deref(),
            VNode::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            VNode::Text { .. } => &[],
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text { content } => content.clone(),
            VNode::Element { children, .. } => {
                children.iter().map(VNode::text_content).collect()
            }
        }
    }

    /// Depth-first search for descendants (including self) with `class`
    pub fn find_by_class(&self, class: &str) -> Vec<&VNode> {
        let mut found = Vec::new();
        self.collect(&mut found, &|node| {
            node.attr("class")
                .map(|classes| classes.split_whitespace().any(|c| c == class))
                .unwrap_or(false)
        });
        found
    }

    /// Depth-first search for descendants (including self) with `tag`
    pub fn find_by_tag(&self, tag: &str) -> Vec<&VNode> {
        let mut found = Vec::new();
        self.collect(&mut found, &|node| node.tag() == Some(tag));
        found
    }

    fn collect<'a>(&'a self, found: &mut Vec<&'a VNode>, predicate: &dyn Fn(&VNode) -> bool) {
        if predicate(self) {
            found.push(self);
        }
        for child in self.children() {
            child.collect(found, predicate);
        }
    }
}

/// One whole block of the preview below the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewSection {
    pub id: SectionId,
    pub node: VNode,
}

/// Projected preview: a fixed header followed by movable section blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewDocument {
    pub header: VNode,
    pub sections: Vec<PreviewSection>,
}

impl PreviewDocument {
    pub fn section(&self, id: SectionId) -> Option<&PreviewSection> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Section identifiers in display order
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|section| section.id).collect()
    }

    /// Whole sheet as a single tree: header first, then sections in order
    pub fn to_vnode(&self) -> VNode {
        VNode::element("div")
            .with_class("resume-sheet")
            .with_id("resumePreview")
            .with_child(self.header.clone())
            .with_children(self.sections.iter().map(|s| s.node.clone()).collect())
    }
}
