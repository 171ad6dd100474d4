//! Arena-backed document tree.
//!
//! Nodes live in a flat vector and refer to each other by [`NodeId`].
//! Removing a node only unlinks it from its parent; the payload stays in the
//! arena so ids held by callers never dangle. Callers that mutate while
//! walking must snapshot child lists first (`children(..).to_vec()`).

use pagelens_protocols::DomError;

use crate::node::{Attribute, ElementData, Namespace, NodeData, NodeId, NodeKind};

/// A mutable DOM-like tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only the document node.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(NodeKind::Document)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes ever allocated, attached or not.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, id: NodeId) -> Result<&NodeData, DomError> {
        self.nodes.get(id.0).ok_or(DomError::NodeNotFound(id.0))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData, DomError> {
        self.nodes.get_mut(id.0).ok_or(DomError::NodeNotFound(id.0))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(NodeData::new(kind));
        NodeId(self.nodes.len() - 1)
    }

    // ========================================================================
    // Creation
    // ========================================================================

    pub fn create_element(&mut self, name: &str, namespace: Namespace) -> NodeId {
        self.push(NodeKind::Element(ElementData::new(name, namespace)))
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(text.into()))
    }

    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Comment(text.into()))
    }

    pub fn create_doctype(&mut self, name: impl Into<String>) -> NodeId {
        self.push(NodeKind::Doctype(name.into()))
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.0).map(|node| &node.kind)
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.kind(id) {
            Some(NodeKind::Element(element)) => Some(element),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match self.nodes.get_mut(id.0).map(|node| &mut node.kind) {
            Some(NodeKind::Element(element)) => Some(element),
            _ => None,
        }
    }

    fn element_or_err(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Element(element) => Ok(element),
            _ => Err(DomError::NotAnElement(id.0)),
        }
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        matches!(self.kind(id), Some(NodeKind::Text(_)))
    }

    pub fn is_comment(&self, id: NodeId) -> bool {
        matches!(self.kind(id), Some(NodeKind::Comment(_)))
    }

    /// Lowercase local name of an element.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|element| element.name.as_str())
    }

    pub fn has_tag(&self, id: NodeId, tags: &[&str]) -> bool {
        self.tag_name(id).is_some_and(|name| tags.contains(&name))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    /// Child list; empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Element children only, in order.
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|child| self.is_element(*child))
            .collect()
    }

    pub fn child_element_count(&self, id: NodeId) -> usize {
        self.children(id)
            .iter()
            .filter(|child| self.is_element(**child))
            .count()
    }

    /// Whether `id` is still reachable from the document node.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == self.root {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            current = self.parent(candidate);
        }
        false
    }

    /// Pre-order walk starting at (and including) `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            if node.0 >= self.nodes.len() {
                continue;
            }
            order.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        order
    }

    /// Elements in the subtree, pre-order.
    pub fn descendant_elements(&self, id: NodeId) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|node| self.is_element(*node))
            .collect()
    }

    /// Elements in the subtree whose tag is one of `tags`, in document order.
    pub fn elements_by_tag(&self, scope: NodeId, tags: &[&str]) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|node| self.has_tag(*node, tags))
            .collect()
    }

    /// First element in document order matching `predicate`.
    pub fn find_element<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&ElementData) -> bool,
    {
        self.descendants(self.root)
            .into_iter()
            .find(|node| self.element(*node).is_some_and(&predicate))
    }

    /// The first `body` element.
    pub fn body(&self) -> Option<NodeId> {
        self.find_element(|element| element.is_html() && element.name == "body")
    }

    /// Element carrying the HTML `id` attribute `html_id`.
    pub fn element_by_html_id(&self, html_id: &str) -> Option<NodeId> {
        self.find_element(|element| element.attribute("id") == Some(html_id))
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|element| element.attribute(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    pub fn attributes(&self, id: NodeId) -> &[Attribute] {
        self.element(id)
            .map(|element| element.attributes.as_slice())
            .unwrap_or(&[])
    }

    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.element_or_err(id)?.set_attribute(name, value);
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<Option<String>, DomError> {
        Ok(self.element_or_err(id)?.remove_attribute(name))
    }

    // ========================================================================
    // Text
    // ========================================================================

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        for node in self.descendants(id) {
            if let Some(NodeKind::Text(content)) = self.kind(node) {
                text.push_str(content);
            }
        }
        text
    }

    /// Any descendant text that is not whitespace.
    pub fn has_text(&self, id: NodeId) -> bool {
        self.descendants(id).into_iter().any(|node| {
            matches!(self.kind(node), Some(NodeKind::Text(content)) if !content.trim().is_empty())
        })
    }

    /// Any direct child text node that is not whitespace.
    pub fn has_direct_text(&self, id: NodeId) -> bool {
        self.children(id).iter().any(|child| {
            matches!(self.kind(*child), Some(NodeKind::Text(content)) if !content.trim().is_empty())
        })
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Unlink a node from its parent. No-op for detached nodes.
    pub fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        let Some(parent) = self.node(id)?.parent else {
            return Ok(());
        };
        self.node_mut(parent)?.children.retain(|child| *child != id);
        self.node_mut(id)?.parent = None;
        Ok(())
    }

    fn check_insertion(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        match self.node(parent)?.kind {
            NodeKind::Text(_) | NodeKind::Comment(_) | NodeKind::Doctype(_) => {
                return Err(DomError::InvalidOperation(format!(
                    "node {} cannot have children",
                    parent.0
                )));
            }
            _ => {}
        }
        self.node(child)?;
        if self.is_ancestor_or_self(child, parent) {
            return Err(DomError::InvalidOperation(format!(
                "inserting node {} into its own subtree",
                child.0
            )));
        }
        Ok(())
    }

    /// Move `child` to the end of `parent`'s children.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check_insertion(parent, child)?;
        self.detach(child)?;
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Move `child` into `parent` right before `reference`.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: NodeId,
    ) -> Result<(), DomError> {
        if child == reference {
            return Ok(());
        }
        self.check_insertion(parent, child)?;
        if self.parent(reference) != Some(parent) {
            return Err(DomError::NotAChild(reference.0, parent.0));
        }
        self.detach(child)?;
        let siblings = &mut self.node_mut(parent)?.children;
        let position = siblings
            .iter()
            .position(|sibling| *sibling == reference)
            .ok_or(DomError::NotAChild(reference.0, parent.0))?;
        siblings.insert(position, child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Put `new_child` where `old_child` was and detach `old_child`.
    pub fn replace_child(
        &mut self,
        parent: NodeId,
        new_child: NodeId,
        old_child: NodeId,
    ) -> Result<(), DomError> {
        self.insert_before(parent, new_child, old_child)?;
        if new_child != old_child {
            self.detach(old_child)?;
        }
        Ok(())
    }

    // ========================================================================
    // Cloning
    // ========================================================================

    /// Deep-copy `node` from `source` into this document, detached.
    ///
    /// `annotate` sees every copied element together with the id of its
    /// source node, so callers can decorate the copy without touching the
    /// source.
    pub fn import_subtree<F>(
        &mut self,
        source: &Document,
        node: NodeId,
        mut annotate: F,
    ) -> Result<NodeId, DomError>
    where
        F: FnMut(NodeId, &mut ElementData),
    {
        let copy_root = self.import_node(source, node, &mut annotate)?;
        let mut stack = vec![(node, copy_root)];
        while let Some((source_node, copy)) = stack.pop() {
            for &child in source.children(source_node) {
                let child_copy = self.import_node(source, child, &mut annotate)?;
                self.node_mut(copy)?.children.push(child_copy);
                self.node_mut(child_copy)?.parent = Some(copy);
                stack.push((child, child_copy));
            }
        }
        Ok(copy_root)
    }

    fn import_node<F>(
        &mut self,
        source: &Document,
        node: NodeId,
        annotate: &mut F,
    ) -> Result<NodeId, DomError>
    where
        F: FnMut(NodeId, &mut ElementData),
    {
        let mut kind = source.node(node)?.kind.clone();
        if let NodeKind::Element(element) = &mut kind {
            annotate(node, element);
        }
        Ok(self.push(kind))
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
