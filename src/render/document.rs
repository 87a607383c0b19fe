use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Stable handle to one element. Ids are never reused, so a handle to a
/// removed element stays detectably stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Pointer events a host can route into the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    MouseOver,
    MouseOut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: IndexMap<String, String>,
    pub style: IndexMap<String, String>,
    pub classes: SmallVec<[String; 2]>,
    pub text: Option<String>,
    /// Raw markup content; only overlay elements use it.
    pub html: Option<String>,
    pub listeners: SmallVec<[EventKind; 2]>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            style: IndexMap::new(),
            classes: SmallVec::new(),
            text: None,
            html: None,
            listeners: SmallVec::new(),
            parent,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Retained element tree standing in for the host page.
///
/// The chart is the only writer it knows about; hosts read it back through
/// a `Renderer` or the query helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<Option<Element>>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(Element::new("body", None))],
            body: NodeId(0),
        }
    }

    /// Creates a page with a single `div` container carrying `container_id`.
    #[must_use]
    pub fn with_container(container_id: &str) -> Self {
        let mut document = Self::new();
        let body = document.body;
        let mut container = Element::new("div", Some(body));
        container
            .attrs
            .insert("id".to_owned(), container_id.to_owned());
        let container = document.push_node(container);
        if let Some(body) = document.nodes[body.0].as_mut() {
            body.children.push(container);
        }
        document
    }

    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).is_some_and(Option::is_some)
    }

    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn element_mut(&mut self, id: NodeId) -> ChartResult<&mut Element> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(ChartError::UnknownNode(id.0))
    }

    fn push_node(&mut self, element: Element) -> NodeId {
        self.nodes.push(Some(element));
        NodeId(self.nodes.len() - 1)
    }

    /// Creates a new element as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> ChartResult<NodeId> {
        if !self.contains(parent) {
            return Err(ChartError::UnknownNode(parent.0));
        }
        let id = self.push_node(Element::new(tag, Some(parent)));
        self.element_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Removes `id` and its whole subtree. Removing the body is rejected.
    pub fn remove(&mut self, id: NodeId) -> ChartResult<()> {
        if id == self.body {
            return Err(ChartError::InvalidData(
                "document body cannot be removed".to_owned(),
            ));
        }
        let parent = self.element(id).ok_or(ChartError::UnknownNode(id.0))?.parent;
        if let Some(parent) = parent {
            self.element_mut(parent)?.children.retain(|child| *child != id);
        }

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(element) = self.nodes.get_mut(next.0).and_then(Option::take) {
                pending.extend(element.children);
            }
        }
        Ok(())
    }

    pub fn set_attr(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> ChartResult<()> {
        self.element_mut(id)?
            .attrs
            .insert(name.to_owned(), value.into());
        Ok(())
    }

    pub fn set_style(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> ChartResult<()> {
        self.element_mut(id)?
            .style
            .insert(name.to_owned(), value.into());
        Ok(())
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) -> ChartResult<()> {
        let element = self.element_mut(id)?;
        if !element.has_class(class) {
            element.classes.push(class.to_owned());
        }
        Ok(())
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> ChartResult<()> {
        self.element_mut(id)?.text = Some(text.into());
        Ok(())
    }

    pub fn set_html(&mut self, id: NodeId, html: impl Into<String>) -> ChartResult<()> {
        self.element_mut(id)?.html = Some(html.into());
        Ok(())
    }

    pub fn add_listener(&mut self, id: NodeId, kind: EventKind) -> ChartResult<()> {
        let element = self.element_mut(id)?;
        if !element.listeners.contains(&kind) {
            element.listeners.push(kind);
        }
        Ok(())
    }

    #[must_use]
    pub fn has_listener(&self, id: NodeId, kind: EventKind) -> bool {
        self.element(id)
            .is_some_and(|element| element.listeners.contains(&kind))
    }

    /// Parent of `id`, or `None` for the body and for removed nodes.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.element(id).and_then(Element::parent)
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.element(id).map(Element::children).unwrap_or(&[])
    }

    /// All elements below `root` in document order, `root` excluded.
    #[must_use]
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    #[must_use]
    pub fn select_by_id(&self, element_id: &str) -> Option<NodeId> {
        std::iter::once(self.body)
            .chain(self.descendants(self.body))
            .find(|id| {
                self.element(*id)
                    .is_some_and(|element| element.attr("id") == Some(element_id))
            })
    }

    #[must_use]
    pub fn select_all(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| self.element(*id).is_some_and(|element| element.tag == tag))
            .collect()
    }

    #[must_use]
    pub fn select_all_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| {
                self.element(*id)
                    .is_some_and(|element| element.has_class(class))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, EventKind};

    #[test]
    fn removing_a_subtree_frees_every_descendant() {
        let mut document = Document::with_container("scatter");
        let container = document.select_by_id("scatter").expect("container");
        let svg = document.append_element(container, "svg").expect("svg");
        let group = document.append_element(svg, "g").expect("g");
        let circle = document.append_element(group, "circle").expect("circle");

        document.remove(svg).expect("remove svg");

        assert!(!document.contains(svg));
        assert!(!document.contains(group));
        assert!(!document.contains(circle));
        assert!(document.children(container).is_empty());
    }

    #[test]
    fn parent_query_walks_up_until_the_body() {
        let mut document = Document::with_container("scatter");
        let body = document.body();
        let container = document.select_by_id("scatter").expect("container");
        let svg = document.append_element(container, "svg").expect("svg");

        assert_eq!(document.parent(svg), Some(container));
        assert_eq!(document.parent(container), Some(body));
        assert_eq!(document.parent(body), None);

        document.remove(svg).expect("remove svg");
        assert_eq!(document.parent(svg), None);
    }

    #[test]
    fn descendants_follow_document_order() {
        let mut document = Document::new();
        let body = document.body();
        let a = document.append_element(body, "g").expect("a");
        let a1 = document.append_element(a, "text").expect("a1");
        let b = document.append_element(body, "g").expect("b");

        assert_eq!(document.descendants(body), vec![a, a1, b]);
        assert_eq!(document.select_all(body, "text"), vec![a1]);
    }

    #[test]
    fn listeners_and_classes_are_not_duplicated() {
        let mut document = Document::new();
        let body = document.body();
        let node = document.append_element(body, "circle").expect("node");
        document.add_class(node, "stateCircle").expect("class");
        document.add_class(node, "stateCircle").expect("class");
        document.add_listener(node, EventKind::MouseOver).expect("listener");
        document.add_listener(node, EventKind::MouseOver).expect("listener");

        let element = document.element(node).expect("element");
        assert_eq!(element.classes.len(), 1);
        assert_eq!(element.listeners.len(), 1);
    }

    #[test]
    fn body_cannot_be_removed() {
        let mut document = Document::new();
        let body = document.body();
        assert!(document.remove(body).is_err());
    }
}
