use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::interaction::HoverBinding;

/// Handle to one element inside an [`SvgDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Detached element description used when appending to a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub style: IndexMap<String, String>,
    pub text: Option<String>,
    pub hover: Option<HoverBinding>,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            style: IndexMap::new(),
            text: None,
            hover: None,
        }
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn on_hover(mut self, binding: HoverBinding) -> Self {
        self.hover = Some(binding);
        self
    }

    /// True when the whitespace-separated `class` attribute contains `class_name`.
    #[must_use]
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attributes
            .get("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class_name))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Owned, append-only element tree standing in for the host page.
///
/// The root is the host container (`<div id="...">`). Removed nodes stay in
/// the arena but are detached, so stale `NodeId`s resolve to nothing visible.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    nodes: Vec<Node>,
}

impl SvgDocument {
    #[must_use]
    pub fn new(container_id: &str) -> Self {
        let root = Node {
            element: Element::new("div").attr("id", container_id),
            parent: None,
            children: Vec::new(),
        };
        Self { nodes: vec![root] }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    pub fn container_id(&self) -> &str {
        self.nodes[0]
            .element
            .attributes
            .get("id")
            .map_or("", String::as_str)
    }

    /// Number of elements reachable from the root, root included.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.descendants(self.root()).len() + 1
    }

    /// True when nothing has been appended to the host container.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    pub fn append(&mut self, parent: NodeId, element: Element) -> ChartResult<NodeId> {
        self.node(parent)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    pub fn element(&self, id: NodeId) -> ChartResult<&Element> {
        self.node(id).map(|node| &node.element)
    }

    pub fn set_attr(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> ChartResult<()> {
        self.node_mut(id)?
            .element
            .attributes
            .insert(name.into(), value.into());
        Ok(())
    }

    /// True when `id` can be reached from the root.
    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root() {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map_or(&[][..], |node| node.children.as_slice())
    }

    /// Detaches `id` (and its subtree) from its parent.
    pub fn remove(&mut self, id: NodeId) -> ChartResult<()> {
        if id == self.root() {
            return Err(ChartError::InvalidData(
                "the host container cannot be removed".to_owned(),
            ));
        }
        let parent = self.node_mut(id)?.parent.take();
        if let Some(parent) = parent {
            self.nodes[parent.0].children.retain(|child| *child != id);
        }
        Ok(())
    }

    /// Moves `id` to be the first child of its parent so it paints underneath its siblings.
    pub fn lower(&mut self, id: NodeId) -> ChartResult<()> {
        let Some(parent) = self.node(id)?.parent else {
            return Ok(());
        };
        let siblings = &mut self.nodes[parent.0].children;
        siblings.retain(|child| *child != id);
        siblings.insert(0, id);
        Ok(())
    }

    /// Attached descendants of `scope` in document order, `scope` excluded.
    #[must_use]
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// First attached element with `tag` in document order.
    #[must_use]
    pub fn select_tag(&self, tag: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|id| self.nodes[id.0].element.tag == tag)
    }

    /// Descendants of `scope` carrying `class_name`.
    #[must_use]
    pub fn select_class(&self, scope: NodeId, class_name: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.nodes[id.0].element.has_class(class_name))
            .collect()
    }

    /// Equivalent of the `.class tag` descendant selector under `scope`.
    #[must_use]
    pub fn select_class_tag(&self, scope: NodeId, class_name: &str, tag: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        for owner in self.select_class(scope, class_name) {
            for id in self.descendants(owner) {
                if self.nodes[id.0].element.tag == tag && !out.contains(&id) {
                    out.push(id);
                }
            }
        }
        out
    }

    /// Attached descendants of `scope` with a hover binding.
    #[must_use]
    pub fn hover_targets(&self, scope: NodeId) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.nodes[id.0].element.hover.is_some())
            .collect()
    }

    fn node(&self, id: NodeId) -> ChartResult<&Node> {
        self.nodes.get(id.0).ok_or(ChartError::UnknownNode(id.0))
    }

    fn node_mut(&mut self, id: NodeId) -> ChartResult<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(ChartError::UnknownNode(id.0))
    }
}
