//! In-memory display tree.
//!
//! A small arena-backed model of the page's element tree: elements with an
//! optional id, class list, attributes, inline styles, text and form state.
//! Every accessor takes a [`NodeId`] and quietly does nothing (or returns
//! `None`) when the node has been removed, so handlers never panic on a
//! stale reference.
//!
//! Freed slots are reused. Each slot carries a generation that is bumped on
//! removal, so a handle to a removed node never reaches the element that
//! later takes its slot.

use std::collections::BTreeMap;

use moda_core::Rect;

/// Handle to an element in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// A single element.
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: String,
    checked: bool,
    disabled: bool,
    rect: Option<Rect>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// The page's element tree.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document with `html`, `head` and `body`.
    #[must_use]
    pub fn new() -> Self {
        let root = NodeId {
            index: 0,
            generation: 0,
        };
        let mut doc = Self {
            slots: vec![Slot {
                generation: 0,
                element: Some(Element::new("html")),
            }],
            free: Vec::new(),
            root,
            head: root,
            body: root,
        };
        doc.head = doc.append_new(doc.root, "head", "");
        doc.body = doc.append_new(doc.root, "body", "");
        doc
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub const fn head(&self) -> NodeId {
        self.head
    }

    #[must_use]
    pub const fn body(&self) -> NodeId {
        self.body
    }

    /// Look up a live element.
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.slots
            .get(node.index)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.element.as_ref())
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.slots
            .get_mut(node.index)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.element.as_mut())
    }

    /// Number of arena slots, live or free.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    // =========================================================================
    // Creation and structure
    // =========================================================================

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        if let Some(index) = self.free.pop()
            && let Some(slot) = self.slots.get_mut(index)
        {
            slot.element = Some(Element::new(tag));
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(Slot {
            generation: 0,
            element: Some(Element::new(tag)),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    /// Create an element with the given space-separated classes and append
    /// it to `parent`.
    pub fn append_new(&mut self, parent: NodeId, tag: &str, class_name: &str) -> NodeId {
        let node = self.create_element(tag);
        self.set_class_name(node, class_name);
        self.append_child(parent, node);
        node
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    ///
    /// Does nothing if `child` is `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.element(parent).is_none()
            || self.element(child).is_none()
            || self.is_inclusive_ancestor(child, parent)
        {
            return;
        }
        self.detach(child);
        if let Some(el) = self.element_mut(child) {
            el.parent = Some(parent);
        }
        if let Some(el) = self.element_mut(parent) {
            el.children.push(child);
        }
    }

    /// Insert `node` as the previous sibling of `reference`.
    ///
    /// Does nothing if `reference` has no parent, or if `node` is that
    /// parent or one of its ancestors.
    pub fn insert_before(&mut self, reference: NodeId, node: NodeId) {
        if reference == node || self.element(node).is_none() {
            return;
        }
        let Some(parent) = self.parent(reference) else {
            return;
        };
        if self.is_inclusive_ancestor(node, parent) {
            return;
        }
        self.detach(node);
        let Some(index) = self.children(parent).iter().position(|&c| c == reference) else {
            return;
        };
        if let Some(el) = self.element_mut(node) {
            el.parent = Some(parent);
        }
        if let Some(el) = self.element_mut(parent) {
            el.children.insert(index, node);
        }
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        if let Some(el) = self.element_mut(parent) {
            el.children.retain(|&c| c != node);
        }
        if let Some(el) = self.element_mut(node) {
            el.parent = None;
        }
    }

    /// Remove `node` and its whole subtree from the document.
    pub fn remove(&mut self, node: NodeId) {
        if node == self.root {
            return;
        }
        self.detach(node);
        for n in self.descendants(node) {
            if let Some(slot) = self.slots.get_mut(n.index) {
                slot.element = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(n.index);
            }
        }
    }

    /// Remove every child of `node`.
    pub fn clear_children(&mut self, node: NodeId) {
        for child in self.children(node).to_vec() {
            self.remove(child);
        }
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.element(node).map_or(&[], Element::children)
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).and_then(Element::parent)
    }

    /// Returns `true` if `ancestor` is `node` or sits above it.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    /// Returns `true` if `node` is live and reachable from the root.
    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.element(node).is_some() && self.is_inclusive_ancestor(self.root, node)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// `node` and everything below it, in document order.
    #[must_use]
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(n) = stack.pop() {
            let Some(el) = self.element(n) else {
                continue;
            };
            out.push(n);
            stack.extend(el.children.iter().rev());
        }
        out
    }

    /// Find an attached element by id.
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&n| self.element(n).and_then(Element::id) == Some(id))
    }

    /// Every element under `scope` (inclusive) carrying `class`.
    #[must_use]
    pub fn find_by_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&n| self.has_class(n, class))
            .collect()
    }

    /// First element under `scope` (exclusive) carrying `class`.
    #[must_use]
    pub fn first_by_class(&self, scope: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .skip(1)
            .find(|&n| self.has_class(n, class))
    }

    /// First element under `scope` (exclusive) with the given tag.
    #[must_use]
    pub fn first_by_tag(&self, scope: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .skip(1)
            .find(|&n| self.element(n).is_some_and(|el| el.tag == tag))
    }

    /// Nearest element from `node` upward (inclusive) carrying `class`.
    #[must_use]
    pub fn closest(&self, node: NodeId, class: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if self.has_class(n, class) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    // =========================================================================
    // Identity and classes
    // =========================================================================

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        if let Some(el) = self.element_mut(node) {
            el.id = Some(id.to_owned());
        }
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(Element::tag)
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> &[String] {
        self.element(node).map_or(&[], Element::classes)
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_class(class))
    }

    /// Replace the whole class list with space-separated `class_name`.
    pub fn set_class_name(&mut self, node: NodeId, class_name: &str) {
        if let Some(el) = self.element_mut(node) {
            el.classes = class_name.split_whitespace().map(str::to_owned).collect();
        }
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            if !el.has_class(class) {
                el.classes.push(class.to_owned());
            }
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.classes.retain(|c| c != class);
        }
    }

    /// Flip `class`; returns whether it is now present.
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            self.has_class(node, class)
        }
    }

    // =========================================================================
    // Attributes, styles, text
    // =========================================================================

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)
            .and_then(|el| el.attributes.get(name))
            .map(String::as_str)
    }

    /// Set an inline style. An empty value removes the property.
    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            if value.is_empty() {
                el.styles.remove(property);
            } else {
                el.styles.insert(property.to_owned(), value.to_owned());
            }
        }
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node)
            .and_then(|el| el.styles.get(property))
            .map(String::as_str)
    }

    /// Replace the node's own text. Children are left alone.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(el) = self.element_mut(node) {
            text.clone_into(&mut el.text);
        }
    }

    /// The node's own text.
    #[must_use]
    pub fn text(&self, node: NodeId) -> &str {
        self.element(node).map_or("", |el| el.text.as_str())
    }

    /// Own text of the node and all descendants, in document order.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        self.descendants(node)
            .into_iter()
            .map(|n| self.text(n))
            .collect()
    }

    // =========================================================================
    // Form and layout state
    // =========================================================================

    #[must_use]
    pub fn value(&self, node: NodeId) -> &str {
        self.element(node).map_or("", |el| el.value.as_str())
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(el) = self.element_mut(node) {
            value.clone_into(&mut el.value);
        }
    }

    #[must_use]
    pub fn checked(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(|el| el.checked)
    }

    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        if let Some(el) = self.element_mut(node) {
            el.checked = checked;
        }
    }

    #[must_use]
    pub fn disabled(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(|el| el.disabled)
    }

    pub fn set_disabled(&mut self, node: NodeId, disabled: bool) {
        if let Some(el) = self.element_mut(node) {
            el.disabled = disabled;
        }
    }

    #[must_use]
    pub fn rect(&self, node: NodeId) -> Option<Rect> {
        self.element(node).and_then(|el| el.rect)
    }

    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(el) = self.element_mut(node) {
            el.rect = Some(rect);
        }
    }

    /// Clear the values of every input under `form` and untick checkboxes.
    pub fn reset_form(&mut self, form: NodeId) {
        for node in self.descendants(form) {
            if self.tag(node) == Some("input") {
                self.set_value(node, "");
                self.set_checked(node, false);
            }
        }
    }
}
