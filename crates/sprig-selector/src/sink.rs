use sprig_dom::{DomTree, ElementData, NodeId};

/// The DOM-like factory a build writes into.
///
/// The builder creates each element, sets its class, id, attributes and
/// content, and appends it to a container, in that order. Handles are
/// cheap copies; the fragment handle stays valid for the whole build.
pub trait TreeSink {
    /// Reference to a node owned by the sink.
    type Handle: Copy;
    /// What [`TreeSink::finish`] hands back to the caller.
    type Output;

    /// The tagless root the top-level elements are appended to.
    fn fragment(&self) -> Self::Handle;

    /// Create a detached element.
    fn create_element(&mut self, tag_name: &str) -> Self::Handle;

    /// Set the space-joined class list.
    fn set_class_name(&mut self, element: Self::Handle, class_name: &str);

    /// Set the identifier.
    fn set_id(&mut self, element: Self::Handle, id: &str);

    /// Set a regular attribute, replacing an earlier value for `name`.
    fn set_attribute(&mut self, element: Self::Handle, name: &str, value: &str);

    /// Set literal content, replacing earlier content.
    fn set_content(&mut self, element: Self::Handle, content: &str);

    /// Append a detached `child` as the last child of `parent`.
    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle);

    /// Consume the sink once building is done.
    fn finish(self) -> Self::Output;
}

impl TreeSink for DomTree {
    type Handle = NodeId;
    type Output = Self;

    fn fragment(&self) -> NodeId {
        self.root()
    }

    fn create_element(&mut self, tag_name: &str) -> NodeId {
        Self::create_element(self, ElementData::new(tag_name))
    }

    fn set_class_name(&mut self, element: NodeId, class_name: &str) {
        self.set_attribute(element, "class", class_name);
    }

    fn set_id(&mut self, element: NodeId, id: &str) {
        self.set_attribute(element, "id", id);
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) {
        if let Some(data) = self.as_element_mut(element) {
            data.set_attribute(name, value);
        }
    }

    fn set_content(&mut self, element: NodeId, content: &str) {
        if let Some(data) = self.as_element_mut(element) {
            data.content = Some(content.to_string());
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        Self::append_child(self, parent, child);
    }

    fn finish(self) -> Self {
        self
    }
}
