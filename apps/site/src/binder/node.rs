//! Owned element tree produced by the binder and consumed by renderers.

/// A single element. Tags and classes are static because the binder emits a
/// fixed vocabulary of elements; text and attribute values carry the
/// document data.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: &'static str,
    pub class: Option<&'static str>,
    pub text: Option<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            text: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Outbound anchor: opens in a new tab, no opener leakage.
    pub fn anchor(href: impl Into<String>, label: impl Into<String>) -> Self {
        Node::new("a")
            .text(label)
            .attr("href", href)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    }
}
