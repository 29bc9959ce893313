use std::fmt;

/// Position of a node in a [`DomTree`], counted in pre-order from the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("#{}", self.0))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    node_type: NodeType,
    children: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeType {
    Element {
        tag_name: String,
        attributes: Vec<Attribute>,
    },
    Text(String),
    Comment(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Default)]
pub struct DomTree {
    root: Option<Node>,
}

/// One step of a pre-order walk over a [`DomTree`].
pub struct WalkEntry<'a> {
    pub id: NodeId,
    /// Nearest ancestor `<form>` element, if any.
    pub form: Option<NodeId>,
    pub node: &'a Node,
}

impl Node {
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            children: Vec::new(),
        }
    }

    pub fn element(tag_name: &str) -> Self {
        Self::new(NodeType::Element {
            tag_name: tag_name.to_ascii_lowercase(),
            attributes: Vec::new(),
        })
    }

    pub fn text(text: &str) -> Self {
        Self::new(NodeType::Text(text.to_string()))
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        if let NodeType::Element { attributes, .. } = &mut self.node_type {
            attributes.push(Attribute {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn tag_name(&self) -> Option<&str> {
        match &self.node_type {
            NodeType::Element { tag_name, .. } => Some(tag_name),
            _ => None,
        }
    }

    pub fn is_element(&self, tag: &str) -> bool {
        self.tag_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        match &self.node_type {
            NodeType::Element { attributes, .. } => attributes
                .iter()
                .find(|attr| attr.name.eq_ignore_ascii_case(name))
                .map(|attr| attr.value.as_str()),
            _ => None,
        }
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }
}

impl DomTree {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn set_root(&mut self, node: Node) {
        self.root = Some(node);
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Visits every node in document order, numbering them as it goes.
    pub fn walk(&self) -> Vec<WalkEntry<'_>> {
        let mut entries = Vec::new();
        let Some(root) = self.root.as_ref() else {
            return entries;
        };

        let mut stack: Vec<(&Node, Option<NodeId>)> = vec![(root, None)];
        while let Some((node, form)) = stack.pop() {
            let id = NodeId(entries.len());
            entries.push(WalkEntry { id, form, node });

            let child_form = if node.is_element("form") { Some(id) } else { form };
            // Reversed so the first child is popped next.
            for child in node.children().iter().rev() {
                stack.push((child, child_form));
            }
        }
        entries
    }
}
