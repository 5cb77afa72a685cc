//! Generic markup tree

use indexmap::IndexMap;

/// One element in the generic markup tree: tag name, raw attribute pairs in
/// source order, and nested elements in document order. Text content is not
/// represented; the tree builder drops it.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }
}
