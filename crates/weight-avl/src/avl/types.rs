use crate::types::Node;

/// Data for a node that does not exist yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<P> {
    pub weight: i64,
    pub id: Option<String>,
    pub payload: Option<P>,
}

impl<P> Entry<P> {
    pub fn new(weight: i64) -> Self {
        Self {
            weight,
            id: None,
            payload: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }

    pub(crate) fn into_node(self) -> Node<P> {
        Node::new(self.weight, self.id, self.payload)
    }
}

/// Outcome of an insert.
///
/// A rejected duplicate is its own variant so that it can never be confused
/// with an empty tree: the caller gets its root back untouched.
#[derive(Debug)]
#[must_use = "the tree root is moved into the insertion result"]
pub enum Insertion<P> {
    /// The entry was added; this is the new root.
    Inserted(Box<Node<P>>),
    /// The weight was already present and duplicates are disallowed.
    Rejected { root: Box<Node<P>>, entry: Entry<P> },
}

impl<P> Insertion<P> {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Insertion::Inserted(_))
    }

    /// Root of the tree after the call, whatever the outcome.
    pub fn into_root(self) -> Box<Node<P>> {
        match self {
            Insertion::Inserted(root) | Insertion::Rejected { root, .. } => root,
        }
    }
}
