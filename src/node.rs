//! The vertices of a [`BinarySearchTree`](crate::BinarySearchTree).
//!
//! Nodes live in an arena owned by the tree and refer to each other by [`NodeId`]. A node owns
//! nothing: its children and its parent are plain indices, so there is no ownership cycle between
//! a parent and its children.

use std::fmt;

use crate::tree::BinarySearchTree;

/// Stable handle to a node inside the tree that created it. Ids are handed out in insertion order
/// and are never invalidated because nodes are never removed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The position of this node in its tree's arena. The root (if any) is always `0`.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single vertex of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

impl<T> Node<T> {
    /// A new leaf attached under `parent` (or a root when `parent` is `None`).
    pub(crate) fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child. Every value in the left subtree is `<=` this node's value.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The right child. Every value in the right subtree is `>` this node's value.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// The node this one was attached under. `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn set_left(&mut self, child: NodeId) {
        debug_assert!(self.left.is_none(), "left slot already occupied");
        self.left = Some(child);
    }

    pub(crate) fn set_right(&mut self, child: NodeId) {
        debug_assert!(self.right.is_none(), "right slot already occupied");
        self.right = Some(child);
    }
}

/// A borrowed view of a node together with the tree it lives in, so that children and the parent
/// can be followed without going back through the tree.
///
/// # Examples
///
/// ```
/// use bst_search::BinarySearchTree;
///
/// let tree = BinarySearchTree::build_tree(vec![4, 12, 3]);
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.value(), &4);
/// assert_eq!(root.left().map(|n| *n.value()), Some(3));
/// assert_eq!(root.right().unwrap().parent(), Some(root));
/// assert_eq!(
///     root.to_string(),
///     "This node has a value of 4 with parent value of none"
/// );
/// ```
pub struct NodeRef<'a, T> {
    tree: &'a BinarySearchTree<T>,
    id: NodeId,
}

// Manual impls: deriving would require `T: Clone`/`T: Copy` even though only a reference is held.
impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    /// Callers must only pass ids that belong to `tree`.
    pub(crate) fn new(tree: &'a BinarySearchTree<T>, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// The id of this node within its tree.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The underlying node.
    pub fn node(&self) -> &'a Node<T> {
        self.tree.node(self.id)
    }

    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        self.node().value()
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<Self> {
        self.node().left().map(|id| Self::new(self.tree, id))
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<Self> {
        self.node().right().map(|id| Self::new(self.tree, id))
    }

    /// The parent, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.node().parent().map(|id| Self::new(self.tree, id))
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node().left().is_none() && self.node().right().is_none()
    }
}

/// Two `NodeRef`s are equal when they are the same node of the same tree. Values are not
/// compared: duplicates are distinct nodes.
impl<'a, T> PartialEq for NodeRef<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}
impl<'a, T> Eq for NodeRef<'a, T> {}

impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .field("parent", &self.parent().map(|p| p.value()))
            .finish()
    }
}

impl<'a, T> fmt::Display for NodeRef<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "This node has a value of {} with parent value of ", self.value())?;
        match self.parent() {
            Some(parent) => write!(f, "{}", parent.value()),
            None => f.write_str("none"),
        }
    }
}
