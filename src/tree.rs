//! The tree itself: an arena of [`Node`]s plus the id of the root.
//!
//! # Examples
//!
//! ```
//! use bst_search::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::build_tree(vec![4, 12, 3]);
//! tree.insert(4);
//!
//! // Values equal to a node go to its left.
//! let root = tree.root().unwrap();
//! assert_eq!(root.left().unwrap().right().map(|n| *n.value()), Some(4));
//!
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![3, 4, 4, 12]);
//! ```

use std::fmt;
use std::io;
use std::iter::FromIterator;

use crate::node::{Node, NodeId, NodeRef};

/// An unbalanced Binary Search Tree. Values less than or equal to a node are stored in its left
/// subtree and greater values in its right subtree. There is no rebalancing and no deletion.
#[derive(Clone)]
pub struct BinarySearchTree<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generate a new, empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Builds a tree by inserting every value of `values`, in order, into an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::build_tree(vec![2, 1, 3]);
    /// assert_eq!(tree.len(), 3);
    ///
    /// let empty = BinarySearchTree::<i32>::build_tree(vec![]);
    /// assert!(empty.is_empty());
    /// ```
    pub fn build_tree<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }

    /// Inserts `value` as a new leaf and returns its id. Inserting a value equal to an existing
    /// one always succeeds: the duplicate is routed into the left subtree of the existing node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// let root = tree.insert(10);
    /// let nine = tree.insert(9);
    ///
    /// assert_eq!(tree.get(nine).unwrap().parent().map(|p| p.id()), Some(root));
    /// ```
    pub fn insert(&mut self, value: T) -> NodeId
    where
        T: Ord,
    {
        let id = NodeId(self.nodes.len());
        let mut current = match self.root {
            Some(root) => root,
            None => {
                self.nodes.push(Node::new(value, None));
                self.root = Some(id);
                return id;
            }
        };

        // Walk down until the slot we need is empty. Iterative so that sorted input (a tree with
        // one long branch) can't blow the stack.
        loop {
            let node = &self.nodes[current.0];
            let goes_left = value <= *node.value();
            let next = if goes_left { node.left() } else { node.right() };

            match next {
                Some(child) => current = child,
                None => {
                    self.nodes.push(Node::new(value, Some(current)));
                    let parent = &mut self.nodes[current.0];
                    if goes_left {
                        parent.set_left(id);
                    } else {
                        parent.set_right(id);
                    }
                    return id;
                }
            }
        }
    }

    /// The root node, or `None` if nothing has been inserted.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// Looks up a node by id. Returns `None` for ids past the end of this tree.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        if id.0 < self.nodes.len() {
            Some(NodeRef::new(self, id))
        } else {
            None
        }
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a lone root a height of 1.
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.iter().map(|&id| (id, 1)).collect();
        while let Some((id, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            let node = self.node(id);
            stack.extend(node.left().map(|child| (child, depth + 1)));
            stack.extend(node.right().map(|child| (child, depth + 1)));
        }
        tallest
    }

    /// Iterates over the stored values in non-decreasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::build_tree(vec![3, 1, 2, 1]);
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 1, 2, 3]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, T> {
        let mut iter = InOrder {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Writes one line per node, in pre-order (node, then left subtree, then right subtree),
    /// naming the node's value along with its children's and parent's values. Missing relatives
    /// are written as `none`. An empty tree writes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::build_tree(vec![4, 3]);
    /// let mut out = Vec::new();
    /// tree.display(&mut out).unwrap();
    ///
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "Node value: 4, left child: 3, right child: none, parent: none\n\
    ///      Node value: 3, left child: none, right child: none, parent: 4\n"
    /// );
    /// ```
    pub fn display<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: io::Write,
        T: fmt::Display,
    {
        let mut stack: Vec<NodeRef<'_, T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            writeln!(
                out,
                "Node value: {}, left child: {}, right child: {}, parent: {}",
                node.value(),
                OrNone(node.left()),
                OrNone(node.right()),
                OrNone(node.parent()),
            )?;
            // Right first so that the left subtree is written first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
        Ok(())
    }

    /// Panics on ids from another tree. Every `NodeId` stored inside the arena is valid.
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::build_tree(values)
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("root", &self.root)
            .field("nodes", &self.nodes)
            .finish()
    }
}

/// Formats a node's value or `none`.
struct OrNone<'a, T>(Option<NodeRef<'a, T>>);

impl<'a, T> fmt::Display for OrNone<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => fmt::Display::fmt(node.value(), f),
            None => f.write_str("none"),
        }
    }
}

/// Sorted iterator returned by [`BinarySearchTree::in_order`].
pub struct InOrder<'a, T> {
    tree: &'a BinarySearchTree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut next: Option<NodeId>) {
        while let Some(id) = next {
            self.stack.push(id);
            next = self.tree.node(id).left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.push_left_spine(node.right());
        Some(node.value())
    }
}
