//! Breadth-first and depth-first searches over a [`BinarySearchTree`].
//!
//! None of these use the ordering of the tree to prune the search: they visit nodes in a fixed
//! traversal order and compare each one against the target with `==`. When several nodes hold the
//! target, the first one in traversal order is returned.
//!
//! Every search comes in two flavours. The plain one starts at the root and fails with
//! [`SearchError::EmptyTree`] when there is no root. The `_from` one starts at a given node and
//! fails with [`SearchError::UnknownNode`] when the id is not part of the tree.

use std::collections::VecDeque;

use crate::error::SearchError;
use crate::node::{NodeId, NodeRef};
use crate::tree::BinarySearchTree;

type SearchResult<'a, T> = Result<Option<NodeRef<'a, T>>, SearchError>;

impl<T> BinarySearchTree<T>
where
    T: PartialEq,
{
    /// Searches level by level starting from the root, left before right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::{BinarySearchTree, SearchError};
    ///
    /// let tree = BinarySearchTree::build_tree(vec![4, 12, 3, 10, 9, 8, 11, 10, 5, 1, 2]);
    ///
    /// let eleven = tree.breadth_first_search(&11).unwrap().unwrap();
    /// assert_eq!(eleven.parent().map(|p| *p.value()), Some(10));
    ///
    /// assert!(tree.breadth_first_search(&20).unwrap().is_none());
    ///
    /// let empty = BinarySearchTree::<i32>::new();
    /// assert_eq!(empty.breadth_first_search(&1), Err(SearchError::EmptyTree));
    /// ```
    pub fn breadth_first_search(&self, target: &T) -> SearchResult<'_, T> {
        let root = self.root().ok_or(SearchError::EmptyTree)?;
        Ok(breadth_first(root, target))
    }

    /// [`breadth_first_search`](Self::breadth_first_search) over the subtree rooted at `start`.
    pub fn breadth_first_search_from(&self, start: NodeId, target: &T) -> SearchResult<'_, T> {
        let start = self.get(start).ok_or(SearchError::UnknownNode(start))?;
        Ok(breadth_first(start, target))
    }

    /// Searches depth first (pre-order: node, left subtree, right subtree) starting from the
    /// root, using an explicit stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::build_tree(vec![4, 12, 3, 10, 9, 8, 11, 10, 5, 1, 2]);
    ///
    /// let five = tree.depth_first_search(&5).unwrap().unwrap();
    /// assert_eq!(
    ///     five.to_string(),
    ///     "This node has a value of 5 with parent value of 8"
    /// );
    /// ```
    pub fn depth_first_search(&self, target: &T) -> SearchResult<'_, T> {
        let root = self.root().ok_or(SearchError::EmptyTree)?;
        Ok(self.depth_first(root, target))
    }

    /// [`depth_first_search`](Self::depth_first_search) over the subtree rooted at `start`.
    pub fn depth_first_search_from(&self, start: NodeId, target: &T) -> SearchResult<'_, T> {
        let start = self.get(start).ok_or(SearchError::UnknownNode(start))?;
        Ok(self.depth_first(start, target))
    }

    /// The recursive counterpart of [`depth_first_search`](Self::depth_first_search). Both visit
    /// nodes in the same order and so return the same node. Recursion depth is the height of the
    /// tree.
    ///
    /// A match in a left subtree is returned even when nothing to its right matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_search::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::build_tree(vec![4, 3, 1]);
    ///
    /// let one = tree.depth_first_search_recursive(&1).unwrap().unwrap();
    /// assert_eq!(one.parent().map(|p| *p.value()), Some(3));
    /// ```
    pub fn depth_first_search_recursive(&self, target: &T) -> SearchResult<'_, T> {
        let root = self.root().ok_or(SearchError::EmptyTree)?;
        Ok(depth_first_recursive(root, target))
    }

    /// [`depth_first_search_recursive`](Self::depth_first_search_recursive) over the subtree
    /// rooted at `start`.
    pub fn depth_first_search_recursive_from(
        &self,
        start: NodeId,
        target: &T,
    ) -> SearchResult<'_, T> {
        let start = self.get(start).ok_or(SearchError::UnknownNode(start))?;
        Ok(depth_first_recursive(start, target))
    }

    fn depth_first<'a>(&'a self, start: NodeRef<'a, T>, target: &T) -> Option<NodeRef<'a, T>> {
        // Visited by identity, so equal values in different nodes are different nodes.
        let mut visited = vec![false; self.len()];
        visited[start.id().index()] = true;
        let mut stack = vec![start];

        while let Some(&node) = stack.last() {
            if node.value() == target {
                return Some(node);
            }

            // Left is tried first; the right child is picked up when we come back to this node.
            let next = [node.left(), node.right()]
                .iter()
                .flatten()
                .copied()
                .find(|child| !visited[child.id().index()]);

            match next {
                Some(child) => {
                    visited[child.id().index()] = true;
                    stack.push(child);
                }
                None => {
                    stack.pop();
                }
            }
        }

        None
    }
}

fn breadth_first<'a, T>(start: NodeRef<'a, T>, target: &T) -> Option<NodeRef<'a, T>>
where
    T: PartialEq,
{
    if start.value() == target {
        return Some(start);
    }

    // Children are compared as soon as their parent is expanded, so a match returns before it is
    // ever queued.
    let mut queue = VecDeque::new();
    let mut current = Some(start);
    while let Some(node) = current {
        for child in node.left().into_iter().chain(node.right()) {
            if child.value() == target {
                return Some(child);
            }
            queue.push_back(child);
        }
        current = queue.pop_front();
    }

    None
}

fn depth_first_recursive<'a, T>(node: NodeRef<'a, T>, target: &T) -> Option<NodeRef<'a, T>>
where
    T: PartialEq,
{
    if node.value() == target {
        return Some(node);
    }

    node.left()
        .and_then(|left| depth_first_recursive(left, target))
        .or_else(|| {
            node.right()
                .and_then(|right| depth_first_recursive(right, target))
        })
}
