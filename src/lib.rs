//! This crate exposes a Binary Search Tree (BST) and three ways of searching it, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure built by inserting values one at a time. Each value
//! is stored in a `Node` and every `Node` has at most two children. The invariants kept here are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a value less than or
//!    equal to its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a value greater
//!    than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes". The one
//! > `Node` without a parent is the "root node".
//!
//! Because equal values always go left, inserting a duplicate never fails: it ends up somewhere in
//! the left subtree of the first `Node` holding that value.
//!
//! ## Searching
//!
//! The searches deliberately ignore the ordering and walk the whole tree, comparing each `Node`
//! with the target:
//!
//! - [`breadth_first_search`][BinarySearchTree::breadth_first_search] visits the tree level by
//!   level using a queue.
//! - [`depth_first_search`][BinarySearchTree::depth_first_search] goes as deep as it can down the
//!   left before backtracking, using an explicit stack.
//! - [`depth_first_search_recursive`][BinarySearchTree::depth_first_search_recursive] does the
//!   same walk using recursion.
//!
//! # Examples
//!
//! ```
//! use bst_search::BinarySearchTree;
//!
//! //                 4
//! //           3          12
//! //        1          10
//! //          2     9      11
//! //              8  10
//! //            5
//! let tree = BinarySearchTree::build_tree(vec![4, 12, 3, 10, 9, 8, 11, 10, 5, 1, 2]);
//!
//! let found = tree.breadth_first_search(&11).unwrap().unwrap();
//! assert_eq!(found.to_string(), "This node has a value of 11 with parent value of 10");
//!
//! let found = tree.depth_first_search(&9).unwrap().unwrap();
//! assert_eq!(found.to_string(), "This node has a value of 9 with parent value of 10");
//!
//! // Not finding anything isn't an error.
//! assert!(tree.depth_first_search_recursive(&30).unwrap().is_none());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod search;
mod tree;

pub use error::SearchError;
pub use node::{Node, NodeId, NodeRef};
pub use tree::{BinarySearchTree, InOrder};
