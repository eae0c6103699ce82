use bst_search::{BinarySearchTree, NodeRef};

use crate::Op;

/// Collects every node of the tree, root first.
fn all_nodes<T>(tree: &BinarySearchTree<T>) -> Vec<NodeRef<'_, T>> {
    let mut nodes = Vec::new();
    let mut stack: Vec<_> = tree.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        nodes.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }
    nodes
}

/// Collects every value in the subtree rooted at `node`.
fn subtree_values<'a, T>(node: Option<NodeRef<'a, T>>) -> Vec<&'a T> {
    let mut values = Vec::new();
    let mut stack: Vec<_> = node.into_iter().collect();
    while let Some(node) = stack.pop() {
        values.push(node.value());
        stack.extend(node.left());
        stack.extend(node.right());
    }
    values
}

fn inserts(ops: &[Op<i8>]) -> Vec<i8> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Insert(x) => Some(*x),
            Op::Search(_) => None,
        })
        .collect()
}

#[quickcheck]
fn left_subtree_le_right_subtree_gt(ops: Vec<Op<i8>>) -> bool {
    let tree = BinarySearchTree::build_tree(inserts(&ops));

    all_nodes(&tree).into_iter().all(|node| {
        subtree_values(node.left()).iter().all(|v| *v <= node.value())
            && subtree_values(node.right()).iter().all(|v| *v > node.value())
    })
}

#[quickcheck]
fn parent_links_match_child_links(xs: Vec<i8>) -> bool {
    let tree = BinarySearchTree::build_tree(xs);

    all_nodes(&tree).into_iter().all(|node| match node.parent() {
        None => tree.root() == Some(node),
        Some(parent) => parent.left() == Some(node) || parent.right() == Some(node),
    })
}

#[quickcheck]
fn in_order_is_sorted_input(xs: Vec<i8>) -> bool {
    let tree = BinarySearchTree::build_tree(xs.clone());
    let mut sorted = xs;
    sorted.sort_unstable();

    tree.len() == sorted.len() && tree.in_order().copied().eq(sorted)
}

#[quickcheck]
fn duplicates_descend_left(xs: Vec<i8>, dup: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree = BinarySearchTree::build_tree(xs.clone());
    let value = xs[dup % xs.len()];
    let id = tree.insert(value);

    // Walk up from the new node: the nearest ancestor holding `value` must have the new node in
    // its left subtree.
    let mut child = tree.get(id).unwrap();
    while let Some(parent) = child.parent() {
        if *parent.value() == value {
            return parent.left() == Some(child);
        }
        child = parent;
    }
    false
}
