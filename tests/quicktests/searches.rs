use bst_search::{BinarySearchTree, SearchError};

use crate::Op;

const SAMPLE: [i32; 11] = [4, 12, 3, 10, 9, 8, 11, 10, 5, 1, 2];

/// Renders a search result the way the demo prints it.
fn describe(tree: &BinarySearchTree<i32>, search: &str, target: i32) -> Option<String> {
    let result = match search {
        "bfs" => tree.breadth_first_search(&target),
        "dfs" => tree.depth_first_search(&target),
        "rec" => tree.depth_first_search_recursive(&target),
        _ => unreachable!(),
    };
    result.unwrap().map(|node| node.to_string())
}

#[test]
fn sample_breadth_first() {
    let tree = BinarySearchTree::build_tree(SAMPLE);

    assert_eq!(
        describe(&tree, "bfs", 11).as_deref(),
        Some("This node has a value of 11 with parent value of 10")
    );
    assert_eq!(
        describe(&tree, "bfs", 4).as_deref(),
        Some("This node has a value of 4 with parent value of none")
    );
    assert_eq!(describe(&tree, "bfs", 20), None);
}

#[test]
fn sample_depth_first() {
    let tree = BinarySearchTree::build_tree(SAMPLE);

    assert_eq!(
        describe(&tree, "dfs", 9).as_deref(),
        Some("This node has a value of 9 with parent value of 10")
    );
    assert_eq!(
        describe(&tree, "dfs", 5).as_deref(),
        Some("This node has a value of 5 with parent value of 8")
    );
    assert_eq!(describe(&tree, "dfs", 20), None);
}

#[test]
fn sample_depth_first_recursive() {
    let tree = BinarySearchTree::build_tree(SAMPLE);

    assert_eq!(
        describe(&tree, "rec", 5).as_deref(),
        Some("This node has a value of 5 with parent value of 8")
    );
    assert_eq!(
        describe(&tree, "rec", 11).as_deref(),
        Some("This node has a value of 11 with parent value of 10")
    );
    assert_eq!(
        describe(&tree, "rec", 2).as_deref(),
        Some("This node has a value of 2 with parent value of 1")
    );
    assert_eq!(describe(&tree, "rec", 30), None);
}

#[test]
fn empty_tree_is_an_error_not_a_miss() {
    let tree: BinarySearchTree<i32> = BinarySearchTree::build_tree(Vec::new());

    assert_eq!(tree.breadth_first_search(&1), Err(SearchError::EmptyTree));
    assert_eq!(tree.depth_first_search(&1), Err(SearchError::EmptyTree));
    assert_eq!(
        tree.depth_first_search_recursive(&1),
        Err(SearchError::EmptyTree)
    );
}

#[quickcheck]
fn searches_are_idempotent(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut targets = Vec::new();
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x);
            }
            Op::Search(x) => targets.push(x),
        }
    }

    targets.iter().all(|t| {
        tree.breadth_first_search(t) == tree.breadth_first_search(t)
            && tree.depth_first_search(t) == tree.depth_first_search(t)
            && tree.depth_first_search_recursive(t) == tree.depth_first_search_recursive(t)
    })
}

#[quickcheck]
fn found_nodes_hold_the_target(xs: Vec<i8>, target: i8) -> bool {
    let tree = BinarySearchTree::build_tree(xs.clone());
    let present = xs.contains(&target);

    match tree.depth_first_search(&target) {
        Err(SearchError::EmptyTree) => xs.is_empty(),
        Err(_) => false,
        Ok(None) => !present,
        Ok(Some(node)) => present && *node.value() == target,
    }
}
