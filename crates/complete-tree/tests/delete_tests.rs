use complete_tree::{BinaryTree, TraversalOrder};
use pretty_assertions::assert_eq;

fn sorted<T: Ord + Clone>(tree: &BinaryTree<T>) -> Vec<T> {
    let mut values: Vec<T> = tree.iter(TraversalOrder::Pre).cloned().collect();
    values.sort();
    values
}

fn assert_dense<T: Clone + std::fmt::Debug>(tree: &BinaryTree<T>) {
    let flat = tree
        .to_flat_array(tree.node_count() + 1)
        .expect("tree should be complete after delete");
    assert_eq!(flat.span(), tree.node_count());
    assert!(flat.is_dense());
    assert!(!flat.is_truncated());
}

#[test]
fn test_delete_all_duplicates() {
    let values = "abacabadabacaba";
    let mut tree = BinaryTree::from_traversal(values.chars(), TraversalOrder::Pre);
    let occurrences = values.chars().filter(|&c| c == 'a').count();

    let removed = tree.delete(&'a');

    assert_eq!(removed, occurrences);
    assert_eq!(tree.node_count(), values.len() - occurrences);
    assert!(!tree.contains(&'a'));
    assert_dense(&tree);

    // A second delete of the same value changes nothing
    let before = tree.clone();
    assert_eq!(tree.delete(&'a'), 0);
    assert_eq!(tree, before);
}

#[test]
fn test_delete_keeps_other_values() {
    let mut tree = BinaryTree::from_traversal([3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5], TraversalOrder::In);

    assert_eq!(tree.delete(&5), 3);
    assert_eq!(sorted(&tree), vec![1, 1, 2, 3, 3, 4, 6, 9]);
    assert_dense(&tree);

    assert_eq!(tree.delete(&1), 2);
    assert_eq!(sorted(&tree), vec![2, 3, 3, 4, 6, 9]);
    assert_dense(&tree);
}

#[test]
fn test_delete_root_of_small_trees() {
    let mut tree = BinaryTree::from_level_order(['x']);
    assert_eq!(tree.delete(&'x'), 1);
    assert!(tree.is_empty());

    let mut tree = BinaryTree::from_level_order(['x', 'y']);
    assert_eq!(tree.delete(&'x'), 1);
    assert_eq!(tree.levels(), vec![vec![&'y']]);
}

#[test]
fn test_delete_from_empty_tree() {
    let mut tree = BinaryTree::<u32>::new();
    assert_eq!(tree.delete(&4), 0);
    assert!(tree.is_empty());
}

#[test]
fn test_insert_after_delete_stays_complete() {
    let mut tree: BinaryTree<u32> = (1..=12).collect();
    tree.delete(&2);
    tree.delete(&7);
    tree.insert(20);
    tree.insert(21);

    assert_eq!(tree.node_count(), 12);
    assert_dense(&tree);
}

#[test]
fn test_delete_relinearizes_preorder() {
    //        a                a                a
    //      /   \            /   \            /   \
    //     b     c    ->    e     c    ->    e     c
    //    / \   /          /     /          / \
    //   d   e f          d     f          d   f
    let mut tree = BinaryTree::from_level_order("abcdef".chars());
    assert_eq!(tree.delete(&'b'), 1);
    assert_eq!(
        tree.levels(),
        vec![vec![&'a'], vec![&'e', &'c'], vec![&'d', &'f']]
    );
}

#[test]
fn test_delete_long_run_of_matching_successors() {
    // A perfect tree of 2^13 - 1 nodes: the root and its whole right half
    // hold the deleted value, the left half does not
    let half = (1 << 12) - 1;
    let values: Vec<u8> = std::iter::repeat(1)
        .take(half)
        .chain(std::iter::repeat(0).take(half + 1))
        .collect();
    let mut tree = BinaryTree::from_traversal(values, TraversalOrder::In);
    assert_eq!(tree.root().map(|root| *root.value()), Some(0));

    assert_eq!(tree.delete(&0), half + 1);
    assert_eq!(tree.node_count(), half);
    assert!(tree.iter(TraversalOrder::Pre).all(|&value| value == 1));
    assert_dense(&tree);
}
