use crate::splay_tree::node::Node;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

// Top-down splay. `probe` tells where the target lies relative to a node: `Less` and `Greater`
// continue the search into the left and right subtree, `Equal` stops it. The last node visited
// becomes the root.
fn splay<T, F>(node: &mut Box<Node<T>>, probe: F)
where
    F: Fn(&Node<T>) -> Ordering,
{
    // Nodes known to be less than the target, linked through their right children.
    let mut left_tree: Tree<T> = None;
    // Nodes known to be greater than the target, linked through their left children.
    let mut right_tree: Tree<T> = None;
    {
        let mut left_tail = &mut left_tree;
        let mut right_tail = &mut right_tree;
        loop {
            match probe(&**node) {
                Ordering::Less => {
                    let should_rotate = match node.left {
                        Some(ref child) => probe(&**child) == Ordering::Less,
                        None => break,
                    };
                    if should_rotate {
                        node.rotate_right();
                    }

                    let child = match node.left.take() {
                        Some(child) => child,
                        None => break,
                    };
                    *right_tail = Some(mem::replace(node, child));
                    right_tail = &mut { right_tail }
                        .as_mut()
                        .expect("Expected linked node to be `Some`.")
                        .left;
                },
                Ordering::Greater => {
                    let should_rotate = match node.right {
                        Some(ref child) => probe(&**child) == Ordering::Greater,
                        None => break,
                    };
                    if should_rotate {
                        node.rotate_left();
                    }

                    let child = match node.right.take() {
                        Some(child) => child,
                        None => break,
                    };
                    *left_tail = Some(mem::replace(node, child));
                    left_tail = &mut { left_tail }
                        .as_mut()
                        .expect("Expected linked node to be `Some`.")
                        .right;
                },
                Ordering::Equal => break,
            }
        }

        *left_tail = node.left.take();
        *right_tail = node.right.take();
    }

    node.left = left_tree;
    node.right = right_tree;
}

fn splay_key<T, V>(node: &mut Box<Node<T>>, key: &V)
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    splay(node, |other| key.cmp(other.key.borrow()));
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    match tree {
        Some(node) => {
            splay_key(node, &key);
            let mut new_node = Node::new(key);
            match new_node.key.cmp(&node.key) {
                Ordering::Less => {
                    new_node.left = node.left.take();
                    mem::swap(&mut **node, &mut new_node);
                    node.right = Some(Box::new(new_node));
                    true
                },
                Ordering::Greater => {
                    new_node.right = node.right.take();
                    mem::swap(&mut **node, &mut new_node);
                    node.left = Some(Box::new(new_node));
                    true
                },
                Ordering::Equal => false,
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            true
        },
    }
}

pub fn remove<T, V>(tree: &mut Tree<T>, key: &V) -> Option<T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match tree {
        Some(node) => {
            splay_key(node, key);
            if key.cmp(node.key.borrow()) != Ordering::Equal {
                return None;
            }
        },
        None => return None,
    };

    let Node { key: removed, left, right } = *tree.take()?;
    *tree = match (left, right) {
        (Some(mut left_child), right) => {
            // Every key on the left is smaller, so this brings the predecessor up with an empty
            // right child.
            splay_key(&mut left_child, key);
            left_child.right = right;
            Some(left_child)
        },
        (None, Some(mut right_child)) => {
            // The successor ends up at the root.
            splay_key(&mut right_child, key);
            Some(right_child)
        },
        (None, None) => None,
    };
    Some(removed)
}

pub fn get<'a, T, V>(tree: &'a mut Tree<T>, key: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let node = tree.as_mut()?;
    splay_key(node, key);
    match key.cmp(node.key.borrow()) {
        Ordering::Equal => Some(&node.key),
        _ => None,
    }
}

// The probe answers exactly as a comparison against the minimum key would, so the walk down the
// left spine and the splay happen in the same pass.
pub fn min<T>(tree: &mut Tree<T>) -> Option<&T> {
    let node = tree.as_mut()?;
    splay(node, |other| match other.left {
        Some(_) => Ordering::Less,
        None => Ordering::Equal,
    });
    Some(&node.key)
}

pub fn max<T>(tree: &mut Tree<T>) -> Option<&T> {
    let node = tree.as_mut()?;
    splay(node, |other| match other.right {
        Some(_) => Ordering::Greater,
        None => Ordering::Equal,
    });
    Some(&node.key)
}

pub fn root<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| &node.key)
}

/// Frees every node without recursing, by rotating left children up until the current node has
/// none and can be dropped on its own.
pub fn clear<T>(tree: &mut Tree<T>) {
    let mut curr = tree.take();
    while let Some(mut node) = curr {
        curr = match node.left.take() {
            Some(mut left) => {
                node.left = left.right.take();
                left.right = Some(node);
                Some(left)
            },
            None => node.right.take(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::{clear, get, insert, max, min, remove, root, Tree};

    fn build(keys: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for key in keys {
            insert(&mut tree, *key);
        }
        tree
    }

    fn pre_order(tree: &Tree<u32>, keys: &mut Vec<u32>) {
        if let Some(node) = tree {
            keys.push(node.key);
            pre_order(&node.left, keys);
            pre_order(&node.right, keys);
        }
    }

    fn shape(tree: &Tree<u32>) -> Vec<u32> {
        let mut keys = Vec::new();
        pre_order(tree, &mut keys);
        keys
    }

    #[test]
    fn test_ascending_inserts_form_left_path() {
        let tree = build(&[1, 2, 3, 4, 5]);
        assert_eq!(shape(&tree), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_splay_zig_zig() {
        let mut tree = build(&[1, 2, 3, 4, 5]);
        assert_eq!(get(&mut tree, &1), Some(&1));
        // 1 at the root, 4 on its right holding 2 (with 3 below it) and 5.
        assert_eq!(shape(&tree), vec![1, 4, 2, 3, 5]);
    }

    #[test]
    fn test_splay_miss_ends_at_neighbour() {
        let mut tree = build(&[10, 20, 30, 40]);
        assert_eq!(get(&mut tree, &25), None);
        let root = *root(&tree).expect("Expected non-empty tree.");
        assert!(root == 20 || root == 30);
    }

    #[test]
    fn test_min_max_match_key_splay() {
        let keys = [7, 3, 11, 1, 5, 9, 13, 0, 2, 4, 6, 8, 10, 12, 14];

        let mut by_min = build(&keys);
        let mut by_key = build(&keys);
        assert_eq!(min(&mut by_min), Some(&0));
        assert_eq!(get(&mut by_key, &0), Some(&0));
        assert_eq!(shape(&by_min), shape(&by_key));

        let mut by_max = build(&keys);
        let mut by_key = build(&keys);
        assert_eq!(max(&mut by_max), Some(&14));
        assert_eq!(get(&mut by_key, &14), Some(&14));
        assert_eq!(shape(&by_max), shape(&by_key));
    }

    #[test]
    fn test_remove_root_with_left_subtree() {
        let mut tree = build(&[1, 2, 3, 4, 5]);
        assert_eq!(remove(&mut tree, &3), Some(3));
        assert_eq!(root(&tree), Some(&2));
        let node = tree.as_ref().expect("Expected non-empty tree.");
        assert_eq!(node.right.as_ref().map(|node| node.key), Some(4));
    }

    #[test]
    fn test_remove_minimum_promotes_successor() {
        let mut tree = build(&[1, 2, 3]);
        assert_eq!(min(&mut tree), Some(&1));
        assert_eq!(remove(&mut tree, &1), Some(1));
        assert_eq!(shape(&tree), vec![2, 3]);
    }

    #[test]
    fn test_remove_without_left_subtree_splays_successor() {
        // 1 at the root with 4 on its right holding 2, 3 and 5.
        let mut tree = build(&[1, 2, 3, 4, 5]);
        get(&mut tree, &1);
        assert_eq!(remove(&mut tree, &1), Some(1));
        assert_eq!(root(&tree), Some(&2));
        assert_eq!(shape(&tree), vec![2, 4, 3, 5]);
    }

    #[test]
    fn test_remove_empty() {
        let mut tree: Tree<u32> = None;
        assert_eq!(remove(&mut tree, &1), None);
        assert!(tree.is_none());
    }

    #[test]
    fn test_clear_deep_tree() {
        let mut tree = None;
        for key in 0..200_000u32 {
            insert(&mut tree, key);
        }
        clear(&mut tree);
        assert!(tree.is_none());
    }
}
