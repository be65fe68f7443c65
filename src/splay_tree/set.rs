use crate::splay_tree::node::Node;
use crate::splay_tree::tree;
use log::{debug, trace};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a top-down splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed keys are quick to access again. Every lookup, including a failed one, splays the tree
/// so that the key it was looking for, or the neighbour where the search ended, becomes the root.
/// Because of this, the lookups `get`, `contains`, `min` and `max` all need a mutable reference.
///
/// # Examples
///
/// ```
/// use splay_set::SplaySet;
///
/// let mut set: SplaySet<u32> = vec![1, 0, 2, 4, 3].into_iter().collect();
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.max(), Some(&4));
/// assert!(set.contains(&2));
///
/// assert!(set.insert(5));
/// assert!(set.remove(&1));
/// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&0, &2, &3, &4, &5]);
/// ```
pub struct SplaySet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> SplaySet<T> {
    /// Constructs a new, empty `SplaySet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// ```
    pub fn new() -> Self {
        SplaySet { tree: None, len: 0 }
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty. Unlike the lookups, this does not splay the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the set, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
        self.len = 0;
    }

    /// Returns the key currently at the root of the tree without restructuring it. After any
    /// lookup or update this is the key that was accessed, or its predecessor or successor if it
    /// was not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplaySet;
    ///
    /// let mut set: SplaySet<u32> = vec![10, 20, 30].into_iter().collect();
    /// set.contains(&10);
    /// assert_eq!(set.root(), Some(&10));
    /// ```
    pub fn root(&self) -> Option<&T> {
        tree::root(&self.tree)
    }

    /// Returns the minimum key of the set and splays it to the root. Returns `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&mut self) -> Option<&T> {
        tree::min(&mut self.tree)
    }

    /// Returns the maximum key of the set and splays it to the root. Returns `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&mut self) -> Option<&T> {
        tree::max(&mut self.tree)
    }

    /// Returns an iterator over the set. The iterator yields keys in ascending order and leaves
    /// the shape of the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplaySetIter<T> {
        SplaySetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T> SplaySet<T>
where
    T: Ord,
{
    /// Inserts a key into the set. Returns `false` and leaves the set unchanged if an equal key is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
            trace!("inserted key, len = {}", self.len);
        } else {
            trace!("rejected duplicate key, len = {}", self.len);
        }
        inserted
    }

    /// Removes a key from the set. Returns `true` if the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes a key from the set and returns the stored key. Returns `None` if the key was not
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(String::from("a"));
    /// assert_eq!(set.take("a"), Some(String::from("a")));
    /// assert_eq!(set.take("a"), None);
    /// ```
    pub fn take<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let removed = tree::remove(&mut self.tree, key);
        match removed {
            Some(_) => {
                self.len -= 1;
                trace!("removed key, len = {}", self.len);
            },
            None => trace!("key to remove not found, len = {}", self.len),
        }
        removed
    }

    /// Returns a reference to the stored key equal to `key`, or `None` if there is no such key.
    /// The tree is splayed even when the key is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.get(&0), None);
    /// assert_eq!(set.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&mut self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&mut self.tree, key)
    }

    /// Checks if a key exists in the set. Like `get`, this splays the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&mut self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }
}

impl<T> Drop for SplaySet<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T> Default for SplaySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SplaySet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for SplaySet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = SplaySet::new();
        set.extend(iter);
        debug!("built splay set with {} keys", set.len);
        set
    }
}

impl<T> Extend<T> for SplaySet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> IntoIterator for SplaySet<T> {
    type IntoIter = SplaySetIntoIter<T>;
    type Item = T;

    fn into_iter(mut self) -> Self::IntoIter {
        let current = self.tree.take();
        self.len = 0;
        SplaySetIntoIter {
            current,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SplaySet<T>
where
    T: 'a,
{
    type IntoIter = SplaySetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `SplaySet<T>`.
///
/// This iterator traverses the keys of the set in ascending order and yields owned keys.
pub struct SplaySetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Box<Node<T>>>,
}

impl<T> Iterator for SplaySetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = *node;
            self.current = right;
            key
        })
    }
}

impl<T> Drop for SplaySetIntoIter<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.current);
        for mut node in self.stack.drain(..) {
            tree::clear(&mut node.right);
        }
    }
}

/// An iterator for `SplaySet<T>`.
///
/// This iterator traverses the keys of the set in ascending order and yields immutable
/// references. Pending ancestors are kept on an explicit stack, so deep trees do not recurse.
pub struct SplaySetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for SplaySetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = *self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.key
        })
    }
}
