//! Item lists the navigation controller reads from.
//!
//! The controller never owns or caches the items. It asks the list for its
//! length and for the item at an index each time a key arrives, so edits made
//! by the owner are visible on the next event.

use std::cell::RefCell;
use std::rc::Rc;

/// Read-only view over an ordered sequence of items.
pub trait ItemList {
    type Item: Clone;

    /// Current number of items.
    fn len(&self) -> usize;

    /// Item at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> ItemList for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

/// A list owned by the host and shared with a controller.
///
/// Clones are handles onto the same storage.
#[derive(Debug)]
pub struct SharedItems<T> {
    inner: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for SharedItems<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedItems<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> SharedItems<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(items)),
        }
    }

    pub fn push(&self, item: T) {
        self.inner.borrow_mut().push(item);
    }

    /// Insert at `index`, appending when `index` is past the end.
    pub fn insert(&self, index: usize, item: T) {
        let mut items = self.inner.borrow_mut();
        let index = index.min(items.len());
        items.insert(index, item);
    }

    pub fn remove(&self, index: usize) -> Option<T> {
        let mut items = self.inner.borrow_mut();
        (index < items.len()).then(|| items.remove(index))
    }

    pub fn replace(&self, items: Vec<T>) {
        *self.inner.borrow_mut() = items;
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    /// Run `f` against the current contents.
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.inner.borrow())
    }
}

impl<T: Clone> ItemList for SharedItems<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.inner.borrow().as_slice().get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_storage() {
        let owner = SharedItems::new(vec!["a", "b"]);
        let view = owner.clone();

        owner.push("c");
        assert_eq!(view.len(), 3);
        assert_eq!(view.get(2), Some("c"));

        owner.remove(0);
        assert_eq!(view.get(0), Some("b"));
    }

    #[test]
    fn test_shared_get_returns_owned_clone() {
        let items = SharedItems::new(vec!["a.txt".to_string(), "b.txt".to_string()]);
        let item: Option<String> = ItemList::get(&items, 1);
        assert_eq!(item.as_deref(), Some("b.txt"));
        assert_eq!(ItemList::get(&items, 2), None);

        items.replace(vec!["c.txt".to_string()]);
        assert_eq!(item.as_deref(), Some("b.txt"));
        assert_eq!(items.get(0).as_deref(), Some("c.txt"));
    }

    #[test]
    fn test_insert_past_end_appends() {
        let items = SharedItems::new(vec![1, 2]);
        items.insert(10, 3);
        assert_eq!(items.with(|s| s.to_vec()), vec![1, 2, 3]);

        items.insert(0, 0);
        assert_eq!(items.with(|s| s.to_vec()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let items = SharedItems::new(vec![1]);
        assert_eq!(items.remove(5), None);
        assert_eq!(items.remove(0), Some(1));
        assert!(items.is_empty());
    }

    #[test]
    fn test_replace_and_clear() {
        let items = SharedItems::new(vec![1, 2, 3]);
        items.replace(vec![9]);
        assert_eq!(items.len(), 1);
        items.clear();
        assert!(items.is_empty());
        assert_eq!(items.get(0), None);
    }

    #[test]
    fn test_vec_item_list() {
        let items = vec!["x", "y"];
        assert_eq!(ItemList::len(&items), 2);
        assert_eq!(ItemList::get(&items, 1), Some("y"));
        assert_eq!(ItemList::get(&items, 2), None);
    }
}
