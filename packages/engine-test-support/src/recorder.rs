//! Collects values pushed through a callback, for asserting on observer
//! notifications without depending on the engine's types.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
pub struct Recorder<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T: Clone + 'static> Recorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback that appends a clone of every value it is given.
    pub fn sink(&self) -> impl FnMut(&T) + 'static {
        let items = Rc::clone(&self.items);
        move |item: &T| items.borrow_mut().push(item.clone())
    }

    pub fn items(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Return everything recorded so far and start over.
    pub fn drain(&self) -> Vec<T> {
        std::mem::take(&mut *self.items.borrow_mut())
    }
}
