use std::rc::Rc;

enum Link<T> {
    Empty,
    Cons(T, Rc<Link<T>>),
}

/// Persistent cons list: `push` shares the tail, so older copies are never
/// disturbed by newer ones.
pub struct List<T> {
    head: Rc<Link<T>>,
}

impl<T> List<T> {
    #[must_use]
    pub fn push(&self, item: T) -> Self {
        let head = Rc::new(Link::Cons(item, self.head.clone()));
        Self { head }
    }

    pub fn is_empty(&self) -> bool {
        matches!(*self.head, Link::Empty)
    }

    /// Most recently pushed item first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut current = &self.head;
        std::iter::from_fn(move || {
            if let Link::Cons(item, next) = &**current {
                current = next;
                Some(item)
            } else {
                None
            }
        })
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.head, &other.head)
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        let head = self.head.clone();
        Self { head }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        let head = Rc::new(Link::Empty);
        Self { head }
    }
}
