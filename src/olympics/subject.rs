//! Multicast value channels for store state.
//!
//! A [`Subject`] holds a current value and an explicit observer list.
//! New subscribers immediately receive the current value, then every
//! subsequent replacement. Emission is synchronous with mutation, so
//! observers always see state transitions in the order they were
//! applied. Single-threaded by design: the store lives on the UI
//! thread and egui's update loop is the only mutator.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct SubjectInner<T> {
    current: T,
    next_id: u64,
    observers: Vec<(u64, Callback<T>)>,
}

/// A multicast observation point with replay-current-value semantics.
pub struct Subject<T> {
    inner: Rc<RefCell<SubjectInner<T>>>,
}

impl<T: Clone + 'static> Subject<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SubjectInner {
                current: initial,
                next_id: 0,
                observers: Vec::new(),
            })),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().current.clone()
    }

    /// Replaces the current value and notifies every observer.
    pub fn next(&self, value: T) {
        // Collect the observer list before invoking callbacks so a
        // callback may subscribe/unsubscribe without re-entrant borrows.
        let observers: Vec<Callback<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.current = value;
            inner.observers.iter().map(|(_, cb)| Rc::clone(cb)).collect()
        };

        let current = self.inner.borrow().current.clone();
        for callback in observers {
            (callback.borrow_mut())(&current);
        }
    }

    /// Registers an observer and replays the current value to it.
    ///
    /// The returned [`Subscription`] removes the observer when dropped
    /// or explicitly unsubscribed.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(RefCell::new(callback));

        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push((id, Rc::clone(&callback)));
            id
        };

        // Replay outside the borrow in case the callback reads the subject.
        let current = self.inner.borrow().current.clone();
        (callback.borrow_mut())(&current);

        let weak: Weak<RefCell<SubjectInner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .borrow_mut()
                        .observers
                        .retain(|(obs_id, _)| *obs_id != id);
                }
            })),
        }
    }

    /// Number of registered observers.
    #[cfg(test)]
    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// RAII guard for a subject registration.
///
/// Dropping the guard (or calling [`Subscription::unsubscribe`])
/// removes the observer, so no further emissions are delivered.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Explicitly releases the registration.
    #[allow(dead_code)] // Dropping the guard is the usual release path
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_replays_current_value() {
        let subject = Subject::new(41u32);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let _sub = subject.subscribe(move |v| sink.borrow_mut().push(*v));

        assert_eq!(*seen.borrow(), vec![41]);
    }

    #[test]
    fn test_next_notifies_all_observers_in_order() {
        let subject = Subject::new(0u32);
        let seen_a = Rc::new(RefCell::new(Vec::new()));
        let seen_b = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen_a);
        let _sub_a = subject.subscribe(move |v| sink.borrow_mut().push(*v));
        let sink = Rc::clone(&seen_b);
        let _sub_b = subject.subscribe(move |v| sink.borrow_mut().push(*v));

        subject.next(1);
        subject.next(2);

        assert_eq!(*seen_a.borrow(), vec![0, 1, 2]);
        assert_eq!(*seen_b.borrow(), vec![0, 1, 2]);
        assert_eq!(subject.get(), 2);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let subject = Subject::new(0u32);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let sub = subject.subscribe(move |v| sink.borrow_mut().push(*v));

        subject.next(1);
        sub.unsubscribe();
        subject.next(2);

        assert_eq!(*seen.borrow(), vec![0, 1]);
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_drop_releases_registration() {
        let subject = Subject::new(0u32);
        {
            let _sub = subject.subscribe(|_| {});
            assert_eq!(subject.observer_count(), 1);
        }
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_next_with_no_observers_updates_value() {
        let subject = Subject::new(String::new());
        subject.next("ready".to_string());
        assert_eq!(subject.get(), "ready");
    }
}
