//! Observable state container shared by the vendor and booking stores.
//!
//! The container itself knows nothing about Leptos: listeners are plain
//! closures receiving the new snapshot. Views bridge a store into the
//! reactive graph with [`bind_signal`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<S> = Rc<dyn Fn(&S)>;

pub struct Observable<S: Clone> {
    state: RefCell<S>,
    listeners: RefCell<Vec<(ListenerId, Listener<S>)>>,
    next_id: Cell<u64>,
}

impl<S: Clone> Observable<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: RefCell::new(initial),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn snapshot(&self) -> S {
        self.state.borrow().clone()
    }

    /// Read a part of the state without cloning all of it
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn subscribe(&self, listener: impl Fn(&S) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns false when the listener was already gone
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Mutate the state, then notify every listener with the new snapshot.
    ///
    /// Listeners run after all borrows are released, so a listener may read
    /// the store or subscribe again.
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        f(&mut self.state.borrow_mut());
        let snapshot = self.snapshot();
        let listeners: Vec<Listener<S>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

/// Mirror an observable into a signal for the lifetime of the current owner.
///
/// The subscription is dropped when the owner is cleaned up, so views
/// unmounting never leave listeners behind.
pub fn bind_signal<S, T>(
    source: Rc<T>,
    observable: impl Fn(&T) -> &Observable<S> + Send + Sync + 'static,
) -> RwSignal<S>
where
    S: Clone + Send + Sync + 'static,
    T: 'static,
{
    let obs = observable(&source);
    let signal = RwSignal::new(obs.snapshot());
    let id = obs.subscribe(move |state: &S| {
        signal.try_set(state.clone());
    });

    let holder = StoredValue::new_local(source);
    on_cleanup(move || {
        holder.try_with_value(|source| {
            observable(source).unsubscribe(id);
        });
    });

    signal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_notifies_every_listener_with_new_state() {
        let store = Observable::new(0_u32);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let a = Rc::clone(&seen);
        store.subscribe(move |s| a.borrow_mut().push(("a", *s)));
        let b = Rc::clone(&seen);
        store.subscribe(move |s| b.borrow_mut().push(("b", *s)));

        store.update(|s| *s += 2);
        assert_eq!(*seen.borrow(), vec![("a", 2), ("b", 2)]);
        assert_eq!(store.snapshot(), 2);
    }

    #[test]
    fn test_unsubscribed_listener_stops_receiving() {
        let store = Observable::new(String::new());
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let id = store.subscribe(move |_| h.set(h.get() + 1));

        store.update(|s| s.push('x'));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.update(|s| s.push('y'));

        assert_eq!(hits.get(), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_read_store_during_notification() {
        let store = Rc::new(Observable::new(1_i32));
        let read_back = Rc::new(Cell::new(0));
        let (s, r) = (Rc::clone(&store), Rc::clone(&read_back));
        store.subscribe(move |_| r.set(s.with(|v| *v)));

        store.update(|v| *v = 9);
        assert_eq!(read_back.get(), 9);
    }
}
