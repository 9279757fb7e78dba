//! Observable Value
//!
//! A single-threaded value holder with synchronous change notification.
//!
//! - `publish` replaces the value and calls every registered callback in
//!   registration order, after the internal borrow is released.
//! - A `publish` made from inside a callback stores the value right away but
//!   is delivered only after the current round reaches every subscriber, so
//!   all subscribers see publishes in the same order.
//! - A callback unsubscribed during a round is not called for the rest of it.
//! - `subscribe` delivers the current value immediately, then every later
//!   publish. Missed intermediate values are not replayed.
//! - Dropping (or calling `unsubscribe` on) the returned [`Subscription`]
//!   removes the callback.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

/// Identifier of one registered callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    version: u64,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
    notifying: bool,
    pending: VecDeque<T>,
}

/// Shared observable value
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                next_id: 0,
                subscribers: Vec::new(),
                notifying: false,
                pending: VecDeque::new(),
            })),
        }
    }

    /// Latest value
    pub fn read(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Number of publishes so far
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Register `callback`; it is called once with the current value before
    /// this returns.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(callback);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = SubscriptionId(inner.next_id);
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::clone(&callback)));
            (id, inner.value.clone())
        };
        log::trace!("[Observable] subscriber {:?} attached", id);
        callback(&current);

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            id,
            detach: Some(Box::new(move |id| {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    /// Replace the value and notify subscribers
    pub fn publish(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.version += 1;
            inner.pending.push_back(value);
            if inner.notifying {
                log::trace!("[Observable] publish queued behind current round");
                return;
            }
            inner.notifying = true;
        }

        loop {
            let (current, callbacks) = {
                let mut inner = self.inner.borrow_mut();
                let Some(current) = inner.pending.pop_front() else {
                    inner.notifying = false;
                    return;
                };
                let callbacks: Vec<(SubscriptionId, Callback<T>)> = inner
                    .subscribers
                    .iter()
                    .map(|(id, cb)| (*id, Rc::clone(cb)))
                    .collect();
                (current, callbacks)
            };
            log::trace!("[Observable] notifying {} subscribers", callbacks.len());
            for (id, callback) in callbacks {
                if self.is_subscribed(id) {
                    callback(&current);
                }
            }
        }
    }

    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .any(|(sid, _)| *sid == id)
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

/// Handle to a registered callback; removes it when dropped
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: SubscriptionId,
    detach: Option<Box<dyn FnOnce(SubscriptionId)>>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn unsubscribe(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            log::trace!("[Observable] subscriber {:?} detached", self.id);
            detach(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<i32>>>, impl Fn(&i32) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |v: &i32| sink.borrow_mut().push(*v))
    }

    #[test]
    fn test_subscribe_delivers_current_value() {
        let value = Observable::new(1);
        value.publish(2);
        value.publish(3);

        let (seen, cb) = recorder();
        let _sub = value.subscribe(cb);
        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn test_publish_reaches_all_subscribers_in_order() {
        let value = Observable::new(0);
        let (first, cb1) = recorder();
        let (second, cb2) = recorder();
        let _a = value.subscribe(cb1);
        let _b = value.subscribe(cb2);

        value.publish(1);
        value.publish(2);

        assert_eq!(*first.borrow(), vec![0, 1, 2]);
        assert_eq!(*second.borrow(), vec![0, 1, 2]);
        assert_eq!(value.version(), 2);
        assert_eq!(value.read(), 2);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let value = Observable::new(0);
        let (seen, cb) = recorder();
        let sub = value.subscribe(cb);
        value.publish(1);
        sub.unsubscribe();
        value.publish(2);

        assert_eq!(*seen.borrow(), vec![0, 1]);
        assert_eq!(value.subscriber_count(), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let value = Observable::new(0);
        let (seen, cb) = recorder();
        {
            let _sub = value.subscribe(cb);
            assert_eq!(value.subscriber_count(), 1);
        }
        value.publish(5);
        assert_eq!(*seen.borrow(), vec![0]);
        assert_eq!(value.subscriber_count(), 0);
    }

    #[test]
    fn test_callback_may_read_during_publish() {
        let value = Rc::new(Observable::new(0));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let reader = Rc::clone(&value);
        let sink = Rc::clone(&seen);
        let _sub = value.subscribe(move |_| sink.borrow_mut().push(reader.read()));

        value.publish(7);
        assert_eq!(*seen.borrow(), vec![0, 7]);
    }

    #[test]
    fn test_publish_from_callback_keeps_order() {
        let value = Rc::new(Observable::new(0));
        let republisher = Rc::clone(&value);
        let _a = value.subscribe(move |v: &i32| {
            if *v == 1 {
                republisher.publish(2);
            }
        });
        let (seen, cb) = recorder();
        let _b = value.subscribe(cb);

        value.publish(1);

        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
        assert_eq!(seen.borrow().last().copied(), Some(value.read()));
        assert_eq!(value.version(), 2);
    }

    #[test]
    fn test_unsubscribed_during_round_not_called() {
        let value = Observable::new(0);
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&victim);
        let _a = value.subscribe(move |v: &i32| {
            if *v == 1 {
                slot.borrow_mut().take();
            }
        });
        let (seen, cb) = recorder();
        *victim.borrow_mut() = Some(value.subscribe(cb));

        value.publish(1);

        assert_eq!(*seen.borrow(), vec![0]);
        assert_eq!(value.subscriber_count(), 1);
    }

    #[test]
    fn test_subscription_ids_are_distinct() {
        let value = Observable::new(0);
        let first = value.subscribe(|_| {});
        let second = value.subscribe(|_| {});
        assert_ne!(first.id(), second.id());
        assert_eq!(format!("{:?}", first), format!("Subscription {{ id: {:?} }}", first.id()));
    }

    #[test]
    fn test_subscription_outlives_observable() {
        let value = Observable::new(0);
        let (_seen, cb) = recorder();
        let sub = value.subscribe(cb);
        drop(value);
        sub.unsubscribe();
    }
}
