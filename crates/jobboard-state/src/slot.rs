// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Observable state cells.
//!
//! A [`Slot`] holds one value and pushes every new value to its subscribers.
//! Delivery is synchronous and runs on the publishing thread:
//!
//! - subscribers are called in subscription order
//! - every subscriber sees every published value, none are skipped
//! - a new subscriber immediately receives the current value
//! - one publish is delivered to all subscribers before the next starts
//!
//! Callbacks run outside the state lock, so they may read the slot,
//! subscribe, or drop a [`Subscription`] without deadlocking.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};
use tokio::sync::mpsc;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

#[derive(Clone)]
struct Subscriber<T> {
	id: u64,
	/// Cleared on unsubscribe so an in-flight delivery skips this entry.
	live: Arc<AtomicBool>,
	callback: Callback<T>,
}

struct SlotState<T> {
	value: T,
	next_id: u64,
	subscribers: Vec<Subscriber<T>>,
}

struct SlotInner<T> {
	state: Mutex<SlotState<T>>,
	/// Serializes deliveries across threads. Reentrant so a callback may
	/// publish to the slot it is observing.
	delivery: ReentrantMutex<()>,
}

/// A writable observable value.
pub struct Slot<T> {
	inner: Arc<SlotInner<T>>,
}

impl<T> Clone for Slot<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<T> Slot<T>
where
	T: Clone + Send + Sync + 'static,
{
	pub fn new(initial: T) -> Self {
		Self {
			inner: Arc::new(SlotInner {
				state: Mutex::new(SlotState {
					value: initial,
					next_id: 0,
					subscribers: Vec::new(),
				}),
				delivery: ReentrantMutex::new(()),
			}),
		}
	}

	/// Replaces the value and delivers it to every subscriber.
	pub fn publish(&self, value: T) {
		self.modify(move |current| *current = value);
	}

	/// Mutates the value in place and delivers the result to every
	/// subscriber.
	pub fn modify(&self, f: impl FnOnce(&mut T)) {
		let _delivery = self.inner.delivery.lock();

		let (value, subscribers) = {
			let mut state = self.inner.state.lock();
			f(&mut state.value);
			(state.value.clone(), state.subscribers.clone())
		};

		for subscriber in subscribers {
			if subscriber.live.load(Ordering::Acquire) {
				(subscriber.callback)(&value);
			}
		}
	}

	/// Read-only handle for consumers.
	pub fn observable(&self) -> Observable<T> {
		Observable {
			slot: self.clone(),
		}
	}

	pub fn current(&self) -> T {
		self.inner.state.lock().value.clone()
	}

	pub fn subscriber_count(&self) -> usize {
		self.inner.state.lock().subscribers.len()
	}

	/// Registers `callback` and immediately calls it with the current value.
	///
	/// The callback stays registered until the returned [`Subscription`] is
	/// dropped or unsubscribed.
	pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
		let _delivery = self.inner.delivery.lock();

		let callback: Callback<T> = Arc::new(callback);
		let live = Arc::new(AtomicBool::new(true));
		let (id, value) = {
			let mut state = self.inner.state.lock();
			let id = state.next_id;
			state.next_id += 1;
			state.subscribers.push(Subscriber {
				id,
				live: Arc::clone(&live),
				callback: Arc::clone(&callback),
			});
			(id, state.value.clone())
		};

		callback(&value);

		let weak: Weak<SlotInner<T>> = Arc::downgrade(&self.inner);
		Subscription::new(move || {
			live.store(false, Ordering::Release);
			if let Some(inner) = weak.upgrade() {
				inner.state.lock().subscribers.retain(|s| s.id != id);
			}
		})
	}

	/// Subscribes through an unbounded channel, for async consumers.
	///
	/// The receiver yields the current value first, then every published
	/// value in order.
	pub fn subscribe_channel(&self) -> SlotReceiver<T> {
		let (tx, rx) = mpsc::unbounded_channel();
		let subscription = self.subscribe(move |value: &T| {
			let _ = tx.send(value.clone());
		});
		SlotReceiver {
			rx,
			_subscription: subscription,
		}
	}
}

impl<T> Default for Slot<T>
where
	T: Clone + Default + Send + Sync + 'static,
{
	fn default() -> Self {
		Self::new(T::default())
	}
}

/// Read-only view of a [`Slot`].
pub struct Observable<T> {
	slot: Slot<T>,
}

impl<T> Clone for Observable<T> {
	fn clone(&self) -> Self {
		Self {
			slot: self.slot.clone(),
		}
	}
}

impl<T> Observable<T>
where
	T: Clone + Send + Sync + 'static,
{
	pub fn current(&self) -> T {
		self.slot.current()
	}

	pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
		self.slot.subscribe(callback)
	}

	pub fn subscribe_channel(&self) -> SlotReceiver<T> {
		self.slot.subscribe_channel()
	}

	pub fn subscriber_count(&self) -> usize {
		self.slot.subscriber_count()
	}
}

/// Registration handle returned by [`Slot::subscribe`].
///
/// Dropping the handle unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
	unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
	fn new(unsubscribe: impl FnOnce() + Send + Sync + 'static) -> Self {
		Self {
			unsubscribe: Some(Box::new(unsubscribe)),
		}
	}

	pub fn unsubscribe(mut self) {
		self.run();
	}

	fn run(&mut self) {
		if let Some(f) = self.unsubscribe.take() {
			f();
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.run();
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.unsubscribe.is_some())
			.finish()
	}
}

/// Channel-backed subscription. Unsubscribes when dropped.
pub struct SlotReceiver<T> {
	rx: mpsc::UnboundedReceiver<T>,
	_subscription: Subscription,
}

impl<T> SlotReceiver<T> {
	/// Waits for the next value.
	pub async fn recv(&mut self) -> Option<T> {
		self.rx.recv().await
	}

	/// Returns the next value if one is already queued.
	pub fn try_recv(&mut self) -> Option<T> {
		self.rx.try_recv().ok()
	}

	/// Drains every queued value.
	pub fn drain(&mut self) -> Vec<T> {
		let mut values = Vec::new();
		while let Ok(value) = self.rx.try_recv() {
			values.push(value);
		}
		values
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn recorder<T: Clone + Send + Sync + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(&T) + Send + Sync)
	{
		let seen = Arc::new(Mutex::new(Vec::new()));
		let sink = Arc::clone(&seen);
		(seen, move |v: &T| sink.lock().push(v.clone()))
	}

	#[test]
	fn test_new_subscriber_receives_current_value() {
		let slot = Slot::new(5);
		let (seen, cb) = recorder();
		let _sub = slot.subscribe(cb);
		assert_eq!(*seen.lock(), vec![5]);
	}

	#[test]
	fn test_publish_reaches_every_subscriber_in_order() {
		let slot = Slot::new("none");
		let (first, cb1) = recorder();
		let (second, cb2) = recorder();
		let _a = slot.subscribe(cb1);
		let _b = slot.subscribe(cb2);

		slot.publish("A");
		slot.publish("B");

		assert_eq!(*first.lock(), vec!["none", "A", "B"]);
		assert_eq!(*second.lock(), vec!["none", "A", "B"]);
	}

	#[test]
	fn test_subscribers_called_in_subscription_order() {
		let slot = Slot::new(0);
		let order = Arc::new(Mutex::new(Vec::new()));
		let o1 = Arc::clone(&order);
		let o2 = Arc::clone(&order);
		let _a = slot.subscribe(move |v| o1.lock().push(("a", *v)));
		let _b = slot.subscribe(move |v| o2.lock().push(("b", *v)));
		order.lock().clear();

		slot.publish(1);
		assert_eq!(*order.lock(), vec![("a", 1), ("b", 1)]);
	}

	#[test]
	fn test_drop_unsubscribes() {
		let slot = Slot::new(0);
		let (seen, cb) = recorder();
		let sub = slot.subscribe(cb);
		assert_eq!(slot.subscriber_count(), 1);

		drop(sub);
		slot.publish(1);

		assert_eq!(slot.subscriber_count(), 0);
		assert_eq!(*seen.lock(), vec![0]);
	}

	#[test]
	fn test_explicit_unsubscribe() {
		let slot = Slot::new(0);
		let (seen, cb) = recorder();
		let sub = slot.subscribe(cb);
		sub.unsubscribe();
		slot.publish(1);
		assert_eq!(*seen.lock(), vec![0]);
	}

	#[test]
	fn test_subscription_outliving_slot_is_harmless() {
		let slot = Slot::new(0);
		let sub = slot.subscribe(|_| {});
		drop(slot);
		drop(sub);
	}

	#[test]
	fn test_modify_delivers_updated_value() {
		let slot = Slot::new(vec![1]);
		let (seen, cb) = recorder();
		let _sub = slot.subscribe(cb);

		slot.modify(|v| v.push(2));

		assert_eq!(slot.current(), vec![1, 2]);
		assert_eq!(*seen.lock(), vec![vec![1], vec![1, 2]]);
	}

	#[test]
	fn test_callback_may_read_and_subscribe() {
		let slot = Slot::new(0);
		let inner_slot = slot.clone();
		let nested: Arc<Mutex<Vec<Subscription>>> = Arc::new(Mutex::new(Vec::new()));
		let nested_sink = Arc::clone(&nested);

		let _sub = slot.subscribe(move |v| {
			assert_eq!(inner_slot.current(), *v);
			if *v == 1 {
				nested_sink.lock().push(inner_slot.subscribe(|_| {}));
			}
		});

		slot.publish(1);
		assert_eq!(slot.subscriber_count(), 2);
	}

	#[test]
	fn test_subscription_dropped_mid_publish_is_skipped() {
		let slot = Slot::new(0);
		let second: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
		let to_drop = Arc::clone(&second);

		let _first = slot.subscribe(move |v| {
			if *v == 1 {
				to_drop.lock().take();
			}
		});
		let (seen, cb) = recorder();
		*second.lock() = Some(slot.subscribe(cb));

		slot.publish(1);
		slot.publish(2);

		assert_eq!(*seen.lock(), vec![0]);
		assert_eq!(slot.subscriber_count(), 1);
	}

	#[test]
	fn test_observable_is_read_only_view() {
		let slot = Slot::new(1);
		let observable = slot.observable();
		let (seen, cb) = recorder();
		let _sub = observable.subscribe(cb);

		slot.publish(2);

		assert_eq!(observable.current(), 2);
		assert_eq!(*seen.lock(), vec![1, 2]);
	}

	#[tokio::test]
	async fn test_channel_subscription_replays_then_streams() {
		let slot = Slot::new(0);
		let mut rx = slot.subscribe_channel();

		slot.publish(1);
		slot.publish(2);

		assert_eq!(rx.recv().await, Some(0));
		assert_eq!(rx.drain(), vec![1, 2]);
		assert_eq!(rx.try_recv(), None);
	}

	#[test]
	fn test_dropping_receiver_unsubscribes() {
		let slot = Slot::new(0);
		let rx = slot.subscribe_channel();
		assert_eq!(slot.subscriber_count(), 1);
		drop(rx);
		assert_eq!(slot.subscriber_count(), 0);
	}

	#[test]
	fn test_concurrent_publishes_are_not_interleaved() {
		let slot = Slot::new((0u32, 0u32));
		let (first, cb1) = recorder();
		let (second, cb2) = recorder();
		let _a = slot.subscribe(cb1);
		let _b = slot.subscribe(cb2);

		let handles: Vec<_> = (0..4u32)
			.map(|t| {
				let slot = slot.clone();
				std::thread::spawn(move || {
					for i in 0..50u32 {
						slot.publish((t, i));
					}
				})
			})
			.collect();
		for handle in handles {
			handle.join().unwrap();
		}

		let first = first.lock();
		assert_eq!(first.len(), 201);
		assert_eq!(*first, *second.lock());
	}

	proptest! {
		#[test]
		fn every_observer_sees_every_value(values in proptest::collection::vec(any::<i32>(), 0..50)) {
			let slot = Slot::new(0);
			let (a, cb1) = recorder();
			let (b, cb2) = recorder();
			let _s1 = slot.subscribe(cb1);
			let _s2 = slot.subscribe(cb2);

			for v in &values {
				slot.publish(*v);
			}

			let mut expected = vec![0];
			expected.extend(values.iter().copied());
			prop_assert_eq!(&*a.lock(), &expected);
			prop_assert_eq!(&*b.lock(), &expected);
		}
	}
}
