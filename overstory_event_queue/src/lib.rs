// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Event Queue: the one cross-thread primitive in the toolkit.
//!
//! ## Overview
//!
//! Dispatch through the widget tree is strictly single-threaded: one event
//! is taken, fully processed — including any nested callbacks — and only
//! then is the next event taken. Producers on other threads (platform
//! message pumps, worker threads) therefore never touch the tree; they
//! enqueue normalized events here and the UI thread drains them in FIFO
//! order.
//!
//! The queue is a `Mutex`-protected ring with a condition variable for the
//! consumer's blocking wait. An optional *wake hint* — a closure invoked
//! after every push — lets an adapter interrupt a native blocking call
//! (e.g. post a sentinel message to a platform event wait) so the queue is
//! drained promptly. The hint is a wake-up signal, not a data channel.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use overstory_event_queue::EventQueue;
//! use overstory_events::{Event, PointerMoved};
//!
//! let queue: EventQueue<Event> = EventQueue::new();
//! queue.push(PointerMoved { position: (4.0, 2.0).into() }.into());
//!
//! while let Some(event) = queue.try_pop() {
//!     // ... dispatch into the widget tree on this thread ...
//!     # let _ = event;
//! }
//! assert!(queue.pop_timeout(Duration::from_millis(1)).is_none());
//! ```

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// FIFO queue handing events from producer threads to the UI thread.
///
/// `push` may be called from any thread; `try_pop`, `pop_timeout`, and
/// `drain` are meant for the single consumer. Events come out strictly in
/// enqueue order. A poisoned lock is absorbed rather than propagated — a
/// panicking producer must not wedge the UI loop.
pub struct EventQueue<T> {
    events: Mutex<VecDeque<T>>,
    ready: Condvar,
    waker: Option<Box<dyn Fn() + Send + Sync>>,
}

impl<T> core::fmt::Debug for EventQueue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventQueue")
            .field("len", &self.len())
            .field("has_waker", &self.waker.is_some())
            .finish_non_exhaustive()
    }
}

impl<T> EventQueue<T> {
    /// Create an empty queue with no wake hint.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(VecDeque::new()),
            ready: Condvar::new(),
            waker: None,
        }
    }

    /// Create an empty queue whose `waker` runs after every push.
    ///
    /// The waker executes on the producer's thread, outside the queue lock;
    /// it must be cheap and must not enqueue events itself.
    pub fn with_waker(waker: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            events: Mutex::new(VecDeque::new()),
            ready: Condvar::new(),
            waker: Some(Box::new(waker)),
        }
    }

    /// Enqueue an event. Callable from any thread.
    pub fn push(&self, event: T) {
        let mut events = self.lock();
        events.push_back(event);
        tracing::trace!(len = events.len(), "event enqueued");
        drop(events);
        self.ready.notify_one();
        if let Some(waker) = &self.waker {
            waker();
        }
    }

    /// Dequeue the oldest event without blocking.
    pub fn try_pop(&self) -> Option<T> {
        self.lock().pop_front()
    }

    /// Dequeue the oldest event, blocking up to `timeout` for one to arrive.
    ///
    /// Returns `None` on expiry. Spurious condition-variable wakeups are
    /// re-waited against the original deadline.
    pub fn pop_timeout(&self, timeout: Duration) -> Option<T> {
        let deadline = Instant::now() + timeout;
        let mut events = self.lock();
        loop {
            if let Some(event) = events.pop_front() {
                return Some(event);
            }
            let now = Instant::now();
            if now >= deadline {
                return None;
            }
            events = self
                .ready
                .wait_timeout(events, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }

    /// Dequeue every pending event, in order.
    pub fn drain(&self) -> Vec<T> {
        self.lock().drain(..).collect()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no events are pending.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<T>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn events_come_out_in_enqueue_order() {
        let queue = EventQueue::new();
        for i in 0..5 {
            queue.push(i);
        }
        assert_eq!(queue.len(), 5);
        for i in 0..5 {
            assert_eq!(queue.try_pop(), Some(i));
        }
        assert!(queue.is_empty());
        assert_eq!(queue.try_pop(), None);
    }

    #[test]
    fn drain_empties_the_queue_in_order() {
        let queue = EventQueue::new();
        for i in 0..4 {
            queue.push(i);
        }
        assert_eq!(queue.drain(), vec![0, 1, 2, 3]);
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn pop_timeout_expires_when_empty() {
        let queue: EventQueue<u32> = EventQueue::new();
        let start = Instant::now();
        assert_eq!(queue.pop_timeout(Duration::from_millis(10)), None);
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn pop_timeout_is_woken_by_a_producer_thread() {
        let queue = Arc::new(EventQueue::new());
        let producer = Arc::clone(&queue);
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            producer.push(99_u32);
        });
        // Generous timeout; the wait should end as soon as the push lands.
        assert_eq!(queue.pop_timeout(Duration::from_secs(5)), Some(99));
        handle.join().unwrap();
    }

    #[test]
    fn waker_runs_after_every_push() {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        let queue = EventQueue::with_waker(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        queue.push(1);
        queue.push(2);
        assert_eq!(wakes.load(Ordering::SeqCst), 2);
        assert_eq!(queue.try_pop(), Some(1));
        // Popping never wakes.
        assert_eq!(wakes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn fifo_holds_across_producer_threads() {
        // Each producer's own pushes must appear in its push order; the
        // consumer sees a single interleaving of both.
        let queue = Arc::new(EventQueue::new());
        let mut handles = Vec::new();
        for t in 0..2_u32 {
            let producer = Arc::clone(&queue);
            handles.push(thread::spawn(move || {
                for i in 0..100_u32 {
                    producer.push((t, i));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let mut next = [0_u32; 2];
        while let Some((t, i)) = queue.try_pop() {
            assert_eq!(i, next[t as usize]);
            next[t as usize] += 1;
        }
        assert_eq!(next, [100, 100]);
    }
}
