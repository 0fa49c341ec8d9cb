//! Bounded input queue shared with interrupt handlers.
//!
//! Producers (IR receiver interrupt, button poller) push events through a
//! [`Sender`], the tick loop pops them through a [`Receiver`]. Access is
//! serialized with `critical-section`, the storage is a `heapless::Deque`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when the queue is full. Carries the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Fixed-capacity queue usable from a `static`.
pub struct Channel<T, const SIZE: usize> {
    queue: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Append a value, handing it back if the queue is full.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.with_queue(|queue| queue.push_back(value).map_err(TrySendError))
    }

    /// Take the oldest value, if any.
    pub fn try_receive(&self) -> Option<T> {
        self.with_queue(Deque::pop_front)
    }

    /// Drop every queued value. Returns how many were dropped.
    pub fn clear(&self) -> usize {
        self.with_queue(|queue| {
            let dropped = queue.len();
            queue.clear();
            dropped
        })
    }

    pub fn len(&self) -> usize {
        self.with_queue(|queue| queue.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_queue<R>(&self, f: impl FnOnce(&mut Deque<T, SIZE>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.queue.borrow(cs).borrow_mut()))
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of a [`Channel`].
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }
}

/// Consumer side of a [`Channel`].
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    pub fn try_receive(&self) -> Option<T> {
        self.channel.try_receive()
    }

    /// Drop everything queued so far.
    pub fn clear(&self) -> usize {
        self.channel.clear()
    }
}
