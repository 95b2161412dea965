//! Defines Hermes-Tween multicast listener lists.

use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};

use parking_lot::Mutex;

type Callback<A> = Box<dyn FnMut(A) + Send>;

struct Slots<A> {
    callbacks: Vec<Callback<A>>,
    /// Bumped on every `clear()`: lets an emit in progress know its snapshot became stale.
    epoch: u64,
    /// Whether an emit is in progress.
    emitting: bool,
    /// Payloads emitted while another emit was in progress, delivered once it is done.
    pending: VecDeque<A>,
}

/// An ordered list of callbacks receiving the same payload type.
///
/// Callbacks are invoked in registration order. No lock is held while a callback runs, so a
/// callback may register new listeners, clear the list, or emit other lists.
///
/// An emit on the same list from within a callback is queued: every listener receives it right
/// after the payload in progress.
pub struct Listeners<A> {
    slots: Mutex<Slots<A>>,
}

impl<A> Default for Listeners<A> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(Slots {
                callbacks: vec![],
                epoch: 0,
                emitting: false,
                pending: VecDeque::new(),
            }),
        }
    }
}

impl<A: Clone> Listeners<A> {
    /// Registers a callback at the end of the list.
    ///
    /// # Example
    /// ```
    /// use hermes_tween::utils::Listeners;
    ///
    /// let listeners: Listeners<f32> = Default::default();
    /// listeners.add(|value: f32| println!("Value is now {}", value));
    /// listeners.emit(42.0);
    /// ```
    pub fn add<F>(&self, callback: F)
    where
        F: FnMut(A) + Send + 'static,
    {
        self.slots.lock().callbacks.push(Box::new(callback));
    }

    /// Invokes all callbacks with a clone of the given payload.
    pub fn emit(&self, payload: A) {
        let (mut running, mut epoch) = {
            let mut slots = self.slots.lock();
            if slots.emitting {
                slots.pending.push_back(payload);
                return;
            }
            slots.emitting = true;
            (std::mem::take(&mut slots.callbacks), slots.epoch)
        };

        let mut payload = payload;
        loop {
            for callback in running.iter_mut() {
                callback(payload.clone());
            }

            let mut slots = self.slots.lock();
            if slots.epoch == epoch {
                // Callbacks registered during the emit were pushed on the emptied list: keep them last.
                running.append(&mut slots.callbacks);
                slots.callbacks = running;
            }

            match slots.pending.pop_front() {
                Some(next) => {
                    payload = next;
                    running = std::mem::take(&mut slots.callbacks);
                    epoch = slots.epoch;
                }
                None => {
                    slots.emitting = false;
                    return;
                }
            }
        }
    }

    /// Removes every registered callback.
    pub fn clear(&self) {
        let mut slots = self.slots.lock();
        slots.callbacks.clear();
        slots.pending.clear();
        slots.epoch = slots.epoch.wrapping_add(1);
    }

    /// Returns the number of registered callbacks.
    pub fn len(&self) -> usize {
        self.slots.lock().callbacks.len()
    }

    /// Indicates if no callback is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A> Debug for Listeners<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listeners [count={}]", self.slots.lock().callbacks.len())
    }
}
