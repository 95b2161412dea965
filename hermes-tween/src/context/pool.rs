use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use log::trace;

use crate::animations::{Animation, Sequence, Tween};

/// Represents a reuse registry for tweens (one free-list per value type) and sequences.
///
/// Any instance handed out by `acquire` is fully reset. Releasing an instance already in the pool
/// does nothing.
///
/// # Example
/// ```
/// use hermes_tween::animations::Tween;
/// use hermes_tween::context::TweenPool;
///
/// let mut pool = TweenPool::default();
/// let tween: Tween<f32> = pool.acquire();
/// pool.release(tween.clone());
/// assert_eq!(pool.count::<f32>(), 1);
///
/// let reused: Tween<f32> = pool.acquire();
/// assert!(reused.ptr_eq(&tween));
/// assert_eq!(pool.count::<f32>(), 0);
/// ```
#[derive(Default)]
pub struct TweenPool {
    /// Free-lists of `Vec<Tween<T>>`, keyed by `TypeId::of::<T>()`.
    tweens: HashMap<TypeId, Box<dyn Any + Send>>,
    sequences: Vec<Sequence>,
}

impl TweenPool {
    /// Returns a reset tween: a pooled one if available, a new one otherwise.
    pub fn acquire<T: Clone + Send + 'static>(&mut self) -> Tween<T> {
        let tween = self
            .tweens
            .get_mut(&TypeId::of::<T>())
            .and_then(|free_list| free_list.downcast_mut::<Vec<Tween<T>>>())
            .and_then(|free_list| free_list.pop())
            .unwrap_or_default();
        tween.set_pooled(false);
        tween
    }

    /// Resets the tween and keeps it for a later `acquire()`.
    pub fn release<T: Clone + Send + 'static>(&mut self, tween: Tween<T>) {
        if tween.is_pooled() {
            return;
        }
        trace!("Tween released to the pool: {:?}", tween);
        tween.reset();
        tween.set_pooled(true);

        let free_list = self
            .tweens
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(Vec::<Tween<T>>::new()) as Box<dyn Any + Send>);
        if let Some(free_list) = free_list.downcast_mut::<Vec<Tween<T>>>() {
            free_list.push(tween);
        }
    }

    /// Returns a reset sequence: a pooled one if available, a new (not running) one otherwise.
    pub fn acquire_sequence(&mut self) -> Sequence {
        let sequence = self.sequences.pop().unwrap_or_else(|| {
            let sequence = Sequence::new(false);
            sequence.reset();
            sequence
        });
        sequence.set_pooled(false);
        sequence
    }

    /// Resets the sequence and keeps it for a later `acquire_sequence()`.
    pub fn release_sequence(&mut self, sequence: Sequence) {
        if sequence.is_pooled() {
            return;
        }
        trace!("Sequence released to the pool: {:?}", sequence);
        sequence.reset();
        sequence.set_pooled(true);
        self.sequences.push(sequence);
    }

    /// Returns the number of pooled tweens of value type `T`.
    pub fn count<T: Clone + Send + 'static>(&self) -> usize {
        self.tweens
            .get(&TypeId::of::<T>())
            .and_then(|free_list| free_list.downcast_ref::<Vec<Tween<T>>>())
            .map_or(0, |free_list| free_list.len())
    }

    /// Returns the number of pooled sequences.
    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }
}

impl Debug for TweenPool {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenPool")
            .field("types", &self.tweens.len())
            .field("sequences", &self.sequences.len())
            .finish()
    }
}
