use std::fmt::{Debug, Display, Formatter};

use dyn_clone::DynClone;

use crate::animations::Easing;
use crate::errors::Error;

/// Boxed callback without payload, as registered through the [`Animation`] trait.
pub type Callback = Box<dyn FnMut() + Send>;

/// Determines what a [`Tween`](crate::animations::Tween) does once its duration is elapsed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopType {
    /// The tween ends (default).
    #[default]
    None,
    /// The tween restarts from its start value.
    Restart,
    /// The tween plays backwards: start and end values are swapped on each loop.
    Yoyo,
}

impl Display for LoopType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Represents anything the [`TweenContext`](crate::context::TweenContext) and the
/// [`Sequence`](crate::animations::Sequence) can drive: a time-based task advanced by `update()`.
///
/// Implementors are cheap handles: cloning one gives another handle on the same animation.
pub trait Animation: Debug + DynClone + Send + Sync {
    /// Returns the caller-assigned identifier (-1 when unset).
    fn get_id(&self) -> i32;
    /// Sets the identifier used by [`TweenContext::stop()`](crate::context::TweenContext::stop).
    fn set_id(&self, id: i32);
    /// Returns the duration (in seconds) of one pass of the animation.
    fn get_duration(&self) -> f32;

    /// Indicates if the animation has not finished nor been stopped yet.
    fn is_running(&self) -> bool;
    /// Indicates if the animation is actively advancing (not paused).
    fn is_playing(&self) -> bool;

    /// Starts or resumes the animation.
    fn play(&self);
    /// Pauses the animation: `update()` has no effect until played again.
    fn pause(&self);
    /// Stops the animation.
    ///
    /// - `complete = false`: the animation is cancelled and its stop listeners are called.
    /// - `complete = true`: the animation jumps to its end and its complete listeners are called.
    ///
    /// Stopping an animation which is not running does nothing.
    fn stop(&self, complete: bool);
    /// Advances the animation by `delta` seconds.
    fn update(&self, delta: f32);
    /// Clears the whole configuration (listeners included): used when returned to a pool.
    fn reset(&self);

    /// Sets the easing function (not supported by every animation).
    fn set_ease(&self, easing: Easing) -> Result<(), Error>;
    /// Sets the loop policy (not supported by every animation).
    fn set_loops(&self, loop_type: LoopType, count: i32) -> Result<(), Error>;

    /// Registers a callback called when the animation completes.
    fn set_on_complete(&self, callback: Callback);
    /// Registers a callback called when the animation is stopped before completion.
    fn set_on_stop(&self, callback: Callback);

    /// Hands the animation over to a parent sequence: it is paused, rewound to its beginning
    /// (its values will be captured again when played) and flagged as nested.
    fn nest(&self);
    /// Indicates if the animation is driven by a parent sequence.
    fn is_nested(&self) -> bool;

    /// Returns an identity key shared by all the handles of a same animation.
    fn key(&self) -> usize;
}
dyn_clone::clone_trait_object!(Animation);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_type() {
        assert_eq!(LoopType::default(), LoopType::None);
        assert_eq!(LoopType::Yoyo.to_string(), "Yoyo");
        assert_ne!(LoopType::Restart, LoopType::Yoyo);
    }
}
