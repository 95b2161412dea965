use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use log::debug;
use parking_lot::{Mutex, MutexGuard};

use crate::animations::{Animation, Callback, Easing, LoopType};
use crate::errors::{Error, InvalidDuration, InvalidLoopCount};
use crate::utils::Listeners;

/// Zero-argument closure producing a start or end value.
type Producer<T> = Arc<dyn Fn() -> T + Send + Sync>;
/// Interpolation closure: `(start, end, eased progress) -> value`.
type LerpFn<T> = Arc<dyn Fn(&T, &T, f32) -> T + Send + Sync>;

struct TweenState<T> {
    id: i32,
    duration: f32,
    elapsed: f32,
    running: bool,
    playing: bool,
    /// Whether start/end values were captured for the current run.
    started: bool,
    nested: bool,
    pooled: bool,
    easing: Easing,
    loop_type: LoopType,
    loop_count: i32,
    completed_loops: i32,
    start: Option<T>,
    end: Option<T>,
    start_fn: Option<Producer<T>>,
    end_fn: Option<Producer<T>>,
    lerp: Option<LerpFn<T>>,
}

impl<T> Default for TweenState<T> {
    fn default() -> Self {
        Self {
            id: -1,
            duration: 0.0,
            elapsed: 0.0,
            running: false,
            playing: false,
            started: false,
            nested: false,
            pooled: false,
            easing: Easing::Linear,
            loop_type: LoopType::None,
            loop_count: 0,
            completed_loops: 0,
            start: None,
            end: None,
            start_fn: None,
            end_fn: None,
            lerp: None,
        }
    }
}

struct TweenInner<T> {
    state: Mutex<TweenState<T>>,
    on_update: Listeners<T>,
    on_complete: Listeners<()>,
    on_stop: Listeners<()>,
}

/// Outcome of the time advance of an `update()`.
enum Advance {
    Progress,
    Looped,
    Finished,
}

/// Represents a tween: the interpolation of a value of type `T` from a start to an end value
/// over a duration (in seconds).
///
/// - Start and end values are given as producers: closures called when the tween starts playing,
///   not when it is configured. This allows animating "from wherever the value currently is".
/// - Each `update(delta)` advances the elapsed time, shapes the progress with the [`Easing`]
///   function and calls the `on_update` listeners with `lerp(start, end, eased_progress)`.
/// - The tween may loop ([`LoopType`]) a finite or infinite (-1) number of times.
///
/// A `Tween` is a handle: clones share the same tween.
///
/// # Example
/// ```
/// use hermes_tween::animations::{Animation, Easing, Tween};
/// use hermes_tween::utils::lerp;
///
/// let tween = Tween::new(|| 0.0f32, || 10.0, 2.0, lerp, true).unwrap();
/// tween.set_ease(Easing::QuadOut).unwrap();
/// tween.on_update(|value: f32| println!("Value: {}", value));
/// tween.on_complete(|| println!("Done"));
///
/// tween.update(1.0); // prints "Value: 7.5"
/// tween.update(1.0); // prints "Value: 10" then "Done"
/// assert!(!tween.is_running());
/// ```
pub struct Tween<T> {
    inner: Arc<TweenInner<T>>,
}

impl<T> Clone for Tween<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + Send + 'static> Default for Tween<T> {
    /// Creates an unconfigured (not running) tween: see [`Tween::configure()`].
    fn default() -> Self {
        Self {
            inner: Arc::new(TweenInner {
                state: Mutex::new(TweenState::default()),
                on_update: Default::default(),
                on_complete: Default::default(),
                on_stop: Default::default(),
            }),
        }
    }
}

impl<T: Clone + Send + 'static> Tween<T> {
    /// Creates a new tween.
    ///
    /// # Arguments
    /// * `start` - The producer of the start value (called when the tween starts playing).
    /// * `end` - The producer of the end value (called when the tween starts playing).
    /// * `duration` - The duration in seconds: must be strictly positive.
    /// * `lerp` - The interpolation function.
    /// * `auto_play` - Whether the tween starts playing right away.
    ///
    /// # Errors
    /// [`Error::InvalidDuration`] if the duration is not strictly positive.
    pub fn new<S, E, L>(start: S, end: E, duration: f32, lerp: L, auto_play: bool) -> Result<Self, Error>
    where
        S: Fn() -> T + Send + Sync + 'static,
        E: Fn() -> T + Send + Sync + 'static,
        L: Fn(&T, &T, f32) -> T + Send + Sync + 'static,
    {
        let tween = Self::default();
        tween.configure(start, end, duration, lerp, auto_play)?;
        Ok(tween)
    }

    /// (Re)configures the tween producers, duration and interpolation function.
    ///
    /// The tween becomes running: it starts right away if `auto_play`, or on the next `play()`.
    /// Easing, loops, id and listeners already set are kept.
    ///
    /// # Errors
    /// [`Error::InvalidDuration`] if the duration is not strictly positive: the tween is left untouched.
    pub fn configure<S, E, L>(
        &self,
        start: S,
        end: E,
        duration: f32,
        lerp: L,
        auto_play: bool,
    ) -> Result<(), Error>
    where
        S: Fn() -> T + Send + Sync + 'static,
        E: Fn() -> T + Send + Sync + 'static,
        L: Fn(&T, &T, f32) -> T + Send + Sync + 'static,
    {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(InvalidDuration {
                duration,
                context: "tween",
            });
        }

        {
            let mut state = self.state();
            state.start_fn = Some(Arc::new(start));
            state.end_fn = Some(Arc::new(end));
            state.lerp = Some(Arc::new(lerp));
            state.duration = duration;
            state.elapsed = 0.0;
            state.completed_loops = 0;
            state.start = None;
            state.end = None;
            state.started = false;
            state.running = true;
            state.playing = false;
        }

        if auto_play {
            self.play();
        }
        Ok(())
    }

    /// Registers a callback called with the interpolated value on each update.
    pub fn on_update<F>(&self, callback: F) -> &Self
    where
        F: FnMut(T) + Send + 'static,
    {
        self.inner.on_update.add(callback);
        self
    }

    /// Registers a callback called when the tween completes.
    pub fn on_complete<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut() + Send + 'static,
    {
        self.inner.on_complete.add(move |_| callback());
        self
    }

    /// Registers a callback called when the tween is stopped before completion.
    pub fn on_stop<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut() + Send + 'static,
    {
        self.inner.on_stop.add(move |_| callback());
        self
    }

    /// Returns the elapsed time (in seconds) of the current pass.
    pub fn get_elapsed(&self) -> f32 {
        self.state().elapsed
    }

    /// Returns the normalized progress of the current pass, between 0.0 and 1.0 (before easing).
    pub fn get_progress(&self) -> f32 {
        let state = self.state();
        match state.duration > 0.0 {
            true => (state.elapsed / state.duration).clamp(0.0, 1.0),
            false => 0.0,
        }
    }

    /// Returns the easing function.
    pub fn get_easing(&self) -> Easing {
        self.state().easing
    }

    /// Returns the loop policy.
    pub fn get_loop_type(&self) -> LoopType {
        self.state().loop_type
    }

    /// Returns the configured number of loops (-1 for infinite).
    pub fn get_loop_count(&self) -> i32 {
        self.state().loop_count
    }

    /// Returns the number of loops done so far.
    pub fn get_completed_loops(&self) -> i32 {
        self.state().completed_loops
    }

    /// Indicates if both handles point to the same tween.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn is_pooled(&self) -> bool {
        self.state().pooled
    }

    pub(crate) fn set_pooled(&self, pooled: bool) {
        self.state().pooled = pooled;
    }

    fn state(&self) -> MutexGuard<'_, TweenState<T>> {
        self.inner.state.lock()
    }

    /// Calls both producers and stores the captured values.
    fn capture_values(&self, start_fn: Producer<T>, end_fn: Producer<T>) {
        let (start, end) = (start_fn(), end_fn());
        let mut state = self.state();
        state.start = Some(start);
        state.end = Some(end);
    }

    /// Advances the clock and applies the loop policy.
    fn advance(state: &mut TweenState<T>, delta: f32) -> Advance {
        state.elapsed += delta;
        if state.elapsed < state.duration {
            return Advance::Progress;
        }

        let can_loop = state.loop_type != LoopType::None
            && (state.loop_count == -1 || state.completed_loops < state.loop_count);
        match can_loop {
            true => {
                state.elapsed = 0.0;
                state.completed_loops = state.completed_loops.saturating_add(1);
                if state.loop_type == LoopType::Yoyo {
                    std::mem::swap(&mut state.start_fn, &mut state.end_fn);
                }
                Advance::Looped
            }
            false => {
                state.elapsed = state.duration;
                state.running = false;
                Advance::Finished
            }
        }
    }
}

impl<T: Clone + Send + 'static> Animation for Tween<T> {
    fn get_id(&self) -> i32 {
        self.state().id
    }

    fn set_id(&self, id: i32) {
        self.state().id = id;
    }

    fn get_duration(&self) -> f32 {
        self.state().duration
    }

    fn is_running(&self) -> bool {
        self.state().running
    }

    fn is_playing(&self) -> bool {
        self.state().playing
    }

    /// Starts or resumes the tween.
    ///
    /// Start and end values are captured on the first play of a run only: resuming a paused
    /// tween keeps the values it was started with.
    fn play(&self) {
        let producers = {
            let mut state = self.state();
            if !state.running {
                return;
            }
            state.playing = true;
            match state.started {
                true => None,
                false => {
                    state.started = true;
                    state.start_fn.clone().zip(state.end_fn.clone())
                }
            }
        };

        if let Some((start_fn, end_fn)) = producers {
            self.capture_values(start_fn, end_fn);
        }
    }

    fn pause(&self) {
        self.state().playing = false;
    }

    fn stop(&self, complete: bool) {
        let end = {
            let mut state = self.state();
            if !state.running {
                return;
            }
            state.running = false;
            if complete {
                state.elapsed = state.duration;
            }
            match state.started {
                true => state.end.clone().map(Ok),
                false => state.end_fn.clone().map(Err),
            }
        };
        debug!("Tween stopped [complete={}]", complete);

        match complete {
            false => self.inner.on_stop.emit(()),
            true => {
                let end = match end {
                    Some(Ok(value)) => Some(value),
                    Some(Err(end_fn)) => Some(end_fn()),
                    None => None,
                };
                if let Some(value) = end {
                    self.inner.on_update.emit(value);
                }
                self.inner.on_complete.emit(());
            }
        }
    }

    fn update(&self, delta: f32) {
        let (advance, producers) = {
            let mut state = self.state();
            if !state.running || !state.playing {
                return;
            }
            let advance = Self::advance(&mut state, delta.max(0.0));
            let producers = match (&advance, state.loop_type) {
                (Advance::Looped, LoopType::Yoyo) => state.start_fn.clone().zip(state.end_fn.clone()),
                _ => None,
            };
            (advance, producers)
        };

        if let Some((start_fn, end_fn)) = producers {
            self.capture_values(start_fn, end_fn);
        }

        let frame = {
            let state = self.state();
            let t = (state.elapsed / state.duration).clamp(0.0, 1.0);
            let eased = state.easing.call(t);
            match (&state.start, &state.end, &state.lerp) {
                (Some(start), Some(end), Some(lerp)) => {
                    Some((start.clone(), end.clone(), lerp.clone(), eased))
                }
                _ => None,
            }
        };

        if let Some((start, end, lerp, eased)) = frame {
            self.inner.on_update.emit(lerp(&start, &end, eased));
        }
        if let Advance::Finished = advance {
            self.inner.on_complete.emit(());
        }
    }

    fn reset(&self) {
        {
            let mut state = self.state();
            let pooled = state.pooled;
            *state = TweenState::default();
            state.pooled = pooled;
        }
        self.inner.on_update.clear();
        self.inner.on_complete.clear();
        self.inner.on_stop.clear();
    }

    fn set_ease(&self, easing: Easing) -> Result<(), Error> {
        self.state().easing = easing;
        Ok(())
    }

    /// Sets the loop policy: `count` is the number of additional passes (-1 for infinite).
    ///
    /// # Errors
    /// [`Error::InvalidLoopCount`] if `count` is below -1.
    fn set_loops(&self, loop_type: LoopType, count: i32) -> Result<(), Error> {
        if count < -1 {
            return Err(InvalidLoopCount { count });
        }
        let mut state = self.state();
        state.loop_type = loop_type;
        state.loop_count = count;
        Ok(())
    }

    fn set_on_complete(&self, mut callback: Callback) {
        self.inner.on_complete.add(move |_| callback());
    }

    fn set_on_stop(&self, mut callback: Callback) {
        self.inner.on_stop.add(move |_| callback());
    }

    fn nest(&self) {
        let mut state = self.state();
        state.nested = true;
        state.playing = false;
        state.started = false;
        state.elapsed = 0.0;
        state.completed_loops = 0;
    }

    fn is_nested(&self) -> bool {
        self.state().nested
    }

    fn key(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }
}

impl<T> Debug for Tween<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("Tween")
            .field("id", &state.id)
            .field("duration", &state.duration)
            .field("elapsed", &state.elapsed)
            .field("easing", &state.easing)
            .field("loop_type", &state.loop_type)
            .field("loop_count", &state.loop_count)
            .field("running", &state.running)
            .field("playing", &state.playing)
            .finish()
    }
}

impl<T> Display for Tween<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.lock();
        write!(
            f,
            "Tween [duration={}s, elapsed={}s, easing={}, loops={}({})]",
            state.duration, state.elapsed, state.easing, state.loop_type, state.loop_count
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::utils::lerp;

    use super::*;

    /// Creates a 0 to 10 float tween recording every updated value.
    fn create_tween(duration: f32, auto_play: bool) -> (Tween<f32>, Arc<Mutex<Vec<f32>>>) {
        let tween = Tween::new(|| 0.0f32, || 10.0, duration, lerp, auto_play).unwrap();
        let values = Arc::new(Mutex::new(vec![]));
        let moved_values = values.clone();
        tween.on_update(move |value| moved_values.lock().push(value));
        (tween, values)
    }

    fn counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let moved_count = count.clone();
        (count, move || {
            moved_count.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_new_tween() {
        let tween = Tween::new(|| 0.0f32, || 10.0, 2.0, lerp, false).unwrap();
        assert_eq!(tween.get_id(), -1);
        assert_eq!(tween.get_duration(), 2.0);
        assert_eq!(tween.get_elapsed(), 0.0);
        assert_eq!(tween.get_easing(), Easing::Linear);
        assert_eq!(tween.get_loop_type(), LoopType::None);
        assert!(tween.is_running());
        assert!(!tween.is_playing());

        tween.set_id(42);
        assert_eq!(tween.get_id(), 42);
        assert_eq!(
            tween.to_string(),
            "Tween [duration=2s, elapsed=0s, easing=Linear, loops=None(0)]"
        );
    }

    #[test]
    fn test_invalid_duration() {
        for duration in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = Tween::new(|| 0.0f32, || 10.0, duration, lerp, true);
            assert!(
                matches!(result, Err(Error::InvalidDuration { .. })),
                "Duration {} is rejected",
                duration
            );
        }
    }

    #[test]
    fn test_update_interpolates() {
        let (tween, values) = create_tween(2.0, true);
        let (completed, on_complete) = counter();
        tween.on_complete(on_complete);

        tween.update(1.0);
        assert_eq!(values.lock().len(), 1);
        assert!((values.lock()[0] - 5.0).abs() < 0.01);
        assert_eq!(completed.load(Ordering::SeqCst), 0);
        assert!((tween.get_progress() - 0.5).abs() < f32::EPSILON);

        tween.update(1.0);
        assert_eq!(*values.lock(), vec![5.0, 10.0]);
        assert_eq!(completed.load(Ordering::SeqCst), 1);
        assert!(!tween.is_running());

        // No more updates once finished.
        tween.update(1.0);
        assert_eq!(values.lock().len(), 2);
        assert_eq!(completed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_update_overshoot_is_clamped() {
        let (tween, values) = create_tween(1.0, true);
        tween.update(5.0);
        assert_eq!(*values.lock(), vec![10.0]);
        assert_eq!(tween.get_elapsed(), 1.0);
        assert!(!tween.is_running());
    }

    #[test]
    fn test_update_with_easing() {
        let (tween, values) = create_tween(1.0, true);
        tween.set_ease(Easing::QuadIn).unwrap();
        tween.update(0.5);
        assert!((values.lock()[0] - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_update_requires_play() {
        let (tween, values) = create_tween(1.0, false);
        tween.update(0.5);
        assert!(values.lock().is_empty());

        tween.play();
        assert!(tween.is_playing());
        tween.update(0.5);
        assert_eq!(*values.lock(), vec![5.0]);
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let (tween, values) = create_tween(1.0, true);
        tween.update(0.5);
        tween.update(-10.0);
        assert_eq!(tween.get_elapsed(), 0.5);
        assert_eq!(*values.lock(), vec![5.0, 5.0]);
    }

    #[test]
    fn test_values_are_captured_on_play() {
        let source = Arc::new(Mutex::new(0.0f32));
        let moved_source = source.clone();
        let tween = Tween::new(move || *moved_source.lock(), || 10.0, 1.0, lerp, false).unwrap();
        let values = Arc::new(Mutex::new(vec![]));
        let moved_values = values.clone();
        tween.on_update(move |value: f32| moved_values.lock().push(value));

        // The source changes between configuration and play: the play-time value is used.
        *source.lock() = 4.0;
        tween.play();
        tween.update(0.5);
        assert_eq!(*values.lock(), vec![7.0]);
    }

    #[test]
    fn test_resume_does_not_capture_values() {
        let source = Arc::new(Mutex::new(0.0f32));
        let moved_source = source.clone();
        let tween = Tween::new(move || *moved_source.lock(), || 10.0, 1.0, lerp, true).unwrap();
        let values = Arc::new(Mutex::new(vec![]));
        let moved_values = values.clone();
        tween.on_update(move |value: f32| moved_values.lock().push(value));

        tween.update(0.5);
        tween.pause();
        assert!(!tween.is_playing());
        tween.update(0.25);
        assert_eq!(tween.get_elapsed(), 0.5, "Paused tween does not advance.");

        *source.lock() = 100.0;
        tween.play();
        tween.update(0.25);
        assert_eq!(*values.lock(), vec![5.0, 7.5]);
    }

    #[test]
    fn test_stop_without_complete() {
        let (tween, values) = create_tween(2.0, true);
        let (stopped, on_stop) = counter();
        let (completed, on_complete) = counter();
        tween.on_stop(on_stop).on_complete(on_complete);

        tween.stop(false);
        tween.update(1.0);
        assert!(values.lock().is_empty());
        assert!(!tween.is_running());
        assert_eq!(stopped.load(Ordering::SeqCst), 1);
        assert_eq!(completed.load(Ordering::SeqCst), 0);

        // Stopping twice does not call the listeners twice.
        tween.stop(false);
        assert_eq!(stopped.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stop_with_complete() {
        let (tween, values) = create_tween(2.0, true);
        let (stopped, on_stop) = counter();
        let (completed, on_complete) = counter();
        tween.on_stop(on_stop).on_complete(on_complete);

        tween.update(0.5);
        tween.stop(true);
        assert_eq!(*values.lock(), vec![2.5, 10.0]);
        assert_eq!(completed.load(Ordering::SeqCst), 1);
        assert_eq!(stopped.load(Ordering::SeqCst), 0);
        assert_eq!(tween.get_elapsed(), 2.0);
    }

    #[test]
    fn test_stop_with_complete_before_play() {
        let (tween, values) = create_tween(2.0, false);
        tween.stop(true);
        assert_eq!(*values.lock(), vec![10.0], "End value is captured when needed.");
    }

    #[test]
    fn test_restart_loops() {
        let (tween, values) = create_tween(1.0, true);
        let (completed, on_complete) = counter();
        tween.on_complete(on_complete);
        tween.set_loops(LoopType::Restart, 2).unwrap();

        for _ in 0..3 {
            tween.update(0.5);
            tween.update(0.5);
        }
        assert_eq!(*values.lock(), vec![5.0, 0.0, 5.0, 0.0, 5.0, 10.0]);
        assert_eq!(tween.get_completed_loops(), 2);
        assert_eq!(completed.load(Ordering::SeqCst), 1);
        assert!(!tween.is_running());
    }

    #[test]
    fn test_yoyo_loops() {
        let (tween, values) = create_tween(1.0, true);
        tween.set_loops(LoopType::Yoyo, 1).unwrap();

        tween.update(0.5);
        tween.update(0.5); // Loops: start and end are swapped.
        tween.update(0.5);
        tween.update(0.5); // Finishes.
        assert_eq!(*values.lock(), vec![5.0, 10.0, 5.0, 0.0]);
        assert!(!tween.is_running());
    }

    #[test]
    fn test_infinite_loops() {
        let (tween, _) = create_tween(0.1, true);
        let (completed, on_complete) = counter();
        tween.on_complete(on_complete);
        tween.set_loops(LoopType::Restart, -1).unwrap();

        for _ in 0..10_000 {
            tween.update(0.25);
        }
        assert!(tween.is_running());
        assert_eq!(tween.get_completed_loops(), 10_000);
        assert_eq!(completed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_invalid_loop_count() {
        let (tween, _) = create_tween(1.0, true);
        let result = tween.set_loops(LoopType::Restart, -2);
        assert!(matches!(result, Err(Error::InvalidLoopCount { count: -2 })));
        assert_eq!(tween.get_loop_type(), LoopType::None);
    }

    #[test]
    fn test_reset() {
        let (tween, values) = create_tween(1.0, true);
        tween.set_id(7);
        tween.set_ease(Easing::BounceOut).unwrap();
        tween.set_loops(LoopType::Yoyo, 3).unwrap();
        tween.on_complete(|| {});
        tween.update(0.5);

        tween.reset();
        let once = format!("{:?}", tween);
        tween.reset();
        assert_eq!(format!("{:?}", tween), once, "Reset is idempotent.");

        assert_eq!(tween.get_id(), -1);
        assert_eq!(tween.get_elapsed(), 0.0);
        assert_eq!(tween.get_easing(), Easing::Linear);
        assert_eq!(tween.get_loop_type(), LoopType::None);
        assert_eq!(tween.get_loop_count(), 0);
        assert!(!tween.is_running());
        assert!(tween.inner.on_update.is_empty());
        assert!(tween.inner.on_complete.is_empty());
        assert!(tween.inner.on_stop.is_empty());

        // A reset tween does nothing until configured again.
        tween.play();
        tween.update(0.5);
        assert_eq!(values.lock().len(), 1);
    }

    #[test]
    fn test_nest() {
        let (tween, values) = create_tween(1.0, true);
        tween.update(0.5);
        tween.nest();
        assert!(tween.is_nested());
        assert!(!tween.is_playing());
        assert_eq!(tween.get_elapsed(), 0.0);

        tween.play();
        tween.update(0.25);
        assert_eq!(*values.lock(), vec![5.0, 2.5]);
    }

    #[test]
    fn test_callbacks_may_use_the_tween() {
        let tween = Tween::new(|| 0.0f32, || 10.0, 1.0, lerp, true).unwrap();
        let moved_tween = tween.clone();
        tween.on_update(move |value: f32| {
            if value >= 5.0 {
                moved_tween.stop(false);
            }
        });

        tween.update(0.6);
        assert!(!tween.is_running());
    }

    #[test]
    fn test_complete_from_update_listener() {
        let tween = Tween::new(|| 0.0f32, || 10.0, 1.0, lerp, true).unwrap();
        let moved_tween = tween.clone();
        tween.on_update(move |value: f32| {
            if value >= 5.0 {
                moved_tween.stop(true);
            }
        });
        let values = Arc::new(Mutex::new(vec![]));
        let moved_values = values.clone();
        tween.on_update(move |value| moved_values.lock().push(value));
        let (completed, on_complete) = counter();
        tween.on_complete(on_complete);

        tween.update(0.5);
        assert_eq!(*values.lock(), vec![5.0, 10.0], "The end value reaches every listener.");
        assert_eq!(completed.load(Ordering::SeqCst), 1);
        assert!(!tween.is_running());
    }

    #[test]
    fn test_handles() {
        let tween = Tween::new(|| 0u8, || 255, 1.0, lerp, true).unwrap();
        let other = tween.clone();
        assert!(tween.ptr_eq(&other));
        assert_eq!(tween.key(), other.key());

        let different = Tween::new(|| 0u8, || 255, 1.0, lerp, true).unwrap();
        assert!(!tween.ptr_eq(&different));
        assert_ne!(tween.key(), different.key());
    }
}
