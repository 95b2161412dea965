use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use log::debug;
use parking_lot::{Mutex, MutexGuard};

use crate::animations::{Animation, Callback, Easing, LoopType};
use crate::errors::{Error, InvalidDuration, NoPreviousEntry, UnsupportedOnSequence};
use crate::utils::Listeners;

enum EntryAction {
    Animation(Arc<dyn Animation>),
    Callback(Callback),
}

/// A scheduled action and its trigger time (in seconds from the start of the sequence).
struct SequenceEntry {
    trigger: f32,
    action: EntryAction,
    /// Whether the child animation was started.
    fired: bool,
}

/// An entry reaching its trigger time during an update.
enum DueEntry {
    Play {
        trigger: f32,
        child: Arc<dyn Animation>,
        overshoot: f32,
    },
    Call {
        trigger: f32,
        callback: Callback,
    },
}

impl DueEntry {
    fn trigger(&self) -> f32 {
        match self {
            DueEntry::Play { trigger, .. } => *trigger,
            DueEntry::Call { trigger, .. } => *trigger,
        }
    }
}

struct SequenceState {
    id: i32,
    /// Total duration: also the cursor where the next sequential entry is scheduled.
    duration: f32,
    elapsed: f32,
    running: bool,
    playing: bool,
    nested: bool,
    pooled: bool,
    /// Trigger time of the last sequential entry, used by parallel entries.
    last_trigger: Option<f32>,
    entries: Vec<SequenceEntry>,
    /// Buffers reused from one update to the next.
    active: Vec<Arc<dyn Animation>>,
    due: Vec<DueEntry>,
}

impl Default for SequenceState {
    fn default() -> Self {
        Self {
            id: -1,
            duration: 0.0,
            elapsed: 0.0,
            running: false,
            playing: false,
            nested: false,
            pooled: false,
            last_trigger: None,
            entries: vec![],
            active: vec![],
            due: vec![],
        }
    }
}

struct SequenceInner {
    state: Mutex<SequenceState>,
    on_complete: Listeners<()>,
    on_stop: Listeners<()>,
}

/// Represents a timeline of animations and callbacks.
///
/// - [`Sequence::then()`] appends an animation after the previous sequential one.
/// - [`Sequence::with()`] starts an animation at the same time as the previous sequential one.
/// - [`Sequence::wait()`] inserts a pause.
/// - [`Sequence::callback()`] calls a closure at the current position of the timeline.
///
/// Children are driven by the sequence: adding one pauses and rewinds it. The sequence is itself
/// an [`Animation`] and may therefore be nested in another sequence.
///
/// A `Sequence` is a handle: clones share the same sequence.
///
/// # Example
/// ```
/// use hermes_tween::animations::{Animation, Sequence, Tween};
/// use hermes_tween::utils::lerp;
///
/// let fade_in = Tween::new(|| 0.0f32, || 1.0, 1.0, lerp, false).unwrap();
/// let grow = Tween::new(|| 1.0f32, || 2.0, 0.5, lerp, false).unwrap();
/// let fade_out = Tween::new(|| 1.0f32, || 0.0, 1.0, lerp, false).unwrap();
///
/// let sequence = Sequence::new(true);
/// sequence.then(&fade_in).with(&grow).unwrap();
/// sequence.wait(0.5).unwrap().then(&fade_out);
/// sequence.callback(|| println!("Done"));
/// assert_eq!(sequence.get_duration(), 2.5);
///
/// for _ in 0..30 {
///     sequence.update(0.1);
/// }
/// assert!(!sequence.is_running());
/// ```
#[derive(Clone)]
pub struct Sequence {
    inner: Arc<SequenceInner>,
}

impl Default for Sequence {
    /// Creates a running and playing empty sequence.
    fn default() -> Self {
        Self::new(true)
    }
}

impl Sequence {
    /// Creates a new running empty sequence.
    ///
    /// # Arguments
    /// * `auto_play` - Whether the sequence advances right away or waits for `play()`.
    pub fn new(auto_play: bool) -> Self {
        let sequence = Self {
            inner: Arc::new(SequenceInner {
                state: Mutex::new(SequenceState::default()),
                on_complete: Default::default(),
                on_stop: Default::default(),
            }),
        };
        sequence.configure(auto_play);
        sequence
    }

    /// Prepares a (fresh or reset) sequence to be built and run.
    pub fn configure(&self, auto_play: bool) {
        let mut state = self.state();
        state.running = true;
        state.playing = auto_play;
        state.elapsed = 0.0;
    }

    /// Appends an animation after the previous sequential entry.
    /// The total duration grows by the animation duration.
    pub fn then<A: Animation + Clone + 'static>(&self, animation: &A) -> &Self {
        animation.nest();
        let duration = animation.get_duration();

        let mut state = self.state();
        let trigger = state.duration;
        state.last_trigger = Some(trigger);
        state.duration += duration;
        state.entries.push(SequenceEntry {
            trigger,
            action: EntryAction::Animation(Arc::new(animation.clone())),
            fired: false,
        });
        self
    }

    /// Adds an animation starting together with the previous sequential entry.
    /// The total duration is left unchanged.
    ///
    /// # Errors
    /// [`Error::NoPreviousEntry`] if no sequential entry was added before.
    pub fn with<A: Animation + Clone + 'static>(&self, animation: &A) -> Result<&Self, Error> {
        let trigger = self.state().last_trigger.ok_or(NoPreviousEntry)?;
        animation.nest();

        self.state().entries.push(SequenceEntry {
            trigger,
            action: EntryAction::Animation(Arc::new(animation.clone())),
            fired: false,
        });
        Ok(self)
    }

    /// Inserts a pause of `duration` seconds.
    ///
    /// # Errors
    /// [`Error::InvalidDuration`] if the duration is negative.
    pub fn wait(&self, duration: f32) -> Result<&Self, Error> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(InvalidDuration {
                duration,
                context: "sequence wait",
            });
        }
        self.state().duration += duration;
        Ok(self)
    }

    /// Schedules a callback at the current position of the timeline.
    pub fn callback<F>(&self, callback: F) -> &Self
    where
        F: FnMut() + Send + 'static,
    {
        let mut state = self.state();
        let trigger = state.duration;
        state.entries.push(SequenceEntry {
            trigger,
            action: EntryAction::Callback(Box::new(callback)),
            fired: false,
        });
        self
    }

    /// Registers a callback called when the sequence completes.
    pub fn on_complete<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut() + Send + 'static,
    {
        self.inner.on_complete.add(move |_| callback());
        self
    }

    /// Registers a callback called when the sequence is stopped before completion.
    pub fn on_stop<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut() + Send + 'static,
    {
        self.inner.on_stop.add(move |_| callback());
        self
    }

    /// Returns the elapsed time (in seconds) since the sequence started.
    pub fn get_elapsed(&self) -> f32 {
        self.state().elapsed
    }

    /// Returns the number of entries not done yet.
    pub fn get_entry_count(&self) -> usize {
        self.state().entries.len()
    }

    /// Indicates if both handles point to the same sequence.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn is_pooled(&self) -> bool {
        self.state().pooled
    }

    pub(crate) fn set_pooled(&self, pooled: bool) {
        self.state().pooled = pooled;
    }

    fn state(&self) -> MutexGuard<'_, SequenceState> {
        self.inner.state.lock()
    }

    /// Splits the pending entries between started children and entries reaching their trigger.
    ///
    /// Children no longer driven by the sequence (stopped from outside, or reset) are dropped.
    fn collect_entries(
        state: &mut SequenceState,
        active: &mut Vec<Arc<dyn Animation>>,
        due: &mut Vec<DueEntry>,
    ) {
        let elapsed = state.elapsed;
        state.entries.retain_mut(|entry| {
            let is_due = elapsed >= entry.trigger;
            match &mut entry.action {
                EntryAction::Animation(child) => {
                    if !Self::is_driven(child) {
                        return false;
                    }
                    if entry.fired {
                        active.push(child.clone());
                    } else if is_due {
                        due.push(DueEntry::Play {
                            trigger: entry.trigger,
                            child: child.clone(),
                            overshoot: elapsed - entry.trigger,
                        });
                        entry.fired = true;
                    }
                    true
                }
                EntryAction::Callback(callback) if is_due => {
                    // The entry is dropped: leave a no-op behind.
                    due.push(DueEntry::Call {
                        trigger: entry.trigger,
                        callback: std::mem::replace(callback, Box::new(|| {}) as Callback),
                    });
                    false
                }
                EntryAction::Callback(_) => true,
            }
        });
        due.sort_by(|a, b| a.trigger().total_cmp(&b.trigger()));
    }

    /// Indicates if the child is still ours to drive: a reset child loses its nested flag.
    fn is_driven(child: &Arc<dyn Animation>) -> bool {
        child.is_nested() && child.is_running()
    }
}

impl Animation for Sequence {
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

    fn play(&self) {
        let mut state = self.state();
        if state.running {
            state.playing = true;
        }
    }

    fn pause(&self) {
        self.state().playing = false;
    }

    /// Stops the sequence and the children still running.
    ///
    /// - `complete = false`: running children are stopped, pending callbacks are dropped.
    /// - `complete = true`: running children are completed and pending callbacks are called,
    ///   in timeline order.
    fn stop(&self, complete: bool) {
        let mut entries = {
            let mut state = self.state();
            if !state.running {
                return;
            }
            state.running = false;
            if complete {
                state.elapsed = state.duration;
            }
            std::mem::take(&mut state.entries)
        };
        debug!("Sequence stopped [complete={}]", complete);
        entries.sort_by(|a, b| a.trigger.total_cmp(&b.trigger));

        for entry in entries {
            match entry.action {
                EntryAction::Animation(child) => {
                    if child.is_running() {
                        child.stop(complete);
                    }
                }
                EntryAction::Callback(mut callback) => {
                    if complete {
                        callback();
                    }
                }
            }
        }

        match complete {
            true => self.inner.on_complete.emit(()),
            false => self.inner.on_stop.emit(()),
        }
    }

    fn update(&self, delta: f32) {
        let delta = delta.max(0.0);
        let (mut active, mut due) = {
            let mut state = self.state();
            if !state.running || !state.playing {
                return;
            }
            state.elapsed += delta;
            let mut active = std::mem::take(&mut state.active);
            let mut due = std::mem::take(&mut state.due);
            Self::collect_entries(&mut state, &mut active, &mut due);
            (active, due)
        };

        for child in &active {
            child.update(delta);
        }
        for entry in due.drain(..) {
            match entry {
                DueEntry::Play {
                    child, overshoot, ..
                } => {
                    child.play();
                    child.update(overshoot);
                }
                DueEntry::Call { mut callback, .. } => callback(),
            }
        }
        active.clear();

        let completed = {
            let mut state = self.state();
            state.active = active;
            state.due = due;
            if !state.running {
                // Stopped from a callback or a child listener.
                return;
            }
            state
                .entries
                .retain(|entry| match &entry.action {
                    EntryAction::Animation(child) => !entry.fired || Self::is_driven(child),
                    EntryAction::Callback(_) => true,
                });
            let completed = state.entries.is_empty() && state.elapsed >= state.duration;
            if completed {
                state.running = false;
            }
            completed
        };

        if completed {
            debug!("Sequence completed");
            self.inner.on_complete.emit(());
        }
    }

    fn reset(&self) {
        {
            let mut state = self.state();
            let pooled = state.pooled;
            *state = SequenceState::default();
            state.pooled = pooled;
        }
        self.inner.on_complete.clear();
        self.inner.on_stop.clear();
    }

    fn set_ease(&self, _: Easing) -> Result<(), Error> {
        Err(UnsupportedOnSequence {
            operation: "set_ease",
        })
    }

    fn set_loops(&self, _: LoopType, _: i32) -> Result<(), Error> {
        Err(UnsupportedOnSequence {
            operation: "set_loops",
        })
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
        state.elapsed = 0.0;
    }

    fn is_nested(&self) -> bool {
        self.state().nested
    }

    fn key(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("Sequence")
            .field("id", &state.id)
            .field("duration", &state.duration)
            .field("elapsed", &state.elapsed)
            .field("entries", &state.entries.len())
            .field("running", &state.running)
            .field("playing", &state.playing)
            .finish()
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.lock();
        write!(
            f,
            "Sequence [duration={}s, entries={}]",
            state.duration,
            state.entries.len()
        )
    }
}
