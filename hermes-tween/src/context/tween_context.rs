use std::fmt::{Debug, Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, trace};
use parking_lot::Mutex;

use crate::animations::{Animation, Sequence, Tween};
use crate::context::TweenPool;
use crate::errors::Error;

/// Hands a retired animation back to its typed free-list.
type Release = Box<dyn FnOnce(&mut TweenPool) + Send>;

/// A live animation and its pending-removal mark.
struct LiveEntry {
    animation: Arc<dyn Animation>,
    retired: Arc<AtomicBool>,
    /// Set by `update()` once the animation is done: removed at the end of that update.
    removable: bool,
    release: Option<Release>,
}

/// The handles visited by one `update()`.
type Visit = Vec<(Arc<dyn Animation>, Arc<AtomicBool>)>;

struct ContextInner {
    entries: Mutex<Vec<LiveEntry>>,
    /// Reused by `update()` from one frame to the next.
    scratch: Mutex<Visit>,
    pool: Option<Mutex<TweenPool>>,
}

/// Represents the registry of the live animations, driven once per frame by [`TweenContext::update()`].
///
/// - Tweens and sequences are created through the context, which recycles them through a
///   [`TweenPool`] once they are done (unless created with [`TweenContext::without_pool()`]).
/// - A finished or stopped animation leaves the registry on the next update.
/// - Animations added to a sequence stay live (so [`TweenContext::stop()`] reaches them) but are
///   only driven by their sequence.
/// - The context is a handle: clones share the same registry, so callbacks may capture it.
///
/// Finished animations are reset and reused: do not keep using a handle after its animation
/// completed or was stopped.
///
/// # Example
/// ```
/// use hermes_tween::context::TweenContext;
/// use hermes_tween::utils::lerp;
///
/// let context = TweenContext::new();
/// let tween = context.create_tween(|| 0.0f32, || 100.0, 1.0, lerp, true).unwrap();
/// tween.on_update(|value| println!("Value: {}", value));
///
/// // Typically called by the host frame loop.
/// for _ in 0..70 {
///     context.update(1.0 / 60.0);
/// }
/// assert!(context.is_empty());
/// ```
#[derive(Clone)]
pub struct TweenContext {
    inner: Arc<ContextInner>,
}

impl Default for TweenContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TweenContext {
    /// Creates a context recycling its animations through a pool.
    pub fn new() -> Self {
        Self::build(Some(TweenPool::default()))
    }

    /// Creates a context allocating a new instance for every created animation.
    pub fn without_pool() -> Self {
        Self::build(None)
    }

    fn build(pool: Option<TweenPool>) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                entries: Mutex::new(vec![]),
                scratch: Mutex::new(vec![]),
                pool: pool.map(Mutex::new),
            }),
        }
    }

    /// Creates a live tween: see [`Tween::new()`] for the arguments.
    ///
    /// # Errors
    /// [`Error::InvalidDuration`] if the duration is not strictly positive.
    pub fn create_tween<T, S, E, L>(
        &self,
        start: S,
        end: E,
        duration: f32,
        lerp: L,
        auto_play: bool,
    ) -> Result<Tween<T>, Error>
    where
        T: Clone + Send + 'static,
        S: Fn() -> T + Send + Sync + 'static,
        E: Fn() -> T + Send + Sync + 'static,
        L: Fn(&T, &T, f32) -> T + Send + Sync + 'static,
    {
        let tween = match &self.inner.pool {
            Some(pool) => pool.lock().acquire::<T>(),
            None => Tween::default(),
        };

        if let Err(error) = tween.configure(start, end, duration, lerp, auto_play) {
            if let Some(pool) = &self.inner.pool {
                pool.lock().release(tween);
            }
            return Err(error);
        }

        let pooled = tween.clone();
        self.register(
            Arc::new(tween.clone()),
            Box::new(move |pool: &mut TweenPool| pool.release(pooled)),
        );
        debug!("Tween created: {}", tween);
        Ok(tween)
    }

    /// Creates a live (empty) sequence.
    pub fn create_sequence(&self, auto_play: bool) -> Sequence {
        let sequence = match &self.inner.pool {
            Some(pool) => pool.lock().acquire_sequence(),
            None => Sequence::new(auto_play),
        };
        sequence.configure(auto_play);

        let pooled = sequence.clone();
        self.register(
            Arc::new(sequence.clone()),
            Box::new(move |pool: &mut TweenPool| pool.release_sequence(pooled)),
        );
        debug!("Sequence created (auto_play={})", auto_play);
        sequence
    }

    /// Stops (without completing) the first live animation with the given id, sequence children
    /// included. Unknown ids (and -1) are ignored.
    pub fn stop(&self, id: i32) {
        if id == -1 {
            return;
        }
        let found = self
            .snapshot()
            .into_iter()
            .find(|animation| animation.get_id() == id);
        if let Some(animation) = found {
            debug!("Stopping animation [id={}]", id);
            animation.stop(false);
        }
    }

    /// Stops (without completing) every live animation.
    pub fn stop_all(&self) {
        for animation in self.snapshot() {
            animation.stop(false);
        }
    }

    /// Advances every live animation by `delta` seconds.
    ///
    /// Animations are visited in reverse creation order. Finished or stopped animations are
    /// removed (and pooled) instead of being updated. Animations owned by a sequence are left to
    /// it. Animations created while updating are updated from the next call on.
    pub fn update(&self, delta: f32) {
        let mut visit = std::mem::take(&mut *self.inner.scratch.lock());
        visit.extend(
            self.inner
                .entries
                .lock()
                .iter()
                .map(|entry| (entry.animation.clone(), entry.retired.clone())),
        );

        let mut removable = false;
        for (index, (animation, retired)) in visit.iter().enumerate().rev() {
            if retired.load(Ordering::SeqCst) || !animation.is_running() {
                // Entries are only removed below: the index is still the one of the visit.
                let mut entries = self.inner.entries.lock();
                if let Some(entry) = entries
                    .get_mut(index)
                    .filter(|entry| entry.animation.key() == animation.key())
                {
                    entry.removable = true;
                    removable = true;
                }
            } else if !animation.is_nested() {
                animation.update(delta);
            }
        }

        visit.clear();
        *self.inner.scratch.lock() = visit;
        if removable {
            self.retire();
        }
    }

    /// Returns the number of live animations.
    pub fn len(&self) -> usize {
        self.inner.entries.lock().len()
    }

    /// Indicates if no animation is live.
    pub fn is_empty(&self) -> bool {
        self.inner.entries.lock().is_empty()
    }

    /// Indicates if the context recycles its animations.
    pub fn is_pooled(&self) -> bool {
        self.inner.pool.is_some()
    }

    /// Adds the animation to the live list, with hooks marking it for removal once done.
    fn register(&self, animation: Arc<dyn Animation>, release: Release) {
        let retired = Arc::new(AtomicBool::new(false));
        let on_complete = retired.clone();
        animation.set_on_complete(Box::new(move || on_complete.store(true, Ordering::SeqCst)));
        let on_stop = retired.clone();
        animation.set_on_stop(Box::new(move || on_stop.store(true, Ordering::SeqCst)));

        self.inner.entries.lock().push(LiveEntry {
            animation,
            retired,
            removable: false,
            release: Some(release),
        });
    }

    /// Removes the entries marked by `update()` and hands them back to the pool.
    fn retire(&self) {
        let mut released = vec![];
        self.inner.entries.lock().retain_mut(|entry| {
            if entry.removable {
                trace!("Animation retired: {:?}", entry.animation);
                released.extend(entry.release.take());
            }
            !entry.removable
        });

        if let Some(pool) = &self.inner.pool {
            let mut pool = pool.lock();
            for release in released {
                release(&mut pool);
            }
        }
    }

    fn snapshot(&self) -> Vec<Arc<dyn Animation>> {
        self.inner
            .entries
            .lock()
            .iter()
            .map(|entry| entry.animation.clone())
            .collect()
    }
}

impl Debug for TweenContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenContext")
            .field("live", &self.len())
            .field("pool", &self.inner.pool.as_ref().map(|pool| format!("{:?}", pool.lock())))
            .finish()
    }
}

impl Display for TweenContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TweenContext [live={}, pooled={}]",
            self.len(),
            self.is_pooled()
        )
    }
}
