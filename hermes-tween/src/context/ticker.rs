use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use parking_lot::RwLock;
use tokio::time::{Instant, MissedTickBehavior};

use crate::context::TweenContext;
use crate::errors::{Error, InvalidFps};
use crate::utils::task;
use crate::utils::task::TaskHandler;

/// Represents a frame loop driving a [`TweenContext`] from a tokio task.
///
/// Useful for hosts without a frame loop of their own: the ticker calls
/// [`TweenContext::update()`] at the given frame rate with the measured elapsed time.
/// - The desired `fps` is not guaranteed to be reached (specially high values).
/// - Late frames are skipped: the next update receives the whole elapsed time.
///
/// # Example
/// ```
/// use hermes_tween::context::{Ticker, TweenContext};
/// use hermes_tween::pause;
/// use hermes_tween::utils::lerp;
///
/// #[tokio::main]
/// async fn main() {
///     let context = TweenContext::new();
///     let ticker = Ticker::new(context.clone()).set_fps(30).unwrap();
///     ticker.start().unwrap();
///
///     context
///         .create_tween(|| 0.0f32, || 1.0, 0.2, lerp, true)
///         .unwrap()
///         .on_update(|value| println!("Value: {}", value));
///
///     pause!(500);
///     ticker.stop();
///     assert!(context.is_empty());
/// }
/// ```
#[derive(Clone)]
pub struct Ticker {
    context: TweenContext,
    /// The number of frames per second (default: 60fps).
    fps: u8,
    running: Arc<AtomicBool>,
    interval: Arc<RwLock<Option<TaskHandler>>>,
}

impl Ticker {
    /// Creates a (stopped) ticker for the given context.
    pub fn new(context: TweenContext) -> Self {
        Self {
            context,
            fps: 60,
            running: Arc::new(AtomicBool::new(false)),
            interval: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the frame rate.
    pub fn get_fps(&self) -> u8 {
        self.fps
    }

    /// Sets the frame rate (applies on the next `start()`).
    ///
    /// # Errors
    /// [`Error::InvalidFps`] if `fps` is 0.
    pub fn set_fps(mut self, fps: u8) -> Result<Self, Error> {
        if fps == 0 {
            return Err(InvalidFps);
        }
        self.fps = fps;
        Ok(self)
    }

    /// Starts updating the context in a background task. Does nothing if already running.
    ///
    /// # Errors
    /// [`Error::RuntimeError`] if called outside a tokio runtime.
    pub fn start(&self) -> Result<(), Error> {
        if self.is_running() {
            return Ok(());
        }

        let context = self.context.clone();
        let running = self.running.clone();
        let period = Duration::from_secs_f32(1.0 / self.fps as f32);

        running.store(true, Ordering::SeqCst);
        let handler = task::run(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut last_frame = Instant::now();

            while running.load(Ordering::SeqCst) {
                interval.tick().await;
                let now = Instant::now();
                context.update(now.duration_since(last_frame).as_secs_f32());
                last_frame = now;
            }
        });

        match handler {
            Ok(handler) => {
                debug!("Ticker started [fps={}]", self.fps);
                *self.interval.write() = Some(handler);
                Ok(())
            }
            Err(error) => {
                self.running.store(false, Ordering::SeqCst);
                Err(error)
            }
        }
    }

    /// Stops the background task: the context is no longer updated.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handler) = self.interval.write().take() {
            handler.abort();
            debug!("Ticker stopped");
        }
    }

    /// Indicates if the ticker is currently updating its context.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ticker [fps={}, running={}, context={}]",
            self.fps,
            self.is_running(),
            self.context
        )
    }
}
