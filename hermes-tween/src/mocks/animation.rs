use std::fmt::{Display, Formatter};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::animations::{Animation, Callback, Easing, LoopType};
use crate::errors::Error;
use crate::utils::Listeners;

#[derive(Debug)]
struct MockState {
    id: i32,
    duration: f32,
    running: bool,
    playing: bool,
    nested: bool,
    updates: Vec<f32>,
    calls: Vec<String>,
}

/// Mock [`Animation`] for testing purposes.
///
/// The mock never completes by itself: it records the calls it receives (and the deltas of the
/// updates received while playing) and is finished through `stop()`.
#[derive(Clone, Debug)]
pub struct MockAnimation {
    state: Arc<Mutex<MockState>>,
    on_complete: Arc<Listeners<()>>,
    on_stop: Arc<Listeners<()>>,
}

impl MockAnimation {
    /// Creates a running (but paused) mock of the given duration.
    pub fn new(duration: f32) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                id: -1,
                duration,
                running: true,
                playing: false,
                nested: false,
                updates: vec![],
                calls: vec![],
            })),
            on_complete: Default::default(),
            on_stop: Default::default(),
        }
    }

    /// Returns the deltas received by `update()` while playing.
    pub fn get_updates(&self) -> Vec<f32> {
        self.state.lock().updates.clone()
    }

    /// Returns the names of the methods called so far (`play`, `pause`, `stop`, `complete`, `reset`).
    pub fn get_calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    fn record(&self, call: &str) {
        self.state.lock().calls.push(String::from(call));
    }
}

impl Display for MockAnimation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        write!(
            f,
            "MockAnimation [duration={}s, updates={}]",
            state.duration,
            state.updates.len()
        )
    }
}

impl Animation for MockAnimation {
    fn get_id(&self) -> i32 {
        self.state.lock().id
    }

    fn set_id(&self, id: i32) {
        self.state.lock().id = id;
    }

    fn get_duration(&self) -> f32 {
        self.state.lock().duration
    }

    fn is_running(&self) -> bool {
        self.state.lock().running
    }

    fn is_playing(&self) -> bool {
        self.state.lock().playing
    }

    fn play(&self) {
        self.record("play");
        let mut state = self.state.lock();
        if state.running {
            state.playing = true;
        }
    }

    fn pause(&self) {
        self.record("pause");
        self.state.lock().playing = false;
    }

    fn stop(&self, complete: bool) {
        {
            let mut state = self.state.lock();
            if !state.running {
                return;
            }
            state.running = false;
        }
        match complete {
            true => {
                self.record("complete");
                self.on_complete.emit(());
            }
            false => {
                self.record("stop");
                self.on_stop.emit(());
            }
        }
    }

    fn update(&self, delta: f32) {
        let mut state = self.state.lock();
        if state.running && state.playing {
            state.updates.push(delta);
        }
    }

    fn reset(&self) {
        self.record("reset");
        let mut state = self.state.lock();
        state.id = -1;
        state.running = false;
        state.playing = false;
        state.nested = false;
        state.updates.clear();
        drop(state);
        self.on_complete.clear();
        self.on_stop.clear();
    }

    fn set_ease(&self, _: Easing) -> Result<(), Error> {
        Ok(())
    }

    fn set_loops(&self, _: LoopType, _: i32) -> Result<(), Error> {
        Ok(())
    }

    fn set_on_complete(&self, mut callback: Callback) {
        self.on_complete.add(move |_| callback());
    }

    fn set_on_stop(&self, mut callback: Callback) {
        self.on_stop.add(move |_| callback());
    }

    fn nest(&self) {
        let mut state = self.state.lock();
        state.nested = true;
        state.playing = false;
    }

    fn is_nested(&self) -> bool {
        self.state.lock().nested
    }

    fn key(&self) -> usize {
        Arc::as_ptr(&self.state) as *const () as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_animation() {
        let mock = MockAnimation::new(2.0);
        assert!(mock.is_running());
        assert!(!mock.is_playing());
        assert_eq!(mock.to_string(), "MockAnimation [duration=2s, updates=0]");

        mock.update(0.5);
        mock.play();
        mock.update(0.5);
        mock.stop(false);
        mock.update(0.5);
        mock.stop(true);
        assert_eq!(mock.get_updates(), vec![0.5]);
        assert_eq!(mock.get_calls(), vec!["play", "stop"]);
        assert!(!mock.is_running());
    }
}
