//! Defines the context driving the live animations: registry, pool and optional frame loop.

mod pool;
mod ticker;
mod tween_context;

pub use pool::TweenPool;
pub use ticker::Ticker;
pub use tween_context::TweenContext;
