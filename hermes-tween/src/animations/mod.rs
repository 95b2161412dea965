//! Defines the animations: tweens interpolating a value over time and sequences orchestrating them.

mod animation;
mod easing;
mod sequence;
mod tween;

pub use animation::{Animation, Callback, LoopType};
pub use easing::Easing;
pub use sequence::Sequence;
pub use tween::Tween;
