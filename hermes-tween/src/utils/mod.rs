pub use tokio;

pub use events::Listeners;
pub use lerp::{lerp, Lerp};

pub mod events;
pub mod lerp;
pub mod task;
