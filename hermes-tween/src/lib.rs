#![doc(html_root_url = "https://docs.rs/hermes-tween/0.1.0-beta")]

//! <h1 align="center">HERMES-TWEEN - Frame-driven tweening for Rust</h1>
//! <div style="text-align:center;font-style:italic;">Hermes-Tween interpolates values over time, one frame at a time.</div>
//! <br/>
//!
//! # Documentation
//!
//! This is the API documentation.<br/>
//! To see the code in action, visit the [examples](https://github.com/dclause/hermes-tween/tree/develop/hermes-tween/examples) directory.
//!
//! # Features
//!
//! **Hermes-Tween** is a Rust library to animate any value (numbers, vectors, colors, etc.) from a start to an end value
//! over a given duration. It does not own any clock: the host (a game loop, a UI loop, a robot control loop, etc.) advances
//! everything by calling `update(delta)` once per frame.
//!
//! - Create [`Tween`](animations::Tween)s of any value type, shaped by an [`Easing`](animations::Easing) function, with optional [`LoopType`](animations::LoopType)
//! - Orchestrate animations and callbacks over time with [`Sequence`](animations::Sequence)s (sequential, parallel, waits)
//! - Register and drive all live animations from a single [`TweenContext`](context::TweenContext), which recycles finished ones through a [`TweenPool`](context::TweenPool)
//! - No frame loop at hand? Let a [`Ticker`](context::Ticker) drive the context from a tokio task
//!
//! # Getting Started
//!
//! - Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! hermes-tween = "0.1.0-beta"
//! ```
//!
//! - Start writing your code: see the [examples](https://github.com/dclause/hermes-tween/tree/develop/hermes-tween/examples) directory for more examples.
//!
//! The following code moves a value from 0 to 100 in one second, slowing down towards the end.
//! ```rust
//! use hermes_tween::animations::{Animation, Easing};
//! use hermes_tween::context::TweenContext;
//! use hermes_tween::utils::lerp;
//!
//! // The registry of all live animations.
//! let context = TweenContext::new();
//!
//! // Create a tween: from 0.0 to 100.0 in 1s, starting right away.
//! let tween = context.create_tween(|| 0.0f32, || 100.0, 1.0, lerp, true).unwrap();
//! tween.set_ease(Easing::QuadOut).unwrap();
//! tween.on_update(|value| println!("Value: {:.1}", value));
//! tween.on_complete(|| println!("Done!"));
//!
//! // The host frame loop: 60 frames per second.
//! while !context.is_empty() {
//!     context.update(1.0 / 60.0);
//! }
//! ```
//!
//! # Feature flags
//!
//! - **serde** -- Enables serialize/deserialize capabilities for [`Easing`](animations::Easing) and [`LoopType`](animations::LoopType).
//! - **mocks** -- Provides mocked entities (useful for tests mostly).

#[cfg(test)]
extern crate self as hermes_tween;

pub mod animations;
pub mod context;
pub mod errors;
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
pub mod utils;
