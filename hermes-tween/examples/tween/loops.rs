use std::sync::Arc;

use hermes_tween::animations::{Animation, Easing, LoopType};
use hermes_tween::context::TweenContext;
use hermes_tween::utils::lerp;
use parking_lot::Mutex;

fn main() {
    let context = TweenContext::new();

    // An RGB color going back and forth from red to blue: 3 times.
    let color = context
        .create_tween(|| [255u8, 0, 0], || [0u8, 0, 255], 1.0, lerp, true)
        .unwrap();
    color.set_ease(Easing::SineInOut).unwrap();
    color.set_loops(LoopType::Yoyo, 2).unwrap();
    color.on_update(|[r, g, b]| println!("Color: #{:02x}{:02x}{:02x}", r, g, b));

    // A value going from its current position to 10, forever.
    // The start value is read each time the tween starts.
    let position = Arc::new(Mutex::new(-5.0f32));
    let start = position.clone();
    let current = position.clone();
    let spinner = context
        .create_tween(move || *start.lock(), || 10.0, 0.5, lerp, true)
        .unwrap();
    spinner.set_id(1);
    spinner.set_loops(LoopType::Restart, -1).unwrap();
    spinner.on_update(move |value| *current.lock() = value);

    for frame in 0..40 {
        context.update(0.1);
        if frame == 30 {
            // The infinite tween is stopped by id.
            context.stop(1);
            println!("Spinner stopped at {:.2}", *position.lock());
        }
    }
}
