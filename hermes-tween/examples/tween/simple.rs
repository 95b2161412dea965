use hermes_tween::animations::{Animation, Easing};
use hermes_tween::context::TweenContext;
use hermes_tween::utils::lerp;

fn main() {
    let context = TweenContext::new();

    // Moves a value from 0 to 100 in 2 seconds: slowing down at the end.
    let tween = context
        .create_tween(|| 0.0f32, || 100.0, 2.0, lerp, true)
        .unwrap();
    tween.set_ease(Easing::CubicOut).unwrap();
    tween
        .on_update(|value| println!("Value: {:.2}", value))
        .on_complete(|| println!("Tween completed"));

    // Simulated frame loop: 10 frames per second.
    while !context.is_empty() {
        context.update(0.1);
    }
}
