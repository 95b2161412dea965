use hermes_tween::animations::{Animation, Easing, Sequence};
use hermes_tween::context::TweenContext;
use hermes_tween::utils::lerp;

/// Builds a "blink" sequence: on then off.
fn blink(context: &TweenContext, name: &'static str) -> Sequence {
    let on = context.create_tween(|| 0u8, || 255, 0.2, lerp, false).unwrap();
    on.set_ease(Easing::QuadIn).unwrap();
    on.on_update(move |value| println!("{}: {}", name, value));

    let off = context.create_tween(|| 255u8, || 0, 0.2, lerp, false).unwrap();
    off.set_ease(Easing::QuadOut).unwrap();
    off.on_update(move |value| println!("{}: {}", name, value));

    let sequence = Sequence::new(false);
    sequence.then(&on).then(&off);
    sequence
}

fn main() {
    let context = TweenContext::new();

    // Blink the first led, then the second twice, then both together.
    let sequence = context.create_sequence(true);
    sequence
        .then(&blink(&context, "led1"))
        .then(&blink(&context, "led2"))
        .then(&blink(&context, "led2"));
    sequence
        .then(&blink(&context, "led1"))
        .with(&blink(&context, "led2"))
        .unwrap();
    sequence.on_complete(|| println!("All blinks done"));

    let mut frames = 0;
    while !context.is_empty() {
        context.update(1.0 / 30.0);
        frames += 1;
    }
    println!("Done in {} frames", frames);
}
