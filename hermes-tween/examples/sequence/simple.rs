use hermes_tween::context::TweenContext;
use hermes_tween::utils::lerp;

fn main() {
    let context = TweenContext::new();

    let fade_in = context
        .create_tween(|| 0.0f32, || 1.0, 1.0, lerp, false)
        .unwrap();
    fade_in.on_update(|value| println!("Opacity: {:.2}", value));

    let grow = context
        .create_tween(|| 1.0f32, || 2.0, 0.5, lerp, false)
        .unwrap();
    grow.on_update(|value| println!("Scale: {:.2}", value));

    let fade_out = context
        .create_tween(|| 1.0f32, || 0.0, 1.0, lerp, false)
        .unwrap();
    fade_out.on_update(|value| println!("Opacity: {:.2}", value));

    // Fade in while growing, wait a bit, then fade out.
    let sequence = context.create_sequence(true);
    sequence.then(&fade_in).with(&grow).unwrap();
    sequence.callback(|| println!("Visible!"));
    sequence.wait(0.5).unwrap().then(&fade_out);
    sequence.on_complete(|| println!("Sequence completed"));
    println!("{}", sequence);

    while !context.is_empty() {
        context.update(0.1);
    }
}
