use hermes_tween::animations::{Animation, Easing};
use hermes_tween::context::{Ticker, TweenContext};
use hermes_tween::pause;
use hermes_tween::utils::lerp;

#[tokio::main]
async fn main() {
    let context = TweenContext::new();

    // Drives the context at 30 frames per second from a background task.
    let ticker = Ticker::new(context.clone()).set_fps(30).unwrap();
    ticker.start().unwrap();

    let tween = context
        .create_tween(|| 0.0f32, || 180.0, 2.0, lerp, true)
        .unwrap();
    tween.set_ease(Easing::BounceOut).unwrap();
    tween
        .on_update(|angle| println!("Angle: {:.1}", angle))
        .on_complete(|| println!("Completed"));

    pause!(2500);
    ticker.stop();
    println!("{}", ticker);
}
