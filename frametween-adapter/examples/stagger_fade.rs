// Example: fade a row of elements through an in-memory style layer.
use std::rc::Rc;

use frametween::{Animator, Easing, FrameQueue, ManualClock};
use frametween_adapter::{PropertyAnimation, StyleMap, Targets, start_linear_property_animation};

fn main() {
    let clock = ManualClock::new(0.0);
    let frames = Rc::new(FrameQueue::new());
    let animator = Animator::new(Rc::new(clock.clone()), Rc::clone(&frames));

    let styles = Rc::new(StyleMap::new());
    let ids = ["header", "body", "footer"];
    for (i, id) in ids.iter().enumerate() {
        styles.insert(*id, "opacity", format!("{}", i as f64 * 0.25));
    }

    start_linear_property_animation(
        &animator,
        &styles,
        PropertyAnimation::new(Targets::Many(ids.to_vec()), "opacity", 1.0)
            .with_duration_ms(300.0)
            .with_easing(Easing::EaseInOutCubic)
            .with_on_complete(|| println!("faded in")),
    )
    .expect("all properties are defined");

    let mut now = 0.0;
    while !frames.is_idle() {
        now += 16.0;
        clock.set(now);
        frames.run_frame().expect("style map writes never fail");
        let row: Vec<String> = ids
            .iter()
            .map(|id| styles.value(id, "opacity").unwrap_or_default())
            .collect();
        println!("t={now:>5} {row:?}");
    }
}
