// Example: drive a single property with a real clock and a simulated 60fps refresh loop.
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use frametween::{Accessor, AnimationOptions, Animator, Easing, FrameQueue, SystemClock};

fn main() {
    let clock = Rc::new(SystemClock::new());
    let frames = Rc::new(FrameQueue::new());
    let animator = Animator::new(clock, Rc::clone(&frames));

    let opacity = Rc::new(Cell::new(0.0));
    let done = Rc::new(Cell::new(false));
    let d = Rc::clone(&done);

    animator
        .start_linear_animation(
            AnimationOptions::single(Accessor::cell(Rc::clone(&opacity)), 1.0)
                .with_duration_ms(250.0)
                .with_easing(Easing::SmoothStep)
                .with_on_complete(move || d.set(true)),
        )
        .expect("cell accessors never fail");

    let mut frame = 0u32;
    while !frames.is_idle() {
        std::thread::sleep(Duration::from_millis(16));
        frames.run_frame().expect("cell accessors never fail");
        frame += 1;
        println!("frame={frame} opacity={:.3}", opacity.get());
    }

    println!("done={} opacity={}", done.get(), opacity.get());
}
