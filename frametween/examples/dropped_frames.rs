// Example: a stalled host still finishes on time.
//
// Progress comes from the clock, not from the number of ticks, so a host that misses most of its
// frames produces fewer, larger steps and still lands exactly on the end value.
use std::cell::Cell;
use std::rc::Rc;

use frametween::{Accessor, AnimationOptions, Animator, FrameQueue, ManualClock};

fn main() {
    let clock = ManualClock::new(0.0);
    let frames = Rc::new(FrameQueue::new());
    let animator = Animator::new(Rc::new(clock.clone()), Rc::clone(&frames));

    let left = Rc::new(Cell::new(0.0));
    let top = Rc::new(Cell::new(300.0));

    animator
        .start_linear_animation(
            AnimationOptions::new()
                .with_target((Accessor::cell(Rc::clone(&left)), 120.0))
                .with_target((Accessor::cell(Rc::clone(&top)), 0.0))
                .with_duration_ms(500.0),
        )
        .expect("cell accessors never fail");

    // Regular 16ms frames, then a 300ms stall, then regular frames again.
    let mut now = 0.0;
    while !frames.is_idle() {
        now += if (64.0..96.0).contains(&now) { 300.0 } else { 16.0 };
        clock.set(now);
        frames.run_frame().expect("cell accessors never fail");
        println!("t={now:>5} left={:>8.3} top={:>8.3}", left.get(), top.get());
    }
}
