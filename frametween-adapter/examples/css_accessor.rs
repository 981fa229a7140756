// Example: a hand-written property store over "pixel" styles, animated with explicit pairs.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use frametween::{AnimationError, AnimationOptions, Animator, FrameQueue, ManualClock, Reading};
use frametween_adapter::{PropertyStore, make_property_accessor};

#[derive(Default)]
struct Element {
    style: RefCell<HashMap<String, String>>,
}

struct Dom {
    elements: Vec<Element>,
}

impl PropertyStore for Dom {
    type Target = usize;

    fn get_property(&self, target: &usize, property: &str) -> Result<Reading, AnimationError> {
        let el = self
            .elements
            .get(*target)
            .ok_or_else(|| AnimationError::read(property, "element detached"))?;
        let value = el.style.borrow().get(property).cloned().unwrap_or_default();
        Ok(Reading::Text(value))
    }

    fn set_property(&self, target: &usize, property: &str, value: f64) -> Result<(), AnimationError> {
        let el = self
            .elements
            .get(*target)
            .ok_or_else(|| AnimationError::write(property, "element detached"))?;
        el.style
            .borrow_mut()
            .insert(property.to_string(), format!("{value:.1}px"));
        Ok(())
    }
}

fn main() {
    let dom = Rc::new(Dom {
        elements: vec![Element::default(), Element::default()],
    });
    dom.elements[0]
        .style
        .borrow_mut()
        .insert("left".into(), "8px".into());
    dom.elements[1]
        .style
        .borrow_mut()
        .insert("top".into(), "120px".into());

    let clock = ManualClock::new(0.0);
    let frames = Rc::new(FrameQueue::new());
    let animator = Animator::new(Rc::new(clock.clone()), Rc::clone(&frames));

    animator
        .start_linear_animation(
            AnimationOptions::new()
                .with_target((make_property_accessor(&dom, 0, "left"), 200.0))
                .with_target((make_property_accessor(&dom, 1, "top"), 0.0))
                .with_duration_ms(120.0),
        )
        .expect("both elements exist");

    for now in [40.0, 80.0, 120.0] {
        clock.set(now);
        frames.run_frame().expect("both elements exist");
        println!(
            "t={now} left={:?} top={:?}",
            dom.elements[0].style.borrow().get("left"),
            dom.elements[1].style.borrow().get("top"),
        );
    }
}
