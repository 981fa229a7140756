//! A headless, frame-interpolated animation driver for numeric properties.
//!
//! For binding accessors to properties on styled targets, see the `frametween-adapter` crate.
//!
//! Given one or more properties, their end values and a duration, the driver moves each property
//! from its current value to its end value over time. Every refresh tick computes the value from
//! the absolute elapsed time rather than from a step counter, so dropped or late ticks produce
//! fewer, larger steps instead of a slower animation. The last tick always writes the exact end
//! values before the completion callback runs.
//!
//! It is UI-agnostic. The host is expected to provide:
//! - a monotonic clock ([`Clock`])
//! - a refresh-tick primitive ([`FrameSource`])
//! - accessors reading and writing the animated properties ([`Accessor`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod accessor;
mod animator;
mod clock;
mod easing;
mod error;
mod frame;
mod options;
mod reading;


pub use accessor::{Accessor, Getter, Setter};
pub use animator::{Animator, RunPhase, RunState, start_linear_animation};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock};
pub use easing::Easing;
pub use error::AnimationError;
pub use frame::{FrameCallback, FrameQueue, FrameSource};
pub use options::{AnimationOptions, CompletionCallback, DEFAULT_DURATION_MS, Target};
pub use reading::{Reading, parse_float};
