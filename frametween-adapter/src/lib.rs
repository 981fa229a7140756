//! Property accessor adapters for the `frametween` crate.
//!
//! The `frametween` driver only knows about [`frametween::Accessor`]s. This crate builds them
//! for "property P on target T" through a [`PropertyStore`] (a styling layer, a scene graph, ...),
//! so callers can animate the same property on one or many targets without writing accessors by
//! hand.
//!
//! This crate is intentionally framework-agnostic; [`StyleMap`] is an in-memory store for tests
//! and headless hosts.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod accessor;
mod animation;
mod key;
mod store;


pub use accessor::make_property_accessor;
pub use animation::{PropertyAnimation, Targets, start_linear_property_animation};
pub use key::StyleTarget;
pub use store::{PropertyStore, StyleMap};
