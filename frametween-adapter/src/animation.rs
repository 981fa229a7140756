use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use frametween::{AnimationError, AnimationOptions, Animator, CompletionCallback, Easing};

use crate::{PropertyStore, make_property_accessor};

/// One target or an ordered collection of targets.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Targets<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Targets<T> {
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(targets) => targets.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(target) => vec![target],
            Self::Many(targets) => targets,
        }
    }
}

impl<T> From<Vec<T>> for Targets<T> {
    fn from(targets: Vec<T>) -> Self {
        Self::Many(targets)
    }
}

/// Animates one property, shared by every target, towards one end value.
pub struct PropertyAnimation<T> {
    pub targets: Targets<T>,
    pub property: String,
    pub end_value_absolute: f64,
    pub duration_ms: Option<f64>,
    pub easing: Easing,
    pub on_complete: Option<CompletionCallback>,
}

impl<T> PropertyAnimation<T> {
    pub fn new(targets: Targets<T>, property: impl Into<String>, end_value_absolute: f64) -> Self {
        Self {
            targets,
            property: property.into(),
            end_value_absolute,
            duration_ms: None,
            easing: Easing::Linear,
            on_complete: None,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_on_complete(mut self, on_complete: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    /// Expands the targets into one accessor each, in order.
    pub fn into_options<S>(self, store: &Rc<S>) -> AnimationOptions
    where
        S: PropertyStore<Target = T> + 'static,
    {
        let accessors = self
            .targets
            .into_vec()
            .into_iter()
            .map(|target| make_property_accessor(store, target, &self.property));

        let mut options = AnimationOptions::new()
            .with_targets(accessors)
            .with_end_value_absolute(self.end_value_absolute)
            .with_easing(self.easing);
        options.duration_ms = self.duration_ms;
        options.on_complete = self.on_complete;
        options
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for PropertyAnimation<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PropertyAnimation")
            .field("targets", &self.targets)
            .field("property", &self.property)
            .field("end_value_absolute", &self.end_value_absolute)
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}

/// Animates `animation.property` on every target through `store`.
///
/// This only builds accessors; timing, interpolation and completion are the driver's.
pub fn start_linear_property_animation<S>(
    animator: &Animator,
    store: &Rc<S>,
    animation: PropertyAnimation<S::Target>,
) -> Result<(), AnimationError>
where
    S: PropertyStore + 'static,
{
    animator.start_linear_animation(animation.into_options(store))
}
