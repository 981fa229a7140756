use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::{Accessor, Easing};

/// Duration used when none is given.
pub const DEFAULT_DURATION_MS: f64 = 1000.0;

/// Fired once, after every target received its exact end value.
pub type CompletionCallback = Box<dyn FnOnce()>;

/// One animated property.
#[derive(Clone, Debug)]
pub enum Target {
    /// Animates towards the shared [`AnimationOptions::end_value_absolute`].
    Shared(Accessor),
    /// Animates towards its own end value.
    Explicit(Accessor, f64),
}

impl From<Accessor> for Target {
    fn from(accessor: Accessor) -> Self {
        Self::Shared(accessor)
    }
}

impl From<(Accessor, f64)> for Target {
    fn from((accessor, end): (Accessor, f64)) -> Self {
        Self::Explicit(accessor, end)
    }
}

/// Configuration for one animation run.
///
/// Nothing here is validated: a shared target without `end_value_absolute` animates towards
/// `NaN`, and a zero or negative duration completes on the first tick.
pub struct AnimationOptions {
    /// Animated properties, written in this order on every tick.
    pub targets: Vec<Target>,
    pub end_value_absolute: Option<f64>,
    /// Defaults to [`DEFAULT_DURATION_MS`].
    pub duration_ms: Option<f64>,
    pub easing: Easing,
    pub on_complete: Option<CompletionCallback>,
}

impl AnimationOptions {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            end_value_absolute: None,
            duration_ms: None,
            easing: Easing::Linear,
            on_complete: None,
        }
    }

    /// Options for a single accessor animating towards `end`.
    pub fn single(accessor: Accessor, end: f64) -> Self {
        Self::new()
            .with_target(accessor)
            .with_end_value_absolute(end)
    }

    pub fn with_target(mut self, target: impl Into<Target>) -> Self {
        self.targets.push(target.into());
        self
    }

    pub fn with_targets<T: Into<Target>>(mut self, targets: impl IntoIterator<Item = T>) -> Self {
        self.targets.extend(targets.into_iter().map(Into::into));
        self
    }

    pub fn with_end_value_absolute(mut self, end: f64) -> Self {
        self.end_value_absolute = Some(end);
        self
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

    /// Normalizes every target into an `(accessor, end)` pair and fills in defaults.
    pub(crate) fn resolve(self) -> ResolvedAnimation {
        let shared_end = self.end_value_absolute.unwrap_or(f64::NAN);
        let targets = self
            .targets
            .into_iter()
            .map(|target| match target {
                Target::Shared(accessor) => (accessor, shared_end),
                Target::Explicit(accessor, end) => (accessor, end),
            })
            .collect();

        ResolvedAnimation {
            targets,
            duration_ms: self.duration_ms.unwrap_or(DEFAULT_DURATION_MS),
            easing: self.easing,
            on_complete: self.on_complete.unwrap_or_else(|| Box::new(|| {})),
        }
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for AnimationOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnimationOptions")
            .field("targets", &self.targets)
            .field("end_value_absolute", &self.end_value_absolute)
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .field(
                "on_complete",
                &self.on_complete.as_ref().map(|_| "FnOnce(..)"),
            )
            .finish()
    }
}

pub(crate) struct ResolvedAnimation {
    pub(crate) targets: Vec<(Accessor, f64)>,
    pub(crate) duration_ms: f64,
    pub(crate) easing: Easing,
    pub(crate) on_complete: CompletionCallback,
}
