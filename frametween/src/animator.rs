use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::options::{CompletionCallback, ResolvedAnimation};
use crate::{Accessor, AnimationError, AnimationOptions, Clock, Easing, FrameSource};

/// Lifecycle of a run. `Completed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunPhase {
    Running,
    Completed,
}

/// Values captured once when a run starts.
///
/// `end_ms` is fixed at start and never recomputed; every tick derives its progress from the
/// absolute frame time, so skipped or late ticks only make the steps coarser.
#[derive(Clone, Debug, PartialEq)]
pub struct RunState {
    start_values: Vec<f64>,
    deltas: Vec<f64>,
    start_ms: f64,
    end_ms: f64,
    duration_ms: f64,
}

impl RunState {
    /// Reads each accessor exactly once and records where every target starts.
    pub fn capture(
        targets: &[(Accessor, f64)],
        start_ms: f64,
        duration_ms: f64,
    ) -> Result<Self, AnimationError> {
        let mut start_values = Vec::with_capacity(targets.len());
        let mut deltas = Vec::with_capacity(targets.len());
        for (accessor, end) in targets {
            let start = accessor.read()?;
            start_values.push(start);
            deltas.push(end - start);
        }

        Ok(Self {
            start_values,
            deltas,
            start_ms,
            end_ms: start_ms + duration_ms,
            duration_ms,
        })
    }

    pub fn start_values(&self) -> &[f64] {
        &self.start_values
    }

    pub fn deltas(&self) -> &[f64] {
        &self.deltas
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    pub fn end_ms(&self) -> f64 {
        self.end_ms
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Elapsed fraction of the duration at `frame_ms`.
    pub fn fraction_at(&self, frame_ms: f64) -> f64 {
        (frame_ms - self.start_ms) / self.duration_ms
    }

    /// Whether a tick at `frame_ms` must finalize. `NaN` times count as finished.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn is_finished_at(&self, frame_ms: f64) -> bool {
        !(frame_ms < self.end_ms)
    }

    pub fn value_at(&self, index: usize, progress: f64) -> f64 {
        self.start_values[index] + self.deltas[index] * progress
    }
}

struct Run {
    targets: Vec<(Accessor, f64)>,
    state: RunState,
    easing: Easing,
    on_complete: RefCell<Option<CompletionCallback>>,
    phase: Cell<RunPhase>,
    clock: Rc<dyn Clock>,
    frames: Weak<dyn FrameSource>,
}

impl Run {
    fn tick(self: Rc<Self>) -> Result<(), AnimationError> {
        if self.phase.get() == RunPhase::Completed {
            return Ok(());
        }

        let frame_ms = self.clock.now_ms();
        if self.state.is_finished_at(frame_ms) {
            fdebug!(frame_ms, end_ms = self.state.end_ms, "duration elapsed");
            return self.finish();
        }

        // Re-armed before the writes: a failed write leaves the next tick scheduled.
        self.schedule();

        let progress = self.easing.sample(self.state.fraction_at(frame_ms));
        ftrace!(frame_ms, progress, "tick");
        for (i, (accessor, _)) in self.targets.iter().enumerate() {
            accessor.set(self.state.value_at(i, progress))?;
        }
        Ok(())
    }

    fn schedule(self: &Rc<Self>) {
        let Some(frames) = self.frames.upgrade() else {
            fwarn!("frame source dropped; animation stops");
            return;
        };
        let next = Rc::clone(self);
        frames.request_frame(Box::new(move || next.tick()));
    }

    fn finish(&self) -> Result<(), AnimationError> {
        // Exact end values, never the interpolated ones.
        for (accessor, end) in &self.targets {
            accessor.set(*end)?;
        }
        self.phase.set(RunPhase::Completed);
        fdebug!(targets = self.targets.len(), "animation completed");

        let on_complete = self.on_complete.borrow_mut().take();
        if let Some(on_complete) = on_complete {
            on_complete();
        }
        Ok(())
    }
}

/// Drives linear (eased) animations of numeric properties on a host's refresh ticks.
///
/// An `Animator` only binds a [`Clock`] and a [`FrameSource`]; each started animation is fully
/// independent and owns its own [`RunState`]. Runs hold the frame source weakly: dropping it
/// stops every run that has not finished.
#[derive(Clone)]
pub struct Animator {
    clock: Rc<dyn Clock>,
    frames: Rc<dyn FrameSource>,
}

impl Animator {
    pub fn new<C, F>(clock: Rc<C>, frames: Rc<F>) -> Self
    where
        C: Clock + 'static,
        F: FrameSource + 'static,
    {
        Self {
            clock,
            frames,
        }
    }

    pub fn clock(&self) -> &Rc<dyn Clock> {
        &self.clock
    }

    pub fn frames(&self) -> &Rc<dyn FrameSource> {
        &self.frames
    }

    /// Starts an animation and runs its first tick immediately.
    ///
    /// Every accessor is read once here. After that each tick writes
    /// `start + (end - start) * easing((now - start_ms) / duration)` to every target until the
    /// duration has elapsed; the final tick writes the exact end values and then calls
    /// `on_complete`.
    ///
    /// Errors come only from accessors, either while capturing start values or during the first
    /// tick. Values are not validated: `NaN` readings propagate into writes.
    pub fn start_linear_animation(&self, options: AnimationOptions) -> Result<(), AnimationError> {
        let ResolvedAnimation {
            targets,
            duration_ms,
            easing,
            on_complete,
        } = options.resolve();

        let start_ms = self.clock.now_ms();
        let state = RunState::capture(&targets, start_ms, duration_ms)?;
        fdebug!(
            start_ms,
            duration_ms,
            targets = targets.len(),
            "animation started"
        );

        let run = Rc::new(Run {
            targets,
            state,
            easing,
            on_complete: RefCell::new(Some(on_complete)),
            phase: Cell::new(RunPhase::Running),
            clock: Rc::clone(&self.clock),
            frames: Rc::downgrade(&self.frames),
        });
        run.tick()
    }
}

impl core::fmt::Debug for Animator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Animator(..)")
    }
}

/// Shorthand for `Animator::new(clock, frames).start_linear_animation(options)`.
pub fn start_linear_animation<C, F>(
    clock: Rc<C>,
    frames: Rc<F>,
    options: AnimationOptions,
) -> Result<(), AnimationError>
where
    C: Clock + 'static,
    F: FrameSource + 'static,
{
    Animator::new(clock, frames).start_linear_animation(options)
}
