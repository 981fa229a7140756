use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::AnimationError;

/// A one-shot callback armed for the next refresh tick.
pub type FrameCallback = Box<dyn FnOnce() -> Result<(), AnimationError>>;

/// The host's refresh-tick primitive: run `callback` once, before the next repaint.
///
/// Implementations must run callbacks armed for the same tick in arming order, and must not run
/// a callback armed during a tick until the following tick.
pub trait FrameSource {
    fn request_frame(&self, callback: FrameCallback);
}

/// A host-driven [`FrameSource`]: callbacks wait until the host calls [`FrameQueue::run_frame`].
#[derive(Default)]
pub struct FrameQueue {
    armed: RefCell<Vec<FrameCallback>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.armed.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.armed.borrow().is_empty()
    }

    /// Runs every callback armed before this call.
    ///
    /// Callbacks re-armed while the frame runs wait for the next call. A failing callback does
    /// not stop the others; the first failure is returned once the whole frame has run.
    /// Returns the number of callbacks that ran.
    pub fn run_frame(&self) -> Result<usize, AnimationError> {
        let batch = core::mem::take(&mut *self.armed.borrow_mut());
        let ran = batch.len();
        let mut first_err = None;
        for callback in batch {
            if let Err(err) = callback() {
                fwarn!(error = %err, "frame callback failed");
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(ran),
        }
    }
}

impl FrameSource for FrameQueue {
    fn request_frame(&self, callback: FrameCallback) {
        self.armed.borrow_mut().push(callback);
    }
}

impl core::fmt::Debug for FrameQueue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameQueue")
            .field("pending", &self.pending())
            .finish()
    }
}
