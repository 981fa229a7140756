use alloc::rc::Rc;
use core::cell::Cell;

use crate::{AnimationError, Reading};

/// Reads the current value of an external property.
pub type Getter = Rc<dyn Fn() -> Result<Reading, AnimationError>>;

/// Writes a new value to an external property.
pub type Setter = Rc<dyn Fn(f64) -> Result<(), AnimationError>>;

/// A get/set capability bound to one external numeric property.
///
/// The driver never owns the property: it only holds the two closures, which capture whatever
/// they need to reach it (a target plus a property key, a shared cell, ...). Cloning an accessor
/// shares the closures.
#[derive(Clone)]
pub struct Accessor {
    get: Getter,
    set: Setter,
}

impl Accessor {
    pub fn new<R, G, S>(get: G, set: S) -> Self
    where
        R: Into<Reading>,
        G: Fn() -> Result<R, AnimationError> + 'static,
        S: Fn(f64) -> Result<(), AnimationError> + 'static,
    {
        Self {
            get: Rc::new(move || get().map(Into::into)),
            set: Rc::new(set),
        }
    }

    /// Builds an accessor from closures that cannot fail.
    pub fn from_fns<R, G, S>(get: G, set: S) -> Self
    where
        R: Into<Reading>,
        G: Fn() -> R + 'static,
        S: Fn(f64) + 'static,
    {
        Self::new(
            move || Ok::<R, AnimationError>(get()),
            move |v| {
                set(v);
                Ok(())
            },
        )
    }

    /// Binds an accessor to a shared cell.
    pub fn cell(cell: Rc<Cell<f64>>) -> Self {
        let read = Rc::clone(&cell);
        Self::from_fns(move || read.get(), move |v| cell.set(v))
    }

    pub fn get(&self) -> Result<Reading, AnimationError> {
        (self.get)()
    }

    /// Reads the current value and converts it to a number (`NaN` if it does not parse).
    pub fn read(&self) -> Result<f64, AnimationError> {
        self.get().map(|r| r.to_f64())
    }

    pub fn set(&self, value: f64) -> Result<(), AnimationError> {
        (self.set)(value)
    }
}

impl core::fmt::Debug for Accessor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Accessor(..)")
    }
}
