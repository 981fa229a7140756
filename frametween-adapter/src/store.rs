use alloc::string::{String, ToString};
use core::cell::RefCell;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use frametween::{AnimationError, Reading};

use crate::StyleTarget;

#[cfg(feature = "std")]
type PropertyMap<T> = HashMap<T, HashMap<String, String>>;
#[cfg(not(feature = "std"))]
type PropertyMap<T> = BTreeMap<T, BTreeMap<String, String>>;

/// The styling layer that owns animated properties.
///
/// Getters may report text (`"12px"`); the driver parses it leniently when an animation starts.
pub trait PropertyStore {
    type Target: Clone + 'static;

    fn get_property(&self, target: &Self::Target, property: &str)
    -> Result<Reading, AnimationError>;

    fn set_property(
        &self,
        target: &Self::Target,
        property: &str,
        value: f64,
    ) -> Result<(), AnimationError>;
}

/// An in-memory [`PropertyStore`] holding string values per target.
///
/// Writes are formatted as `{value}{unit}` (e.g. `"42px"` with unit `"px"`). Reading a property
/// that was never set is an error.
pub struct StyleMap<T> {
    values: RefCell<PropertyMap<T>>,
    unit: String,
}

impl<T: StyleTarget> StyleMap<T> {
    pub fn new() -> Self {
        Self {
            values: RefCell::new(PropertyMap::new()),
            unit: String::new(),
        }
    }

    /// Appends `unit` to every written value.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn insert(&self, target: T, property: impl Into<String>, value: impl Into<String>) {
        self.values
            .borrow_mut()
            .entry(target)
            .or_default()
            .insert(property.into(), value.into());
    }

    pub fn value(&self, target: &T, property: &str) -> Option<String> {
        self.values
            .borrow()
            .get(target)
            .and_then(|props| props.get(property))
            .cloned()
    }

    pub fn remove_target(&self, target: &T) -> bool {
        self.values.borrow_mut().remove(target).is_some()
    }
}

impl<T: StyleTarget> Default for StyleMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StyleTarget + 'static> PropertyStore for StyleMap<T> {
    type Target = T;

    fn get_property(&self, target: &T, property: &str) -> Result<Reading, AnimationError> {
        self.value(target, property)
            .map(Reading::Text)
            .ok_or_else(|| AnimationError::missing(property))
    }

    fn set_property(&self, target: &T, property: &str, value: f64) -> Result<(), AnimationError> {
        let mut formatted = value.to_string();
        formatted.push_str(&self.unit);
        self.insert(target.clone(), property, formatted);
        Ok(())
    }
}

impl<T> core::fmt::Debug for StyleMap<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StyleMap")
            .field("targets", &self.values.borrow().len())
            .field("unit", &self.unit)
            .finish()
    }
}
