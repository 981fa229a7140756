#[cfg(feature = "std")]
pub trait StyleTarget: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> StyleTarget for T {}

#[cfg(not(feature = "std"))]
pub trait StyleTarget: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> StyleTarget for T {}
