use alloc::rc::Rc;

/// Maps the elapsed fraction of an animation (`0.0..=1.0`) to progress.
///
/// Progress is not clamped, so overshooting curves are allowed.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Linear,
    SmoothStep,
    EaseInOutCubic,
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(Rc<dyn Fn(f64) -> f64>),
}

impl Easing {
    pub fn custom(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::Custom(Rc::new(f))
    }

    pub fn sample(&self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::Custom(f) => f(t),
        }
    }
}

impl core::fmt::Debug for Easing {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Linear => f.write_str("Linear"),
            Self::SmoothStep => f.write_str("SmoothStep"),
            Self::EaseInOutCubic => f.write_str("EaseInOutCubic"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
