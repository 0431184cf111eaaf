//! Where the persisted scale lives.
//!
//! [`PinchScale`](super::PinchScale) never stores the persisted factor
//! itself; it reads and writes it through [`ScaleStorage`]. Owning the value
//! (`f64`) and binding to caller state ([`SharedScale`], `&mut S`) then run
//! the exact same state machine.

use std::cell::Cell;
use std::rc::Rc;

/// Read/write access to a persisted scale factor.
pub trait ScaleStorage {
    /// Current persisted scale.
    fn get(&self) -> f64;

    /// Replace the persisted scale.
    fn set(&mut self, value: f64);
}

/// Self-contained storage: the state machine owns the value.
impl ScaleStorage for f64 {
    #[inline]
    fn get(&self) -> f64 {
        *self
    }

    #[inline]
    fn set(&mut self, value: f64) {
        *self = value;
    }
}

/// Borrowed storage for the lifetime of the state machine.
impl<S: ScaleStorage + ?Sized> ScaleStorage for &mut S {
    #[inline]
    fn get(&self) -> f64 {
        (**self).get()
    }

    #[inline]
    fn set(&mut self, value: f64) {
        (**self).set(value);
    }
}

/// A persisted scale shared between its owner and a [`PinchScale`](super::PinchScale).
///
/// Clones point at the same value. The owner can read or overwrite it
/// between gesture events while the state machine holds another clone.
/// Single-threaded by construction (`Rc`).
///
/// # Example
///
/// ```
/// use tint_core::{PinchScale, ScaleBounds, SharedScale};
///
/// let scale = SharedScale::default();
/// let mut zoom = PinchScale::bound(scale.clone(), ScaleBounds::default());
///
/// zoom.end(2.0);
/// assert_eq!(scale.get(), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct SharedScale(Rc<Cell<f64>>);

impl SharedScale {
    /// New shared cell holding `initial`.
    pub fn new(initial: f64) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    /// Current value, as seen by every clone.
    #[inline]
    pub fn get(&self) -> f64 {
        self.0.get()
    }

    /// Overwrite the value for every clone. Not clamped.
    #[inline]
    pub fn set(&self, value: f64) {
        self.0.set(value);
    }
}

impl Default for SharedScale {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ScaleStorage for SharedScale {
    #[inline]
    fn get(&self) -> f64 {
        self.0.get()
    }

    #[inline]
    fn set(&mut self, value: f64) {
        self.0.set(value);
    }
}
