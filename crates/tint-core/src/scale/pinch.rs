//! Pinch-to-zoom scale state machine.

use std::fmt;

use super::bounds::ScaleBounds;
use super::storage::ScaleStorage;

/// Whether a pinch gesture is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No active gesture; the live factor is 1.0
    #[default]
    Idle,
    /// A gesture is delivering samples
    Scaling,
}

type Observer = Box<dyn FnMut(f64)>;

/// Turns a stream of pinch magnification samples into a clamped zoom factor.
///
/// The persisted scale survives between gestures; the live factor is the
/// magnification of the gesture currently in progress (1.0 when idle).
/// What the view should render is
/// `effective = clamp(persisted × live, min, max)`.
///
/// # Transitions
///
/// ```text
///          update(f)              end(f)
///  Idle ─────────────▶ Scaling ─────────────▶ Idle
///                       │   ▲                 persisted := clamp(persisted × f)
///                       └───┘ update(f)       live := 1
///
///  reset() in any phase: persisted := 1, live factor untouched
/// ```
///
/// `on_changed` fires on every [`update`](Self::update) with the effective
/// scale; `on_ended` fires on every [`end`](Self::end) with the new
/// persisted scale.
///
/// # Storage
///
/// `S` decides who owns the persisted value. [`PinchScale::new`] keeps it
/// in an internal `f64`; [`PinchScale::bound`] accepts any [`ScaleStorage`],
/// such as a [`SharedScale`](super::SharedScale) owned by the caller.
///
/// # Example
///
/// ```
/// use tint_core::{PinchScale, ScaleBounds};
///
/// let mut zoom = PinchScale::new(ScaleBounds::new(1.0, 4.0).unwrap());
///
/// zoom.update(2.0);
/// assert_eq!(zoom.effective_scale(), 2.0);
///
/// zoom.update(5.0);
/// assert_eq!(zoom.effective_scale(), 4.0);
///
/// zoom.end(5.0);
/// assert_eq!(zoom.persisted_scale(), 4.0);
///
/// zoom.reset();
/// assert_eq!(zoom.persisted_scale(), 1.0);
/// ```
pub struct PinchScale<S: ScaleStorage = f64> {
    storage: S,
    bounds: ScaleBounds,
    live_factor: f64,
    phase: GesturePhase,
    on_changed: Option<Observer>,
    on_ended: Option<Observer>,
}

impl PinchScale<f64> {
    /// Self-contained scale starting at 1.0.
    pub fn new(bounds: ScaleBounds) -> Self {
        Self::bound(1.0, bounds)
    }
}

impl<S: ScaleStorage> PinchScale<S> {
    /// Scale whose persisted value lives in caller-supplied storage.
    ///
    /// The stored value is used as-is; it is not clamped until the next
    /// gesture ends.
    pub fn bound(storage: S, bounds: ScaleBounds) -> Self {
        Self {
            storage,
            bounds,
            live_factor: 1.0,
            phase: GesturePhase::Idle,
            on_changed: None,
            on_ended: None,
        }
    }

    /// Register the observer called with the effective scale on every sample.
    pub fn on_changed(mut self, observer: impl FnMut(f64) + 'static) -> Self {
        self.on_changed = Some(Box::new(observer));
        self
    }

    /// Register the observer called with the persisted scale when a gesture ends.
    pub fn on_ended(mut self, observer: impl FnMut(f64) + 'static) -> Self {
        self.on_ended = Some(Box::new(observer));
        self
    }

    /// Feed one gesture sample.
    ///
    /// `factor` is the cumulative magnification since the gesture began.
    /// Returns the new effective scale.
    pub fn update(&mut self, factor: f64) -> f64 {
        self.phase = GesturePhase::Scaling;
        self.live_factor = factor;
        let effective = self.effective_scale();
        if let Some(observer) = self.on_changed.as_mut() {
            observer(effective);
        }
        effective
    }

    /// Finish the gesture with its final magnification.
    ///
    /// Folds `factor` into the persisted scale (clamped), resets the live
    /// factor to 1.0 and returns the new persisted scale. Calling this while
    /// idle applies `factor` as a one-shot gesture.
    pub fn end(&mut self, factor: f64) -> f64 {
        let persisted = self.bounds.clamp(self.storage.get() * factor);
        self.storage.set(persisted);
        self.live_factor = 1.0;
        self.phase = GesturePhase::Idle;
        if let Some(observer) = self.on_ended.as_mut() {
            observer(persisted);
        }
        persisted
    }

    /// Set the persisted scale back to exactly 1.0.
    ///
    /// An in-flight gesture keeps its live factor. Observers are not notified.
    pub fn reset(&mut self) {
        self.storage.set(1.0);
    }

    /// `clamp(persisted × live)`: the scale to render right now.
    #[inline]
    pub fn effective_scale(&self) -> f64 {
        self.bounds.clamp(self.storage.get() * self.live_factor)
    }

    /// The scale kept between gestures.
    #[inline]
    pub fn persisted_scale(&self) -> f64 {
        self.storage.get()
    }

    /// Magnification of the current gesture, 1.0 when idle.
    #[inline]
    pub fn live_factor(&self) -> f64 {
        self.live_factor
    }

    #[inline]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[inline]
    pub fn bounds(&self) -> ScaleBounds {
        self.bounds
    }

    /// Give the storage back, dropping observers.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S: ScaleStorage> fmt::Debug for PinchScale<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinchScale")
            .field("persisted", &self.storage.get())
            .field("live_factor", &self.live_factor)
            .field("phase", &self.phase)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::SharedScale;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn bounds(min: f64, max: f64) -> ScaleBounds {
        ScaleBounds::new(min, max).unwrap()
    }

    #[test]
    fn test_starts_idle_at_identity() {
        let zoom = PinchScale::new(bounds(0.5, 3.0));
        assert_eq!(zoom.phase(), GesturePhase::Idle);
        assert_eq!(zoom.persisted_scale(), 1.0);
        assert_eq!(zoom.live_factor(), 1.0);
        assert_eq!(zoom.effective_scale(), 1.0);
    }

    #[test]
    fn test_update_enters_scaling_and_clamps() {
        let mut zoom = PinchScale::new(bounds(1.0, 4.0));

        assert_eq!(zoom.update(1.5), 1.5);
        assert_eq!(zoom.phase(), GesturePhase::Scaling);
        assert_eq!(zoom.update(0.5), 1.0);
        assert_eq!(zoom.update(6.0), 4.0);
        // persisted value is untouched mid-gesture
        assert_eq!(zoom.persisted_scale(), 1.0);
    }

    #[test]
    fn test_end_persists_and_returns_to_idle() {
        let mut zoom = PinchScale::new(bounds(1.0, 4.0));
        zoom.update(2.0);
        assert_eq!(zoom.end(2.0), 2.0);
        assert_eq!(zoom.phase(), GesturePhase::Idle);
        assert_eq!(zoom.live_factor(), 1.0);

        // the next gesture multiplies on top of the persisted scale
        assert_eq!(zoom.update(1.5), 3.0);
        assert_eq!(zoom.end(1.5), 3.0);
        assert_eq!(zoom.end(0.1), 1.0);
    }

    #[test]
    fn test_observers_receive_effective_and_persisted() {
        let changed = Rc::new(RefCell::new(Vec::new()));
        let ended = Rc::new(RefCell::new(Vec::new()));

        let mut zoom = PinchScale::new(bounds(1.0, 4.0))
            .on_changed({
                let changed = changed.clone();
                move |s| changed.borrow_mut().push(s)
            })
            .on_ended({
                let ended = ended.clone();
                move |s| ended.borrow_mut().push(s)
            });

        zoom.update(1.0);
        zoom.update(2.0);
        zoom.update(5.0);
        zoom.end(5.0);

        assert_eq!(*changed.borrow(), vec![1.0, 2.0, 4.0]);
        assert_eq!(*ended.borrow(), vec![4.0]);
    }

    #[test]
    fn test_reset_keeps_live_factor() {
        let mut zoom = PinchScale::new(bounds(0.5, 8.0));
        zoom.update(2.0);
        zoom.end(2.0);
        zoom.update(3.0);
        assert_eq!(zoom.effective_scale(), 6.0);

        zoom.reset();
        assert_eq!(zoom.persisted_scale(), 1.0);
        assert_eq!(zoom.live_factor(), 3.0);
        assert_eq!(zoom.phase(), GesturePhase::Scaling);
        assert_eq!(zoom.effective_scale(), 3.0);
    }

    #[test]
    fn test_reset_when_idle() {
        let mut zoom = PinchScale::new(bounds(1.0, 4.0));
        zoom.reset();
        assert_eq!(zoom.persisted_scale(), 1.0);
        assert_eq!(zoom.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_reset_is_exact_even_outside_bounds() {
        let mut zoom = PinchScale::new(bounds(2.0, 4.0));
        zoom.end(3.0);
        assert_eq!(zoom.persisted_scale(), 3.0);
        zoom.reset();
        assert_eq!(zoom.persisted_scale(), 1.0);
        assert_eq!(zoom.effective_scale(), 2.0);
    }

    #[test]
    fn test_nan_sample_collapses_to_minimum() {
        let mut zoom = PinchScale::new(bounds(1.0, 4.0));
        assert_eq!(zoom.update(f64::NAN), 1.0);
        assert_eq!(zoom.end(f64::NAN), 1.0);
    }

    #[test]
    fn test_bound_to_shared_scale() {
        let shared = SharedScale::new(2.0);
        let mut zoom = PinchScale::bound(shared.clone(), bounds(1.0, 4.0));

        assert_eq!(zoom.update(1.5), 3.0);
        zoom.end(1.5);
        assert_eq!(shared.get(), 3.0);

        // the owner edits the value between gestures
        shared.set(1.25);
        assert_eq!(zoom.persisted_scale(), 1.25);

        zoom.reset();
        assert_eq!(shared.get(), 1.0);
    }

    #[test]
    fn test_bound_to_borrowed_value() {
        let mut persisted = 1.0f64;
        {
            let mut zoom = PinchScale::bound(&mut persisted, bounds(1.0, 4.0));
            zoom.update(2.5);
            zoom.end(2.5);
        }
        assert_eq!(persisted, 2.5);
    }

    #[test]
    fn test_into_storage() {
        let mut zoom = PinchScale::new(bounds(1.0, 4.0));
        zoom.end(3.5);
        assert_eq!(zoom.into_storage(), 3.5);
    }
}
