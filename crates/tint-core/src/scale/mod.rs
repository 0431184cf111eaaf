//! Bounded interactive scale
//!
//! A pinch gesture delivers a continuous magnification factor; the view
//! renders `clamp(persisted × live, min, max)` and folds the final factor
//! into the persisted value when the gesture ends.
//!
//! - [`ScaleBounds`]: validated `min..=max` range
//! - [`ScaleStorage`]: who owns the persisted factor
//! - [`PinchScale`]: the state machine itself
//!
//! Everything here is single-threaded and synchronous. Calls happen on
//! whatever thread delivers gesture events.

mod bounds;
mod pinch;
mod storage;

pub use bounds::{ScaleBounds, ScaleError};
pub use pinch::{GesturePhase, PinchScale};
pub use storage::{ScaleStorage, SharedScale};
