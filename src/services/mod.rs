pub mod appearance;
pub mod gesture_replay;

pub use appearance::{
    AppearanceBridge, AppearanceTarget, NavigationAppearance, SharedAppearanceBridge,
};
pub use gesture_replay::{GestureReplay, ReplayFrame, ReplayReport};
