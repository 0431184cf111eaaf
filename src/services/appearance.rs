//! Navigation bar appearance bridge.
//!
//! Views publish the navigation bar colors they want; whoever renders the
//! bar subscribes and applies every change as soon as it arrives.

use std::sync::Arc;
use tint_core::Color;
use tokio::sync::watch;

/// Colors requested for the navigation bar. `None` means platform default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationAppearance {
    pub background: Option<Color>,
    pub title: Option<Color>,
}

impl NavigationAppearance {
    /// Title color to render: the explicit title color, else whichever of
    /// black or white contrasts best with the background.
    pub fn resolved_title(&self) -> Option<Color> {
        self.title
            .or_else(|| self.background.map(Color::best_contrasting_color))
    }
}

/// Which part of the navigation bar a color applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppearanceTarget {
    Background,
    Title,
}

/// Publishes navigation bar appearance changes to subscribers
pub struct AppearanceBridge {
    sender: watch::Sender<NavigationAppearance>,
}

impl AppearanceBridge {
    pub fn new() -> Self {
        Self::with_initial(NavigationAppearance::default())
    }

    pub fn with_initial(initial: NavigationAppearance) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Set one color, leaving the other untouched
    pub fn set(&self, target: AppearanceTarget, color: Option<Color>) {
        self.sender.send_modify(|appearance| match target {
            AppearanceTarget::Background => appearance.background = color,
            AppearanceTarget::Title => appearance.title = color,
        });
        tracing::debug!(
            ?target,
            color = %color.map(|c| c.to_hex()).unwrap_or_else(|| "default".into()),
            subscribers = self.sender.receiver_count(),
            "Navigation bar color changed"
        );
    }

    pub fn set_background(&self, color: Option<Color>) {
        self.set(AppearanceTarget::Background, color);
    }

    pub fn set_title_color(&self, color: Option<Color>) {
        self.set(AppearanceTarget::Title, color);
    }

    /// Replace the whole appearance at once
    pub fn publish(&self, appearance: NavigationAppearance) {
        self.sender.send_replace(appearance);
        tracing::debug!(
            ?appearance,
            subscribers = self.sender.receiver_count(),
            "Navigation bar appearance published"
        );
    }

    /// Back to platform defaults
    pub fn clear(&self) {
        self.publish(NavigationAppearance::default());
    }

    pub fn current(&self) -> NavigationAppearance {
        *self.sender.borrow()
    }

    /// Subscribe to appearance changes
    pub fn subscribe(&self) -> watch::Receiver<NavigationAppearance> {
        self.sender.subscribe()
    }
}

impl Default for AppearanceBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared appearance bridge
pub type SharedAppearanceBridge = Arc<AppearanceBridge>;
