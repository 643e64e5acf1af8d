//! The host graphics environment, seen from the annotator.
//!
//! Figures, panels and text objects belong to the host. The annotator only
//! holds copyable handles to them and talks to the host through [`Host`].

use std::ops::{Deref, DerefMut};

use glam::DVec2;
use miette::Diagnostic;
use thiserror::Error;

use crate::log::trace;
use crate::options::{FontAngle, FontWeight};
use crate::types::PanelRect;

/// Vertical text alignment relative to the anchor point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VAlign {
    Top,
    Bottom,
}

/// Horizontal text alignment relative to the anchor point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HAlign {
    Left,
    Right,
}

/// Everything the host needs to create one label text object.
/// `position` is in the panel's normalized coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpec {
    pub text: String,
    pub position: DVec2,
    pub valign: VAlign,
    pub halign: HAlign,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub font_angle: FontAngle,
    pub color: String,
    pub background_color: String,
    pub edge_color: String,
    pub margin: f64,
    pub clipping: bool,
}

/// A failure reported by the host graphics environment
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("host graphics error: {message}")]
#[diagnostic(code(panelmark::host::failed))]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        HostError { message: message.into() }
    }
}

/// Figure/panel/text primitives the annotator depends on.
///
/// Handles are cheap ids. Once a text has been passed to
/// [`Host::delete_text`], further calls with it fail.
pub trait Host {
    type Figure: Copy;
    type Panel: Copy;
    type Text: Copy;

    /// All panels of a figure, in no particular order
    fn panels(&self, figure: Self::Figure) -> Result<Vec<Self::Panel>, HostError>;

    /// The panel's position in its figure
    fn panel_rect(&self, panel: Self::Panel) -> Result<PanelRect, HostError>;

    /// Whether new drawing adds to the panel (`true`) or replaces its content
    fn hold(&self, panel: Self::Panel) -> Result<bool, HostError>;

    fn set_hold(&mut self, panel: Self::Panel, on: bool) -> Result<(), HostError>;

    fn create_text(&mut self, panel: Self::Panel, spec: &TextSpec) -> Result<Self::Text, HostError>;

    fn text(&self, text: Self::Text) -> Result<String, HostError>;

    fn set_text(&mut self, text: Self::Text, value: &str) -> Result<(), HostError>;

    fn font_size(&self, text: Self::Text) -> Result<f64, HostError>;

    fn set_font_size(&mut self, text: Self::Text, size: f64) -> Result<(), HostError>;

    fn set_font_weight(&mut self, text: Self::Text, weight: FontWeight) -> Result<(), HostError>;

    fn set_font_angle(&mut self, text: Self::Text, angle: FontAngle) -> Result<(), HostError>;

    /// Move a text to a point in its panel's normalized coordinates
    fn set_position(&mut self, text: Self::Text, position: DVec2) -> Result<(), HostError>;

    fn delete_text(&mut self, text: Self::Text) -> Result<(), HostError>;
}

/// Forces a panel's hold flag on for as long as it lives.
///
/// If the flag was off when the guard was taken, it is switched back off on
/// drop, whichever way the guarded scope is left. The guard derefs to the
/// host so drawing calls go through it.
pub struct HoldGuard<'h, H: Host> {
    host: &'h mut H,
    panel: H::Panel,
    was_on: bool,
}

impl<'h, H: Host> HoldGuard<'h, H> {
    pub fn acquire(host: &'h mut H, panel: H::Panel) -> Result<Self, HostError> {
        let was_on = host.hold(panel)?;
        if !was_on {
            host.set_hold(panel, true)?;
        }
        trace!(was_on, "hold acquired");
        Ok(HoldGuard { host, panel, was_on })
    }
}

impl<H: Host> Deref for HoldGuard<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: Host> DerefMut for HoldGuard<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: Host> Drop for HoldGuard<'_, H> {
    fn drop(&mut self) {
        if !self.was_on {
            // Drop cannot propagate; a panel that vanished mid-scope has no flag left to restore.
            let _restored = self.host.set_hold(self.panel, false);
            trace!(ok = _restored.is_ok(), "hold restored to off");
        }
    }
}
