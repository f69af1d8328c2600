//! Shared types and constants used across qrsvg.
//! Holds the fixed `RenderSettings` applied to every symbol.
use qrcode::EcLevel;

/// Rendering units per module edge.
pub const MODULE_SCALE: u32 = 4;

/// Width of the light border, in modules, drawn when the quiet zone is on.
pub const QUIET_ZONE_MODULES: u32 = 4;

pub const SVG_EXTENSION: &str = "svg";

/// How a symbol is encoded and drawn. Every run uses `RenderSettings::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub scale: u32,
    pub quiet_zone: bool,
    pub ec_level: EcLevel,
    pub dark_color: &'static str,
    /// `none` leaves the background transparent
    pub light_color: &'static str,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scale: MODULE_SCALE,
            quiet_zone: true,
            ec_level: EcLevel::H,
            dark_color: "#000000",
            light_color: "none",
        }
    }
}

impl RenderSettings {
    /// Side length of the rendered image for a symbol `modules` wide.
    pub fn image_side(&self, modules: usize) -> u32 {
        let border = if self.quiet_zone {
            2 * QUIET_ZONE_MODULES
        } else {
            0
        };
        (modules as u32 + border) * self.scale
    }
}
