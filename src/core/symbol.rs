use std::path::Path;

use qrcode::render::svg;
use qrcode::{EcLevel, QrCode, Version};
use tracing::debug;

use crate::error::Result;
use crate::io::writers::svg::write_svg_document;
use crate::types::RenderSettings;

/// An encoded QR symbol. The module grid belongs to the encoder and is only
/// read back through rendering.
pub struct Symbol {
    code: QrCode,
}

impl Symbol {
    /// Encodes `data` as given, letting the encoder pick segment modes and the
    /// smallest version that fits at `ec_level`.
    pub fn encode(data: &[u8], ec_level: EcLevel) -> Result<Self> {
        let symbol = Self {
            code: QrCode::with_error_correction_level(data, ec_level)?,
        };
        let width = symbol.width();
        debug!(
            "Encoded {} bytes as {:?} ({width}x{width} modules, {:?})",
            data.len(),
            symbol.version(),
            ec_level
        );
        Ok(symbol)
    }

    /// Modules per side, quiet zone excluded.
    pub fn width(&self) -> usize {
        self.code.width()
    }

    pub fn version(&self) -> Version {
        self.code.version()
    }

    /// Renders a complete SVG document. Output depends only on the symbol and
    /// `settings`.
    pub fn render_svg(&self, settings: &RenderSettings) -> String {
        self.code
            .render::<svg::Color>()
            .module_dimensions(settings.scale, settings.scale)
            .quiet_zone(settings.quiet_zone)
            .dark_color(svg::Color(settings.dark_color))
            .light_color(svg::Color(settings.light_color))
            .build()
    }

    pub fn write_svg(&self, output: &Path, settings: &RenderSettings) -> Result<()> {
        let document = self.render_svg(settings);
        write_svg_document(output, &document)?;
        let side = settings.image_side(self.width());
        debug!("Wrote {side}x{side} SVG to {:?}", output);
        Ok(())
    }
}
