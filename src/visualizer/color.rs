// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

/// Color type for visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// White color.
    pub const WHITE: Self = Self(255, 255, 255);
    /// Black color.
    pub const BLACK: Self = Self(0, 0, 0);

    /// Create a new color from RGB values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Pack as `0x00RRGGBB`, the pixel layout window buffers expect.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        Self([color.0, color.1, color.2])
    }
}

/// Overlay palette.
pub struct Theme;

impl Theme {
    /// Skeleton lines and label borders.
    pub const PRIMARY: Color = Color(0, 255, 204);
    /// Motion marker.
    pub const SECONDARY: Color = Color(255, 82, 82);
    /// Landmark points.
    pub const SUCCESS: Color = Color(76, 175, 80);
    /// HUD highlights.
    pub const ACCENT: Color = Color(33, 150, 243);
    /// Label and HUD panel fill.
    pub const PANEL_BG: Color = Color(26, 26, 26);
    pub const TEXT: Color = Color::WHITE;
    pub const TEXT_DIM: Color = Color(136, 136, 136);
    /// Drop shadow under lines and panels.
    pub const SHADOW: Color = Color::BLACK;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_u32() {
        assert_eq!(Color::new(0x12, 0x34, 0x56).to_u32(), 0x0012_3456);
        assert_eq!(Color::WHITE.to_u32(), 0x00FF_FFFF);
    }

    #[test]
    fn test_into_rgb() {
        let rgb: image::Rgb<u8> = Theme::PRIMARY.into();
        assert_eq!(rgb.0, [0, 255, 204]);
    }
}
