//! Color definitions and palette management
//!
//! Colors are RGB565, the native format of the SPI TFT panels this widget
//! targets.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Stock panel colors
// ============================================================================

/// Pure white (0xFFFF)
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Pure black (0x0000)
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Light gray (0xD69A) - disabled text
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(26, 52, 26);

/// Dark gray (0x7BEF) - default button face
pub const DARK_GRAY: Rgb565 = Rgb565::new(15, 31, 15);

/// Blue (0x001F)
pub const BLUE: Rgb565 = Rgb565::new(0, 0, 31);

/// Red (0xF800)
pub const RED: Rgb565 = Rgb565::new(31, 0, 0);

/// Olive (0x7BE0)
pub const OLIVE: Rgb565 = Rgb565::new(15, 31, 0);

// ============================================================================
// Themed colors
// ============================================================================

/// Primary background color - very dark gray-blue
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

/// Surface color - slightly lighter than background
pub const COLOR_SURFACE: Rgb565 = Rgb565::new(26 >> 3, 32 >> 2, 33 >> 3);

/// Border/stroke color - medium gray
pub const COLOR_STROKE: Rgb565 = Rgb565::new(43 >> 3, 55 >> 2, 57 >> 3);

/// Accent - bright teal-green
pub const COLOR_ACCENT: Rgb565 = Rgb565::new(95 >> 3, 185 >> 2, 141 >> 3);

/// Accent pressed - dark teal
pub const COLOR_ACCENT_DARK: Rgb565 = Rgb565::new(29 >> 3, 47 >> 2, 43 >> 3);

// ============================================================================
// Color Palette
// ============================================================================

/// A cohesive color palette for consistent button theming.
///
/// # Examples
///
/// ```ignore
/// let style = ButtonStyle::from_palette(&ColorPalette::dark());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Accent color for the idle button face
    pub primary: Rgb565,

    /// Accent color for the pressed button face
    pub primary_pressed: Rgb565,

    /// Main background color
    pub background: Rgb565,

    /// Surface color for disabled faces
    pub surface: Rgb565,

    /// Primary text color - high contrast
    pub text_primary: Rgb565,

    /// Secondary text color - lower contrast, used when disabled
    pub text_secondary: Rgb565,

    /// Border color for outlines
    pub border: Rgb565,
}

impl Default for ColorPalette {
    /// Returns the default dark theme palette
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Creates a dark theme palette (default)
    pub fn dark() -> Self {
        Self {
            primary: COLOR_ACCENT,
            primary_pressed: COLOR_ACCENT_DARK,
            background: COLOR_BACKGROUND,
            surface: COLOR_SURFACE,
            text_primary: WHITE,
            text_secondary: LIGHT_GRAY,
            border: COLOR_STROKE,
        }
    }

    /// Creates a light theme palette
    pub fn light() -> Self {
        Self {
            primary: COLOR_ACCENT,
            primary_pressed: COLOR_ACCENT_DARK,
            background: WHITE,
            surface: LIGHT_GRAY,
            text_primary: COLOR_BACKGROUND,
            text_secondary: DARK_GRAY,
            border: COLOR_STROKE,
        }
    }
}
