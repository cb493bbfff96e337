//! Stored button style records
//!
//! A [`ButtonStyleConfig`] is the serializable form of a
//! [`ButtonStyle`](crate::ui::styling::ButtonStyle): raw RGB565 color codes,
//! a font size preset and a raw alignment datum. Records are encoded with
//! postcard so they can live on flash or an SD card next to other settings.

use alloc::vec::Vec;

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X10, FONT_10X20};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::ui::styling::{ButtonStyle, StateColors, TextAlign};

/// Error types for style record operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The record could not be decoded
    #[error("Malformed style record: {0}")]
    Decode(postcard::Error),

    /// The record could not be encoded
    #[error("Failed to encode style record: {0}")]
    Encode(postcard::Error),
}

/// Result type for style record operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Font size presets available to stored styles
///
/// - `Small`: 5x8 font
/// - `Medium`: 6x10 font (default)
/// - `Large`: 10x20 font
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            FontSize::Small => &FONT_5X8,
            FontSize::Medium => &FONT_6X10,
            FontSize::Large => &FONT_10X20,
        }
    }

    /// Nearest preset for an arbitrary font, by glyph height
    pub fn nearest(font: &MonoFont<'_>) -> Self {
        match font.character_size.height {
            0..=9 => FontSize::Small,
            10..=15 => FontSize::Medium,
            _ => FontSize::Large,
        }
    }
}

/// Raw RGB565 codes for one button state
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorsConfig {
    pub fill: u16,
    pub outline: u16,
    pub text: u16,
}

impl From<ColorsConfig> for StateColors {
    fn from(config: ColorsConfig) -> Self {
        StateColors::new(
            rgb565(config.fill),
            rgb565(config.outline),
            rgb565(config.text),
        )
    }
}

impl From<StateColors> for ColorsConfig {
    fn from(colors: StateColors) -> Self {
        Self {
            fill: colors.fill.into_storage(),
            outline: colors.outline.into_storage(),
            text: colors.text.into_storage(),
        }
    }
}

fn rgb565(raw: u16) -> Rgb565 {
    Rgb565::from(RawU16::new(raw))
}

/// Serializable description of a [`ButtonStyle`]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyleConfig {
    pub normal: ColorsConfig,
    pub pressed: ColorsConfig,
    pub disabled: ColorsConfig,
    pub corner_radius: u8,
    pub padding: u8,
    pub font: FontSize,
    /// Alignment datum (0 = top-left ... 8 = bottom-right); other values
    /// are accepted and render middle-left.
    pub text_align: u8,
}

impl Default for ButtonStyleConfig {
    fn default() -> Self {
        Self::from(&ButtonStyle::default())
    }
}

impl ButtonStyleConfig {
    /// Decode a postcard record.
    pub fn from_bytes(bytes: &[u8]) -> ConfigResult<Self> {
        postcard::from_bytes(bytes).map_err(ConfigError::Decode)
    }

    /// Encode as a postcard record.
    pub fn to_bytes(&self) -> ConfigResult<Vec<u8>> {
        postcard::to_allocvec(self).map_err(ConfigError::Encode)
    }
}

impl From<ButtonStyleConfig> for ButtonStyle {
    fn from(config: ButtonStyleConfig) -> Self {
        ButtonStyle {
            normal: config.normal.into(),
            pressed: config.pressed.into(),
            disabled: config.disabled.into(),
            corner_radius: config.corner_radius as u32,
            padding: config.padding as u32,
            font: config.font.font(),
            text_align: TextAlign::from_datum(config.text_align),
        }
    }
}

impl From<&ButtonStyle> for ButtonStyleConfig {
    /// Radius and padding saturate at 255.
    fn from(style: &ButtonStyle) -> Self {
        Self {
            normal: style.normal.into(),
            pressed: style.pressed.into(),
            disabled: style.disabled.into(),
            corner_radius: style.corner_radius.min(u8::MAX as u32) as u8,
            padding: style.padding.min(u8::MAX as u32) as u8,
            font: FontSize::nearest(style.font),
            text_align: style.text_align.to_datum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::{BLACK, BLUE, DARK_GRAY, LIGHT_GRAY, OLIVE, WHITE};

    fn demo_config() -> ButtonStyleConfig {
        ButtonStyleConfig {
            normal: ColorsConfig {
                fill: 0xFFFF,
                outline: 0x0000,
                text: 0x0000,
            },
            pressed: ColorsConfig {
                fill: 0x001F,
                outline: 0x0000,
                text: 0xFFFF,
            },
            disabled: ColorsConfig {
                fill: 0xD69A,
                outline: 0x7BE0,
                text: 0x7BEF,
            },
            corner_radius: 5,
            padding: 10,
            font: FontSize::Medium,
            text_align: 4,
        }
    }

    #[test]
    fn test_config_builds_style() {
        let style = ButtonStyle::from(demo_config());

        assert_eq!(style.normal, StateColors::new(WHITE, BLACK, BLACK));
        assert_eq!(style.pressed, StateColors::new(BLUE, BLACK, WHITE));
        assert_eq!(style.disabled, StateColors::new(LIGHT_GRAY, OLIVE, DARK_GRAY));
        assert_eq!(style.corner_radius, 5);
        assert_eq!(style.padding, 10);
        assert_eq!(style.text_align, TextAlign::MiddleCenter);
        assert_eq!(style.font.character_size, FONT_6X10.character_size);
    }

    #[test]
    fn test_unknown_datum_renders_middle_left() {
        let config = ButtonStyleConfig {
            text_align: 42,
            ..demo_config()
        };
        assert_eq!(ButtonStyle::from(config).text_align, TextAlign::MiddleLeft);
    }

    #[test]
    fn test_stored_record_restores_style() {
        let style = ButtonStyle::from(demo_config());
        let bytes = ButtonStyleConfig::from(&style).to_bytes().unwrap();

        let restored = ButtonStyle::from(ButtonStyleConfig::from_bytes(&bytes).unwrap());
        assert_eq!(restored, style);
    }

    #[test]
    fn test_truncated_record_is_rejected() {
        let bytes = demo_config().to_bytes().unwrap();
        let result = ButtonStyleConfig::from_bytes(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(ConfigError::Decode(_))));
    }

    #[test]
    fn test_default_config_mirrors_default_style() {
        let style = ButtonStyle::from(ButtonStyleConfig::default());
        assert_eq!(style, ButtonStyle::default());
    }

    #[test]
    fn test_oversized_shape_values_saturate() {
        let style = ButtonStyle::default().with_padding(1000).with_corner_radius(300);
        let config = ButtonStyleConfig::from(&style);
        assert_eq!(config.padding, 255);
        assert_eq!(config.corner_radius, 255);
    }

    #[test]
    fn test_font_presets_round_trip_by_height() {
        for size in [FontSize::Small, FontSize::Medium, FontSize::Large] {
            assert_eq!(FontSize::nearest(size.font()), size);
        }
    }
}
