//! Button style configuration
//!
//! A [`ButtonStyle`] carries one [`StateColors`] triple per logical button
//! state plus the shape and typography parameters shared by all states.
//! Resolution from state to colors lives in [`ButtonStyle::colors`].

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::mapping::GlyphMapping;
use embedded_graphics::pixelcolor::Rgb565;

use super::colors::{ColorPalette, DARK_GRAY, LIGHT_GRAY, WHITE};
use super::layout::TextAlign;
use crate::ui::components::ButtonState;

/// Fill, outline and text colors for one button state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateColors {
    pub fill: Rgb565,
    pub outline: Rgb565,
    pub text: Rgb565,
}

impl StateColors {
    pub const fn new(fill: Rgb565, outline: Rgb565, text: Rgb565) -> Self {
        Self {
            fill,
            outline,
            text,
        }
    }
}

/// Visual style of a button
///
/// Styles are plain values: a button holds its own copy and only changes it
/// through `Button::set_style`.
///
/// # Examples
///
/// ```ignore
/// let style = ButtonStyle::default()
///     .with_normal(StateColors::new(WHITE, BLACK, BLACK))
///     .with_pressed(StateColors::new(BLUE, BLACK, WHITE))
///     .with_disabled(StateColors::new(LIGHT_GRAY, OLIVE, DARK_GRAY))
///     .with_corner_radius(5)
///     .with_padding(10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ButtonStyle {
    /// Colors while enabled and not pressed
    pub normal: StateColors,

    /// Colors while enabled and pressed
    pub pressed: StateColors,

    /// Colors while disabled, regardless of pressed
    pub disabled: StateColors,

    /// Corner radius in pixels
    pub corner_radius: u32,

    /// Inner margin applied on the side the label is anchored to
    pub padding: u32,

    /// Label font
    pub font: &'static MonoFont<'static>,

    /// Label anchor inside the button
    pub text_align: TextAlign,
}

impl Default for ButtonStyle {
    /// Grey face with white text, inverted while pressed
    fn default() -> Self {
        Self {
            normal: StateColors::new(DARK_GRAY, WHITE, WHITE),
            pressed: StateColors::new(WHITE, DARK_GRAY, DARK_GRAY),
            disabled: StateColors::new(DARK_GRAY, DARK_GRAY, LIGHT_GRAY),
            corner_radius: 6,
            padding: 5,
            font: &FONT_6X10,
            text_align: TextAlign::MiddleCenter,
        }
    }
}

impl PartialEq for ButtonStyle {
    /// `MonoFont` has no equality of its own, so fonts compare by glyph cell
    /// geometry and character mapping. Two faces that share both (a regular
    /// and a bold cut of the same size) are considered the same font.
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal
            && self.pressed == other.pressed
            && self.disabled == other.disabled
            && self.corner_radius == other.corner_radius
            && self.padding == other.padding
            && same_font(self.font, other.font)
            && self.text_align == other.text_align
    }
}

/// Characters that tell the stock ASCII and Latin-1 mappings apart
const MAPPING_SAMPLES: [char; 6] = [' ', 'A', '~', '\u{b0}', '\u{e9}', '\u{ff}'];

fn same_font(a: &MonoFont<'_>, b: &MonoFont<'_>) -> bool {
    if core::ptr::eq(a, b) {
        return true;
    }

    a.character_size == b.character_size
        && a.character_spacing == b.character_spacing
        && a.baseline == b.baseline
        && MAPPING_SAMPLES.iter().all(|&c| {
            GlyphMapping::index(a.glyph_mapping, c) == GlyphMapping::index(b.glyph_mapping, c)
        })
}

impl ButtonStyle {
    /// Derive a style from a themed palette
    pub fn from_palette(palette: &ColorPalette) -> Self {
        Self {
            normal: StateColors::new(palette.primary, palette.border, palette.text_primary),
            pressed: StateColors::new(
                palette.primary_pressed,
                palette.primary,
                palette.text_primary,
            ),
            disabled: StateColors::new(palette.surface, palette.border, palette.text_secondary),
            ..Self::default()
        }
    }

    pub fn with_normal(mut self, colors: StateColors) -> Self {
        self.normal = colors;
        self
    }

    pub fn with_pressed(mut self, colors: StateColors) -> Self {
        self.pressed = colors;
        self
    }

    pub fn with_disabled(mut self, colors: StateColors) -> Self {
        self.disabled = colors;
        self
    }

    pub fn with_corner_radius(mut self, radius: u32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = font;
        self
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    /// Colors to render `state` with
    pub fn colors(&self, state: ButtonState) -> StateColors {
        match state {
            ButtonState::Normal => self.normal,
            ButtonState::Pressed => self.pressed,
            ButtonState::Disabled => self.disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::colors::{BLACK, BLUE, OLIVE};
    use embedded_graphics::mono_font::ascii::FONT_10X20;
    use embedded_graphics::mono_font::iso_8859_1;

    fn demo_style() -> ButtonStyle {
        ButtonStyle::default()
            .with_normal(StateColors::new(WHITE, BLACK, BLACK))
            .with_pressed(StateColors::new(BLUE, BLACK, WHITE))
            .with_disabled(StateColors::new(LIGHT_GRAY, OLIVE, DARK_GRAY))
    }

    #[test]
    fn test_colors_follow_state() {
        let style = demo_style();
        assert_eq!(style.colors(ButtonState::Normal), style.normal);
        assert_eq!(style.colors(ButtonState::Pressed), style.pressed);
        assert_eq!(style.colors(ButtonState::Disabled), style.disabled);
    }

    #[test]
    fn test_disabled_wins_over_pressed() {
        let style = demo_style();
        let state = ButtonState::resolve(false, true);
        assert_eq!(style.colors(state).fill, LIGHT_GRAY);
        assert_eq!(style.colors(state).outline, OLIVE);
    }

    #[test]
    fn test_default_style_matches_stock_look() {
        let style = ButtonStyle::default();
        assert_eq!(style.normal, StateColors::new(DARK_GRAY, WHITE, WHITE));
        assert_eq!(style.pressed.fill, WHITE);
        assert_eq!(style.disabled.text, LIGHT_GRAY);
        assert_eq!(style.corner_radius, 6);
        assert_eq!(style.padding, 5);
        assert_eq!(style.text_align, TextAlign::MiddleCenter);
    }

    #[test]
    fn test_equality_tracks_font() {
        let a = ButtonStyle::default();
        assert_eq!(a, ButtonStyle::default());
        assert_ne!(a, a.with_font(&FONT_10X20));
        assert_ne!(a, a.with_padding(6));
    }

    #[test]
    fn test_equality_tells_character_sets_apart() {
        let ascii = ButtonStyle::default();
        let latin1 = ascii.with_font(&iso_8859_1::FONT_6X10);
        assert_ne!(ascii, latin1);
        assert_eq!(latin1, ascii.with_font(&iso_8859_1::FONT_6X10));
    }

    #[test]
    fn test_palette_style_keeps_shape_defaults() {
        let palette = ColorPalette::light();
        let style = ButtonStyle::from_palette(&palette);
        assert_eq!(style.normal.fill, palette.primary);
        assert_eq!(style.disabled.text, palette.text_secondary);
        assert_eq!(style.corner_radius, ButtonStyle::default().corner_radius);
    }
}
