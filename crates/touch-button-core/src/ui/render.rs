// src/ui/render.rs
//! Rendering seam between widgets and the display
//!
//! Widgets never talk to a display driver directly. They issue the handful of
//! primitives they need through [`Renderer`], and [`EgRenderer`] maps those
//! onto any embedded-graphics `DrawTarget<Color = Rgb565>` (the SPI panel on
//! hardware, `SimulatorDisplay` on the desktop, `MockDisplay` in tests).

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};

/// Vertical font extents relative to the baseline
///
/// `ascent` is the number of rows above the baseline. `descent` is measured
/// downwards and is zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub ascent: i32,
    pub descent: i32,
}

impl FontMetrics {
    pub fn new(ascent: i32, descent: i32) -> Self {
        Self { ascent, descent }
    }

    /// Metrics of a monospaced embedded-graphics font
    pub fn of(font: &MonoFont<'_>) -> Self {
        let baseline = font.baseline as i32;
        let height = font.character_size.height as i32;
        Self {
            ascent: baseline,
            descent: baseline + 1 - height,
        }
    }

    /// Total glyph height (`ascent - descent`)
    pub fn height(&self) -> i32 {
        self.ascent - self.descent
    }
}

/// Drawing primitives a widget needs from the display
pub trait Renderer {
    type Error;

    /// Fill a rounded rectangle with equal corner radii.
    fn fill_rounded_rect(
        &mut self,
        rect: Rectangle,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Stroke a 1px outline of a rounded rectangle with equal corner radii.
    fn stroke_rounded_rect(
        &mut self,
        rect: Rectangle,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Advance width of `text` in pixels.
    fn text_width(&self, font: &MonoFont<'static>, text: &str) -> i32;

    /// Ascent/descent of `font`.
    fn font_metrics(&self, font: &MonoFont<'static>) -> FontMetrics;

    /// Draw `text` with its baseline starting at `origin`.
    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        font: &'static MonoFont<'static>,
        foreground: Rgb565,
        background: Rgb565,
    ) -> Result<(), Self::Error>;
}

/// [`Renderer`] backed by an embedded-graphics draw target
pub struct EgRenderer<'a, D> {
    target: &'a mut D,
}

impl<'a, D> EgRenderer<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

impl<D> Renderer for EgRenderer<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn fill_rounded_rect(
        &mut self,
        rect: Rectangle,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut *self.target)
    }

    fn stroke_rounded_rect(
        &mut self,
        rect: Rectangle,
        radius: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut *self.target)
    }

    fn text_width(&self, font: &MonoFont<'static>, text: &str) -> i32 {
        // Color does not affect metrics
        let style = MonoTextStyle::new(font, Rgb565::WHITE);
        style
            .measure_string(text, Point::zero(), Baseline::Alphabetic)
            .bounding_box
            .size
            .width as i32
    }

    fn font_metrics(&self, font: &MonoFont<'static>) -> FontMetrics {
        FontMetrics::of(font)
    }

    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        font: &'static MonoFont<'static>,
        foreground: Rgb565,
        background: Rgb565,
    ) -> Result<(), Self::Error> {
        let style = MonoTextStyleBuilder::new()
            .font(font)
            .text_color(foreground)
            .background_color(background)
            .build();

        Text::with_baseline(text, origin, style, Baseline::Alphabetic).draw(&mut *self.target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};

    #[test]
    fn test_font_metrics_span_glyph_height() {
        let metrics = FontMetrics::of(&FONT_6X10);
        assert_eq!(metrics.ascent, FONT_6X10.baseline as i32);
        assert!(metrics.descent <= 0);
        assert_eq!(metrics.height() + 1, FONT_6X10.character_size.height as i32);
    }

    #[test]
    fn test_text_width_is_per_glyph_advance() {
        let mut display = MockDisplay::<Rgb565>::new();
        let renderer = EgRenderer::new(&mut display);

        assert_eq!(renderer.text_width(&FONT_6X10, "OK"), 12);
        assert_eq!(renderer.text_width(&FONT_10X20, "abc"), 30);
        assert_eq!(renderer.text_width(&FONT_6X10, ""), 0);
    }

    #[test]
    fn test_fill_rounded_rect_paints_interior() {
        let mut display = MockDisplay::<Rgb565>::new();
        let rect = Rectangle::new(Point::new(2, 2), Size::new(20, 12));

        EgRenderer::new(&mut display)
            .fill_rounded_rect(rect, 3, Rgb565::BLUE)
            .unwrap();

        assert_eq!(display.get_pixel(Point::new(10, 8)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(30, 30)), None);
        // Rounded corner leaves the very corner pixel untouched
        assert_eq!(display.get_pixel(Point::new(2, 2)), None);
    }

    #[test]
    fn test_draw_text_paints_background_cells() {
        let mut display = MockDisplay::<Rgb565>::new();
        let metrics = FontMetrics::of(&FONT_6X10);

        EgRenderer::new(&mut display)
            .draw_text(
                Point::new(0, metrics.ascent),
                " ",
                &FONT_6X10,
                Rgb565::WHITE,
                Rgb565::RED,
            )
            .unwrap();

        // A space glyph is entirely background
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(5, 9)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(6, 0)), None);
    }
}
