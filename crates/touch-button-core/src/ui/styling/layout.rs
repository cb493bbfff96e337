//! Text alignment and placement
//!
//! A [`TextAlign`] picks one of nine anchor points (3 vertical × 3 horizontal)
//! inside a rectangle. [`TextAlign::text_origin`] turns that anchor into the
//! baseline origin of a label, given the measured text width and the font's
//! ascent/descent.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::render::FontMetrics;

/// Horizontal component of a [`TextAlign`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Vertical component of a [`TextAlign`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Text anchor inside the button rectangle
///
/// Discriminants follow the datum numbering used by TFT display libraries
/// (top-left = 0 ... bottom-right = 8), which is also the wire value in
/// stored style records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TextAlign {
    TopLeft = 0,
    TopCenter = 1,
    TopRight = 2,
    MiddleLeft = 3,
    #[default]
    MiddleCenter = 4,
    MiddleRight = 5,
    BottomLeft = 6,
    BottomCenter = 7,
    BottomRight = 8,
}

impl TextAlign {
    /// Convert from a raw datum code.
    ///
    /// Codes outside `0..=8` fall back to [`TextAlign::MiddleLeft`].
    pub fn from_datum(datum: u8) -> Self {
        match datum {
            0 => Self::TopLeft,
            1 => Self::TopCenter,
            2 => Self::TopRight,
            3 => Self::MiddleLeft,
            4 => Self::MiddleCenter,
            5 => Self::MiddleRight,
            6 => Self::BottomLeft,
            7 => Self::BottomCenter,
            8 => Self::BottomRight,
            _ => Self::MiddleLeft,
        }
    }

    /// Raw datum code
    pub fn to_datum(self) -> u8 {
        self as u8
    }

    pub fn horizontal(self) -> HorizontalAlign {
        match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => HorizontalAlign::Left,
            Self::TopCenter | Self::MiddleCenter | Self::BottomCenter => HorizontalAlign::Center,
            Self::TopRight | Self::MiddleRight | Self::BottomRight => HorizontalAlign::Right,
        }
    }

    pub fn vertical(self) -> VerticalAlign {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => VerticalAlign::Top,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => VerticalAlign::Middle,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => VerticalAlign::Bottom,
        }
    }

    /// Baseline origin of a label of width `text_width` inside `bounds`.
    ///
    /// Padding only applies on the side the text is anchored to; centered
    /// axes ignore it. The middle row uses `(h + ascent - descent) / 2`,
    /// which approximates optical centering for the stock fonts.
    pub fn text_origin(
        self,
        bounds: Rectangle,
        padding: u32,
        text_width: i32,
        metrics: FontMetrics,
    ) -> Point {
        // Widened so far-offset or oversized rectangles cannot overflow
        let x = bounds.top_left.x as i64;
        let y = bounds.top_left.y as i64;
        let w = bounds.size.width as i64;
        let h = bounds.size.height as i64;
        let padding = padding as i64;
        let text_width = text_width as i64;
        let ascent = metrics.ascent as i64;
        let descent = metrics.descent as i64;

        let text_x = match self.horizontal() {
            HorizontalAlign::Left => x + padding,
            HorizontalAlign::Center => x + (w - text_width) / 2,
            HorizontalAlign::Right => x + w - text_width - padding,
        };

        let text_y = match self.vertical() {
            VerticalAlign::Top => y + ascent + padding,
            VerticalAlign::Middle => y + (h + (ascent - descent)) / 2,
            VerticalAlign::Bottom => y + h - descent - padding,
        };

        Point::new(clamp_coord(text_x), clamp_coord(text_y))
    }
}

fn clamp_coord(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
