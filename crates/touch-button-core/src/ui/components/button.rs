// src/ui/components/button.rs
//! Touch button with press/drag/release semantics and dirty-tracked redraws

use alloc::boxed::Box;

use embedded_graphics::primitives::Rectangle;
use log::{debug, trace};

use super::text::TextWidget;
use crate::ui::core::{Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::render::Renderer;
use crate::ui::styling::ButtonStyle;

/// Press/release handler
///
/// Handlers run synchronously inside the touch call that triggered them and
/// must not call back into the button.
pub type Callback = Box<dyn FnMut()>;

/// Logical button state as seen by the style resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Pressed,
    Disabled,
}

impl ButtonState {
    /// Disabled overrides pressed, pressed overrides normal.
    pub fn resolve(enabled: bool, pressed: bool) -> Self {
        if !enabled {
            ButtonState::Disabled
        } else if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Normal
        }
    }
}

/// Button component with label and press/release handlers
///
/// An interactive button that tracks a single touch and redraws only when its
/// appearance changed.
///
/// # Touch Behavior
/// - Press inside an enabled button: becomes pressed, fires `on_press`
/// - Drag: pressed follows whether the touch is still over the button
/// - Release while pressed: becomes unpressed; `on_release` fires only if
///   the touch was lifted inside the button
///
/// # Examples
/// ```ignore
/// let mut button = Button::new(
///     Rectangle::new(Point::new(10, 50), Size::new(100, 40)),
///     "My Button",
///     ButtonStyle::default(),
/// )
/// .with_on_press(|| log::info!("pressed"))
/// .with_on_release(|| log::info!("released"));
///
/// // Each polling cycle:
/// match touch {
///     Some(p) => {
///         button.handle_press(p);
///         button.handle_drag(p);
///     }
///     None => {
///         button.handle_release(last);
///     }
/// }
/// button.draw(&mut renderer, false)?;
/// ```
pub struct Button {
    base: TextWidget,
    style: ButtonStyle,
    pressed: bool,
    on_press: Option<Callback>,
    on_release: Option<Callback>,
}

impl Button {
    /// Create an enabled, unpressed button with no handlers.
    pub fn new(bounds: Rectangle, label: &str, style: ButtonStyle) -> Self {
        Self {
            base: TextWidget::new(bounds, label),
            style,
            pressed: false,
            on_press: None,
            on_release: None,
        }
    }

    /// Set the handler fired when the button becomes pressed.
    pub fn with_on_press(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(callback));
        self
    }

    /// Set the handler fired when the button is released inside its bounds.
    pub fn with_on_release(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_release = Some(Box::new(callback));
        self
    }

    /// Construct the button enabled or disabled.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    /// Replace (or clear) the press handler.
    pub fn set_on_press(&mut self, callback: Option<Callback>) {
        self.on_press = callback;
    }

    /// Replace (or clear) the release handler.
    pub fn set_on_release(&mut self, callback: Option<Callback>) {
        self.on_release = callback;
    }

    /// Replace the style. Always marks dirty, even for an identical style.
    pub fn set_style(&mut self, style: ButtonStyle) {
        self.style = style;
        self.base.mark_dirty();
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Enable or disable the button.
    ///
    /// Disabling drops any press in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.base.set_enabled(enabled) {
            debug!("button '{}': enabled={}", self.base.label(), enabled);
        }
        if !enabled && self.pressed {
            self.pressed = false;
            self.base.mark_dirty();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.base.is_enabled()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Current state for style resolution
    pub fn state(&self) -> ButtonState {
        ButtonState::resolve(self.base.is_enabled(), self.pressed)
    }

    pub fn label(&self) -> &str {
        self.base.label()
    }

    pub fn set_label(&mut self, label: &str) {
        self.base.set_label(label);
    }

    /// Move or resize the hit region and drawn area.
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.base.set_bounds(bounds);
    }

    /// Touch went down at `point`.
    ///
    /// Ignored when disabled, already pressed, or outside the button.
    pub fn handle_press(&mut self, point: TouchPoint) -> TouchResult {
        if !self.base.is_enabled() || self.pressed || !self.base.contains(point) {
            return TouchResult::NotHandled;
        }

        debug!("button '{}': press at {:?}", self.base.label(), point);
        self.pressed = true;
        self.base.mark_dirty();

        if let Some(callback) = self.on_press.as_mut() {
            callback();
        }
        TouchResult::Handled
    }

    /// Touch was lifted; `point` is the last known position.
    ///
    /// Clears the pressed state if set. The release handler only fires when
    /// the touch was lifted inside the button, so dragging off cancels it.
    pub fn handle_release(&mut self, point: TouchPoint) -> TouchResult {
        if !self.pressed {
            return TouchResult::NotHandled;
        }

        self.pressed = false;
        self.base.mark_dirty();

        let inside = self.base.contains(point);
        debug!(
            "button '{}': release at {:?} (inside: {})",
            self.base.label(),
            point,
            inside
        );

        if inside && let Some(callback) = self.on_release.as_mut() {
            callback();
        }
        TouchResult::Handled
    }

    /// Sustained touch moved to `point`.
    ///
    /// The pressed state follows whether the touch is over the button. No
    /// handler fires from a drag.
    pub fn handle_drag(&mut self, point: TouchPoint) -> TouchResult {
        if !self.base.is_enabled() {
            return TouchResult::NotHandled;
        }

        let inside = self.base.contains(point);
        if self.pressed == inside {
            return TouchResult::NotHandled;
        }

        debug!(
            "button '{}': drag to {:?}, pressed -> {}",
            self.base.label(),
            point,
            inside
        );
        self.pressed = inside;
        self.base.mark_dirty();
        TouchResult::Handled
    }
}

impl Drawable for Button {
    fn render<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        let bounds = self.base.bounds();
        let colors = self.style.colors(self.state());
        let radius = self.style.corner_radius;
        let font = self.style.font;
        let label = self.base.label();

        trace!("button '{}': redraw as {:?}", label, self.state());

        renderer.fill_rounded_rect(bounds, radius, colors.fill)?;
        renderer.stroke_rounded_rect(bounds, radius, colors.outline)?;

        let text_width = renderer.text_width(font, label);
        let metrics = renderer.font_metrics(font);
        let origin = self
            .style
            .text_align
            .text_origin(bounds, self.style.padding, text_width, metrics);

        // Fill as background so glyph edges blend into the button face
        renderer.draw_text(origin, label, font, colors.text, colors.fill)
    }

    fn bounds(&self) -> Rectangle {
        self.base.bounds()
    }

    fn is_dirty(&self) -> bool {
        self.base.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.base.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.base.mark_dirty();
    }
}

impl Touchable for Button {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.base.contains(point)
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) => self.handle_press(point),
            TouchEvent::Drag(point) => self.handle_drag(point),
            TouchEvent::Release(point) => self.handle_release(point),
        }
    }
}
