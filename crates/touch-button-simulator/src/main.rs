//! Desktop simulator for the touch button widget.
//!
//! Renders a few buttons in an SDL2 window via `embedded-graphics-simulator`
//! and drives them with the mouse exactly the way firmware drives them with
//! the touch controller: one sample per frame, then a dirty-gated redraw.
//!
//! # Key bindings
//!
//! | Key | Action                                   |
//! |-----|------------------------------------------|
//! | D   | Enable/disable the "Send" button         |
//! | A   | Cycle the text alignment of "Align"      |
//! | T   | Swap "Themed" between dark/light palette |
//! | Q   | Quit                                     |
//!
//! Holding the left mouse button is a sustained touch.

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::info;

use touch_button_core::ui::styling::{BLACK, BLUE, DARK_GRAY, LIGHT_GRAY, OLIVE, WHITE};
use touch_button_core::ui::{
    Button, ButtonStyle, ColorPalette, Drawable, EgRenderer, StateColors, TextAlign, TouchPoint,
    TouchSampler,
};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 320;
const DISPLAY_HEIGHT_PX: u32 = 240;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Polling period, same as the touch loop on hardware.
const FRAME_DURATION: Duration = Duration::from_millis(10);

const ALIGNMENTS: [TextAlign; 9] = [
    TextAlign::TopLeft,
    TextAlign::TopCenter,
    TextAlign::TopRight,
    TextAlign::MiddleLeft,
    TextAlign::MiddleCenter,
    TextAlign::MiddleRight,
    TextAlign::BottomLeft,
    TextAlign::BottomCenter,
    TextAlign::BottomRight,
];

// ---------------------------------------------------------------------------
// Button setup
// ---------------------------------------------------------------------------

fn demo_style() -> ButtonStyle {
    ButtonStyle::default()
        .with_normal(StateColors::new(WHITE, BLACK, BLACK))
        .with_pressed(StateColors::new(BLUE, BLACK, WHITE))
        .with_disabled(StateColors::new(LIGHT_GRAY, OLIVE, DARK_GRAY))
        .with_corner_radius(5)
        .with_padding(10)
}

fn rect(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(w, h))
}

fn create_buttons() -> Vec<Button> {
    vec![
        Button::new(rect(10, 50, 100, 40), "Send", demo_style())
            .with_on_press(|| info!("Send pressed"))
            .with_on_release(|| info!("Send released")),
        Button::new(rect(130, 50, 160, 60), "Align", ButtonStyle::default())
            .with_on_release(|| info!("Align released")),
        Button::new(
            rect(10, 140, 280, 50),
            "Themed",
            ButtonStyle::from_palette(&ColorPalette::dark()),
        )
        .with_on_press(|| info!("Themed pressed")),
    ]
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting touch button simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: D=toggle Send  A=cycle alignment  T=toggle theme  Q=Quit");

    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Touch Button Simulator", &output_settings);

    let mut buttons = create_buttons();
    let mut alignment_index = ALIGNMENTS
        .iter()
        .position(|a| *a == TextAlign::default())
        .unwrap_or(0);
    let mut light_theme = false;

    // Mouse edges collected between frames, replayed once per frame
    let mut sampler = TouchSampler::new();

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = display.clear(ColorPalette::dark().background);
    {
        let mut renderer = EgRenderer::new(&mut display);
        for button in buttons.iter_mut() {
            let _ = button.draw(&mut renderer, true);
        }
    }
    window.update(&display);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::D => {
                        let send = &mut buttons[0];
                        let enabled = !send.is_enabled();
                        send.set_enabled(enabled);
                        info!("Send enabled: {}", enabled);
                    }
                    Keycode::A => {
                        alignment_index = (alignment_index + 1) % ALIGNMENTS.len();
                        let align = ALIGNMENTS[alignment_index];
                        let style = buttons[1].style().with_text_align(align);
                        buttons[1].set_style(style);
                        info!("Align → {:?}", align);
                    }
                    Keycode::T => {
                        light_theme = !light_theme;
                        let palette = if light_theme {
                            ColorPalette::light()
                        } else {
                            ColorPalette::dark()
                        };
                        buttons[2].set_style(ButtonStyle::from_palette(&palette));
                        info!("Theme → {}", if light_theme { "light" } else { "dark" });
                    }
                    _ => {}
                },

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    sampler.touch_down(TouchPoint::from(point));
                }

                SimulatorEvent::MouseMove { point } => {
                    sampler.touch_move(TouchPoint::from(point));
                }

                SimulatorEvent::MouseButtonUp { point, .. } => {
                    sampler.touch_up(TouchPoint::from(point));
                }

                _ => {}
            }
        }

        // --- Touch sample -------------------------------------------------
        sampler.apply(&mut buttons);

        // --- Render -------------------------------------------------------
        let mut renderer = EgRenderer::new(&mut display);
        for button in buttons.iter_mut() {
            if let Err(e) = button.draw(&mut renderer, false) {
                log::error!("Draw error: {:?}", e);
            }
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
