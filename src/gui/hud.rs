//! Score text in the top-left corner

use crate::text::draw_text;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for HUD text appearance
#[derive(Debug, Clone)]
pub struct HudStyle {
    pub text_color: Color,
    pub scale: u32,
}

impl Default for HudStyle {
    fn default() -> Self {
        HudStyle {
            text_color: Color::RGB(255, 255, 255),
            scale: 2,
        }
    }
}

pub struct Hud {
    x: i32,
    y: i32,
    style: HudStyle,
}

impl Hud {
    pub fn new(x: i32, y: i32) -> Self {
        Hud {
            x,
            y,
            style: HudStyle::default(),
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, score_text: &str) -> Result<(), String> {
        draw_text(canvas, score_text, self.x, self.y, self.style.text_color, self.style.scale)
    }
}
