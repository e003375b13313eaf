//! Clickable text button
//!
//! A label on a padded background that swaps to a second style while the
//! pointer is over it and reports clicks released inside its bounds.

use crate::collision::Aabb;
use crate::text::{draw_text_centered, text_height, text_width};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for one button state
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    pub text_color: Color,
    pub background_color: Color,
    /// Space between the label and the edge of the background, in pixels
    pub padding: u32,
}

impl ButtonStyle {
    /// Bright red background with white text, including the first frame
    /// before the pointer has ever moved
    pub fn normal() -> Self {
        ButtonStyle {
            text_color: Color::RGB(255, 255, 255),
            background_color: Color::RGB(255, 0, 0),
            padding: 10,
        }
    }

    /// Dark red background with black text and a slightly larger pad
    pub fn hovered() -> Self {
        ButtonStyle {
            text_color: Color::RGB(0, 0, 0),
            background_color: Color::RGB(128, 0, 0),
            padding: 12,
        }
    }
}

pub struct Button {
    label: String,
    center_x: i32,
    center_y: i32,
    scale: u32,
    normal_style: ButtonStyle,
    hover_style: ButtonStyle,
    hovered: bool,
}

impl Button {
    pub fn new(label: &str, center_x: i32, center_y: i32, scale: u32) -> Self {
        Button {
            label: label.to_string(),
            center_x,
            center_y,
            scale,
            normal_style: ButtonStyle::normal(),
            hover_style: ButtonStyle::hovered(),
            hovered: false,
        }
    }

    pub fn style(&self) -> &ButtonStyle {
        if self.hovered {
            &self.hover_style
        } else {
            &self.normal_style
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Background rectangle for the current style.
    pub fn bounds(&self) -> Aabb {
        let padding = self.style().padding as f32 * 2.0;
        Aabb::from_center(
            self.center_x as f32,
            self.center_y as f32,
            text_width(&self.label, self.scale) as f32 + padding,
            text_height(self.scale) as f32 + padding,
        )
    }

    /// Updates hover state; returns true when it changed.
    pub fn pointer_moved(&mut self, x: i32, y: i32) -> bool {
        let inside = self.bounds().contains_point(x as f32, y as f32);
        let changed = inside != self.hovered;
        self.hovered = inside;
        changed
    }

    /// Returns true when the release happened on the button.
    pub fn pointer_released(&mut self, x: i32, y: i32) -> bool {
        self.bounds().contains_point(x as f32, y as f32)
    }

    /// Drops hover state, e.g. when the button is hidden.
    pub fn reset(&mut self) {
        self.hovered = false;
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let style = self.style();
        canvas.set_draw_color(style.background_color);
        canvas.fill_rect(self.bounds().to_rect())?;
        draw_text_centered(
            canvas,
            &self.label,
            self.center_x,
            self.center_y,
            style.text_color,
            self.scale,
        )
    }
}
