//! Game-over screen
//!
//! Shown when a bomb ends the run: a large centred "GAME OVER", the best score
//! on record, and a restart button 100px below the centre. The world behind it
//! stays visible and frozen.

use super::Button;
use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for game-over screen appearance
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    pub title_color: Color,
    pub title_scale: u32,
    pub best_color: Color,
    pub button_scale: u32,
    /// Vertical distance from the screen centre to the button centre
    pub button_offset: i32,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            title_color: Color::RGB(255, 255, 255),
            title_scale: 6,
            best_color: Color::RGB(255, 220, 100),
            button_scale: 3,
            button_offset: 100,
        }
    }
}

pub struct GameOverScreen {
    center_x: i32,
    center_y: i32,
    style: GameOverStyle,
    restart_button: Button,
    best_score: Option<u32>,
}

impl GameOverScreen {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        let style = GameOverStyle::default();
        let center_x = (screen_width / 2) as i32;
        let center_y = (screen_height / 2) as i32;
        let restart_button = Button::new(
            "Restart",
            center_x,
            center_y + style.button_offset,
            style.button_scale,
        );

        GameOverScreen {
            center_x,
            center_y,
            style,
            restart_button,
            best_score: None,
        }
    }

    pub fn set_best_score(&mut self, best: Option<u32>) {
        self.best_score = best;
    }

    #[cfg(test)]
    pub fn restart_button(&self) -> &Button {
        &self.restart_button
    }

    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        if self.restart_button.pointer_moved(x, y) {
            log::trace!("Restart hover: {}", self.restart_button.is_hovered());
        }
    }

    /// Returns true when the restart button was clicked.
    pub fn pointer_released(&mut self, x: i32, y: i32) -> bool {
        let clicked = self.restart_button.pointer_released(x, y);
        if clicked {
            self.restart_button.reset();
        }
        clicked
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        draw_text_centered(
            canvas,
            "GAME OVER",
            self.center_x,
            self.center_y,
            self.style.title_color,
            self.style.title_scale,
        )?;

        if let Some(best) = self.best_score {
            draw_text_centered(
                canvas,
                &format!("Best: {}", best),
                self.center_x,
                self.center_y + self.style.button_offset / 2,
                self.style.best_color,
                2,
            )?;
        }

        self.restart_button.render(canvas)
    }
}
