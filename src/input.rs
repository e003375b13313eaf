use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode, Scancode};
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// Held state of the cursor keys, sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

impl InputState {
    pub fn from_keyboard(keyboard_state: &KeyboardState) -> Self {
        InputState {
            left: keyboard_state.is_scancode_pressed(Scancode::Left),
            right: keyboard_state.is_scancode_pressed(Scancode::Right),
            up: keyboard_state.is_scancode_pressed(Scancode::Up),
        }
    }
}

/// Discrete actions produced from SDL2 events.
///
/// Movement is not an action: it is read from the held key state each frame
/// through `InputState`. Actions cover everything that happens once per press.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    Quit,
    /// Show or hide body outlines
    ToggleDebug,
    PointerMoved(i32, i32),
    PointerReleased(i32, i32),
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Playing,
    /// Only the restart button responds
    GameOver,
}

/// InputSystem processes SDL2 events and produces GameActions
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Playing,
        }
    }

    /// Polls every pending SDL2 event and returns the resulting actions.
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    /// Maps a single event to an action in the current context.
    pub fn translate(&self, event: &Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => self.handle_keydown(*key),
            Event::MouseMotion { x, y, .. } if self.context == InputContext::GameOver => {
                Some(GameAction::PointerMoved(*x, *y))
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } if self.context == InputContext::GameOver => Some(GameAction::PointerReleased(*x, *y)),
            _ => None,
        }
    }

    fn handle_keydown(&self, key: Keycode) -> Option<GameAction> {
        match key {
            Keycode::Escape => Some(GameAction::Quit),
            Keycode::B => Some(GameAction::ToggleDebug),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(keycode: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn test_quit_event() {
        let input = InputSystem::new();
        assert_eq!(input.translate(&Event::Quit { timestamp: 0 }), Some(GameAction::Quit));
    }

    #[test]
    fn test_debug_toggle_key() {
        let input = InputSystem::new();
        assert_eq!(input.translate(&key_down(Keycode::B)), Some(GameAction::ToggleDebug));
        assert_eq!(input.translate(&key_down(Keycode::Escape)), Some(GameAction::Quit));
        assert_eq!(input.translate(&key_down(Keycode::Up)), None);
    }

    #[test]
    fn test_key_repeat_is_ignored() {
        let input = InputSystem::new();
        let event = Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(Keycode::B),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: true,
        };
        assert_eq!(input.translate(&event), None);
    }

    #[test]
    fn test_pointer_only_in_game_over() {
        let mut input = InputSystem::new();
        let release = Event::MouseButtonUp {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 512,
            y: 420,
        };

        assert_eq!(input.translate(&release), None);

        input.context = InputContext::GameOver;
        assert_eq!(input.translate(&release), Some(GameAction::PointerReleased(512, 420)));
    }
}
