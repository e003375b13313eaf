use serde::{Deserialize, Serialize};
use sdl2::rect::Rect;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationState {
    Left,
    Turn,
    Right,
}

impl Default for AnimationState {
    fn default() -> Self {
        AnimationState::Turn
    }
}

/// A named run of sprite sheet frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animation {
    pub frames: Vec<u32>,
    pub frame_rate: f32,
    pub loop_animation: bool,
}

impl Animation {
    /// Frames `start..=end` at `frame_rate` fps.
    pub fn range(start: u32, end: u32, frame_rate: f32, loop_animation: bool) -> Self {
        Animation {
            frames: (start..=end).collect(),
            frame_rate,
            loop_animation,
        }
    }

    fn frame_duration(&self) -> f32 {
        if self.frame_rate > 0.0 {
            1.0 / self.frame_rate
        } else {
            f32::INFINITY
        }
    }
}

/// The animations a sprite sheet provides, keyed by state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationSet {
    pub animations: HashMap<AnimationState, Animation>,
}

impl AnimationSet {
    /// The player sheet: 9 frames, running left on 0-3, facing front on 4,
    /// running right on 5-8.
    pub fn player() -> Self {
        let mut animations = HashMap::new();
        animations.insert(AnimationState::Left, Animation::range(0, 3, 10.0, true));
        animations.insert(AnimationState::Turn, Animation::range(4, 4, 20.0, false));
        animations.insert(AnimationState::Right, Animation::range(5, 8, 10.0, true));
        AnimationSet { animations }
    }

    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let set: AnimationSet = serde_json::from_str(&content)?;
        Ok(set)
    }
}

impl Default for AnimationSet {
    fn default() -> Self {
        Self::player()
    }
}

/// Plays one animation at a time from an `AnimationSet` on a delta-time clock.
#[derive(Debug, Clone)]
pub struct Animator {
    set: AnimationSet,
    current_state: AnimationState,
    frame_index: usize,
    elapsed: f32,
    is_playing: bool,
}

impl Animator {
    pub fn new(set: AnimationSet) -> Self {
        Animator {
            set,
            current_state: AnimationState::default(),
            frame_index: 0,
            elapsed: 0.0,
            is_playing: true,
        }
    }

    /// Switches to `state`. Playing the state that is already running is a no-op,
    /// so calling this every frame does not restart the animation.
    pub fn play(&mut self, state: AnimationState) {
        if state == self.current_state && self.is_playing {
            return;
        }
        self.current_state = state;
        self.frame_index = 0;
        self.elapsed = 0.0;
        self.is_playing = true;
    }

    pub fn update(&mut self, dt: f32) {
        let Some(animation) = self.set.animations.get(&self.current_state) else {
            return;
        };
        if !self.is_playing || animation.frames.is_empty() {
            return;
        }

        self.elapsed += dt;
        let frame_duration = animation.frame_duration();
        while self.elapsed >= frame_duration {
            self.elapsed -= frame_duration;
            if self.frame_index + 1 < animation.frames.len() {
                self.frame_index += 1;
            } else if animation.loop_animation {
                self.frame_index = 0;
            } else {
                self.is_playing = false;
                self.elapsed = 0.0;
                break;
            }
        }
    }

    pub fn current_state(&self) -> AnimationState {
        self.current_state
    }

    /// Sprite sheet frame number to draw, if the current state has frames.
    pub fn current_frame(&self) -> Option<u32> {
        self.set
            .animations
            .get(&self.current_state)
            .and_then(|animation| animation.frames.get(self.frame_index))
            .copied()
    }
}

/// Source rectangle of `frame` in a sheet laid out left-to-right, top-to-bottom.
pub fn frame_rect(frame: u32, frame_width: u32, frame_height: u32, columns: u32) -> Rect {
    let columns = columns.max(1);
    let column = frame % columns;
    let row = frame / columns;
    Rect::new(
        (column * frame_width) as i32,
        (row * frame_height) as i32,
        frame_width,
        frame_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_turn_frame() {
        let animator = Animator::new(AnimationSet::player());
        assert_eq!(animator.current_state(), AnimationState::Turn);
        assert_eq!(animator.current_frame(), Some(4));
    }

    #[test]
    fn test_running_loops_through_frames() {
        let mut animator = Animator::new(AnimationSet::player());
        animator.play(AnimationState::Left);

        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(animator.current_frame().unwrap());
            animator.update(0.1);
        }

        assert_eq!(seen, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_replaying_same_state_does_not_restart() {
        let mut animator = Animator::new(AnimationSet::player());
        animator.play(AnimationState::Right);
        animator.update(0.25);
        let frame = animator.current_frame();

        animator.play(AnimationState::Right);

        assert_eq!(animator.current_frame(), frame);
        assert_eq!(frame, Some(7));
    }

    #[test]
    fn test_switching_state_restarts_from_first_frame() {
        let mut animator = Animator::new(AnimationSet::player());
        animator.play(AnimationState::Right);
        animator.update(0.25);

        animator.play(AnimationState::Left);

        assert_eq!(animator.current_frame(), Some(0));
    }

    #[test]
    fn test_frame_rect_in_single_row_sheet() {
        let rect = frame_rect(5, 32, 48, 9);
        assert_eq!((rect.x(), rect.y(), rect.width(), rect.height()), (160, 0, 32, 48));
    }

    #[test]
    fn test_frame_rect_wraps_rows() {
        let rect = frame_rect(5, 32, 48, 4);
        assert_eq!((rect.x(), rect.y()), (32, 48));
    }

    #[test]
    fn test_shipped_animations_match_builtin() {
        let loaded = AnimationSet::load_from_file("assets/config/player_animations.json").unwrap();
        let builtin = AnimationSet::player();

        for state in [AnimationState::Left, AnimationState::Turn, AnimationState::Right] {
            assert_eq!(loaded.animations[&state].frames, builtin.animations[&state].frames);
        }
        assert!(!loaded.animations[&AnimationState::Turn].loop_animation);
    }
}
