use crate::animation::{AnimationSet, AnimationState, Animator};
use crate::collision::{Aabb, Collidable};
use crate::input::InputState;
use crate::physics::Body;

pub struct Player {
    pub body: Body,
    pub visible: bool,
    pub color_index: usize,
    spawn: (f32, f32),
    animator: Animator,
}

impl Player {
    pub fn new(x: f32, y: f32, width: f32, height: f32, bounce: f32, animations: AnimationSet) -> Self {
        Player {
            body: Body::new(x, y, width, height)
                .with_bounce(bounce, bounce)
                .with_world_bounds(),
            visible: true,
            color_index: 0,
            spawn: (x, y),
            animator: Animator::new(animations),
        }
    }

    /// Applies the cursor keys for this frame.
    ///
    /// Horizontal speed is set outright (no acceleration). Jumping needs the body
    /// to be standing on something. Returns true when a jump started.
    pub fn update(&mut self, input: &InputState, run_speed: f32, jump_speed: f32) -> bool {
        if input.left {
            self.body.velocity_x = -run_speed;
            self.animator.play(AnimationState::Left);
        } else if input.right {
            self.body.velocity_x = run_speed;
            self.animator.play(AnimationState::Right);
        } else {
            self.body.velocity_x = 0.0;
            self.animator.play(AnimationState::Turn);
        }

        if input.up && self.body.on_floor() {
            self.body.velocity_y = -jump_speed;
            return true;
        }
        false
    }

    pub fn tick_animation(&mut self, dt: f32) {
        self.animator.update(dt);
    }

    /// Advances the tint to the next palette entry, wrapping around.
    pub fn cycle_color(&mut self, palette_len: usize) -> usize {
        if palette_len > 0 {
            self.color_index = (self.color_index + 1) % palette_len;
        }
        self.color_index
    }

    pub fn grow(&mut self, step: f32) {
        let scale = self.body.scale() + step;
        self.body.set_scale(scale);
    }

    /// Puts the player back at the spawn point at normal size.
    ///
    /// The tint is kept.
    pub fn reset(&mut self) {
        let (x, y) = self.spawn;
        self.body.set_position(x, y);
        self.body.stop();
        self.body.set_scale(1.0);
        self.body.enabled = true;
        self.visible = true;
        self.animator.play(AnimationState::Turn);
    }

    #[cfg(test)]
    pub fn current_animation_state(&self) -> AnimationState {
        self.animator.current_state()
    }

    pub fn current_frame(&self) -> Option<u32> {
        self.animator.current_frame()
    }

    #[cfg(test)]
    pub fn position(&self) -> (f32, f32) {
        (self.body.center_x, self.body.center_y)
    }
}

impl Collidable for Player {
    fn bounds(&self) -> Aabb {
        self.body.bounds()
    }

    fn is_collidable(&self) -> bool {
        self.visible && self.body.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(100.0, 450.0, 32.0, 48.0, 0.2, AnimationSet::player())
    }

    fn input(left: bool, right: bool, up: bool) -> InputState {
        InputState { left, right, up }
    }

    #[test]
    fn test_left_and_right_set_velocity_and_animation() {
        let mut p = player();

        p.update(&input(true, false, false), 200.0, 500.0);
        assert_eq!(p.body.velocity_x, -200.0);
        assert_eq!(p.current_animation_state(), AnimationState::Left);

        p.update(&input(false, true, false), 200.0, 500.0);
        assert_eq!(p.body.velocity_x, 200.0);
        assert_eq!(p.current_animation_state(), AnimationState::Right);
    }

    #[test]
    fn test_left_wins_when_both_held() {
        let mut p = player();
        p.update(&input(true, true, false), 200.0, 500.0);
        assert_eq!(p.body.velocity_x, -200.0);
    }

    #[test]
    fn test_no_input_stops_and_turns() {
        let mut p = player();
        p.body.velocity_x = 200.0;

        p.update(&input(false, false, false), 200.0, 500.0);

        assert_eq!(p.body.velocity_x, 0.0);
        assert_eq!(p.current_frame(), Some(4));
    }

    #[test]
    fn test_jump_requires_floor() {
        let mut p = player();

        assert!(!p.update(&input(false, false, true), 200.0, 500.0));
        assert_eq!(p.body.velocity_y, 0.0);

        p.body.touching.down = true;
        assert!(p.update(&input(false, false, true), 200.0, 500.0));
        assert_eq!(p.body.velocity_y, -500.0);
    }

    #[test]
    fn test_color_cycles_and_wraps() {
        let mut p = player();
        for _ in 0..6 {
            p.cycle_color(7);
        }
        assert_eq!(p.color_index, 6);
        assert_eq!(p.cycle_color(7), 0);
    }

    #[test]
    fn test_grow_and_reset() {
        let mut p = player();
        p.grow(0.1);
        p.grow(0.1);
        assert!((p.body.scale() - 1.2).abs() < 1e-6);
        assert!((p.body.height() - 57.6).abs() < 1e-3);

        p.visible = false;
        p.body.set_position(700.0, 20.0);
        p.body.velocity_y = 300.0;
        p.color_index = 3;
        p.reset();

        assert_eq!(p.position(), (100.0, 450.0));
        assert_eq!(p.body.scale(), 1.0);
        assert_eq!(p.body.velocity_y, 0.0);
        assert!(p.visible);
        assert_eq!(p.color_index, 3);
    }

    #[test]
    fn test_hidden_player_is_not_collidable() {
        let mut p = player();
        assert!(p.is_collidable());
        p.visible = false;
        assert!(!p.is_collidable());
    }
}
