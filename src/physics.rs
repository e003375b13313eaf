//! Arcade physics
//!
//! Rectangular bodies with gravity, velocity, and bounce, moved against a list of
//! static platform boxes and the world bounds.
//!
//! Movement is axis-separated: a body moves along X and is pushed out of any
//! platform it entered, then the same happens for Y using the corrected X. This
//! keeps a falling body from snagging on platform corners and makes "landed"
//! unambiguous: a body that was pushed up out of a platform while moving down is
//! touching it from above.

use crate::collision::{Aabb, aabb_intersect, calculate_overlap};

/// Penetration depth below which two boxes count as merely touching.
///
/// Bodies are snapped exactly onto platform edges, and float rounding would
/// otherwise report a resting body as overlapping on the next X pass.
const CONTACT_EPSILON: f32 = 0.01;

/// Rebound speed (px/s) under which a bounced body comes to rest.
///
/// Must exceed one frame of gravity so resting bodies stay still.
pub const DEFAULT_REST_SPEED: f32 = 20.0;

/// Which sides of a body made contact during the last step.
#[allow(dead_code)] // Only `down` feeds gameplay; the other sides are for debugging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Facing {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// A dynamic physics body.
#[derive(Debug, Clone)]
pub struct Body {
    pub center_x: f32,
    pub center_y: f32,
    base_width: f32,
    base_height: f32,
    scale: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub bounce_x: f32,
    pub bounce_y: f32,
    pub collide_world_bounds: bool,
    pub allow_gravity: bool,
    /// Contact with static platforms during the last step
    pub touching: Facing,
    /// Contact with the world bounds during the last step
    pub blocked: Facing,
    pub enabled: bool,
}

impl Body {
    /// Creates an enabled body centred on `(x, y)` with no velocity or bounce.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Body {
            center_x: x,
            center_y: y,
            base_width: width,
            base_height: height,
            scale: 1.0,
            velocity_x: 0.0,
            velocity_y: 0.0,
            bounce_x: 0.0,
            bounce_y: 0.0,
            collide_world_bounds: false,
            allow_gravity: true,
            touching: Facing::default(),
            blocked: Facing::default(),
            enabled: true,
        }
    }

    pub fn with_bounce(mut self, x: f32, y: f32) -> Self {
        self.bounce_x = x;
        self.bounce_y = y;
        self
    }

    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity_x = x;
        self.velocity_y = y;
        self
    }

    pub fn with_world_bounds(mut self) -> Self {
        self.collide_world_bounds = true;
        self
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.center_x, self.center_y, self.width(), self.height())
    }

    pub fn width(&self) -> f32 {
        self.base_width * self.scale
    }

    pub fn height(&self) -> f32 {
        self.base_height * self.scale
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Resizes the body around its centre.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.max(0.0);
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.center_x = x;
        self.center_y = y;
    }

    pub fn stop(&mut self) {
        self.velocity_x = 0.0;
        self.velocity_y = 0.0;
    }

    /// True when standing on a platform or on the bottom of the world.
    pub fn on_floor(&self) -> bool {
        self.touching.down || self.blocked.down
    }
}

/// The simulation space: gravity, world bounds, and static platforms.
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    pub gravity_y: f32,
    pub bounds: Aabb,
    pub rest_speed: f32,
    platforms: Vec<Aabb>,
}

impl PhysicsWorld {
    pub fn new(width: f32, height: f32, gravity_y: f32) -> Self {
        PhysicsWorld {
            gravity_y,
            bounds: Aabb::from_top_left(0.0, 0.0, width, height),
            rest_speed: DEFAULT_REST_SPEED,
            platforms: Vec::new(),
        }
    }

    /// Adds an immovable platform.
    pub fn add_platform(&mut self, platform: Aabb) {
        self.platforms.push(platform);
    }

    pub fn platforms(&self) -> &[Aabb] {
        &self.platforms
    }

    /// Advances one body by `dt` seconds.
    ///
    /// Contact flags are cleared first, so after the call they describe only
    /// this step. Disabled bodies are left untouched.
    pub fn step(&self, body: &mut Body, dt: f32) {
        if !body.enabled {
            return;
        }

        body.touching = Facing::default();
        body.blocked = Facing::default();

        if body.allow_gravity {
            body.velocity_y += self.gravity_y * dt;
        }

        self.move_x(body, body.velocity_x * dt);
        self.move_y(body, body.velocity_y * dt);
    }

    fn move_x(&self, body: &mut Body, dx: f32) {
        let before = body.bounds();
        body.center_x += dx;

        if dx != 0.0 {
            for platform in &self.platforms {
                // Overlaps that predate this move (a body that just grew into
                // the floor) are left for the Y pass to push out vertically.
                if penetrates(&before, platform) || !penetrates(&body.bounds(), platform) {
                    continue;
                }
                let half_w = body.width() / 2.0;
                if dx > 0.0 {
                    body.center_x = platform.left() - half_w;
                    body.touching.right = true;
                } else {
                    body.center_x = platform.right() + half_w;
                    body.touching.left = true;
                }
                body.velocity_x = self.rebound(body.velocity_x, body.bounce_x);
            }
        }

        if body.collide_world_bounds {
            let half_w = body.width() / 2.0;
            if body.center_x - half_w < self.bounds.left() {
                body.center_x = self.bounds.left() + half_w;
                body.blocked.left = true;
                if body.velocity_x < 0.0 {
                    body.velocity_x = self.rebound(body.velocity_x, body.bounce_x);
                }
            } else if body.center_x + half_w > self.bounds.right() {
                body.center_x = self.bounds.right() - half_w;
                body.blocked.right = true;
                if body.velocity_x > 0.0 {
                    body.velocity_x = self.rebound(body.velocity_x, body.bounce_x);
                }
            }
        }
    }

    fn move_y(&self, body: &mut Body, dy: f32) {
        body.center_y += dy;

        for platform in &self.platforms {
            if !penetrates(&body.bounds(), platform) {
                continue;
            }
            let half_h = body.height() / 2.0;
            // A body that is not moving vertically (e.g. it just grew) is pushed
            // out towards whichever side its centre is on.
            let landing = if dy != 0.0 {
                dy > 0.0
            } else {
                body.center_y <= platform.center_y
            };
            if landing {
                body.center_y = platform.top() - half_h;
                body.touching.down = true;
                if body.velocity_y > 0.0 {
                    body.velocity_y = self.rebound(body.velocity_y, body.bounce_y);
                }
            } else {
                body.center_y = platform.bottom() + half_h;
                body.touching.up = true;
                if body.velocity_y < 0.0 {
                    body.velocity_y = self.rebound(body.velocity_y, body.bounce_y);
                }
            }
        }

        if body.collide_world_bounds {
            let half_h = body.height() / 2.0;
            if body.center_y - half_h < self.bounds.top() {
                body.center_y = self.bounds.top() + half_h;
                body.blocked.up = true;
                if body.velocity_y < 0.0 {
                    body.velocity_y = self.rebound(body.velocity_y, body.bounce_y);
                }
            } else if body.center_y + half_h >= self.bounds.bottom() {
                body.center_y = self.bounds.bottom() - half_h;
                body.blocked.down = true;
                if body.velocity_y > 0.0 {
                    body.velocity_y = self.rebound(body.velocity_y, body.bounce_y);
                }
            }
        }
    }

    /// Reflects `velocity`. Bodies with bounce below 1 come to rest once the
    /// rebound is slower than `rest_speed`; fully elastic bodies never do.
    fn rebound(&self, velocity: f32, bounce: f32) -> f32 {
        let reflected = -velocity * bounce;
        if bounce < 1.0 && reflected.abs() < self.rest_speed {
            0.0
        } else {
            reflected
        }
    }
}

/// Overlap test that ignores contacts shallower than `CONTACT_EPSILON`.
fn penetrates(a: &Aabb, b: &Aabb) -> bool {
    if !aabb_intersect(a, b) {
        return false;
    }
    let (overlap_x, overlap_y) = calculate_overlap(a, b);
    overlap_x.abs() > CONTACT_EPSILON && overlap_y.abs() > CONTACT_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn world_with_floor() -> PhysicsWorld {
        let mut world = PhysicsWorld::new(1024.0, 640.0, 300.0);
        // 400x32 platform spanning x 200..600, top at y 500
        world.add_platform(Aabb::from_top_left(200.0, 500.0, 400.0, 32.0));
        world
    }

    fn run(world: &PhysicsWorld, body: &mut Body, frames: usize) {
        for _ in 0..frames {
            world.step(body, DT);
        }
    }

    #[test]
    fn test_gravity_accelerates_free_body() {
        let world = PhysicsWorld::new(1024.0, 640.0, 300.0);
        let mut body = Body::new(100.0, 100.0, 10.0, 10.0);

        world.step(&mut body, DT);

        assert!((body.velocity_y - 5.0).abs() < 1e-4);
        assert!(body.center_y > 100.0);
    }

    #[test]
    fn test_body_lands_and_rests_on_platform() {
        let world = world_with_floor();
        let mut body = Body::new(400.0, 300.0, 32.0, 48.0).with_bounce(0.0, 0.2);

        run(&world, &mut body, 240);

        assert!((body.bounds().bottom() - 500.0).abs() < 0.5);
        assert_eq!(body.velocity_y, 0.0);
        assert!(body.touching.down);
        assert!(body.on_floor());
    }

    #[test]
    fn test_resting_body_stays_on_floor_every_frame() {
        let world = world_with_floor();
        let mut body = Body::new(400.0, 300.0, 32.0, 48.0).with_bounce(0.0, 0.2);
        run(&world, &mut body, 240);

        for _ in 0..30 {
            world.step(&mut body, DT);
            assert!(body.on_floor());
        }
    }

    #[test]
    fn test_resting_body_can_walk_along_platform() {
        let world = world_with_floor();
        let mut body = Body::new(400.0, 300.0, 32.0, 48.0);
        run(&world, &mut body, 240);

        body.velocity_x = 200.0;
        run(&world, &mut body, 30);

        assert!(body.center_x > 490.0);
        assert!(!body.touching.right);
    }

    #[test]
    fn test_full_bounce_keeps_speed() {
        let mut world = PhysicsWorld::new(1024.0, 640.0, 0.0);
        world.add_platform(Aabb::from_top_left(0.0, 500.0, 1024.0, 32.0));
        let mut body = Body::new(400.0, 480.0, 14.0, 14.0)
            .with_bounce(1.0, 1.0)
            .with_velocity(0.0, 300.0);

        run(&world, &mut body, 10);

        assert!((body.velocity_y + 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_world_bounds_block_and_reflect() {
        let world = PhysicsWorld::new(1024.0, 640.0, 0.0);
        let mut body = Body::new(1012.0, 300.0, 20.0, 20.0)
            .with_bounce(1.0, 1.0)
            .with_velocity(200.0, 0.0)
            .with_world_bounds();

        world.step(&mut body, DT);

        assert_eq!(body.bounds().right(), 1024.0);
        assert!(body.blocked.right);
        assert_eq!(body.velocity_x, -200.0);
    }

    #[test]
    fn test_slow_elastic_body_keeps_bouncing_off_walls() {
        let world = PhysicsWorld::new(1024.0, 640.0, 300.0);
        let mut body = Body::new(1000.0, 300.0, 14.0, 14.0)
            .with_bounce(1.0, 1.0)
            .with_velocity(15.0, 20.0)
            .with_world_bounds();

        run(&world, &mut body, 200);

        assert_eq!(body.velocity_x, -15.0);
        assert!(body.center_x < 1017.0);
    }

    #[test]
    fn test_inelastic_rebound_comes_to_rest() {
        let world = PhysicsWorld::new(1024.0, 640.0, 0.0);
        let mut body = Body::new(1012.0, 300.0, 20.0, 20.0)
            .with_bounce(0.5, 0.5)
            .with_velocity(30.0, 0.0)
            .with_world_bounds();

        run(&world, &mut body, 30);

        assert_eq!(body.bounds().right(), 1024.0);
        assert_eq!(body.velocity_x, 0.0);
    }

    #[test]
    fn test_world_floor_counts_as_floor() {
        let world = PhysicsWorld::new(1024.0, 640.0, 300.0);
        let mut body = Body::new(900.0, 600.0, 32.0, 48.0).with_world_bounds();

        run(&world, &mut body, 60);

        assert!(body.blocked.down);
        assert!(!body.touching.down);
        assert!(body.on_floor());
    }

    #[test]
    fn test_body_without_world_bounds_falls_out() {
        let world = PhysicsWorld::new(1024.0, 640.0, 300.0);
        let mut body = Body::new(900.0, 600.0, 10.0, 10.0);

        run(&world, &mut body, 120);

        assert!(body.center_y > 640.0);
    }

    #[test]
    fn test_head_bump_stops_upward_motion() {
        let mut world = PhysicsWorld::new(1024.0, 640.0, 0.0);
        world.add_platform(Aabb::from_top_left(0.0, 100.0, 1024.0, 32.0));
        let mut body = Body::new(400.0, 160.0, 32.0, 48.0).with_velocity(0.0, -500.0);

        run(&world, &mut body, 10);

        assert!((body.bounds().top() - 132.0).abs() < 0.5);
        assert_eq!(body.velocity_y, 0.0);
    }

    #[test]
    fn test_grown_body_running_is_not_pushed_sideways() {
        let world = world_with_floor();
        let mut body = Body::new(400.0, 300.0, 32.0, 48.0);
        run(&world, &mut body, 240);

        body.set_scale(1.5);
        body.velocity_x = 200.0;
        world.step(&mut body, DT);

        assert!(body.center_x > 400.0 && body.center_x < 410.0);
        assert!(body.on_floor());
    }

    #[test]
    fn test_disabled_body_is_frozen() {
        let world = world_with_floor();
        let mut body = Body::new(400.0, 300.0, 10.0, 10.0).with_velocity(50.0, 50.0);
        body.enabled = false;

        world.step(&mut body, DT);

        assert_eq!((body.center_x, body.center_y), (400.0, 300.0));
    }

    #[test]
    fn test_grown_body_is_pushed_back_on_top() {
        let world = world_with_floor();
        let mut body = Body::new(400.0, 300.0, 32.0, 48.0);
        run(&world, &mut body, 240);

        body.set_scale(1.5);
        run(&world, &mut body, 2);

        assert!((body.bounds().bottom() - 500.0).abs() < 0.5);
        assert!(body.on_floor());
    }
}
