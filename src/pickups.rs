//! Stars and bombs
//!
//! Both are plain physics bodies dropped from the top of the world. Stars bounce
//! with a random vertical elasticity and are collected on overlap; bombs bounce
//! with full elasticity forever and are launched sideways at a random speed.

use crate::collision::{Aabb, Collidable};
use crate::config::{BombConfig, StarConfig};
use crate::physics::Body;
use rand::Rng;

pub struct Star {
    pub body: Body,
}

impl Star {
    pub fn new(x: f32, y: f32, config: &StarConfig, bounce_y: f32) -> Self {
        Star {
            body: Body::new(x, y, config.width, config.height)
                .with_bounce(0.0, bounce_y)
                .with_world_bounds(),
        }
    }
}

impl Collidable for Star {
    fn bounds(&self) -> Aabb {
        self.body.bounds()
    }

    fn is_collidable(&self) -> bool {
        self.body.enabled
    }
}

pub struct Bomb {
    pub body: Body,
}

impl Bomb {
    pub fn new(x: f32, y: f32, config: &BombConfig, velocity_x: f32) -> Self {
        Bomb {
            body: Body::new(x, y, config.width, config.height)
                .with_bounce(config.bounce, config.bounce)
                .with_velocity(velocity_x, config.speed_y)
                .with_world_bounds(),
        }
    }
}

impl Collidable for Bomb {
    fn bounds(&self) -> Aabb {
        self.body.bounds()
    }

    fn is_collidable(&self) -> bool {
        self.body.enabled
    }
}

fn random_bounce(config: &StarConfig, rng: &mut impl Rng) -> f32 {
    if config.bounce_min < config.bounce_max {
        rng.gen_range(config.bounce_min..config.bounce_max)
    } else {
        config.bounce_min
    }
}

/// The row of stars dropped when the scene is created.
pub fn spawn_initial_stars(config: &StarConfig, rng: &mut impl Rng) -> Vec<Star> {
    (0..config.initial_count)
        .map(|i| {
            let x = config.initial_x + config.step_x * i as f32;
            Star::new(x, 0.0, config, random_bounce(config, rng))
        })
        .collect()
}

/// A replacement star at a random x along the top edge.
pub fn spawn_star(config: &StarConfig, world_width: u32, rng: &mut impl Rng) -> Star {
    let x = rng.gen_range(0..=world_width) as f32;
    Star::new(x, 0.0, config, random_bounce(config, rng))
}

/// A bomb at a random x along the top edge, launched sideways.
pub fn spawn_bomb(config: &BombConfig, world_width: u32, rng: &mut impl Rng) -> Bomb {
    let x = rng.gen_range(0..=world_width) as f32;
    let velocity_x = rng.gen_range(-config.max_speed_x..=config.max_speed_x) as f32;
    Bomb::new(x, 0.0, config, velocity_x)
}
