// GameWorld struct and scene rules
//
// This module contains the GameWorld struct which owns all bodies in the scene
// and implements the create and update phases plus the overlap callbacks
// (collecting a star, touching a bomb) and the restart button's reset.

use crate::animation::AnimationSet;
use crate::collision::check_collisions_with_collection;
use crate::config::{BombRule, GameConfig};
use crate::input::InputState;
use crate::physics::PhysicsWorld;
use crate::pickups::{self, Bomb, Star};
use crate::player::Player;
use rand::Rng;

use super::{GameEvent, GameState};

/// GameWorld encapsulates every body in the scene and the score
pub struct GameWorld {
    pub config: GameConfig,
    pub physics: PhysicsWorld,
    pub player: Player,
    pub stars: Vec<Star>,
    pub bombs: Vec<Bomb>,
    pub score: u32,
    /// Lifetime count of stars picked up; drives the bomb cadence and is not
    /// reset by a restart
    pub stars_collected: u32,
    pub state: GameState,
}

impl GameWorld {
    /// Builds the scene: platforms, player, and the first row of stars.
    pub fn new(config: GameConfig, animations: AnimationSet, rng: &mut impl Rng) -> Self {
        let mut physics = PhysicsWorld::new(
            config.world.width as f32,
            config.world.height as f32,
            config.world.gravity_y,
        );
        let layout = &config.platforms;
        for platform in &layout.platforms {
            physics.add_platform(platform.bounds(layout.base_width, layout.base_height));
        }

        let player = Player::new(
            config.player.spawn_x,
            config.player.spawn_y,
            config.player.frame_width as f32,
            config.player.frame_height as f32,
            config.player.bounce,
            animations,
        );

        let stars = pickups::spawn_initial_stars(&config.stars, rng);

        log::info!(
            "Scene created: {}x{} world, {} platforms, {} stars",
            config.world.width,
            config.world.height,
            physics.platforms().len(),
            stars.len()
        );

        GameWorld {
            config,
            physics,
            player,
            stars,
            bombs: Vec::new(),
            score: 0,
            stars_collected: 0,
            state: GameState::Playing,
        }
    }

    /// Runs one frame: input, physics for every body, then overlap callbacks.
    ///
    /// Nothing moves while the game is over.
    pub fn update(&mut self, input: &InputState, dt: f32, rng: &mut impl Rng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state == GameState::GameOver {
            return events;
        }

        let jumped = self.player.update(
            input,
            self.config.player.run_speed,
            self.config.player.jump_speed,
        );
        if jumped {
            events.push(GameEvent::Jumped);
        }
        self.player.tick_animation(dt);

        self.physics.step(&mut self.player.body, dt);
        for star in &mut self.stars {
            self.physics.step(&mut star.body, dt);
        }
        for bomb in &mut self.bombs {
            self.physics.step(&mut bomb.body, dt);
        }

        // Remove from the back so earlier indices stay valid; replacement stars
        // are appended and cannot shift them either.
        let collected = check_collisions_with_collection(&self.player, &self.stars);
        for index in collected.into_iter().rev() {
            events.extend(self.collect_star(index, rng));
        }

        let touched = check_collisions_with_collection(&self.player, &self.bombs);
        for index in touched.into_iter().rev() {
            if self.state == GameState::GameOver {
                break;
            }
            events.extend(self.hit_bomb(index));
        }

        events
    }

    /// Overlap callback for player vs star.
    pub fn collect_star(&mut self, index: usize, rng: &mut impl Rng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if index >= self.stars.len() {
            return events;
        }

        self.stars.remove(index);
        self.score += 1;
        self.stars_collected += 1;
        events.push(GameEvent::StarCollected { score: self.score });
        log::debug!("Star collected (score {}, lifetime {})", self.score, self.stars_collected);

        if self.stars_collected % self.config.bombs.every == 0 {
            self.spawn_bomb(rng);
            events.push(GameEvent::BombSpawned);
            self.player.grow(self.config.player.growth);
            events.push(GameEvent::PlayerGrew);
        }

        let index = self.player.cycle_color(self.config.player.palette.len());
        events.push(GameEvent::ColorChanged { index });

        self.spawn_star(rng);
        events
    }

    /// Overlap callback for player vs bomb.
    pub fn hit_bomb(&mut self, index: usize) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if index >= self.bombs.len() {
            return events;
        }

        self.bombs.remove(index);

        match self.config.bombs.rule {
            BombRule::GameOver => {
                self.player.visible = false;
                self.state = GameState::GameOver;
                events.push(GameEvent::BombHit { score: self.score });
                events.push(GameEvent::GameOver {
                    score: self.score,
                    stars_collected: self.stars_collected,
                });
                log::info!("Game over with {} stars", self.score);
            }
            BombRule::Penalty(points) => {
                self.score = self.score.saturating_sub(points);
                events.push(GameEvent::BombHit { score: self.score });
                log::debug!("Bomb hit, score down to {}", self.score);
            }
        }

        events
    }

    pub fn spawn_star(&mut self, rng: &mut impl Rng) {
        let star = pickups::spawn_star(&self.config.stars, self.config.world.width, rng);
        self.stars.push(star);
    }

    pub fn spawn_bomb(&mut self, rng: &mut impl Rng) {
        let bomb = pickups::spawn_bomb(&self.config.bombs, self.config.world.width, rng);
        log::debug!(
            "Bomb spawned at x={} heading {}",
            bomb.body.center_x,
            bomb.body.velocity_x
        );
        self.bombs.push(bomb);
    }

    /// What the restart button does: player back to spawn at normal size,
    /// score zeroed, every bomb removed.
    pub fn restart(&mut self) -> GameEvent {
        self.player.reset();
        self.score = 0;
        self.bombs.clear();
        self.state = GameState::Playing;
        log::info!("Restarted");
        GameEvent::Restarted
    }

    pub fn score_text(&self) -> String {
        format!("{}{}", self.config.hud.score_label, self.score)
    }

    /// Current player tint as 0xRRGGBB.
    pub fn player_color(&self) -> u32 {
        self.config
            .player
            .palette
            .get(self.player.color_index)
            .copied()
            .unwrap_or(0xffffff)
    }
}
