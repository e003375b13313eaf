//! Scene drawing
//!
//! Draws the world back to front: background, platforms, stars, bombs, then the
//! player. Any texture that failed to load is replaced by a flat coloured
//! rectangle of the body's size so the game stays playable without assets.

use crate::animation::frame_rect;
use crate::collision::Aabb;
use crate::game::GameWorld;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

const SKY_COLOR: Color = Color::RGB(40, 60, 110);
const PLATFORM_COLOR: Color = Color::RGB(60, 140, 60);
const STAR_COLOR: Color = Color::RGB(255, 220, 0);
const BOMB_COLOR: Color = Color::RGB(30, 30, 30);
const PLAYER_COLOR: Color = Color::RGB(180, 120, 220);
const DEBUG_BODY_COLOR: Color = Color::RGB(255, 0, 255);
const DEBUG_STATIC_COLOR: Color = Color::RGB(0, 0, 255);

/// Image paths the scene loads during preload.
pub struct TexturePaths {
    pub background: &'static str,
    pub platform: &'static str,
    pub star: &'static str,
    pub bomb: &'static str,
    pub player: &'static str,
}

impl Default for TexturePaths {
    fn default() -> Self {
        TexturePaths {
            background: "assets/img/bg.png",
            platform: "assets/img/platform.png",
            star: "assets/img/star.png",
            bomb: "assets/img/bomb.png",
            player: "assets/img/dude.png",
        }
    }
}

fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Option<Texture<'a>> {
    match texture_creator.load_texture(path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            log::warn!("Failed to load {}: {}; drawing a placeholder", path, e);
            None
        }
    }
}

pub struct SceneTextures<'a> {
    pub background: Option<Texture<'a>>,
    pub platform: Option<Texture<'a>>,
    pub star: Option<Texture<'a>>,
    pub bomb: Option<Texture<'a>>,
    /// Spritesheet of fixed-size player frames
    pub player: Option<Texture<'a>>,
}

impl<'a> SceneTextures<'a> {
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>, paths: &TexturePaths) -> Self {
        SceneTextures {
            background: load_texture(texture_creator, paths.background),
            platform: load_texture(texture_creator, paths.platform),
            star: load_texture(texture_creator, paths.star),
            bomb: load_texture(texture_creator, paths.bomb),
            player: load_texture(texture_creator, paths.player),
        }
    }
}

/// Splits a 0xRRGGBB tint into the colour-mod components.
pub fn tint_components(tint: u32) -> (u8, u8, u8) {
    (
        ((tint >> 16) & 0xff) as u8,
        ((tint >> 8) & 0xff) as u8,
        (tint & 0xff) as u8,
    )
}

/// Number of frames per row in a sheet `sheet_width` pixels wide.
pub fn sheet_columns(sheet_width: u32, frame_width: u32) -> u32 {
    if frame_width == 0 {
        return 1;
    }
    (sheet_width / frame_width).max(1)
}

fn draw_sprite(
    canvas: &mut Canvas<Window>,
    texture: Option<&Texture>,
    bounds: &Aabb,
    fallback: Color,
) -> Result<(), String> {
    let dest = bounds.to_rect();
    match texture {
        Some(texture) => canvas.copy(texture, None, dest),
        None => {
            canvas.set_draw_color(fallback);
            canvas.fill_rect(dest)
        }
    }
}

fn draw_player(
    canvas: &mut Canvas<Window>,
    texture: Option<&mut Texture>,
    world: &GameWorld,
) -> Result<(), String> {
    let player = &world.player;
    if !player.visible {
        return Ok(());
    }

    let dest = player.body.bounds().to_rect();
    let (r, g, b) = tint_components(world.player_color());

    match (texture, player.current_frame()) {
        (Some(texture), Some(frame)) => {
            let frame_width = world.config.player.frame_width;
            let frame_height = world.config.player.frame_height;
            let columns = sheet_columns(texture.query().width, frame_width);
            let src = frame_rect(frame, frame_width, frame_height, columns);

            texture.set_color_mod(r, g, b);
            canvas.copy(texture, src, dest)
        }
        _ => {
            let tinted = Color::RGB(
                ((PLAYER_COLOR.r as u32 * r as u32) / 255) as u8,
                ((PLAYER_COLOR.g as u32 * g as u32) / 255) as u8,
                ((PLAYER_COLOR.b as u32 * b as u32) / 255) as u8,
            );
            canvas.set_draw_color(tinted);
            canvas.fill_rect(dest)
        }
    }
}

/// Outlines every body: moving ones in magenta, platforms in blue.
fn draw_debug_bodies(canvas: &mut Canvas<Window>, world: &GameWorld) -> Result<(), String> {
    canvas.set_draw_color(DEBUG_STATIC_COLOR);
    for platform in world.physics.platforms() {
        canvas.draw_rect(platform.to_rect())?;
    }

    canvas.set_draw_color(DEBUG_BODY_COLOR);
    if world.player.visible {
        canvas.draw_rect(world.player.body.bounds().to_rect())?;
    }
    for star in &world.stars {
        canvas.draw_rect(star.body.bounds().to_rect())?;
    }
    for bomb in &world.bombs {
        canvas.draw_rect(bomb.body.bounds().to_rect())?;
    }
    Ok(())
}

/// Draws the whole scene. The caller clears nothing and presents afterwards.
pub fn render_world(
    canvas: &mut Canvas<Window>,
    textures: &mut SceneTextures,
    world: &GameWorld,
    debug: bool,
) -> Result<(), String> {
    match &textures.background {
        // Anchored at the top-left corner at its natural size
        Some(background) => {
            let query = background.query();
            canvas.set_draw_color(Color::RGB(0, 0, 0));
            canvas.clear();
            canvas.copy(background, None, Rect::new(0, 0, query.width, query.height))?;
        }
        None => {
            canvas.set_draw_color(SKY_COLOR);
            canvas.clear();
        }
    }

    for platform in world.physics.platforms() {
        draw_sprite(canvas, textures.platform.as_ref(), platform, PLATFORM_COLOR)?;
    }
    for star in &world.stars {
        draw_sprite(canvas, textures.star.as_ref(), &star.body.bounds(), STAR_COLOR)?;
    }
    for bomb in &world.bombs {
        draw_sprite(canvas, textures.bomb.as_ref(), &bomb.body.bounds(), BOMB_COLOR)?;
    }
    draw_player(canvas, textures.player.as_mut(), world)?;

    if debug {
        draw_debug_bodies(canvas, world)?;
    }

    Ok(())
}
