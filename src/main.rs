mod animation;
mod audio;
mod collision;
mod config;
mod game;
mod gui;
mod input;
mod physics;
mod pickups;
mod player;
mod render;
mod scores;
mod text;

use animation::AnimationSet;
use config::GameConfig;
use game::{GameEvent, GameState, GameWorld};
use gui::{GameOverScreen, Hud};
use input::{GameAction, InputContext, InputState, InputSystem};
use audio::SoundBoard;
use render::{SceneTextures, TexturePaths};
use scores::{HighScoreTable, ScoreStore};
use std::time::Duration;

const CONFIG_PATH: &str = "assets/config/game.json";
const ANIMATIONS_PATH: &str = "assets/config/player_animations.json";
const FRAME_TIME: f32 = 1.0 / 60.0;

/// Opens the score store and its table. Scores are optional: any failure is
/// logged and the run continues without persistence.
fn open_scores() -> (Option<ScoreStore>, HighScoreTable) {
    let store = match ScoreStore::new(ScoreStore::default_directory()) {
        Ok(store) => store,
        Err(e) => {
            log::warn!("High scores disabled: {}", e);
            return (None, HighScoreTable::default());
        }
    };

    let table = match store.load() {
        Ok(table) => table,
        Err(e) => {
            log::warn!("Ignoring unreadable high scores at {}: {}", store.path().display(), e);
            HighScoreTable::default()
        }
    };

    (Some(store), table)
}

fn record_run(
    store: Option<&ScoreStore>,
    table: &mut HighScoreTable,
    score: u32,
    stars_collected: u32,
) {
    let Some(rank) = table.record(score, stars_collected) else {
        return;
    };
    log::info!("New high score #{}: {}", rank + 1, score);

    if let Some(store) = store {
        if let Err(e) = store.save(table) {
            log::error!("Failed to save high scores: {}", e);
        }
    }
}

/// Hands one frame's events to the sound board, the log, and the score table.
fn route_events(
    events: &[GameEvent],
    sound_board: &SoundBoard,
    score_store: Option<&ScoreStore>,
    high_scores: &mut HighScoreTable,
    game_over_screen: &mut GameOverScreen,
) {
    for event in events {
        sound_board.handle(event);

        match event {
            GameEvent::StarCollected { score } => log::debug!("Star collected, score {}", score),
            GameEvent::BombSpawned => log::debug!("Bomb spawned"),
            GameEvent::GameOver { score, stars_collected } => {
                record_run(score_store, high_scores, *score, *stars_collected);
                game_over_screen.set_best_score(high_scores.best());
            }
            GameEvent::Restarted => log::debug!("Back to playing"),
            _ => {}
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Preload
    let config = GameConfig::load_or_default(CONFIG_PATH);
    let animations = AnimationSet::load_from_file(ANIMATIONS_PATH).unwrap_or_else(|e| {
        log::warn!("Using built-in player animations ({}): {}", ANIMATIONS_PATH, e);
        AnimationSet::player()
    });

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let (width, height) = (config.world.width, config.world.height);
    let window = video_subsystem
        .window("Starfall", width, height)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_logical_size(width, height).map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut textures = SceneTextures::load(&texture_creator, &TexturePaths::default());
    let sound_board = audio::open_default(&config.audio);
    let mut event_pump = sdl_context.event_pump()?;

    let (score_store, mut high_scores) = open_scores();
    log::info!("Preload complete");

    // Create
    let mut rng = rand::thread_rng();
    let hud = Hud::new(config.hud.score_x, config.hud.score_y);
    let mut game_over_screen = GameOverScreen::new(width, height);
    let mut debug = config.world.debug;
    let mut world = GameWorld::new(config, animations, &mut rng);
    let mut input = InputSystem::new();

    sound_board.start_music();
    log::info!("Scene running");

    println!("Controls:");
    println!("  Left/Right - Run");
    println!("  Up         - Jump");
    println!("  B          - Toggle body outlines");
    println!("  Escape     - Quit");

    // Update
    'running: loop {
        input.context = match world.state {
            GameState::Playing => InputContext::Playing,
            GameState::GameOver => InputContext::GameOver,
        };

        let mut events = Vec::new();

        for action in input.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::ToggleDebug => {
                    debug = !debug;
                    log::info!("Body outlines: {}", if debug { "ON" } else { "OFF" });
                }
                GameAction::PointerMoved(x, y) => game_over_screen.pointer_moved(x, y),
                GameAction::PointerReleased(x, y) => {
                    if game_over_screen.pointer_released(x, y) {
                        events.push(world.restart());
                    }
                }
            }
        }

        let keys = InputState::from_keyboard(&event_pump.keyboard_state());
        events.extend(world.update(&keys, FRAME_TIME, &mut rng));
        route_events(
            &events,
            &sound_board,
            score_store.as_ref(),
            &mut high_scores,
            &mut game_over_screen,
        );

        render::render_world(&mut canvas, &mut textures, &world, debug)?;
        hud.render(&mut canvas, &world.score_text())?;
        if world.state == GameState::GameOver {
            game_over_screen.render(&mut canvas)?;
        }

        canvas.present();

        std::thread::sleep(Duration::from_secs_f32(FRAME_TIME));
    }

    Ok(())
}
