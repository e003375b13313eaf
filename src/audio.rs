//! Sound effects and background music
//!
//! Gameplay code never touches audio directly. The main loop hands every
//! `GameEvent` to `SoundBoard::handle`, which picks the clip to play.
//!
//! With the `audio` feature the board plays through SDL2_mixer. Without it the
//! board is silent and only logs what it would have played, so the game builds
//! on machines without the mixer library.

use crate::config::AudioConfig;
use crate::game::GameEvent;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sfx {
    Coin,
    Jump,
    Bomb,
}

impl Sfx {
    pub fn all() -> [Sfx; 3] {
        [Sfx::Coin, Sfx::Jump, Sfx::Bomb]
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Sfx::Coin => "coin.mp3",
            Sfx::Jump => "jump.mp3",
            Sfx::Bomb => "bomb.mp3",
        }
    }

    /// Playback volume in 0.0..=1.0
    pub fn volume(&self, config: &AudioConfig) -> f32 {
        match self {
            Sfx::Coin => config.coin_volume,
            Sfx::Jump => config.jump_volume,
            Sfx::Bomb => config.bomb_volume,
        }
    }
}

pub const MUSIC_FILE: &str = "bgm.mp3";

/// The clip an event should trigger, if any.
pub fn sfx_for(event: &GameEvent) -> Option<Sfx> {
    match event {
        GameEvent::Jumped => Some(Sfx::Jump),
        GameEvent::StarCollected { .. } => Some(Sfx::Coin),
        GameEvent::BombHit { .. } => Some(Sfx::Bomb),
        _ => None,
    }
}

#[cfg(feature = "audio")]
mod backend {
    use super::{MUSIC_FILE, Sfx};
    use crate::config::AudioConfig;
    use sdl2::mixer::{self, Channel, Chunk, Music, Sdl2MixerContext};
    use std::collections::HashMap;
    use std::path::Path;

    fn to_mixer_volume(volume: f32) -> i32 {
        (volume.clamp(0.0, 1.0) * mixer::MAX_VOLUME as f32).round() as i32
    }

    pub struct SoundBoard {
        _context: Option<Sdl2MixerContext>,
        clips: HashMap<Sfx, Chunk>,
        music: Option<Music<'static>>,
        music_volume: f32,
    }

    impl SoundBoard {
        pub fn open(audio_dir: &Path, config: &AudioConfig) -> Self {
            let mut board = SoundBoard {
                _context: None,
                clips: HashMap::new(),
                music: None,
                music_volume: config.music_volume,
            };

            // Starts SDL's audio subsystem on demand; a machine without an
            // audio device gets a silent board rather than a failed launch.
            if let Err(e) = mixer::open_audio(
                mixer::DEFAULT_FREQUENCY,
                mixer::DEFAULT_FORMAT,
                mixer::DEFAULT_CHANNELS,
                1024,
            ) {
                log::warn!("Audio device unavailable, running silent: {}", e);
                return board;
            }
            match mixer::init(mixer::InitFlag::MP3) {
                Ok(context) => board._context = Some(context),
                Err(e) => log::warn!("MP3 support unavailable: {}", e),
            }
            mixer::allocate_channels(8);

            for sfx in Sfx::all() {
                let path = audio_dir.join(sfx.file_name());
                match Chunk::from_file(&path) {
                    Ok(mut chunk) => {
                        chunk.set_volume(to_mixer_volume(sfx.volume(config)));
                        board.clips.insert(sfx, chunk);
                    }
                    Err(e) => log::warn!("Failed to load {}: {}", path.display(), e),
                }
            }

            let music_path = audio_dir.join(MUSIC_FILE);
            match Music::from_file(&music_path) {
                Ok(music) => board.music = Some(music),
                Err(e) => log::warn!("Failed to load {}: {}", music_path.display(), e),
            }

            board
        }

        pub fn play(&self, sfx: Sfx) {
            if let Some(chunk) = self.clips.get(&sfx) {
                if let Err(e) = Channel::all().play(chunk, 0) {
                    log::debug!("No free channel for {:?}: {}", sfx, e);
                }
            }
        }

        pub fn start_music(&self) {
            if let Some(music) = &self.music {
                Music::set_volume(to_mixer_volume(self.music_volume));
                // -1 loops forever
                if let Err(e) = music.play(-1) {
                    log::warn!("Failed to start music: {}", e);
                }
            }
        }
    }
}

#[cfg(not(feature = "audio"))]
mod backend {
    use super::{MUSIC_FILE, Sfx};
    use crate::config::AudioConfig;
    use std::path::Path;

    pub struct SoundBoard {
        volumes: [f32; 3],
    }

    impl SoundBoard {
        pub fn open(audio_dir: &Path, config: &AudioConfig) -> Self {
            log::info!(
                "Built without the `audio` feature; not loading sounds from {}",
                audio_dir.display()
            );
            for sfx in Sfx::all() {
                log::debug!("Skipping {}", audio_dir.join(sfx.file_name()).display());
            }
            log::debug!("Skipping {}", audio_dir.join(MUSIC_FILE).display());

            SoundBoard {
                volumes: Sfx::all().map(|sfx| sfx.volume(config)),
            }
        }

        pub fn play(&self, sfx: Sfx) {
            let volume = self.volumes[sfx as usize];
            log::debug!("(silent) {:?} at volume {}", sfx, volume);
        }

        pub fn start_music(&self) {
            log::debug!("(silent) music");
        }
    }
}

pub use backend::SoundBoard;

impl SoundBoard {
    /// Plays whatever clip the event calls for.
    pub fn handle(&self, event: &GameEvent) {
        if let Some(sfx) = sfx_for(event) {
            self.play(sfx);
        }
    }
}

/// Opens the board from the standard asset folder.
pub fn open_default(config: &AudioConfig) -> SoundBoard {
    SoundBoard::open(Path::new("assets/audio"), config)
}
