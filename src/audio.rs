//! Audio routing
//!
//! One background music clip that can be started, paused and resumed, plus
//! one-shot effects for game events. Decoding and mixing belong to the
//! backend behind `AudioBackend`.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bullet fired
    Fire,
    /// Asteroid broke into pieces
    AsteroidSplit,
    /// Smallest asteroid crumbled away
    AsteroidDust,
    /// Ship destroyed
    ShipExplode,
    /// Fresh game started
    NewGame,
}

impl SoundEffect {
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::NewGame => SoundEffect::NewGame,
            GameEvent::BulletFired => SoundEffect::Fire,
            GameEvent::AsteroidDestroyed { level, .. } if *level > 1 => SoundEffect::AsteroidSplit,
            GameEvent::AsteroidDestroyed { .. } => SoundEffect::AsteroidDust,
            GameEvent::PlayerKilled { .. } => SoundEffect::ShipExplode,
        }
    }
}

/// Playback device or library
pub trait AudioBackend {
    fn play_music(&mut self, volume: f32);
    fn pause_music(&mut self);
    fn resume_music(&mut self);
    fn play_effect(&mut self, effect: SoundEffect, volume: f32);
}

/// Music clip playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MusicState {
    #[default]
    NotStarted,
    Playing,
    Paused,
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    music: MusicState,
    master_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            music: MusicState::NotStarted,
            master_volume: 0.8,
            music_volume: 0.7,
            muted: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn music_state(&self) -> MusicState {
        self.music
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// First call starts the clip; later calls alternate pause and resume
    pub fn toggle_music(&mut self) -> MusicState {
        self.music = match self.music {
            MusicState::NotStarted => {
                self.backend
                    .play_music(self.effective_volume() * self.music_volume);
                MusicState::Playing
            }
            MusicState::Playing => {
                self.backend.pause_music();
                MusicState::Paused
            }
            MusicState::Paused => {
                self.backend.resume_music();
                MusicState::Playing
            }
        };
        log::info!("Music {:?}", self.music);
        self.music
    }

    /// Play the effect matching a game event
    pub fn handle_event(&mut self, event: &GameEvent) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play_effect(SoundEffect::for_event(event), vol);
    }
}

/// Backend that only logs what it would play
#[derive(Debug, Default)]
pub struct LogAudio {
    pub effects_played: usize,
}

impl AudioBackend for LogAudio {
    fn play_music(&mut self, volume: f32) {
        log::info!("music: play (volume {volume:.2})");
    }

    fn pause_music(&mut self) {
        log::info!("music: pause");
    }

    fn resume_music(&mut self) {
        log::info!("music: resume");
    }

    fn play_effect(&mut self, effect: SoundEffect, volume: f32) {
        self.effects_played += 1;
        log::debug!("sfx: {effect:?} (volume {volume:.2})");
    }
}
