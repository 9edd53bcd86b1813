//! Sound cues
//!
//! The game only decides *when* a sound plays and how loud. Producing it is
//! up to a [`SoundSink`]; each cue comes with a small tone description so a
//! sink can synthesize it without asset files.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    Bounce,
    /// Power-up collected
    PowerUp,
}

impl SoundEffect {
    /// Cue for a game event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleBounce => Some(SoundEffect::Bounce),
            GameEvent::PowerUpCaught(_) => Some(SoundEffect::PowerUp),
            _ => None,
        }
    }

    /// Oscillator recipe for sinks that synthesize sounds
    pub fn tone(&self) -> Tone {
        match self {
            // Solid thump
            SoundEffect::Bounce => Tone {
                start_hz: 150.0,
                end_hz: 60.0,
                duration: 0.15,
                gain: 0.6,
            },
            // Rising chime
            SoundEffect::PowerUp => Tone {
                start_hz: 600.0,
                end_hz: 1200.0,
                duration: 0.3,
                gain: 0.4,
            },
        }
    }
}

/// Frequency sweep with a decaying envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub start_hz: f32,
    pub end_hz: f32,
    /// Seconds
    pub duration: f32,
    /// Peak gain before volume scaling
    pub gain: f32,
}

/// Something that can make noise
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect, tone: Tone, volume: f32);
}

/// Sink that only logs (headless runs)
#[derive(Debug, Default)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, effect: SoundEffect, _tone: Tone, volume: f32) {
        log::debug!("sound {:?} at {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: SoundSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    /// Extra scaling for the power-up chime
    power_up_volume: f32,
    muted: bool,
}

impl<S: SoundSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            power_up_volume: 0.5,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set power-up chime volume (0.0 - 1.0)
    pub fn set_power_up_volume(&mut self, vol: f32) {
        self.power_up_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get effective volume for an effect
    pub fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            return 0.0;
        }
        let base = self.master_volume * self.sfx_volume;
        match effect {
            SoundEffect::Bounce => base,
            SoundEffect::PowerUp => base * self.power_up_volume,
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume(effect);
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, effect.tone(), vol);
    }

    /// Play the cues for a batch of game events
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}
