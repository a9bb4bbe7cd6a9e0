//! Audio cue layer
//!
//! Procedural sound descriptions only. The simulation reports events, this
//! module turns them into queued cues, and whatever backend the host has
//! plays them.

use crate::settings::Settings;
use crate::sim::{EventSink, GameEvent};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top or bottom wall
    WallBounce,
    /// Point scored
    Score,
}

impl SoundEffect {
    pub fn from_event(event: GameEvent) -> Self {
        match event {
            GameEvent::PaddleHit => SoundEffect::PaddleHit,
            GameEvent::WallBounce => SoundEffect::WallBounce,
            GameEvent::Score => SoundEffect::Score,
        }
    }

    /// Oscillator recipe for this effect
    pub fn tone(&self) -> Tone {
        match self {
            SoundEffect::PaddleHit => Tone::fixed(440.0, 0.10, 0.6),
            SoundEffect::WallBounce => Tone::fixed(330.0, 0.08, 0.3),
            // Rising sweep
            SoundEffect::Score => Tone {
                start_hz: 220.0,
                end_hz: 440.0,
                duration_secs: 0.30,
                gain: 0.5,
            },
        }
    }
}

/// A single sine voice, optionally swept linearly from `start_hz` to `end_hz`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration_secs: f32,
    /// Relative loudness before the volume settings are applied
    pub gain: f32,
}

impl Tone {
    fn fixed(hz: f32, duration_secs: f32, gain: f32) -> Self {
        Self {
            start_hz: hz,
            end_hz: hz,
            duration_secs,
            gain,
        }
    }

    pub fn is_sweep(&self) -> bool {
        self.start_hz != self.end_hz
    }

    /// Frequency at `t` seconds into the tone, held at the end value afterwards
    pub fn frequency_at(&self, t: f32) -> f32 {
        if self.duration_secs <= 0.0 {
            return self.end_hz;
        }
        let k = (t / self.duration_secs).clamp(0.0, 1.0);
        self.start_hz + (self.end_hz - self.start_hz) * k
    }
}

/// A sound waiting to be played
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub effect: SoundEffect,
    /// Final playback volume (0.0 - 1.0)
    pub volume: f32,
}

/// Event sink that queues sound cues for a platform backend
#[derive(Debug, Clone)]
pub struct AudioCues {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    pending: Vec<Cue>,
}

impl Default for AudioCues {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioCues {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            pending: Vec::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut cues = Self::new();
        cues.set_master_volume(settings.master_volume);
        cues.set_sfx_volume(settings.sfx_volume);
        cues.set_muted(settings.muted);
        cues
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Queue a sound effect. Silent cues are dropped.
    pub fn play(&mut self, effect: SoundEffect) {
        let volume = self.effective_volume();
        if volume <= 0.0 {
            return;
        }
        log::trace!("Audio cue {:?} at volume {:.2}", effect, volume);
        self.pending.push(Cue { effect, volume });
    }

    pub fn pending(&self) -> &[Cue] {
        &self.pending
    }

    /// Hand every queued cue to the caller, oldest first
    pub fn drain(&mut self) -> std::vec::Drain<'_, Cue> {
        self.pending.drain(..)
    }
}

impl EventSink for AudioCues {
    fn notify(&mut self, event: GameEvent) {
        self.play(SoundEffect::from_event(event));
    }
}
