//! Audio system
//!
//! Procedurally generated sound effects - no external files needed!
//! Each effect is a handful of oscillator voices rendered to PCM and wrapped
//! in a WAV container. Playback goes through macroquad when the `audio`
//! feature is enabled; otherwise cues are only logged.

use std::f32::consts::TAU;

use crate::settings::Settings;

/// Output sample rate for synthesized effects
pub const SAMPLE_RATE: u32 = 22_050;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Plain ball caught
    Catch,
    /// Power-up ball caught
    PowerUp,
    /// Ball fell past the paddle
    Miss,
    /// Time ran out
    GameOver,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::Catch,
        SoundEffect::PowerUp,
        SoundEffect::Miss,
        SoundEffect::GameOver,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Catch => "catch",
            SoundEffect::PowerUp => "powerup",
            SoundEffect::Miss => "miss",
            SoundEffect::GameOver => "game_over",
        }
    }
}

/// Fire-and-forget receiver of sound cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Records cues in order
impl AudioSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
}

impl Waveform {
    /// Sample at a phase in [0, 1)
    fn sample(&self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (phase * TAU).sin(),
            Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

/// One oscillator with an exponential frequency sweep and decay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voice {
    pub waveform: Waveform,
    pub freq_start: f32,
    pub freq_end: f32,
    /// Seconds after the effect starts
    pub delay: f32,
    /// Seconds
    pub duration: f32,
    pub gain: f32,
}

impl Voice {
    const fn tone(waveform: Waveform, freq: f32, delay: f32, duration: f32, gain: f32) -> Self {
        Self {
            waveform,
            freq_start: freq,
            freq_end: freq,
            delay,
            duration,
            gain,
        }
    }

    const fn sweep(waveform: Waveform, from: f32, to: f32, duration: f32, gain: f32) -> Self {
        Self {
            waveform,
            freq_start: from,
            freq_end: to,
            delay: 0.0,
            duration,
            gain,
        }
    }

    fn end(&self) -> f32 {
        self.delay + self.duration
    }
}

/// Voices making up an effect
pub fn voices(effect: SoundEffect) -> Vec<Voice> {
    match effect {
        // Bright blip
        SoundEffect::Catch => vec![Voice::sweep(Waveform::Sine, 520.0, 780.0, 0.1, 0.5)],
        // Happy ding
        SoundEffect::PowerUp => [600.0, 800.0, 1000.0]
            .iter()
            .enumerate()
            .map(|(i, &freq)| Voice::tone(Waveform::Sine, freq, i as f32 * 0.08, 0.15, 0.25))
            .collect(),
        // Falling thud
        SoundEffect::Miss => vec![
            Voice::sweep(Waveform::Triangle, 300.0, 60.0, 0.35, 0.4),
            Voice::sweep(Waveform::Square, 90.0, 40.0, 0.2, 0.08),
        ],
        // Sad descending
        SoundEffect::GameOver => [400.0, 350.0, 300.0, 200.0]
            .iter()
            .enumerate()
            .map(|(i, &freq)| Voice::tone(Waveform::Sine, freq, i as f32 * 0.2, 0.3, 0.3))
            .collect(),
    }
}

/// Render an effect to mono 16-bit PCM
pub fn synthesize(effect: SoundEffect, sample_rate: u32) -> Vec<i16> {
    let voices = voices(effect);
    let length = voices.iter().map(Voice::end).fold(0.0_f32, f32::max);
    let total = (length * sample_rate as f32).ceil() as usize;
    let mut mix = vec![0.0_f32; total];

    for voice in &voices {
        let start = (voice.delay * sample_rate as f32) as usize;
        let count = (voice.duration * sample_rate as f32) as usize;
        let ratio = voice.freq_end / voice.freq_start;
        let mut phase = 0.0_f32;

        for (n, out) in mix.iter_mut().skip(start).take(count).enumerate() {
            let progress = n as f32 / count as f32;
            let freq = voice.freq_start * ratio.powf(progress);
            // Ramp down to 1% like an exponential release
            let envelope = voice.gain * 0.01_f32.powf(progress);
            *out += voice.waveform.sample(phase) * envelope;
            phase = (phase + freq / sample_rate as f32).fract();
        }
    }

    mix.into_iter()
        .map(|s| (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)
        .collect()
}

/// Wrap PCM samples in a RIFF/WAVE container
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut out = Vec::with_capacity(44 + data_len as usize);

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}

/// Audio manager for the game
pub struct AudioManager {
    volume: f32,
    #[cfg(feature = "audio")]
    sounds: Vec<(SoundEffect, macroquad::audio::Sound)>,
}

impl AudioManager {
    /// Synthesize and upload every effect
    #[cfg(feature = "audio")]
    pub async fn load(settings: &Settings) -> Self {
        let mut sounds = Vec::with_capacity(SoundEffect::ALL.len());
        for effect in SoundEffect::ALL {
            let wav = encode_wav(&synthesize(effect, SAMPLE_RATE), SAMPLE_RATE);
            match macroquad::audio::load_sound_from_bytes(&wav).await {
                Ok(sound) => sounds.push((effect, sound)),
                Err(e) => log::warn!("Failed to load {} sound - skipping: {:?}", effect.as_str(), e),
            }
        }
        Self {
            volume: settings.effective_volume(),
            sounds,
        }
    }

    #[cfg(not(feature = "audio"))]
    pub async fn load(settings: &Settings) -> Self {
        log::info!("Built without the `audio` feature - sound cues are logged only");
        Self {
            volume: settings.effective_volume(),
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }
}

impl AudioSink for AudioManager {
    #[cfg(feature = "audio")]
    fn play(&mut self, effect: SoundEffect) {
        if self.volume <= 0.0 {
            return;
        }
        if let Some((_, sound)) = self.sounds.iter().find(|(e, _)| *e == effect) {
            macroquad::audio::play_sound(
                *sound,
                macroquad::audio::PlaySoundParams {
                    looped: false,
                    volume: self.volume,
                },
            );
        }
    }

    #[cfg(not(feature = "audio"))]
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("Sound cue: {} (volume {:.2})", effect.as_str(), self.volume);
    }
}
