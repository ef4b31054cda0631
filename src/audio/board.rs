//! Web Audio playback.
//!
//! Procedurally generated tones, one oscillator + gain pair per call. The
//! audio context is created lazily on first use and resumed whenever the
//! browser has suspended it (autoplay policy), so the first click on the
//! page is what actually unlocks sound.

use std::cell::RefCell;

use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorNode};

use super::tone::{Glide, Sound, Tone, SILENCE};
use crate::error::EffectError;

/// Anything that can render a [`Sound`]. Implementors report failures
/// from `try_play`; `play` is what callers use, and it never fails.
pub trait SoundOutput {
    fn try_play(&self, sound: &Sound) -> Result<(), EffectError>;

    fn play(&self, sound: &Sound) {
        if let Err(e) = self.try_play(sound) {
            log::debug!("Sound skipped: {}", e);
        }
    }
}

pub struct SoundBoard {
    ctx: RefCell<Option<AudioContext>>,
    muted: bool,
}

impl SoundBoard {
    pub fn new(muted: bool) -> Self {
        Self {
            ctx: RefCell::new(None),
            muted,
        }
    }

    /// Returns the shared context, creating it on first use and resuming it
    /// if suspended.
    pub fn ensure_ready(&self) -> Result<AudioContext, EffectError> {
        let mut slot = self.ctx.borrow_mut();
        let ctx = match slot.as_ref() {
            Some(ctx) => ctx.clone(),
            None => {
                let ctx = AudioContext::new()
                    .map_err(|e| EffectError::AudioUnavailable(format!("{:?}", e)))?;
                log::debug!("Audio context created");
                *slot = Some(ctx.clone());
                ctx
            }
        };
        if ctx.state() == AudioContextState::Suspended {
            let _ = ctx.resume()?;
        }
        Ok(ctx)
    }

    /// Unlocks audio from inside a user gesture handler.
    pub fn wake(&self) {
        if self.muted {
            return;
        }
        if let Err(e) = self.ensure_ready() {
            log::debug!("Audio wake skipped: {}", e);
        }
    }
}

impl SoundOutput for SoundBoard {
    fn try_play(&self, sound: &Sound) -> Result<(), EffectError> {
        if self.muted {
            return Ok(());
        }
        let ctx = self.ensure_ready()?;
        match sound {
            Sound::Chime(tone) => play_chime(&ctx, tone),
            Sound::Glide(glide) => play_glide(&ctx, glide),
        }
    }
}

fn create_voice(ctx: &AudioContext) -> Result<(OscillatorNode, GainNode), EffectError> {
    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    Ok((osc, gain))
}

fn play_chime(ctx: &AudioContext, tone: &Tone) -> Result<(), EffectError> {
    let (osc, gain) = create_voice(ctx)?;
    let t = ctx.current_time();

    osc.set_type(tone.waveform.oscillator_type());
    osc.frequency().set_value_at_time(tone.frequency_hz, t)?;

    gain.gain().set_value_at_time(tone.peak, t)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(SILENCE, t + tone.duration_s)?;

    osc.start_with_when(t)?;
    osc.stop_with_when(t + tone.duration_s)?;
    Ok(())
}

fn play_glide(ctx: &AudioContext, glide: &Glide) -> Result<(), EffectError> {
    let (osc, gain) = create_voice(ctx)?;
    let t = ctx.current_time();

    osc.set_type(web_sys::OscillatorType::Sine);
    osc.frequency().set_value_at_time(glide.from_hz, t)?;
    osc.frequency()
        .exponential_ramp_to_value_at_time(glide.peak_hz, t + glide.peak_at_s)?;
    osc.frequency()
        .exponential_ramp_to_value_at_time(glide.to_hz, t + glide.duration_s)?;

    gain.gain().set_value_at_time(glide.gain, t)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(SILENCE, t + glide.duration_s)?;

    osc.start_with_when(t)?;
    osc.stop_with_when(t + glide.duration_s)?;
    Ok(())
}
