//! Sound descriptions. Nothing here touches the audio device; see
//! [`board`](super::board) for playback.

/// Oscillator shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    pub fn oscillator_type(self) -> web_sys::OscillatorType {
        match self {
            Waveform::Sine => web_sys::OscillatorType::Sine,
            Waveform::Square => web_sys::OscillatorType::Square,
            Waveform::Sawtooth => web_sys::OscillatorType::Sawtooth,
            Waveform::Triangle => web_sys::OscillatorType::Triangle,
        }
    }
}

/// Gain every decay ends on. Exponential ramps cannot reach zero.
pub const SILENCE: f32 = 0.01;

const CHIME_PEAK: f32 = 0.3;

/// A single bell-like tone that decays exponentially from `peak` to
/// [`SILENCE`] over `duration_s`, then stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_s: f64,
    pub waveform: Waveform,
    pub peak: f32,
}

impl Tone {
    pub fn chime(frequency_hz: f32, duration_s: f64, waveform: Waveform) -> Self {
        Self {
            frequency_hz,
            duration_s,
            waveform,
            peak: CHIME_PEAK,
        }
    }
}

/// A pitch sweep through a midpoint, used for the page turn whoosh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glide {
    pub from_hz: f32,
    pub peak_hz: f32,
    pub to_hz: f32,
    /// Time at which `peak_hz` is reached.
    pub peak_at_s: f64,
    pub duration_s: f64,
    pub gain: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sound {
    Chime(Tone),
    Glide(Glide),
}
