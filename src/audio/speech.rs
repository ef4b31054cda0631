use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice};

use crate::error::EffectError;

/// Substrings of voice names we would rather speak with, in order of
/// appearance in the voice list.
pub const PREFERRED_VOICES: [&str; 4] = ["Female", "Zira", "Samantha", "Google"];

const RATE: f32 = 0.85;
const PITCH: f32 = 1.1;
const VOLUME: f32 = 0.8;

/// Counterpart of [`SoundOutput`](super::board::SoundOutput) for spoken
/// phrases: `say` swallows whatever `try_say` reports.
pub trait SpeechOutput {
    fn try_say(&self, phrase: &str) -> Result<(), EffectError>;

    fn say(&self, phrase: &str) {
        if let Err(e) = self.try_say(phrase) {
            log::debug!("Speech skipped: {}", e);
        }
    }
}

/// Index of the first voice whose name matches any preferred substring.
pub fn preferred_voice<S: AsRef<str>>(names: &[S]) -> Option<usize> {
    names.iter().position(|name| {
        let name = name.as_ref();
        PREFERRED_VOICES.iter().any(|wanted| name.contains(wanted))
    })
}

/// `speechSynthesis` wrapper. Browsers without it get silence.
pub struct Speaker {
    enabled: bool,
}

impl Speaker {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn synthesis() -> Result<SpeechSynthesis, EffectError> {
        let window = web_sys::window().ok_or(EffectError::SpeechUnavailable)?;
        let present = js_sys::Reflect::has(&window, &JsValue::from_str("speechSynthesis"))
            .unwrap_or(false);
        if !present {
            return Err(EffectError::SpeechUnavailable);
        }
        Ok(window.speech_synthesis()?)
    }

    /// Some browsers load voices asynchronously; ask early so they are
    /// ready by the time the first phrase is spoken.
    pub fn preload_voices(&self) {
        if !self.enabled {
            return;
        }
        let synth = match Self::synthesis() {
            Ok(synth) => synth,
            Err(e) => {
                log::debug!("Voice preload skipped: {}", e);
                return;
            }
        };
        let _ = synth.get_voices();
        let on_change = Closure::<dyn Fn()>::new({
            let synth = synth.clone();
            move || {
                let count = synth.get_voices().length();
                log::debug!("{} speech voices available", count);
            }
        });
        synth.set_onvoiceschanged(Some(on_change.as_ref().unchecked_ref()));
        on_change.forget();
    }
}

impl SpeechOutput for Speaker {
    fn try_say(&self, phrase: &str) -> Result<(), EffectError> {
        if !self.enabled {
            return Ok(());
        }
        let synth = Self::synthesis()?;
        let utterance = SpeechSynthesisUtterance::new_with_text(phrase)?;
        utterance.set_rate(RATE);
        utterance.set_pitch(PITCH);
        utterance.set_volume(VOLUME);

        let voices: Vec<SpeechSynthesisVoice> = synth
            .get_voices()
            .iter()
            .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect();
        let names: Vec<String> = voices.iter().map(|v| v.name()).collect();
        if let Some(i) = preferred_voice(&names) {
            utterance.set_voice(Some(&voices[i]));
        }

        synth.speak(&utterance);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_matching_voice() {
        let names = ["Alex", "Samantha", "Google US English"];
        assert_eq!(preferred_voice(&names), Some(1));
    }

    #[test]
    fn matches_substrings() {
        let names = ["Daniel", "Microsoft Zira - English (United States)"];
        assert_eq!(preferred_voice(&names), Some(1));
    }

    #[test]
    fn no_match_leaves_default_voice() {
        let names = ["Alex", "Daniel"];
        assert_eq!(preferred_voice(&names), None);
        assert_eq!(preferred_voice::<&str>(&[]), None);
    }

    #[test]
    fn disabled_speaker_stays_quiet() {
        let speaker = Speaker::new(false);
        assert!(speaker.try_say("I love you").is_ok());
        speaker.preload_voices();
    }
}
