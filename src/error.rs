use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of optional browser capabilities. These never reach the user:
/// every call site logs them at debug level and carries on.
#[derive(Debug, Error)]
pub enum EffectError {
    #[error("audio output is unavailable: {0}")]
    AudioUnavailable(String),
    #[error("speech synthesis is unavailable")]
    SpeechUnavailable,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for EffectError {
    fn from(value: JsValue) -> Self {
        EffectError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for `{key}`, expected a boolean")]
    InvalidFlag { key: String, value: String },
}
