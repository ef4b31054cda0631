use crate::error::ConfigError;

const DEFAULT_NICKNAME: &str = "janu";

/// Page settings. Compile time defaults come from `SWEETHEART_NICKNAME` and
/// `SWEETHEART_SONG_URL`; the page URL query (`?name=..&mute=1&voice=0&song=..&debug=1`)
/// overrides them.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub nickname: String,
    pub muted: bool,
    pub voice: bool,
    pub song_url: Option<String>,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            nickname: option_env!("SWEETHEART_NICKNAME")
                .unwrap_or(DEFAULT_NICKNAME)
                .to_string(),
            muted: false,
            voice: true,
            song_url: option_env!("SWEETHEART_SONG_URL").map(String::from),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Reads overrides from the current page location.
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    /// Applies query overrides on top of the defaults. Bad values are
    /// logged and ignored.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let query = query.trim_start_matches('?');
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if let Err(e) = config.apply(&key, &value) {
                log::warn!("Ignoring query parameter: {}", e);
            }
        }
        config
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "name" => {
                let name = value.trim();
                if !name.is_empty() {
                    self.nickname = name.to_string();
                }
            }
            "song" => {
                let url = value.trim();
                self.song_url = (!url.is_empty()).then(|| url.to_string());
            }
            "mute" => self.muted = parse_flag(key, value)?,
            "voice" => self.voice = parse_flag(key, value)?,
            "debug" => self.debug = parse_flag(key, value)?,
            _ => log::debug!("Unknown query parameter `{}`", key),
        }
        Ok(())
    }
}

// A bare `?mute` counts as true.
fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_keeps_defaults() {
        assert_eq!(AppConfig::from_query(""), AppConfig::default());
        assert_eq!(AppConfig::from_query("?"), AppConfig::default());
    }

    #[test]
    fn query_overrides_fields() {
        let config = AppConfig::from_query("?name=Bubu&mute=1&voice=off&song=https%3A%2F%2Fexample.com%2Fembed&debug");
        assert_eq!(config.nickname, "Bubu");
        assert!(config.muted);
        assert!(!config.voice);
        assert!(config.debug);
        assert_eq!(config.song_url.as_deref(), Some("https://example.com/embed"));
    }

    #[test]
    fn invalid_flag_is_ignored() {
        let config = AppConfig::from_query("mute=maybe&voice=no");
        assert!(!config.muted);
        assert!(!config.voice);
    }

    #[test]
    fn blank_name_keeps_default() {
        let config = AppConfig::from_query("name=%20%20");
        assert_eq!(config.nickname, AppConfig::default().nickname);
    }

    #[test]
    fn parse_flag_reports_key_and_value() {
        assert_eq!(
            parse_flag("mute", "sometimes"),
            Err(ConfigError::InvalidFlag {
                key: "mute".into(),
                value: "sometimes".into()
            })
        );
    }
}
