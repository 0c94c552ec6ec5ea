//! # Client settings
//!
//! | Key | Default | Meaning |
//! |-----|---------|---------|
//! | `api_base` | `http://localhost:8000` | Origin serving `/activities`. |
//! | `message_hide_ms` | `5000` | How long a signup message stays visible. |
//!
//! Natively, [`Settings::new`] layers the defaults, an optional
//! `activity_board.toml`, and `ACTIVITY_BOARD_*` environment variables. In the
//! browser, [`Settings::from_location`] points `api_base` at the page's own origin.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_message_hide_ms")]
    pub message_hide_ms: u64,
}

fn default_api_base() -> String {
    "http://localhost:8000".to_string()
}

fn default_message_hide_ms() -> u64 {
    5000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            message_hide_ms: default_message_hide_ms(),
        }
    }
}

impl Settings {
    /// The well-known filename for the optional settings file.
    pub fn filename() -> &'static str {
        "activity_board.toml"
    }

    pub fn message_hide_delay(&self) -> Duration {
        Duration::from_millis(self.message_hide_ms)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Result<Self, config::ConfigError> {
        use config::{Config, Environment, File, FileFormat};

        dotenvy::dotenv().ok();

        let defaults = Settings::default();
        Config::builder()
            .set_default("api_base", defaults.api_base)?
            .set_default("message_hide_ms", defaults.message_hide_ms)?
            .add_source(
                File::with_name(Self::filename())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("ACTIVITY_BOARD").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Settings for a page served by the activities backend itself.
    #[cfg(target_arch = "wasm32")]
    pub fn from_location() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        match origin {
            Some(api_base) => Self {
                api_base,
                ..Self::default()
            },
            None => Self::default(),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::env::{remove_var, set_var};

    #[test]
    fn test_settings() {
        set_var("ACTIVITY_BOARD_API_BASE", "http://activities.test");
        set_var("ACTIVITY_BOARD_MESSAGE_HIDE_MS", "250");
        let settings = Settings::new().unwrap_or_default();
        remove_var("ACTIVITY_BOARD_API_BASE");
        remove_var("ACTIVITY_BOARD_MESSAGE_HIDE_MS");

        assert_eq!(settings.api_base, "http://activities.test");
        assert_eq!(settings.message_hide_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_base, "http://localhost:8000");
        assert_eq!(settings.message_hide_delay(), Duration::from_secs(5));
    }
}
