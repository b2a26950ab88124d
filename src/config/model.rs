//! Resolved configuration value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default popup width in pixels.
pub const DEFAULT_WIDTH: f64 = 450.0;
/// Default popup height in pixels.
pub const DEFAULT_HEIGHT: f64 = 260.0;
/// Default distance from the top edge of the screen, in pixels.
pub const DEFAULT_TOP: f64 = 50.0;

/// Default text color of the embedded widget.
pub const DEFAULT_TEXT_COLOR: &str = "#1a3544";
/// Default primary accent color of the embedded widget.
pub const DEFAULT_PRIMARY_COLOR: &str = "#ffe536";
/// Default secondary accent color of the embedded widget.
pub const DEFAULT_SECONDARY_COLOR: &str = "#1a3544";

/// Window dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dim {
    pub width: f64,
    pub height: f64,
}

impl Default for Dim {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Window position relative to the top-left corner of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pos {
    pub x: f64,
    pub y: f64,
}

/// Colors applied to the embedded widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub text: String,
    pub primary: String,
    pub secondary: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT_COLOR.to_string(),
            primary: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary: DEFAULT_SECONDARY_COLOR.to_string(),
        }
    }
}

/// Firebase project settings handed to the embedded widget.
///
/// Every field defaults to the empty string independently; serde keeps
/// the wire casing (`apiKey`, `authDomain`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseSettings {
    pub api_key: String,
    pub app_id: String,
    pub project_id: String,
    pub auth_domain: String,
    pub measurement_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
}

/// Authentication providers the embedded widget can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Facebook,
    Twitter,
    Github,
    Microsoft,
    Apple,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Facebook => "facebook",
            Provider::Twitter => "twitter",
            Provider::Github => "github",
            Provider::Microsoft => "microsoft",
            Provider::Apple => "apple",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Provider::Google),
            "facebook" => Ok(Provider::Facebook),
            "twitter" => Ok(Provider::Twitter),
            "github" => Ok(Provider::Github),
            "microsoft" => Ok(Provider::Microsoft),
            "apple" => Ok(Provider::Apple),
            _ => Err(ConfigError::invalid_provider(s)),
        }
    }
}

/// Fully resolved configuration of the embedded widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireguardConfig {
    pub name: String,
    pub logo: String,
    pub theme: Theme,
    pub firebase: FirebaseSettings,
    /// Providers offered on the sign-in surface; empty when unspecified.
    #[serde(default)]
    pub providers: Vec<Provider>,
}

/// Complete configuration for opening the popup window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupConfig {
    pub url: String,
    pub dim: Dim,
    pub pos: Pos,
    pub fireguard: FireguardConfig,
}
