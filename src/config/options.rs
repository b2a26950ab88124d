//! Sparse caller-supplied option records.
//!
//! Every field is optional; resolution fills defaults and validates.

use serde::Deserialize;

use super::value::RawValue;

/// Options accepted when opening a popup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FiremittOptions {
    /// Address the popup navigates to. Must be http or https.
    pub url: Option<String>,
    pub dim: Option<DimOptions>,
    pub pos: Option<PosOptions>,
    /// Configuration of the embedded widget.
    pub config: Option<FireguardOptions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DimOptions {
    pub width: Option<RawValue>,
    pub height: Option<RawValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PosOptions {
    pub x: Option<RawValue>,
    pub y: Option<RawValue>,
}

/// Options for the embedded widget.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FireguardOptions {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub theme: Option<ThemeOptions>,
    pub firebase: Option<FirebaseOptions>,
    /// Provider names, validated against the known provider set.
    pub providers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    pub text: Option<String>,
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

/// Caller-supplied firebase settings; missing fields resolve to `""`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FirebaseOptions {
    pub api_key: Option<String>,
    pub app_id: Option<String>,
    pub project_id: Option<String>,
    pub auth_domain: Option<String>,
    pub measurement_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
}

impl FirebaseOptions {
    /// True when no field at all was supplied.
    pub fn is_unset(&self) -> bool {
        self.api_key.is_none()
            && self.app_id.is_none()
            && self.project_id.is_none()
            && self.auth_domain.is_none()
            && self.measurement_id.is_none()
            && self.storage_bucket.is_none()
            && self.messaging_sender_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firebase_options_is_unset() {
        assert!(FirebaseOptions::default().is_unset());

        let options = FirebaseOptions {
            app_id: Some(String::new()),
            ..Default::default()
        };
        assert!(!options.is_unset());
    }

    #[test]
    fn test_options_deserialize_sparse() {
        let options: FiremittOptions = serde_json::from_str(
            r#"{"url": "https://example.com", "dim": {"width": "800"}}"#,
        )
        .unwrap();

        assert_eq!(options.url.as_deref(), Some("https://example.com"));
        let dim = options.dim.unwrap();
        assert_eq!(dim.width, Some(RawValue::Text("800".into())));
        assert!(dim.height.is_none());
        assert!(options.pos.is_none());
        assert!(options.config.is_none());
    }
}
