//! Normalization and validation of sparse popup options.
//!
//! Every function here is pure and synchronous; the only environment
//! value (screen width) comes in through the [`Screen`] argument.

use url::Url;

use super::error::ConfigError;
use super::model::{
    Dim, FirebaseSettings, FireguardConfig, Pos, PopupConfig, Provider, Theme, DEFAULT_HEIGHT,
    DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, DEFAULT_TEXT_COLOR, DEFAULT_TOP, DEFAULT_WIDTH,
};
use super::options::{FireguardOptions, FiremittOptions, ThemeOptions};
use super::value::RawValue;
use crate::screen::Screen;

/// Resolves window dimensions.
///
/// Absent values are replaced by the defaults before parsing, so a
/// default is always a valid number. No bounds are enforced; a
/// non-numeric string yields `NaN`.
pub fn resolve_dimension(width: Option<&RawValue>, height: Option<&RawValue>) -> Dim {
    Dim {
        width: width.map(RawValue::as_f64).unwrap_or(DEFAULT_WIDTH),
        height: height.map(RawValue::as_f64).unwrap_or(DEFAULT_HEIGHT),
    }
}

/// Resolves the window position.
///
/// `y` defaults to 50; `x` defaults to centering the window horizontally
/// given its resolved `width`.
pub fn resolve_position(
    x: Option<&RawValue>,
    y: Option<&RawValue>,
    width: f64,
    screen: &dyn Screen,
) -> Pos {
    Pos {
        x: x.map(RawValue::as_f64)
            .unwrap_or_else(|| screen.width() / 2.0 - width / 2.0),
        y: y.map(RawValue::as_f64).unwrap_or(DEFAULT_TOP),
    }
}

/// Validates the popup URL and returns its canonical string form.
///
/// Only `http` and `https` schemes are accepted; an absent URL is treated
/// as the empty string and rejected.
pub fn resolve_url(url: Option<&str>) -> Result<String, ConfigError> {
    let parsed = Url::parse(url.unwrap_or("")).map_err(|_| ConfigError::invalid_url())?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::invalid_url());
    }

    Ok(parsed.to_string())
}

/// Resolves the embedded widget configuration.
///
/// Theme fields fall back per field: explicit option, then
/// `fallback_theme`, then the hard default. An empty string counts as
/// absent at every level of the chain.
pub fn resolve_fireguard(
    options: Option<&FireguardOptions>,
    fallback_theme: Option<&ThemeOptions>,
) -> Result<FireguardConfig, ConfigError> {
    let name = options.and_then(|o| o.name.clone()).unwrap_or_default();
    let logo = options.and_then(|o| o.logo.clone()).unwrap_or_default();

    let theme_options = options.and_then(|o| o.theme.as_ref());
    let theme = Theme {
        text: pick_color(
            theme_options.and_then(|t| t.text.as_deref()),
            fallback_theme.and_then(|t| t.text.as_deref()),
            DEFAULT_TEXT_COLOR,
        ),
        primary: pick_color(
            theme_options.and_then(|t| t.primary.as_deref()),
            fallback_theme.and_then(|t| t.primary.as_deref()),
            DEFAULT_PRIMARY_COLOR,
        ),
        secondary: pick_color(
            theme_options.and_then(|t| t.secondary.as_deref()),
            fallback_theme.and_then(|t| t.secondary.as_deref()),
            DEFAULT_SECONDARY_COLOR,
        ),
    };

    let firebase_options = options.and_then(|o| o.firebase.as_ref());
    let firebase = match firebase_options {
        Some(fb) => FirebaseSettings {
            api_key: fb.api_key.clone().unwrap_or_default(),
            app_id: fb.app_id.clone().unwrap_or_default(),
            project_id: fb.project_id.clone().unwrap_or_default(),
            auth_domain: fb.auth_domain.clone().unwrap_or_default(),
            measurement_id: fb.measurement_id.clone().unwrap_or_default(),
            storage_bucket: fb.storage_bucket.clone().unwrap_or_default(),
            messaging_sender_id: fb.messaging_sender_id.clone().unwrap_or_default(),
        },
        None => FirebaseSettings::default(),
    };

    if name.is_empty() {
        return Err(ConfigError::invalid_app_name());
    }
    // A supplied but entirely unset firebase block is invalid; an absent
    // block silently defaults to empty settings.
    if firebase_options.is_some_and(|fb| fb.is_unset()) {
        return Err(ConfigError::invalid_firebase_config());
    }

    let providers = options
        .and_then(|o| o.providers.as_ref())
        .map(|names| {
            names
                .iter()
                .map(|name| name.parse())
                .collect::<Result<Vec<Provider>, _>>()
        })
        .transpose()?
        .unwrap_or_default();

    Ok(FireguardConfig {
        name,
        logo,
        theme,
        firebase,
        providers,
    })
}

/// Builds a complete [`PopupConfig`] from sparse options.
///
/// Resolution is fail-fast: the first validation failure aborts and no
/// partial result is returned.
pub fn initialize(options: &FiremittOptions, screen: &dyn Screen) -> Result<PopupConfig, ConfigError> {
    let url = resolve_url(options.url.as_deref())?;
    let dim = resolve_dimension(
        options.dim.as_ref().and_then(|d| d.width.as_ref()),
        options.dim.as_ref().and_then(|d| d.height.as_ref()),
    );
    let pos = resolve_position(
        options.pos.as_ref().and_then(|p| p.x.as_ref()),
        options.pos.as_ref().and_then(|p| p.y.as_ref()),
        dim.width,
        screen,
    );
    let fireguard = resolve_fireguard(options.config.as_ref(), None)?;

    Ok(PopupConfig {
        url,
        dim,
        pos,
        fireguard,
    })
}

/// Formats the window-feature flags consumed by the platform window-open
/// call: `width=<w>,height=<h>,left=<x>,top=<y>`.
pub fn window_flags(config: &PopupConfig) -> String {
    format!(
        "width={},height={},left={},top={}",
        config.dim.width, config.dim.height, config.pos.x, config.pos.y
    )
}

/// First non-empty candidate wins; empty strings count as absent.
fn pick_color(option: Option<&str>, fallback: Option<&str>, default: &str) -> String {
    [option, fallback]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}
