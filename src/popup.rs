//! Popup handle built from resolved configuration.

use crate::config::{self, FiremittOptions, PopupConfig};
use crate::screen::{Screen, StaticScreen};
use crate::Error;

/// A popup whose configuration has been fully resolved and validated.
///
/// Owns the [`PopupConfig`] handed to the platform window-opening call
/// and to the embedded widget.
///
/// ## Example
///
/// ```
/// use firemitt::config::FireguardOptions;
/// use firemitt::{FiremittOptions, Popup, StaticScreen};
///
/// let options = FiremittOptions {
///     url: Some("https://auth.example.com".into()),
///     config: Some(FireguardOptions {
///         name: Some("Demo".into()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
///
/// let popup = Popup::builder()
///     .with_options(options)
///     .with_screen(StaticScreen::new(1920.0))
///     .build()?;
///
/// assert_eq!(popup.window_flags(), "width=450,height=260,left=735,top=50");
/// # Ok::<(), firemitt::Error>(())
/// ```
#[derive(Debug)]
pub struct Popup {
    config: PopupConfig,
}

impl Popup {
    /// Creates a new builder for constructing a `Popup`.
    pub fn builder() -> PopupBuilder {
        PopupBuilder {
            options: None,
            screen: Box::new(StaticScreen::default()),
        }
    }

    /// Returns a reference to the resolved configuration.
    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    /// Releases the resolved configuration.
    pub fn into_config(self) -> PopupConfig {
        self.config
    }

    /// Window-feature flags for the platform window-open call.
    pub fn window_flags(&self) -> String {
        config::window_flags(&self.config)
    }
}

/// Builder for constructing a [`Popup`].
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct PopupBuilder {
    options: Option<FiremittOptions>,
    screen: Box<dyn Screen>,
}

impl PopupBuilder {
    /// Supplies the sparse popup options to resolve.
    pub fn with_options(mut self, options: FiremittOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Overrides the screen used for default horizontal centering.
    ///
    /// Defaults to [`StaticScreen::default`].
    pub fn with_screen(mut self, screen: impl Screen + 'static) -> Self {
        self.screen = Box::new(screen);
        self
    }

    /// Resolves the options and builds the `Popup`.
    ///
    /// Returns an error if no options were provided or if resolution
    /// fails.
    pub fn build(self) -> Result<Popup, Error> {
        let options = self.options.ok_or(Error::MissingOptions)?;
        let config = config::initialize(&options, self.screen.as_ref())?;
        Ok(Popup { config })
    }
}
