//! Popup configuration normalization and validation.

mod error;
mod model;
mod options;
mod resolve;
mod value;

pub use error::{ConfigError, ErrorKind, ErrorRecord};
pub use model::{
    Dim, FirebaseSettings, FireguardConfig, Pos, PopupConfig, Provider, Theme, DEFAULT_HEIGHT,
    DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, DEFAULT_TEXT_COLOR, DEFAULT_TOP, DEFAULT_WIDTH,
};
pub use options::{
    DimOptions, FirebaseOptions, FiremittOptions, FireguardOptions, PosOptions, ThemeOptions,
};
pub use resolve::{
    initialize, resolve_dimension, resolve_fireguard, resolve_position, resolve_url, window_flags,
};
pub use value::RawValue;
