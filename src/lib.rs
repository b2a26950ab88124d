pub mod config;
pub mod popup;
pub mod screen;
mod error;

pub use config::{ConfigError, ErrorKind, FiremittOptions, PopupConfig};
pub use error::Error;
pub use popup::Popup;
pub use screen::{Screen, StaticScreen};
