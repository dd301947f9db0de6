//! Infrastructure layer: everything that reads the environment or the file
//! system on behalf of the command-line tool itself (as opposed to the config
//! files it operates on).

pub mod settings;

pub use settings::{load_settings, Settings, SettingsError};
