//! Configuration module.
//!
//! Handles the classifier and logging settings file.

mod settings;

pub use settings::{
    ClassifierSettings, LoggingSettings, Settings, SettingsError, UnresolvedPolicy,
};
