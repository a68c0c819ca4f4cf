pub mod configuration;
pub mod settings;
