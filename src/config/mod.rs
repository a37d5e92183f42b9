// src/config/mod.rs

pub mod layout;
pub mod settings;

pub use settings::GameSettings;
