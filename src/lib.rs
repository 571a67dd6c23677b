//! Procedural generator for the checkmark PNG icons of the web app.

pub mod commands;
pub mod config;
pub mod error;
pub mod icon;
pub mod png;
pub mod utils;

pub use error::IconError;
