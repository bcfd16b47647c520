//! Core thermon library (sensor reader, threshold classifier, poll loop).

pub mod config;
pub mod error;
pub mod interrupt;
pub mod logging;
pub mod monitor;
pub mod render;
pub mod sensor;
pub mod thermal;
