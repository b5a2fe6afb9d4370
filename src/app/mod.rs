//! the command line application
pub mod cli;
pub mod core;
pub mod logging;
pub mod render;

pub use core::HueApp;
