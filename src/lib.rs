//! huewheel is a palette registry and auto-rotating theme engine
//!
//! thirteen fixed palettes live in a [`ThemeRegistry`], a [`ThemeController`]
//! owns which one is current (deterministic default, a one-shot random pick,
//! manual cycling and timed auto-switching), and [`style::project`] turns the
//! current theme into CSS variables and class names.
//!
//! ```
//! use huewheel::{ThemeController, ThemeKey, ThemeRegistry};
//!
//! let mut controller = ThemeController::new(ThemeRegistry::builtin());
//! assert_eq!(controller.initialize(), ThemeKey::BlueSerenity);
//! assert_eq!(controller.next().unwrap(), ThemeKey::SummerSunset);
//!
//! let styles = controller.styles().unwrap();
//! assert_eq!(styles.background.as_str(), "#ffe0e9");
//! ```
#![forbid(
    clippy::missing_docs_in_private_items,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]

mod macros;

#[cfg(feature = "cli")]
pub mod app;
pub mod color;
#[cfg(feature = "cli")]
pub mod config;
pub mod controller;
pub mod error;
pub mod style;
pub mod theme;

pub use {
    controller::{ThemeController, ThemeObserver},
    error::{Result, ThemeError},
    style::StyleBundle,
    theme::{ThemeEntry, ThemeKey, ThemeRegistry},
};
