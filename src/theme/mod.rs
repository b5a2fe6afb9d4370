//! palettes and the registry that holds them
pub mod key;
pub mod metadata;
pub mod palette;
pub mod presets;
pub mod registry;

pub use {key::ThemeKey, metadata::ThemeEntry, registry::ThemeRegistry};

use crate::theme::palette::Palette;

/// a theme
pub trait Theme {
    /// the registry key of the theme
    fn key() -> ThemeKey;
    /// the colors of the theme
    fn palette() -> Palette;
    /// the name of the theme
    fn name() -> &'static str;
    /// the prefix namespacing the theme's css variables
    fn css_prefix() -> &'static str;
    /// the icon recolor filter
    fn svg_filter() -> &'static str;
    /// convert the theme to CSS
    fn to_css_vars() -> String
    where
        Self: Sized,
    {
        crate::style::project(&ThemeEntry::new::<Self>()).to_css_vars()
    }
}
