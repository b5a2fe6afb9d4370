//! style projection: the ready-to-render values derived from a theme
use {
    crate::{
        color::HexColor,
        theme::{
            ThemeEntry, ThemeKey,
            palette::{DeepShade, Shade},
        },
    },
    serde::Serialize,
    std::fmt::Write,
};

/// alias always pointing at the active theme's background
pub const THEME_BG: &str = "--theme-bg";
/// alias always pointing at the active theme's text color
pub const THEME_TEXT: &str = "--theme-text";
/// alias always pointing at the active theme's accent
pub const THEME_ACCENT: &str = "--theme-accent";

/// a css custom property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssVar {
    /// the property name, leading `--` included
    pub name: String,
    /// the value
    pub value: HexColor,
}

impl CssVar {
    /// make a new custom property
    fn new(name: impl Into<String>, value: HexColor) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// utility class names for the theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeClasses {
    /// page background class
    pub background: String,
    /// text class
    pub text: String,
    /// container fill class
    pub container: String,
}

/// everything presentation code needs to paint with a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleBundle {
    /// the theme key, also the `data-theme` attribute value
    pub key: ThemeKey,
    /// the display name
    pub name: &'static str,
    /// page background (`background.lightest`)
    pub background: HexColor,
    /// text color (`accent.strong`)
    pub text: HexColor,
    /// accent color (`accent.medium`)
    pub accent: HexColor,
    /// icon recolor filter
    pub svg_filter: &'static str,
    /// utility class names
    pub classes: ThemeClasses,
    /// prefixed custom properties followed by the `--theme-*` aliases
    pub css_variables: Vec<CssVar>,
    /// `--current-*` properties for inline styles
    pub inline_variables: Vec<CssVar>,
}

/// project a theme into its style bundle
pub fn project(entry: &ThemeEntry) -> StyleBundle {
    let palette = &entry.palette;
    let prefix = entry.css_prefix;

    let background = palette.shade(Shade::BgLightest);
    let text = palette.shade(Shade::AccentStrong);
    let accent = palette.shade(Shade::AccentMedium);

    let mut css_variables: Vec<CssVar> = Shade::ALL
        .into_iter()
        .map(|shade| {
            CssVar::new(
                format!("--{}-{}", prefix, shade.css_suffix()),
                palette.shade(shade),
            )
        })
        .collect();

    css_variables.extend(DeepShade::ALL.into_iter().filter_map(|shade| {
        palette
            .deep_shade(shade)
            .map(|value| CssVar::new(format!("--{}-{}", prefix, shade.css_suffix()), value))
    }));

    css_variables.extend([
        CssVar::new(THEME_BG, background),
        CssVar::new(THEME_TEXT, text),
        CssVar::new(THEME_ACCENT, accent),
    ]);

    StyleBundle {
        key: entry.key,
        name: entry.name,
        background,
        text,
        accent,
        svg_filter: entry.svg_filter,
        classes: ThemeClasses {
            background: format!("bg-{}-{}", prefix, Shade::BgLightest.css_suffix()),
            text: format!("text-{}-{}", prefix, Shade::AccentStrong.css_suffix()),
            container: format!("bg-{}-{}", prefix, Shade::ContainerLight.css_suffix()),
        },
        css_variables,
        inline_variables: vec![
            CssVar::new("--current-bg", background),
            CssVar::new("--current-text", text),
            CssVar::new("--current-accent", accent),
        ],
    }
}

impl StyleBundle {
    /// look up a custom property by name
    pub fn variable(&self, name: &str) -> Option<HexColor> {
        self.css_variables
            .iter()
            .chain(&self.inline_variables)
            .find(|var| var.name == name)
            .map(|var| var.value)
    }

    /// render the custom properties as `name: value;` lines
    pub fn to_css_vars(&self) -> String {
        let mut vars = String::new();

        for var in &self.css_variables {
            let _ = writeln!(vars, "{}: {};", var.name, var.value);
        }

        vars
    }

    /// render a `:root` block scoped to this theme's `data-theme` attribute
    pub fn to_root_block(&self) -> String {
        let mut block = format!(":root[data-theme=\"{}\"] {{\n", self.key);

        for var in &self.css_variables {
            let _ = writeln!(block, "  {}: {};", var.name, var.value);
        }

        block.push_str("}\n");
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeRegistry;

    fn bundle(key: ThemeKey) -> StyleBundle {
        project(ThemeRegistry::builtin().get(key).unwrap())
    }

    #[test]
    fn test_projection_uses_palette_values_verbatim() {
        let registry = ThemeRegistry::builtin();

        for entry in registry.entries() {
            let styles = project(entry);
            assert_eq!(styles.background, entry.palette.background.lightest);
            assert_eq!(styles.text, entry.palette.accent.strong);
            assert_eq!(styles.accent, entry.palette.accent.medium);
            assert_eq!(styles.svg_filter, entry.svg_filter);
        }
    }

    #[test]
    fn test_variables_without_deep_tones() {
        let styles = bundle(ThemeKey::BlueSerenity);
        let names: Vec<_> = styles.css_variables.iter().map(|v| v.name.as_str()).collect();

        assert_eq!(
            names,
            [
                "--blue-bg-lightest",
                "--blue-bg-lighter",
                "--blue-bg-light",
                "--blue-container-light",
                "--blue-container-medium",
                "--blue-accent-medium",
                "--blue-accent-strong",
                "--theme-bg",
                "--theme-text",
                "--theme-accent",
            ]
        );
    }

    #[test]
    fn test_variables_with_deep_tones() {
        let styles = bundle(ThemeKey::SummerSunset);
        assert_eq!(styles.css_variables.len(), 13);
        assert_eq!(
            styles.variable("--sunset-deep-tertiary").map(|c| c.as_str()),
            Some("#522e38")
        );
        assert_eq!(styles.variable(THEME_TEXT).map(|c| c.as_str()), Some("#8a2846"));
    }

    #[test]
    fn test_classes_and_inline_variables() {
        let styles = bundle(ThemeKey::Pastel);
        assert_eq!(styles.classes.background, "bg-pastel-new-bg-lightest");
        assert_eq!(styles.classes.text, "text-pastel-new-accent-strong");
        assert_eq!(styles.classes.container, "bg-pastel-new-container-light");
        assert_eq!(styles.variable("--current-bg"), Some(styles.background));
    }

    #[test]
    fn test_rendered_css() {
        let styles = bundle(ThemeKey::Nightfall);
        let vars = styles.to_css_vars();
        assert!(vars.starts_with("--nightfall-bg-lightest: #10002b;\n"));
        assert!(vars.ends_with("--theme-accent: #9d4edd;\n"));

        let block = styles.to_root_block();
        assert!(block.starts_with(":root[data-theme=\"nightfall\"] {\n"));
        assert!(block.contains("  --theme-bg: #10002b;\n"));
        assert!(block.ends_with("}\n"));
    }

    #[test]
    fn test_bundle_serializes() {
        let json = serde_json::to_value(bundle(ThemeKey::October)).unwrap();
        assert_eq!(json["key"], "october");
        assert_eq!(json["background"], "#233d4d");
        assert_eq!(json["css_variables"][0]["name"], "--october-bg-lightest");
    }
}
