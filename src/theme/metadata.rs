//! theme metadata stuff
use {
    crate::theme::{Theme, ThemeKey, palette::Palette, presets::*},
    serde::Serialize,
};

/// a registered theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeEntry {
    /// the id of the theme
    pub key: ThemeKey,
    /// the theme name
    pub name: &'static str,
    /// namespace for the theme's css custom properties and utility classes
    pub css_prefix: &'static str,
    /// css filter turning a black icon into the strong accent color
    pub svg_filter: &'static str,
    /// the colors
    pub palette: Palette,
}

impl ThemeEntry {
    /// make a new entry
    pub fn new<T: Theme>() -> Self {
        Self {
            key: T::key(),
            name: T::name(),
            css_prefix: T::css_prefix(),
            svg_filter: T::svg_filter(),
            palette: T::palette(),
        }
    }

    /// the built-in entry for a key
    pub fn builtin(key: ThemeKey) -> Self {
        match key {
            ThemeKey::BlueSerenity => Self::new::<BlueSerenity>(),
            ThemeKey::SummerSunset => Self::new::<SummerSunset>(),
            ThemeKey::BrightGreen => Self::new::<BrightGreen>(),
            ThemeKey::MutedEarthy => Self::new::<MutedEarthy>(),
            ThemeKey::RedSunburst => Self::new::<RedSunburst>(),
            ThemeKey::PastelDream => Self::new::<PastelDream>(),
            ThemeKey::RusticCharm => Self::new::<RusticCharm>(),
            ThemeKey::SummerMelody => Self::new::<SummerMelody>(),
            ThemeKey::Nightfall => Self::new::<Nightfall>(),
            ThemeKey::Pastel => Self::new::<Pastel>(),
            ThemeKey::AutumnHarvest => Self::new::<AutumnHarvest>(),
            ThemeKey::CrimsonHues => Self::new::<CrimsonHues>(),
            ThemeKey::October => Self::new::<October>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_entries_carry_their_key() {
        for key in ThemeKey::ALL {
            assert_eq!(ThemeEntry::builtin(key).key, key);
        }
    }

    #[test]
    fn test_css_prefixes_are_unique() {
        let mut prefixes: Vec<_> = ThemeKey::ALL
            .into_iter()
            .map(|k| ThemeEntry::builtin(k).css_prefix)
            .collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), ThemeKey::ALL.len());
    }
}
