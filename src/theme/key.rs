//! theme keys
use {
    crate::error::ThemeError,
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// the id of a built-in theme
///
/// declaration order is the cycle order of the built-in registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeKey {
    /// cool pastel blues
    BlueSerenity,
    /// pinks into wine
    SummerSunset,
    /// lime and forest greens
    BrightGreen,
    /// apricot, rose and gray
    MutedEarthy,
    /// orange, amaranth and claret
    RedSunburst,
    /// thistle, sky blue and carnation
    PastelDream,
    /// floral white, flame and near black
    RusticCharm,
    /// linen, sage and coral
    SummerMelody,
    /// deep violets
    Nightfall,
    /// mint, celeste and pink
    Pastel,
    /// almond, tan and coffee
    AutumnHarvest,
    /// near black reds
    CrimsonHues,
    /// charcoal, sunglow and pumpkin
    October,
}

impl ThemeKey {
    /// the theme shown before anything random is allowed to happen
    pub const DEFAULT: ThemeKey = ThemeKey::BlueSerenity;

    /// every key, in cycle order
    pub const ALL: [ThemeKey; 13] = [
        ThemeKey::BlueSerenity,
        ThemeKey::SummerSunset,
        ThemeKey::BrightGreen,
        ThemeKey::MutedEarthy,
        ThemeKey::RedSunburst,
        ThemeKey::PastelDream,
        ThemeKey::RusticCharm,
        ThemeKey::SummerMelody,
        ThemeKey::Nightfall,
        ThemeKey::Pastel,
        ThemeKey::AutumnHarvest,
        ThemeKey::CrimsonHues,
        ThemeKey::October,
    ];

    /// the string id, as used in `data-theme` attributes and on the cli
    pub const fn id(self) -> &'static str {
        match self {
            ThemeKey::BlueSerenity => "blue-serenity",
            ThemeKey::SummerSunset => "summer-sunset",
            ThemeKey::BrightGreen => "bright-green",
            ThemeKey::MutedEarthy => "muted-earthy",
            ThemeKey::RedSunburst => "red-sunburst",
            ThemeKey::PastelDream => "pastel-dream",
            ThemeKey::RusticCharm => "rustic-charm",
            ThemeKey::SummerMelody => "summer-melody",
            ThemeKey::Nightfall => "nightfall",
            ThemeKey::Pastel => "pastel",
            ThemeKey::AutumnHarvest => "autumn-harvest",
            ThemeKey::CrimsonHues => "crimson-hues",
            ThemeKey::October => "october",
        }
    }

    /// find a key by its exact string id, surrounding whitespace is not stripped
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.id() == id)
    }
}

impl Default for ThemeKey {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeKey {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| ThemeError::InvalidKey(s.to_string()))
    }
}
