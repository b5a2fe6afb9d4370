//! palette creation stuff
use {crate::color::HexColor, serde::Serialize};

/// background tones, lightest to darkest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackgroundShades {
    /// page background
    pub lightest: HexColor,
    /// slightly darker background
    pub lighter: HexColor,
    /// darkest background tone
    pub light: HexColor,
}

impl BackgroundShades {
    /// make a new set of background shades
    pub const fn new(lightest: &'static str, lighter: &'static str, light: &'static str) -> Self {
        Self {
            lightest: HexColor::new(lightest),
            lighter: HexColor::new(lighter),
            light: HexColor::new(light),
        }
    }
}

/// container tones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContainerShades {
    /// light container fill
    pub light: HexColor,
    /// medium container fill
    pub medium: HexColor,
}

impl ContainerShades {
    /// make a new set of container shades
    pub const fn new(light: &'static str, medium: &'static str) -> Self {
        Self {
            light: HexColor::new(light),
            medium: HexColor::new(medium),
        }
    }
}

/// accent tones for titles and highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccentShades {
    /// secondary accent
    pub medium: HexColor,
    /// primary accent, also the body text color
    pub strong: HexColor,
}

impl AccentShades {
    /// make a new set of accent shades
    pub const fn new(medium: &'static str, strong: &'static str) -> Self {
        Self {
            medium: HexColor::new(medium),
            strong: HexColor::new(strong),
        }
    }
}

/// optional high emphasis tones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeepShades {
    /// primary deep tone
    pub primary: HexColor,
    /// secondary deep tone
    pub secondary: HexColor,
    /// tertiary deep tone
    pub tertiary: HexColor,
}

impl DeepShades {
    /// make a new set of deep shades
    pub const fn new(primary: &'static str, secondary: &'static str, tertiary: &'static str) -> Self {
        Self {
            primary: HexColor::new(primary),
            secondary: HexColor::new(secondary),
            tertiary: HexColor::new(tertiary),
        }
    }
}

/// a required palette tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    /// `background.lightest`
    BgLightest,
    /// `background.lighter`
    BgLighter,
    /// `background.light`
    BgLight,
    /// `container.light`
    ContainerLight,
    /// `container.medium`
    ContainerMedium,
    /// `accent.medium`
    AccentMedium,
    /// `accent.strong`
    AccentStrong,
}

impl Shade {
    /// every required tone, in css variable order
    pub const ALL: [Shade; 7] = [
        Shade::BgLightest,
        Shade::BgLighter,
        Shade::BgLight,
        Shade::ContainerLight,
        Shade::ContainerMedium,
        Shade::AccentMedium,
        Shade::AccentStrong,
    ];

    /// the suffix used in css variable and class names
    pub const fn css_suffix(self) -> &'static str {
        match self {
            Shade::BgLightest => "bg-lightest",
            Shade::BgLighter => "bg-lighter",
            Shade::BgLight => "bg-light",
            Shade::ContainerLight => "container-light",
            Shade::ContainerMedium => "container-medium",
            Shade::AccentMedium => "accent-medium",
            Shade::AccentStrong => "accent-strong",
        }
    }
}

/// an optional deep tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeepShade {
    /// `deep.primary`
    Primary,
    /// `deep.secondary`
    Secondary,
    /// `deep.tertiary`
    Tertiary,
}

impl DeepShade {
    /// every deep tone, in css variable order
    pub const ALL: [DeepShade; 3] = [DeepShade::Primary, DeepShade::Secondary, DeepShade::Tertiary];

    /// the suffix used in css variable names
    pub const fn css_suffix(self) -> &'static str {
        match self {
            DeepShade::Primary => "deep-primary",
            DeepShade::Secondary => "deep-secondary",
            DeepShade::Tertiary => "deep-tertiary",
        }
    }
}

/// a complete palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// background tones
    pub background: BackgroundShades,
    /// container tones
    pub container: ContainerShades,
    /// accent tones
    pub accent: AccentShades,
    /// deep tones, either all three or none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep: Option<DeepShades>,
}

impl Palette {
    /// make a palette without deep tones
    pub const fn new(
        background: BackgroundShades,
        container: ContainerShades,
        accent: AccentShades,
    ) -> Self {
        Self {
            background,
            container,
            accent,
            deep: None,
        }
    }

    /// set the deep tones
    pub const fn with_deep(self, deep: DeepShades) -> Self {
        Self {
            deep: Some(deep),
            ..self
        }
    }

    /// get a required tone
    pub const fn shade(&self, shade: Shade) -> HexColor {
        match shade {
            Shade::BgLightest => self.background.lightest,
            Shade::BgLighter => self.background.lighter,
            Shade::BgLight => self.background.light,
            Shade::ContainerLight => self.container.light,
            Shade::ContainerMedium => self.container.medium,
            Shade::AccentMedium => self.accent.medium,
            Shade::AccentStrong => self.accent.strong,
        }
    }

    /// get a deep tone, if the palette has them
    pub const fn deep_shade(&self, shade: DeepShade) -> Option<HexColor> {
        match self.deep {
            Some(deep) => Some(match shade {
                DeepShade::Primary => deep.primary,
                DeepShade::Secondary => deep.secondary,
                DeepShade::Tertiary => deep.tertiary,
            }),
            None => None,
        }
    }

    /// whether the palette carries deep tones
    pub const fn has_deep(&self) -> bool {
        self.deep.is_some()
    }
}
