//! the built-in themes
use crate::theme::{Theme, ThemeKey, palette::*};

macro_rules! impl_theme {
    ($name:ident, $display_name:expr, $prefix:expr, $filter:expr, $palette:expr) => {
        #[doc = $display_name]
        #[derive(Clone, Default)]
        pub struct $name;

        impl Theme for $name {
            fn key() -> ThemeKey {
                ThemeKey::$name
            }

            fn palette() -> Palette {
                $palette
            }

            fn name() -> &'static str {
                $display_name
            }

            fn css_prefix() -> &'static str {
                $prefix
            }

            fn svg_filter() -> &'static str {
                $filter
            }
        }
    };
}

impl_theme!(
    BlueSerenity,
    "Blue Serenity",
    "blue",
    "brightness(0) saturate(100%) invert(76%) sepia(34%) saturate(457%) hue-rotate(198deg) brightness(101%) contrast(101%)",
    Palette::new(
        BackgroundShades::new("#edf2fb", "#e2eafc", "#d7e3fc"),
        ContainerShades::new("#ccdbfd", "#c1d3fe"),
        AccentShades::new("#b6ccfe", "#abc4ff"),
    )
);

impl_theme!(
    SummerSunset,
    "Summer Sunset",
    "sunset",
    "brightness(0) saturate(100%) invert(16%) sepia(82%) saturate(800%) hue-rotate(324deg) brightness(96%) contrast(89%)",
    Palette::new(
        BackgroundShades::new("#ffe0e9", "#ffc2d4", "#ff9ebb"),
        ContainerShades::new("#ff7aa2", "#e05780"),
        AccentShades::new("#b9375e", "#8a2846"),
    )
    .with_deep(DeepShades::new("#8a2846", "#602437", "#522e38"))
);

impl_theme!(
    BrightGreen,
    "Bright Green",
    "green",
    "brightness(0) saturate(100%) invert(8%) sepia(100%) saturate(800%) hue-rotate(130deg) brightness(95%) contrast(106%)",
    Palette::new(
        BackgroundShades::new("#9ef01a", "#ccff33", "#70e000"),
        ContainerShades::new("#38b000", "#008000"),
        AccentShades::new("#007200", "#004b23"),
    )
    .with_deep(DeepShades::new("#004b23", "#006400", "#007200"))
);

impl_theme!(
    MutedEarthy,
    "Muted Earthy",
    "earthy",
    "brightness(0) saturate(100%) invert(42%) sepia(10%) saturate(600%) hue-rotate(314deg) brightness(91%) contrast(88%)",
    Palette::new(
        BackgroundShades::new("#ffcdb2", "#ffb4a2", "#e5989b"),
        ContainerShades::new("#e5989b", "#b5838d"),
        AccentShades::new("#b5838d", "#6d6875"),
    )
    .with_deep(DeepShades::new("#6d6875", "#b5838d", "#e5989b"))
);

impl_theme!(
    RedSunburst,
    "Red Sunburst",
    "red",
    "brightness(0) saturate(100%) invert(3%) sepia(100%) saturate(800%) hue-rotate(316deg) brightness(97%) contrast(106%)",
    Palette::new(
        BackgroundShades::new("#ff9b54", "#ff7f51", "#ce4257"),
        ContainerShades::new("#ce4257", "#720026"),
        AccentShades::new("#720026", "#4f000b"),
    )
    .with_deep(DeepShades::new("#4f000b", "#720026", "#ce4257"))
);

impl_theme!(
    PastelDream,
    "Pastel Dream",
    "pastel",
    "brightness(0) saturate(100%) invert(91%) sepia(18%) saturate(600%) hue-rotate(314deg) brightness(104%) contrast(96%)",
    Palette::new(
        BackgroundShades::new("#cdb4db", "#bde0fe", "#a2d2ff"),
        ContainerShades::new("#ffc8dd", "#ffafcc"),
        AccentShades::new("#ffafcc", "#ffc8dd"),
    )
);

impl_theme!(
    RusticCharm,
    "Rustic Charm",
    "rustic",
    "brightness(0) saturate(100%) invert(100%) sepia(100%) saturate(800%) hue-rotate(20deg) brightness(85%) contrast(85%)",
    Palette::new(
        BackgroundShades::new("#fffcf2", "#ccc5b9", "#eb5e28"),
        ContainerShades::new("#403d39", "#252422"),
        AccentShades::new("#eb5e28", "#252422"),
    )
    .with_deep(DeepShades::new("#252422", "#403d39", "#eb5e28"))
);

impl_theme!(
    SummerMelody,
    "Summer Melody",
    "melody",
    "brightness(0) saturate(100%) invert(100%) sepia(100%) saturate(700%) hue-rotate(30deg) brightness(95%) contrast(95%)",
    Palette::new(
        BackgroundShades::new("#f7ede2", "#f5cac3", "#f6bd60"),
        ContainerShades::new("#84a59d", "#f28482"),
        AccentShades::new("#f6bd60", "#84a59d"),
    )
    .with_deep(DeepShades::new("#84a59d", "#f28482", "#f6bd60"))
);

impl_theme!(
    Nightfall,
    "Nightfall",
    "nightfall",
    "brightness(0) saturate(100%) invert(45%) sepia(100%) saturate(800%) hue-rotate(260deg) brightness(90%) contrast(110%)",
    Palette::new(
        BackgroundShades::new("#10002b", "#240046", "#3c096c"),
        ContainerShades::new("#5a189a", "#7b2cbf"),
        AccentShades::new("#9d4edd", "#c77dff"),
    )
    .with_deep(DeepShades::new("#e0aaff", "#c77dff", "#9d4edd"))
);

impl_theme!(
    Pastel,
    "Pastel",
    "pastel-new",
    "brightness(0) saturate(100%) invert(85%) sepia(15%) saturate(500%) hue-rotate(180deg) brightness(105%) contrast(95%)",
    Palette::new(
        BackgroundShades::new("#eff7f6", "#b2f7ef", "#7bdff2"),
        ContainerShades::new("#f7d6e0", "#f2b5d4"),
        AccentShades::new("#f2b5d4", "#7bdff2"),
    )
    .with_deep(DeepShades::new("#f7d6e0", "#f2b5d4", "#7bdff2"))
);

impl_theme!(
    AutumnHarvest,
    "Autumn Harvest",
    "autumn",
    "brightness(0) saturate(100%) invert(35%) sepia(20%) saturate(600%) hue-rotate(25deg) brightness(85%) contrast(95%)",
    Palette::new(
        BackgroundShades::new("#ede0d4", "#e6ccb2", "#ddb892"),
        ContainerShades::new("#b08968", "#9c6644"),
        AccentShades::new("#9c6644", "#7f5539"),
    )
    .with_deep(DeepShades::new("#7f5539", "#9c6644", "#b08968"))
);

impl_theme!(
    CrimsonHues,
    "Crimson Hues",
    "crimson",
    "brightness(0) saturate(100%) invert(20%) sepia(100%) saturate(800%) hue-rotate(350deg) brightness(80%) contrast(120%)",
    Palette::new(
        BackgroundShades::new("#250902", "#38040e", "#640d14"),
        ContainerShades::new("#800e13", "#ad2831"),
        AccentShades::new("#ad2831", "#800e13"),
    )
    .with_deep(DeepShades::new("#ad2831", "#800e13", "#640d14"))
);

impl_theme!(
    October,
    "October",
    "october",
    "brightness(0) saturate(100%) invert(65%) sepia(50%) saturate(600%) hue-rotate(15deg) brightness(95%) contrast(105%)",
    Palette::new(
        BackgroundShades::new("#233d4d", "#619b8a", "#a1c181"),
        ContainerShades::new("#fcca46", "#fe7f2d"),
        AccentShades::new("#fe7f2d", "#fcca46"),
    )
    .with_deep(DeepShades::new("#fe7f2d", "#fcca46", "#a1c181"))
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_preset_keys_match_struct_names() {
        assert_eq!(BlueSerenity::key(), ThemeKey::BlueSerenity);
        assert_eq!(Pastel::key(), ThemeKey::Pastel);
        assert_eq!(October::name(), "October");
    }

    #[test]
    fn test_only_two_presets_lack_deep_tones() {
        assert!(!BlueSerenity::palette().has_deep());
        assert!(!PastelDream::palette().has_deep());
        assert!(SummerSunset::palette().has_deep());
        assert!(Nightfall::palette().has_deep());
    }

    #[test]
    fn test_preset_colors_are_valid_hex() {
        let palette = CrimsonHues::palette();
        for shade in Shade::ALL {
            assert!(Rgb::from_hex(palette.shade(shade).as_str()).is_some());
        }
    }

    #[test]
    fn test_presets_carry_their_display_name() {
        assert_eq!(BlueSerenity::name(), "Blue Serenity");
        assert_eq!(PastelDream::name(), "Pastel Dream");
        assert_eq!(CrimsonHues::css_prefix(), "crimson");
    }

    #[test]
    fn test_filters_start_from_black() {
        assert!(RusticCharm::svg_filter().starts_with("brightness(0) saturate(100%)"));
    }
}
