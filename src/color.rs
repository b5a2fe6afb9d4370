//! color parsing and small color math helpers
use {
    serde::{Serialize, Serializer},
    std::fmt,
};

/// a `#rrggbb` color literal baked into the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(&'static str);

impl HexColor {
    /// pure black
    pub const BLACK: HexColor = HexColor("#000000");
    /// pure white
    pub const WHITE: HexColor = HexColor("#ffffff");

    /// wrap a hex literal
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    /// the literal, `#` included
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// decode into rgb channels
    pub fn to_rgb(self) -> Option<Rgb> {
        Rgb::from_hex(self.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// an rgb triplet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    /// red channel
    pub r: u8,
    /// green channel
    pub g: u8,
    /// blue channel
    pub b: u8,
}

impl Rgb {
    /// make a new rgb triplet
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// parse `#rrggbb` or `#rgb`, the leading `#` is optional
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            _ => None,
        }
    }

    /// lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// perceived brightness on a 0..=255 scale (ITU-R BT.601 weights)
    pub fn brightness(self) -> f32 {
        (self.r as f32 * 299.0 + self.g as f32 * 587.0 + self.b as f32 * 114.0) / 1000.0
    }

    /// black for light colors, white for dark ones
    pub fn contrast(self) -> HexColor {
        if self.brightness() > 128.0 {
            HexColor::BLACK
        } else {
            HexColor::WHITE
        }
    }
}

/// append an alpha channel to a hex color, giving `#rrggbbaa`
///
/// `alpha` is clamped to `0.0..=1.0`. returns `None` if `hex` doesn't parse.
pub fn with_alpha(hex: &str, alpha: f32) -> Option<String> {
    let rgb = Rgb::from_hex(hex)?;
    let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Some(format!("{}{:02x}", rgb.to_hex(), alpha))
}

/// pick black or white text for the given background
pub fn contrast_color(hex: &str) -> Option<HexColor> {
    Rgb::from_hex(hex).map(Rgb::contrast)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(Rgb::from_hex("#ff0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::from_hex("abc4ff"), Some(Rgb::new(0xab, 0xc4, 0xff)));
        assert_eq!(Rgb::from_hex("#F00"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::from_hex("#GG0000"), None);
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#ééé"), None);
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(Rgb::new(0xAB, 0xC4, 0xFF).to_hex(), "#abc4ff");
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#8a2846", 0.5).as_deref(), Some("#8a284680"));
        assert_eq!(with_alpha("#abc4ff", 1.0).as_deref(), Some("#abc4ffff"));
        assert_eq!(with_alpha("#abc4ff", 7.0).as_deref(), Some("#abc4ffff"));
        assert_eq!(with_alpha("nope", 0.5), None);
    }

    #[test]
    fn test_contrast_color() {
        assert_eq!(contrast_color("#edf2fb"), Some(HexColor::BLACK));
        assert_eq!(contrast_color("#10002b"), Some(HexColor::WHITE));
        assert_eq!(contrast_color("not a color"), None);
    }
}
