//! terminal rendering for themes and style bundles
use {
    crate::{
        color::HexColor,
        style::StyleBundle,
        theme::{ThemeEntry, ThemeRegistry, palette::Shade},
    },
    owo_colors::{OwoColorize, Stream, Style},
    std::fmt::Write,
};

/// a two-cell block painted in the given color, plain spaces on dumb terminals
pub fn swatch(color: HexColor) -> String {
    match color.to_rgb() {
        Some(rgb) => "  "
            .if_supports_color(Stream::Stdout, |text| text.on_truecolor(rgb.r, rgb.g, rgb.b))
            .to_string(),
        None => "  ".to_string(),
    }
}

/// a theme's name written in its own colors
pub fn styled_name(entry: &ThemeEntry) -> String {
    let fg = entry.palette.shade(Shade::AccentStrong).to_rgb();
    let bg = entry.palette.shade(Shade::BgLightest).to_rgb();

    match (fg, bg) {
        (Some(fg), Some(bg)) => {
            let style = Style::new()
                .truecolor(fg.r, fg.g, fg.b)
                .on_truecolor(bg.r, bg.g, bg.b);

            format!(" {} ", entry.name)
                .if_supports_color(Stream::Stdout, |text| text.style(style))
                .to_string()
        }
        _ => format!(" {} ", entry.name),
    }
}

/// one line per theme: position, id, swatches and name
pub fn theme_table(registry: &ThemeRegistry) -> String {
    let mut out = String::new();

    for (i, entry) in registry.entries().enumerate() {
        let swatches: String = Shade::ALL
            .into_iter()
            .map(|shade| swatch(entry.palette.shade(shade)))
            .collect();

        let _ = writeln!(
            out,
            "{:>2}  {:<16} {} {}{}",
            i + 1,
            entry.key.id(),
            swatches,
            styled_name(entry),
            if entry.palette.has_deep() { "" } else { " (no deep tones)" }
        );
    }

    out
}

/// a human readable dump of a style bundle
pub fn bundle_report(bundle: &StyleBundle) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", bundle.name, bundle.key);
    let _ = writeln!(out, "  background  {} {}", swatch(bundle.background), bundle.background);
    let _ = writeln!(out, "  text        {} {}", swatch(bundle.text), bundle.text);
    let _ = writeln!(out, "  accent      {} {}", swatch(bundle.accent), bundle.accent);
    let _ = writeln!(out, "  icon filter {}", bundle.svg_filter);
    let _ = writeln!(
        out,
        "  classes     {} {} {}",
        bundle.classes.background, bundle.classes.text, bundle.classes.container
    );
    let _ = writeln!(out, "  variables");

    for var in bundle.css_variables.iter().chain(&bundle.inline_variables) {
        let _ = writeln!(out, "    {} {:<28} {}", swatch(var.value), var.name, var.value);
    }

    out
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{style::project, theme::ThemeKey},
    };

    #[test]
    fn test_table_lists_every_theme() {
        let registry = ThemeRegistry::new();
        let table = theme_table(&registry);

        assert_eq!(table.lines().count(), registry.count());
        assert!(table.lines().next().unwrap().contains("blue-serenity"));
        assert!(table.contains("Pastel Dream"));
        assert_eq!(table.matches("(no deep tones)").count(), 2);
    }

    #[test]
    fn test_report_has_every_variable() {
        let registry = ThemeRegistry::builtin();
        let bundle = project(registry.get(ThemeKey::AutumnHarvest).unwrap());
        let report = bundle_report(&bundle);

        assert!(report.starts_with("Autumn Harvest (autumn-harvest)\n"));
        for var in &bundle.css_variables {
            assert!(report.contains(&var.name));
        }
        assert!(report.contains("--current-accent"));
    }
}
