use console::Style;
use once_cell::sync::Lazy;
use recipes::view_state::Theme;
use std::collections::HashMap;

/// Shown in place of text whose style name is not registered, to catch template typos.
const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Named styles applied by the `style` template filter.
pub struct Palette {
    styles: HashMap<&'static str, Style>,
}

impl Palette {
    fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    #[cfg(test)]
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color cube index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return 232 + ((r as u16 - 8) * 24 / 247) as u8;
    }
    let cube = |c: u8| (c as u16 * 5 / 255) as u8;
    16 + 36 * cube(r) + 6 * cube(g) + cube(b)
}

pub mod names {
    pub const NAV: &str = "nav";
    pub const NAV_TOGGLE: &str = "nav_toggle";
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const SUMMARY: &str = "summary";
    pub const TAG: &str = "tag";
    pub const IMAGE: &str = "image";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const HEADING: &str = "heading";
    pub const LABEL: &str = "label";
    pub const HINT: &str = "hint";
    pub const ERROR: &str = "error";
    pub const ACTION: &str = "action";
}

pub static LIGHT_PALETTE: Lazy<Palette> = Lazy::new(|| {
    Palette::new()
        .add(names::NAV, Style::new().bold().black().on_white())
        .add(names::NAV_TOGGLE, Style::new().black().on_white())
        .add(names::ID, Style::new().blue())
        .add(names::TITLE, Style::new().bold())
        .add(names::SUMMARY, Style::new().color256(rgb_to_ansi256((90, 90, 90))))
        .add(names::TAG, Style::new().black().on_color256(rgb_to_ansi256((220, 220, 220))))
        .add(names::IMAGE, Style::new().underlined().blue())
        .add(
            names::PLACEHOLDER,
            Style::new().color256(rgb_to_ansi256((154, 154, 154))).italic(),
        )
        .add(names::HEADING, Style::new().bold().underlined())
        .add(names::LABEL, Style::new().bold())
        .add(names::HINT, Style::new().dim().italic())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::ACTION, Style::new().cyan())
});

pub static DARK_PALETTE: Lazy<Palette> = Lazy::new(|| {
    Palette::new()
        .add(names::NAV, Style::new().bold().white().on_black())
        .add(names::NAV_TOGGLE, Style::new().white().on_black())
        .add(names::ID, Style::new().yellow())
        .add(names::TITLE, Style::new().bold().white())
        .add(names::SUMMARY, Style::new().color256(rgb_to_ansi256((190, 190, 190))))
        .add(names::TAG, Style::new().white().on_color256(rgb_to_ansi256((60, 60, 60))))
        .add(names::IMAGE, Style::new().underlined().cyan())
        .add(
            names::PLACEHOLDER,
            Style::new().color256(rgb_to_ansi256((120, 120, 120))).italic(),
        )
        .add(names::HEADING, Style::new().bold().underlined().white())
        .add(names::LABEL, Style::new().bold().white())
        .add(names::HINT, Style::new().dim().italic())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::ACTION, Style::new().magenta())
});

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT_PALETTE,
        Theme::Dark => &DARK_PALETTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_palettes_define_every_name() {
        let all = [
            names::NAV,
            names::NAV_TOGGLE,
            names::ID,
            names::TITLE,
            names::SUMMARY,
            names::TAG,
            names::IMAGE,
            names::PLACEHOLDER,
            names::HEADING,
            names::LABEL,
            names::HINT,
            names::ERROR,
            names::ACTION,
        ];
        for theme in [Theme::Light, Theme::Dark] {
            for name in all {
                assert!(palette(theme).has(name), "{} missing in {}", name, theme);
            }
        }
    }

    #[test]
    fn plain_mode_returns_text() {
        assert_eq!(LIGHT_PALETTE.apply(names::TITLE, "Soup", false), "Soup");
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(LIGHT_PALETTE.apply("titel", "Soup", false), "(!?) Soup");
    }

    #[test]
    fn greys_map_to_grayscale_ramp() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert!(rgb_to_ansi256((154, 154, 154)) >= 232);
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
    }
}
