//! Theme system for TUI colors and styles
//!
//! Maps the panel's semantic tones and the backend's colour strings onto
//! terminal colours.

use iocraft::prelude::Color;

use crate::tui::panel::model::Tone;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Semantic colors
    pub good: Color,
    pub average: Color,
    pub bad: Color,
    pub orange: Color,
    pub red: Color,
    pub green: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub selected: Color,
    pub tab_active: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            good: Color::Green,
            average: Color::Rgb {
                r: 240,
                g: 160,
                b: 40,
            },
            bad: Color::Red,
            orange: Color::Rgb {
                r: 242,
                g: 113,
                b: 28,
            },
            red: Color::Red,
            green: Color::Green,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            selected: Color::Rgb {
                r: 46,
                g: 147,
                b: 222,
            },
            tab_active: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the color for a semantic tone
    pub fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Default => self.text,
            Tone::Bad => self.bad,
            Tone::Orange => self.orange,
            Tone::Red => self.red,
            Tone::Green => self.green,
        }
    }

    /// Resolve a backend colour string.
    ///
    /// Accepts `#rgb`, `#rrggbb`, the named UI tones (`good`, `average`,
    /// `bad`) and common colour names. Returns `None` for anything else.
    pub fn parse_color(&self, value: &str) -> Option<Color> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex);
        }

        match value.to_lowercase().as_str() {
            "good" => Some(self.good),
            "average" => Some(self.average),
            "bad" => Some(self.bad),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            "yellow" => Some(Color::Yellow),
            "orange" => Some(self.orange),
            "purple" | "violet" => Some(Color::Magenta),
            "cyan" | "teal" => Some(Color::Cyan),
            "white" => Some(Color::White),
            "black" => Some(Color::Black),
            "gray" | "grey" => Some(self.text_dimmed),
            _ => None,
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    // Byte slicing below relies on every char being a single ASCII byte
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        3 => {
            let expand = |s: &str| channel(s).map(|v| v * 17);
            Some(Color::Rgb {
                r: expand(&hex[0..1])?,
                g: expand(&hex[1..2])?,
                b: expand(&hex[2..3])?,
            })
        }
        _ => None,
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
