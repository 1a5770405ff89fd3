//! Icon glyphs
//!
//! Terminal stand-ins for the icon font used by the web panel.

/// Named icons used by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Ambulance,
    Book,
    Times,
    ToggleOn,
    ToggleOff,
    CheckSquare,
    Square,
    BroadcastTower,
    Slash,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Ambulance => "✚",
            Icon::Book => "▤",
            Icon::Times => "✕",
            Icon::ToggleOn => "◉",
            Icon::ToggleOff => "○",
            Icon::CheckSquare => "☑",
            Icon::Square => "☐",
            Icon::BroadcastTower => "((•))",
            Icon::Slash => "╱",
        }
    }
}
