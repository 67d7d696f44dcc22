use colored::{Color, Colorize};

use crate::resolver::Answer;

const TITLE: &str = "ShizuAi";
const SUBTITLE: &str = "Assistant Rust (hors ligne + recherche web DuckDuckGo optionnelle)";
const PALETTE_NOTICE: &str = "Nuances de gris et de rouge activées.";

/// Read-only color scheme handed to the terminal UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub enabled: bool,
    /// Colors cycled character by character over the title
    pub gradient: [Color; 3],
    pub web: Color,
    pub offline: Color,
    pub muted: Color,
}

impl Palette {
    /// Grey and red shades, or no colors at all when `enabled` is false.
    pub fn grey_red(enabled: bool) -> Self {
        Self {
            enabled,
            gradient: [Color::BrightBlack, Color::Red, Color::BrightRed],
            web: Color::Red,
            offline: Color::BrightBlack,
            muted: Color::BrightBlack,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn gradient(&self, text: &str) -> String {
        text.chars()
            .enumerate()
            .map(|(i, ch)| self.paint(&ch.to_string(), self.gradient[i % self.gradient.len()]))
            .collect()
    }
}

/// Terminal output for answers and the session banner.
pub struct UIHandler {
    palette: Palette,
}

impl UIHandler {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn banner(&self) -> String {
        if !self.palette.enabled {
            return TITLE.to_string();
        }
        [
            self.palette.gradient(TITLE),
            self.palette.paint(SUBTITLE, self.palette.muted),
            self.palette.paint(PALETTE_NOTICE, self.palette.muted),
        ]
        .join("\n")
    }

    /// `[Web]` or `[Offline]`, colored per palette
    pub fn tag(&self, used_web: bool) -> String {
        if used_web {
            self.palette.paint("[Web]", self.palette.web)
        } else {
            self.palette.paint("[Offline]", self.palette.offline)
        }
    }

    pub fn render_answer(&self, answer: &Answer) -> String {
        format!("{} {}", self.tag(answer.used_web), answer.reply)
    }
}
