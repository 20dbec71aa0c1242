use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub ui: UiColors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiColors {
    pub background: ThemeColor,
    pub foreground: ThemeColor,
    pub border: ThemeColor,
    pub title: ThemeColor,
    pub line_numbers: ThemeColor,
    pub cursor_line: ThemeColor,
    pub selection: ThemeColor,
    pub selection_fg: ThemeColor,

    // Status bar
    pub status_bar_bg: ThemeColor,
    pub status_bar_fg: ThemeColor,
    pub file_bg: ThemeColor,
    pub file_fg: ThemeColor,
    pub indicator_bg: ThemeColor,
    pub indicator_fg: ThemeColor,
    pub error: ThemeColor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Rgb { r: u8, g: u8, b: u8 },
    Named(String),
}

impl ThemeColor {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        match self {
            ThemeColor::Rgb { r, g, b } => Color::Rgb(*r, *g, *b),
            ThemeColor::Named(name) => match name.to_lowercase().as_str() {
                "black" => Color::Black,
                "red" => Color::Red,
                "green" => Color::Green,
                "yellow" => Color::Yellow,
                "blue" => Color::Blue,
                "magenta" => Color::Magenta,
                "cyan" => Color::Cyan,
                "white" => Color::White,
                "gray" | "grey" => Color::Gray,
                "darkgray" | "darkgrey" => Color::DarkGray,
                _ => Self::parse_hex(name).unwrap_or(Color::White),
            },
        }
    }

    /// Parse `#RRGGBB`.
    fn parse_hex(name: &str) -> Option<Color> {
        let hex = name.strip_prefix('#').filter(|h| h.len() == 6)?;
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: String::from("dark"),
            ui: UiColors {
                background: ThemeColor::rgb(30, 30, 30),
                foreground: ThemeColor::rgb(212, 212, 212),
                border: ThemeColor::rgb(60, 60, 60),
                title: ThemeColor::rgb(100, 149, 237),
                line_numbers: ThemeColor::rgb(90, 90, 90),
                cursor_line: ThemeColor::rgb(40, 40, 40),
                selection: ThemeColor::rgb(38, 79, 120),
                selection_fg: ThemeColor::rgb(255, 255, 255),
                status_bar_bg: ThemeColor::rgb(0, 122, 204),
                status_bar_fg: ThemeColor::rgb(255, 255, 255),
                file_bg: ThemeColor::rgb(45, 45, 45),
                file_fg: ThemeColor::rgb(212, 212, 212),
                indicator_bg: ThemeColor::rgb(22, 130, 93),
                indicator_fg: ThemeColor::rgb(255, 255, 255),
                error: ThemeColor::rgb(244, 71, 71),
            },
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: String::from("gruvbox"),
            ui: UiColors {
                background: ThemeColor::rgb(40, 40, 40),
                foreground: ThemeColor::rgb(235, 219, 178),
                border: ThemeColor::rgb(80, 73, 69),
                title: ThemeColor::rgb(215, 153, 33),
                line_numbers: ThemeColor::rgb(124, 111, 100),
                cursor_line: ThemeColor::rgb(60, 56, 54),
                selection: ThemeColor::rgb(80, 73, 69),
                selection_fg: ThemeColor::rgb(250, 189, 47),
                status_bar_bg: ThemeColor::rgb(50, 48, 47),
                status_bar_fg: ThemeColor::rgb(168, 153, 132),
                file_bg: ThemeColor::rgb(60, 56, 54),
                file_fg: ThemeColor::rgb(235, 219, 178),
                indicator_bg: ThemeColor::rgb(131, 165, 152),
                indicator_fg: ThemeColor::rgb(40, 40, 40),
                error: ThemeColor::rgb(251, 73, 52),
            },
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            _ => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::gruvbox()
    }
}
