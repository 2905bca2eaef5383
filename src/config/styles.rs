use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Deserializer};

use crate::{content::parse_hex_color, theme::Theme};

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<Theme, HashMap<String, Style>>);

impl Styles {
    pub fn palette(&self, theme: Theme) -> Palette {
        Palette(self.get(&theme).cloned().unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<Theme, HashMap<String, String>>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(theme, inner_map)| {
                let converted_inner_map = inner_map
                    .into_iter()
                    .map(|(name, style)| (name, parse_style(&style)))
                    .collect();
                (theme, converted_inner_map)
            })
            .collect();

        Ok(Styles(styles))
    }
}

/// Named styles for one theme.
#[derive(Clone, Debug, Default, PartialEq, Deref, DerefMut)]
pub struct Palette(pub HashMap<String, Style>);

impl Palette {
    /// Unknown names resolve to the terminal default.
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

/// Parses strings like `bold #60a5fa on #111827` or `underline cyan`.
pub fn parse_style(line: &str) -> Style {
    let (foreground, background) =
        line.split_at(line.to_lowercase().find("on ").unwrap_or(line.len()));
    let foreground = process_color_string(foreground);
    let background = process_color_string(&background.replacen("on ", "", 1));

    let mut style = Style::default();
    if let Some(fg) = parse_color(&foreground.0) {
        style = style.fg(fg);
    }
    if let Some(bg) = parse_color(&background.0) {
        style = style.bg(bg);
    }
    style = style.add_modifier(foreground.1 | background.1);
    style
}

fn process_color_string(color_str: &str) -> (String, Modifier) {
    let mut modifiers = Modifier::empty();
    let mut color = Vec::new();
    for word in color_str.split_whitespace() {
        match word.to_lowercase().as_str() {
            "bold" => modifiers |= Modifier::BOLD,
            "dim" => modifiers |= Modifier::DIM,
            "italic" => modifiers |= Modifier::ITALIC,
            "underline" | "underlined" => modifiers |= Modifier::UNDERLINED,
            "inverse" | "reversed" => modifiers |= Modifier::REVERSED,
            _ => color.push(word),
        }
    }
    (color.join(" "), modifiers)
}

fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') {
        return parse_hex_color(s);
    }
    let s = s.to_lowercase();
    if let Some(c) = s.strip_prefix("color").filter(|c| !c.is_empty()) {
        return c.parse::<u8>().ok().map(Color::Indexed);
    }
    if let Some(c) = s.strip_prefix("gray").filter(|c| !c.is_empty()) {
        let c = c.parse::<u8>().ok()?;
        return (c < 24).then(|| Color::Indexed(232 + c));
    }
    if let Some(rgb) = s.strip_prefix("rgb") {
        let digits: Vec<u8> = rgb
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<_>>()?;
        return match digits[..] {
            [r, g, b] if r < 6 && g < 6 && b < 6 => Some(Color::Indexed(16 + r * 36 + g * 6 + b)),
            _ => None,
        };
    }
    match s.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => None,
    }
}
