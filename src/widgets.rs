//! Page sections rendered as pre-wrapped lines
//!
//! Every section widget can produce its lines for a given width, so the page
//! can stack them into one scrollable buffer, and can also render itself
//! directly as a ratatui [`Widget`](ratatui::widgets::Widget).

mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod menu;
mod navbar;
mod projects;
mod skills;
mod status_bar;

use std::time::Instant;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

pub use about::AboutSection;
pub use contact::ContactSection;
pub use experience::ExperienceSection;
pub use footer::FooterSection;
pub use hero::HeroSection;
pub use menu::Menu;
pub use navbar::Navbar;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
pub use status_bar::StatusBar;

use crate::{
    config::Palette,
    model::reveal::{Reveal, Stage},
    text::wrap_words,
};

pub trait SectionLines {
    fn lines(&self, width: usize) -> Vec<Line<'static>>;
}

pub(crate) fn blank() -> Line<'static> {
    Line::default()
}

/// Centered heading, a short rule and the wrapped subheading.
pub(crate) fn heading(
    title: &str,
    subheading: &str,
    palette: &Palette,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        blank(),
        Line::styled(title.to_string(), palette.style("heading")).centered(),
        Line::styled("━━━━━━", palette.style("accent")).centered(),
    ];
    lines.extend(
        wrap_words(subheading, width)
            .into_iter()
            .filter(|l| !l.is_empty())
            .map(|l| Line::styled(l, palette.style("muted")).centered()),
    );
    lines.push(blank());
    lines
}

/// Word-wrapped text shifted right by `indent` columns.
pub(crate) fn wrapped(text: &str, style: Style, width: usize, indent: usize) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(indent).max(1);
    wrap_words(text, inner)
        .into_iter()
        .map(|l| Line::from(vec![Span::raw(" ".repeat(indent)), Span::styled(l, style)]))
        .collect()
}

/// Like [`wrapped`] but with a bullet hanging in front of the first line.
pub(crate) fn bulleted(
    bullet: &str,
    bullet_style: Style,
    text: &str,
    style: Style,
    width: usize,
    indent: usize,
) -> Vec<Line<'static>> {
    let hang = indent + bullet.chars().count() + 1;
    let mut lines = wrapped(text, style, width, hang);
    if let Some(first) = lines.first_mut() {
        first.spans[0] = Span::raw(" ".repeat(indent));
        first
            .spans
            .insert(1, Span::styled(format!("{bullet} "), bullet_style));
    }
    lines
}

/// Horizontal row of labels, wrapped onto more lines when too wide.
pub(crate) fn chips(labels: &[(String, Style)], width: usize, separator: &str) -> Vec<Line<'static>> {
    let sep_width = separator.chars().count();
    let mut lines = vec![];
    let mut spans: Vec<Span<'static>> = vec![];
    let mut used = 0;
    for (label, style) in labels {
        let w = unicode_width::UnicodeWidthStr::width(label.as_str());
        if !spans.is_empty() && used + sep_width + w > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if !spans.is_empty() {
            spans.push(Span::raw(separator.to_string()));
            used += sep_width;
        }
        spans.push(Span::styled(label.clone(), *style));
        used += w;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Lines past this index enter together with it.
pub const STAGGERED_LINES: usize = 12;

/// Applies the entrance animation: hidden lines are blanked, entering ones dimmed.
pub fn reveal_lines(lines: Vec<Line<'static>>, reveal: &Reveal, now: Instant) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| match reveal.stage(i.min(STAGGERED_LINES), now) {
            Stage::Hidden => blank(),
            Stage::Entering => line.patch_style(Style::new().add_modifier(Modifier::DIM)),
            Stage::Shown => line,
        })
        .collect()
}

pub(crate) fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_heading_is_centered() {
        let lines = heading("About Me", "Short intro", &Palette::default(), 40);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["", "About Me", "━━━━━━", "Short intro", ""]);
        assert_eq!(lines[1].alignment, Some(ratatui::layout::Alignment::Center));
    }

    #[test]
    fn test_bulleted_hangs_continuation_lines() {
        let lines = bulleted("▸", Style::default(), "one two three", Style::default(), 10, 2);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["  ▸ one", "    two", "    three"]);
    }

    #[test]
    fn test_chips_wrap() {
        let labels: Vec<(String, Style)> = ["React", "Node.js", "MongoDB"]
            .iter()
            .map(|l| (l.to_string(), Style::default()))
            .collect();
        let texts: Vec<String> = chips(&labels, 16, " · ").iter().map(line_text).collect();
        assert_eq!(texts, vec!["React · Node.js", "MongoDB"]);
    }

    #[test]
    fn test_reveal_lines() {
        let mut reveal = Reveal::new(Duration::from_millis(100), Duration::from_millis(100));
        let now = Instant::now();
        reveal.start(now);
        let lines = vec![Line::raw("a"), Line::raw("b"), Line::raw("c")];

        let shown = reveal_lines(lines, &reveal, now + Duration::from_millis(150));
        assert_eq!(line_text(&shown[0]), "a");
        assert_eq!(shown[0].style, Style::default());
        assert_eq!(line_text(&shown[1]), "b");
        assert_eq!(shown[1].style, Style::default().add_modifier(Modifier::DIM));
        assert_eq!(line_text(&shown[2]), "");
    }
}
