use ratatui::{prelude::*, widgets::*};

use super::{blank, chips, wrapped, SectionLines};
use crate::{config::Palette, content::Hero, typewriter::CURSOR};

/// Greeting, name, the rotating role line and the calls to action.
#[derive(Clone, Debug)]
pub struct HeroSection<'a> {
    pub owner: &'a str,
    pub hero: &'a Hero,
    /// Current output of the typewriter.
    pub typed: &'a str,
    pub palette: &'a Palette,
}

impl<'a> HeroSection<'a> {
    pub fn new(owner: &'a str, hero: &'a Hero, typed: &'a str, palette: &'a Palette) -> Self {
        Self {
            owner,
            hero,
            typed,
            palette,
        }
    }

    fn role_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(self.typed.to_string(), self.palette.style("accent_alt")),
            Span::styled(CURSOR, self.palette.style("cursor")),
        ])
    }
}

impl SectionLines for HeroSection<'_> {
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let palette = self.palette;
        let mut lines = vec![
            blank(),
            blank(),
            Line::styled(self.hero.greeting.clone(), palette.style("accent")),
            Line::styled(self.owner.to_string(), palette.style("heading")),
            self.role_line(),
            blank(),
        ];
        lines.extend(wrapped(&self.hero.tagline, palette.style("text"), width, 0));
        lines.push(blank());

        let actions: Vec<_> = self
            .hero
            .actions
            .iter()
            .map(|a| (format!("[ {} ]", a.label), palette.style("accent")))
            .collect();
        lines.extend(chips(&actions, width, "  "));

        let socials: Vec<_> = self
            .hero
            .socials
            .iter()
            .map(|s| (s.label.clone(), palette.style("link")))
            .collect();
        lines.extend(chips(&socials, width, " · "));
        lines.push(blank());
        lines
    }
}

impl Widget for HeroSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines(area.width as usize)).render(area, buf);
    }
}
