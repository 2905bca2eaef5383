use ratatui::{prelude::*, widgets::*};

use super::{blank, chips, wrapped, SectionLines};
use crate::{config::Palette, content::Footer, section::Section};

#[derive(Clone, Debug)]
pub struct FooterSection<'a> {
    pub owner: &'a str,
    pub footer: &'a Footer,
    pub year: i32,
    pub palette: &'a Palette,
}

impl<'a> FooterSection<'a> {
    pub fn new(owner: &'a str, footer: &'a Footer, year: i32, palette: &'a Palette) -> Self {
        Self {
            owner,
            footer,
            year,
            palette,
        }
    }

    pub fn copyright(&self) -> String {
        format!("© {} {}. Made with ♥", self.year, self.owner)
    }
}

impl SectionLines for FooterSection<'_> {
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let palette = self.palette;
        let mut lines = vec![
            Line::styled("─".repeat(width), palette.style("border")),
            Line::styled(self.owner.to_string(), palette.style("heading")),
        ];
        lines.extend(wrapped(&self.footer.tagline, palette.style("muted"), width, 0));
        lines.push(blank());

        let quick_links: Vec<_> = Section::navigable()
            .iter()
            .filter_map(|s| s.nav_label())
            .map(|label| (label.to_string(), palette.style("text")))
            .collect();
        lines.extend(chips(&quick_links, width, " · "));

        let links: Vec<_> = self
            .footer
            .links
            .iter()
            .map(|l| (l.label.clone(), palette.style("link")))
            .collect();
        lines.extend(chips(&links, width, " · "));
        lines.push(blank());
        lines.push(Line::styled(self.copyright(), palette.style("muted")).centered());
        lines
    }
}

impl Widget for FooterSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines(area.width as usize)).render(area, buf);
    }
}
