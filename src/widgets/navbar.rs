use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{config::Palette, section::Section, theme::Theme};

/// Single-row bar with the owner's name, section links and the theme icon.
///
/// When the links do not fit, a menu hint replaces them.
#[derive(Clone, Debug)]
pub struct Navbar<'a> {
    pub owner: &'a str,
    pub active: Option<Section>,
    pub scrolled: bool,
    pub theme: Theme,
    pub palette: &'a Palette,
}

impl<'a> Navbar<'a> {
    pub fn new(
        owner: &'a str,
        active: Option<Section>,
        scrolled: bool,
        theme: Theme,
        palette: &'a Palette,
    ) -> Self {
        Self {
            owner,
            active,
            scrolled,
            theme,
            palette,
        }
    }

    fn links(&self) -> Vec<Span<'static>> {
        Section::navigable()
            .into_iter()
            .filter_map(|section| {
                let label = section.nav_label()?;
                let style = if Some(section) == self.active {
                    self.palette.style("nav_active")
                } else {
                    Style::default()
                };
                Some(Span::styled(format!(" {label} "), style))
            })
            .collect()
    }
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = if self.scrolled {
            self.palette.style("navbar_scrolled")
        } else {
            self.palette.style("navbar")
        };
        buf.set_style(area, base);

        let logo = Span::styled(format!(" {} ", self.owner), self.palette.style("accent"));
        let toggle = Span::raw(format!(" {} ", self.theme.icon()));

        let links = self.links();
        let links_width: usize = links.iter().map(|s| s.content.width()).sum();
        let fixed = logo.content.width() + toggle.content.width();

        let middle = if fixed + links_width <= area.width as usize {
            Line::from(links)
        } else {
            Line::from(Span::styled(" m: menu ", self.palette.style("muted")))
        };

        let [logo_area, middle_area, toggle_area] = Layout::horizontal([
            Constraint::Length(logo.content.width() as u16),
            Constraint::Fill(1),
            Constraint::Length(toggle.content.width() as u16),
        ])
        .areas(area);
        Paragraph::new(Line::from(logo)).render(logo_area, buf);
        Paragraph::new(middle)
            .alignment(Alignment::Right)
            .render(middle_area, buf);
        Paragraph::new(Line::from(toggle)).render(toggle_area, buf);
    }
}
