use ratatui::{prelude::*, widgets::*};

use crate::{config::Palette, section::Section};

/// Popup listing the sections, used on narrow terminals and from the keyboard.
#[derive(Clone, Debug)]
pub struct Menu<'a> {
    pub selected: Section,
    pub palette: &'a Palette,
}

impl<'a> Menu<'a> {
    pub fn new(selected: Section, palette: &'a Palette) -> Self {
        Self { selected, palette }
    }

    /// Size the popup wants, including its border.
    pub fn size() -> (u16, u16) {
        let width = Section::navigable()
            .iter()
            .filter_map(|s| s.nav_label())
            .map(|l| l.len() as u16)
            .max()
            .unwrap_or(0)
            + 8;
        (width, Section::navigable().len() as u16 + 2)
    }
}

impl Widget for Menu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = Section::navigable()
            .into_iter()
            .filter_map(|s| {
                let label = s.nav_label()?;
                Some(ListItem::new(format!("{} {label}", s.index() + 1)))
            })
            .collect();
        let selected = Section::navigable()
            .iter()
            .position(|s| *s == self.selected);

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.palette.style("border"))
                    .title("Menu"),
            )
            .style(self.palette.style("background"))
            .highlight_style(self.palette.style("nav_active").add_modifier(Modifier::BOLD))
            .highlight_symbol("› ");

        Clear.render(area, buf);
        let mut state = ListState::default().with_selected(selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
